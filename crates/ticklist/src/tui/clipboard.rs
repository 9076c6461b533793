use std::io::{self, Write};

use anyhow::{Context, Result};
use arboard::Clipboard as ArboardClipboard;
use base64::{Engine as _, engine::general_purpose::STANDARD as Base64Standard};
use tracing::warn;

/// Write-only clipboard abstraction so tests can observe copies.
pub(super) trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    inner: ArboardClipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let inner = ArboardClipboard::new().context("failed to open the system clipboard")?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .context("failed to write to the system clipboard")
    }
}

/// Fallback for terminals without a reachable system clipboard (SSH and the
/// like): emit the text as an OSC 52 escape sequence and let the terminal
/// emulator handle it.
struct Osc52Clipboard;

impl ClipboardSink for Osc52Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let sequence = osc52_sequence(text);
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(sequence.as_bytes())
            .context("failed to emit the OSC 52 sequence")?;
        stdout
            .flush()
            .context("failed to flush the OSC 52 sequence")?;
        Ok(())
    }
}

pub(super) fn osc52_sequence(text: &str) -> String {
    let encoded = Base64Standard.encode(text);
    format!("\x1b]52;c;{encoded}\x07")
}

pub(super) fn default_clipboard() -> Box<dyn ClipboardSink> {
    match SystemClipboard::new() {
        Ok(cb) => Box::new(cb),
        Err(err) => {
            warn!("system clipboard unavailable: {err}; falling back to OSC 52");
            Box::new(Osc52Clipboard)
        }
    }
}
