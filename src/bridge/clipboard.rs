use std::io::Write;

use crate::bridge::errors::BridgeError;
use crate::bridge::ClipboardBridge;

const PANEL_RULE: &str = "----------------------------------------";

/// Shows the text framed in a share panel for the user to copy from the terminal.
pub struct PanelClipboard<W: Write> {
    output: W
}

impl<W: Write> PanelClipboard<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> ClipboardBridge for PanelClipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), BridgeError> {
        writeln!(self.output, "{PANEL_RULE}")?;

        if !text.is_empty() {
            writeln!(self.output, "{text}")?;
        }

        writeln!(self.output, "{PANEL_RULE}")?;
        self.output.flush()?;

        Ok(())
    }
}
