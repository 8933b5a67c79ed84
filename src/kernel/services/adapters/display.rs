use std::io::Write;

use crate::kernel::display::Display;
use crate::kernel::services::ports::DisplayPort;

/// Prints both display lines to any writer; used by `eval` and `replay`.
pub struct WriterDisplay<W: Write> {
    out: W,
}

impl<W: Write> WriterDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayPort for WriterDisplay<W> {
    fn present(&mut self, display: &Display) -> std::io::Result<()> {
        writeln!(self.out, "{}", display.expression)?;
        writeln!(self.out, "{}", display.preview)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/display.rs"]
mod tests;
