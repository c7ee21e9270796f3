use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Block of terminal lines redrawn in place
#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: usize,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region with `content`
    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        self.erase(out)?;
        let mut content = content.to_string();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        out.write_all(content.as_bytes())?;
        out.flush()?;

        self.last_lines = content.matches('\n').count();
        Ok(())
    }

    /// Replace the region with `line` and stop tracking it
    pub fn commit(&mut self, out: &mut impl Write, line: &str) -> io::Result<()> {
        self.update(out, line)?;
        self.last_lines = 0;
        Ok(())
    }

    fn erase(&mut self, out: &mut impl Write) -> io::Result<()> {
        let lines = self.last_lines.min(u16::MAX as usize) as u16;
        if lines == 0 {
            return Ok(());
        }
        out.queue(cursor::MoveUp(lines))?;
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.last_lines = 0;
        Ok(())
    }
}
