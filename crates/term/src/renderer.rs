//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is drawn in full; later frames only rewrite the rows that changed.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal to the state before [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disabling raw mode")
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_changed_rows_into(prev, fb, &mut self.buf)?;
            }
            _ => {
                self.buf
                    .queue(terminal::Clear(terminal::ClearType::All))?;
                encode_rows_into(fb, 0..fb.height(), &mut self.buf)?;
            }
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Rows whose contents differ between two equally sized framebuffers.
pub fn changed_rows(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<u16> {
    (0..next.height())
        .filter(|&y| prev.row(y) != next.row(y))
        .collect()
}

/// Encode only the rows that changed since `prev`.
pub fn encode_changed_rows_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    encode_rows_into(next, changed_rows(prev, next), out)
}

/// Encode the given rows of `fb` as crossterm commands, without touching stdout.
pub fn encode_rows_into(
    fb: &FrameBuffer,
    rows: impl IntoIterator<Item = u16>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<CellStyle> = None;
    for y in rows {
        let Some(row) = fb.row(y) else { continue };
        out.queue(cursor::MoveTo(0, y))?;
        for cell in row {
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_modified_rows_are_reported() {
        let prev = FrameBuffer::new(4, 3);
        let mut next = prev.clone();
        next.put_char(2, 1, 'X', CellStyle::default());

        assert_eq!(changed_rows(&prev, &next), vec![1]);
        assert!(changed_rows(&prev, &prev).is_empty());
    }

    #[test]
    fn encoding_unchanged_frame_writes_no_text() {
        let fb = FrameBuffer::new(4, 3);
        let mut out = Vec::new();
        encode_changed_rows_into(&fb, &fb, &mut out).unwrap();

        // Only the trailing style reset remains.
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(' '));
    }

    #[test]
    fn encoding_a_row_prints_its_characters() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default());
        let mut out = Vec::new();
        encode_rows_into(&fb, [0], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("abc"));
    }
}
