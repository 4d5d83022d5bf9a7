//! TerminalRenderer: flushes a [`Screen`] to the real terminal
//!
//! Owns terminal setup and teardown, including mouse capture, which the
//! drag gesture depends on. Drawing is a full-screen repaint with style
//! runs coalesced; card screens are small enough that diffing is not
//! worth the bookkeeping.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::screen::{Screen, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.flush()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Paint the whole screen. Style changes are only emitted when the
    /// style actually changes between cells.
    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Style> = None;
        for y in 0..screen.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..screen.width() {
                let cell = screen.get(x, y).unwrap_or_default();
                if current != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(style.fg))?;
        self.stdout.queue(SetBackgroundColor(style.bg))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    // Best-effort restore if the main loop bailed before calling exit.
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
