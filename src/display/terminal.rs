use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::Once;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
    tty::IsTty,
    QueueableCommand,
};

use crate::ant::Highlight;
use crate::display::{Display, Paint};
use crate::error::{Result, SimError};
use crate::world::Color;

/// Foreground/background pair for a paint
fn palette(paint: Paint) -> (style::Color, style::Color) {
    match paint {
        Paint::Cell(Color::White) => (style::Color::White, style::Color::White),
        Paint::Cell(Color::Black) => (style::Color::Black, style::Color::Black),
        Paint::Ant(Highlight::RedOnWhite) => (style::Color::Red, style::Color::White),
        Paint::Ant(Highlight::RedOnBlack) => (style::Color::Red, style::Color::Black),
    }
}

/// Ctrl-C arrives as a key event while raw mode has signals disabled
fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.code == KeyCode::Char('c')
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    out.queue(ResetColor)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()
}

static PANIC_HOOK: Once = Once::new();

/// Put the terminal back before the panic message is printed
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave_screen(&mut io::stdout());
            previous(info);
        }));
    });
}

fn coord(v: usize) -> io::Result<u16> {
    u16::try_from(v).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

/// Full-screen crossterm display: raw mode, alternate screen, hidden cursor
pub struct TerminalDisplay {
    stdout: Stdout,
    active: bool,
}

impl TerminalDisplay {
    /// Take over the terminal. Restored on drop.
    pub fn enter() -> Result<Self> {
        let mut display = Self {
            stdout: io::stdout(),
            active: false,
        };
        display.setup().map_err(SimError::DisplayInit)?;
        Ok(display)
    }

    fn setup(&mut self) -> io::Result<()> {
        if !self.stdout.is_tty() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdout is not a terminal",
            ));
        }
        install_panic_hook();
        terminal::enable_raw_mode()?;
        self.active = true;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        leave_screen(&mut self.stdout)
    }
}

impl Display for TerminalDisplay {
    fn draw(&mut self, x: usize, y: usize, paint: Paint) -> Result<()> {
        let (fg, bg) = palette(paint);
        self.stdout.queue(cursor::MoveTo(coord(x)?, coord(y)?))?;
        self.stdout.queue(SetForegroundColor(fg))?;
        self.stdout.queue(SetBackgroundColor(bg))?;
        self.stdout.queue(Print(paint.glyph()))?;
        Ok(())
    }

    fn draw_status(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print(text))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn idle(&mut self, delay: Duration) -> Result<()> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                if is_interrupt(&key) {
                    return Err(SimError::Interrupted);
                }
            }
        }
    }

    fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("failed to restore terminal: {}", err);
        }
    }
}
