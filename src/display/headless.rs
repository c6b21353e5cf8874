use crate::ant::Highlight;
use crate::display::{Display, Paint};
use crate::error::Result;

/// Display that draws nothing and records what it was asked to draw
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    pub draws: u64,
    pub frames: u64,
    pub last_status: String,
    /// Every ant paint in order: (x, y, highlight)
    pub ant_draws: Vec<(usize, usize, Highlight)>,
    pub waited_for_key: bool,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for HeadlessDisplay {
    fn draw(&mut self, x: usize, y: usize, paint: Paint) -> Result<()> {
        self.draws += 1;
        if let Paint::Ant(highlight) = paint {
            self.ant_draws.push((x, y, highlight));
        }
        Ok(())
    }

    fn draw_status(&mut self, text: &str) -> Result<()> {
        self.last_status.clear();
        self.last_status.push_str(text);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<()> {
        self.waited_for_key = true;
        Ok(())
    }
}
