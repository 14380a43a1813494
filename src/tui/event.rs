use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

use crate::error::Result;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Left click at a terminal cell
    Click { column: u16, row: u16 },
    /// Terminal resize event
    Resize,
    /// Poll timed out with nothing to read
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    pub fn poll(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Event::Tick));
        }

        let event = match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            event::Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(Event::Click {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            event::Event::Resize(_, _) => Some(Event::Resize),
            _ => None,
        };
        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        // ~60fps keeps the notification slide smooth
        Self::new(Duration::from_millis(16))
    }
}
