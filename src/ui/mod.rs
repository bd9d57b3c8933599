//! UI components using ratatui

mod appbar;
mod bubble;
mod conversation;
mod input;
mod layout;
mod status;
mod styles;

pub use appbar::*;
pub use bubble::*;
pub use conversation::*;
pub use input::*;
pub use layout::*;
pub use status::*;
pub use styles::*;

use anyhow::Result;
use ratatui::Frame;

use crate::app::ChatMessage;

/// State needed for rendering (borrowed references)
pub struct RenderState<'a> {
    pub title: &'a str,
    pub messages: &'a [ChatMessage],
    pub input: &'a str,
    pub cursor_position: usize,
    pub scroll_offset: usize,
    pub status_message: Option<&'a str>,
}

/// Main draw function
pub fn draw(frame: &mut Frame, state: &RenderState) -> Result<()> {
    let chunks = create_layout(frame.area());

    // Draw app bar
    draw_appbar(frame, chunks[0], state);

    // Draw conversation area
    draw_conversation(frame, chunks[1], state)?;

    // Draw input area
    draw_input(frame, chunks[2], state);

    // Draw status bar
    draw_status(frame, chunks[3], state);

    Ok(())
}
