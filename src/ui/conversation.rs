//! Conversation view widget

use anyhow::Result;
use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{bubble, styles, RenderState};

/// Cells kept clear on the left of every bubble so even the widest one
/// reads as outgoing (the chat convention of a left inset).
const GUTTER: u16 = 12;

/// Right margin between a bubble and the view edge.
const MARGIN: u16 = 1;

/// Draw the conversation area
pub fn draw_conversation(frame: &mut Frame, area: Rect, state: &RenderState) -> Result<()> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style());

    let inner = block.inner(area);

    // Bubble content is bounded by the view minus gutter, margin and padding.
    let max_content_width = inner
        .width
        .saturating_sub(GUTTER + MARGIN + 2 * bubble::PADDING);

    // Build lines from messages
    let mut lines: Vec<Line> = Vec::new();
    for message in state.messages {
        lines.extend(bubble::bubble_lines(message, max_content_width)?);
        lines.push(Line::from(""));
    }

    // Calculate scroll
    let visible_height = inner.height as usize;
    let total_lines = lines.len();
    let scroll = if total_lines > visible_height {
        let max_scroll = total_lines.saturating_sub(visible_height);
        max_scroll.saturating_sub(state.scroll_offset)
    } else {
        0
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);
    Ok(())
}
