//! Input field widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::text_measure;

use super::{styles, RenderState};

/// Draw the input area
pub fn draw_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .title(" Message ");

    let input = state.input;
    let cursor_pos = state.cursor_position.min(input.len());
    let (before_cursor, after_cursor) = input.split_at(cursor_pos);

    // Build input line with vertical bar cursor; empty input shows the
    // placeholder behind the cursor instead.
    let mut spans = vec![Span::styled("  ", styles::input_style())]; // Left padding
    let mut used = 2 + 1; // padding + cursor cell
    if input.is_empty() {
        spans.push(Span::styled("│", styles::cursor_style()));
        spans.push(Span::styled("Message", styles::placeholder_style()));
        used += text_measure::display_width("Message");
    } else {
        spans.push(Span::styled(before_cursor.to_string(), styles::input_style()));
        spans.push(Span::styled("│", styles::cursor_style()));
        spans.push(Span::styled(after_cursor.to_string(), styles::input_style()));
        used += text_measure::display_width(input);
    }

    // Mic indicator switches to send once there is something to submit.
    let (indicator, indicator_style) = if input.is_empty() {
        ("🎤", styles::mic_style())
    } else {
        ("➤", styles::send_style())
    };
    let indicator_width = text_measure::display_width(indicator);
    let inner_width = area.width.saturating_sub(2) as usize;
    let padding = inner_width.saturating_sub(used + indicator_width + 1);
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(indicator, indicator_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(paragraph, area);

    // Set cursor position (accounting for border + padding)
    let x = area.x + 1 + 2 + text_measure::display_width(before_cursor) as u16;
    let y = area.y + 1;
    if x < area.x + area.width - 1 {
        frame.set_cursor_position((x, y));
    }
}
