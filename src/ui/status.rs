//! Status bar widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::text_measure;

use super::{styles, RenderState};

/// Draw the status bar
pub fn draw_status(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut spans = vec![];

    // App name
    spans.push(Span::styled(" flexchat ", styles::brand_style()));
    spans.push(Span::styled(" | ", styles::status_style()));

    // Message count
    let count = state.messages.len();
    let label = if count == 1 { "message" } else { "messages" };
    spans.push(Span::styled(
        format!("{} {}", count, label),
        styles::count_style(),
    ));

    // Status message
    if let Some(msg) = state.status_message {
        spans.push(Span::styled(" | ", styles::status_style()));
        spans.push(Span::styled(msg.to_string(), styles::status_style()));
    }

    // Key hints (right aligned)
    let hints = "Ctrl+Q quit · /help ";

    // Calculate padding to right-align
    let left_len: usize = spans
        .iter()
        .map(|s| text_measure::display_width(&s.content))
        .sum();
    let hints_len = text_measure::display_width(hints);
    let padding = (area.width as usize).saturating_sub(left_len + hints_len);
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.push(Span::styled(hints, styles::hint_style()));

    let paragraph = Paragraph::new(Line::from(spans));

    frame.render_widget(paragraph, area);
}
