//! App bar widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{styles, RenderState};

/// Draw the title bar across the top of the screen
pub fn draw_appbar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let line = Line::from(vec![Span::styled(
        format!(" {}", state.title),
        styles::appbar_title_style(),
    )]);

    // The bar color fills the full width, like a chat app header.
    let paragraph = Paragraph::new(line).style(styles::appbar_style());

    frame.render_widget(paragraph, area);
}
