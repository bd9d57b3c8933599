//! Message bubble widget
//!
//! A bubble holds two children: the message body and a trailing metadata
//! block (send time plus delivery tick). The bubble layout pass decides
//! whether the metadata sits beside the body or wraps to its own
//! right-aligned line, so short messages stay on one row while long ones
//! push their timestamp below the text.

use anyhow::Result;
use ratatui::text::{Line, Span};
use tracing::trace;

use crate::app::{ChatMessage, MessageStatus};
use crate::bubble_layout::{self, Constraints, Measurable, Offset, Placer, Size};
use crate::text_measure;

use super::styles;

/// Horizontal padding inside the bubble, in cells per side.
pub(super) const PADDING: u16 = 1;

/// Message body, pre-wrapped to the width the bubble may occupy.
struct BodyContent {
    lines: Vec<String>,
}

impl BodyContent {
    fn new(body: &str, max_width: u16) -> Self {
        Self {
            lines: text_measure::wrap_words(body, max_width as usize),
        }
    }
}

impl Measurable for BodyContent {
    fn measure(&self, constraints: Constraints) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| text_measure::display_width(line))
            .max()
            .unwrap_or(0);
        constraints.constrain(Size::new(clamp_cells(width), clamp_cells(self.lines.len())))
    }
}

/// Send time plus delivery tick, always a single row.
struct MetaContent {
    time: String,
    tick: &'static str,
}

impl MetaContent {
    fn new(message: &ChatMessage) -> Self {
        Self {
            time: message.sent_at.format("%I:%M %p").to_string(),
            tick: tick_glyph(message.status),
        }
    }

    fn width(&self) -> u16 {
        let cells =
            text_measure::display_width(&self.time) + 1 + text_measure::display_width(self.tick);
        clamp_cells(cells)
    }
}

impl Measurable for MetaContent {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.width(), 1))
    }
}

fn tick_glyph(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Received => "✓",
        MessageStatus::Read => "✓✓",
    }
}

fn clamp_cells(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

/// Records the offset a child was assigned during the place phase.
#[derive(Default)]
struct Slot {
    offset: Offset,
}

impl Placer for Slot {
    fn place(&mut self, offset: Offset) {
        self.offset = offset;
    }
}

/// Render one message as right-aligned bubble rows.
///
/// `max_content_width` bounds the bubble content, excluding padding.
pub fn bubble_lines(message: &ChatMessage, max_content_width: u16) -> Result<Vec<Line<'static>>> {
    let body = BodyContent::new(&message.body, max_content_width);
    trace!(
        id = message.id,
        line_count = body.lines.len(),
        "measured message body"
    );
    let meta = MetaContent::new(message);

    let constraints = Constraints::loose(max_content_width, u16::MAX);
    let layout = bubble_layout::layout(constraints, &[&body, &meta])?;

    let mut body_slot = Slot::default();
    let mut meta_slot = Slot::default();
    layout.place(&mut body_slot, &mut meta_slot);

    let rows = (0..layout.size.height)
        .map(|y| {
            build_row(
                &body,
                &meta,
                message.status,
                body_slot.offset,
                meta_slot.offset,
                y,
                layout.size.width,
            )
        })
        .collect();
    Ok(rows)
}

/// Build one visual row of the bubble from the placed children.
fn build_row(
    body: &BodyContent,
    meta: &MetaContent,
    status: MessageStatus,
    body_at: Offset,
    meta_at: Offset,
    y: u16,
    container_width: u16,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " ".repeat(PADDING as usize),
        styles::bubble_style(),
    )];
    let mut filled = 0u16;

    let body_row = y
        .checked_sub(body_at.y)
        .and_then(|i| body.lines.get(i as usize));
    if let Some(text) = body_row {
        pad_to(&mut spans, &mut filled, body_at.x);
        let width = clamp_cells(text_measure::display_width(text));
        spans.push(Span::styled(text.clone(), styles::bubble_style()));
        filled = filled.saturating_add(width);
    }

    if meta_at.y == y {
        pad_to(&mut spans, &mut filled, meta_at.x);
        spans.push(Span::styled(meta.time.clone(), styles::bubble_time_style()));
        spans.push(Span::styled(" ", styles::bubble_time_style()));
        let tick_style = match status {
            MessageStatus::Received => styles::tick_received_style(),
            MessageStatus::Read => styles::tick_read_style(),
        };
        spans.push(Span::styled(tick_glyph(status), tick_style));
        filled = filled.saturating_add(meta.width());
    }

    pad_to(&mut spans, &mut filled, container_width);
    spans.push(Span::styled(
        " ".repeat(PADDING as usize),
        styles::bubble_style(),
    ));
    // Right margin outside the bubble.
    spans.push(Span::raw(" "));

    Line::from(spans).right_aligned()
}

/// Fill with bubble background up to the target column.
fn pad_to(spans: &mut Vec<Span<'static>>, filled: &mut u16, target: u16) {
    if target > *filled {
        spans.push(Span::styled(
            " ".repeat((target - *filled) as usize),
            styles::bubble_style(),
        ));
        *filled = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Alignment;

    fn message(body: &str, status: MessageStatus) -> ChatMessage {
        ChatMessage {
            id: 1,
            body: body.to_string(),
            sent_at: chrono::Local::now(),
            status,
        }
    }

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // The formatted time is always 8 cells, the tick 1 or 2, plus the
    // separating space: 10 cells of metadata for a received message.

    #[test]
    fn test_short_message_is_one_row() {
        let rows = bubble_lines(&message("hi", MessageStatus::Received), 40).unwrap();
        assert_eq!(rows.len(), 1);

        let text = row_text(&rows[0]);
        assert!(text.contains("hi"));
        assert!(text.contains('✓'));
    }

    #[test]
    fn test_long_message_wraps_meta_to_own_row() {
        // Body wraps to several lines of up to 12 cells; 12 + 10 >= 12,
        // so the metadata lands on its own trailing row.
        let rows =
            bubble_lines(&message("a rather long message body", MessageStatus::Received), 12)
                .unwrap();
        let last = row_text(rows.last().unwrap());
        assert!(last.contains('✓'));
        assert!(!last.contains("message"));

        // Every body word is still present across the rows.
        let all: String = rows.iter().map(row_text).collect();
        for word in ["a", "rather", "long", "message", "body"] {
            assert!(all.contains(word), "missing {word:?}");
        }
    }

    #[test]
    fn test_rows_are_right_aligned() {
        let rows = bubble_lines(&message("hi", MessageStatus::Received), 40).unwrap();
        assert_eq!(rows[0].alignment, Some(Alignment::Right));
    }

    #[test]
    fn test_read_status_uses_double_tick() {
        let rows = bubble_lines(&message("hi", MessageStatus::Read), 40).unwrap();
        assert!(row_text(&rows[0]).contains("✓✓"));
    }

    #[test]
    fn test_row_count_matches_body_plus_meta() {
        // Three body lines, stacked meta below.
        let rows = bubble_lines(&message("one\ntwo\nthree", MessageStatus::Received), 8).unwrap();
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_side_by_side_meta_shares_last_row() {
        // Two hard lines, each short; body width 5 plus meta 10 fits in 40.
        let rows = bubble_lines(&message("one\ntwo", MessageStatus::Received), 40).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(row_text(&rows[1]).contains('✓'));
        assert!(!row_text(&rows[0]).contains('✓'));
    }

    #[test]
    fn test_zero_width_constraint_still_renders() {
        let rows = bubble_lines(&message("hi", MessageStatus::Received), 0).unwrap();
        assert!(!rows.is_empty());
    }
}
