//! Two-child flow layout for message bubbles
//! Pure measure/place pass, extracted for testability

use thiserror::Error;

/// A content block size in terminal cells, resolved by a measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Position of a child relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: u16,
    pub y: u16,
}

impl Offset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Width/height bounds handed down by the parent layout.
///
/// Minimums never exceed the corresponding maximums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub min_width: u16,
    pub max_width: u16,
    pub min_height: u16,
    pub max_height: u16,
}

impl Constraints {
    /// Bounds with no minimum.
    pub fn loose(max_width: u16, max_height: u16) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Clamp a size into these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }
}

/// A content block that can report its size under given constraints.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> Size;
}

/// Receives the final offset assigned to a child during the place phase.
pub trait Placer {
    fn place(&mut self, offset: Offset);
}

/// How the two children ended up arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Both children share one row, the second trailing the first.
    SideBySide,
    /// The second child sits on a new line below the first, right-aligned.
    Stacked,
}

/// Result of a layout pass: container size plus one offset per child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleLayout {
    pub placement: Placement,
    pub size: Size,
    pub offsets: [Offset; 2],
}

impl BubbleLayout {
    /// Hand each child its final offset.
    pub fn place(&self, first: &mut dyn Placer, second: &mut dyn Placer) {
        first.place(self.offsets[0]);
        second.place(self.offsets[1]);
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout is only defined for a text block plus a metadata block.
    #[error("bubble layout requires exactly 2 children, got {actual}")]
    InvalidChildCount { actual: usize },
}

/// Measure two children against `constraints` and arrange them.
///
/// The children share a row when the width bound strictly exceeds their
/// combined natural width. Otherwise the second child wraps to its own
/// right-aligned line directly below the first, and the container spans
/// the full width bound.
pub fn layout(
    constraints: Constraints,
    children: &[&dyn Measurable],
) -> Result<BubbleLayout, LayoutError> {
    let [first, second] = children else {
        return Err(LayoutError::InvalidChildCount {
            actual: children.len(),
        });
    };

    // Both children are measured independently against the same bounds.
    let a = first.measure(constraints);
    let b = second.measure(constraints);

    let max_width = constraints.max_width;
    let total = Size::new(
        a.width.saturating_add(b.width),
        a.height.saturating_add(b.height),
    );

    let result = if max_width > total.width {
        let height = a.height.max(b.height);
        BubbleLayout {
            placement: Placement::SideBySide,
            size: Size::new(total.width, height),
            offsets: [
                Offset::new(0, 0),
                // Trailing child is bottom-aligned within the shared row.
                Offset::new(a.width, height - b.height),
            ],
        }
    } else {
        BubbleLayout {
            placement: Placement::Stacked,
            size: Size::new(max_width, total.height),
            offsets: [
                Offset::new(0, 0),
                // Right-aligned on the line below the first child.
                Offset::new(max_width.saturating_sub(b.width), a.height),
            ],
        }
    };

    tracing::trace!(
        max_width,
        placement = ?result.placement,
        width = result.size.width,
        height = result.size.height,
        "bubble layout resolved"
    );

    Ok(result)
}
