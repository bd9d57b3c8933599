//! UI styles and colors (Catppuccin theme)

use ratatui::style::{Color, Modifier, Style};

// Catppuccin Mocha palette
pub const ROSEWATER: Color = Color::Rgb(245, 224, 220);
pub const FLAMINGO: Color = Color::Rgb(242, 205, 205);
pub const PINK: Color = Color::Rgb(245, 194, 231);
pub const MAUVE: Color = Color::Rgb(203, 166, 247);
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const MAROON: Color = Color::Rgb(235, 160, 172);
pub const PEACH: Color = Color::Rgb(250, 179, 135);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const TEAL: Color = Color::Rgb(148, 226, 213);
pub const SKY: Color = Color::Rgb(137, 220, 235);
pub const SAPPHIRE: Color = Color::Rgb(116, 199, 236);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const LAVENDER: Color = Color::Rgb(180, 190, 254);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const SUBTEXT1: Color = Color::Rgb(186, 194, 222);
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
pub const OVERLAY2: Color = Color::Rgb(147, 153, 178);
pub const OVERLAY1: Color = Color::Rgb(127, 132, 156);
pub const OVERLAY0: Color = Color::Rgb(108, 112, 134);
pub const SURFACE2: Color = Color::Rgb(88, 91, 112);
pub const SURFACE1: Color = Color::Rgb(69, 71, 90);
pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
pub const BASE: Color = Color::Rgb(30, 30, 46);
pub const MANTLE: Color = Color::Rgb(24, 24, 37);
pub const CRUST: Color = Color::Rgb(17, 17, 27);

/// Outgoing bubble tint, a dark analog of the classic light green.
pub const BUBBLE: Color = Color::Rgb(46, 62, 48);

// App bar styles
pub fn appbar_style() -> Style {
    Style::default().bg(TEAL).fg(CRUST)
}

pub fn appbar_title_style() -> Style {
    Style::default().bg(TEAL).fg(CRUST).add_modifier(Modifier::BOLD)
}

// Bubble styles
pub fn bubble_style() -> Style {
    Style::default().bg(BUBBLE).fg(TEXT)
}

pub fn bubble_time_style() -> Style {
    Style::default().bg(BUBBLE).fg(OVERLAY1)
}

pub fn tick_received_style() -> Style {
    Style::default().bg(BUBBLE).fg(OVERLAY2)
}

pub fn tick_read_style() -> Style {
    Style::default().bg(BUBBLE).fg(SAPPHIRE)
}

// Input styles
pub fn input_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn cursor_style() -> Style {
    Style::default().fg(BASE).bg(TEXT)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(OVERLAY0).add_modifier(Modifier::ITALIC)
}

pub fn mic_style() -> Style {
    Style::default().fg(OVERLAY1)
}

pub fn send_style() -> Style {
    Style::default().fg(GREEN)
}

// Chrome styles
pub fn border_style() -> Style {
    Style::default().fg(SURFACE2)
}

pub fn status_style() -> Style {
    Style::default().fg(SUBTEXT0)
}

pub fn brand_style() -> Style {
    Style::default().fg(BLUE)
}

pub fn count_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn hint_style() -> Style {
    Style::default().fg(OVERLAY1)
}
