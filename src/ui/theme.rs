//! Theme configuration

use iced::Color;

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.07, 0.09);
    pub const SURFACE: Color = Color::from_rgb(0.09, 0.11, 0.15);
    pub const BORDER: Color = Color::from_rgb(0.19, 0.21, 0.24);
    pub const PRIMARY: Color = Color::from_rgb(0.22, 0.55, 0.99);
    pub const PRIMARY_DISABLED: Color = Color::from_rgb(0.16, 0.27, 0.42);
    pub const TEXT: Color = Color::from_rgb(0.9, 0.93, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.58, 0.62);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.42, 0.46);

    // Verdict colors
    pub const DANGER: Color = Color::from_rgb(0.99, 0.65, 0.65);
    pub const DANGER_SURFACE: Color = Color {
        r: 0.5,
        g: 0.11,
        b: 0.11,
        a: 0.4,
    };
    pub const SAFE: Color = Color::from_rgb(0.43, 0.91, 0.72);
    pub const SAFE_SURFACE: Color = Color {
        r: 0.02,
        g: 0.37,
        b: 0.27,
        a: 0.4,
    };
}
