use super::Color;

/// Semantic colors for form UIs. Like bare HTML defaults, the dark theme
/// guarantees readable contrast without any per-element styling.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub danger: Color,
    pub success: Color,
    pub border: Color,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            background: Color::oklch(0.15, 0.01, 250.0),
            surface: Color::oklch(0.22, 0.02, 250.0),
            foreground: Color::oklch(0.93, 0.01, 250.0),
            muted: Color::oklch(0.60, 0.01, 250.0),
            primary: Color::oklch(0.78, 0.10, 250.0),
            danger: Color::oklch(0.62, 0.18, 25.0),
            success: Color::oklch(0.72, 0.15, 150.0),
            border: Color::oklch(0.40, 0.02, 250.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
