use ratatui::style::Color;

/// Warm terracotta palette. `positive`/`negative` carry the income/expense
/// semantics everywhere money is shown.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(235, 231, 224),
            text_muted: Color::Rgb(152, 146, 138),
            dim: Color::Rgb(118, 112, 104),
            accent: Color::Rgb(214, 143, 58),
            positive: Color::Rgb(110, 178, 104),
            negative: Color::Rgb(198, 88, 78),
            warning: Color::Rgb(219, 179, 82),
            error: Color::Rgb(224, 96, 96),
            border: Color::Rgb(62, 58, 50),
            border_focused: Color::Rgb(235, 170, 86),
            surface: Color::Rgb(26, 24, 20),
        }
    }
}
