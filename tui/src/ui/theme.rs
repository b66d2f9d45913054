use ratatui::style::{Color, Modifier, Style};

/// Warm brown theme.
///
/// Base aesthetic:
/// - dark brown text on a light tan background
/// - lighter "card" panels
/// - mid brown for focus and the predict button
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(207, 182, 159);
    pub const CARD: Color = Color::Rgb(233, 219, 206);
    pub const FG_TEXT: Color = Color::Rgb(66, 38, 24);
    pub const FG_DARK: Color = Color::Rgb(105, 55, 19);
    pub const FG_MID: Color = Color::Rgb(164, 115, 64);

    // Accents
    pub const ACCENT_RED: Color = Color::Rgb(150, 30, 20);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_TEXT).bg(Self::BG)
    }

    /// Panel background.
    pub fn card() -> Style {
        Style::default().fg(Self::FG_TEXT).bg(Self::CARD)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_MID)
    }

    /// Border of the focused input.
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::FG_DARK)
            .add_modifier(Modifier::BOLD)
    }

    /// Titles (bold dark brown).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_DARK)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG_TEXT)
    }

    /// Placeholders and captions.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MID)
    }

    /// The predict button.
    pub fn button() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::FG_DARK)
            .add_modifier(Modifier::BOLD)
    }

    /// Input cursor.
    pub fn cursor() -> Style {
        Style::default().fg(Self::FG_DARK)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// The predicted price.
    pub fn metric() -> Style {
        Style::default()
            .fg(Self::FG_DARK)
            .add_modifier(Modifier::BOLD)
    }
}
