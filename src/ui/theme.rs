use crate::models::AlertSeverity;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const DANGER: Color = Color::Red;

    pub const TEMP_COLD: Color = Color::LightBlue;
    pub const TEMP_MILD: Color = Color::Green;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn severity(severity: AlertSeverity) -> Style {
        let color = match severity {
            AlertSeverity::Warning => Self::WARNING,
            AlertSeverity::Danger => Self::DANGER,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Same bands as the heat/cold risk thresholds.
    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 5.0 {
            Self::TEMP_COLD
        } else if temp_c < 30.0 {
            Self::TEMP_MILD
        } else if temp_c <= 40.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_bands_follow_risk_thresholds() {
        assert_eq!(Theme::temp_color(4.9), Theme::TEMP_COLD);
        assert_eq!(Theme::temp_color(28.0), Theme::TEMP_MILD);
        assert_eq!(Theme::temp_color(40.0), Theme::TEMP_WARM);
        assert_eq!(Theme::temp_color(40.1), Theme::TEMP_HOT);
    }

    #[test]
    fn danger_is_red() {
        assert_eq!(Theme::severity(AlertSeverity::Danger).fg, Some(Color::Red));
        assert_eq!(
            Theme::severity(AlertSeverity::Warning).fg,
            Some(Color::Yellow)
        );
    }
}
