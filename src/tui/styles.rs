//! Color palette and styles for the terminal interface.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::OutcomeCode;

/// Clinical theme color palette.
pub struct ClinicalTheme;

impl ClinicalTheme {
    /// Indigo - primary accent
    pub const PRIMARY: Color = Color::Rgb(99, 102, 241); // #6366F1

    /// Lighter indigo for focus highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(165, 180, 252); // #A5B4FC

    /// Light slate for borders
    pub const BORDER: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Emerald - success / recorded input
    pub const SUCCESS: Color = Color::Rgb(52, 211, 153); // #34D399

    /// Amber - warnings / serious outcomes
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Rose - errors / fatal outcomes
    pub const DANGER: Color = Color::Rgb(251, 113, 133); // #FB7185

    /// Sky - informational
    pub const INFO: Color = Color::Rgb(56, 189, 248); // #38BDF8

    /// Primary text
    pub const TEXT: Color = Color::Rgb(241, 245, 249); // #F1F5F9

    /// Secondary text
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text (hints, placeholders)
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for a predicted outcome, by clinical severity.
    #[must_use]
    pub fn severity(outcome: OutcomeCode) -> Style {
        match outcome {
            OutcomeCode::Death | OutcomeCode::LifeThreatening => Self::danger(),
            OutcomeCode::Hospitalization | OutcomeCode::Disability => Self::warning(),
            OutcomeCode::Intervention => Self::info(),
        }
    }
}
