//! Prediction result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::Prediction;
use crate::tui::styles::ClinicalTheme;

/// Result screen state.
#[derive(Debug, Clone, Default)]
pub enum ResultState {
    /// No prediction yet
    #[default]
    Idle,
    /// Completed with a prediction
    Complete { prediction: Prediction },
    /// Pipeline failure
    Error { message: String },
}

/// Render the result screen.
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);
    match state {
        ResultState::Idle => render_idle(f, chunks[1]),
        ResultState::Complete { prediction } => render_prediction(f, chunks[1], prediction),
        ResultState::Error { message } => render_error(f, chunks[1], message),
    }
    render_footer(f, chunks[2], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicalTheme::text()),
        Span::styled("Predicted Outcome", ClinicalTheme::title()),
        Span::styled(" │ FAERS Seriousness", ClinicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No prediction yet",
            ClinicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the case form and press Enter",
            ClinicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_prediction(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let block = Block::default()
        .title(Span::styled(" Prediction ", ClinicalTheme::focused()))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Outcome
            Constraint::Length(6), // Case summary
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let severity = ClinicalTheme::severity(prediction.outcome);
    let outcome_display = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(
                "Predicted Outcome: {} ({})",
                prediction.outcome.label(),
                prediction.outcome
            ),
            severity.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            prediction
                .created_at
                .format("recorded %Y-%m-%d %H:%M UTC")
                .to_string(),
            ClinicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(outcome_display, chunks[0]);

    let record = &prediction.record;
    let summary = Paragraph::new(vec![
        summary_line("Drug", record.drug.label()),
        summary_line("Age", &record.age_years.to_string()),
        summary_line("Sex", record.sex.label()),
        summary_line("Region", record.continent.code()),
        summary_line("Indication", record.indication.label()),
        summary_line("Organ system", record.organ_class.label()),
    ])
    .alignment(Alignment::Center);
    f.render_widget(summary, chunks[1]);
}

fn summary_line(name: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name}: "), ClinicalTheme::text_secondary()),
        Span::styled(value.to_string(), ClinicalTheme::text()),
    ])
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Prediction failed", ClinicalTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), ClinicalTheme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &ResultState) {
    let content = match state {
        ResultState::Error { .. } => Line::from(vec![
            Span::styled("[Enter] ", ClinicalTheme::key_hint()),
            Span::styled("Back to Form ", ClinicalTheme::key_desc()),
            Span::styled("[Esc] ", ClinicalTheme::key_hint()),
            Span::styled("Quit", ClinicalTheme::key_desc()),
        ]),
        _ => Line::from(vec![
            Span::styled("[Enter] ", ClinicalTheme::key_hint()),
            Span::styled("Back to Form ", ClinicalTheme::key_desc()),
            Span::styled("[N] ", ClinicalTheme::key_hint()),
            Span::styled("New Case ", ClinicalTheme::key_desc()),
            Span::styled("[Esc] ", ClinicalTheme::key_hint()),
            Span::styled("Quit", ClinicalTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(footer, area);
}
