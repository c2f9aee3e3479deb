//! Case data entry form.
//!
//! Seven closed-enum selections plus the free-text age field. Age is the
//! only input that can be invalid; problems surface as a footer warning
//! without blocking the rest of the form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::geography::{country_to_continent, default_country_index, COUNTRIES};
use crate::domain::{
    validate_age, CaseRecord, Dechallenge, Drug, IndicationCategory, OrganClass, Rechallenge, Sex,
};
use crate::tui::styles::ClinicalTheme;

/// The eight form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Drug,
    Age,
    Sex,
    Country,
    Indication,
    Dechallenge,
    Rechallenge,
    OrganClass,
}

impl Field {
    pub const ALL: [Self; 8] = [
        Self::Drug,
        Self::Age,
        Self::Sex,
        Self::Country,
        Self::Indication,
        Self::Dechallenge,
        Self::Rechallenge,
        Self::OrganClass,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drug => "Antidiabetic Drug",
            Self::Age => "Age in Years",
            Self::Sex => "Sex",
            Self::Country => "Country",
            Self::Indication => "Prescribed For",
            Self::Dechallenge => "Improved After Stopping?",
            Self::Rechallenge => "Returned After Restarting?",
            Self::OrganClass => "Affected Organ System",
        }
    }

    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Age => "1-120",
            Self::Country => "reporting country",
            _ => "←/→ to change",
        }
    }
}

/// Case form state.
pub struct CaseFormState {
    pub drug_idx: usize,
    pub age_input: String,
    pub sex_idx: usize,
    pub country_idx: usize,
    pub indication_idx: usize,
    pub dechallenge_idx: usize,
    pub rechallenge_idx: usize,
    pub organ_idx: usize,
    pub selected: usize,
    pub warning: Option<String>,
}

impl Default for CaseFormState {
    fn default() -> Self {
        Self {
            drug_idx: 0,
            age_input: String::new(),
            sex_idx: 0,
            country_idx: default_country_index(),
            indication_idx: 0,
            dechallenge_idx: 0,
            rechallenge_idx: 0,
            organ_idx: 0,
            selected: 0,
            warning: None,
        }
    }
}

impl CaseFormState {
    /// Move to the next field.
    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    /// Move to the previous field.
    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = Field::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    #[must_use]
    fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    /// Cycle the selected choice field; no-op on the age field.
    pub fn cycle(&mut self, delta: isize) {
        let field = self.selected_field();
        let count = match field {
            Field::Drug => Drug::ALL.len(),
            Field::Age => return,
            Field::Sex => Sex::ALL.len(),
            Field::Country => COUNTRIES.len(),
            Field::Indication => IndicationCategory::ALL.len(),
            Field::Dechallenge => Dechallenge::ALL.len(),
            Field::Rechallenge => Rechallenge::ALL.len(),
            Field::OrganClass => OrganClass::ALL.len(),
        };
        let idx = match field {
            Field::Drug => &mut self.drug_idx,
            Field::Age => unreachable!(),
            Field::Sex => &mut self.sex_idx,
            Field::Country => &mut self.country_idx,
            Field::Indication => &mut self.indication_idx,
            Field::Dechallenge => &mut self.dechallenge_idx,
            Field::Rechallenge => &mut self.rechallenge_idx,
            Field::OrganClass => &mut self.organ_idx,
        };
        *idx = (*idx as isize + delta).rem_euclid(count as isize) as usize;
    }

    /// Type into the age field. Digits only; other fields ignore input.
    pub fn input_char(&mut self, c: char) {
        if self.selected_field() == Field::Age && c.is_ascii_digit() && self.age_input.len() < 3 {
            self.age_input.push(c);
            self.refresh_warning();
        }
    }

    /// Delete the last character of the age field.
    pub fn delete_char(&mut self) {
        if self.selected_field() == Field::Age {
            self.age_input.pop();
            self.refresh_warning();
        }
    }

    /// Clear the age field.
    pub fn clear_field(&mut self) {
        if self.selected_field() == Field::Age {
            self.age_input.clear();
            self.warning = None;
        }
    }

    /// Re-check the age entry and update the non-blocking warning. An
    /// empty field shows no warning until submit.
    pub fn refresh_warning(&mut self) {
        self.warning = if self.age_input.is_empty() {
            None
        } else {
            validate_age(&self.age_input).err().map(|w| w.to_string())
        };
    }

    /// Display text for a field.
    #[must_use]
    pub fn display_value(&self, field: Field) -> &str {
        match field {
            Field::Drug => Drug::ALL[self.drug_idx].label(),
            Field::Age => &self.age_input,
            Field::Sex => Sex::ALL[self.sex_idx].label(),
            Field::Country => COUNTRIES[self.country_idx],
            Field::Indication => IndicationCategory::ALL[self.indication_idx].label(),
            Field::Dechallenge => Dechallenge::ALL[self.dechallenge_idx].label(),
            Field::Rechallenge => Rechallenge::ALL[self.rechallenge_idx].label(),
            Field::OrganClass => OrganClass::ALL[self.organ_idx].label(),
        }
    }

    /// Re-validate and build the case record. The continent is derived
    /// from the selected country here; everything else is a direct enum
    /// lookup.
    ///
    /// # Errors
    /// Returns the warning text when the age entry is invalid.
    pub fn to_case_record(&self) -> Result<CaseRecord, String> {
        let age = validate_age(&self.age_input).map_err(|w| w.to_string())?;
        let country = COUNTRIES[self.country_idx];

        Ok(CaseRecord {
            drug: Drug::ALL[self.drug_idx],
            age_years: age,
            sex: Sex::ALL[self.sex_idx],
            continent: country_to_continent(country),
            indication: IndicationCategory::ALL[self.indication_idx],
            dechallenge: Dechallenge::ALL[self.dechallenge_idx],
            rechallenge: Rechallenge::ALL[self.rechallenge_idx],
            organ_class: OrganClass::ALL[self.organ_idx],
        })
    }

    /// Load a representative sample case.
    pub fn load_sample(&mut self) {
        self.drug_idx = Drug::ALL
            .iter()
            .position(|d| *d == Drug::Metformin)
            .unwrap_or(0);
        self.age_input = "45".to_string();
        self.sex_idx = 0; // Male
        self.country_idx = default_country_index();
        self.indication_idx = IndicationCategory::ALL
            .iter()
            .position(|i| *i == IndicationCategory::Diabetes)
            .unwrap_or(0);
        self.dechallenge_idx = 0; // Improved
        self.rechallenge_idx = 1; // No
        self.organ_idx = 0; // Cardiac disorders
        self.warning = None;
    }
}

/// Render the case entry form.
pub fn render_form(f: &mut Frame, area: Rect, state: &CaseFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/warning
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_fields(f, chunks[1], state);
    render_footer(f, chunks[2], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicalTheme::text()),
        Span::styled("Antidiabetic Adverse Event Predictor", ClinicalTheme::title()),
        Span::styled(" │ FAERS Case Details", ClinicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, area: Rect, state: &CaseFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (Field::ALL.len() + 1) / 2;
    render_field_column(f, columns[0], &Field::ALL[..mid], 0, state);
    render_field_column(f, columns[1], &Field::ALL[mid..], mid, state);
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[Field],
    offset: usize,
    state: &CaseFormState,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == state.selected;
        let border_style = if is_selected {
            ClinicalTheme::border_focused()
        } else {
            ClinicalTheme::border()
        };
        let title_style = if is_selected {
            ClinicalTheme::focused()
        } else {
            ClinicalTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label()), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value = state.display_value(*field);
        let value_display = if value.is_empty() {
            Span::styled(field.hint(), ClinicalTheme::text_muted())
        } else {
            Span::styled(value, ClinicalTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected && *field == Field::Age {
                Span::styled("▌", ClinicalTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &CaseFormState) {
    let content = if let Some(warning) = &state.warning {
        Line::from(vec![
            Span::styled("! ", ClinicalTheme::warning()),
            Span::styled(warning.clone(), ClinicalTheme::warning()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", ClinicalTheme::key_hint()),
            Span::styled("Navigate ", ClinicalTheme::key_desc()),
            Span::styled("[←→] ", ClinicalTheme::key_hint()),
            Span::styled("Change ", ClinicalTheme::key_desc()),
            Span::styled("[Enter] ", ClinicalTheme::key_hint()),
            Span::styled("Predict ", ClinicalTheme::key_desc()),
            Span::styled("[S] ", ClinicalTheme::key_hint()),
            Span::styled("Sample ", ClinicalTheme::key_desc()),
            Span::styled("[Esc] ", ClinicalTheme::key_hint()),
            Span::styled("Quit", ClinicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Continent;

    #[test]
    fn test_sample_case_builds_expected_record() {
        let mut form = CaseFormState::default();
        form.load_sample();

        let record = form.to_case_record().expect("sample should validate");
        assert_eq!(record.drug, Drug::Metformin);
        assert_eq!(record.age_years, 45);
        assert_eq!(record.sex, Sex::Male);
        assert_eq!(record.continent, Continent::NorthAmerica);
        assert_eq!(record.indication, IndicationCategory::Diabetes);
        assert_eq!(record.dechallenge, Dechallenge::Improved);
        assert_eq!(record.rechallenge, Rechallenge::No);
        assert_eq!(record.organ_class, OrganClass::Cardiac);
    }

    #[test]
    fn test_invalid_age_blocks_submit_with_warning() {
        let mut form = CaseFormState::default();
        form.load_sample();
        form.age_input = "200".to_string();

        let err = form.to_case_record().unwrap_err();
        assert!(err.contains("between"));

        form.age_input.clear();
        assert!(form.to_case_record().is_err());
    }

    #[test]
    fn test_warning_is_non_blocking_while_typing() {
        let mut form = CaseFormState::default();
        form.selected = Field::ALL
            .iter()
            .position(|f| *f == Field::Age)
            .expect("age field present");

        form.input_char('9');
        assert!(form.warning.is_none());
        form.input_char('9');
        form.input_char('9');
        // 999 is out of range: warned, but the form keeps the entry.
        assert!(form.warning.is_some());
        assert_eq!(form.age_input, "999");

        form.delete_char();
        assert!(form.warning.is_none());
    }

    #[test]
    fn test_age_field_rejects_non_digits() {
        let mut form = CaseFormState::default();
        form.selected = 1; // Age
        form.input_char('x');
        form.input_char('.');
        form.input_char('4');
        assert_eq!(form.age_input, "4");
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let mut form = CaseFormState::default();
        form.selected = 0; // Drug
        form.cycle(-1);
        assert_eq!(form.drug_idx, Drug::ALL.len() - 1);
        form.cycle(1);
        assert_eq!(form.drug_idx, 0);

        // Cycling the age field is a no-op.
        form.selected = 1;
        form.cycle(1);
        assert_eq!(form.age_input, "");
    }

    #[test]
    fn test_unknown_country_still_builds_record() {
        // Every listed country resolves, but the record builder would
        // accept an Unknown continent too: the model was fitted with the
        // UNK bucket.
        let mut form = CaseFormState::default();
        form.load_sample();
        for idx in [0, COUNTRIES.len() - 1] {
            form.country_idx = idx;
            assert!(form.to_case_record().is_ok());
        }
    }
}
