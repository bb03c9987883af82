use std::cmp::Ordering;

use crate::{AppState, EventDetails, FlowState, Notification, SessionId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub session: SessionId,
    pub flow: FlowLabel,
    pub is_loading: bool,
    pub form: FormView,
    pub notification: Option<Notification>,
    pub event: Option<EventView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowLabel {
    #[default]
    Idle,
    Submitting,
    Polling {
        polls: u32,
    },
    FetchingResult,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub url: String,
    pub code: String,
    pub url_valid: bool,
    pub code_valid: bool,
    /// Alternate button color when either field is currently invalid.
    pub submit_flagged: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub title: String,
    pub held_on: String,
    pub location: String,
    pub section_count: u32,
    pub row_count: u32,
    pub recommendations: Vec<String>,
    /// Every row of every section, sections in display order.
    pub rows: Vec<SeatRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRowView {
    pub section: String,
    pub row: String,
    pub currency: String,
    pub price: String,
}

impl SeatRowView {
    pub fn price_label(&self) -> String {
        format!("{} {}", self.currency, self.price)
    }
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let is_loading = state.is_loading();
        let url = state.url();
        let code = state.code();
        Self {
            session: state.session(),
            flow: FlowLabel::from(state.flow()),
            is_loading,
            form: FormView {
                url: url.value.clone(),
                code: code.value.clone(),
                url_valid: url.valid,
                code_valid: code.valid,
                submit_flagged: !(url.valid && code.valid),
                submit_enabled: !is_loading,
            },
            notification: state.notification().cloned(),
            event: state.event().map(EventView::from),
        }
    }
}

impl From<&FlowState> for FlowLabel {
    fn from(flow: &FlowState) -> Self {
        match flow {
            FlowState::Idle => FlowLabel::Idle,
            FlowState::Submitting => FlowLabel::Submitting,
            FlowState::Polling { polls, .. } => FlowLabel::Polling { polls: *polls },
            FlowState::FetchingResult { .. } => FlowLabel::FetchingResult,
            FlowState::Resolved(_) => FlowLabel::Resolved,
        }
    }
}

impl From<&EventDetails> for EventView {
    fn from(event: &EventDetails) -> Self {
        let mut sections: Vec<_> = event.sections.iter().collect();
        sections.sort_by(|(a, _), (b, _)| section_order(a, b));

        let rows = sections
            .into_iter()
            .flat_map(|(id, section)| {
                section.rows.iter().map(move |row| SeatRowView {
                    section: id.clone(),
                    row: row.row.to_string(),
                    currency: section.currency.clone(),
                    price: row.price.to_string(),
                })
            })
            .collect();

        Self {
            title: event.title.clone(),
            held_on: event.held_on.to_string(),
            location: event.location.clone(),
            section_count: event.count.section,
            row_count: event.count.row,
            recommendations: event.recommendations.clone(),
            rows,
        }
    }
}

/// Integer-like section ids first in numeric order, then the rest by key.
fn section_order(a: &str, b: &str) -> Ordering {
    match (integer_key(a), integer_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn integer_key(key: &str) -> Option<u64> {
    // "007" is a plain string key, not an index.
    key.parse::<u64>()
        .ok()
        .filter(|value| value.to_string() == key)
}
