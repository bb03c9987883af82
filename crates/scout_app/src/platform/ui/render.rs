use console::style;
use scout_core::{AppViewModel, EventView, FlowLabel, Notification, Severity};

use super::constants::*;

pub fn render_form(view: &AppViewModel) -> Vec<String> {
    let form = &view.form;
    let mut lines = Vec::with_capacity(5);

    lines.push(style(APP_TITLE).bold().to_string());
    lines.push(field_line(
        LABEL_URL,
        &form.url,
        PLACEHOLDER_URL,
        (!form.url_valid).then_some(HINT_URL_INVALID),
    ));
    lines.push(field_line(
        LABEL_CODE,
        &form.code,
        PLACEHOLDER_CODE,
        (!form.code_valid).then_some(HINT_CODE_MISSING),
    ));
    lines.push(render_button(view));
    lines
}

/// The submit button; red while either field is invalid, dimmed while loading.
pub fn render_button(view: &AppViewModel) -> String {
    if !view.form.submit_enabled {
        return style(format!("[ {BUTTON_LOADING} ]")).dim().to_string();
    }
    let label = style(format!("[ {BUTTON_SUBMIT} ]")).white().bold();
    if view.form.submit_flagged {
        label.on_red().to_string()
    } else {
        label.on_blue().to_string()
    }
}

/// One-line validity cue shown right after a field is edited.
pub fn validity_hint(valid: bool, invalid_hint: &str) -> String {
    if valid {
        style("✓").green().to_string()
    } else {
        format!("{} {}", style("✗").red(), style(invalid_hint).red())
    }
}

/// Spinner text for the loading indicator; empty when not loading.
pub fn loading_message(view: &AppViewModel) -> String {
    match view.flow {
        FlowLabel::Submitting => "Submitting request...".to_string(),
        FlowLabel::Polling { polls: 0 } => "Scrape queued, checking status...".to_string(),
        FlowLabel::Polling { polls } => {
            format!("Waiting for the scraper (status checks: {polls})...")
        }
        FlowLabel::FetchingResult => "Fetching result...".to_string(),
        FlowLabel::Idle | FlowLabel::Resolved => String::new(),
    }
}

pub fn render_notification(notification: &Notification) -> Vec<String> {
    let width = notification.message.chars().count().max(HINT_CLOSE.len()) + 4;
    let border = "─".repeat(width);
    let message = match notification.severity {
        Severity::Info => style(&notification.message).green(),
        Severity::Error => style(&notification.message).red(),
    };
    vec![
        format!("┌{border}┐"),
        format!("  {message}"),
        format!("  {}", style(HINT_CLOSE).dim()),
        format!("└{border}┘"),
    ]
}

pub fn render_event(event: &EventView) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section = |heading: &str, body: Vec<String>| {
        lines.push(style(heading).bold().to_string());
        lines.extend(body);
        lines.push(String::new());
    };

    section(HEADING_EVENT, vec![event.title.clone()]);
    section(HEADING_HELD_ON, vec![event.held_on.clone()]);
    section(HEADING_LOCATION, vec![event.location.clone()]);
    section(
        HEADING_COUNTS,
        vec![format!(
            "{} Section, {} Row",
            event.section_count, event.row_count
        )],
    );
    section(
        HEADING_RECOMMENDATIONS,
        event
            .recommendations
            .iter()
            .map(|pick| format!("  • {pick}"))
            .collect(),
    );
    section(
        HEADING_ROWS,
        event
            .rows
            .iter()
            .map(|row| {
                format!(
                    "  • Section: {} | Row: {} | Price: {}",
                    row.section,
                    row.row,
                    row.price_label()
                )
            })
            .collect(),
    );

    lines
}

fn field_line(label: &str, value: &str, placeholder: &str, hint: Option<&str>) -> String {
    let shown = if value.is_empty() {
        style(placeholder).dim().to_string()
    } else {
        value.to_string()
    };
    match hint {
        Some(hint) => format!("{label:<12} {shown}  {}", style(hint).red()),
        None => format!("{label:<12} {shown}"),
    }
}
