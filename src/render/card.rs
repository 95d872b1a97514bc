// Machine card: latest sample plus three collapsible history tables

use chrono::{DateTime, Local, Utc};

use super::escape_html;
use crate::history::TrackedField;
use crate::models::{MachineHistory, Sample};

/// `HH:MM:SS` of the sample time in the server's local time zone.
pub fn format_time_of_day(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// CSS class for a status: `status-` + lowercased status, other characters as '-'.
pub fn status_class(status: &str) -> String {
    let mut out = String::from("status-");
    for c in status.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
        } else {
            out.push('-');
        }
    }
    out
}

struct Section {
    field: TrackedField,
    key: &'static str,
    title: &'static str,
    column: &'static str,
}

const SECTIONS: [Section; 3] = [
    Section {
        field: TrackedField::Production,
        key: "producao",
        title: "Histórico de Produção",
        column: "Produção",
    },
    Section {
        field: TrackedField::Status,
        key: "status",
        title: "Histórico de Status",
        column: "Status",
    },
    Section {
        field: TrackedField::Alarms,
        key: "alarmes",
        title: "Histórico de Alarmes",
        column: "Alarme",
    },
];

fn tracked_value(field: TrackedField, sample: &Sample) -> String {
    match field {
        TrackedField::Production => sample.production_total.to_string(),
        TrackedField::Status => sample.status.clone(),
        TrackedField::Alarms => sample.alarms().unwrap_or_default().to_string(),
    }
}

fn render_history_table(section: &Section, entries: &[Sample]) -> String {
    let mut rows = String::new();
    for s in entries {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&tracked_value(section.field, s)),
            format_time_of_day(s.timestamp)
        ));
    }
    format!(
        r#"<table class="historico-tabela"><thead><tr><th>{}</th><th>Hora</th></tr></thead><tbody>{}</tbody></table>"#,
        section.column, rows
    )
}

pub fn render_machine_card(machine: &MachineHistory) -> String {
    let latest = &machine.latest;
    let id = escape_html(&machine.machine_id);
    let mut sections = String::new();
    for section in &SECTIONS {
        sections.push_str(&format!(
            r#"<details class="historico historico-{key}" id="{key}-{id}"><summary>{title}</summary>{table}</details>"#,
            key = section.key,
            id = id,
            title = section.title,
            table = render_history_table(section, section.field.list(machine)),
        ));
    }
    format!(
        r#"<div class="maquina-card {class}">
<h2 class="card-title">{id}</h2>
<div class="dados">
<p><strong>Status:</strong> <span class="status-text">{status}</span></p>
<p><strong>Produção Total:</strong> {production}</p>
<p><strong>Posição (X):</strong> {position:.2}</p>
<p><strong>Alarmes:</strong> {alarms}</p>
</div>
<div class="historicos">{sections}</div>
</div>
"#,
        class = status_class(&latest.status),
        id = id,
        status = escape_html(&latest.status),
        production = latest.production_total,
        position = latest.position_x,
        alarms = escape_html(latest.alarms().unwrap_or("Nenhum")),
        sections = sections,
    )
}
