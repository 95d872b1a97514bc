// HTML rendering for the dashboard. Two page variants share the same card
// markup: the server-rendered page reloads itself, the client shell is
// filled in by assets/dashboard.js from the JSON endpoint.

mod card;

pub use card::{format_time_of_day, render_machine_card, status_class};

use std::fmt::Write;

use crate::models::DashboardState;

pub const PAGE_TITLE: &str = "Monitoramento de Fábrica 4.0";
pub const WAITING_TITLE: &str = "Aguardando dados do banco de dados...";
pub const WAITING_DETAIL: &str = "A primeira inicialização pode levar alguns segundos.";

/// Id of the element holding the machine cards (shared with the client script).
pub const CONTAINER_ID: &str = "maquinas-container";

/// One rendered page variant.
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    /// Complete markup for the current state, reloaded every `reload_secs`.
    ServerRendered {
        state: &'a DashboardState,
        reload_secs: u64,
    },
    /// Skeleton only; the script polls `data_url` every `poll_secs`.
    ClientRendered { data_url: &'a str, poll_secs: u64 },
}

impl Page<'_> {
    pub fn render(&self) -> String {
        match *self {
            Page::ServerRendered { state, reload_secs } => {
                let head = format!(r#"<meta http-equiv="refresh" content="{}">"#, reload_secs);
                let body = match state {
                    DashboardState::Ready(d) if !d.is_empty() => {
                        let mut cards = String::new();
                        for machine in d.machines() {
                            cards.push_str(&render_machine_card(machine));
                        }
                        container(&cards, "")
                    }
                    _ => container(&waiting_message(), ""),
                };
                layout(&head, &body, "")
            }
            Page::ClientRendered {
                data_url,
                poll_secs,
            } => {
                let attrs = format!(
                    r#" data-source="{}" data-poll-secs="{}""#,
                    escape_html(data_url),
                    poll_secs
                );
                let body = container(&waiting_message(), &attrs);
                layout(
                    "",
                    &body,
                    r#"<script src="/assets/dashboard.js" defer></script>"#,
                )
            }
        }
    }
}

/// Server-rendered page for a failed store read. Keeps reloading so the
/// dashboard comes back on its own once the store recovers.
pub fn render_error_page(message: &str, reload_secs: u64) -> String {
    let head = format!(r#"<meta http-equiv="refresh" content="{}">"#, reload_secs);
    let body = container(
        &format!(
            r#"<div class="error-message"><h2>Erro ao buscar dados</h2><p>{}</p></div>"#,
            escape_html(message)
        ),
        "",
    );
    layout(&head, &body, "")
}

pub fn waiting_message() -> String {
    format!(
        r#"<div class="loading-message"><h2>{}</h2><p>{}</p></div>"#,
        WAITING_TITLE, WAITING_DETAIL
    )
}

fn container(inner: &str, attrs: &str) -> String {
    format!(
        r#"<div id="{}" class="maquinas"{}>{}</div>"#,
        CONTAINER_ID, attrs, inner
    )
}

fn layout(head_extra: &str, main: &str, scripts: &str) -> String {
    let mut out = String::with_capacity(main.len() + 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="pt-br">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
{head_extra}
<title>{title}</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body>
<header><h1>{title}</h1></header>
<main>
{main}
</main>
<footer><p>Projeto de Gêmeo Digital - Indústria 4.0</p></footer>
{scripts}
</body>
</html>
"#,
        title = PAGE_TITLE,
    );
    out
}

/// Escapes text for element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
