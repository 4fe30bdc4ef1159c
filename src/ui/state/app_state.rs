use dioxus::prelude::{use_signal, Signal};

use crate::config::ExtractorConfig;
use crate::usecase::session::{ExtractionSession, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Extract,
    About,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Extract, Panel::About];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Extract => "Extract",
            Panel::About => "About",
        }
    }
}

pub struct AppState {
    pub session: Signal<ExtractionSession>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub active_panel: Signal<Panel>,
    pub sidebar_open: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| ExtractionSession::new(ExtractorConfig::default())),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
            active_panel: use_signal(|| Panel::Extract),
            sidebar_open: use_signal(|| false),
        }
    }
}

/// One-line summary of the last action, shown under the toolbar.
pub fn status_line(session: &ExtractionSession) -> String {
    let at = session
        .last_run()
        .map(|time| format!(" at {}", time.format("%H:%M:%S")))
        .unwrap_or_default();
    match session.state() {
        SessionState::Populated => format!("Found {} email(s){at}", session.count()),
        SessionState::Empty => format!("No emails found{at}"),
        SessionState::Error => format!("Processing failed{at}"),
        SessionState::Processing => "Processing…".to_string(),
        SessionState::Idle if session.selected_files().is_empty() => "Ready".to_string(),
        SessionState::Idle => "No supported files selected".to_string(),
    }
}
