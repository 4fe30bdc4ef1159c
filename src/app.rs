use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::domain::entities::batch::UploadFile;
use crate::infra::export::text_file::{default_export_dir, write_export};
use crate::infra::import::xlsx::XlsxLoader;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::{status_line, AppState, Panel};
use crate::usecase::ports::loader::BatchError;
use crate::usecase::services::extraction_service::ExtractionService;
use crate::usecase::session::{EmptyState, SessionEvent, SessionView};

const SIDEBAR_STYLE: &str = "width: 180px; border-right: 1px solid #ddd; padding: 12px; display: flex; flex-direction: column; gap: 6px;";
const TOOLBAR_STYLE: &str =
    "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;";

#[component]
fn EmptyStateView(state: EmptyState) -> Element {
    let title = state.title();
    let body = state.body();
    rsx! {
        div {
            style: "padding: 24px; text-align: center; color: #555;",
            h4 { "{title}" }
            p { "{body}" }
        }
    }
}

#[component]
fn AboutPanel(extensions: String) -> Element {
    rsx! {
        div {
            style: "padding: 12px; line-height: 1.5;",
            h3 { "About" }
            p { "Pick one or more {extensions} workbooks. Every text cell of every sheet is scanned for email-like text." }
            p { "Addresses are trimmed, lowercased and deduplicated, then listed in ascending order." }
            p { "Files with other extensions are skipped. If any selected workbook cannot be read, the whole batch is discarded." }
        }
    }
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut session,
        mut busy,
        mut status,
        mut active_panel,
        mut sidebar_open,
    } = AppState::new();

    let service = use_hook(|| {
        let loader = XlsxLoader::new(session.peek().config().load);
        Arc::new(ExtractionService::new(Arc::new(loader)))
    });

    let snapshot = session.read().clone();
    let count = snapshot.count();
    let export_enabled = snapshot.export_enabled();
    let extensions = snapshot.config().extensions_label();
    let selected_label = snapshot.selected_files().join(", ");
    let sidebar_display = if sidebar_open() { "flex" } else { "none" };
    let status_text = status();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",
            header {
                style: "display: flex; align-items: center; gap: 12px; padding: 8px 12px; border-bottom: 1px solid #ddd;",
                button {
                    aria_expanded: "{sidebar_open()}",
                    onclick: move |_| {
                        let open = !sidebar_open();
                        sidebar_open.set(open);
                    },
                    "☰"
                }
                strong { "Excel Email Extractor" }
            }
            div {
                style: "display: flex; flex: 1; min-height: 0;",
                nav {
                    style: "{SIDEBAR_STYLE} display: {sidebar_display};",
                    {Panel::ALL.iter().map(|&panel| {
                        let weight = if active_panel() == panel { "bold" } else { "normal" };
                        rsx!(
                            div {
                                key: "{panel.label()}",
                                style: "cursor: pointer; font-weight: {weight};",
                                onclick: move |_| {
                                    active_panel.set(panel);
                                    sidebar_open.set(false);
                                },
                                "{panel.label()}"
                            }
                        )
                    })}
                }
                main {
                    style: "flex: 1; padding: 12px; overflow-y: auto;",
                    if active_panel() == Panel::About {
                        AboutPanel { extensions: extensions.clone() }
                    } else {
                        div {
                            style: TOOLBAR_STYLE,
                            button {
                                disabled: busy(),
                                onclick: {
                                    let service = service.clone();
                                    move |_| {
                                        if busy() {
                                            return;
                                        }

                                        let Some(paths) = FileDialog::new()
                                            .add_filter("Excel workbook", &["xlsx"])
                                            .add_filter("All files", &["*"])
                                            .pick_files() else {
                                            *status.write() = "File selection cancelled".to_string();
                                            return;
                                        };

                                        let files: Vec<UploadFile> =
                                            paths.into_iter().map(UploadFile::from_path).collect();
                                        let Some(batch) = session.write().begin_batch(files) else {
                                            return;
                                        };
                                        if batch.accepted.is_empty() {
                                            *status.write() = status_line(&session.read());
                                            return;
                                        }

                                        *busy.write() = true;
                                        *status.write() =
                                            format!("Processing {} file(s)", batch.accepted.len());

                                        let service = service.clone();
                                        spawn(async move {
                                            let accepted = batch.accepted.clone();
                                            let total = accepted.len();
                                            let worker = run_blocking(move || service.extract(&accepted));
                                            let outcome = match worker.await {
                                                Ok(outcome) => outcome,
                                                Err(err) => {
                                                    log::error!("extraction worker failed: {err:#}");
                                                    Err(BatchError::worker(total, format!("{err:#}")))
                                                }
                                            };
                                            session.write().finish_batch(&batch, outcome);
                                            *status.write() = status_line(&session.read());
                                            *busy.write() = false;
                                        });
                                    }
                                },
                                "Choose files"
                            }
                            button {
                                disabled: busy(),
                                onclick: {
                                    let service = service.clone();
                                    move |_| {
                                        session.write().dispatch(SessionEvent::Clear, &service);
                                        *status.write() = "Cleared".to_string();
                                    }
                                },
                                "Clear"
                            }
                            button {
                                disabled: busy() || !export_enabled,
                                onclick: {
                                    let service = service.clone();
                                    move |_| {
                                        let Some(artifact) =
                                            session.write().dispatch(SessionEvent::Export, &service) else {
                                            return;
                                        };

                                        let mut dialog = FileDialog::new()
                                            .add_filter("Text", &["txt"])
                                            .set_file_name(artifact.file_name.as_str());
                                        if let Some(dir) = default_export_dir() {
                                            dialog = dialog.set_directory(dir);
                                        }
                                        let Some(path) = dialog.save_file() else {
                                            *status.write() = "Export cancelled".to_string();
                                            return;
                                        };

                                        match write_export(&artifact, &path) {
                                            Ok(()) => {
                                                *status.write() = format!(
                                                    "Saved {} email(s) to {}",
                                                    artifact.line_count(),
                                                    path.display()
                                                );
                                            }
                                            Err(err) => {
                                                log::error!("export failed: {err:#}");
                                                *status.write() = format!("Export failed: {err}");
                                                MessageDialog::new()
                                                    .set_level(MessageLevel::Error)
                                                    .set_title("Export failed")
                                                    .set_description(format!("{err:#}"))
                                                    .set_buttons(MessageButtons::Ok)
                                                    .show();
                                            }
                                        }
                                    }
                                },
                                "Download"
                            }
                            span { "Emails: {count}" }
                        }
                        if !selected_label.is_empty() {
                            p {
                                style: "color: #666; margin: 4px 0;",
                                "Selected: {selected_label}"
                            }
                        }
                        {snapshot.notices().iter().map(|notice| {
                            let title = notice.title.clone();
                            let body = notice.body.clone();
                            rsx!(
                                div {
                                    style: "background: #fff7e0; border: 1px solid #f0c36d; border-radius: 6px; padding: 8px 10px; margin: 8px 0; display: flex; gap: 6px;",
                                    strong { "{title}" }
                                    span { "{body}" }
                                }
                            )
                        })}
                        {match snapshot.view().clone() {
                            SessionView::Message(state) => rsx! {
                                EmptyStateView { state }
                            },
                            SessionView::Emails(emails) => rsx! {
                                ul {
                                    style: "font-family: monospace; padding-left: 20px;",
                                    for email in emails {
                                        li { key: "{email}", "{email}" }
                                    }
                                }
                            },
                        }}
                    }
                }
            }
            footer {
                style: "padding: 6px 12px; border-top: 1px solid #ddd; color: #555;",
                "{status_text}"
            }
        }
    }
}
