use chrono::{DateTime, Local};

use crate::config::ExtractorConfig;
use crate::domain::entities::batch::{UploadBatch, UploadFile};
use crate::domain::entities::email::EmailCollection;
use crate::usecase::ports::loader::{BatchError, ExtractError};
use crate::usecase::services::export_service::{build_export, ExportArtifact};
use crate::usecase::services::extraction_service::{BatchReport, ExtractionService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Processing,
    Populated,
    Empty,
    Error,
}

/// Placeholder shown instead of the address list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoFilesYet,
    Processing,
    Cleared,
    Unsupported { files: Vec<String>, extensions: String },
    NoEmails,
    ProcessingError,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoFilesYet => "No emails yet",
            EmptyState::Processing => "Processing files…",
            EmptyState::Cleared => "Cleared",
            EmptyState::Unsupported { .. } => "Unsupported files",
            EmptyState::NoEmails => "No emails detected",
            EmptyState::ProcessingError => "Processing error",
        }
    }

    pub fn body(&self) -> String {
        match self {
            EmptyState::NoFilesYet => {
                "Upload one or more Excel files to see the extracted addresses.".to_string()
            }
            EmptyState::Processing => {
                "Give us a moment while we scan your spreadsheets.".to_string()
            }
            EmptyState::Cleared => "Upload new Excel files to extract emails again.".to_string(),
            EmptyState::Unsupported { files, extensions } if files.is_empty() => {
                format!("Please upload Excel spreadsheets with a {extensions} extension.")
            }
            EmptyState::Unsupported { files, extensions } => format!(
                "Unsupported format for: {}. Upload {extensions} spreadsheets to extract emails.",
                files.join(", ")
            ),
            EmptyState::NoEmails => {
                "We scanned the spreadsheets but did not find any email addresses.".to_string()
            }
            EmptyState::ProcessingError => {
                "An error occurred while reading the file(s). Please try again with a valid XLSX file."
                    .to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    Message(EmptyState),
    Emails(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    fn skipped_files(names: &[String]) -> Self {
        Self {
            title: "Skipped files:".to_string(),
            body: format!("We ignored unsupported formats for {}.", names.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    FilesSelected(Vec<UploadFile>),
    Clear,
    Export,
}

/// State of one extraction window: the current result set plus what the
/// view shows for it.
#[derive(Debug, Clone)]
pub struct ExtractionSession {
    config: ExtractorConfig,
    state: SessionState,
    emails: EmailCollection,
    view: SessionView,
    notices: Vec<Notice>,
    selected_files: Vec<String>,
    last_run: Option<DateTime<Local>>,
}

impl Default for ExtractionSession {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl ExtractionSession {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            emails: EmailCollection::new(),
            view: SessionView::Message(EmptyState::NoFilesYet),
            notices: Vec::new(),
            selected_files: Vec::new(),
            last_run: None,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn count(&self) -> usize {
        self.emails.len()
    }

    #[cfg(test)]
    pub fn emails(&self) -> &EmailCollection {
        &self.emails
    }

    pub fn view(&self) -> &SessionView {
        &self.view
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn selected_files(&self) -> &[String] {
        &self.selected_files
    }

    pub fn last_run(&self) -> Option<DateTime<Local>> {
        self.last_run
    }

    pub fn export_enabled(&self) -> bool {
        self.state == SessionState::Populated && !self.emails.is_empty()
    }

    /// Feeds one user action into the session. Only `Export` produces output.
    pub fn dispatch(
        &mut self,
        event: SessionEvent,
        service: &ExtractionService,
    ) -> Option<ExportArtifact> {
        match event {
            SessionEvent::FilesSelected(files) => {
                self.select_files(files, service);
                None
            }
            SessionEvent::Clear => {
                self.clear();
                None
            }
            SessionEvent::Export => self.export(),
        }
    }

    pub fn select_files(&mut self, files: Vec<UploadFile>, service: &ExtractionService) {
        let Some(batch) = self.begin_batch(files) else {
            return;
        };
        if batch.accepted.is_empty() {
            return;
        }

        let outcome = service.extract(&batch.accepted);
        self.finish_batch(&batch, outcome);
    }

    /// Resets the session for a new selection and splits it by extension.
    ///
    /// Returns `None` for an empty selection, which leaves the session as is.
    /// When nothing is accepted the session already shows the rejection and
    /// is back to `Idle`.
    pub fn begin_batch(&mut self, files: Vec<UploadFile>) -> Option<UploadBatch> {
        if files.is_empty() {
            return None;
        }

        self.state = SessionState::Processing;
        self.emails.clear();
        self.notices.clear();
        self.view = SessionView::Message(EmptyState::Processing);
        self.selected_files = files.iter().map(|file| file.name.clone()).collect();

        let batch = UploadBatch::partition(files, &self.config.accepted_extensions);
        for file in &batch.rejected {
            let skipped = ExtractError::UnsupportedFormat {
                name: file.name.clone(),
            };
            log::warn!("skipping {skipped}");
        }

        if batch.accepted.is_empty() {
            self.state = SessionState::Idle;
            self.view = SessionView::Message(EmptyState::Unsupported {
                files: batch.rejected_names(),
                extensions: self.config.extensions_label(),
            });
        } else {
            log::info!(
                "extracting emails from {} file(s), {} skipped",
                batch.accepted.len(),
                batch.rejected.len()
            );
        }
        Some(batch)
    }

    pub fn finish_batch(&mut self, batch: &UploadBatch, outcome: Result<BatchReport, BatchError>) {
        self.last_run = Some(Local::now());
        match outcome {
            Ok(report) => {
                log::info!(
                    "found {} unique email(s) in {} sheet(s) of {} file(s)",
                    report.emails.len(),
                    report.sheets_scanned,
                    report.files_scanned
                );
                self.emails = report.emails;
                if self.emails.is_empty() {
                    self.state = SessionState::Empty;
                    self.view = SessionView::Message(EmptyState::NoEmails);
                } else {
                    self.state = SessionState::Populated;
                    self.view = SessionView::Emails(self.emails.sorted());
                }
                if !batch.rejected.is_empty() {
                    self.notices.push(Notice::skipped_files(&batch.rejected_names()));
                }
            }
            Err(err) => {
                log::error!("failed to read files: {err}");
                for failure in &err.failures {
                    log::error!("  {failure}");
                }
                self.emails.clear();
                self.state = SessionState::Error;
                self.view = SessionView::Message(EmptyState::ProcessingError);
            }
        }
    }

    pub fn clear(&mut self) {
        log::info!("clearing {} extracted email(s)", self.emails.len());
        self.emails.clear();
        self.notices.clear();
        self.selected_files.clear();
        self.state = SessionState::Idle;
        self.view = SessionView::Message(EmptyState::Cleared);
    }

    pub fn export(&self) -> Option<ExportArtifact> {
        if !self.export_enabled() {
            log::debug!("export ignored in state {:?}", self.state);
            return None;
        }
        let artifact = build_export(&self.emails, &self.config.export_file_name)?;
        log::info!(
            "exporting {} email(s) as {}",
            artifact.line_count(),
            artifact.file_name
        );
        Some(artifact)
    }
}
