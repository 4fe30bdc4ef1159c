use std::any::Any;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::domain::entities::batch::UploadFile;
use crate::domain::entities::email::EmailCollection;
use crate::domain::extract::scan_sheet;
use crate::usecase::ports::loader::{BatchError, ExtractError, WorkbookLoader};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub emails: EmailCollection,
    pub files_scanned: usize,
    pub sheets_scanned: usize,
}

pub struct ExtractionService {
    loader: Arc<dyn WorkbookLoader>,
}

impl ExtractionService {
    pub fn new(loader: Arc<dyn WorkbookLoader>) -> Self {
        Self { loader }
    }

    /// Loads every file on its own worker and scans all sheets into one
    /// shared collection. Waits for every worker; if any of them failed the
    /// whole batch fails and nothing is returned.
    pub fn extract(&self, files: &[UploadFile]) -> Result<BatchReport, BatchError> {
        let shared = Mutex::new(EmailCollection::new());
        let loader = self.loader.as_ref();

        let outcomes: Vec<Result<usize, ExtractError>> = thread::scope(|scope| {
            let handles: Vec<_> = files
                .iter()
                .map(|file| {
                    let shared = &shared;
                    scope.spawn(move || scan_file(loader, file, shared))
                })
                .collect();

            handles
                .into_iter()
                .zip(files)
                .map(|(handle, file)| {
                    handle.join().unwrap_or_else(|payload| {
                        Err(ExtractError::Parse {
                            name: file.name.clone(),
                            message: panic_message(payload.as_ref()),
                        })
                    })
                })
                .collect()
        });

        let mut sheets_scanned = 0;
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(sheets) => sheets_scanned += sheets,
                Err(err) => failures.push(err),
            }
        }

        if !failures.is_empty() {
            return Err(BatchError {
                total: files.len(),
                failures,
            });
        }

        Ok(BatchReport {
            emails: shared.into_inner().unwrap_or_else(PoisonError::into_inner),
            files_scanned: files.len(),
            sheets_scanned,
        })
    }
}

fn scan_file(
    loader: &dyn WorkbookLoader,
    file: &UploadFile,
    shared: &Mutex<EmailCollection>,
) -> Result<usize, ExtractError> {
    let sheets = loader.load(file)?;
    for sheet in &sheets {
        // Insertion is idempotent, so a poisoned lock still holds a valid set.
        let mut emails = shared.lock().unwrap_or_else(PoisonError::into_inner);
        let matched = scan_sheet(sheet, &mut emails);
        log::debug!(
            "scanned {}#{}: {} cell(s), {} match(es)",
            file.name,
            sheet.name,
            sheet.cell_count(),
            matched
        );
    }
    Ok(sheets.len())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("parser panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("parser panicked: {message}")
    } else {
        "parser panicked".to_string()
    }
}
