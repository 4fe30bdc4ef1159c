use crate::domain::entities::email::EmailCollection;

/// Plain text download: one address per line, ascending, no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

impl ExportArtifact {
    pub fn line_count(&self) -> usize {
        self.contents.lines().count()
    }
}

pub fn build_export(emails: &EmailCollection, file_name: &str) -> Option<ExportArtifact> {
    if emails.is_empty() {
        return None;
    }
    Some(ExportArtifact {
        file_name: file_name.to_string(),
        contents: emails.sorted().join("\n"),
    })
}
