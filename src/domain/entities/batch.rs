use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// One file picked by the user: a display name plus where its bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub source: FileSource,
}

impl UploadFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Bytes(bytes.into()),
        }
    }

    pub fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        match &self.source {
            FileSource::Path(path) => std::fs::read(path),
            FileSource::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }

    pub fn has_extension(&self, extensions: &[String]) -> bool {
        let lowered = self.name.to_lowercase();
        extensions
            .iter()
            .any(|ext| lowered.ends_with(&format!(".{}", ext.to_lowercase())))
    }
}

/// Files of one selection, split by extension before anything is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    pub accepted: Vec<UploadFile>,
    pub rejected: Vec<UploadFile>,
}

impl UploadBatch {
    pub fn partition(files: Vec<UploadFile>, extensions: &[String]) -> Self {
        let (accepted, rejected) = files
            .into_iter()
            .partition(|file| file.has_extension(extensions));
        Self { accepted, rejected }
    }

    pub fn rejected_names(&self) -> Vec<String> {
        self.rejected.iter().map(|file| file.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xlsx_only() -> Vec<String> {
        vec!["xlsx".to_string()]
    }

    #[test]
    fn partition_matches_extension_case_insensitively() {
        let batch = UploadBatch::partition(
            vec![
                UploadFile::from_bytes("a.xlsx", Vec::<u8>::new()),
                UploadFile::from_bytes("B.XLSX", Vec::<u8>::new()),
                UploadFile::from_bytes("notes.csv", Vec::<u8>::new()),
                UploadFile::from_bytes("xlsx", Vec::<u8>::new()),
                UploadFile::from_bytes("report.xlsx.bak", Vec::<u8>::new()),
            ],
            &xlsx_only(),
        );

        let accepted: Vec<&str> = batch.accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(accepted, vec!["a.xlsx", "B.XLSX"]);
        assert_eq!(
            batch.rejected_names(),
            vec![
                "notes.csv".to_string(),
                "xlsx".to_string(),
                "report.xlsx.bak".to_string()
            ]
        );
    }

    #[test]
    fn from_path_uses_file_name() {
        let file = UploadFile::from_path("/tmp/some/dir/contacts.xlsx");

        assert_eq!(file.name, "contacts.xlsx");
        assert_eq!(
            file.source,
            FileSource::Path(PathBuf::from("/tmp/some/dir/contacts.xlsx"))
        );
    }
}
