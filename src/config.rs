pub const DEFAULT_EXPORT_FILE_NAME: &str = "extracted_emails.txt";
pub const WINDOW_TITLE: &str = "Mailsift";

/// How a worksheet range is turned into rows before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep the first row as an ordinary data row instead of a header.
    pub first_row_is_data: bool,
    pub skip_blank_rows: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            first_row_is_data: true,
            skip_blank_rows: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub accepted_extensions: Vec<String>,
    pub export_file_name: String,
    pub load: LoadOptions,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["xlsx".to_string()],
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            load: LoadOptions::default(),
        }
    }
}

impl ExtractorConfig {
    /// Extension list as shown to the user, e.g. `.xlsx`.
    pub fn extensions_label(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
