pub mod matcher;
pub mod normalizer;
pub mod scanner;

pub use matcher::find_emails;
pub use normalizer::normalize_cell;
pub use scanner::scan_sheet;
