use crate::domain::entities::cell::Sheet;
use crate::domain::entities::email::EmailCollection;
use crate::domain::extract::{find_emails, normalize_cell};

/// Scans every cell of `sheet` row by row and inserts the lowercased matches
/// into `into`. Returns how many raw matches were seen, duplicates included.
pub fn scan_sheet(sheet: &Sheet, into: &mut EmailCollection) -> usize {
    let mut matched = 0;
    for row in &sheet.rows {
        for cell in row {
            let Some(text) = normalize_cell(cell) else {
                continue;
            };
            for email in find_emails(text) {
                into.insert(email);
                matched += 1;
            }
        }
    }
    matched
}
