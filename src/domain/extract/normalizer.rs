use crate::domain::entities::cell::CellValue;

/// Trimmed text of a text cell, `None` for every other cell or blank text.
pub fn normalize_cell(cell: &CellValue) -> Option<&str> {
    match cell {
        CellValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        CellValue::Int(_)
        | CellValue::Float(_)
        | CellValue::Bool(_)
        | CellValue::Temporal
        | CellValue::Error
        | CellValue::Empty => None,
    }
}
