use std::io::Cursor;

use calamine::{Data, Range, Reader, SheetType, Xlsx};

use crate::config::LoadOptions;
use crate::domain::entities::batch::UploadFile;
use crate::domain::entities::cell::{CellValue, Sheet};
use crate::usecase::ports::loader::{ExtractError, WorkbookLoader};

pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Float(v) => CellValue::Float(*v),
        Data::Int(v) => CellValue::Int(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => CellValue::Temporal,
        Data::Error(_) => CellValue::Error,
        Data::Empty => CellValue::Empty,
    }
}

pub fn range_to_rows(range: &Range<Data>, options: LoadOptions) -> Vec<Vec<CellValue>> {
    let skip = usize::from(!options.first_row_is_data);
    range
        .rows()
        .skip(skip)
        .filter(|row| !options.skip_blank_rows || row.iter().any(|cell| *cell != Data::Empty))
        .map(|row| row.iter().map(cell_value).collect())
        .collect()
}

/// Reads `.xlsx` workbooks through calamine.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxLoader {
    options: LoadOptions,
}

impl XlsxLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn parse_bytes(&self, name: &str, bytes: Vec<u8>) -> Result<Vec<Sheet>, ExtractError> {
        let parse_error = |message: String| ExtractError::Parse {
            name: name.to_string(),
            message,
        };

        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(bytes)).map_err(|err| parse_error(err.to_string()))?;

        // Chart, dialog and macro sheets have no cell grid to scan.
        let worksheet_names: Vec<String> = workbook
            .sheets_metadata()
            .iter()
            .filter_map(|meta| {
                if meta.typ == SheetType::WorkSheet {
                    Some(meta.name.clone())
                } else {
                    log::debug!("{name}: skipping {:?} {}", meta.typ, meta.name);
                    None
                }
            })
            .collect();

        let mut sheets = Vec::new();
        for sheet_name in worksheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|err| parse_error(format!("sheet {sheet_name}: {err}")))?;
            sheets.push(Sheet::new(sheet_name, range_to_rows(&range, self.options)));
        }
        Ok(sheets)
    }
}

impl WorkbookLoader for XlsxLoader {
    fn load(&self, file: &UploadFile) -> Result<Vec<Sheet>, ExtractError> {
        let bytes = file.read_bytes().map_err(|source| ExtractError::Io {
            name: file.name.clone(),
            source,
        })?;
        self.parse_bytes(&file.name, bytes)
    }
}
