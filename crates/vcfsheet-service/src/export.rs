//! Tabular export of contact records.

use std::collections::HashSet;

use rust_xlsxwriter::{ColNum, RowNum, Workbook};
use vcfsheet_core::constants::EXPORT_SHEET_NAME;
use vcfsheet_rfc::rfc::vcard::ContactRecord;

use crate::error::{ServiceError, ServiceResult};

/// Header plus one row per contact, every row as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Columns for an export: the selection as given, or when empty, every field
/// in the order it first appears across `contacts`.
#[must_use]
pub fn columns_for(contacts: &[ContactRecord], selected: &[String]) -> Vec<String> {
    if !selected.is_empty() {
        return selected.to_vec();
    }

    let mut seen = HashSet::new();
    contacts
        .iter()
        .flat_map(ContactRecord::field_names)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Builds the export table. Fields a contact lacks export as `""`.
#[must_use]
pub fn build_rows(contacts: &[ContactRecord], selected: &[String]) -> ExportTable {
    let columns = columns_for(contacts, selected);
    let rows = contacts
        .iter()
        .map(|contact| {
            columns
                .iter()
                .map(|column| contact.get_or_empty(column).to_string())
                .collect()
        })
        .collect();

    ExportTable { columns, rows }
}

/// Largest sheet Excel accepts, header row included.
const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

/// ## Summary
/// Renders the table as an `.xlsx` workbook with one `Contacts` sheet: a
/// header row, then one row per contact. Empty values are left as blank cells.
///
/// ## Errors
/// Returns `ServiceError::ExportTooLarge` if the table does not fit in a
/// worksheet, or the writer's error if the workbook cannot be built.
pub fn to_xlsx_bytes(table: &ExportTable) -> ServiceResult<Vec<u8>> {
    let too_large = || ServiceError::ExportTooLarge {
        rows: table.len(),
        columns: table.columns.len(),
    };
    if table.len() >= MAX_ROWS || table.columns.len() > MAX_COLUMNS {
        return Err(too_large());
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET_NAME)?;

    for (row_idx, row) in std::iter::once(&table.columns).chain(&table.rows).enumerate() {
        let row_num = RowNum::try_from(row_idx).map_err(|_err| too_large())?;
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col_num = ColNum::try_from(col_idx).map_err(|_err| too_large())?;
            sheet.write_string(row_num, col_num, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
