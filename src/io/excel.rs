//! Запись таблиц в .xlsx

use std::path::Path;

use simple_excel_writer::{Row, Workbook};

use crate::error::{PrepError, Result};
use crate::types::{Table, Value};

pub const SHEET_NAME: &str = "Sheet1";

/// Один лист: заголовок (пустая ячейка индекса + имена колонок), затем строки
/// с исходным номером строки в первой колонке
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    // Книга собирается в памяти: ошибка записи файла остается обычной ошибкой
    let mut workbook = Workbook::create_in_memory();
    let mut sheet = workbook.create_sheet(SHEET_NAME);

    workbook
        .write_sheet(&mut sheet, |sheet_writer| {
            let mut header = Row::new();
            header.add_cell("");
            for name in &table.columns {
                header.add_cell(name.as_str());
            }
            sheet_writer.append_row(header)?;

            for (row, original) in table.rows.iter().zip(&table.index) {
                let mut cells = Row::new();
                cells.add_cell(*original as f64);
                for value in row {
                    match value {
                        Value::Missing => cells.add_cell(()),
                        Value::Text(s) => cells.add_cell(s.as_str()),
                        Value::Int(v) => cells.add_cell(*v as f64),
                        Value::Float(v) => cells.add_cell(*v),
                        Value::Bool(b) => cells.add_cell(*b),
                    }
                }
                sheet_writer.append_row(cells)?;
            }
            Ok(())
        })
        .map_err(|e| PrepError::Excel(format!("Could not write sheet: {}", e)))?;

    let bytes = workbook
        .close()
        .map_err(|e| PrepError::Excel(format!("Could not save Excel file: {}", e)))?
        .ok_or_else(|| PrepError::Excel("Workbook produced no data".to_string()))?;

    std::fs::write(path, bytes)?;
    Ok(())
}
