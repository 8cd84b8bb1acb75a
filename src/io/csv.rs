//! Чтение таблиц из текстовых файлов с разделителем

use std::path::Path;

use csv::ReaderBuilder;

use crate::config::{DatasetSource, TextEncoding};
use crate::error::{PrepError, Result};
use crate::types::{Table, Value};

/// Строки, которые считаются пропуском (после обрезки пробелов)
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn read_table(source: &DatasetSource) -> Result<Table> {
    let bytes = std::fs::read(&source.path)?;
    let text = decode(&bytes, source.encoding, &source.path)?;
    parse_table(&text, source.delimiter)
}

fn decode(bytes: &[u8], encoding: TextEncoding, path: &Path) -> Result<String> {
    match encoding {
        // Latin-1: каждый байт - это код символа
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        TextEncoding::Utf8 => {
            let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
            String::from_utf8(bytes.to_vec()).map_err(|e| PrepError::Encoding {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    }
}

/// Разбор текста: первая строка - заголовок, типы колонок определяются по данным
pub fn parse_table(text: &str, delimiter: u8) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut raw: Vec<Vec<Option<String>>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        raw.push(
            record
                .iter()
                .map(|cell| {
                    let cell = cell.trim();
                    if MISSING_MARKERS.contains(&cell) {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }

    let kinds: Vec<ColumnKind> = (0..columns.len())
        .map(|j| infer_kind(raw.iter().filter_map(|row| row[j].as_deref())))
        .collect();

    let rows = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&kinds)
                .map(|(cell, kind)| match cell {
                    None => Value::Missing,
                    Some(s) => kind.convert(s),
                })
                .collect()
        })
        .collect();

    Table::from_rows(columns, rows)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

impl ColumnKind {
    fn convert(self, s: String) -> Value {
        match self {
            ColumnKind::Int => s.parse().map(Value::Int).unwrap_or(Value::Text(s)),
            ColumnKind::Float => s.parse().map(Value::Float).unwrap_or(Value::Text(s)),
            ColumnKind::Text => Value::Text(s),
        }
    }
}

fn infer_kind<'a>(mut cells: impl Iterator<Item = &'a str> + Clone) -> ColumnKind {
    if cells.clone().all(|c| c.parse::<i64>().is_ok()) {
        ColumnKind::Int
    } else if cells.all(|c| c.parse::<f64>().is_ok()) {
        ColumnKind::Float
    } else {
        ColumnKind::Text
    }
}
