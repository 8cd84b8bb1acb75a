/// Типы данных для таблиц

use crate::error::{PrepError, Result};

/// Значение ячейки. Пропуск хранится явно, без NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Числовое представление; булевы значения дают 0/1, текст пробуем распарсить
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Missing => None,
        }
    }

    /// Ключ категории для one-hot кодирования
    pub fn category_key(&self) -> Option<String> {
        match self {
            Value::Missing => None,
            Value::Text(s) => Some(s.clone()),
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        }
    }
}

/// Таблица: упорядоченные колонки, строки и исходные номера строк
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub index: Vec<usize>,
}

impl Table {
    /// Строки нумеруются по порядку, начиная с 0
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(PrepError::Shape(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        let index = (0..rows.len()).collect();
        Ok(Self { columns, rows, index })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PrepError::MissingColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<Vec<Value>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx].clone()).collect())
    }

    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        let idx = self.column_index(name)?;
        if values.len() != self.n_rows() {
            return Err(PrepError::Shape(format!(
                "column {} has {} values, table has {} rows",
                name,
                values.len(),
                self.n_rows()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = value;
        }
        Ok(())
    }

    pub fn push_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if values.len() != self.n_rows() {
            return Err(PrepError::Shape(format!(
                "column {} has {} values, table has {} rows",
                name,
                values.len(),
                self.n_rows()
            )));
        }
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    pub fn drop_columns(&mut self, names: &[&str]) -> Result<()> {
        let mut drop: Vec<usize> = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<_>>()?;
        drop.sort_unstable();
        drop.dedup();

        for &idx in drop.iter().rev() {
            self.columns.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
        Ok(())
    }

    /// Удаляет строки с пропуском в любой из указанных колонок; возвращает число удаленных
    pub fn drop_missing(&mut self, subset: &[&str]) -> Result<usize> {
        let indices: Vec<usize> = subset
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<_>>()?;

        let before = self.n_rows();
        let rows = std::mem::take(&mut self.rows);
        let index = std::mem::take(&mut self.index);
        for (row, original) in rows.into_iter().zip(index) {
            if indices.iter().all(|&i| !row[i].is_missing()) {
                self.rows.push(row);
                self.index.push(original);
            }
        }
        Ok(before - self.n_rows())
    }

    /// Проверка схемы: набор колонок должен совпадать с ожидаемым
    pub fn require_schema(&self, expected: &[&str]) -> Result<()> {
        for name in expected {
            if !self.columns.iter().any(|c| c == name) {
                return Err(PrepError::MissingColumn(name.to_string()));
            }
        }
        for name in &self.columns {
            if !expected.contains(&name.as_str()) {
                return Err(PrepError::UnexpectedColumn(name.clone()));
            }
        }
        Ok(())
    }
}
