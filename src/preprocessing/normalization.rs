//! Нормализация данных

#![allow(non_snake_case)]

use ndarray::{Array1, Array2, Axis};

use crate::error::{PrepError, Result};
use crate::types::{Table, Value};

/// Min-max нормализация по колонкам: (x - min) / (max - min)
pub struct MinMaxNormalizer {
    min: Option<Array1<f64>>,
    range: Option<Array1<f64>>,
    is_fitted: bool,
}

impl MinMaxNormalizer {
    pub fn new() -> Self {
        Self {
            min: None,
            range: None,
            is_fitted: false,
        }
    }

    pub fn fit(&mut self, X: &Array2<f64>) -> Result<()> {
        if X.nrows() == 0 {
            return Err(PrepError::Shape("Empty dataset".to_string()));
        }

        let min = X.fold_axis(Axis(0), f64::INFINITY, |acc, &v| acc.min(v));
        let max = X.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &v| acc.max(v));

        // Нулевой диапазон помечаем нулем, такие колонки станут константой 0
        let range = &max - &min;

        self.min = Some(min);
        self.range = Some(range);
        self.is_fitted = true;
        Ok(())
    }

    pub fn transform(&self, X: &Array2<f64>) -> Result<Array2<f64>> {
        if !self.is_fitted {
            return Err(PrepError::NotFitted);
        }

        let min = self.min.as_ref().ok_or(PrepError::NotFitted)?;
        let range = self.range.as_ref().ok_or(PrepError::NotFitted)?;

        if X.ncols() != min.len() {
            return Err(PrepError::Shape(format!(
                "expected {} columns, got {}",
                min.len(),
                X.ncols()
            )));
        }

        let mut normalized = X.clone();
        for mut row in normalized.rows_mut() {
            for (i, val) in row.iter_mut().enumerate() {
                *val = if range[i] == 0.0 {
                    0.0
                } else {
                    (*val - min[i]) / range[i]
                };
            }
        }

        Ok(normalized)
    }

    pub fn fit_transform(&mut self, X: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(X)?;
        self.transform(X)
    }
}

impl Default for MinMaxNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Нормализует все колонки таблицы; результат содержит только Float.
/// Нечисловые и бесконечные значения - ошибка.
pub fn normalize_table(table: &Table) -> Result<Table> {
    if table.n_rows() == 0 {
        return Ok(table.clone());
    }

    let mut X = Array2::zeros((table.n_rows(), table.n_cols()));
    for (i, row) in table.rows.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            X[[i, j]] = value.as_f64().filter(|v| v.is_finite()).ok_or_else(|| {
                PrepError::invalid_value(&table.columns[j], table.index[i], format!("{:?}", value))
            })?;
        }
    }

    let normalized = MinMaxNormalizer::new().fit_transform(&X)?;

    Ok(Table {
        columns: table.columns.clone(),
        rows: normalized
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&v| Value::Float(v)).collect())
            .collect(),
        index: table.index.clone(),
    })
}
