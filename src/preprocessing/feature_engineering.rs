//! Feature engineering: даты и производные признаки

use chrono::{Datelike, NaiveDate};

use crate::error::{PrepError, Result};
use crate::types::Value;

/// Формат даты рождения: день/месяц/год
pub const DAY_MONTH_YEAR: &str = "%d/%m/%Y";

pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Пролептический григорианский номер дня: 0001-01-01 = 1
    pub fn date_to_ordinal(date: NaiveDate) -> i64 {
        date.num_days_from_ce() as i64
    }

    /// Разбор даты; нераспознанная дата становится пропуском
    pub fn parse_date_ordinal(value: &Value) -> Value {
        value
            .as_text()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DAY_MONTH_YEAR).ok())
            .map(|d| Value::Int(Self::date_to_ordinal(d)))
            .unwrap_or(Value::Missing)
    }

    pub fn dates_to_ordinals(values: &[Value]) -> Vec<Value> {
        values.iter().map(Self::parse_date_ordinal).collect()
    }

    /// Приведение к float; нечисловое или бесконечное значение считается ошибкой
    /// входных данных. `index` - исходные номера строк для сообщений об ошибке.
    pub fn to_float(column: &str, values: &[Value], index: &[usize]) -> Result<Vec<Value>> {
        values
            .iter()
            .zip(index)
            .map(|(v, &row)| match v {
                Value::Missing => Ok(Value::Missing),
                other => other
                    .as_f64()
                    .filter(|x| x.is_finite())
                    .map(Value::Float)
                    .ok_or_else(|| PrepError::invalid_value(column, row, format!("{:?}", other))),
            })
            .collect()
    }

    /// Размер семьи: SibSp + Parch + 1
    pub fn family_size(sibsp: &[Value], parch: &[Value], index: &[usize]) -> Result<Vec<Value>> {
        if sibsp.len() != parch.len() || sibsp.len() != index.len() {
            return Err(PrepError::Shape(format!(
                "SibSp has {} values, Parch has {}",
                sibsp.len(),
                parch.len()
            )));
        }

        sibsp
            .iter()
            .zip(parch)
            .zip(index)
            .map(|((s, p), &row)| match (s, p) {
                (Value::Int(s), Value::Int(p)) => Ok(Value::Int(s + p + 1)),
                (Value::Missing, _) | (_, Value::Missing) => Ok(Value::Missing),
                (s, p) => match (s.as_f64(), p.as_f64()) {
                    (Some(s), Some(p)) => Ok(Value::Float(s + p + 1.0)),
                    (None, _) => Err(PrepError::invalid_value("SibSp", row, format!("{:?}", s))),
                    (_, None) => Err(PrepError::invalid_value("Parch", row, format!("{:?}", p))),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_matches_proleptic_gregorian_count() {
        let first = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
        assert_eq!(FeatureEngineer::date_to_ordinal(first), 1);
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(FeatureEngineer::date_to_ordinal(epoch), 719_163);
    }

    #[test]
    fn parses_day_month_year() {
        let value = Value::Text("02/01/1970".into());
        assert_eq!(
            FeatureEngineer::parse_date_ordinal(&value),
            Value::Int(719_164)
        );
    }

    #[test]
    fn bad_dates_become_missing() {
        for raw in ["31/02/2000", "1970-01-01", "ontem", ""] {
            let value = Value::Text(raw.into());
            assert_eq!(FeatureEngineer::parse_date_ordinal(&value), Value::Missing);
        }
        assert_eq!(
            FeatureEngineer::parse_date_ordinal(&Value::Missing),
            Value::Missing
        );
    }

    #[test]
    fn family_size_adds_one() {
        let sibsp = vec![Value::Int(1), Value::Int(0), Value::Missing];
        let parch = vec![Value::Int(2), Value::Int(0), Value::Int(1)];
        assert_eq!(
            FeatureEngineer::family_size(&sibsp, &parch, &[0, 1, 2]).unwrap(),
            vec![Value::Int(4), Value::Int(1), Value::Missing]
        );
    }

    #[test]
    fn to_float_rejects_text() {
        let values = vec![Value::Int(3), Value::Text("abc".into())];
        assert!(FeatureEngineer::to_float("Age", &values, &[0, 1]).is_err());
        let values = vec![Value::Int(3), Value::Missing];
        assert_eq!(
            FeatureEngineer::to_float("Age", &values, &[0, 1]).unwrap(),
            vec![Value::Float(3.0), Value::Missing]
        );
    }

    #[test]
    fn to_float_rejects_infinity() {
        for values in [
            vec![Value::Float(37.5), Value::Float(f64::INFINITY)],
            vec![Value::Float(37.5), Value::Text("-inf".into())],
        ] {
            assert!(FeatureEngineer::to_float("Fever", &values, &[0, 1]).is_err());
        }
    }

    #[test]
    fn errors_report_original_row() {
        let values = vec![Value::Int(3), Value::Text("abc".into())];
        match FeatureEngineer::to_float("Age", &values, &[2, 7]) {
            Err(PrepError::InvalidValue { row, .. }) => assert_eq!(row, 7),
            other => panic!("unexpected result: {:?}", other),
        }

        let sibsp = vec![Value::Int(1), Value::Text("x".into())];
        let parch = vec![Value::Int(0), Value::Int(0)];
        match FeatureEngineer::family_size(&sibsp, &parch, &[4, 9]) {
            Err(PrepError::InvalidValue { column, row, .. }) => {
                assert_eq!(column, "SibSp");
                assert_eq!(row, 9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
