//! Очистка таблицы пассажиров (titanic)

use tracing::{debug, warn};

use crate::error::Result;
use crate::preprocessing::encoding::map_exact;
use crate::preprocessing::{imputation, FeatureEngineer, OneHotEncoder};
use crate::types::{Table, Value};

pub const PASSENGER_COLUMNS: [&str; 12] = [
    "PassengerId",
    "Survived",
    "Pclass",
    "Name",
    "Sex",
    "Age",
    "SibSp",
    "Parch",
    "Ticket",
    "Fare",
    "Cabin",
    "Embarked",
];

/// Мало пользы для анализа или слишком много пропусков
pub const LOW_VALUE_COLUMNS: [&str; 4] = ["PassengerId", "Name", "Ticket", "Cabin"];

const SEX_CODES: [(&str, i64); 2] = [("male", 1), ("female", 0)];

pub struct PassengerTransformer;

impl PassengerTransformer {
    pub fn transform(input: &Table) -> Result<Table> {
        input.require_schema(&PASSENGER_COLUMNS)?;
        let mut table = input.clone();

        table.drop_columns(&LOW_VALUE_COLUMNS)?;

        // Возраст: медиана
        let age = table.column("Age")?;
        let age = match imputation::median(&age) {
            Some(median) => {
                debug!(median, "passengers: imputing Age");
                imputation::fill_missing(&age, &Value::Float(median))
            }
            None => {
                warn!("passengers: Age has no values, nothing to impute");
                age
            }
        };
        table.set_column("Age", FeatureEngineer::to_float("Age", &age, &table.index)?)?;

        // Порт посадки: мода
        let embarked = table.column("Embarked")?;
        let embarked = match imputation::mode(&embarked) {
            Some(mode) => {
                debug!(mode = ?mode, "passengers: imputing Embarked");
                imputation::fill_missing(&embarked, &mode)
            }
            None => embarked,
        };

        let sex = map_exact(&table.column("Sex")?, &SEX_CODES);
        table.set_column("Sex", sex)?;

        let encoder = OneHotEncoder::fit("Embarked", &embarked);
        table.drop_columns(&["Embarked"])?;
        for (name, column) in encoder.transform(&embarked) {
            table.push_column(&name, column)?;
        }

        let family = FeatureEngineer::family_size(
            &table.column("SibSp")?,
            &table.column("Parch")?,
            &table.index,
        )?;
        table.push_column("FamilySize", family)?;

        // Страховка: после импутации должно быть no-op
        let retained: Vec<String> = table.columns.clone();
        let retained: Vec<&str> = retained.iter().map(String::as_str).collect();
        let dropped = table.drop_missing(&retained)?;
        if dropped > 0 {
            warn!(dropped, remaining = table.n_rows(), "passengers: dropped rows with missing values");
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn passenger(id: i64, sex: &str, age: Value, sibsp: i64, parch: i64, embarked: Value) -> Vec<Value> {
        vec![
            Value::Int(id),
            Value::Int(id % 2),
            Value::Int(3),
            text("Doe, John"),
            text(sex),
            age,
            Value::Int(sibsp),
            Value::Int(parch),
            text("A/5 21171"),
            Value::Float(7.25),
            Value::Missing,
            embarked,
        ]
    }

    fn table(rows: Vec<Vec<Value>>) -> Table {
        Table::from_rows(PASSENGER_COLUMNS.iter().map(|c| c.to_string()).collect(), rows).unwrap()
    }

    fn sample() -> Table {
        table(vec![
            passenger(1, "male", Value::Int(22), 1, 0, text("S")),
            passenger(2, "female", Value::Missing, 1, 0, text("S")),
            passenger(3, "female", Value::Int(30), 0, 0, text("C")),
            passenger(4, "male", Value::Int(35), 1, 2, Value::Missing),
        ])
    }

    #[test]
    fn columns_are_pruned_and_extended() {
        let out = PassengerTransformer::transform(&sample()).unwrap();
        assert_eq!(
            out.columns,
            vec![
                "Survived", "Pclass", "Sex", "Age", "SibSp", "Parch", "Fare",
                "Embarked_C", "Embarked_S", "FamilySize",
            ]
        );
    }

    #[test]
    fn age_median_and_embarked_mode() {
        let out = PassengerTransformer::transform(&sample()).unwrap();
        assert_eq!(out.column("Age").unwrap()[1], Value::Float(30.0));

        let b = |v: bool| Value::Bool(v);
        assert_eq!(out.column("Embarked_S").unwrap(), vec![b(true), b(true), b(false), b(true)]);
        assert_eq!(out.column("Embarked_C").unwrap(), vec![b(false), b(false), b(true), b(false)]);
    }

    #[test]
    fn median_of_two_values() {
        let input = table(vec![
            passenger(1, "male", Value::Int(22), 0, 0, text("S")),
            passenger(2, "male", Value::Missing, 0, 0, text("S")),
            passenger(3, "male", Value::Int(30), 0, 0, text("S")),
        ]);
        let out = PassengerTransformer::transform(&input).unwrap();
        assert_eq!(
            out.column("Age").unwrap(),
            vec![Value::Float(22.0), Value::Float(26.0), Value::Float(30.0)]
        );
    }

    #[test]
    fn family_size_and_sex() {
        let out = PassengerTransformer::transform(&sample()).unwrap();
        assert_eq!(
            out.column("FamilySize").unwrap(),
            vec![Value::Int(2), Value::Int(2), Value::Int(1), Value::Int(4)]
        );
        assert_eq!(
            out.column("Sex").unwrap(),
            vec![Value::Int(1), Value::Int(0), Value::Int(0), Value::Int(1)]
        );
    }

    #[test]
    fn unknown_sex_row_is_dropped() {
        let mut rows = sample().rows;
        rows[2][4] = text("unknown");
        let out = PassengerTransformer::transform(&table(rows)).unwrap();
        assert_eq!(out.index, vec![0, 1, 3]);
        assert!(out.rows.iter().flatten().all(|v| !v.is_missing()));
    }

    #[test]
    fn extra_column_is_fatal() {
        let mut input = sample();
        input.push_column("Boat", vec![Value::Missing; 4]).unwrap();
        assert!(PassengerTransformer::transform(&input).is_err());
    }
}
