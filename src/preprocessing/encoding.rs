//! Кодирование категориальных признаков

use std::collections::BTreeSet;

use crate::types::Value;

/// Бинарное кодирование по первой букве нормализованного текста
pub struct BinaryEncoder {
    positive: &'static [char],
    negative: &'static [char],
}

impl BinaryEncoder {
    pub fn by_initial(positive: &'static [char], negative: &'static [char]) -> Self {
        Self { positive, negative }
    }

    /// Текст обрезается и переводится в верхний регистр; неизвестное значение дает пропуск
    pub fn encode(&self, value: &Value) -> Value {
        let Some(text) = value.as_text() else {
            return Value::Missing;
        };
        match normalize_label(text).chars().next() {
            Some(c) if self.positive.contains(&c) => Value::Int(1),
            Some(c) if self.negative.contains(&c) => Value::Int(0),
            _ => Value::Missing,
        }
    }

    pub fn encode_column(&self, values: &[Value]) -> Vec<Value> {
        values.iter().map(|v| self.encode(v)).collect()
    }
}

/// Порядковое кодирование по фиксированной таблице
pub struct OrdinalEncoder {
    table: Vec<(&'static str, i64)>,
}

impl OrdinalEncoder {
    /// Ключи таблицы задаются в нормализованном виде (верхний регистр)
    pub fn new(table: &[(&'static str, i64)]) -> Self {
        Self {
            table: table.to_vec(),
        }
    }

    pub fn encode(&self, value: &Value) -> Value {
        let Some(text) = value.as_text() else {
            return Value::Missing;
        };
        let label = normalize_label(text);
        self.table
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, rank)| Value::Int(*rank))
            .unwrap_or(Value::Missing)
    }

    pub fn encode_column(&self, values: &[Value]) -> Vec<Value> {
        values.iter().map(|v| self.encode(v)).collect()
    }
}

/// Точное соответствие меток: остальные значения становятся пропуском
pub fn map_exact(values: &[Value], mapping: &[(&str, i64)]) -> Vec<Value> {
    values
        .iter()
        .map(|v| {
            v.as_text()
                .and_then(|t| mapping.iter().find(|(key, _)| *key == t))
                .map(|(_, code)| Value::Int(*code))
                .unwrap_or(Value::Missing)
        })
        .collect()
}

/// One-hot кодирование. Категории собираются из данных и упорядочиваются
/// лексикографически; колонки называются `<prefix>_<category>`.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    prefix: String,
    categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn fit(prefix: &str, values: &[Value]) -> Self {
        let categories: BTreeSet<String> = values.iter().filter_map(Value::category_key).collect();
        Self {
            prefix: prefix.to_string(),
            categories: categories.into_iter().collect(),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn column_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", self.prefix, c))
            .collect()
    }

    /// Колонки в порядке `column_names`; пропуск дает все false
    pub fn transform(&self, values: &[Value]) -> Vec<(String, Vec<Value>)> {
        let keys: Vec<Option<String>> = values.iter().map(Value::category_key).collect();
        self.categories
            .iter()
            .zip(self.column_names())
            .map(|(category, name)| {
                let column = keys
                    .iter()
                    .map(|k| Value::Bool(k.as_deref() == Some(category.as_str())))
                    .collect();
                (name, column)
            })
            .collect()
    }
}

fn normalize_label(text: &str) -> String {
    text.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn binary_by_initial_letter() {
        let encoder = BinaryEncoder::by_initial(&['S'], &['N']);
        assert_eq!(encoder.encode(&text("sim")), Value::Int(1));
        assert_eq!(encoder.encode(&text(" NAO ")), Value::Int(0));
        assert_eq!(encoder.encode(&text("Talvez")), Value::Missing);
        assert_eq!(encoder.encode(&text("   ")), Value::Missing);
        assert_eq!(encoder.encode(&Value::Missing), Value::Missing);
    }

    #[test]
    fn ordinal_table_lookup() {
        let encoder = OrdinalEncoder::new(&[("BAIXA", 0), ("BOA", 1), ("ALTA", 2)]);
        assert_eq!(encoder.encode(&text("alta")), Value::Int(2));
        assert_eq!(encoder.encode(&text("Boa")), Value::Int(1));
        assert_eq!(encoder.encode(&text("baixa ")), Value::Int(0));
        assert_eq!(encoder.encode(&text("media")), Value::Missing);
    }

    #[test]
    fn exact_mapping_is_case_sensitive() {
        let out = map_exact(
            &[text("male"), text("female"), text("Male"), Value::Missing],
            &[("male", 1), ("female", 0)],
        );
        assert_eq!(
            out,
            vec![Value::Int(1), Value::Int(0), Value::Missing, Value::Missing]
        );
    }

    #[test]
    fn one_hot_orders_categories_lexicographically() {
        let values = vec![text("S"), text("S"), text("C"), text("Q")];
        let encoder = OneHotEncoder::fit("Embarked", &values);
        assert_eq!(
            encoder.column_names(),
            vec!["Embarked_C", "Embarked_Q", "Embarked_S"]
        );

        let columns = encoder.transform(&values);
        for row in 0..values.len() {
            let hot = columns
                .iter()
                .filter(|(_, col)| col[row] == Value::Bool(true))
                .count();
            assert_eq!(hot, 1);
        }
        assert_eq!(
            columns[2].1,
            vec![
                Value::Bool(true),
                Value::Bool(true),
                Value::Bool(false),
                Value::Bool(false)
            ]
        );
    }
}
