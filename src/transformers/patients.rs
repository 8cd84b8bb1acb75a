//! Очистка таблицы пациентов (dadosAulav1)

use tracing::{debug, warn};

use crate::error::Result;
use crate::preprocessing::normalization::normalize_table;
use crate::preprocessing::{imputation, BinaryEncoder, FeatureEngineer, OneHotEncoder, OrdinalEncoder};
use crate::types::{Table, Value};

pub const PATIENT_COLUMNS: [&str; 8] = [
    "ID",
    "Name",
    "Age",
    "DateOfBirth",
    "Spot",
    "Fever",
    "Pressure",
    "Disease",
];

/// Колонки, которые переходят в результат без one-hot
pub const BASE_COLUMNS: [&str; 6] = ["ID", "Age", "DateOfBirth", "Spot", "Fever", "Pressure"];

pub const HEALTHY: &str = "Healthy";

/// Sim / Nao
const SPOT_POSITIVE: &[char] = &['S'];
const SPOT_NEGATIVE: &[char] = &['N'];

/// Baixa < Boa < Alta
const PRESSURE_LEVELS: [(&str, i64); 3] = [("BAIXA", 0), ("BOA", 1), ("ALTA", 2)];

pub struct PatientTransformer;

impl PatientTransformer {
    /// Полный цикл очистки. Все ячейки результата - Float в [0, 1].
    pub fn transform(input: &Table) -> Result<Table> {
        input.require_schema(&PATIENT_COLUMNS)?;
        let mut table = input.clone();

        // 1. Пропущенный диагноз считаем "Healthy"
        let disease = table.column("Disease")?;
        table.set_column(
            "Disease",
            imputation::fill_missing(&disease, &Value::Text(HEALTHY.to_string())),
        )?;

        // 2-4. Кодирование; нераспознанные значения становятся пропусками
        let spot = BinaryEncoder::by_initial(SPOT_POSITIVE, SPOT_NEGATIVE);
        table.set_column("Spot", spot.encode_column(&table.column("Spot")?))?;

        let pressure = OrdinalEncoder::new(&PRESSURE_LEVELS);
        table.set_column("Pressure", pressure.encode_column(&table.column("Pressure")?))?;

        let dates = FeatureEngineer::dates_to_ordinals(&table.column("DateOfBirth")?);
        table.set_column("DateOfBirth", dates)?;

        // 5
        let dropped = table.drop_missing(&PATIENT_COLUMNS)?;
        if dropped > 0 {
            warn!(dropped, remaining = table.n_rows(), "patients: dropped rows with missing values");
        }

        // 6
        for column in ["Age", "Fever"] {
            let values = FeatureEngineer::to_float(column, &table.column(column)?, &table.index)?;
            table.set_column(column, values)?;
        }

        // 7-8
        let names = table.column("Name")?;
        let diseases = table.column("Disease")?;
        let name_encoder = OneHotEncoder::fit("Name", &names);
        let disease_encoder = OneHotEncoder::fit("Disease", &diseases);
        debug!(
            names = name_encoder.categories().len(),
            diseases = disease_encoder.categories().len(),
            "patients: dummy categories"
        );

        let base: Vec<usize> = BASE_COLUMNS
            .iter()
            .map(|c| table.column_index(c))
            .collect::<Result<_>>()?;
        let mut assembled = Table {
            columns: BASE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: table
                .rows
                .iter()
                .map(|row| base.iter().map(|&i| row[i].clone()).collect())
                .collect(),
            index: table.index.clone(),
        };
        for (name, column) in name_encoder
            .transform(&names)
            .into_iter()
            .chain(disease_encoder.transform(&diseases))
        {
            assembled.push_column(&name, column)?;
        }

        // 9
        normalize_table(&assembled)
    }
}
