//! Оркестратор: чтение, очистка, запись обоих наборов

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::PrepConfig;
use crate::error::Result;
use crate::io::{read_table, write_table};
use crate::transformers::{PassengerTransformer, PatientTransformer};
use crate::types::Table;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_out: usize,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub patients: DatasetSummary,
    pub passengers: DatasetSummary,
}

pub fn run(config: &PrepConfig) -> Result<RunSummary> {
    if let Ok(json) = serde_json::to_string(config) {
        debug!(config = %json, "Resolved configuration");
    }

    // Оба файла читаются до любой обработки
    let patients_raw = read_table(&config.patients)?;
    info!(path = %config.patients.path.display(), rows = patients_raw.n_rows(), "Loaded patients");
    let passengers_raw = read_table(&config.passengers)?;
    info!(path = %config.passengers.path.display(), rows = passengers_raw.n_rows(), "Loaded passengers");

    let patients = PatientTransformer::transform(&patients_raw)?;
    info!(rows = patients.n_rows(), columns = patients.n_cols(), "Patients cleaned");
    let passengers = PassengerTransformer::transform(&passengers_raw)?;
    info!(rows = passengers.n_rows(), columns = passengers.n_cols(), "Passengers cleaned");

    std::fs::create_dir_all(&config.export_dir)?;

    let patients_path = config.patients_output_path();
    let passengers_path = config.passengers_output_path();
    write_pair([(&patients, &patients_path), (&passengers, &passengers_path)])?;
    info!(dir = %config.export_dir.display(), "Exports written");

    Ok(RunSummary {
        patients: DatasetSummary {
            rows_in: patients_raw.n_rows(),
            rows_out: patients.n_rows(),
            columns_out: patients.n_cols(),
            output: patients_path,
        },
        passengers: DatasetSummary {
            rows_in: passengers_raw.n_rows(),
            rows_out: passengers.n_rows(),
            columns_out: passengers.n_cols(),
            output: passengers_path,
        },
    })
}

/// Пишет во временные файлы и переименовывает только когда записаны все
fn write_pair(outputs: [(&Table, &PathBuf); 2]) -> Result<()> {
    let mut written: Vec<PathBuf> = Vec::new();

    for (table, path) in outputs {
        let tmp = temp_path(path);
        if let Err(e) = write_table(table, &tmp) {
            written.push(tmp);
            discard(&written);
            return Err(e);
        }
        written.push(tmp);
    }

    let mut renamed: Vec<PathBuf> = Vec::new();
    for (tmp, (_, path)) in written.iter().zip(outputs) {
        if let Err(e) = std::fs::rename(tmp, path) {
            discard(&written);
            discard(&renamed);
            return Err(e.into());
        }
        renamed.push(path.clone());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn discard(paths: &[PathBuf]) {
    for path in paths {
        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "Could not remove partial export");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_keeps_directory() {
        let tmp = temp_path(Path::new("Exports/titanic.xlsx"));
        assert_eq!(tmp, PathBuf::from("Exports/titanic.xlsx.partial"));
    }
}
