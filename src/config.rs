/// Настройки запуска: пути, разделители, кодировки

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSource {
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
    #[serde(default = "default_encoding")]
    pub encoding: TextEncoding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    #[serde(default = "default_patients")]
    pub patients: DatasetSource,
    #[serde(default = "default_passengers")]
    pub passengers: DatasetSource,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default = "default_patients_output")]
    pub patients_output: String,
    #[serde(default = "default_passengers_output")]
    pub passengers_output: String,
}

fn default_delimiter() -> u8 { b',' }
fn default_encoding() -> TextEncoding { TextEncoding::Utf8 }
fn default_export_dir() -> PathBuf { PathBuf::from("./Exports") }
fn default_patients_output() -> String { "dados_aula1.xlsx".to_string() }
fn default_passengers_output() -> String { "titanic.xlsx".to_string() }

fn default_patients() -> DatasetSource {
    DatasetSource {
        path: PathBuf::from("./Datasets/dadosAulav1.csv"),
        delimiter: b';',
        encoding: TextEncoding::Latin1,
    }
}

fn default_passengers() -> DatasetSource {
    DatasetSource {
        path: PathBuf::from("./Datasets/titanic.csv"),
        delimiter: default_delimiter(),
        encoding: default_encoding(),
    }
}

impl PrepConfig {
    pub fn patients_output_path(&self) -> PathBuf {
        self.export_dir.join(&self.patients_output)
    }

    pub fn passengers_output_path(&self) -> PathBuf {
        self.export_dir.join(&self.passengers_output)
    }
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            patients: default_patients(),
            passengers: default_passengers(),
            export_dir: default_export_dir(),
            patients_output: default_patients_output(),
            passengers_output: default_passengers_output(),
        }
    }
}
