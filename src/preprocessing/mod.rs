/// Модуль предобработки данных

pub mod encoding;
pub mod feature_engineering;
pub mod imputation;
pub mod normalization;

pub use encoding::{BinaryEncoder, OneHotEncoder, OrdinalEncoder};
pub use feature_engineering::FeatureEngineer;
pub use normalization::MinMaxNormalizer;
