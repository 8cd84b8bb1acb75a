//! Aula Prep - очистка наборов данных aula и titanic

pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod preprocessing;
pub mod transformers;
pub mod types;

pub use config::PrepConfig;
pub use error::{PrepError, Result};
pub use pipeline::{run, RunSummary};
pub use transformers::*;
pub use types::*;
