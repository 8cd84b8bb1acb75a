/// Конвейеры очистки наборов данных

pub mod passengers;
pub mod patients;

pub use passengers::PassengerTransformer;
pub use patients::PatientTransformer;
