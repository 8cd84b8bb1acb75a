/// Ввод/вывод: чтение CSV и запись Excel

pub mod csv;
pub mod excel;

pub use self::csv::read_table;
pub use self::excel::write_table;
