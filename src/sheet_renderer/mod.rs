mod csv_export;
mod table;

pub use csv_export::records_to_csv;
pub use table::render_table;
