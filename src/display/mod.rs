/// Terminal rendering of tabular results
pub mod table;

pub use table::TableDisplay;
