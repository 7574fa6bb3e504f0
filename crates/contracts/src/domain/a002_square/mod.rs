pub mod aggregate;
pub mod export;

pub use aggregate::{Square, SquareForm};
pub use export::SquareExportRow;
