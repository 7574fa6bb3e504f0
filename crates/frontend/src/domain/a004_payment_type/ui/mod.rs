pub mod list;
pub mod reference;
