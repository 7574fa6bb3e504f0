pub mod a001_neighborhood;
pub mod a002_square;
pub mod a003_house;
pub mod a004_payment_type;
pub mod common;
