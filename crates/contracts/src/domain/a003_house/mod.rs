pub mod aggregate;

pub use aggregate::{House, HouseForm};
