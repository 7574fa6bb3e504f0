pub mod aggregate;

pub use aggregate::{Neighborhood, NeighborhoodForm};
