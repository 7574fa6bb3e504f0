pub mod aggregate;

pub use aggregate::{PaymentType, PaymentTypeConfig, TariffTable};
