pub mod response;

pub use response::{BillingStatus, BillingTriggerResult, TriggerOutcome, TRIGGER_REQUEST_FAILED};
