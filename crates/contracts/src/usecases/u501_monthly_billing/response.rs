use serde::{Deserialize, Deserializer, Serialize};

/// Error reported when the trigger request itself fails.
pub const TRIGGER_REQUEST_FAILED: &str = "Failed to trigger monthly billing";

/// Aggregate counters from `GET /api/billing/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatus {
    pub total_houses: u64,
    pub paid_houses: u64,
    pub unpaid_houses: u64,
    /// Percentage as formatted by the backend ("75.00"); numbers are accepted too.
    #[serde(deserialize_with = "string_or_number")]
    pub payment_rate: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok("0".to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unexpected paymentRate: {}",
            other
        ))),
    }
}

/// Response of `POST /api/billing/trigger`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingTriggerResult {
    pub success: bool,
    #[serde(default)]
    pub processed_count: Option<u64>,
    #[serde(default)]
    pub error_count: Option<u64>,
    #[serde(default)]
    pub total_houses: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BillingTriggerResult {
    pub fn request_failed() -> Self {
        Self {
            success: false,
            error: Some(TRIGGER_REQUEST_FAILED.to_string()),
            ..Self::default()
        }
    }
}

/// What the last-run panel shows for a trigger result.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    Success {
        processed: u64,
        errors: u64,
        total: u64,
        message: Option<String>,
    },
    Failure {
        error: String,
    },
}

impl TriggerOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            TriggerOutcome::Success { .. } => "تم التشغيل بنجاح",
            TriggerOutcome::Failure { .. } => "فشل في التشغيل",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TriggerOutcome::Success { .. })
    }
}

impl From<&BillingTriggerResult> for TriggerOutcome {
    fn from(r: &BillingTriggerResult) -> Self {
        if r.success {
            TriggerOutcome::Success {
                processed: r.processed_count.unwrap_or(0),
                errors: r.error_count.unwrap_or(0),
                total: r.total_houses.unwrap_or(0),
                message: r.message.clone(),
            }
        } else {
            TriggerOutcome::Failure {
                error: r
                    .error
                    .clone()
                    .or_else(|| r.message.clone())
                    .unwrap_or_else(|| "خطأ غير معروف".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome() {
        let r: BillingTriggerResult = serde_json::from_str(
            r#"{"success":true,"processedCount":10,"errorCount":0,"totalHouses":10}"#,
        )
        .unwrap();
        let outcome = TriggerOutcome::from(&r);
        assert_eq!(outcome.title(), "تم التشغيل بنجاح");
        assert_eq!(
            outcome,
            TriggerOutcome::Success {
                processed: 10,
                errors: 0,
                total: 10,
                message: None
            }
        );
    }

    #[test]
    fn test_failure_outcome_keeps_error_verbatim() {
        let r: BillingTriggerResult =
            serde_json::from_str(r#"{"success":false,"error":"Database unavailable"}"#).unwrap();
        let outcome = TriggerOutcome::from(&r);
        assert!(!outcome.is_success());
        assert_eq!(outcome.title(), "فشل في التشغيل");
        assert_eq!(
            outcome,
            TriggerOutcome::Failure {
                error: "Database unavailable".into()
            }
        );
    }

    #[test]
    fn test_request_failed() {
        let outcome = TriggerOutcome::from(&BillingTriggerResult::request_failed());
        assert_eq!(
            outcome,
            TriggerOutcome::Failure {
                error: TRIGGER_REQUEST_FAILED.into()
            }
        );
    }

    #[test]
    fn test_status_payment_rate_string_or_number() {
        let s: BillingStatus = serde_json::from_str(
            r#"{"totalHouses":4,"paidHouses":3,"unpaidHouses":1,"paymentRate":"75.00"}"#,
        )
        .unwrap();
        assert_eq!(s.payment_rate, "75.00");

        let n: BillingStatus = serde_json::from_str(
            r#"{"totalHouses":4,"paidHouses":3,"unpaidHouses":1,"paymentRate":75}"#,
        )
        .unwrap();
        assert_eq!(n.payment_rate, "75");
        assert_eq!(n.unpaid_houses, 1);
    }
}
