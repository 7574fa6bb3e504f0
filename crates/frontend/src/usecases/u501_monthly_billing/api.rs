use contracts::usecases::u501_monthly_billing::{BillingStatus, BillingTriggerResult};

use crate::shared::api_client::{ApiClient, ApiError};

/// `GET /api/billing/status`
pub async fn fetch_status(client: &ApiClient) -> Result<BillingStatus, ApiError> {
    client.get("/api/billing/status").await
}

/// `POST /api/billing/trigger`, then a status reload once the post came back.
///
/// Never fails: a request that does not come back with a result is reported
/// as an unsuccessful run so the panel can show it, and the status is left
/// untouched (`None`).
pub async fn trigger(
    client: &ApiClient,
) -> (BillingTriggerResult, Option<BillingStatus>) {
    let result = match post_trigger(client).await {
        Ok(result) => result,
        Err(_) => return (BillingTriggerResult::request_failed(), None),
    };
    let status = match fetch_status(client).await {
        Ok(status) => Some(status),
        Err(e) => {
            log::error!("Error fetching billing status: {}", e);
            None
        }
    };
    (result, status)
}

async fn post_trigger(client: &ApiClient) -> Result<BillingTriggerResult, ApiError> {
    client
        .post_empty("/api/billing/trigger")
        .await
        .inspect_err(|e| log::error!("Error triggering monthly billing: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::test_client;
    use crate::shared::api_client::HttpMethod;
    use contracts::usecases::u501_monthly_billing::{TriggerOutcome, TRIGGER_REQUEST_FAILED};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_status() {
        let (client, transport, _, _) = test_client();
        transport.push_json(
            200,
            json!({"totalHouses": 4, "paidHouses": 3, "unpaidHouses": 1, "paymentRate": "75.00"}),
        );

        let status = fetch_status(&client).await.unwrap();
        assert_eq!(status.total_houses, 4);
        assert_eq!(status.payment_rate, "75.00");
        assert!(transport.last_request().unwrap().url.ends_with("/api/billing/status"));
    }

    #[tokio::test]
    async fn test_trigger_success_renders_counts() {
        let (client, transport, _, _) = test_client();
        transport.push_json(
            200,
            json!({"success": true, "processedCount": 10, "errorCount": 0, "totalHouses": 10}),
        );

        let (result, _) = trigger(&client).await;
        let request = transport.requests()[0].clone();
        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.url.ends_with("/api/billing/trigger"));

        let outcome = TriggerOutcome::from(&result);
        assert_eq!(outcome.title(), "تم التشغيل بنجاح");
        assert_eq!(
            outcome,
            TriggerOutcome::Success {
                processed: 10,
                errors: 0,
                total: 10,
                message: None,
            }
        );
    }

    #[tokio::test]
    async fn test_trigger_server_error_becomes_failed_run() {
        let (client, transport, _, _) = test_client();
        transport.push(500, r#"{"message":"boom"}"#);

        let (result, _) = trigger(&client).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(TRIGGER_REQUEST_FAILED));

        let outcome = TriggerOutcome::from(&result);
        assert_eq!(outcome.title(), "فشل في التشغيل");
        assert_eq!(
            outcome,
            TriggerOutcome::Failure {
                error: TRIGGER_REQUEST_FAILED.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_trigger_network_failure() {
        let (client, transport, _, _) = test_client();
        transport.push_failure("offline");

        assert_eq!(trigger(&client).await.0, BillingTriggerResult::request_failed());
    }

    #[tokio::test]
    async fn test_backend_reported_failure_is_kept() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, json!({"success": false, "error": "billing locked"}));

        let outcome = TriggerOutcome::from(&trigger(&client).await.0);
        assert_eq!(
            outcome,
            TriggerOutcome::Failure {
                error: "billing locked".into()
            }
        );
    }

    #[tokio::test]
    async fn test_refresh_follows_completed_post() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, json!({"success": false, "error": "billing locked"}));
        transport.push_json(
            200,
            json!({"totalHouses": 2, "paidHouses": 0, "unpaidHouses": 2, "paymentRate": 0}),
        );

        let (result, status) = trigger(&client).await;
        assert!(!result.success);
        assert_eq!(status.map(|s| s.unpaid_houses), Some(2));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].url.ends_with("/api/billing/status"));
    }

    #[tokio::test]
    async fn test_failed_post_skips_refresh() {
        let (client, transport, _, _) = test_client();
        transport.push_failure("offline");

        let (result, status) = trigger(&client).await;
        assert_eq!(result, BillingTriggerResult::request_failed());
        assert!(status.is_none());
        assert_eq!(transport.requests().len(), 1);

        let (client, transport, _, _) = test_client();
        transport.push(500, r#"{"message":"boom"}"#);
        let (result, status) = trigger(&client).await;
        assert!(!result.success);
        assert!(status.is_none());
        assert_eq!(transport.requests().len(), 1);
    }
}
