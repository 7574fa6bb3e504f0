use contracts::dashboards::d400_overview::DashboardStats;

use crate::domain::a001_neighborhood::api::Neighborhoods;
use crate::domain::a002_square::api::Squares;
use crate::domain::a003_house::api::Houses;
use crate::shared::api_client::{ApiClient, ApiError};
use crate::shared::crud::CrudService;
use crate::system::users::api::Users;

/// Loads the four collections and computes the totals.
pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    let users = CrudService::<Users>::new(client.clone()).list().await?;
    let neighborhoods = CrudService::<Neighborhoods>::new(client.clone()).list().await?;
    let squares = CrudService::<Squares>::new(client.clone()).list().await?;
    let houses = CrudService::<Houses>::new(client.clone()).list().await?;

    Ok(DashboardStats::compute(
        users.len(),
        neighborhoods.len(),
        squares.len(),
        &houses,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::test_client;
    use serde_json::json;

    fn house(id: &str, paid: bool, amount: f64) -> serde_json::Value {
        json!({
            "id": id, "houseNumber": id, "ownerName": "o", "ownerPhone": "p",
            "isOccupied": true, "hasPaid": paid, "paymentType": "SMALL_METER",
            "requiredAmount": amount, "squareId": "s1",
            "createdAt": "", "updatedAt": ""
        })
    }

    #[tokio::test]
    async fn test_stats_from_four_lists() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, json!([{"id": "u1", "username": "admin"}]));
        transport.push_json(
            200,
            json!([
                {"id": "n1", "name": "A", "createdAt": "", "updatedAt": ""},
                {"id": "n2", "name": "B", "createdAt": "", "updatedAt": ""}
            ]),
        );
        transport.push_json(
            200,
            json!([{"id": "s1", "name": "1", "neighborhoodId": "n1", "createdAt": "", "updatedAt": ""}]),
        );
        transport.push_json(
            200,
            json!([house("h1", true, 5000.0), house("h2", true, 15000.0), house("h3", false, 10000.0)]),
        );

        let stats = fetch_stats(&client).await.unwrap();
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.total_neighborhoods, 2);
        assert_eq!(stats.total_squares, 1);
        assert_eq!(stats.paid_houses, 2);
        assert_eq!(stats.unpaid_houses, 1);
        assert_eq!(stats.total_revenue, 20000.0);
        assert_eq!(stats.payment_rate(), 67);

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.test/api/users",
                "https://api.test/api/neighborhoods",
                "https://api.test/api/squares",
                "https://api.test/api/houses",
            ]
        );
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_whole_load() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, json!([]));
        transport.push(500, r#"{"message":"db down"}"#);

        let err = fetch_stats(&client).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(transport.requests().len(), 2);
    }
}
