use contracts::system::users::{User, UserForm};

use crate::shared::api_utils::api_client;
use crate::shared::crud::{CrudService, Resource};

pub struct Users;

impl Resource for Users {
    type Item = User;
    type Form = UserForm;
    const PATH: &'static str = "/api/users";
    const NAME: &'static str = "users";

    /// New accounts go through the registration endpoint.
    fn create_path() -> &'static str {
        "/api/register"
    }
}

pub fn service() -> CrudService<Users> {
    CrudService::new(api_client())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::test_client;
    use crate::shared::api_client::HttpMethod;
    use crate::shared::crud::Mutation;

    #[tokio::test]
    async fn test_create_posts_to_register_then_reloads_users() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, serde_json::json!({"id": "u2", "username": "staff"}));
        transport.push_json(
            200,
            serde_json::json!([
                {"id": "u1", "username": "admin"},
                {"id": "u2", "username": "staff"}
            ]),
        );

        let form = UserForm {
            username: "staff".into(),
            password: "secret".into(),
        };
        let items = CrudService::<Users>::new(client)
            .apply(Mutation::Create(&form))
            .await
            .unwrap()
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert!(requests[0].url.ends_with("/api/register"));
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert!(requests[1].url.ends_with("/api/users"));
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_update_uses_users_collection() {
        let (client, transport, _, _) = test_client();
        transport.push_json(200, serde_json::json!({}));
        transport.push_json(200, serde_json::json!([]));

        let form = UserForm {
            username: "staff".into(),
            password: "new".into(),
        };
        CrudService::<Users>::new(client)
            .apply(Mutation::Update("u2", &form))
            .await
            .unwrap();

        let first = &transport.requests()[0];
        assert_eq!(first.method, HttpMethod::Put);
        assert!(first.url.ends_with("/api/users/u2"));
    }
}
