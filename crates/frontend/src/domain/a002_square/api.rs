use contracts::domain::a002_square::{Square, SquareForm};

use crate::shared::api_client::ApiError;
use crate::shared::api_utils::api_client;
use crate::shared::crud::{CrudService, Resource};

pub struct Squares;

impl Resource for Squares {
    type Item = Square;
    type Form = SquareForm;
    const PATH: &'static str = "/api/squares";
    const NAME: &'static str = "squares";
}

pub fn service() -> CrudService<Squares> {
    CrudService::new(api_client())
}

/// `GET /api/squares/export`: squares with their neighborhood and houses embedded.
pub async fn fetch_export_data() -> Result<Vec<Square>, ApiError> {
    api_client().get("/api/squares/export").await
}
