use contracts::domain::a001_neighborhood::{Neighborhood, NeighborhoodForm};

use crate::shared::api_utils::api_client;
use crate::shared::crud::{CrudService, Resource};

pub struct Neighborhoods;

impl Resource for Neighborhoods {
    type Item = Neighborhood;
    type Form = NeighborhoodForm;
    const PATH: &'static str = "/api/neighborhoods";
    const NAME: &'static str = "neighborhoods";
}

pub fn service() -> CrudService<Neighborhoods> {
    CrudService::new(api_client())
}
