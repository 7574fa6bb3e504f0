use contracts::domain::a003_house::{House, HouseForm};

use crate::shared::api_utils::api_client;
use crate::shared::crud::{CrudService, Resource};

pub struct Houses;

impl Resource for Houses {
    type Item = House;
    type Form = HouseForm;
    const PATH: &'static str = "/api/houses";
    const NAME: &'static str = "houses";
}

pub fn service() -> CrudService<Houses> {
    CrudService::new(api_client())
}
