use crate::types::Venue;

use super::{
    common::{Criteria, Param},
    Query,
};

/// Search criteria for `/venues`.
#[derive(Clone, Debug, Default)]
pub struct VenueQuery {
    pub criteria: Criteria,
}

impl Query for VenueQuery {
    type Record = Venue;

    fn criteria(&self) -> &Criteria {
        &self.criteria
    }
    fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }
}

impl VenueQuery {
    /// Two-letter state code (e.g. `GA`, not `Georgia`).
    pub fn with_state_code(mut self, state_code: &str) -> Self {
        self.criteria.set(Param::StateCode.api_name(), state_code);
        self
    }

    /// Two-letter country code (e.g. `US`).
    pub fn with_country_code(mut self, country_code: &str) -> Self {
        self.criteria.set(Param::CountryCode.api_name(), country_code);
        self
    }
}
