use crate::types::Attraction;

use super::{common::Criteria, Query};

/// Search criteria for `/attractions`. Only the shared options apply.
#[derive(Clone, Debug, Default)]
pub struct AttractionQuery {
    pub criteria: Criteria,
}

impl Query for AttractionQuery {
    type Record = Attraction;

    fn criteria(&self) -> &Criteria {
        &self.criteria
    }
    fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{AttractionQuery, Inclusion, Query, Source};

    #[test]
    fn test_attraction_query() {
        let encoded = AttractionQuery::default()
            .with_keyword("Yankees")
            .with_source(Source::Ticketmaster)
            .with_include_test(Inclusion::No)
            .with_locale("en-us")
            .encode()
            .unwrap();
        assert_eq!(
            encoded.to_query_string(),
            "keyword=Yankees&source=ticketmaster&includeTest=no&locale=en-us"
        );
    }
}
