use crate::types::Classification;

use super::{common::Criteria, Query};

/// Search criteria for `/classifications`. Only the shared options apply.
#[derive(Clone, Debug, Default)]
pub struct ClassificationQuery {
    pub criteria: Criteria,
}

impl Query for ClassificationQuery {
    type Record = Classification;

    fn criteria(&self) -> &Criteria {
        &self.criteria
    }
    fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ClassificationQuery, Query};

    #[test]
    fn test_classification_query() {
        let encoded = ClassificationQuery::default()
            .with_keyword("Drama")
            .with_page(2)
            .encode()
            .unwrap();
        assert_eq!(encoded.to_query_string(), "keyword=Drama&page=2");
    }

    #[test]
    fn test_classification_query_rejects_dates() {
        assert!(ClassificationQuery::default()
            .with_param("start_date_time", "2024-06-01T19:00:00Z")
            .encode()
            .is_err());
    }
}
