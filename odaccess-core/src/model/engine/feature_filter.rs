use crate::model::{partition::IdRange, ObjectId};

/// row predicate applied by a [`super::FeatureSource`]. the empty filter keeps
/// every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFilter {
    /// keep only rows whose object id falls in this range
    pub range: Option<IdRange>,
    /// keep only rows where this numeric field is non-null and non-zero
    pub non_zero_field: Option<String>,
}

impl FeatureFilter {
    pub fn all() -> FeatureFilter {
        FeatureFilter::default()
    }

    pub fn within(mut self, range: IdRange) -> FeatureFilter {
        self.range = Some(range);
        self
    }

    pub fn with_non_zero(mut self, field: Option<&str>) -> FeatureFilter {
        self.non_zero_field = field.map(String::from);
        self
    }

    /// tests a row given its id and the value of `non_zero_field` on that row.
    pub fn accepts(&self, id: ObjectId, field_value: Option<f64>) -> bool {
        let in_range = self.range.map(|r| r.contains(id)).unwrap_or(true);
        let non_zero = match self.non_zero_field {
            None => true,
            Some(_) => matches!(field_value, Some(v) if v != 0.0),
        };
        in_range && non_zero
    }
}
