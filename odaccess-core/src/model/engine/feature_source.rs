use super::{FeatureFilter, FeatureSourceError};
use crate::model::ObjectId;

/// read access to a table of point features (origins or destinations) keyed by
/// an ascending object id.
pub trait FeatureSource: Send + Sync {
    /// name used in log and error messages
    fn name(&self) -> String;

    /// number of rows, before any filtering
    fn count(&self) -> usize;

    fn has_field(&self, field: &str) -> bool;

    /// object ids of the rows accepted by `filter`, ascending.
    fn object_ids(&self, filter: &FeatureFilter) -> Result<Vec<ObjectId>, FeatureSourceError>;

    /// numeric values of `field` for the rows accepted by `filter`, ascending by
    /// object id. empty cells are `None`.
    fn field_values(
        &self,
        field: &str,
        filter: &FeatureFilter,
    ) -> Result<Vec<(ObjectId, Option<f64>)>, FeatureSourceError>;
}
