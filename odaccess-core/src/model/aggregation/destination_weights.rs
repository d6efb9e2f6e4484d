use super::AggregationError;
use crate::model::{
    engine::{FeatureFilter, FeatureSource},
    ObjectId,
};
use std::collections::HashMap;

/// how much each destination counts toward accessibility totals.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationWeights {
    /// every destination counts once
    Uniform { count: usize },
    /// destinations count by the value of a numeric field. missing values
    /// count as zero.
    Field {
        weights: HashMap<ObjectId, f64>,
        total: f64,
        integral: bool,
    },
}

impl DestinationWeights {
    pub fn uniform(count: usize) -> DestinationWeights {
        DestinationWeights::Uniform { count }
    }

    pub fn from_values<I>(values: I) -> DestinationWeights
    where
        I: IntoIterator<Item = (ObjectId, Option<f64>)>,
    {
        let mut weights = HashMap::new();
        let mut total = 0.0;
        let mut integral = true;
        for (id, value) in values {
            if let Some(w) = value {
                total += w;
                integral &= w.fract() == 0.0;
                weights.insert(id, w);
            }
        }
        DestinationWeights::Field {
            weights,
            total,
            integral,
        }
    }

    /// reads weights for every destination. the total covers all destinations,
    /// including any that are never solved.
    pub fn from_source(
        destinations: &dyn FeatureSource,
        weight_field: Option<&str>,
    ) -> Result<DestinationWeights, AggregationError> {
        match weight_field {
            None => Ok(DestinationWeights::uniform(destinations.count())),
            Some(field) => {
                let values = destinations.field_values(field, &FeatureFilter::all())?;
                Ok(DestinationWeights::from_values(values))
            }
        }
    }

    pub fn weight(&self, destination: ObjectId) -> f64 {
        match self {
            DestinationWeights::Uniform { .. } => 1.0,
            DestinationWeights::Field { weights, .. } => {
                weights.get(&destination).copied().unwrap_or_default()
            }
        }
    }

    pub fn total(&self) -> f64 {
        match self {
            DestinationWeights::Uniform { count } => *count as f64,
            DestinationWeights::Field { total, .. } => *total,
        }
    }

    /// true when every weight is a whole number, so totals can be reported as
    /// integers.
    pub fn is_integral(&self) -> bool {
        match self {
            DestinationWeights::Uniform { .. } => true,
            DestinationWeights::Field { integral, .. } => *integral,
        }
    }

    /// `100 * value / total`, or 0 when there is no destination weight at all.
    pub fn percent_of_total(&self, value: f64) -> f64 {
        let total = self.total();
        if total == 0.0 {
            0.0
        } else {
            100.0 * value / total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DestinationWeights;

    #[test]
    fn test_uniform() {
        let w = DestinationWeights::uniform(4);
        assert_eq!(w.weight(99), 1.0);
        assert_eq!(w.total(), 4.0);
        assert!(w.is_integral());
        assert_eq!(w.percent_of_total(1.0), 25.0);
    }

    #[test]
    fn test_field() {
        let w = DestinationWeights::from_values(vec![(1, Some(10.0)), (2, None), (3, Some(2.5))]);
        assert_eq!(w.weight(1), 10.0);
        assert_eq!(w.weight(2), 0.0);
        assert_eq!(w.total(), 12.5);
        assert!(!w.is_integral());
        assert_eq!(w.percent_of_total(2.5), 20.0);
    }

    #[test]
    fn test_zero_total() {
        let w = DestinationWeights::from_values(vec![(1, Some(0.0))]);
        assert_eq!(w.percent_of_total(0.0), 0.0);
        assert_eq!(DestinationWeights::uniform(0).percent_of_total(0.0), 0.0);
    }
}
