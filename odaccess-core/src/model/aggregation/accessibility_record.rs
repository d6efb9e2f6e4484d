use crate::model::ObjectId;

/// percentage thresholds of time-window samples for the "reached at least
/// p% of the time" statistics.
pub const DECILES: [u32; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// reachability statistics for one origin over the whole time window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessibilityRecord {
    pub origin_id: ObjectId,
    /// destination weight reached in at least one sample
    pub total_dests: f64,
    pub perc_dests: f64,
    /// destination weight reached in at least `DECILES[i]` percent of samples
    pub dests_at_least: [f64; 9],
    pub perc_at_least: [f64; 9],
}

impl AccessibilityRecord {
    /// the all-zero record of an origin that reached nothing.
    pub fn empty(origin_id: ObjectId) -> AccessibilityRecord {
        AccessibilityRecord {
            origin_id,
            ..Default::default()
        }
    }

    /// statistic column names in output order: `TotalDests`, `PercDests`, then
    /// `DsAL{p}Perc` and `PsAL{p}Perc` for each decile.
    pub fn field_names() -> Vec<String> {
        let mut names = vec![String::from("TotalDests"), String::from("PercDests")];
        for p in DECILES {
            names.push(format!("DsAL{p}Perc"));
            names.push(format!("PsAL{p}Perc"));
        }
        names
    }

    /// statistic values in the order of [`AccessibilityRecord::field_names`].
    /// weight totals are rendered as integers when `integral` is set.
    pub fn field_values(&self, integral: bool) -> Vec<String> {
        let total = |v: f64| {
            if integral {
                format!("{}", v.round() as i64)
            } else {
                format!("{v}")
            }
        };
        let mut values = vec![total(self.total_dests), format!("{}", self.perc_dests)];
        for (dests, perc) in self.dests_at_least.iter().zip(self.perc_at_least.iter()) {
            values.push(total(*dests));
            values.push(format!("{perc}"));
        }
        values
    }
}
