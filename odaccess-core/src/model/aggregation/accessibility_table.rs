use super::AccessibilityRecord;
use crate::model::ObjectId;
use std::collections::BTreeMap;

/// accessibility statistics for every origin, ordered by origin id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessibilityTable {
    records: BTreeMap<ObjectId, AccessibilityRecord>,
    integral: bool,
}

impl AccessibilityTable {
    pub fn new(records: BTreeMap<ObjectId, AccessibilityRecord>, integral: bool) -> Self {
        AccessibilityTable { records, integral }
    }

    pub fn get(&self, origin_id: ObjectId) -> Option<&AccessibilityRecord> {
        self.records.get(&origin_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccessibilityRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// whether weight totals are whole numbers
    pub fn is_integral(&self) -> bool {
        self.integral
    }
}
