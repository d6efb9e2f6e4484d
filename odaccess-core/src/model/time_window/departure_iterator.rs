use chrono::{NaiveDateTime, TimeDelta};

/// steps from a start instant to an inclusive end instant by a fixed increment.
pub struct DepartureIterator {
    current: Option<NaiveDateTime>,
    end_inclusive: NaiveDateTime,
    increment: TimeDelta,
}

impl DepartureIterator {
    pub fn new(
        start: NaiveDateTime,
        end_inclusive: NaiveDateTime,
        increment: TimeDelta,
    ) -> DepartureIterator {
        DepartureIterator {
            current: Some(start),
            end_inclusive,
            increment,
        }
    }
}

impl Iterator for DepartureIterator {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if current > self.end_inclusive || self.increment <= TimeDelta::zero() {
            // prevent unbounded iteration with faulty arguments
            self.current = None;
            return None;
        }
        self.current = current.checked_add_signed(self.increment);
        Some(current)
    }
}
