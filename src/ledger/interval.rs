use super::date::DateRecord;
use crate::errors::VacationError;

/// Inclusive span of days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateRecord,
    end: DateRecord,
}

impl Interval {
    pub fn new(start: DateRecord, end: DateRecord) -> Result<Self, VacationError> {
        if start > end {
            return Err(VacationError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateRecord {
        self.start
    }

    pub fn end(&self) -> DateRecord {
        self.end
    }

    pub fn days(&self) -> DateRange {
        expand(self.start, self.end)
    }
}

/// Every day from `start` through `end`, ascending.
///
/// Inverted bounds give an empty range rather than an error. The returned
/// iterator is `Clone`, and calling `expand` again always starts over.
pub fn expand(start: DateRecord, end: DateRecord) -> DateRange {
    DateRange {
        next: (start <= end).then_some(start),
        end,
    }
}

/// Lazy iterator produced by [`expand`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<DateRecord>,
    end: DateRecord,
}

impl Iterator for DateRange {
    type Item = DateRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|next| next.days_until(self.end) as usize + 1)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}
