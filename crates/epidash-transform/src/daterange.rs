use chrono::NaiveDate;

/// A finite, restartable sequence of consecutive calendar days.
///
/// Stateless in construction: two ranges built from the same bounds yield
/// identical sequences. Used to backfill missing days with zero counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    current: NaiveDate,
    end: NaiveDate,
}

/// Days in `[start, end)`; empty when `end <= start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        current: start,
        end,
    }
}

/// Days in `[start, end]`; empty when `end < start`.
pub fn date_range_inclusive(start: NaiveDate, end: NaiveDate) -> DateRange {
    date_range(start, end.succ_opt().unwrap_or(NaiveDate::MAX))
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.current >= self.end {
            return None;
        }
        let date = self.current;
        self.current = date.succ_opt()?;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.current).num_days().max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}
