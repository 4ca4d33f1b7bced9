use serde::Serialize;

use crate::models::ForecastEntry;

/// Occurrence count per weather condition, in first-seen order.
///
/// Ordering matters: the dominant condition is the first one to reach the
/// highest count, so the same input always yields the same answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionCounts {
    counts: Vec<(String, usize)>,
}

impl ConditionCounts {
    /// Counts condition names in iteration order
    pub fn from_conditions<'a, I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::default();
        for condition in conditions {
            counts.record(condition);
        }
        counts
    }

    /// Counts the conditions of forecast entries
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ForecastEntry>,
    {
        Self::from_conditions(entries.into_iter().map(|e| e.condition.as_str()))
    }

    fn record(&mut self, condition: &str) {
        match self.counts.iter_mut().find(|(name, _)| name == condition) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((condition.to_string(), 1)),
        }
    }

    /// Most frequent condition; ties go to the one seen first.
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for pair in &self.counts {
            if best.map_or(true, |(_, top)| pair.1 > *top) {
                best = Some(pair);
            }
        }
        best.map(|(name, _)| name.as_str())
    }

    /// Count for one condition, zero if never seen
    pub fn get(&self, condition: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| name == condition)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum of all counts; equals the number of samples counted
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct conditions
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Conditions in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Conditions by descending count, ties in first-seen order
    pub fn by_frequency(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}
