//! Candidate sets: the answers still consistent with the feedback seen so far

use crate::core::{PATTERN_COUNT, Pattern};
use crate::feedback::FeedbackTable;

/// Ascending answer-dictionary indices
///
/// Filtering only ever removes indices, so a set never grows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateSet {
    indices: Vec<usize>,
}

impl CandidateSet {
    /// Every answer of a dictionary with `answer_count` words
    #[must_use]
    pub fn full(answer_count: usize) -> Self {
        Self {
            indices: (0..answer_count).collect(),
        }
    }

    /// A set from arbitrary indices; sorted and deduplicated
    #[must_use]
    pub fn from_indices(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Keep the answers for which `guess` produces `pattern`
    #[must_use]
    pub fn filter(&self, table: &FeedbackTable, guess: usize, pattern: Pattern) -> Self {
        let row = table.row(guess);
        Self {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&answer| row[answer] == pattern.code())
                .collect(),
        }
    }

    /// Split the set by the feedback `guess` would produce
    ///
    /// Buckets come back in ascending pattern-code order; empty ones are omitted.
    #[must_use]
    pub fn partition(&self, table: &FeedbackTable, guess: usize) -> Vec<(Pattern, Self)> {
        let row = table.row(guess);
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); PATTERN_COUNT];
        for &answer in &self.indices {
            buckets[usize::from(row[answer])].push(answer);
        }

        buckets
            .into_iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(code, indices)| (Pattern::new(code as u8), Self { indices }))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Lowest remaining answer index
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    #[must_use]
    pub fn contains(&self, answer: usize) -> bool {
        self.indices.binary_search(&answer).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn filter_keeps_exactly_the_consistent_answers() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let full = CandidateSet::full(lists.answers().len());

        let guess = lists.guesses().find("crane").unwrap();
        let hidden = lists.answers().find("grate").unwrap();
        let pattern = table.get(guess, hidden);

        let filtered = full.filter(&table, guess, pattern);
        assert!(filtered.contains(hidden));
        assert!(filtered.len() <= full.len());
        for answer in 0..lists.answers().len() {
            assert_eq!(filtered.contains(answer), table.get(guess, answer) == pattern);
        }
    }

    #[test]
    fn filter_never_grows() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let mut set = CandidateSet::full(lists.answers().len());
        let hidden = lists.answers().find("there").unwrap();

        for text in ["slate", "about", "where", "there"] {
            let guess = lists.guesses().find(text).unwrap();
            let next = set.filter(&table, guess, table.get(guess, hidden));
            assert!(next.len() <= set.len());
            assert!(next.contains(hidden));
            set = next;
        }
        assert_eq!(set.as_slice(), &[hidden]);
    }

    #[test]
    fn partition_covers_the_set_in_code_order() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let full = CandidateSet::full(lists.answers().len());
        let guess = lists.guesses().find("raise").unwrap();

        let parts = full.partition(&table, guess);
        assert_eq!(parts.iter().map(|(_, set)| set.len()).sum::<usize>(), full.len());
        assert!(parts.windows(2).all(|w| w[0].0 < w[1].0));
        for (pattern, set) in &parts {
            assert_eq!(set, &full.filter(&table, guess, *pattern));
        }
    }

    #[test]
    fn from_indices_normalizes() {
        let set = CandidateSet::from_indices(vec![4, 1, 4, 2]);
        assert_eq!(set.as_slice(), &[1, 2, 4]);
        assert_eq!(set.first(), Some(1));
        assert!(CandidateSet::from_indices(Vec::new()).is_empty());
    }
}
