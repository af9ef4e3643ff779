use std::cmp::Reverse;
use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// An item that passed the query, with the characters to emphasise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMatch {
    /// Position in the picker's full item list
    pub index: usize,
    pub score: i64,
    /// Char offsets hit by any query term, ascending and unique
    pub positions: Vec<usize>,
}

/// Fuzzy filter for picker items.
pub struct ItemMatcher {
    skim: SkimMatcherV2,
}

impl fmt::Debug for ItemMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemMatcher").finish_non_exhaustive()
    }
}

impl Default for ItemMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemMatcher {
    pub fn new() -> Self {
        Self {
            skim: SkimMatcherV2::default(),
        }
    }

    /// Items matching every whitespace-separated term of `query`.
    ///
    /// Higher scores come first, then list order. A blank query matches
    /// everything with no emphasis.
    pub fn filter(&self, query: &str, items: &[String]) -> Vec<ItemMatch> {
        let terms: Vec<&str> = query.split_whitespace().collect();

        let mut matches: Vec<ItemMatch> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.match_terms(index, item, &terms))
            .collect();

        matches.sort_by_key(|found| (Reverse(found.score), found.index));
        matches
    }

    fn match_terms(&self, index: usize, item: &str, terms: &[&str]) -> Option<ItemMatch> {
        let empty = ItemMatch {
            index,
            score: 0,
            positions: Vec::new(),
        };

        let mut found = terms.iter().try_fold(empty, |mut found, term| {
            let (score, positions) = self.skim.fuzzy_indices(item, term)?;
            found.score += score;
            found.positions.extend(positions);
            Some(found)
        })?;

        found.positions.sort_unstable();
        found.positions.dedup();
        Some(found)
    }
}
