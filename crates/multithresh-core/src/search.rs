use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::config::SearchMode;
use crate::consts::{MAX_CLASSES, MIN_CLASSES, PARALLEL_SEARCH_THRESHOLD};
use crate::error::{MultiThreshError, Result};
use crate::tables::MomentTables;

/// Best threshold tuple found by the search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Strictly increasing thresholds, one fewer than the class count.
    pub thresholds: Vec<usize>,
    /// Sum of `variance` over the induced intervals.
    pub score: f64,
}

impl SearchResult {
    /// Higher score wins; equal scores go to the lexicographically smaller tuple,
    /// which is the one a sequential enumeration meets first.
    fn better_of(self, other: Self) -> Self {
        match other.score.partial_cmp(&self.score) {
            Some(CmpOrdering::Greater) => other,
            Some(CmpOrdering::Equal) if other.thresholds < self.thresholds => other,
            _ => self,
        }
    }
}

/// Number of strictly increasing `k`-tuples the search visits for `levels` gray levels,
/// i.e. `C(levels - 1, k)`.
pub fn search_space_size(levels: usize, k: usize) -> u64 {
    if levels == 0 || k > levels - 1 {
        return 0;
    }
    let n = (levels - 1) as u128;
    let k = k as u128;
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) / (i + 1);
    }
    acc.min(u64::MAX as u128) as u64
}

/// Score of the partition `[0, t1], [t1+1, t2], ..., [tK+1, G-1]`.
pub fn partition_score(tables: &MomentTables, thresholds: &[usize]) -> f64 {
    let last = tables.levels() - 1;
    let mut score = 0.0;
    let mut start = 0;
    for &t in thresholds {
        score += tables.variance(start, t);
        start = t + 1;
    }
    score + tables.variance(start, last)
}

/// Find the `classes - 1` thresholds maximizing the summed between-class variance.
pub fn find_thresholds(tables: &MomentTables, classes: usize, mode: SearchMode) -> Result<SearchResult> {
    find_thresholds_with_progress(tables, classes, mode, |_| {})
}

/// Like [`find_thresholds`], calling `on_progress(done)` as each candidate
/// for the first threshold is exhausted. `done` runs up to `first_threshold_candidates`.
pub fn find_thresholds_with_progress(
    tables: &MomentTables,
    classes: usize,
    mode: SearchMode,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Result<SearchResult> {
    if !(MIN_CLASSES..=MAX_CLASSES).contains(&classes) {
        return Err(MultiThreshError::InvalidClassCount { classes });
    }
    let levels = tables.levels();
    let k = classes - 1;
    if levels < k + 1 {
        return Err(MultiThreshError::TooFewLevels {
            thresholds: k,
            levels,
        });
    }

    let space = search_space_size(levels, k);
    let parallel = match mode {
        SearchMode::Sequential => false,
        SearchMode::Parallel => true,
        SearchMode::Auto => space >= PARALLEL_SEARCH_THRESHOLD,
    };
    debug!(levels, thresholds = k, candidates = space, parallel, "Starting threshold search");

    let first = 0..first_threshold_candidates(levels, k);
    let done = AtomicUsize::new(0);
    let search_first = |t0: usize| {
        let mut walker = Walker::new(tables, k);
        walker.descend(1, t0, tables.variance(0, t0));
        let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
        on_progress(completed);
        walker.best
    };

    let best = if parallel {
        first
            .into_par_iter()
            .filter_map(search_first)
            .reduce_with(SearchResult::better_of)
    } else {
        // Each sub-search's best is already its first maximum; keeping the
        // incumbent on ties preserves enumeration order across sub-searches.
        first.filter_map(search_first).reduce(|best, next| {
            if next.score > best.score {
                next
            } else {
                best
            }
        })
    };

    best.ok_or(MultiThreshError::TooFewLevels {
        thresholds: k,
        levels,
    })
}

/// How many values the first of `k` thresholds can take in a `levels` alphabet.
pub fn first_threshold_candidates(levels: usize, k: usize) -> usize {
    upper_bound(levels, k, 0)
}

/// Exclusive upper bound for the `depth`-th (0-based) of `k` thresholds, leaving
/// room for the remaining thresholds and a non-empty final class.
#[inline]
fn upper_bound(levels: usize, k: usize, depth: usize) -> usize {
    (levels + depth).saturating_sub(k)
}

/// Depth-first enumeration of threshold tuples in ascending lexicographic order.
struct Walker<'a> {
    tables: &'a MomentTables,
    k: usize,
    last: usize,
    current: Vec<usize>,
    best: Option<SearchResult>,
}

impl<'a> Walker<'a> {
    fn new(tables: &'a MomentTables, k: usize) -> Self {
        Self {
            tables,
            k,
            last: tables.levels() - 1,
            current: Vec::with_capacity(k),
            best: None,
        }
    }

    /// Fix the threshold at `depth - 1` to `t`, with `partial` holding the
    /// variance of every class closed so far, then extend the tuple.
    fn descend(&mut self, depth: usize, t: usize, partial: f64) {
        self.current.push(t);
        if depth == self.k {
            let score = partial + self.tables.variance(t + 1, self.last);
            self.offer(score);
        } else {
            let end = upper_bound(self.tables.levels(), self.k, depth);
            for next in t + 1..end {
                let closed = partial + self.tables.variance(t + 1, next);
                self.descend(depth + 1, next, closed);
            }
        }
        self.current.pop();
    }

    /// Replace the incumbent only on strict improvement.
    fn offer(&mut self, score: f64) {
        let improves = match &self.best {
            None => true,
            Some(best) => score > best.score,
        };
        if improves {
            self.best = Some(SearchResult {
                thresholds: self.current.clone(),
                score,
            });
        }
    }
}
