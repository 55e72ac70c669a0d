// likeness-core - Cycle guard for object-pair comparisons
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Cycle guard for object-pair comparisons.
//!
//! A `ComparisonContext` tracks which object pairs are currently being
//! compared within one top-level `equals` call. Re-encountering a pair means
//! the comparison has looped back into itself; the pair is then assumed
//! equal, which is what keeps self-referential and mutually-referential
//! graphs from recursing forever.

use std::collections::HashSet;
use std::rc::Rc;

use likeness_value::ObjectInstance;

/// Unordered identity key for a pair of objects under comparison.
///
/// Built from the two instances' pointer identities in canonical (low, high)
/// order, so `(a, b)` and `(b, a)` produce the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairKey(usize, usize);

impl PairKey {
    /// Compute the key for a pair of object instances.
    pub fn new(left: &Rc<ObjectInstance>, right: &Rc<ObjectInstance>) -> Self {
        let a = Rc::as_ptr(left) as usize;
        let b = Rc::as_ptr(right) as usize;
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }
}

/// The set of object pairs "in flight" for one top-level comparison.
///
/// Created fresh per call and discarded when the call returns; never shared
/// across calls, so concurrent top-level comparisons are independent.
///
/// A pair stays in the context for the remainder of the call once entered;
/// it is not removed when its subtree finishes. A later, unrelated encounter
/// of the same pair therefore also short-circuits to equal. This is a
/// conservative approximation of cycle detection, retained for
/// compatibility with the semantics this engine reproduces.
#[derive(Debug, Default)]
pub struct ComparisonContext {
    in_progress: HashSet<PairKey>,
}

impl ComparisonContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        ComparisonContext {
            in_progress: HashSet::new(),
        }
    }

    /// Mark a pair as in progress.
    ///
    /// Returns false if the pair was already present, in which case the
    /// caller should treat the pair as equal without recursing.
    pub fn enter(&mut self, key: PairKey) -> bool {
        self.in_progress.insert(key)
    }
}
