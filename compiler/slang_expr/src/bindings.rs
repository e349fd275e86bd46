//! Read-only variable lookup used during expression evaluation.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only view of variable values.
///
/// The evaluator only ever calls [`Bindings::lookup`]; it has no way to
/// write back, which keeps `evaluate` free of side effects.
pub trait Bindings {
    /// Value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<i64>;
}

impl<S: BuildHasher> Bindings for HashMap<String, i64, S> {
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

impl Bindings for BTreeMap<String, i64> {
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}
