//! The shared namespace: variables and function bodies.
//!
//! There is one namespace per interpreter. Function calls do not get their
//! own scope: an assignment inside a body is visible to the caller after the
//! call returns.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use slang_expr::Bindings;

/// Variable name to integer value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableStore {
    values: FxHashMap<String, i64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Create or overwrite `name`. Returns the previous value.
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        self.values.insert(name.to_string(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All bindings sorted by name.
    pub fn snapshot(&self) -> Vec<(String, i64)> {
        let mut entries: Vec<(String, i64)> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl Bindings for VariableStore {
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name)
    }
}

impl<N: Into<String>> FromIterator<(N, i64)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (N, i64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Function name to unparsed body text.
///
/// Bodies are `Arc<str>` so a call can hold its body while the call itself
/// redefines the function.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    bodies: FxHashMap<String, Arc<str>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, replacing any earlier definition. Returns `true`
    /// when an earlier definition was replaced.
    pub fn define(&mut self, name: &str, body: &str) -> bool {
        self.bodies.insert(name.to_string(), Arc::from(body)).is_some()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Arc<str>> {
        self.bodies.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Defined function names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bodies.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

/// Everything a statement can read or write.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    pub variables: VariableStore,
    pub functions: FunctionTable,
}

impl Namespace {
    pub fn new(variables: VariableStore) -> Self {
        Self {
            variables,
            functions: FunctionTable::new(),
        }
    }
}
