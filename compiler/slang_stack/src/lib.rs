//! Stack growth guard for recursive execution.
//!
//! A slang function call re-enters the whole block extraction and statement
//! dispatch pipeline on the stored body, so a chain of calls becomes a chain
//! of native frames. Wrapping each call in [`ensure_sufficient_stack`] moves
//! the failure mode of runaway recursion from a stack overflow abort to heap
//! growth, and lets legitimately deep call chains complete.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: no-op passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn call_function(&mut self, name: &str) -> Result<(), ExecError> {
///     ensure_sufficient_stack(|| self.run_body(name))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
