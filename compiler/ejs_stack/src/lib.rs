//! Stack safety for the recursive-descent evaluator.
//!
//! Ejscript parses and executes in a single recursive pass, so nested
//! parentheses, nested `if` bodies and native calls that re-enter the
//! evaluator all consume native stack. Two tools keep that bounded:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand so deep
//!   but legal scripts never overflow.
//! - [`DepthBudget`] counts production nesting and refuses to go past a
//!   configured limit, turning runaway recursion into an ordinary error.

/// Minimum stack space to keep available before recursing (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Default nesting limit for evaluator productions.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Run `f`, growing the native stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned by [`DepthBudget::enter`] when the limit would be exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    /// The configured limit that was hit.
    pub limit: usize,
}

/// Nesting counter with a hard limit.
///
/// Callers pair every successful [`enter`](Self::enter) with exactly one
/// [`leave`](Self::leave), including on error paths.
#[derive(Clone, Copy, Debug)]
pub struct DepthBudget {
    depth: usize,
    limit: usize,
}

impl DepthBudget {
    /// Create a budget allowing `limit` nested entries.
    pub const fn new(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    /// Enter one nesting level. The depth is unchanged on failure.
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one nesting level.
    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "DepthBudget::leave() without enter()");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Configured limit.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for DepthBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests;
