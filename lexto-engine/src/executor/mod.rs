//! Execution strategies for batch tokenization
//!
//! Documents in a batch are independent: each gets its own tokenizer and
//! only the read-only lexicon is shared, so a batch can be mapped over a
//! thread pool without coordination.

use crate::error::Result;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One document after another on the calling thread
    Sequential,
    /// Documents spread over a rayon thread pool
    Parallel,
}

/// Strategy for mapping a fallible function over a batch
///
/// Results keep the order of `items`. The first error aborts the batch.
pub trait Executor: Send + Sync {
    /// Apply `f` to every item
    fn execute<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Result<R> + Send + Sync;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Pick a mode from the batch size
pub fn auto_select(batch_len: usize, threshold: usize) -> ExecutionMode {
    if batch_len < 2 || batch_len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
