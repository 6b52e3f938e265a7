//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Multi-threaded executor backed by rayon
///
/// With a thread count, work runs on a dedicated pool of that size;
/// otherwise on rayon's global pool.
#[derive(Debug, Default)]
pub struct ParallelExecutor {
    pool: Option<ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(count)
                    .thread_name(|index| format!("lexto-worker-{index}"))
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    /// Threads available to a batch
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn execute<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Result<R> + Send + Sync,
    {
        let run = || items.par_iter().map(&f).collect::<Result<Vec<R>>>();
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
