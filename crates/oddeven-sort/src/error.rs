use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("parallel sorter needs at least one worker thread")]
    ZeroThreads,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unknown sort order `{0}` (expected `descending` or `ascending`)")]
    UnknownOrder(String),
}
