//! Terminal submission types.

use crate::core::FormData;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a submit handler.
///
/// The controller never inspects or wraps it: whatever the handler returns
/// is handed back to the caller of `advance()`.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The receiving side refused the data, e.g. "Email already registered"
    #[error("{0}")]
    Rejected(String),

    /// Any other failure, typically transport
    #[error(transparent)]
    Failed(Box<dyn StdError + Send + Sync + 'static>),
}

impl SubmitError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn failed<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Failed(Box::new(error))
    }
}

/// Future returned by a submit handler.
pub type SubmitFuture = BoxFuture<'static, Result<(), SubmitError>>;

/// Receiver of the accumulated data once the last step validates.
///
/// Implemented for any `Fn(FormData) -> impl Future<Output = Result<(), SubmitError>>`
/// so plain async closures can be used.
pub trait SubmitHandler: Send + Sync {
    fn submit(&self, data: FormData) -> SubmitFuture;
}

impl<F, Fut> SubmitHandler for F
where
    F: Fn(FormData) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), SubmitError>> + Send + 'static,
{
    fn submit(&self, data: FormData) -> SubmitFuture {
        self(data).boxed()
    }
}

/// Ticket for a dispatched submission.
///
/// Returned by `request_advance()` and consumed by `finish_submit()` or
/// `abort_submit()`. The issuing wizard stays in the submitting state only
/// while the ticket is alive.
#[derive(Debug)]
#[must_use = "a submission must be passed to finish_submit or abort_submit"]
pub struct Submission {
    pub(crate) attempt: usize,
    pub(crate) data: FormData,
    pub(crate) lease: Arc<()>,
}

impl Submission {
    /// Snapshot of the accumulated data to submit.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// 1-based attempt number of this submission.
    pub fn attempt(&self) -> usize {
        self.attempt
    }
}
