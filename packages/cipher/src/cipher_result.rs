//! Async cipher result type implementing the unwrapping pattern

use crate::{CipherError, Result};
use quill_common::NotResult;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Pending result of a cipher operation running on a tokio task
pub struct CipherResult {
    receiver: Option<oneshot::Receiver<Result<String>>>,
    completed: bool,
}

/// Cipher result with a user-defined result handler
pub struct CipherResultWithHandler<F> {
    receiver: Option<oneshot::Receiver<Result<String>>>,
    handler: Option<F>,
    completed: bool,
}

impl CipherResult {
    /// Create a `CipherResult` from a receiver
    #[must_use]
    pub fn from_receiver(receiver: oneshot::Receiver<Result<String>>) -> Self {
        Self {
            receiver: Some(receiver),
            completed: false,
        }
    }

    /// Create a `CipherResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<String>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self::from_receiver(rx)
    }

    /// Create a `CipherResult` that yields an error
    #[must_use]
    pub fn error(error: CipherError) -> Self {
        Self::ready(Err(error))
    }

    /// Attach a handler that turns the `Result` into a plain value
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> CipherResultWithHandler<F>
    where
        F: FnOnce(Result<String>) -> T,
        T: NotResult,
    {
        CipherResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
            completed: self.completed,
        }
    }
}

fn task_dropped() -> CipherError {
    CipherError::Internal("Cipher task dropped".to_string())
}

impl Future for CipherResult {
    type Output = Result<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.completed {
            return Poll::Ready(Err(CipherError::Internal(
                "CipherResult polled after completion".to_string(),
            )));
        }

        let Some(receiver) = self.receiver.as_mut() else {
            return Poll::Ready(Err(CipherError::Internal(
                "CipherResult receiver already consumed".to_string(),
            )));
        };

        match Pin::new(receiver).poll(cx) {
            Poll::Ready(received) => {
                self.completed = true;
                self.receiver = None;
                Poll::Ready(received.unwrap_or_else(|_| Err(task_dropped())))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for CipherResultWithHandler<F>
where
    F: FnOnce(Result<String>) -> T + Unpin,
    T: NotResult,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // A completed handler future stays pending forever instead of panicking
        if this.completed {
            return Poll::Pending;
        }

        let result = match this.receiver.as_mut() {
            Some(receiver) => match Pin::new(receiver).poll(cx) {
                Poll::Ready(received) => received.unwrap_or_else(|_| Err(task_dropped())),
                Poll::Pending => return Poll::Pending,
            },
            None => Err(CipherError::Internal(
                "CipherResult receiver already consumed".to_string(),
            )),
        };

        this.completed = true;
        this.receiver = None;
        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}
