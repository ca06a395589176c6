//! Future-returning form of a confirmation request

use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// How a confirmation awaited through [`PendingConfirm`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
    /// Replaced by a later request, or the store went away, before anyone
    /// answered
    Superseded,
}

impl ConfirmOutcome {
    pub fn is_confirmed(self) -> bool {
        self == ConfirmOutcome::Confirmed
    }
}

/// Resolves once the user answers the request it was created for
#[derive(Debug)]
pub struct PendingConfirm {
    rx: oneshot::Receiver<bool>,
    /// First outcome observed; the receiver must not be read again after it
    done: Option<ConfirmOutcome>,
}

impl PendingConfirm {
    pub(super) fn new(rx: oneshot::Receiver<bool>) -> Self {
        Self { rx, done: None }
    }

    /// Check for an answer without waiting
    ///
    /// Once an outcome is seen it is returned again on every later call.
    pub fn try_outcome(&mut self) -> Option<ConfirmOutcome> {
        if self.done.is_none() {
            self.done = match self.rx.try_recv() {
                Ok(confirmed) => Some(outcome(confirmed)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => Some(ConfirmOutcome::Superseded),
            };
        }
        self.done
    }
}

impl Future for PendingConfirm {
    type Output = ConfirmOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(done) = self.done {
            return Poll::Ready(done);
        }

        let result = Pin::new(&mut self.rx).poll(cx).map(|reply| match reply {
            Ok(confirmed) => outcome(confirmed),
            Err(_) => ConfirmOutcome::Superseded,
        });
        if let Poll::Ready(result) = result {
            self.done = Some(result);
        }
        result
    }
}

fn outcome(confirmed: bool) -> ConfirmOutcome {
    if confirmed {
        ConfirmOutcome::Confirmed
    } else {
        ConfirmOutcome::Cancelled
    }
}

/// Sender shared by the confirm and cancel continuations; whichever runs
/// first answers
pub(super) type SharedReply = Mutex<Option<oneshot::Sender<bool>>>;

pub(super) fn send_reply(reply: &SharedReply, confirmed: bool) {
    let sender = reply
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if let Some(sender) = sender {
        // Receiver may already be gone if the caller stopped waiting
        let _ = sender.send(confirmed);
    }
}
