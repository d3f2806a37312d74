// SPDX-License-Identifier: MPL-2.0
//! Designated consumer thread guard.

use crate::error::{Error, Result};
use std::thread::{self, ThreadId};

/// The thread allowed to submit snackbars and drive the sequencer,
/// conventionally the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerContext {
    thread: ThreadId,
}

impl ConsumerContext {
    /// Designates the calling thread.
    #[must_use]
    pub fn current() -> Self {
        Self {
            thread: thread::current().id(),
        }
    }

    #[must_use]
    pub fn thread(&self) -> ThreadId {
        self.thread
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Fails with [`Error::PreconditionViolation`] off the designated thread.
    pub fn verify(&self) -> Result<()> {
        let actual = thread::current().id();
        if actual == self.thread {
            Ok(())
        } else {
            Err(Error::PreconditionViolation {
                expected: self.thread,
                actual,
            })
        }
    }
}
