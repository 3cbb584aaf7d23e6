//! Single-operation-at-a-time access to a codec instance.
//!
//! [`Exclusive`] never blocks: if another thread is inside an operation the
//! caller gets [`BrotliError::ConcurrentAccess`] immediately. A lock poisoned
//! by a panic mid-operation means the native state may be half-updated, so it
//! is reported as [`BrotliError::InvalidState`] from then on.

use std::sync::{Mutex, MutexGuard, TryLockError};

use crate::error::{BrotliError, Result};

#[derive(Debug)]
pub struct Exclusive<T> {
    inner: Mutex<T>,
}

impl<T> Exclusive<T> {
    pub fn new(value: T) -> Self {
        Exclusive { inner: Mutex::new(value) }
    }

    /// Try to enter; fails fast instead of waiting.
    pub fn enter(&self) -> Result<MutexGuard<'_, T>> {
        match self.inner.try_lock() {
            Ok(guard) => Ok(guard),
            Err(TryLockError::WouldBlock) => {
                log::debug!("rejected overlapping call on codec instance");
                Err(BrotliError::ConcurrentAccess)
            }
            Err(TryLockError::Poisoned(_)) => Err(BrotliError::invalid_state(
                "codec instance is unusable after a panic during a previous operation",
            )),
        }
    }

    /// Run `f` with exclusive access to the inner value.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        let mut guard = self.enter()?;
        f(&mut guard)
    }
}
