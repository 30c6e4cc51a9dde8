use thiserror::Error;

use super::native::{NativeApi, ERROR_SUCCESS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("{operation} failed with platform error {code}")]
    Platform { operation: &'static str, code: u32 },
    #[error("text contains an interior NUL character")]
    InvalidText,
}

impl WindowError {
    pub fn code(&self) -> Option<u32> {
        match self {
            WindowError::Platform { code, .. } => Some(*code),
            WindowError::InvalidText => None,
        }
    }

    pub fn get_log_level(&self) -> log::Level {
        match self {
            WindowError::Platform { .. } => log::Level::Warn,
            WindowError::InvalidText => log::Level::Error,
        }
    }
}

/// What to do when a native call leaves a non-zero code in the last-error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Surface the code as [`WindowError::Platform`].
    #[default]
    Fail,
    /// Return the raw native result and discard the code. Zero or `false` results are then
    /// ambiguous between success and failure.
    Ignore,
}

/// Clears the last-error slot, runs `f` and checks the slot again.
pub fn call<A, T, F>(api: &A, on_error: OnError, operation: &'static str, f: F) -> Result<T, WindowError>
where
    A: NativeApi + ?Sized,
    F: FnOnce(&A) -> T,
{
    api.set_last_error(ERROR_SUCCESS);
    let result = f(api);
    match api.get_last_error() {
        ERROR_SUCCESS => Ok(result),
        code => match on_error {
            OnError::Fail => Err(WindowError::Platform { operation, code }),
            OnError::Ignore => {
                log::debug!("{} failed with platform error {} (ignored)", operation, code);
                Ok(result)
            }
        },
    }
}
