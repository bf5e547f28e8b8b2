use thiserror::Error;

/// Pixels processed between two polls of a [`CancelToken`] within one row.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame computation cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// Polls the token for the pixel at `column` of a row: at the row start
    /// and then every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
    #[inline]
    fn checkpoint(&self, column: usize) -> Result<(), Cancelled> {
        if column % CANCEL_CHECK_INTERVAL_PIXELS == 0 && self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
