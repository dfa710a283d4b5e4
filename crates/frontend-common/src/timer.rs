//! One-shot timers owned by their handle
//!
//! In the browser this is a `setTimeout` through gloo. Native builds run the
//! callback on a tokio local task, so callers must be inside a `LocalSet`.

/// Pending callback. Dropping the handle cancels it.
pub struct TimerHandle {
    #[cfg(target_arch = "wasm32")]
    inner: gloo::timers::callback::Timeout,
    #[cfg(not(target_arch = "wasm32"))]
    inner: tokio::task::JoinHandle<()>,
}

impl TimerHandle {
    /// Run `callback` once after `delay_ms` milliseconds
    #[cfg(target_arch = "wasm32")]
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        Self {
            inner: gloo::timers::callback::Timeout::new(delay_ms, callback),
        }
    }

    /// Run `callback` once after `delay_ms` milliseconds
    #[cfg(not(target_arch = "wasm32"))]
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        let delay = std::time::Duration::from_millis(u64::from(delay_ms));
        Self {
            inner: tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                callback();
            }),
        }
    }

    /// Cancel the callback if it has not run yet
    pub fn cancel(self) {
        #[cfg(target_arch = "wasm32")]
        drop(self.inner.cancel());
        #[cfg(not(target_arch = "wasm32"))]
        self.inner.abort();
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.inner.abort();
    }
}
