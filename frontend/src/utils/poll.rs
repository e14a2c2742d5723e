//! Cancellable periodic task bound to a view's lifecycle.
//!
//! In the browser each run is backed by a `gloo_timers` interval, which is
//! cleared as soon as the handle is dropped. Native builds have no timer
//! source, so the callback is kept and tests fire ticks by hand.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
type TickHandle = gloo_timers::callback::Interval;

#[cfg(not(target_arch = "wasm32"))]
type TickHandle = std::rc::Rc<dyn Fn()>;

#[derive(Default)]
pub struct PollingTask {
    handle: Option<TickHandle>,
    runs: u32,
}

impl PollingTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the current run, if any, and schedules `tick` every `period`.
    pub fn restart(&mut self, period: Duration, tick: impl Fn() + 'static) {
        self.cancel();
        self.handle = Some(schedule(period, tick));
        self.runs = self.runs.wrapping_add(1);
        log::debug!(
            "polling task started (run #{}, every {:?})",
            self.runs,
            period
        );
    }

    pub fn cancel(&mut self) {
        if self.handle.take().is_some() {
            log::debug!("polling task cancelled (run #{})", self.runs);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of times the task has been (re)started.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn fire(&self) -> bool {
        match &self.handle {
            Some(tick) => {
                tick();
                true
            }
            None => false,
        }
    }
}

impl Drop for PollingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule(period: Duration, tick: impl Fn() + 'static) -> TickHandle {
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Interval::new(millis, tick)
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule(_period: Duration, tick: impl Fn() + 'static) -> TickHandle {
    std::rc::Rc::new(tick)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn interval_handle_is_cleared_on_cancel() {
        let mut task = PollingTask::new();
        task.restart(Duration::from_millis(50), || {});
        assert!(task.is_running());
        task.cancel();
        assert!(!task.is_running());
    }
}
