use gloo_timers::callback::Timeout;

/// Coalesces bursts of events into one call after a quiet period.
///
/// Every `schedule` replaces the pending timeout. Dropping a gloo `Timeout`
/// clears it, so superseded work never runs.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
