/// A pending timer that can be stopped before it fires again.
pub trait Cancel {
    fn cancel(self);
}

/// Owns at most one active timer. Starting a new one always cancels the
/// previous one first, so a superseded callback can never run.
pub struct TimerSlot<T: Cancel> {
    active: Option<T>,
}

impl<T: Cancel> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Cancel> TimerSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, timer: T) {
        self.cancel();
        self.active = Some(timer);
    }

    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(t) => {
                t.cancel();
                true
            }
            None => false,
        }
    }

    /// Hand the timer out without cancelling it, e.g. to drop it once its own
    /// callback has returned.
    pub fn take(&mut self) -> Option<T> {
        self.active.take()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
mod gloo_impls {
    use super::Cancel;
    use gloo_timers::callback::{Interval, Timeout};

    impl Cancel for Interval {
        fn cancel(self) {
            drop(Interval::cancel(self));
        }
    }

    impl Cancel for Timeout {
        fn cancel(self) {
            drop(Timeout::cancel(self));
        }
    }
}
