use gloo_timers::callback::{Interval, Timeout};

/// Source of timed callbacks for components that animate on a clock.
///
/// The handle returned by `repeat` and `once` owns the timer: dropping it
/// cancels the callback, and nothing else does.
pub trait Scheduler {
    type Handle;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn once(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers (`setInterval` / `setTimeout`) through gloo.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub struct BrowserTimer {
    _interval: Option<Interval>,
    _timeout: Option<Timeout>,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer {
            _interval: Some(Interval::new(period_ms, tick)),
            _timeout: None,
        }
    }

    fn once(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer {
            _interval: None,
            _timeout: Some(Timeout::new(delay_ms, fire)),
        }
    }
}

/// Holds at most one timer for a mounted component.
///
/// Starting while a timer is already held is a no-op, so an effect that runs
/// twice cannot leave a second interval behind. `stop` releases the timer.
pub struct ScopedTimer<S: Scheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> ScopedTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            handle: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns `false` when a timer was already held.
    pub fn start_repeating(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(self.scheduler.repeat(period_ms, tick));
        true
    }

    /// Returns `false` when a timer was already held.
    pub fn start_once(&mut self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(self.scheduler.once(delay_ms, fire));
        true
    }

    /// Returns `false` when there was nothing to release.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::{Scheduler, ScopedTimer};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn repeat_fires_once_per_period_until_dropped() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = scheduler.repeat(100, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(99);
        assert_eq!(ticks.get(), 0);
        scheduler.advance(251);
        assert_eq!(ticks.get(), 3);

        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(1_000);
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn once_fires_a_single_time_and_releases_itself() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _handle = scheduler.once(50, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(500);
        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_before_due_cancels_a_one_shot() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.once(50, Box::new(move || flag.set(true)));
        drop(handle);

        scheduler.advance(100);
        assert!(!fired.get());
    }

    #[test]
    fn scoped_timer_holds_a_single_timer() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let mut timer = ScopedTimer::new(scheduler.clone());

        let first = ticks.clone();
        assert!(timer.start_repeating(100, Box::new(move || first.set(first.get() + 1))));
        let second = ticks.clone();
        assert!(!timer.start_repeating(100, Box::new(move || second.set(second.get() + 10))));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(200);
        assert_eq!(ticks.get(), 2);

        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.is_active());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_a_scoped_timer_releases_it() {
        let scheduler = ManualScheduler::new();
        let mut timer = ScopedTimer::new(scheduler.clone());
        timer.start_once(50, Box::new(|| ()));
        assert_eq!(scheduler.pending(), 1);
        drop(timer);
        assert_eq!(scheduler.pending(), 0);
    }
}
