// Host-side tests for the single-timer slot used by the reveal ticker and
// the toast dismissal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timer {
    include!("../src/timer.rs");
}

use std::cell::RefCell;
use std::rc::Rc;
use timer::*;

/// Stand-in for a browser timer: `pending` plays the event loop queue.
#[derive(Default)]
struct FakeLoop {
    pending: Vec<(u32, bool)>, // (id, cancelled)
    fired: Vec<u32>,
}

impl FakeLoop {
    fn schedule(this: &Rc<RefCell<Self>>, id: u32) -> FakeTimer {
        this.borrow_mut().pending.push((id, false));
        FakeTimer {
            id,
            event_loop: this.clone(),
        }
    }

    fn run_all(&mut self) {
        for (id, cancelled) in self.pending.drain(..) {
            if !cancelled {
                self.fired.push(id);
            }
        }
    }
}

struct FakeTimer {
    id: u32,
    event_loop: Rc<RefCell<FakeLoop>>,
}

impl Cancel for FakeTimer {
    fn cancel(self) {
        for entry in self.event_loop.borrow_mut().pending.iter_mut() {
            if entry.0 == self.id {
                entry.1 = true;
            }
        }
    }
}

#[test]
fn empty_slot_has_nothing_to_cancel() {
    let mut slot: TimerSlot<FakeTimer> = TimerSlot::new();
    assert!(!slot.is_active());
    assert!(!slot.cancel());
    assert!(slot.take().is_none());
}

#[test]
fn superseded_timer_never_fires() {
    let event_loop = Rc::new(RefCell::new(FakeLoop::default()));
    let mut slot = TimerSlot::new();

    slot.start(FakeLoop::schedule(&event_loop, 1));
    slot.start(FakeLoop::schedule(&event_loop, 2));
    assert!(slot.is_active());

    event_loop.borrow_mut().run_all();
    assert_eq!(event_loop.borrow().fired, vec![2]);
}

#[test]
fn cancel_stops_the_active_timer() {
    let event_loop = Rc::new(RefCell::new(FakeLoop::default()));
    let mut slot = TimerSlot::new();

    slot.start(FakeLoop::schedule(&event_loop, 7));
    assert!(slot.cancel());
    assert!(!slot.is_active());
    assert!(!slot.cancel());

    event_loop.borrow_mut().run_all();
    assert!(event_loop.borrow().fired.is_empty());
}

#[test]
fn take_hands_out_without_cancelling() {
    let event_loop = Rc::new(RefCell::new(FakeLoop::default()));
    let mut slot = TimerSlot::new();

    slot.start(FakeLoop::schedule(&event_loop, 3));
    let handle = slot.take();
    assert!(handle.is_some());
    assert!(!slot.is_active());

    event_loop.borrow_mut().run_all();
    assert_eq!(event_loop.borrow().fired, vec![3]);
}

#[test]
fn many_replacements_leave_only_the_last() {
    let event_loop = Rc::new(RefCell::new(FakeLoop::default()));
    let mut slot = TimerSlot::new();
    for id in 0..10 {
        slot.start(FakeLoop::schedule(&event_loop, id));
    }
    event_loop.borrow_mut().run_all();
    assert_eq!(event_loop.borrow().fired, vec![9]);
}
