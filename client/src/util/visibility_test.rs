use super::*;

use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<&'static str>>>;

struct FakeObserver(Log);

impl Disconnect for FakeObserver {
    fn disconnect(&self) {
        self.0.borrow_mut().push("disconnect");
    }
}

struct FakeCallback(Log);

impl Drop for FakeCallback {
    fn drop(&mut self) {
        self.0.borrow_mut().push("callback dropped");
    }
}

fn guard(log: &Log) -> ObserverGuard<FakeObserver, FakeCallback> {
    ObserverGuard::new(FakeObserver(Rc::clone(log)), FakeCallback(Rc::clone(log)))
}

#[test]
fn holding_guard_keeps_observer_connected() {
    let log = Log::default();
    let _guard = guard(&log);
    assert!(log.borrow().is_empty());
}

#[test]
fn dropping_guard_disconnects_before_releasing_callback() {
    let log = Log::default();
    drop(guard(&log));
    assert_eq!(*log.borrow(), vec!["disconnect", "callback dropped"]);
}

#[test]
fn clearing_a_slot_on_unmount_disconnects_each_mounted_observer() {
    let log = Log::default();
    // One slot per mounted card; a rebuilt grid clears every old slot.
    let mut slots: Vec<Option<ObserverGuard<FakeObserver, FakeCallback>>> =
        (0..4).map(|_| Some(guard(&log))).collect();
    for slot in &mut slots {
        *slot = None;
    }
    let disconnects = log.borrow().iter().filter(|e| **e == "disconnect").count();
    assert_eq!(disconnects, 4);
}
