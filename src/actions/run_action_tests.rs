use super::*;
use std::{cell::Cell, rc::Rc};

use crate::actions::action_scheduler::ActionScheduler;

#[test]
fn when_executed_should_run_the_closure_once_and_finish() {
    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    let mut action = RunAction::new("count", move || count_clone.set(count_clone.get() + 1));

    action.initialize();
    assert!(!action.is_finished());

    action.execute();
    assert!(action.is_finished());
    assert_eq!(1, count.get());

    action.execute();
    assert_eq!(1, count.get());
}

#[test]
fn when_initialized_again_should_run_again() {
    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    let mut action = RunAction::new("count", move || count_clone.set(count_clone.get() + 1));

    action.initialize();
    action.execute();
    action.initialize();

    assert!(!action.is_finished());
    action.execute();
    assert_eq!(2, count.get());
}

#[test]
fn when_scheduled_should_retire_after_one_tick() {
    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    let mut scheduler = ActionScheduler::new();

    let handle = scheduler.schedule_action(RunAction::new("count", move || {
        count_clone.set(count_clone.get() + 1)
    }));
    scheduler.run();
    scheduler.run();

    assert!(!scheduler.is_scheduled(handle));
    assert_eq!(1, count.get());
    assert_eq!("count", scheduler.action(handle).unwrap().name());
}
