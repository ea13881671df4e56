use super::*;
use std::{cell::Cell, rc::Rc};

use crate::actions::action_scheduler::ActionScheduler;

#[test]
fn when_condition_is_false_should_not_finish() {
    let action = WaitUntilAction::new(|| false);

    assert!(!action.is_finished());
    assert_eq!("WaitUntilAction", action.name());
}

#[test]
fn when_condition_becomes_true_should_retire_on_that_tick() {
    let sensor = Rc::new(Cell::new(false));
    let sensor_clone = sensor.clone();
    let mut scheduler = ActionScheduler::new();

    let handle = scheduler.schedule_action(WaitUntilAction::new(move || sensor_clone.get()));

    for _ in 0..10 {
        scheduler.run();
        assert!(scheduler.is_scheduled(handle));
    }

    sensor.set(true);
    scheduler.run();

    assert!(!scheduler.is_scheduled(handle));
}

#[test]
fn when_waiting_should_evaluate_the_condition_once_per_tick() {
    let evaluations = Rc::new(Cell::new(0));
    let evaluations_clone = evaluations.clone();
    let mut scheduler = ActionScheduler::new();

    scheduler.schedule_action(WaitUntilAction::new(move || {
        evaluations_clone.set(evaluations_clone.get() + 1);
        evaluations_clone.get() >= 4
    }));

    for _ in 0..10 {
        scheduler.run();
    }

    assert_eq!(4, evaluations.get());
}
