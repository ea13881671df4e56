//! Provides the scheduler that drives [Action] instances through their lifecycle.
//!
//! The scheduler is explicitly constructed and owned by the control loop driver. Actions are
//! stored in an arena and are referred to through an [ActionHandle]. A handle stays valid until
//! the action is removed from the scheduler, after which the slot can be reused by another
//! action without the old handle referring to it.

use std::{
    fmt::Display,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::{debug, trace};

use crate::Error;

use super::action::{Action, ActionState};

#[cfg(test)]
#[path = "action_scheduler_tests.rs"]
mod action_scheduler_tests;

/// Atomic counter for scheduler instances. Used to detect handles that belong to
/// a different scheduler.
static SCHEDULER_ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Defines a stable reference to an action stored in an [ActionScheduler].
///
/// - Can be copied freely
/// - Is never reused for a different action, even if the storage slot is
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ActionHandle {
    /// The ID of the scheduler that issued the handle.
    scheduler: usize,

    /// The index of the storage slot.
    index: usize,

    /// The generation of the storage slot at the time the handle was issued.
    generation: u64,
}

impl Display for ActionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ActionHandle [{}:{}:{}]",
            self.scheduler, self.index, self.generation
        )
    }
}

/// An action together with its lifecycle state.
struct ActionEntry {
    /// The action.
    action: Box<dyn Action>,

    /// The current lifecycle state of the action.
    state: ActionState,
}

/// A storage slot in the action arena.
struct ActionSlot {
    /// Incremented every time the action in the slot is removed.
    generation: u64,

    /// The stored action, if any.
    entry: Option<ActionEntry>,
}

/// Defines a cooperative scheduler that advances every active action once per tick.
///
/// The scheduler provides no priorities, no mutual exclusion and no cancellation. Actions that
/// command the same hardware system are all executed, in the order in which they were
/// scheduled. An action whose [Action::is_finished] never returns `true` is executed on every
/// tick for as long as the scheduler runs.
pub struct ActionScheduler {
    /// The unique ID of the scheduler.
    id: usize,

    /// The arena that stores the actions.
    slots: Vec<ActionSlot>,

    /// The indices of the slots that are empty.
    free_slots: Vec<usize>,

    /// The handles of the active actions in the order in which they were scheduled.
    active: Vec<ActionHandle>,
}

impl ActionScheduler {
    /// Returns the action for the given handle.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidActionHandle] - Returned when the handle does not refer to a stored action
    pub fn action(&self, handle: ActionHandle) -> Result<&dyn Action, Error> {
        let entry = self.entry(handle)?;
        Ok(entry.action.as_ref())
    }

    /// Returns the number of actions that are currently active.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the handles of the active actions in the order in which they are executed.
    pub fn active_handles(&self) -> impl Iterator<Item = &ActionHandle> {
        self.active.iter()
    }

    /// Stores an action in the scheduler without scheduling it.
    ///
    /// The action stays in the [ActionState::Unscheduled] state until [ActionScheduler::schedule]
    /// is called with the returned handle.
    ///
    /// ## Parameters
    ///
    /// * 'action' - The action that should be stored.
    pub fn add<A: Action + 'static>(&mut self, action: A) -> ActionHandle {
        self.insert(ActionEntry {
            action: Box::new(action),
            state: ActionState::Unscheduled,
        })
    }

    /// Stores an entry in a free slot, or in a new slot if there are none, and returns the
    /// handle for it.
    fn insert(&mut self, entry: ActionEntry) -> ActionHandle {
        let index = match self.free_slots.pop() {
            Some(index) => {
                self.slots[index].entry = Some(entry);
                index
            }
            None => {
                self.slots.push(ActionSlot {
                    generation: 0,
                    entry: Some(entry),
                });
                self.slots.len() - 1
            }
        };

        ActionHandle {
            scheduler: self.id,
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Returns the stored entry for the handle.
    fn entry(&self, handle: ActionHandle) -> Result<&ActionEntry, Error> {
        if handle.scheduler != self.id {
            return Err(Error::InvalidActionHandle { handle });
        }

        match self.slots.get(handle.index) {
            Some(slot) if slot.generation == handle.generation => slot
                .entry
                .as_ref()
                .ok_or(Error::InvalidActionHandle { handle }),
            _ => Err(Error::InvalidActionHandle { handle }),
        }
    }

    /// Returns the stored entry for the handle.
    fn entry_mut(&mut self, handle: ActionHandle) -> Result<&mut ActionEntry, Error> {
        if handle.scheduler != self.id {
            return Err(Error::InvalidActionHandle { handle });
        }

        match self.slots.get_mut(handle.index) {
            Some(slot) if slot.generation == handle.generation => slot
                .entry
                .as_mut()
                .ok_or(Error::InvalidActionHandle { handle }),
            _ => Err(Error::InvalidActionHandle { handle }),
        }
    }

    /// Returns a value indicating whether the action is currently active.
    ///
    /// Returns `false` for handles that do not refer to a stored action.
    pub fn is_scheduled(&self, handle: ActionHandle) -> bool {
        matches!(self.state(handle), Ok(ActionState::Active))
    }

    /// Creates a new, empty, [ActionScheduler] instance.
    pub fn new() -> Self {
        Self {
            id: SCHEDULER_ID_COUNTER.fetch_add(1, Ordering::SeqCst),
            slots: Vec::new(),
            free_slots: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Removes an action that is not active from the scheduler and returns it.
    ///
    /// The handle, and any copies of it, become invalid.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidActionHandle] - Returned when the handle does not refer to a stored action
    /// * [Error::ActionStillActive] - Returned when the action is still active. Active actions
    ///   can only leave the scheduler by finishing.
    pub fn remove(&mut self, handle: ActionHandle) -> Result<Box<dyn Action>, Error> {
        if self.entry(handle)?.state == ActionState::Active {
            return Err(Error::ActionStillActive { handle });
        }

        let slot = &mut self.slots[handle.index];
        let entry = slot
            .entry
            .take()
            .ok_or(Error::InvalidActionHandle { handle })?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(handle.index);

        debug!(action = entry.action.name(), %handle, "Removed action");
        Ok(entry.action)
    }

    /// Advances all active actions by one tick.
    ///
    /// Each active action is executed and then asked if it is finished. Finished actions are
    /// ended and retired once all actions have been advanced, so that the set of active actions
    /// does not change while the tick is in progress. The actions that remain active keep their
    /// relative order.
    pub fn run(&mut self) {
        let mut remaining = Vec::with_capacity(self.active.len());
        for handle in &self.active {
            let entry = match self.slots[handle.index].entry.as_mut() {
                Some(e) => e,
                None => continue,
            };

            entry.action.execute();
            if entry.action.is_finished() {
                entry.action.end(false);
                entry.state = ActionState::Finished;

                debug!(action = entry.action.name(), %handle, "Action finished");
            } else {
                remaining.push(*handle);
            }
        }

        let retired = self.active.len() - remaining.len();
        self.active = remaining;

        trace!(
            active = self.active.len(),
            retired,
            "Completed scheduler tick"
        );
    }

    /// Schedules a stored action.
    ///
    /// Initializes the action and makes it active, so that it is executed on the next call to
    /// [ActionScheduler::run]. Scheduling an action that is already active does nothing; in
    /// particular the action is not initialized a second time. An action that has finished
    /// can be scheduled again, in which case it is initialized again.
    ///
    /// ## Parameters
    ///
    /// * 'handle' - The handle of the action that should be scheduled.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidActionHandle] - Returned when the handle does not refer to a stored action
    pub fn schedule(&mut self, handle: ActionHandle) -> Result<(), Error> {
        let entry = self.entry_mut(handle)?;
        if entry.state == ActionState::Active {
            debug!(
                action = entry.action.name(),
                %handle,
                "Action is already scheduled"
            );
            return Ok(());
        }

        entry.action.initialize();
        entry.state = ActionState::Active;
        debug!(action = entry.action.name(), %handle, "Scheduled action");

        self.active.push(handle);
        Ok(())
    }

    /// Stores an action and schedules it straight away. Returns the handle of the action.
    ///
    /// ## Parameters
    ///
    /// * 'action' - The action that should be scheduled.
    pub fn schedule_action<A: Action + 'static>(&mut self, action: A) -> ActionHandle {
        let mut action: Box<dyn Action> = Box::new(action);
        action.initialize();

        let handle = self.insert(ActionEntry {
            action,
            state: ActionState::Active,
        });
        if let Some(entry) = self.slots[handle.index].entry.as_ref() {
            debug!(action = entry.action.name(), %handle, "Scheduled action");
        }

        self.active.push(handle);
        handle
    }

    /// Returns the lifecycle state of the action.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidActionHandle] - Returned when the handle does not refer to a stored action
    pub fn state(&self, handle: ActionHandle) -> Result<ActionState, Error> {
        Ok(self.entry(handle)?.state)
    }
}

impl Default for ActionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
