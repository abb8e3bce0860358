//! Cancellable timed tasks driven by the frame clock.
//!
//! The scheduler never sleeps. The app asks it for due tasks once per frame and
//! uses [`Scheduler::next_deadline`] to decide when egui should repaint next.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::OverlayId;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SCHEDULER_EVENTS;

/// Handle returned when a task is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// What a task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Maybe spawn a floating stat
    StatTick,
    /// Maybe log a joke to the console
    MessageTick,
    TooltipFadeOut(OverlayId),
    TooltipRemove(OverlayId),
    StatRemove(OverlayId),
    KonamiRevert,
    ButtonFeedbackEnd,
}

#[derive(Debug, Clone)]
struct Task {
    kind: TaskKind,
    due: AppInstant,
    /// `Some` for repeating tasks
    interval: Option<Duration>,
    paused: bool,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: BTreeMap<TaskId, Task>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a one-shot task.
    pub fn after(&mut self, kind: TaskKind, delay: Duration, now: AppInstant) -> TaskId {
        self.insert(Task {
            kind,
            due: now + delay,
            interval: None,
            paused: false,
        })
    }

    /// Arms a repeating task whose first run is one interval from now.
    pub fn every(&mut self, kind: TaskKind, interval: Duration, now: AppInstant) -> TaskId {
        self.insert(Task {
            kind,
            due: now + interval,
            interval: Some(interval),
            paused: false,
        })
    }

    /// Returns false if the task had already fired or been cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let removed = self.tasks.remove(&id).is_some();
        #[cfg(debug_assertions)]
        if PRINT_SCHEDULER_EVENTS && removed {
            log::debug!("[scheduler] cancelled {:?}", id);
        }
        removed
    }

    pub fn pause(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.get_mut(&id) {
            task.paused = true;
        }
    }

    /// Unpauses a task. Repeating tasks restart with a full interval, the same
    /// as clearing an interval timer and starting a fresh one.
    pub fn resume(&mut self, id: TaskId, now: AppInstant) {
        if let Some(task) = self.tasks.get_mut(&id) {
            if !task.paused {
                return;
            }
            task.paused = false;
            if let Some(interval) = task.interval {
                task.due = now + interval;
            } else if task.due < now {
                task.due = now;
            }
        }
    }

    pub fn is_active(&self, id: TaskId) -> bool {
        self.tasks.get(&id).is_some_and(|t| !t.paused)
    }

    pub fn is_paused(&self, id: TaskId) -> bool {
        self.tasks.get(&id).is_some_and(|t| t.paused)
    }

    /// Collects every task due at `now`, earliest first.
    ///
    /// One-shot tasks are dropped once returned. A repeating task fires at most
    /// once per call and is re-armed one interval after `now`, so a long stall
    /// never produces a burst of ticks.
    pub fn due(&mut self, now: AppInstant) -> Vec<(TaskId, TaskKind)> {
        let mut fired: Vec<(AppInstant, TaskId, TaskKind)> = self
            .tasks
            .iter()
            .filter(|(_, task)| !task.paused && task.due <= now)
            .map(|(id, task)| (task.due, *id, task.kind))
            .collect();
        fired.sort_by_key(|(due, id, _)| (*due, *id));

        for (_, id, _) in &fired {
            let rearm = self.tasks.get(id).and_then(|t| t.interval);
            match rearm {
                Some(interval) => {
                    if let Some(task) = self.tasks.get_mut(id) {
                        task.due = now + interval;
                    }
                }
                None => {
                    self.tasks.remove(id);
                }
            }
        }

        #[cfg(debug_assertions)]
        if PRINT_SCHEDULER_EVENTS && !fired.is_empty() {
            log::debug!("[scheduler] fired {} task(s)", fired.len());
        }

        fired.into_iter().map(|(_, id, kind)| (id, kind)).collect()
    }

    /// Earliest deadline among unpaused tasks.
    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.tasks
            .values()
            .filter(|t| !t.paused)
            .map(|t| t.due)
            .min()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    fn insert(&mut self, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        #[cfg(debug_assertions)]
        if PRINT_SCHEDULER_EVENTS {
            log::debug!("[scheduler] armed {:?} as {:?}", task.kind, id);
        }
        self.tasks.insert(id, task);
        id
    }
}
