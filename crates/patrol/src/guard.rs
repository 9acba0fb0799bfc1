//! A guard walking a patrol route and reacting to intruders.
//!
//! The guard's state is the context shared by every action in the tree. The
//! tree itself only sees the statuses the callbacks return.

use std::cell::RefCell;
use std::rc::Rc;

use behavior_tree::{Container, Parallel, Status};

use crate::config::PatrolConfig;

/// Ticks a chase lasts before the intruder is caught.
const CHASE_TICKS: u32 = 2;

/// Mutable state of the patrolling guard.
#[derive(Debug, Default)]
pub struct Guard {
    /// Current simulation tick, advanced once per tree tick.
    pub tick: u32,
    /// Waypoint the guard is walking towards.
    pub waypoint: usize,
    pub waypoints: usize,
    pub steps_per_leg: u32,
    steps_taken: u32,
    /// Waypoints reached so far.
    pub legs_walked: u32,
    intruder_at: Option<u32>,
    pub alarm_raised: bool,
    chase_ticks: u32,
    pub intruder_caught: bool,
}

pub type SharedGuard = Rc<RefCell<Guard>>;

impl Guard {
    pub fn shared(config: &PatrolConfig) -> SharedGuard {
        Rc::new(RefCell::new(Self {
            waypoints: config.waypoints,
            steps_per_leg: config.steps_per_leg,
            intruder_at: config.alert_tick,
            ..Self::default()
        }))
    }

    fn intruder_visible(&self) -> bool {
        !self.intruder_caught && self.intruder_at.is_some_and(|at| self.tick >= at)
    }
}

/// Builds the guard's behavior tree.
///
/// ```text
/// parallel
/// ├── advance clock
/// └── selector
///     ├── when intruder visible
///     │   └── sequence: raise alarm, chase
///     └── sequence: walk to waypoint, look around
/// ```
///
/// The selector resumes a pending walk before re-checking for intruders, so
/// an intruder appearing mid-leg is noticed once the guard reaches the
/// waypoint.
pub fn build_tree(guard: &SharedGuard) -> Parallel {
    let mut root = Parallel::new();
    root.action(Rc::clone(guard), advance_clock);

    let options = root.selector();
    options
        .when(Rc::clone(guard), |guard: &mut SharedGuard| {
            if guard.borrow().intruder_visible() {
                Status::Success
            } else {
                Status::Failure
            }
        })
        .then_sequence()
        .action(Rc::clone(guard), raise_alarm)
        .action(Rc::clone(guard), chase);
    options
        .sequence()
        .action(Rc::clone(guard), walk_to_waypoint)
        .action(Rc::clone(guard), look_around);

    root
}

fn advance_clock(guard: &mut SharedGuard) -> Status {
    guard.borrow_mut().tick += 1;
    Status::Success
}

fn raise_alarm(guard: &mut SharedGuard) -> Status {
    let mut guard = guard.borrow_mut();
    if !guard.alarm_raised {
        tracing::warn!(tick = guard.tick, "intruder spotted, raising alarm");
        guard.alarm_raised = true;
    }
    Status::Success
}

fn chase(guard: &mut SharedGuard) -> Status {
    let mut guard = guard.borrow_mut();
    guard.chase_ticks += 1;
    if guard.chase_ticks < CHASE_TICKS {
        tracing::debug!(tick = guard.tick, "chasing intruder");
        return Status::Pending;
    }

    tracing::info!(tick = guard.tick, "intruder caught");
    guard.intruder_caught = true;
    guard.alarm_raised = false;
    guard.chase_ticks = 0;
    Status::Success
}

fn walk_to_waypoint(guard: &mut SharedGuard) -> Status {
    let mut guard = guard.borrow_mut();
    guard.steps_taken += 1;
    if guard.steps_taken < guard.steps_per_leg {
        tracing::debug!(
            waypoint = guard.waypoint,
            step = guard.steps_taken,
            "walking"
        );
        return Status::Pending;
    }

    guard.steps_taken = 0;
    guard.legs_walked += 1;
    guard.waypoint = (guard.waypoint + 1) % guard.waypoints;
    Status::Success
}

fn look_around(guard: &mut SharedGuard) -> Status {
    let guard = guard.borrow();
    tracing::debug!(tick = guard.tick, waypoint = guard.waypoint, "looking around");
    Status::Success
}
