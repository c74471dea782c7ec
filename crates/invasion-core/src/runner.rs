//! Simulation loop runner.
//!
//! [`run_simulation`] checks the termination conditions before every turn
//! and runs turns until one of them holds. Termination is guaranteed: each
//! live alien either spends one unit of its move budget per turn, gets
//! stuck, or dies.

use tracing::{debug, info};

use invasion_types::EndReason;

use crate::turn::{self, TurnSummary};
use crate::world::{EVENT_TARGET, World};

/// Result of the simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: EndReason,
    /// The last turn summary, if any turn ran.
    pub final_summary: Option<TurnSummary>,
    /// Total number of turns executed.
    pub total_turns: u64,
}

/// Callback invoked after each turn completes.
pub trait TurnCallback {
    /// Called after a turn completes.
    fn on_turn(&mut self, summary: &TurnSummary, world: &World);
}

/// A no-op turn callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl TurnCallback for NoOpCallback {
    fn on_turn(&mut self, _summary: &TurnSummary, _world: &World) {}
}

/// Run turns until a termination condition is met.
///
/// The terminal status line is logged under the event target.
pub fn run_simulation(world: &mut World, callback: &mut dyn TurnCallback) -> SimulationResult {
    let mut last_summary: Option<TurnSummary> = None;
    let mut total_turns: u64 = 0;

    debug!(
        max_iterations = world.max_iterations(),
        aliens = world.aliens().count(),
        "Simulation starting"
    );

    loop {
        if let Some(reason) = world.end_reason() {
            info!(target: EVENT_TARGET, "{reason}");
            return SimulationResult {
                end_reason: reason,
                final_summary: last_summary,
                total_turns,
            };
        }

        let summary = turn::run_turn(world);
        total_turns = total_turns.saturating_add(1);
        callback.on_turn(&summary, world);
        last_summary = Some(summary);
    }
}

/// Log the simulation end with the final world statistics.
pub fn log_simulation_end(result: &SimulationResult, world: &World) {
    debug!(
        reason = ?result.end_reason,
        total_turns = result.total_turns,
        final_turn = result.final_summary.as_ref().map(|s| s.turn),
        aliens_dead = world.dead_count(),
        aliens_active = world.active_count(),
        cities_standing = world.cities().surviving_count(),
        cities_total = world.cities().city_count(),
        "Simulation ended"
    );
}
