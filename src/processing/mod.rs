//! Subnet planning logic.
//!
//! This module contains the planning pipeline:
//! - [`capacity`] - coarse capacity gate over the whole request
//! - [`pool`] - free-range pool with split-and-reclaim allocation
//! - [`planner`] - greedy largest-first driver producing a [`PlanOutcome`]

mod capacity;
mod planner;
mod pool;

// Re-export public types and functions
pub use capacity::{check_capacity, CapacityReport};
pub use planner::{plan, PlanOutcome, PlanReport};
pub use pool::FreePool;
