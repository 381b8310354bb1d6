//! Domain models for the VLSM subnet planner.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Ipv4`] - IPv4 network range with CIDR notation support
//! - [`Demand`] and [`PlanRequest`] - LAN host requirements as submitted
//! - [`Allocation`] - a subnet assigned to one demand

mod allocation;
mod demand;
mod ipv4;

// Re-export public types
pub use allocation::Allocation;
pub use demand::{Demand, PlanRequest};
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, lo_mask, num_hosts, prefix_size, required_prefix,
    Ipv4, MAX_HOSTS, MAX_LENGTH,
};
