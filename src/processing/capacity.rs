//! Coarse capacity validation for a planning request.
//!
//! Compares the address total of all demands, rounded up to their
//! power-of-two blocks, against the parent network's address space before
//! any allocation work starts.

use crate::models::{prefix_size, Demand, Ipv4};
use serde::{Deserialize, Serialize};

/// Address accounting for one planning request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    /// Addresses the parent network provides.
    pub available_addresses: u64,
    /// Addresses all demands consume once rounded to power-of-two blocks.
    pub required_addresses: u64,
}

impl CapacityReport {
    /// Whether the parent network can hold every demand.
    ///
    /// Necessary but not sufficient: a fragmented pool can still leave an
    /// individual demand without a block.
    pub fn is_sufficient(&self) -> bool {
        self.required_addresses <= self.available_addresses
    }
}

/// Sum every demand's block size and compare against the parent's size.
pub fn check_capacity(parent: Ipv4, demands: &[Demand]) -> CapacityReport {
    let required_addresses: u64 = demands
        .iter()
        .map(|demand| prefix_size(demand.required_prefix()))
        .sum();

    CapacityReport {
        available_addresses: parent.size(),
        required_addresses,
    }
}
