//! LAN demand data model.

use super::{required_prefix, Ipv4};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named request for a subnet sized to hold a number of hosts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Demand {
    /// Position of the demand in the submitted plan, 1-based.
    /// Assigned by the input layer; equal host counts keep this order.
    #[serde(default)]
    pub id: usize,
    /// Name of the LAN this subnet is for.
    pub name: String,
    /// Number of usable host addresses required.
    pub hosts_needed: u32,
}

impl Demand {
    /// Smallest prefix length whose block satisfies this demand.
    pub fn required_prefix(&self) -> u8 {
        required_prefix(self.hosts_needed)
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} hosts)", self.name, self.hosts_needed)
    }
}

/// A full planning request: the parent network plus the ordered demands.
///
/// Doubles as the JSON schema of a plan-request file and the in-memory
/// input every acquisition path (file, arguments, prompts) produces.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanRequest {
    /// The parent network to carve up.
    pub network: Ipv4,
    /// The LANs that need subnets, in submission order.
    pub lans: Vec<Demand>,
}
