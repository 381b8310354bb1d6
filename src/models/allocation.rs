//! Subnet allocation result model.

use super::Ipv4;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A subnet carved out of the parent network for one demand.
///
/// Demands carry at least one host, so every assigned subnet is a /30 or
/// coarser and the usable range below is never empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Name of the LAN the subnet was assigned to.
    pub name: String,
    /// Number of usable hosts the demand asked for.
    pub hosts_needed: u32,
    /// The assigned subnet.
    pub subnet: Ipv4,
}

impl Allocation {
    /// Number of usable host addresses the assigned subnet provides.
    pub fn usable_hosts(&self) -> u64 {
        self.subnet.num_hosts()
    }

    /// First usable host address (network address + 1).
    pub fn first_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.subnet.lo()) + 1)
    }

    /// Last usable host address (broadcast address - 1).
    pub fn last_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.subnet.hi()) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_usable_range() {
        let allocation = Allocation {
            name: "Marketing".to_string(),
            hosts_needed: 50,
            subnet: Ipv4::new("192.168.1.64/26").unwrap(),
        };
        assert_eq!(allocation.usable_hosts(), 62);
        assert_eq!(allocation.first_usable(), Ipv4Addr::new(192, 168, 1, 65));
        assert_eq!(allocation.last_usable(), Ipv4Addr::new(192, 168, 1, 126));
        assert_eq!(allocation.subnet.hi(), Ipv4Addr::new(192, 168, 1, 127));
    }

    #[test]
    fn test_allocation_tightest_block_for_one_host() {
        let allocation = Allocation {
            name: "PointToPoint".to_string(),
            hosts_needed: 1,
            subnet: Ipv4::new("10.0.0.0/30").unwrap(),
        };
        assert_eq!(allocation.usable_hosts(), 2);
        assert_eq!(allocation.first_usable(), Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(allocation.last_usable(), Ipv4Addr::new(10, 0, 0, 2));
    }
}
