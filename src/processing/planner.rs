//! Greedy largest-first VLSM planning.
//!
//! Drives the free pool over a full demand list: capacity gate first,
//! then one allocation per demand in descending host order, collecting
//! successes and per-demand failures into a single [`PlanOutcome`].

use super::capacity::{check_capacity, CapacityReport};
use super::pool::FreePool;
use crate::models::{Allocation, Demand, Ipv4};
use itertools::Itertools;
use std::cmp::Reverse;

/// Everything the planner produced for one request that passed the gate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReport {
    /// The parent network the subnets were carved from.
    pub network: Ipv4,
    /// Assigned subnets, ascending by base address.
    pub allocations: Vec<Allocation>,
    /// Demands no free range could hold, in allocation order.
    pub unsatisfied: Vec<Demand>,
}

/// Terminal result of a planning run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// No demands were submitted. A valid end state, not a failure.
    NoDemands,
    /// Total demand exceeds the parent network; nothing was allocated.
    InsufficientCapacity(CapacityReport),
    /// The request was planned. Individual demands may still have failed.
    Planned(PlanReport),
}

/// Plan subnets for every demand inside the parent network.
///
/// Demands are served largest first so later, smaller demands always find
/// the fragments left behind by earlier splits. The sort is stable, so
/// demands with equal host counts keep their submission order.
pub fn plan(network: Ipv4, demands: Vec<Demand>) -> PlanOutcome {
    log::info!("#Start plan( {network}, {} demands )", demands.len());

    if demands.is_empty() {
        log::warn!("No LAN demands submitted, nothing to plan.");
        return PlanOutcome::NoDemands;
    }

    let capacity = check_capacity(network, &demands);
    if !capacity.is_sufficient() {
        log::error!(
            "Insufficient capacity in {network}: {} addresses required, {} available",
            capacity.required_addresses,
            capacity.available_addresses
        );
        return PlanOutcome::InsufficientCapacity(capacity);
    }

    let mut pool = FreePool::new(network);
    let mut allocations: Vec<Allocation> = Vec::new();
    let mut unsatisfied: Vec<Demand> = Vec::new();

    for demand in demands
        .into_iter()
        .sorted_by_key(|demand| Reverse(demand.hosts_needed))
    {
        let prefix = demand.required_prefix();
        match pool.allocate(prefix) {
            Some(subnet) => {
                log::info!("Assigned {subnet} to {demand}");
                allocations.push(Allocation {
                    name: demand.name,
                    hosts_needed: demand.hosts_needed,
                    subnet,
                });
            }
            None => {
                // Recoverable: record the demand and keep serving the rest.
                log::warn!("No free range can hold a /{prefix} for {demand}");
                unsatisfied.push(demand);
            }
        }
    }

    allocations.sort_by_key(|allocation| allocation.subnet.addr);
    log::info!(
        "Planned {} subnets in {network}, {} demands unsatisfied",
        allocations.len(),
        unsatisfied.len()
    );

    PlanOutcome::Planned(PlanReport {
        network,
        allocations,
        unsatisfied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand(id: usize, name: &str, hosts_needed: u32) -> Demand {
        Demand {
            id,
            name: name.to_string(),
            hosts_needed,
        }
    }

    #[test]
    fn test_plan_three_lans_in_a_24() {
        let network = Ipv4::new("192.168.1.0/24").unwrap();
        let demands = vec![
            demand(1, "Servers", 50),
            demand(2, "Marketing", 20),
            demand(3, "Guests", 10),
        ];

        let report = match plan(network, demands) {
            PlanOutcome::Planned(report) => report,
            other => panic!("expected a planned outcome, got {other:?}"),
        };

        assert!(report.unsatisfied.is_empty());
        assert_eq!(report.allocations.len(), 3);

        // Largest demand gets the lowest block; presentation is ascending
        // by base address.
        assert_eq!(report.allocations[0].name, "Servers");
        assert_eq!(
            report.allocations[0].subnet,
            Ipv4::new("192.168.1.0/26").unwrap()
        );
        assert_eq!(report.allocations[1].name, "Marketing");
        assert_eq!(
            report.allocations[1].subnet,
            Ipv4::new("192.168.1.64/27").unwrap()
        );
        assert_eq!(report.allocations[2].name, "Guests");
        assert_eq!(
            report.allocations[2].subnet,
            Ipv4::new("192.168.1.128/28").unwrap()
        );

        for allocation in &report.allocations {
            let subnet = allocation.subnet;
            assert!(subnet.is_aligned(), "{subnet} is not aligned");
            assert!(network.contains(subnet.lo()) && network.contains(subnet.hi()));
            assert!(allocation.usable_hosts() >= allocation.hosts_needed as u64);
        }
    }

    #[test]
    fn test_plan_rejects_oversized_request_before_allocating() {
        let network = Ipv4::new("10.0.0.0/28").unwrap();
        let demands = vec![demand(1, "Lab", 20)];

        match plan(network, demands) {
            PlanOutcome::InsufficientCapacity(report) => {
                assert_eq!(report.available_addresses, 16);
                assert_eq!(report.required_addresses, 32);
            }
            other => panic!("expected a capacity failure, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_without_demands() {
        let network = Ipv4::new("192.168.1.0/24").unwrap();
        assert_eq!(plan(network, vec![]), PlanOutcome::NoDemands);
    }

    #[test]
    fn test_plan_equal_demands_keep_submission_order() {
        let network = Ipv4::new("172.16.0.0/24").unwrap();
        let demands = vec![
            demand(1, "First", 30),
            demand(2, "Second", 30),
            demand(3, "Third", 30),
        ];

        let report = match plan(network, demands) {
            PlanOutcome::Planned(report) => report,
            other => panic!("expected a planned outcome, got {other:?}"),
        };

        // Stable sort: equal host counts are served in submission order,
        // so earlier demands receive lower base addresses.
        assert_eq!(report.allocations[0].name, "First");
        assert_eq!(report.allocations[1].name, "Second");
        assert_eq!(report.allocations[2].name, "Third");
        assert!(report.allocations[0].subnet.addr < report.allocations[1].subnet.addr);
        assert!(report.allocations[1].subnet.addr < report.allocations[2].subnet.addr);
    }

    #[test]
    fn test_plan_mixed_sizes_disjoint_and_aligned() {
        let network = Ipv4::new("10.0.0.0/24").unwrap();
        let demands = vec![
            demand(1, "Factory", 100),
            demand(2, "Office", 50),
            demand(3, "Voice", 20),
            demand(4, "Mgmt", 10),
            demand(5, "UplinkA", 2),
            demand(6, "UplinkB", 1),
        ];

        let report = match plan(network, demands) {
            PlanOutcome::Planned(report) => report,
            other => panic!("expected a planned outcome, got {other:?}"),
        };
        assert!(report.unsatisfied.is_empty());
        assert_eq!(report.allocations.len(), 6);

        for (i, a) in report.allocations.iter().enumerate() {
            assert!(a.subnet.is_aligned(), "{} is not aligned", a.subnet);
            assert!(a.usable_hosts() >= a.hosts_needed as u64);
            for b in report.allocations.iter().skip(i + 1) {
                assert!(
                    a.subnet.hi() < b.subnet.lo() || b.subnet.hi() < a.subnet.lo(),
                    "{} and {} overlap",
                    a.subnet,
                    b.subnet
                );
            }
        }
    }

    #[test]
    fn test_plan_exact_fill() {
        // Four demands of 62 hosts tile a /24 completely.
        let network = Ipv4::new("192.168.0.0/24").unwrap();
        let demands = vec![
            demand(1, "A", 62),
            demand(2, "B", 62),
            demand(3, "C", 62),
            demand(4, "D", 62),
        ];

        let report = match plan(network, demands) {
            PlanOutcome::Planned(report) => report,
            other => panic!("expected a planned outcome, got {other:?}"),
        };
        assert!(report.unsatisfied.is_empty());

        let total: u64 = report.allocations.iter().map(|a| a.subnet.size()).sum();
        assert_eq!(total, network.size());
    }
}
