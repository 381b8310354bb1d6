//! Allocation table rendering.

use crate::models::{Allocation, Ipv4};
use crate::processing::{CapacityReport, PlanReport};
use serde::{Deserialize, Serialize};

use super::terminal::{format_field, print_error_block, print_title, print_warning};

/// One printable line of the allocation table, also the JSON export shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanRow {
    /// LAN name from the demand.
    pub name: String,
    /// Hosts the demand asked for.
    pub hosts_needed: u32,
    /// Usable hosts the assigned subnet provides.
    pub usable_hosts: u64,
    /// Base (network) address of the assigned subnet.
    pub network_address: String,
    /// Dotted netmask with prefix length, e.g. "255.255.255.192 (/26)".
    pub netmask: String,
    /// First and last usable host, e.g. "192.168.1.65 - 192.168.1.126".
    pub usable_range: String,
    /// Broadcast address of the assigned subnet.
    pub broadcast: String,
}

/// Build presentation rows from a plan report, one per allocation.
///
/// The report's allocations are already ascending by base address and the
/// rows keep that order.
pub fn plan_rows(report: &PlanReport) -> Vec<PlanRow> {
    report.allocations.iter().map(row_from_allocation).collect()
}

fn row_from_allocation(allocation: &Allocation) -> PlanRow {
    let subnet = allocation.subnet;
    PlanRow {
        name: allocation.name.clone(),
        hosts_needed: allocation.hosts_needed,
        usable_hosts: allocation.usable_hosts(),
        network_address: subnet.lo().to_string(),
        netmask: format!("{} (/{})", subnet.netmask(), subnet.mask),
        usable_range: format!(
            "{} - {}",
            allocation.first_usable(),
            allocation.last_usable()
        ),
        broadcast: subnet.hi().to_string(),
    }
}

/// Print the allocation plan as a quoted-column table on stdout.
///
/// Unsatisfied demands are reported as yellow warnings after the table;
/// an empty plan prints a notice instead of a bare header.
pub fn print_plan(report: &PlanReport) {
    log::info!(
        "#Start print_plan() {} allocations, {} unsatisfied",
        report.allocations.len(),
        report.unsatisfied.len()
    );

    if report.allocations.is_empty() {
        print_warning("No subnets have been allocated.");
    } else {
        print_title(&format!("VLSM allocation plan for {}", report.network));
        println!(
            r#"      "lan_name", "hosts_req","hosts_usable",   "network_addr",              "netmask",                     "usable_range",      "broadcast""#
        );
        for row in plan_rows(report) {
            print_plan_row(&row);
        }
    }

    for demand in &report.unsatisfied {
        print_warning(&format!("No contiguous free range could hold {demand}."));
    }
}

/// Print a single table row.
fn print_plan_row(row: &PlanRow) {
    println!(
        r#"{name},{hosts_needed},{usable_hosts},{network_address},{netmask},{usable_range},{broadcast}"#,
        name = format_field(&row.name, 16),
        hosts_needed = format_field(row.hosts_needed, 12),
        usable_hosts = format_field(row.usable_hosts, 14),
        network_address = format_field(&row.network_address, 17),
        netmask = format_field(&row.netmask, 23),
        usable_range = format_field(&row.usable_range, 35),
        broadcast = format_field(&row.broadcast, 17),
    );
}

/// Print the red framed block for a failed capacity gate.
pub fn print_capacity_failure(network: Ipv4, report: &CapacityReport) {
    log::info!("#Start print_capacity_failure() for {network}");
    print_error_block(&[
        format!("ERROR: total demand does not fit in {network}"),
        format!("  Available addresses: {}", report.available_addresses),
        format!("  Required addresses:  {}", report.required_addresses),
    ]);
}
