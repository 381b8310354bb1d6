// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use models::PlanRequest;
use processing::{plan, PlanOutcome, PlanReport};

/// Plan a full request: the demands go through the capacity gate and the
/// greedy allocation loop, the outcome comes back as data.
pub fn plan_request(request: PlanRequest) -> PlanOutcome {
    plan(request.network, request.lans)
}

// return error if any planned ranges overlap or escape the parent
pub fn check_plan_overlaps(report: &PlanReport) -> Result<(), Box<dyn std::error::Error>> {
    let mut ranges: Vec<models::Ipv4> = report
        .allocations
        .iter()
        .map(|allocation| allocation.subnet)
        .collect();
    ranges.sort();

    for pair in ranges.windows(2) {
        if pair[0].hi() >= pair[1].lo() {
            return Err(format!("Overlap found: {} and {}", pair[0], pair[1]).into());
        }
    }
    for range in &ranges {
        if !report.network.contains(range.lo()) || !report.network.contains(range.hi()) {
            return Err(format!("{} escapes parent network {}", range, report.network).into());
        }
    }
    Ok(())
}
