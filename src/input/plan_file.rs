//! Plan-request files and result-bundle export.
//!
//! A plan file carries the same request the prompts would collect:
//! `{"network": "a.b.c.d/len", "lans": [{"name": …, "hosts_needed": …}]}`.
//! The export bundle written after planning holds the presentation rows
//! plus a generation timestamp.

use super::parse::parse_parent_network;
use crate::models::{Demand, Ipv4, PlanRequest, MAX_HOSTS};
use crate::output::{plan_rows, PlanRow};
use crate::processing::PlanReport;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// The exported result bundle.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanExport {
    /// Generation timestamp, UTC.
    pub generated_utc: String,
    /// The parent network the plan was carved from.
    pub network: Ipv4,
    /// One row per assigned subnet, ascending by base address.
    pub allocations: Vec<PlanRow>,
    /// Demands no free range could hold.
    pub unsatisfied: Vec<Demand>,
}

/// Read a plan request from a JSON file.
///
/// Demand ids are assigned in file order, starting at 1, and the request
/// passes through the same validation rules as the other input paths.
///
/// # Arguments
/// * `path` - Path to the plan-request JSON file
///
/// # Returns
/// * `Ok(PlanRequest)` - The validated request with normalized network
/// * `Err` - If the file is missing, unparseable or carries invalid values
pub fn read_plan_request(path: &str) -> Result<PlanRequest, Box<dyn Error>> {
    log::info!("#Start read_plan_request( {path} )");

    if !Path::new(path).exists() {
        return Err(format!("Plan file does not exist: {path}").into());
    }
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading plan file {path}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let mut request: PlanRequest = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing plan file {path}: path={} error={}", e.path(), e))?;

    request.network = parse_parent_network(&request.network.to_string())?;

    for (i, lan) in request.lans.iter_mut().enumerate() {
        lan.id = i + 1;
        lan.name = lan.name.trim().to_string();
        if lan.name.is_empty() {
            return Err(format!("LAN {} in {path} has an empty name", lan.id).into());
        }
        if lan.hosts_needed == 0 || u64::from(lan.hosts_needed) > MAX_HOSTS {
            return Err(format!(
                "LAN {:?} in {path} needs between 1 and {MAX_HOSTS} hosts, got {}",
                lan.name, lan.hosts_needed
            )
            .into());
        }
    }

    log::info!("# Got {} LAN demands from {path}", request.lans.len());
    Ok(request)
}

/// Write the result bundle for a planned request to a JSON file.
pub fn write_plan_export(path: &str, report: &PlanReport) -> Result<(), Box<dyn Error>> {
    log::info!("#Start write_plan_export( {path} )");

    let now = chrono::Utc::now();
    let export = PlanExport {
        generated_utc: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        network: report.network,
        allocations: plan_rows(report),
        unsatisfied: report.unsatisfied.clone(),
    };

    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("Error serializing plan export: {e}"))?;
    log::warn!("Writing plan export to file: {path}");
    std::fs::write(path, json).map_err(|e| format!("Error writing export file {path}: {e}"))?;

    Ok(())
}
