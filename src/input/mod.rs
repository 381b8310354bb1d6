//! Acquisition of planning requests.
//!
//! This module collects the three input paths:
//! - [`parse`] - pure string parsing and validation rules
//! - [`plan_file`] - JSON plan-request files and result-bundle export
//! - [`interactive`] - terminal prompts that retry until valid

mod interactive;
mod parse;
mod plan_file;

pub use interactive::prompt_plan_request;
pub use parse::{parse_demand_spec, parse_host_count, parse_parent_network};
pub use plan_file::{read_plan_request, write_plan_export, PlanExport};
