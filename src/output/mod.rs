//! Output formatting for allocation plans.
//!
//! This module handles rendering planner results:
//! - [`table`] - allocation table and capacity-failure block
//! - [`terminal`] - field formatting and colored banners

mod table;
mod terminal;

pub use table::{plan_rows, print_capacity_failure, print_plan, PlanRow};
pub use terminal::{format_field, print_error_block, print_title, print_warning};
