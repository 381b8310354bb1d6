//! Interactive acquisition of a planning request.

use super::parse::{parse_host_count, parse_parent_network};
use crate::models::{Demand, PlanRequest};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::error::Error;

/// Prompt for the parent network and LAN demands until the input is valid.
///
/// The network prompt repeats until it parses; the LAN loop ends on an
/// empty name, with a confirmation when no demands were entered yet.
pub fn prompt_plan_request() -> Result<PlanRequest, Box<dyn Error>> {
    log::info!("#Start prompt_plan_request()");
    let theme = ColorfulTheme::default();

    let network = loop {
        let answer: String = Input::with_theme(&theme)
            .with_prompt("Parent network in CIDR notation (e.g. 192.168.1.0/24)")
            .interact_text()?;
        match parse_parent_network(&answer) {
            Ok(network) => break network,
            Err(e) => println!("{}", e.to_string().red()),
        }
    };

    let mut lans: Vec<Demand> = Vec::new();
    loop {
        let name: String = Input::with_theme(&theme)
            .with_prompt("LAN name (leave empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        let name = name.trim().to_string();

        if name.is_empty() {
            if lans.is_empty() {
                let finish = Confirm::with_theme(&theme)
                    .with_prompt("No LANs entered yet. Finish without planning anything?")
                    .default(false)
                    .interact()?;
                if finish {
                    break;
                }
                continue;
            }
            break;
        }

        let hosts_needed = loop {
            let answer: String = Input::with_theme(&theme)
                .with_prompt(format!("Hosts needed for {name}"))
                .interact_text()?;
            match parse_host_count(&answer) {
                Ok(hosts) => break hosts,
                Err(e) => println!("{}", e.to_string().red()),
            }
        };

        lans.push(Demand {
            id: lans.len() + 1,
            name,
            hosts_needed,
        });
    }

    log::info!("# Collected {} LAN demands interactively", lans.len());
    Ok(PlanRequest { network, lans })
}
