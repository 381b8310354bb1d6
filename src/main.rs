use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use vlsm_subnet_planner::input::{
    parse_demand_spec, parse_parent_network, prompt_plan_request, read_plan_request,
    write_plan_export,
};
use vlsm_subnet_planner::models::PlanRequest;
use vlsm_subnet_planner::output::{print_capacity_failure, print_plan, print_warning};
use vlsm_subnet_planner::processing::PlanOutcome;
use vlsm_subnet_planner::{check_plan_overlaps, plan_request};

/// Plan VLSM subnets: carve a parent IPv4 network into the smallest
/// aligned blocks that satisfy each named host-count demand.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Parent network in CIDR notation, e.g. 192.168.1.0/24
    #[arg(short, long, conflicts_with = "plan_file")]
    network: Option<String>,

    /// LAN demand as NAME:HOSTS, repeatable, e.g. --lan Servers:50
    #[arg(
        short,
        long = "lan",
        value_name = "NAME:HOSTS",
        requires = "network",
        conflicts_with = "plan_file"
    )]
    lan: Vec<String>,

    /// JSON plan-request file instead of --network/--lan or prompts
    #[arg(short = 'f', long, value_name = "PATH")]
    plan_file: Option<String>,

    /// Write the result bundle to a JSON file after planning
    #[arg(short, long, value_name = "PATH")]
    export: Option<String>,
}

fn init_logging() {
    // Fall back to console-only warnings when no log4rs.yml is present.
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        let stdout = ConsoleAppender::builder().build();
        let config = Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
            .expect("Error building fallback log config");
        log4rs::init_config(config).expect("Error initializing fallback logging");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    log::info!("#Start main()");

    let args = Args::parse();

    let request: PlanRequest = if let Some(path) = &args.plan_file {
        read_plan_request(path)?
    } else if let Some(network) = &args.network {
        let network = parse_parent_network(network)?;
        let lans = args
            .lan
            .iter()
            .enumerate()
            .map(|(i, spec)| parse_demand_spec(spec, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        PlanRequest { network, lans }
    } else {
        prompt_plan_request()?
    };
    let network = request.network;

    match plan_request(request) {
        PlanOutcome::NoDemands => {
            print_warning("No LAN demands configured, nothing to plan.");
        }
        PlanOutcome::InsufficientCapacity(report) => {
            print_capacity_failure(network, &report);
            return Err(format!(
                "Total demand of {} addresses exceeds the {} available in {network}",
                report.required_addresses, report.available_addresses
            )
            .into());
        }
        PlanOutcome::Planned(report) => {
            check_plan_overlaps(&report)?;
            print_plan(&report);
            if let Some(path) = &args.export {
                write_plan_export(path, &report)?;
            }
        }
    }

    Ok(())
}
