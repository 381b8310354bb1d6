//! Pure parsing and validation of planner input.
//!
//! Every acquisition path (arguments, plan file, prompts) funnels through
//! these functions so the validation rules live in one place.

use crate::models::{Demand, Ipv4, MAX_HOSTS};
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

lazy_static! {
    static ref DEMAND_SPEC: Regex =
        Regex::new(r"^\s*(?P<name>[^:=]+?)\s*[:=]\s*(?P<hosts>\d+)\s*$").expect("Invalid Regex?");
}

/// Parse and normalize the parent network from CIDR notation.
///
/// The prefix must leave room to subdivide: /30 and finer are rejected
/// since none of their sub-blocks can carry usable hosts. Host bits below
/// the prefix are cleared rather than rejected, so "192.168.1.7/24"
/// normalizes to "192.168.1.0/24".
pub fn parse_parent_network(input: &str) -> Result<Ipv4, Box<dyn Error>> {
    let input = input.trim();
    if !input.contains('/') {
        return Err(format!(
            "Missing prefix length in {input:?}, expected CIDR notation like 192.168.1.0/24"
        )
        .into());
    }

    let parsed = Ipv4::new(input)?;
    if parsed.mask >= 30 {
        return Err(format!(
            "Parent network /{} is too small to subdivide, use /29 or coarser",
            parsed.mask
        )
        .into());
    }

    let network = Ipv4 {
        addr: parsed.lo(),
        mask: parsed.mask,
    };
    if network.addr != parsed.addr {
        log::warn!("Normalized {parsed} to its network address {network}");
    }
    Ok(network)
}

/// Parse a host count: an integer between 1 and 2^32 - 2.
pub fn parse_host_count(input: &str) -> Result<u32, Box<dyn Error>> {
    let input = input.trim();
    let hosts: u64 = input
        .parse()
        .map_err(|_| format!("Invalid host count {input:?}, expected a positive integer"))?;
    if hosts == 0 {
        return Err("Host count must be at least 1".into());
    }
    if hosts > MAX_HOSTS {
        return Err(format!("Host count {hosts} exceeds the IPv4 address space").into());
    }
    Ok(hosts as u32)
}

/// Parse a demand given as "NAME:HOSTS" (or "NAME=HOSTS").
pub fn parse_demand_spec(spec: &str, id: usize) -> Result<Demand, Box<dyn Error>> {
    let captures = DEMAND_SPEC.captures(spec).ok_or_else(|| {
        format!("Invalid LAN spec {spec:?}, expected NAME:HOSTS like Servers:50")
    })?;

    let name = captures["name"].trim().to_string();
    if name.is_empty() {
        return Err(format!("Missing LAN name in {spec:?}").into());
    }
    let hosts_needed = parse_host_count(&captures["hosts"])?;

    Ok(Demand {
        id,
        name,
        hosts_needed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parent_network() {
        assert_eq!(
            parse_parent_network("192.168.1.0/24").unwrap(),
            Ipv4::new("192.168.1.0/24").unwrap()
        );
        // /29 is the finest parent that still subdivides.
        assert_eq!(
            parse_parent_network("10.0.0.0/29").unwrap(),
            Ipv4::new("10.0.0.0/29").unwrap()
        );
        assert_eq!(
            parse_parent_network("  172.16.0.0/16  ").unwrap(),
            Ipv4::new("172.16.0.0/16").unwrap()
        );
    }

    #[test]
    fn test_parse_parent_network_normalizes_host_bits() {
        assert_eq!(
            parse_parent_network("192.168.1.7/24").unwrap(),
            Ipv4::new("192.168.1.0/24").unwrap()
        );
        assert_eq!(
            parse_parent_network("10.1.2.200/23").unwrap(),
            Ipv4::new("10.1.2.0/23").unwrap()
        );
    }

    #[test]
    fn test_parse_parent_network_rejects_small_prefixes() {
        for input in ["192.168.1.0/30", "192.168.1.0/31", "192.168.1.0/32"] {
            assert!(
                parse_parent_network(input).is_err(),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_parent_network_rejects_garbage() {
        assert!(parse_parent_network("192.168.1.0").is_err());
        assert!(parse_parent_network("300.0.0.0/24").is_err());
        assert!(parse_parent_network("192.168.1.0/33").is_err());
        assert!(parse_parent_network("hello/24").is_err());
        assert!(parse_parent_network("").is_err());
    }

    #[test]
    fn test_parse_host_count() {
        assert_eq!(parse_host_count("50").unwrap(), 50);
        assert_eq!(parse_host_count(" 1 ").unwrap(), 1);
        assert_eq!(parse_host_count("4294967294").unwrap(), 4294967294);

        assert!(parse_host_count("0").is_err());
        assert!(parse_host_count("-3").is_err());
        assert!(parse_host_count("4294967295").is_err());
        assert!(parse_host_count("ten").is_err());
        assert!(parse_host_count("").is_err());
    }

    #[test]
    fn test_parse_demand_spec() {
        let demand = parse_demand_spec("Servers:50", 1).unwrap();
        assert_eq!(demand.id, 1);
        assert_eq!(demand.name, "Servers");
        assert_eq!(demand.hosts_needed, 50);

        // '=' works as the separator too, names may carry spaces.
        let demand = parse_demand_spec("Marketing = 20", 2).unwrap();
        assert_eq!(demand.name, "Marketing");
        assert_eq!(demand.hosts_needed, 20);

        let demand = parse_demand_spec("  Dev Team : 12 ", 3).unwrap();
        assert_eq!(demand.name, "Dev Team");
        assert_eq!(demand.hosts_needed, 12);
    }

    #[test]
    fn test_parse_demand_spec_rejects_garbage() {
        assert!(parse_demand_spec("Servers", 1).is_err());
        assert!(parse_demand_spec(":50", 1).is_err());
        assert!(parse_demand_spec(" :50", 1).is_err());
        assert!(parse_demand_spec("Servers:", 1).is_err());
        assert!(parse_demand_spec("Servers:many", 1).is_err());
        assert!(parse_demand_spec("Servers:0", 1).is_err());
        assert!(parse_demand_spec("Servers:-5", 1).is_err());
        assert!(parse_demand_spec("", 1).is_err());
    }
}
