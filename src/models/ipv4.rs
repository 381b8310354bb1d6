//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 network ranges with prefix
//! lengths, along with the subnet arithmetic the planner is built on:
//! prefix derivation from a host count, block sizing, alignment checks and
//! equal splitting of a range into smaller blocks.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Maximum host count a single demand may ask for
/// (the full IPv4 space minus network and broadcast).
pub const MAX_HOSTS: u64 = (1u64 << 32) - 2;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// Number of addresses in a block of the given prefix length.
pub fn prefix_size(len: u8) -> u64 {
    assert!(len <= MAX_LENGTH, "len[{len}] > 32 should never happen.");
    1u64 << (MAX_LENGTH - len)
}

/// Number of usable host addresses in a block of the given prefix length.
///
/// Network and broadcast addresses are reserved, so a /30 carries 2 hosts
/// and a /31 or /32 carries none.
pub fn num_hosts(len: u8) -> u64 {
    prefix_size(len).saturating_sub(2)
}

/// Smallest prefix length whose block holds `hosts_needed` usable hosts.
///
/// Reserves 2 addresses (network + broadcast) on top of the requested hosts
/// and rounds up to the next power of two with integer bit operations,
/// since floating-point log2 drifts at power-of-two boundaries. Even a
/// single host costs a /30.
pub fn required_prefix(hosts_needed: u32) -> u8 {
    let needed_size = hosts_needed as u64 + 2;
    assert!(
        needed_size <= 1u64 << 32,
        "needed_size[{needed_size}] exceeds the IPv4 address space, should never happen."
    );
    // bit_length(needed_size - 1) is exactly ceil(log2(needed_size)).
    let bits = (64 - (needed_size - 1).leading_zeros()) as u8;
    MAX_LENGTH - bits
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let ip_u32 = u32::from(ip);
    let trailing_zeros = ip_u32.trailing_zeros() as u8;
    assert!(trailing_zeros <= 32, "Trailing zeros exceed 32 bits");
    32 - trailing_zeros
}

/// IPv4 network range with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The base (network) address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {}", s)));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", parts[1])))?;

        Ok(Ipv4 { addr, mask })
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let mask: u8 = parts[1].parse()?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Number of addresses covered by this range.
    pub fn size(&self) -> u64 {
        prefix_size(self.mask)
    }

    /// Number of usable host addresses in this range.
    pub fn num_hosts(&self) -> u64 {
        num_hosts(self.mask)
    }

    /// The subnet mask in dotted form (e.g., 255.255.255.192 for a /26).
    pub fn netmask(&self) -> Ipv4Addr {
        let mask = get_cidr_mask(self.mask)
            .unwrap_or_else(|e| panic!("Error calculating netmask for {}: {}", self, e));
        Ipv4Addr::from(mask)
    }

    /// Get the highest (broadcast) address in the range.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Get the lowest (network) address in the range.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {}: {}", self, e))
    }

    /// Check whether an IP address falls within this range.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Check if this range starts on a boundary matching its own size.
    ///
    /// A range is only a valid network when its base address is divisible
    /// by its size. Everything the planner hands out must satisfy this.
    pub fn is_aligned(&self) -> bool {
        lo_mask(self.addr) <= self.mask
    }

    /// Split this range into equal sub-ranges of `new_prefix` length.
    ///
    /// A range of prefix length p splits into exactly 2^(new_prefix - p)
    /// aligned sub-ranges in ascending address order. Splitting to the same
    /// prefix returns the range itself; splitting to a coarser prefix is an
    /// error.
    pub fn split(&self, new_prefix: u8) -> Result<Vec<Ipv4>, Box<dyn Error>> {
        if new_prefix > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        if new_prefix < self.mask {
            return Err(format!(
                "Cannot split {} into coarser /{} sub-ranges",
                self, new_prefix
            )
            .into());
        }

        let count = 1u64 << (new_prefix - self.mask);
        let step = prefix_size(new_prefix);
        let base = u32::from(self.lo()) as u64;

        let mut sub_ranges = Vec::with_capacity(count as usize);
        for i in 0..count {
            sub_ranges.push(Ipv4 {
                addr: Ipv4Addr::from((base + i * step) as u32),
                mask: new_prefix,
            });
        }
        Ok(sub_ranges)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
