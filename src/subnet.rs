//! Netmask / CIDR prefix conversion helpers used by the troubleshooting
//! views.

use crate::field::validate_subnet_mask;
use std::net::Ipv4Addr;

/// Convert a dotted-decimal mask to its CIDR prefix length
/// ("255.255.255.0" -> 24). `None` for malformed or non-contiguous masks.
pub fn mask_to_prefix(mask: &str) -> Option<u8> {
    if !validate_subnet_mask(mask) {
        return None;
    }
    let addr: Ipv4Addr = mask.trim().parse().ok()?;
    Some(u32::from(addr).count_ones() as u8)
}

/// Convert a CIDR prefix length to a dotted-decimal mask
/// (24 -> 255.255.255.0). `None` for prefixes past /32.
pub fn prefix_to_mask(prefix: u8) -> Option<Ipv4Addr> {
    if prefix > 32 {
        return None;
    }
    let bits = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    };
    Some(Ipv4Addr::from(bits))
}
