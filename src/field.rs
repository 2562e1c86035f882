//! Field-level validators.
//!
//! Each validator takes one raw cell value and answers yes/no. They are pure
//! and total: malformed input returns `false`, nothing panics or errors out.
//! Row-level orchestration (which column gets which validator, message text)
//! lives in `row`.

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

const JOB_ID_RE: &str = r"^J\d{4}(-\d{2})?$";
const MAC_RE: &str = r"^([0-9a-f]{2}:){5}[0-9a-f]{2}$";

static JOB_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(JOB_ID_RE).unwrap());
static MAC: LazyLock<Regex> = LazyLock::new(|| Regex::new(MAC_RE).unwrap());

/// Job IDs look like `J1001` or `J1023-01`. Case-insensitive, surrounding
/// whitespace ignored.
pub fn validate_job_id(value: &str) -> bool {
    JOB_ID.is_match(&value.trim().to_uppercase())
}

/// Device addresses must be IPv4 and on a private network (10/8, 172.16/12,
/// 192.168/16) or loopback.
pub fn validate_ip(value: &str) -> bool {
    match value.trim().parse::<Ipv4Addr>() {
        Ok(ip) => ip.is_private() || ip.is_loopback(),
        Err(_) => false,
    }
}

/// A subnet mask is valid iff its bits are contiguous ones from the MSB
/// (so `255.255.255.0` passes, `255.255.196.0` does not). `0.0.0.0` is the
/// /0 mask and is accepted; hostmask forms are not.
pub fn validate_subnet_mask(value: &str) -> bool {
    match value.trim().parse::<Ipv4Addr>() {
        Ok(mask) => {
            let bits = u32::from(mask);
            bits.leading_ones() + bits.trailing_zeros() == 32
        }
        Err(_) => false,
    }
}

/// MACs must be exactly six lowercase-hex byte groups joined by colons.
/// Upper or mixed case is rejected.
pub fn validate_mac(value: &str) -> bool {
    MAC.is_match(value.trim())
}

/// Multicast addresses must be IPv4 in 224.0.0.0–239.255.255.255.
pub fn validate_multicast_address(value: &str) -> bool {
    match value.trim().parse::<Ipv4Addr>() {
        Ok(ip) => ip.is_multicast(),
        Err(_) => false,
    }
}

/// Multicast ports must be integers in [1025, 65000]. Non-numeric input
/// fails closed.
pub fn validate_multicast_port(value: &str) -> bool {
    match value.trim().parse::<u32>() {
        Ok(port) => (1025..=65000).contains(&port),
        Err(_) => false,
    }
}

/// Serial numbers are free-form but must be non-blank.
pub fn validate_serial_number(value: &str) -> bool {
    !value.trim().is_empty()
}
