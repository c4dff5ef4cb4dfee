use std::net::{Ipv4Addr, Ipv6Addr};

/// IP address utilities
pub struct IpUtils;

impl IpUtils {
    /// Checks for a dotted-quad IPv4 address
    pub fn is_ipv4(content: &str) -> bool {
        content.parse::<Ipv4Addr>().is_ok()
    }

    /// Checks for an IPv6 address in any textual form accepted by `Ipv6Addr`
    pub fn is_ipv6(content: &str) -> bool {
        content.parse::<Ipv6Addr>().is_ok()
    }
}
