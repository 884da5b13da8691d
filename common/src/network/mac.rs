//! # MAC Address Extraction
//!
//! Pulls hardware addresses out of a scan dump such as `nmap -sn` output,
//! where every host block carries a line like:
//!
//! ```text
//! MAC Address: 00:11:22:33:44:55 (Vendor Name)
//! ```
//!
//! Tokens are taken by position only. Nothing checks that they are well formed.

/// Prefix a dump line must start with to be considered.
pub const MARKER: &str = "MAC Address:";

/// Width of a colon separated MAC address (`xx:xx:xx:xx:xx:xx`).
pub const MAC_LEN: usize = 17;

/// Extracts one address token per `MAC Address:` line, in input order.
///
/// The marker and the single character after it are dropped, then at most
/// [`MAC_LEN`] characters are kept. Short lines yield short tokens.
pub fn extract(dump: &str) -> Vec<String> {
    dump.lines()
        .filter_map(|line| line.strip_prefix(MARKER))
        .map(|rest| rest.chars().skip(1).take(MAC_LEN).collect())
        .collect()
}

/// Renders addresses `per_line` at a time, each row on its own tab-indented line.
pub fn grouped(mac_addresses: &[String], per_line: usize) -> String {
    mac_addresses
        .chunks(per_line.max(1))
        .map(|row| row.join(" "))
        .collect::<Vec<String>>()
        .join("\n\t")
}
