//! Formatting utilities for addresses, balances, and chain ids.

use alloy_primitives::U256;
use alloy_primitives::utils::format_ether;

use crate::config::{BALANCE_PRECISION, BALANCE_SYMBOL, address};

/// Shorten an address for display (`0x1234...5678`).
///
/// Strings not longer than the shortened form itself are returned unchanged,
/// so applying this to its own output is a no-op.
pub fn short_address(addr: &str) -> String {
    let shortened_len = address::PREFIX_LEN + address::ELLIPSIS.len() + address::SUFFIX_LEN;
    if addr.len() <= shortened_len {
        return addr.to_string();
    }

    let suffix_start = addr.len() - address::SUFFIX_LEN;
    match (addr.get(..address::PREFIX_LEN), addr.get(suffix_start..)) {
        (Some(prefix), Some(suffix)) => format!("{}{}{}", prefix, address::ELLIPSIS, suffix),
        _ => addr.to_string(),
    }
}

/// Convert a wei amount into an ether decimal string.
pub fn format_balance(wei: U256) -> String {
    format_ether(wei)
}

/// Render an ether decimal string for the balance row (e.g. "1.2346 ETH").
///
/// Unparseable input is shown as-is rather than hidden.
pub fn display_balance(ether: &str) -> String {
    match ether.trim().parse::<f64>() {
        Ok(value) => format!("{:.*} {}", BALANCE_PRECISION, value, BALANCE_SYMBOL),
        Err(_) => format!("{} {}", ether, BALANCE_SYMBOL),
    }
}

/// Parse an EIP-1193 hex quantity (e.g. "0x89") into a chain id.
pub fn parse_chain_id(hex_str: &str) -> Option<u64> {
    let digits = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}

/// Parse an EIP-1193 hex quantity into a 256-bit integer.
pub fn parse_quantity(hex_str: &str) -> Option<U256> {
    let digits = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    U256::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        let addr = "0xABCDEF1234567890000000000000000000000042";
        assert_eq!(short_address(addr), "0xABCD...0042");
    }

    #[test]
    fn test_short_address_idempotent() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        let once = short_address(addr);
        assert_eq!(once, "0x1234...5678");
        assert_eq!(short_address(&once), once);
    }

    #[test]
    fn test_short_address_short_input() {
        assert_eq!(short_address("0x1234"), "0x1234");
        assert_eq!(short_address(""), "");
    }

    #[test]
    fn test_short_address_non_ascii_does_not_panic() {
        let odd = "0xé234567890abcdef1234567890abcdef1234567é";
        let _ = short_address(odd);
    }

    #[test]
    fn test_format_balance() {
        let one_and_a_half = U256::from(1_500_000_000_000_000_000u128);
        assert!(format_balance(one_and_a_half).starts_with("1.5"));
        assert!(format_balance(U256::ZERO).starts_with('0'));
    }

    #[test]
    fn test_display_balance() {
        assert_eq!(display_balance("1.5"), "1.5000 ETH");
        assert_eq!(display_balance("0.123456789"), "0.1235 ETH");
        assert_eq!(display_balance("oops"), "oops ETH");
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0x89"), Some(137));
        assert_eq!(parse_chain_id("0xaa36a7"), Some(11155111));
        assert_eq!(parse_chain_id("137"), None);
        assert_eq!(parse_chain_id("0xzz"), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0"), Some(U256::ZERO));
        assert_eq!(
            parse_quantity("0xde0b6b3a7640000"),
            Some(U256::from(1_000_000_000_000_000_000u128))
        );
        assert_eq!(parse_quantity("0x"), None);
        assert_eq!(parse_quantity("12"), None);
    }
}
