//! Chain id to network display name lookup.

use std::borrow::Cow;

/// Known networks, keyed by chain id.
pub const NETWORKS: &[(u64, &str)] = &[
    (1, "Ethereum Mainnet"),
    (5, "Goerli Testnet"),
    (17000, "Holesky Testnet"),
    (11155111, "Sepolia Testnet"),
    (137, "Polygon Mainnet"),
    (80001, "Polygon Mumbai"),
    (10, "OP Mainnet"),
    (42161, "Arbitrum One"),
    (8453, "Base"),
    (56, "BNB Smart Chain"),
    (43114, "Avalanche C-Chain"),
    (324, "zkSync Era"),
    (59144, "Linea"),
    (534352, "Scroll"),
];

/// Display name for a chain id, or `Chain ID: <id>` when unknown.
pub fn network_name(chain_id: u64) -> Cow<'static, str> {
    NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| Cow::Borrowed(*name))
        .unwrap_or_else(|| Cow::Owned(format!("Chain ID: {}", chain_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        assert_eq!(network_name(1), "Ethereum Mainnet");
        assert_eq!(network_name(137), "Polygon Mainnet");
        assert_eq!(network_name(11155111), "Sepolia Testnet");
    }

    #[test]
    fn test_every_table_entry_maps_exactly() {
        for (id, name) in NETWORKS {
            assert_eq!(network_name(*id), *name);
        }
    }

    #[test]
    fn test_unknown_network_shows_id() {
        assert_eq!(network_name(999), "Chain ID: 999");
        assert!(network_name(u64::MAX).contains(&u64::MAX.to_string()));
    }

    #[test]
    fn test_table_has_unique_ids() {
        for (i, (a, _)) in NETWORKS.iter().enumerate() {
            assert!(NETWORKS[i + 1..].iter().all(|(b, _)| a != b));
        }
    }
}
