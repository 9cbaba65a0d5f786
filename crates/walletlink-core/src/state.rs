use crate::format::{display_balance, short_address};
use crate::network::network_name;

/// Wallet connection state owned by the wallet component.
///
/// `is_connected` is derived from `address`, so a connected state always has
/// an address and a disconnected one never does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    address: Option<String>,
    balance: Option<String>,
    chain_id: Option<u64>,
}

impl ConnectionState {
    /// Disconnected state with every field empty.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Fully populated connected state. `balance` is in ether.
    pub fn connected(address: impl Into<String>, balance: impl Into<String>, chain_id: u64) -> Self {
        Self {
            address: Some(address.into()),
            balance: Some(balance.into()),
            chain_id: Some(chain_id),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Shortened address for display, empty when disconnected.
    pub fn display_address(&self) -> String {
        self.address.as_deref().map(short_address).unwrap_or_default()
    }

    /// Balance row text (e.g. "1.2346 ETH"), empty when unknown.
    pub fn display_balance(&self) -> String {
        self.balance.as_deref().map(display_balance).unwrap_or_default()
    }

    /// Network row text, empty when unknown.
    pub fn display_network(&self) -> String {
        self.chain_id
            .map(|id| network_name(id).into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disconnected() {
        let state = ConnectionState::default();
        assert!(!state.is_connected());
        assert_eq!(state, ConnectionState::disconnected());
        assert_eq!(state.address(), None);
        assert_eq!(state.balance(), None);
        assert_eq!(state.chain_id(), None);
        assert_eq!(state.display_address(), "");
    }

    #[test]
    fn test_connected_display() {
        let state = ConnectionState::connected(
            "0xABCDEF1234567890000000000000000000000042",
            "2.5",
            137,
        );
        assert!(state.is_connected());
        assert_eq!(state.display_address(), "0xABCD...0042");
        assert_eq!(state.display_balance(), "2.5000 ETH");
        assert_eq!(state.display_network(), "Polygon Mainnet");
    }

    #[test]
    fn test_unknown_chain_display() {
        let state = ConnectionState::connected("0x1234", "0", 999);
        assert_eq!(state.display_network(), "Chain ID: 999");
    }
}
