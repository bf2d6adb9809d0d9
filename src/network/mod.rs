//! Blockchain network names and the user's selection.
//!
//! # Data Flow
//! ```text
//! stored "networkId" ──initialize()──▶ selector index (silent)
//! select(index) ──▶ store "networkId" ──▶ NetworkChanged subscribers
//! ```

pub mod selector;

pub use selector::{NetworkChanged, NetworkError, NetworkSelector};

use std::fmt;

/// Networks offered by the wallet screen, in dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Testnet,
    Mainnet,
    Betanet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Testnet, Network::Mainnet, Network::Betanet];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
            Network::Betanet => "betanet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_order() {
        let names: Vec<String> = Network::ALL.iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["testnet", "mainnet", "betanet"]);
    }
}
