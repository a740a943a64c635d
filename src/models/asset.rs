//! Supported asset table

/// A cryptocurrency offered by the selection control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Display name, e.g. "Bitcoin"
    pub name: &'static str,
    /// Provider identifier, e.g. "bitcoin"
    pub id: &'static str,
}

pub const SUPPORTED_ASSETS: [Asset; 5] = [
    Asset { name: "Bitcoin", id: "bitcoin" },
    Asset { name: "Ethereum", id: "ethereum" },
    Asset { name: "Cardano", id: "cardano" },
    Asset { name: "Solana", id: "solana" },
    Asset { name: "Dogecoin", id: "dogecoin" },
];
