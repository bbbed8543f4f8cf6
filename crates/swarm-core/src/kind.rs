//! Agent kinds — the opaque labels a user selects to populate the swarm.
//!
//! The simulator never interprets a kind beyond using it to label (and, in
//! a renderer, colour) the agent.  The product ships six built-in kinds,
//! exposed as string constants; any other string is accepted as-is.

use std::fmt;

/// The executive agent that delegates to the others.
pub const CEO: &str = "CEO";
/// Deploys fungible tokens.
pub const TOKEN_DEPLOYER: &str = "TOKEN_DEPLOYER";
/// Deploys NFT collections.
pub const COLLECTION_DEPLOYER: &str = "COLLECTION_DEPLOYER";
/// Mints NFTs into an existing collection.
pub const NFT_MINTER: &str = "NFT_MINTER";
/// Swaps tokens.
pub const TRADER: &str = "TRADER";
/// Lends and stakes idle assets.
pub const LENDER: &str = "LENDER";

/// Every built-in kind, in the product's display order.
pub const BUILTIN: [&str; 6] = [CEO, TOKEN_DEPLOYER, COLLECTION_DEPLOYER, NFT_MINTER, TRADER, LENDER];

/// An opaque agent-kind label.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentKind(String);

impl AgentKind {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw label, e.g. `"TOKEN_DEPLOYER"`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for one of the six [`BUILTIN`] kinds.
    pub fn is_builtin(&self) -> bool {
        BUILTIN.contains(&self.0.as_str())
    }

    /// Label with underscores replaced by spaces, e.g. `"TOKEN DEPLOYER"`.
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl From<&str> for AgentKind {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for AgentKind {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
