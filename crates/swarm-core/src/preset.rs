//! Built-in swarm presets.
//!
//! A preset is a named, curated selection of agent kinds.  Picking one
//! replaces the current selection wholesale, which re-initialises the swarm.

use std::fmt;

use crate::kind::{COLLECTION_DEPLOYER, LENDER, NFT_MINTER, TOKEN_DEPLOYER, TRADER};
use crate::{AgentKind, CoreError, CoreResult};

/// Broad product category a preset belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PresetCategory {
    Defi,
    Nft,
    Trading,
    Yield,
    Meme,
}

impl PresetCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PresetCategory::Defi    => "DEFI",
            PresetCategory::Nft     => "NFT",
            PresetCategory::Trading => "TRADING",
            PresetCategory::Yield   => "YIELD",
            PresetCategory::Meme    => "MEME",
        }
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A curated agent selection.
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmPreset {
    pub id:                 &'static str,
    pub name:               &'static str,
    pub description:        &'static str,
    pub kinds:              &'static [&'static str],
    pub neural_capacity:    u32,
    /// Fraction in `[0, 1]`.
    pub cognitive_variance: f32,
    pub category:           PresetCategory,
}

impl SwarmPreset {
    /// The preset's kinds as an owned selection, in order.
    pub fn selection(&self) -> Vec<AgentKind> {
        self.kinds.iter().copied().map(AgentKind::from).collect()
    }
}

/// The three presets offered on the launch page.
pub static PRESETS: [SwarmPreset; 3] = [
    SwarmPreset {
        id:                 "meme-warfare",
        name:               "Meme Warfare",
        description:        "Deploy a viral meme token with maximum social engagement potential",
        kinds:              &[TOKEN_DEPLOYER, TRADER],
        neural_capacity:    2048,
        cognitive_variance: 0.8,
        category:           PresetCategory::Meme,
    },
    SwarmPreset {
        id:                 "nft-factory",
        name:               "NFT Factory",
        description:        "Launch and manage an NFT collection with automated minting",
        kinds:              &[COLLECTION_DEPLOYER, NFT_MINTER],
        neural_capacity:    3072,
        cognitive_variance: 0.7,
        category:           PresetCategory::Nft,
    },
    SwarmPreset {
        id:                 "defi-yield",
        name:               "DeFi Yield",
        description:        "Optimize yield farming across multiple protocols",
        kinds:              &[TRADER, LENDER],
        neural_capacity:    4096,
        cognitive_variance: 0.9,
        category:           PresetCategory::Yield,
    },
];

/// Look up a built-in preset by id.
pub fn find_preset(id: &str) -> CoreResult<&'static SwarmPreset> {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::UnknownPreset(id.to_owned()))
}
