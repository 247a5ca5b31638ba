//! Launch settings
//!
//! Read once from the environment at startup. Nothing is written back.
//! - `PIXEL_PERIL_SEED`: fixed RNG seed (u64) for a reproducible run
//! - `PIXEL_PERIL_TUNING`: inline JSON overriding any subset of `Tuning`

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game launch settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Pattern RNG seed; random when unset
    pub seed: Option<u64>,
    /// Game balance
    pub tuning: Tuning,
}

impl Settings {
    pub const SEED_VAR: &'static str = "PIXEL_PERIL_SEED";
    pub const TUNING_VAR: &'static str = "PIXEL_PERIL_TUNING";

    /// Load settings from the process environment
    pub fn load() -> Self {
        Self::from_vars(
            std::env::var(Self::SEED_VAR).ok(),
            std::env::var(Self::TUNING_VAR).ok(),
        )
    }

    /// Build settings from raw variable values. Bad values are logged and
    /// replaced by defaults.
    pub fn from_vars(seed: Option<String>, tuning: Option<String>) -> Self {
        let seed = seed.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::warn!("Ignoring {}={:?}: {}", Self::SEED_VAR, raw, e);
                None
            }
        });

        let tuning = match tuning {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", Self::TUNING_VAR, e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };

        Self { seed, tuning }
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
