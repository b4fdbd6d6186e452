//! Kill-chain phases
//!
//! A kill-chain phase names one stage of an attack lifecycle. Both fields
//! are required; the codec is structural and the rule is enforced by the
//! validating constructor.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Well-known kill chain name for the Lockheed Martin Cyber Kill Chain
pub const LOCKHEED_MARTIN_CYBER_KILL_CHAIN: &str = "lockheed-martin-cyber-kill-chain";

/// A named stage of an attack lifecycle
///
/// Both values SHOULD be lowercase with hyphens as word separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KillChainPhase {
    /// Name of the kill chain
    pub kill_chain_name: String,
    /// Name of the phase within that chain
    pub phase_name: String,
}

impl KillChainPhase {
    /// Validating constructor; both arguments are required
    pub fn new(kill_chain_name: impl Into<String>, phase_name: impl Into<String>) -> Result<Self> {
        let phase = KillChainPhase {
            kill_chain_name: kill_chain_name.into(),
            phase_name: phase_name.into(),
        };
        phase.validate()?;
        Ok(phase)
    }

    /// Re-check the required-field rules
    pub fn validate(&self) -> Result<()> {
        if self.kill_chain_name.is_empty() {
            return Err(Error::PropertyMissing("kill_chain_name"));
        }
        if self.phase_name.is_empty() {
            return Err(Error::PropertyMissing("phase_name"));
        }
        Ok(())
    }

    /// Structural decode from JSON bytes, then validate
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let phase: KillChainPhase = serde_json::from_slice(data)?;
        phase.validate()?;
        Ok(phase)
    }
}

// ============================================================================
// Tests
// ============================================================================
