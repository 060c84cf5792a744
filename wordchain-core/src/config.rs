//! Chain-building configuration
//!
//! Policy flags decide which existing chain, if any, a word may join.

use crate::error::{ChainError, Result};

/// Default configuration constants
pub mod defaults {
    /// Pushes each end of a new chain is guaranteed to accept
    pub const CHAIN_CAPACITY: usize = 1500;

    /// Words may repeat within a chain
    pub const ALLOW_DUPLICATES: bool = true;

    /// Chains are not required to grow in length
    pub const STEP_GROWTH: bool = false;
}

/// What happens when the first chain one edit away turns a word down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RejectionPolicy {
    /// Only the first chain one edit away is considered. A duplicate drops
    /// the word; a step-growth rejection at both ends starts a new chain.
    #[default]
    StopAtFirstCandidate,
    /// A rejected chain is skipped and the scan moves on to later chains.
    /// A new chain is started only if no chain accepts the word.
    ContinueScan,
}

/// Configuration for a [`ChainSet`](crate::ChainSet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSetConfig {
    /// Allow a word to appear more than once in the same chain
    pub allow_duplicates: bool,

    /// Require words pushed at the front to be strictly shorter than the
    /// current front, and words pushed at the rear strictly longer than the
    /// current rear
    pub step_growth: bool,

    /// Guaranteed capacity of each new chain, per end
    pub chain_capacity: usize,

    /// Handling of a rejection by the first candidate chain
    pub rejection: RejectionPolicy,
}

impl Default for ChainSetConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: defaults::ALLOW_DUPLICATES,
            step_growth: defaults::STEP_GROWTH,
            chain_capacity: defaults::CHAIN_CAPACITY,
            rejection: RejectionPolicy::default(),
        }
    }
}

impl ChainSetConfig {
    /// Creates a new builder for ChainSetConfig
    pub fn builder() -> ChainSetConfigBuilder {
        ChainSetConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.chain_capacity == 0 {
            return Err(ChainError::InvalidConfig {
                reason: "chain capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for ChainSetConfig with fluent API
#[derive(Debug, Clone, Default)]
pub struct ChainSetConfigBuilder {
    config: ChainSetConfig,
}

impl ChainSetConfigBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow or forbid repeated words within a chain
    pub fn allow_duplicates(mut self, allow: bool) -> Self {
        self.config.allow_duplicates = allow;
        self
    }

    /// Enable or disable step growth
    pub fn step_growth(mut self, enabled: bool) -> Self {
        self.config.step_growth = enabled;
        self
    }

    /// Sets the guaranteed per-end capacity of new chains
    pub fn chain_capacity(mut self, capacity: usize) -> Self {
        self.config.chain_capacity = capacity;
        self
    }

    /// Sets the rejection policy
    pub fn rejection(mut self, policy: RejectionPolicy) -> Self {
        self.config.rejection = policy;
        self
    }

    /// Builds and validates the configuration
    pub fn build(self) -> Result<ChainSetConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChainSetConfig::default();
        assert!(config.allow_duplicates);
        assert!(!config.step_growth);
        assert_eq!(config.chain_capacity, 1500);
        assert_eq!(config.rejection, RejectionPolicy::StopAtFirstCandidate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ChainSetConfig::builder()
            .allow_duplicates(false)
            .step_growth(true)
            .chain_capacity(8)
            .rejection(RejectionPolicy::ContinueScan)
            .build()
            .unwrap();

        assert!(!config.allow_duplicates);
        assert!(config.step_growth);
        assert_eq!(config.chain_capacity, 8);
        assert_eq!(config.rejection, RejectionPolicy::ContinueScan);
    }

    #[test]
    fn test_zero_capacity_is_invalid() {
        let result = ChainSetConfig::builder().chain_capacity(0).build();
        assert!(matches!(result, Err(ChainError::InvalidConfig { .. })));
    }
}
