use serde::{Deserialize, Serialize};

/// What normalization does with records that only carry base fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierPolicy {
    /// Keep carriers as empty observations so resolved rows line up
    /// one-to-one with the source pack
    #[default]
    Retain,
    /// Remove carriers from the resolved output
    Drop,
}

/// Settings for [`Normalizer`](crate::Normalizer)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Handling of base-only carrier records
    pub carrier_policy: CarrierPolicy,
}

impl NormalizeConfig {
    /// Default configuration, retaining carriers
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the carrier policy
    pub fn carrier_policy(mut self, policy: CarrierPolicy) -> Self {
        self.carrier_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retains_carriers() {
        assert_eq!(NormalizeConfig::default().carrier_policy, CarrierPolicy::Retain);
    }

    #[test]
    fn test_config_from_json() {
        let config: NormalizeConfig =
            serde_json::from_str(r#"{"carrier_policy":"drop"}"#).unwrap();
        assert_eq!(config.carrier_policy, CarrierPolicy::Drop);

        let config: NormalizeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NormalizeConfig::new());
    }
}
