use std::env;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Security floor used when nothing else is configured.
pub const DEFAULT_MINIMUM_LAMBDA: u32 = 110;

const MIN_LAMBDA_VAR: &str = "HE_MIN_LAMBDA";
const KEY_SEED_VAR: &str = "HE_KEY_SEED";

/// Where key generation draws its randomness from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entropy {
    /// Operating system entropy. The only choice that gives confidentiality.
    System,
    /// Deterministic keys derived from a fixed seed, for reproducible tests.
    Seeded(u128),
}

/// Settings for one client session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub minimum_lambda: u32,
    pub entropy: Entropy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            minimum_lambda: DEFAULT_MINIMUM_LAMBDA,
            entropy: Entropy::System,
        }
    }
}

impl SessionConfig {
    /// Seeded configuration at the default security floor.
    pub fn seeded(seed: u128) -> Self {
        Self {
            entropy: Entropy::Seeded(seed),
            ..Self::default()
        }
    }

    /// Reads `HE_MIN_LAMBDA` and `HE_KEY_SEED` on top of the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(MIN_LAMBDA_VAR) {
            config.minimum_lambda = value.trim().parse().map_err(|_| Error::InvalidConfig {
                var: MIN_LAMBDA_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(KEY_SEED_VAR) {
            let seed = value.trim().parse().map_err(|_| Error::InvalidConfig {
                var: KEY_SEED_VAR,
                value: value.clone(),
            })?;
            config.entropy = Entropy::Seeded(seed);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_without_variables() {
        let config = SessionConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.minimum_lambda, 110);
        assert_eq!(config.entropy, Entropy::System);
    }

    #[test]
    fn reads_lambda_and_seed() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("HE_MIN_LAMBDA", "128"),
            ("HE_KEY_SEED", " 3141592657 "),
        ]))
        .unwrap();
        assert_eq!(config.minimum_lambda, 128);
        assert_eq!(config.entropy, Entropy::Seeded(3_141_592_657));
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = SessionConfig::from_lookup(lookup_from(&[("HE_KEY_SEED", "pi")])).unwrap_err();
        match err {
            Error::InvalidConfig { var, value } => {
                assert_eq!(var, "HE_KEY_SEED");
                assert_eq!(value, "pi");
            }
            other => panic!("unexpected error {other}"),
        }
    }
}
