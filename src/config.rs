use crate::error::ConfigError;

pub const DEFAULT_CAPACITY: usize = 16; // buckets in a fresh or cleared map
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75; // entries per bucket before growth
pub const MIN_LOAD_FACTOR: f64 = 0.01; // keeps growth at most 100 buckets per entry

/// Sizing parameters of a [`HashMap`](crate::HashMap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashMapConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl HashMapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.load_factor.is_finite() || self.load_factor < MIN_LOAD_FACTOR {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}

impl Default for HashMapConfig {
    fn default() -> Self {
        HashMapConfig {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HashMapConfig::default();
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.load_factor, 0.75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = HashMapConfig::new()
            .with_initial_capacity(4)
            .with_load_factor(2.0);
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.load_factor, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = HashMapConfig::new().with_initial_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn non_positive_load_factor_is_rejected() {
        assert_eq!(
            HashMapConfig::new().with_load_factor(0.0).validate(),
            Err(ConfigError::InvalidLoadFactor(0.0))
        );
        assert_eq!(
            HashMapConfig::new().with_load_factor(-1.5).validate(),
            Err(ConfigError::InvalidLoadFactor(-1.5))
        );
    }

    #[test]
    fn load_factor_below_minimum_is_rejected() {
        assert_eq!(
            HashMapConfig::new().with_load_factor(1e-300).validate(),
            Err(ConfigError::InvalidLoadFactor(1e-300))
        );
        assert!(HashMapConfig::new()
            .with_load_factor(MIN_LOAD_FACTOR)
            .validate()
            .is_ok());
    }

    #[test]
    fn non_finite_load_factor_is_rejected() {
        assert!(HashMapConfig::new()
            .with_load_factor(f64::NAN)
            .validate()
            .is_err());
        assert!(HashMapConfig::new()
            .with_load_factor(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            ConfigError::InvalidLoadFactor(0.0).to_string(),
            "load factor must be finite and at least 0.01, got 0"
        );
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "initial capacity must be at least one bucket"
        );
    }
}
