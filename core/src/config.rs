use crate::prelude::{LutError, LutResult};
use serde::{Deserialize, Serialize};

/// Fixed-point amplitude scale applied to the half period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaleFactor {
    pub numerator: u32,
    pub denominator: u32,
}

impl ScaleFactor {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::new(80, 100)
    }
}

/// Immutable parameters describing one lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LutConfig {
    pub resolution: usize,
    pub clock_frequency_hz: f64,
    pub carrier_frequency_hz: f64,
    #[serde(default)]
    pub scale: ScaleFactor,
}

impl LutConfig {
    pub fn new(resolution: usize, clock_frequency_hz: f64, carrier_frequency_hz: f64) -> Self {
        Self {
            resolution,
            clock_frequency_hz,
            carrier_frequency_hz,
            scale: ScaleFactor::default(),
        }
    }

    pub fn with_scale(mut self, scale: ScaleFactor) -> Self {
        self.scale = scale;
        self
    }

    /// Rejects parameters that cannot describe a table.
    pub fn validate(&self) -> LutResult<()> {
        if self.resolution == 0 {
            return Err(LutError::InvalidConfig(
                "resolution must be at least one sample".into(),
            ));
        }
        check_frequency("clock frequency", self.clock_frequency_hz)?;
        check_frequency("carrier frequency", self.carrier_frequency_hz)?;
        if self.scale.numerator == 0 || self.scale.denominator == 0 {
            return Err(LutError::InvalidConfig(format!(
                "scale factor {}/{} must have a positive numerator and denominator",
                self.scale.numerator, self.scale.denominator
            )));
        }
        Ok(())
    }
}

fn check_frequency(name: &str, value: f64) -> LutResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LutError::InvalidConfig(format!(
            "{} must be a positive finite number of Hz, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_config_is_valid() {
        let config = LutConfig::new(360, 100_000_000.0, 1_000.0);
        assert_eq!(config.scale, ScaleFactor::new(80, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let config = LutConfig::new(0, 100_000_000.0, 1_000.0);
        assert!(matches!(config.validate(), Err(LutError::InvalidConfig(_))));
    }

    #[test]
    fn non_positive_frequencies_are_rejected() {
        for (clock, carrier) in [(0.0, 1_000.0), (-1.0, 1_000.0), (1e6, 0.0), (1e6, -5.0)] {
            let config = LutConfig::new(64, clock, carrier);
            assert!(
                matches!(config.validate(), Err(LutError::InvalidConfig(_))),
                "clock {} carrier {} should be rejected",
                clock,
                carrier
            );
        }
    }

    #[test]
    fn non_finite_frequencies_are_rejected() {
        let config = LutConfig::new(64, f64::NAN, 1_000.0);
        assert!(config.validate().is_err());
        let config = LutConfig::new(64, 1e6, f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_scale_denominator_is_rejected() {
        let config = LutConfig::new(64, 1e6, 1e3).with_scale(ScaleFactor::new(80, 0));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("80/0"));
    }
}
