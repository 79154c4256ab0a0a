use crate::config::LutConfig;
use crate::encode::{checked_word, write_hex};
use crate::prelude::{LutError, LutResult};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::io::Write;

/// Constants derived once per table from a [`LutConfig`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DerivedConstants {
    /// Clock cycles per carrier period; may be fractional.
    pub period_cycles: f64,
    /// Peak deviation from `center`, floor-divided in two steps.
    pub amplitude: f64,
    /// DC offset keeping every sample non-negative.
    pub center: f64,
}

impl DerivedConstants {
    pub fn from_config(config: &LutConfig) -> LutResult<Self> {
        config.validate()?;

        let period_cycles = config.clock_frequency_hz / config.carrier_frequency_hz;
        let half_period = period_cycles.div_euclid(2.0);
        let amplitude = (half_period * f64::from(config.scale.numerator))
            .div_euclid(f64::from(config.scale.denominator));
        let center = period_cycles / 2.0;

        if !(period_cycles.is_finite() && amplitude.is_finite()) {
            return Err(LutError::InvalidConfig(format!(
                "clock {} Hz over carrier {} Hz does not yield a finite period",
                config.clock_frequency_hz, config.carrier_frequency_hz
            )));
        }

        Ok(Self {
            period_cycles,
            amplitude,
            center,
        })
    }

    /// Quantizes the sample at `index` of a `resolution`-entry cycle.
    ///
    /// The value is truncated toward zero, not rounded, so tables stay
    /// bit-compatible with those already loaded into hardware.
    pub fn sample(&self, index: usize, resolution: usize) -> LutResult<u16> {
        let phase = 2.0 * PI * index as f64 / resolution as f64;
        let raw = self.center + self.amplitude * phase.sin();
        checked_word(index, raw.trunc() as i64)
    }
}

/// One full quantized sine cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SineLut {
    pub config: LutConfig,
    pub constants: DerivedConstants,
    pub samples: Vec<u16>,
}

impl SineLut {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn write_hex<W: Write>(&self, writer: W) -> LutResult<()> {
        write_hex(&self.samples, writer)
    }
}

/// Builds the table for `config`, failing on the first sample that does not
/// fit in a 16-bit word.
pub fn generate(config: &LutConfig) -> LutResult<SineLut> {
    let logger = LogManager::new();
    let constants = DerivedConstants::from_config(config)?;
    logger.detail(&format!(
        "period {} cycles, amplitude {}, center {}",
        constants.period_cycles, constants.amplitude, constants.center
    ));

    let samples = (0..config.resolution)
        .map(|index| constants.sample(index, config.resolution))
        .collect::<LutResult<Vec<_>>>()?;

    logger.record(&format!(
        "generated {} samples for {} Hz carrier on {} Hz clock",
        samples.len(),
        config.carrier_frequency_hz,
        config.clock_frequency_hz
    ));

    Ok(SineLut {
        config: config.clone(),
        constants,
        samples,
    })
}
