use anyhow::Context;
use serde::{Deserialize, Serialize};
use sinelut::{LutConfig, ScaleFactor};
use std::fs;
use std::path::Path;

/// Table parameters as supplied on the command line or in a YAML file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub resolution: usize,
    pub clock_frequency_hz: f64,
    pub carrier_frequency_hz: f64,
    pub scale_numerator: u32,
    pub scale_denominator: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let scale = ScaleFactor::default();
        Self {
            resolution: 360,
            clock_frequency_hz: 100_000_000.0,
            carrier_frequency_hz: 1_000.0,
            scale_numerator: scale.numerator,
            scale_denominator: scale.denominator,
        }
    }
}

impl GeneratorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading generator config {}", path_ref.display()))?;
        let config: GeneratorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing generator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        resolution: usize,
        clock_frequency_hz: f64,
        carrier_frequency_hz: f64,
        scale_numerator: u32,
        scale_denominator: u32,
    ) -> Self {
        Self {
            resolution,
            clock_frequency_hz,
            carrier_frequency_hz,
            scale_numerator,
            scale_denominator,
        }
    }

    pub fn to_lut_config(&self) -> LutConfig {
        LutConfig::new(
            self.resolution,
            self.clock_frequency_hz,
            self.carrier_frequency_hz,
        )
        .with_scale(ScaleFactor::new(
            self.scale_numerator,
            self.scale_denominator,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_lut_config() {
        let cfg = GeneratorConfig::from_args(256, 50_000_000.0, 10_000.0, 3, 4);
        let lut = cfg.to_lut_config();
        assert_eq!(lut.resolution, 256);
        assert_eq!(lut.scale, ScaleFactor::new(3, 4));
    }

    #[test]
    fn defaults_match_reference_instance() {
        let lut = GeneratorConfig::default().to_lut_config();
        assert_eq!(lut, LutConfig::new(360, 100_000_000.0, 1_000.0));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"resolution: 512\ncarrier_frequency_hz: 2000\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = GeneratorConfig::load(&path).unwrap();
        assert_eq!(cfg.resolution, 512);
        assert_eq!(cfg.carrier_frequency_hz, 2_000.0);
        assert_eq!(cfg.clock_frequency_hz, 100_000_000.0);
        assert_eq!(cfg.scale_denominator, 100);
    }

    #[test]
    fn config_load_rejects_negative_resolution() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"resolution: -4\n").unwrap();
        let path = temp.into_temp_path();
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing generator config"));
    }

    #[test]
    fn config_load_rejects_unknown_keys() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"resolution: 256\ncarrier_hz: 2000\n").unwrap();
        let path = temp.into_temp_path();
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("carrier_hz"));
    }
}
