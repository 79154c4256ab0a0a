use serde::{Deserialize, Serialize};
use sinelut::math::TableStats;
use sinelut::{DerivedConstants, LutConfig, SineLut};

/// JSON summary of one generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub config: LutConfig,
    pub constants: DerivedConstants,
    pub rows: usize,
    pub stats: Option<TableStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl TableReport {
    pub fn from_lut(lut: &SineLut, output: Option<String>) -> Self {
        Self {
            config: lut.config.clone(),
            constants: lut.constants,
            rows: lut.len(),
            stats: TableStats::from_samples(&lut.samples),
            output,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinelut::generate;

    #[test]
    fn report_serializes_constants_and_stats() {
        let lut = generate(&LutConfig::new(360, 100_000_000.0, 2_000.0)).unwrap();
        let report = TableReport::from_lut(&lut, Some("sine_lut.hex".into()));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["rows"], 360);
        assert_eq!(value["constants"]["amplitude"], 20_000.0);
        assert_eq!(value["config"]["scale"]["denominator"], 100);
        assert_eq!(value["stats"]["max"], 45_000);
        assert_eq!(value["output"], "sine_lut.hex");
    }

    #[test]
    fn report_omits_missing_output() {
        let lut = generate(&LutConfig::new(8, 1_000.0, 10.0)).unwrap();
        let json = TableReport::from_lut(&lut, None).to_json().unwrap();
        assert!(!json.contains("output"));
    }
}
