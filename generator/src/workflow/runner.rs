use crate::workflow::config::GeneratorConfig;
use anyhow::Context;
use log::info;
use sinelut::encode::parse_hex;
use sinelut::{generate, SineLut};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Result of comparing a table on disk with a freshly generated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCheck {
    Match,
    LengthMismatch { expected: usize, found: usize },
    RowMismatch { row: usize, expected: u16, found: u16 },
}

#[derive(Clone)]
pub struct Runner {
    config: GeneratorConfig,
}

impl Runner {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<SineLut> {
        let lut_config = self.config.to_lut_config();
        generate(&lut_config).with_context(|| {
            format!(
                "generating {}-sample table for {} Hz carrier on {} Hz clock",
                lut_config.resolution,
                lut_config.carrier_frequency_hz,
                lut_config.clock_frequency_hz
            )
        })
    }

    /// Writes the table through a temp file in the destination directory so
    /// the target path only ever holds a complete table.
    pub fn write_table<P: AsRef<Path>>(&self, lut: &SineLut, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;

        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temp file in {}", parent.display()))?;
        lut.write_hex(BufWriter::new(temp.as_file_mut()))
            .with_context(|| format!("writing table for {}", path.display()))?;
        if let Some(permissions) = table_permissions(path) {
            temp.as_file()
                .set_permissions(permissions)
                .with_context(|| format!("setting permissions for {}", path.display()))?;
        }
        temp.as_file()
            .sync_all()
            .with_context(|| format!("syncing table for {}", path.display()))?;
        temp.persist(path)
            .with_context(|| format!("persisting table to {}", path.display()))?;

        info!("wrote {} rows to {}", lut.len(), path.display());
        Ok(())
    }

    pub fn verify_table<P: AsRef<Path>>(&self, lut: &SineLut, path: P) -> anyhow::Result<TableCheck> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening table {}", path.display()))?;
        let existing = parse_hex(BufReader::new(file))
            .with_context(|| format!("parsing table {}", path.display()))?;

        if let Some((row, (&expected, &found))) = lut
            .samples
            .iter()
            .zip(existing.iter())
            .enumerate()
            .find(|(_, (expected, found))| expected != found)
        {
            return Ok(TableCheck::RowMismatch {
                row,
                expected,
                found,
            });
        }
        if existing.len() != lut.len() {
            return Ok(TableCheck::LengthMismatch {
                expected: lut.len(),
                found: existing.len(),
            });
        }
        Ok(TableCheck::Match)
    }
}

/// Permissions the persisted table should carry: those of the table being
/// replaced, or world-readable for a new one.
fn table_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }
    default_table_permissions()
}

#[cfg(unix)]
fn default_table_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_table_permissions() -> Option<fs::Permissions> {
    None
}
