//! Sine lookup-table generation for fixed-point direct digital synthesis.
//!
//! A table covers one full carrier cycle. Samples are offset by half the
//! carrier period (in clock cycles) so every entry is non-negative, then
//! quantized by truncation and encoded as 4-digit hex words.

pub mod config;
pub mod encode;
pub mod lut;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use config::{LutConfig, ScaleFactor};
pub use lut::{generate, DerivedConstants, SineLut};
pub use prelude::{LutError, LutResult};
