pub mod stats;

pub use stats::TableStats;
