/// Largest value representable by a 4-digit hex word.
pub const MAX_WORD: i64 = 0xFFFF;

/// Common error type for table generation and encoding.
#[derive(thiserror::Error, Debug)]
pub enum LutError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("sample {index} quantizes to {value}, outside the 16-bit word range")]
    SampleOutOfRange { index: usize, value: i64 },
    #[error("malformed table line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type LutResult<T> = Result<T, LutError>;
