/// Errors returned by this crate.
///
/// Checksum computation itself never fails; these cover self-tests, catalog
/// lookups and parsing of parameter descriptions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `checksum(b"123456789")` did not produce the documented check value
    #[error("{name}: check value mismatch, expected 0x{expected:04X}, got 0x{actual:04X}")]
    CheckMismatch {
        name: String,
        expected: u16,
        actual: u16,
    },
    #[error("unknown CRC-16 algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("invalid parameter description: {0}")]
    Parse(String),
    #[error("unsupported CRC width {0}, only 16 is supported")]
    UnsupportedWidth(u16),
    #[error("parameter description is missing '{0}'")]
    MissingField(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
