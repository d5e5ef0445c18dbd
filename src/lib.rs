#![doc = include_str!("../README.md")]
mod digest;
mod engine;
mod error;
mod params;
mod reflect;
pub mod catalog;
pub mod parser;
pub mod stream;

pub use digest::*;
pub use engine::*;
pub use error::*;
pub use params::*;
pub use reflect::*;
pub use stream::CrcStream;

/// Checksum `data` with one of the predefined algorithms, looked up by name.
///
/// Builds a fresh table on every call; keep a [`Crc16`] around when
/// checksumming repeatedly.
///
/// # Errors
///
/// Returns [`Error::UnknownAlgorithm`] if `name` is not in the [`catalog`].
pub fn checksum_by_name(name: &str, data: &[u8]) -> Result<u16> {
    let params = catalog::get(name)?;
    Ok(Crc16::new(params.clone()).checksum(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_by_name() {
        let input = hex::decode("313233343536373839").unwrap();
        assert_eq!(checksum_by_name("CRC-16/ARC", &input), Ok(0xBB3D));
        assert_eq!(checksum_by_name("x-25", &input), Ok(0x906E));
        assert_eq!(
            checksum_by_name("CRC-16/NOPE", &input),
            Err(Error::UnknownAlgorithm("CRC-16/NOPE".into()))
        );
    }

    #[test]
    fn test_arc_bitwise_equivalent() {
        // Value of the LSB-first 0xA001 loop found in many device protocols
        let input = hex::decode(
            "08010000016B40D9AD80010000000000000000000000000000000103021503010101425E10000001",
        )
        .unwrap();
        assert_eq!(checksum_by_name("ARC", &input), Ok(0xF22A));
    }
}
