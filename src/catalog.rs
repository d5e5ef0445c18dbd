//! Predefined CRC-16 algorithms
//!
//! Parameters and check values follow the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/16.htm).
//! Legacy names (`CCITT_FALSE`, `X_25`, ...) are kept as aliases of the
//! catalogue's primary names.
//!
//! ```
//! use crc16_catalog::{catalog, Crc16};
//!
//! let params = catalog::find("modbus").unwrap();
//! assert_eq!(Crc16::new(params.clone()).checksum(b"123456789"), 0x4B37);
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::{AlgorithmParameters as P, Crc16, Error, Result};

pub const DECT_R: P = P::new("CRC-16/DECT-R", 0x0589, 0x0000, false, false, 0x0001, 0x007E);
pub const DECT_X: P = P::new("CRC-16/DECT-X", 0x0589, 0x0000, false, false, 0x0000, 0x007F);
pub const NRSC_5: P = P::new("CRC-16/NRSC-5", 0x080B, 0xFFFF, true, true, 0x0000, 0xA066);
pub const GSM: P = P::new("CRC-16/GSM", 0x1021, 0x0000, false, false, 0xFFFF, 0xCE3C);
pub const KERMIT: P = P::new("CRC-16/KERMIT", 0x1021, 0x0000, true, true, 0x0000, 0x2189);
pub const XMODEM: P = P::new("CRC-16/XMODEM", 0x1021, 0x0000, false, false, 0x0000, 0x31C3);
pub const SPI_FUJITSU: P = P::new("CRC-16/SPI-FUJITSU", 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC);
pub const TMS37157: P = P::new("CRC-16/TMS37157", 0x1021, 0x89EC, true, true, 0x0000, 0x26B1);
pub const RIELLO: P = P::new("CRC-16/RIELLO", 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0);
pub const ISO_IEC_14443_3_A: P =
    P::new("CRC-16/ISO-IEC-14443-3-A", 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05);
pub const IBM_3740: P = P::new("CRC-16/IBM-3740", 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);
pub const GENIBUS: P = P::new("CRC-16/GENIBUS", 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E);
pub const IBM_SDLC: P = P::new("CRC-16/IBM-SDLC", 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);
pub const MCRF4XX: P = P::new("CRC-16/MCRF4XX", 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91);
pub const PROFIBUS: P = P::new("CRC-16/PROFIBUS", 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819);
pub const DNP: P = P::new("CRC-16/DNP", 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82);
pub const EN_13757: P = P::new("CRC-16/EN-13757", 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7);
pub const OPENSAFETY_A: P = P::new("CRC-16/OPENSAFETY-A", 0x5935, 0x0000, false, false, 0x0000, 0x5D38);
pub const M17: P = P::new("CRC-16/M17", 0x5935, 0xFFFF, false, false, 0x0000, 0x772B);
pub const LJ1200: P = P::new("CRC-16/LJ1200", 0x6F63, 0x0000, false, false, 0x0000, 0xBDF4);
pub const OPENSAFETY_B: P = P::new("CRC-16/OPENSAFETY-B", 0x755B, 0x0000, false, false, 0x0000, 0x20FE);
pub const ARC: P = P::new("CRC-16/ARC", 0x8005, 0x0000, true, true, 0x0000, 0xBB3D);
pub const MAXIM_DOW: P = P::new("CRC-16/MAXIM-DOW", 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2);
pub const UMTS: P = P::new("CRC-16/UMTS", 0x8005, 0x0000, false, false, 0x0000, 0xFEE8);
pub const DDS_110: P = P::new("CRC-16/DDS-110", 0x8005, 0x800D, false, false, 0x0000, 0x9ECF);
pub const CMS: P = P::new("CRC-16/CMS", 0x8005, 0xFFFF, false, false, 0x0000, 0xAEE7);
pub const MODBUS: P = P::new("CRC-16/MODBUS", 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37);
pub const USB: P = P::new("CRC-16/USB", 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8);
pub const T10_DIF: P = P::new("CRC-16/T10-DIF", 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB);
pub const TELEDISK: P = P::new("CRC-16/TELEDISK", 0xA097, 0x0000, false, false, 0x0000, 0x0FB3);
pub const CDMA2000: P = P::new("CRC-16/CDMA2000", 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06);

// Legacy names, identical parameters under their older labels
pub const AUG_CCITT: P = P::new("CRC-16/AUG-CCITT", 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC);
pub const CRC_A: P = P::new("CRC-16/CRC-A", 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05);
pub const CCITT_FALSE: P = P::new("CRC-16/CCITT-FALSE", 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);
pub const X_25: P = P::new("CRC-16/X-25", 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);
pub const BUYPASS: P = P::new("CRC-16/BUYPASS", 0x8005, 0x0000, false, false, 0x0000, 0xFEE8);
pub const MAXIM: P = P::new("CRC-16/MAXIM", 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2);

/// Every predefined algorithm, legacy names included
pub static ALL: &[&P] = &[
    &DECT_R,
    &DECT_X,
    &NRSC_5,
    &GSM,
    &KERMIT,
    &XMODEM,
    &SPI_FUJITSU,
    &TMS37157,
    &RIELLO,
    &ISO_IEC_14443_3_A,
    &IBM_3740,
    &GENIBUS,
    &IBM_SDLC,
    &MCRF4XX,
    &PROFIBUS,
    &DNP,
    &EN_13757,
    &OPENSAFETY_A,
    &M17,
    &LJ1200,
    &OPENSAFETY_B,
    &ARC,
    &MAXIM_DOW,
    &UMTS,
    &DDS_110,
    &CMS,
    &MODBUS,
    &USB,
    &T10_DIF,
    &TELEDISK,
    &CDMA2000,
    &AUG_CCITT,
    &CRC_A,
    &CCITT_FALSE,
    &X_25,
    &BUYPASS,
    &MAXIM,
];

/// Lookup keys are upper-cased names without the `CRC-16/` prefix.
static BY_NAME: Lazy<BTreeMap<String, &'static P>> = Lazy::new(|| {
    let map: BTreeMap<_, _> = ALL
        .iter()
        .map(|&params| (normalize(params.name()), params))
        .collect();
    log::trace!("CRC-16 catalog holds {} algorithms", map.len());
    map
});

fn normalize(name: &str) -> String {
    let name = name.trim();
    let name = match name.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("CRC-16/") => &name[7..],
        _ => name,
    };
    name.replace('_', "-").to_ascii_uppercase()
}

/// Finds an algorithm by name.
///
/// Matching ignores case, the `CRC-16/` prefix and the choice of `-` or `_`,
/// so `"CRC-16/MODBUS"`, `"modbus"` and `"Ccitt_False"` all resolve.
pub fn find(name: &str) -> Option<&'static P> {
    BY_NAME.get(&normalize(name)).copied()
}

/// Like [`find`] but reports a miss as [`Error::UnknownAlgorithm`].
pub fn get(name: &str) -> Result<&'static P> {
    find(name).ok_or_else(|| Error::UnknownAlgorithm(name.to_owned()))
}

/// Every registered name, sorted
pub fn names() -> impl Iterator<Item = &'static str> {
    BY_NAME.values().map(|params| params.name())
}

/// Self-tests every predefined algorithm against its check value.
///
/// # Errors
///
/// Returns the first [`Error::CheckMismatch`] encountered.
pub fn verify_all() -> Result<()> {
    ALL.iter()
        .try_for_each(|&params| Crc16::new(params.clone()).verify())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_matches_check_value() {
        for params in ALL {
            let crc = Crc16::new((*params).clone());
            assert_eq!(
                crc.checksum(b"123456789"),
                params.check(),
                "{}",
                params.name()
            );
        }
    }

    #[test]
    fn verify_all_passes() {
        assert_eq!(verify_all(), Ok(()));
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(names().count(), ALL.len());
    }

    #[test]
    fn normalize_strips_prefix_and_case() {
        assert_eq!(normalize("CRC-16/X-25"), "X-25");
        assert_eq!(normalize("crc-16/ccitt_false"), "CCITT-FALSE");
        assert_eq!(normalize(" modbus "), "MODBUS");
        assert_eq!(normalize("arc"), "ARC");
    }

    #[test]
    fn aliases_share_parameters() {
        for (alias, primary) in [
            (&AUG_CCITT, &SPI_FUJITSU),
            (&CRC_A, &ISO_IEC_14443_3_A),
            (&CCITT_FALSE, &IBM_3740),
            (&X_25, &IBM_SDLC),
            (&BUYPASS, &UMTS),
            (&MAXIM, &MAXIM_DOW),
        ] {
            assert_eq!(alias.polynomial(), primary.polynomial());
            assert_eq!(alias.initial(), primary.initial());
            assert_eq!(alias.reflect_in(), primary.reflect_in());
            assert_eq!(alias.reflect_out(), primary.reflect_out());
            assert_eq!(alias.xor_out(), primary.xor_out());
            assert_eq!(alias.check(), primary.check());
        }
    }
}
