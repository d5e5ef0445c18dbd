use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Parameters of a CRC-16 algorithm
///
/// Follows the Rocksoft model used by the CRC RevEng catalogue.
/// The polynomial is written MSB-first without the implicit x^16 term.
///
/// | Field         | Meaning                                               |
/// |---------------|-------------------------------------------------------|
/// | `polynomial`  | Generator polynomial, non reflected                   |
/// | `initial`     | Register value before any input is consumed           |
/// | `reflect_in`  | Reverse the bits of every input byte                  |
/// | `reflect_out` | Reverse the bits of the final register before XOR     |
/// | `xor_out`     | Mask XORed into the final value                       |
/// | `check`       | Checksum of the ASCII string `"123456789"`            |
/// | `name`        | Label, no computational role                          |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmParameters {
    polynomial: u16,
    initial: u16,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u16,
    check: u16,
    name: Cow<'static, str>,
}

impl AlgorithmParameters {
    /// Creates a parameter set with a static name, usable in `const` items.
    pub const fn new(
        name: &'static str,
        polynomial: u16,
        initial: u16,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u16,
        check: u16,
    ) -> Self {
        Self {
            polynomial,
            initial,
            reflect_in,
            reflect_out,
            xor_out,
            check,
            name: Cow::Borrowed(name),
        }
    }

    /// Creates a parameter set whose name is only known at runtime.
    pub fn with_name(
        name: impl Into<Cow<'static, str>>,
        polynomial: u16,
        initial: u16,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u16,
        check: u16,
    ) -> Self {
        Self {
            polynomial,
            initial,
            reflect_in,
            reflect_out,
            xor_out,
            check,
            name: name.into(),
        }
    }

    pub const fn polynomial(&self) -> u16 {
        self.polynomial
    }

    pub const fn initial(&self) -> u16 {
        self.initial
    }

    pub const fn reflect_in(&self) -> bool {
        self.reflect_in
    }

    pub const fn reflect_out(&self) -> bool {
        self.reflect_out
    }

    pub const fn xor_out(&self) -> u16 {
        self.xor_out
    }

    /// Expected checksum of `b"123456789"`
    pub const fn check(&self) -> u16 {
        self.check
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AlgorithmParameters {
    /// Formats the parameters as a CRC RevEng catalogue line, which
    /// [`FromStr`] accepts back. `"` and `\` in the name are backslash escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width=16 poly=0x{:04x} init=0x{:04x} refin={} refout={} xorout=0x{:04x} check=0x{:04x} name=\"",
            self.polynomial,
            self.initial,
            self.reflect_in,
            self.reflect_out,
            self.xor_out,
            self.check,
        )?;
        for c in self.name.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

impl FromStr for AlgorithmParameters {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parameters(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KERMIT: AlgorithmParameters =
        AlgorithmParameters::new("CRC-16/KERMIT", 0x1021, 0x0000, true, true, 0x0000, 0x2189);

    #[test]
    fn accessors() {
        assert_eq!(KERMIT.polynomial(), 0x1021);
        assert_eq!(KERMIT.initial(), 0x0000);
        assert!(KERMIT.reflect_in());
        assert!(KERMIT.reflect_out());
        assert_eq!(KERMIT.xor_out(), 0x0000);
        assert_eq!(KERMIT.check(), 0x2189);
        assert_eq!(KERMIT.name(), "CRC-16/KERMIT");
    }

    #[test]
    fn runtime_name_compares_equal_to_static() {
        let owned = AlgorithmParameters::with_name(
            String::from("CRC-16/KERMIT"),
            0x1021,
            0x0000,
            true,
            true,
            0x0000,
            0x2189,
        );
        assert_eq!(owned, KERMIT);
    }

    #[test]
    fn display_is_reveng_line() {
        assert_eq!(
            KERMIT.to_string(),
            "width=16 poly=0x1021 init=0x0000 refin=true refout=true xorout=0x0000 check=0x2189 name=\"CRC-16/KERMIT\""
        );
    }

    #[test]
    fn display_parses_back() {
        let parsed: AlgorithmParameters = KERMIT.to_string().parse().unwrap();
        assert_eq!(parsed, KERMIT);
    }

    #[test]
    fn display_escapes_name() {
        let params = AlgorithmParameters::with_name(
            r#"my "fast" crc \ v2"#,
            0x1021,
            0x0000,
            false,
            false,
            0x0000,
            0x31C3,
        );
        let line = params.to_string();
        assert!(line.ends_with(r#"name="my \"fast\" crc \\ v2""#), "{line}");

        let parsed: AlgorithmParameters = line.parse().unwrap();
        assert_eq!(parsed, params);
    }
}
