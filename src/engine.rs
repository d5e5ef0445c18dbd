use crate::{reflect8, reflect16, AlgorithmParameters, Error, Result};

/// Running CRC register, owned by the caller between [`Crc16::init`] and
/// [`Crc16::finalize`]
pub type Register = u16;

/// ASCII bytes every catalogued check value is computed over
pub const CHECK_INPUT: &[u8] = b"123456789";

/// Builds the MSB-first lookup table for `polynomial`
///
/// Entry `n` is the register obtained by shifting `n << 8` through eight
/// rounds of the bit-serial division.
pub const fn build_table(polynomial: u16) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut n = 0;
    while n < 256 {
        let mut crc = (n as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ polynomial;
            } else {
                crc <<= 1;
            }
            bit += 1;
        }
        table[n] = crc;
        n += 1;
    }
    table
}

/// Table driven CRC-16 engine
///
/// Immutable once built. Every computation threads its own [`Register`]
/// through [`init`](Self::init), [`update`](Self::update) and
/// [`finalize`](Self::finalize), so one engine can be shared by any number of
/// concurrent computations.
///
/// ```
/// use crc16_catalog::{catalog, Crc16};
///
/// let crc = Crc16::new(catalog::XMODEM);
/// let mut register = crc.init();
/// register = crc.update(register, b"1234");
/// register = crc.update(register, b"56789");
/// assert_eq!(crc.finalize(register), 0x31C3);
/// assert_eq!(crc.checksum(b"123456789"), 0x31C3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crc16 {
    params: AlgorithmParameters,
    table: [u16; 256],
}

impl Crc16 {
    pub fn new(params: AlgorithmParameters) -> Self {
        log::debug!(
            "building CRC-16 table for {} (poly 0x{:04X})",
            params.name(),
            params.polynomial()
        );
        Self::new_const(params)
    }

    /// Same as [`new`](Self::new) but usable for `static` engines.
    pub const fn new_const(params: AlgorithmParameters) -> Self {
        let table = build_table(params.polynomial());
        Self { params, table }
    }

    pub fn params(&self) -> &AlgorithmParameters {
        &self.params
    }

    pub fn table(&self) -> &[u16; 256] {
        &self.table
    }

    #[inline]
    pub fn init(&self) -> Register {
        self.params.initial()
    }

    /// Feeds `data` into `crc` and returns the new register.
    ///
    /// Splitting the input across several calls yields the same register as
    /// one call over the concatenation.
    #[inline]
    pub fn update(&self, mut crc: Register, data: &[u8]) -> Register {
        let reflect_in = self.params.reflect_in();
        for &byte in data {
            let byte = if reflect_in { reflect8(byte) } else { byte };
            let index = ((crc >> 8) as u8) ^ byte;
            crc = (crc << 8) ^ self.table[index as usize];
        }
        crc
    }

    /// Applies output reflection and the XOR mask to a register.
    #[inline]
    pub fn finalize(&self, crc: Register) -> u16 {
        let crc = if self.params.reflect_out() {
            reflect16(crc)
        } else {
            crc
        };
        crc ^ self.params.xor_out()
    }

    pub fn checksum(&self, data: &[u8]) -> u16 {
        self.finalize(self.update(self.init(), data))
    }

    /// Checks the engine against the check value of its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CheckMismatch`] if `checksum(b"123456789")` differs
    /// from [`AlgorithmParameters::check`].
    pub fn verify(&self) -> Result<()> {
        let actual = self.checksum(CHECK_INPUT);
        if actual == self.params.check() {
            return Ok(());
        }
        log::warn!(
            "{} self-test failed: expected 0x{:04X}, got 0x{:04X}",
            self.params.name(),
            self.params.check(),
            actual
        );
        Err(Error::CheckMismatch {
            name: self.params.name().to_owned(),
            expected: self.params.check(),
            actual,
        })
    }

    /// Appends the big-endian checksum of `buf` to `buf`.
    pub fn append_checksum(&self, buf: &mut Vec<u8>) {
        let crc = self.checksum(buf);
        buf.extend(crc.to_be_bytes());
    }

    /// Whether `frame` ends with the big-endian checksum of the bytes before it
    pub fn verify_trailing(&self, frame: &[u8]) -> bool {
        if frame.len() < 2 {
            return false;
        }
        let (data, trailer) = frame.split_at(frame.len() - 2);
        self.checksum(data).to_be_bytes() == trailer
    }

    /// Creates a streaming digest borrowing this engine.
    pub fn digest(&self) -> crate::Digest<'_> {
        crate::Digest::new(self)
    }
}

impl From<AlgorithmParameters> for Crc16 {
    fn from(params: AlgorithmParameters) -> Self {
        Self::new(params)
    }
}
