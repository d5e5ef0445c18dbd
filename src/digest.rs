use std::io;

use crate::{Crc16, Register};

/// Incremental hash interface for 16 bit checksums
///
/// Writes never fail. [`sum16`](Self::sum16) and [`sum`](Self::sum) only read
/// the running state, so more data can be written afterwards.
pub trait Hasher16 {
    /// Adds more data to the running checksum.
    fn write(&mut self, data: &[u8]);

    /// Restores the initial state.
    fn reset(&mut self);

    /// Checksum of everything written since creation or the last reset
    fn sum16(&self) -> u16;

    /// Appends the current checksum to `buf`, most significant byte first.
    fn sum(&self, mut buf: Vec<u8>) -> Vec<u8> {
        buf.extend(self.sum16().to_be_bytes());
        buf
    }

    /// Number of bytes [`sum`](Self::sum) appends
    fn size(&self) -> usize {
        2
    }

    /// Smallest unit of input
    fn block_size(&self) -> usize {
        1
    }
}

/// Streaming CRC-16 over a shared [`Crc16`] engine
///
/// ```
/// use crc16_catalog::{catalog, Crc16, Hasher16};
///
/// let crc = Crc16::new(catalog::XMODEM);
/// let mut digest = crc.digest();
/// digest.write(b"1234");
/// digest.write(b"56789");
/// assert_eq!(digest.sum16(), 0x31C3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Digest<'a> {
    crc: &'a Crc16,
    register: Register,
}

impl<'a> Digest<'a> {
    pub fn new(crc: &'a Crc16) -> Self {
        Self {
            crc,
            register: crc.init(),
        }
    }

    pub fn engine(&self) -> &'a Crc16 {
        self.crc
    }

    /// Raw register, before output reflection and XOR
    pub fn register(&self) -> Register {
        self.register
    }
}

impl Hasher16 for Digest<'_> {
    fn write(&mut self, data: &[u8]) {
        self.register = self.crc.update(self.register, data);
    }

    fn reset(&mut self) {
        self.register = self.crc.init();
    }

    fn sum16(&self) -> u16 {
        self.crc.finalize(self.register)
    }
}

impl io::Write for Digest<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Hasher16::write(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
