use std::io::{self, Read, Write};

#[cfg(feature = "tokio")]
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{Crc16, Register};

const DEFAULT_BUF_CAPACITY: usize = 2048;

/// A wrapper around a byte stream that checksums the data passing through it.
///
/// Bytes moved with [`Read`] or [`Write`] feed a running register. The frame
/// helpers work on whole checksummed frames (payload followed by the
/// big-endian CRC) and leave the running register alone.
#[derive(Debug)]
pub struct CrcStream<'a, S> {
    inner: S,
    crc: &'a Crc16,
    register: Register,
    buf_capacity: usize,
}

impl<'a, S> CrcStream<'a, S> {
    pub fn new(inner: S, crc: &'a Crc16) -> Self {
        Self {
            inner,
            crc,
            register: crc.init(),
            buf_capacity: DEFAULT_BUF_CAPACITY,
        }
    }

    /// Creates a new [`CrcStream`] with a custom read buffer capacity.
    pub fn with_capacity(inner: S, crc: &'a Crc16, buf_capacity: usize) -> Self {
        let mut stream = Self::new(inner, crc);
        stream.buf_capacity = buf_capacity.max(1);
        stream
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Checksum of the bytes read or written so far
    pub fn checksum(&self) -> u16 {
        self.crc.finalize(self.register)
    }

    pub fn reset(&mut self) {
        self.register = self.crc.init();
    }

    fn check_frame(&self, mut frame: Vec<u8>, frame_len: usize) -> io::Result<Vec<u8>> {
        if frame.len() < frame_len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Connection closed",
            ));
        }
        if !self.crc.verify_trailing(&frame) {
            log::debug!(
                "{} frame of {} bytes failed checksum",
                self.crc.params().name(),
                frame.len()
            );
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum mismatch",
            ));
        }
        frame.truncate(frame.len() - 2);
        Ok(frame)
    }

    fn frame_len(len: usize) -> io::Result<usize> {
        len.checked_add(2).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Frame length overflows usize")
        })
    }

    fn build_frame(&self, data: &[u8]) -> Vec<u8> {
        let mut frame = Vec::with_capacity(data.len() + 2);
        frame.extend_from_slice(data);
        self.crc.append_checksum(&mut frame);
        frame
    }
}

impl<S: Read> Read for CrcStream<'_, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes_read = self.inner.read(buf)?;
        self.register = self.crc.update(self.register, &buf[..bytes_read]);
        Ok(bytes_read)
    }
}

impl<S: Write> Write for CrcStream<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes_written = self.inner.write(buf)?;
        self.register = self.crc.update(self.register, &buf[..bytes_written]);
        Ok(bytes_written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<S: Read> CrcStream<'_, S> {
    /// Reads the stream to its end and returns the checksum of everything read.
    ///
    /// # Errors
    ///
    /// If this function encounters any form of I/O or other error, an error variant will be returned as in [`Read::read`].
    pub fn read_to_checksum(&mut self) -> io::Result<u16> {
        let mut recv_buf = vec![0u8; self.buf_capacity];
        loop {
            match self.read(&mut recv_buf) {
                Ok(0) => return Ok(self.checksum()),
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads a frame of `len` payload bytes followed by their big-endian checksum.
    /// Returns the payload.
    ///
    /// # Errors
    ///
    /// If the stream ends before the frame is complete, an error kind of [`std::io::ErrorKind::UnexpectedEof`] is returned.
    /// If the trailing checksum does not match, an error kind of [`std::io::ErrorKind::InvalidData`] is returned.
    /// If `len` plus the trailer does not fit in a `usize`, an error kind of [`std::io::ErrorKind::InvalidInput`] is returned.
    pub fn read_frame(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let frame_len = Self::frame_len(len)?;
        let mut frame = Vec::new();
        Read::take(&mut self.inner, frame_len as u64).read_to_end(&mut frame)?;
        self.check_frame(frame, frame_len)
    }
}

impl<S: Write> CrcStream<'_, S> {
    /// Writes `data` followed by its big-endian checksum, then flushes.
    pub fn write_frame(&mut self, data: impl AsRef<[u8]>) -> io::Result<()> {
        let frame = self.build_frame(data.as_ref());
        self.inner.write_all(&frame)?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(feature = "tokio")]
impl<S: AsyncRead + Unpin> CrcStream<'_, S> {
    /// Reads the stream to its end and returns the checksum of everything read.
    ///
    /// # Errors
    ///
    /// If this function encounters any form of I/O or other error, an error variant will be returned as in [`Read::read`].
    pub async fn read_to_checksum_async(&mut self) -> io::Result<u16> {
        let mut recv_buf = vec![0u8; self.buf_capacity];
        loop {
            let bytes_read = self.inner.read(&mut recv_buf).await?;
            if bytes_read == 0 {
                return Ok(self.checksum());
            }
            self.register = self.crc.update(self.register, &recv_buf[..bytes_read]);
        }
    }

    /// Async version of [`read_frame`](CrcStream::read_frame).
    pub async fn read_frame_async(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let frame_len = Self::frame_len(len)?;
        let mut frame = Vec::new();
        AsyncReadExt::take(&mut self.inner, frame_len as u64)
            .read_to_end(&mut frame)
            .await?;
        self.check_frame(frame, frame_len)
    }
}

#[cfg(feature = "tokio")]
impl<S: AsyncWrite + Unpin> CrcStream<'_, S> {
    /// Async version of [`write_frame`](CrcStream::write_frame).
    pub async fn write_frame_async(&mut self, data: impl AsRef<[u8]>) -> io::Result<()> {
        let frame = self.build_frame(data.as_ref());
        self.inner.write_all(&frame).await?;
        self.inner.flush().await?;
        Ok(())
    }
}
