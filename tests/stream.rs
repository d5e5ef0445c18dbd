use std::io::{Cursor, Read, Write};

use crc16_catalog::*;

#[test]
fn standard_library_hash_interface() {
    let crc = Crc16::new(catalog::XMODEM);
    let mut hash = crc.digest();

    write!(hash, "standard").unwrap();
    write!(hash, " library hash interface").unwrap();
    let sum1 = hash.sum16();
    hash.reset();
    write!(hash, "standard library hash interface").unwrap();
    let sum2 = hash.sum16();
    assert_eq!(sum1, sum2);

    assert_eq!(sum1, 0xE698);
    assert_eq!(hash.size(), 2);

    let buf = hash.sum(Vec::with_capacity(10));
    assert_eq!(buf, hex::decode("e698").unwrap());
    assert_eq!(hash.block_size(), 1);
}

#[test]
fn hasher_as_trait_object() {
    let crc = Crc16::new(catalog::KERMIT);
    let mut digest = crc.digest();
    let hasher: &mut dyn Hasher16 = &mut digest;
    hasher.write(b"123456789");
    assert_eq!(hasher.sum16(), 0x2189);
}

#[test]
fn roundtrip_frames_over_a_buffer() {
    let crc = Crc16::new(catalog::MODBUS);
    let mut writer = CrcStream::new(Cursor::new(Vec::new()), &crc);
    writer.write_frame(hex::decode("01030000000a").unwrap()).unwrap();
    let wire = writer.into_inner().into_inner();
    // Read holding registers request, trailer is big-endian
    assert_eq!(hex::encode(&wire), "01030000000acdc5");

    // RTU framing sends the same CRC low byte first
    let payload = &wire[..6];
    assert_eq!(crc.checksum(payload).to_le_bytes(), [0xC5, 0xCD]);
}

#[test]
fn checksum_while_copying() {
    let crc = Crc16::new(catalog::ARC);
    let mut reader = CrcStream::new(Cursor::new(b"123456789".to_vec()), &crc);
    let mut copied = Vec::new();
    reader.read_to_end(&mut copied).unwrap();
    assert_eq!(copied, b"123456789");
    assert_eq!(reader.checksum(), 0xBB3D);
}

#[cfg(feature = "tokio")]
mod tokio_stream {
    use super::*;

    #[tokio::test]
    async fn frames_async() {
        let crc = Crc16::new(catalog::XMODEM);
        let mut writer = CrcStream::new(Cursor::new(Vec::new()), &crc);
        writer.write_frame_async("123456789").await.unwrap();
        let wire = writer.into_inner().into_inner();
        assert_eq!(wire, b"123456789\x31\xC3");

        let mut reader = CrcStream::new(Cursor::new(wire), &crc);
        assert_eq!(reader.read_frame_async(9).await.unwrap(), b"123456789");
    }

    #[tokio::test]
    async fn read_to_checksum_async() {
        let crc = Crc16::new(catalog::USB);
        let mut reader = CrcStream::with_capacity(Cursor::new(b"123456789".to_vec()), &crc, 3);
        assert_eq!(reader.read_to_checksum_async().await.unwrap(), 0xB4C8);
    }

    #[tokio::test]
    async fn oversized_frame_length_async() {
        let crc = Crc16::new(catalog::XMODEM);
        let mut reader = CrcStream::new(Cursor::new(b"123".to_vec()), &crc);
        let err = reader.read_frame_async(usize::MAX).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);

        let err = reader.read_frame_async(9).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
