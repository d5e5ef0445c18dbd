use std::io::Cursor;

use crc16_catalog::{catalog, Crc16, CrcStream};

fn main() {
    // Frame a Modbus payload with a big-endian CRC trailer
    let modbus = Crc16::new(catalog::MODBUS);
    let request = hex::decode("01030000000a").unwrap();
    let mut stream = CrcStream::new(Cursor::new(Vec::new()), &modbus);
    stream.write_frame(&request).expect("Write failed");
    let buffer = stream.into_inner().into_inner();
    println!("framed: {}", hex::encode(&buffer));

    // Modbus RTU puts the low byte of the CRC on the wire first
    let mut rtu = request.clone();
    rtu.extend_from_slice(&modbus.checksum(&request).to_le_bytes());
    println!("rtu: {}", hex::encode(&rtu));

    // Read it back, checking the trailer
    let mut stream = CrcStream::new(Cursor::new(buffer), &modbus);
    let payload = stream.read_frame(6).expect("Corrupted frame");
    println!("payload: {}", hex::encode(payload));
}
