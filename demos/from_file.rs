use crc16_catalog::{catalog, Crc16, CrcStream};

fn main() {
    // Usage: from_file <path> [algorithm]
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "file.bin".to_owned());
    let name = args.next().unwrap_or_else(|| "CRC-16/XMODEM".to_owned());

    let params = catalog::get(&name).unwrap();
    let crc = Crc16::new(params.clone());
    let file = std::fs::File::open(&path).unwrap();
    let checksum = CrcStream::new(file, &crc).read_to_checksum().unwrap();
    println!("{} {path}: 0x{checksum:04X}", params.name());
}
