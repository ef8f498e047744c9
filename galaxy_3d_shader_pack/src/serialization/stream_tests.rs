use super::*;
use std::io::Cursor;

#[test]
fn test_integers_are_big_endian() {
    let mut buf = Vec::new();
    buf.write_i32(1).unwrap();
    buf.write_u32(0xAABB_CCDD).unwrap();
    assert_eq!(buf, vec![0, 0, 0, 1, 0xAA, 0xBB, 0xCC, 0xDD]);
}

#[test]
fn test_negative_i32_roundtrip() {
    let mut buf = Vec::new();
    buf.write_i32(-1).unwrap();
    assert_eq!(buf, vec![0xFF; 4]);
    assert_eq!(Cursor::new(buf).read_i32().unwrap(), -1);
}

#[test]
fn test_len_prefixed_bytes_layout() {
    let mut buf = Vec::new();
    buf.write_len_prefixed_bytes(b"main").unwrap();
    assert_eq!(buf, vec![0, 0, 0, 4, b'm', b'a', b'i', b'n']);

    let mut cursor = Cursor::new(buf);
    assert_eq!(cursor.read_len_prefixed_bytes().unwrap(), b"main".to_vec());
}

#[test]
fn test_truncated_bytes_is_eof() {
    // Length says 10 but only 3 bytes follow
    let data = vec![0, 0, 0, 10, 1, 2, 3];
    let err = Cursor::new(data).read_len_prefixed_bytes().unwrap_err();
    assert_eq!(err, Error::UnexpectedEof);
}

#[test]
fn test_huge_length_does_not_allocate_up_front() {
    let data = vec![0xFF, 0xFF, 0xFF, 0xFF];
    let err = Cursor::new(data).read_len_prefixed_bytes().unwrap_err();
    assert_eq!(err, Error::UnexpectedEof);
}

#[test]
fn test_negative_count_is_corrupt() {
    let mut buf = Vec::new();
    buf.write_i32(-5).unwrap();
    let err = Cursor::new(buf).read_count().unwrap_err();
    assert!(matches!(err, Error::Corrupt(_)));
}

#[test]
fn test_bool_encoding() {
    let mut buf = Vec::new();
    buf.write_bool(true).unwrap();
    buf.write_bool(false).unwrap();
    buf.write_u8(2).unwrap();

    let mut cursor = Cursor::new(buf);
    assert!(cursor.read_bool().unwrap());
    assert!(!cursor.read_bool().unwrap());
    assert!(matches!(cursor.read_bool(), Err(Error::Corrupt(_))));
}

#[test]
fn test_invalid_utf8_string_is_corrupt() {
    let mut buf = Vec::new();
    buf.write_len_prefixed_bytes(&[0xC3, 0x28]).unwrap();
    assert!(matches!(Cursor::new(buf).read_string(), Err(Error::Corrupt(_))));
}

#[test]
fn test_read_past_end_is_eof() {
    let mut cursor = Cursor::new(vec![0u8, 1]);
    assert_eq!(cursor.read_i32().unwrap_err(), Error::UnexpectedEof);
}
