//! Contract compliance tests for bytecode_system
//! Verifies the wire layout of symbol table segments

use bytecode_system::{decode_symbol_table, encode_symbol_table, COUNT_WIDTH};

/// The count is a fixed-width little-endian u32
#[test]
fn test_contract_count_width() {
    assert_eq!(COUNT_WIDTH, 4);
    let bytes = encode_symbol_table(Vec::<String>::new()).unwrap();
    assert_eq!(bytes, vec![0, 0, 0, 0]);
}

/// Names are NUL terminated and packed contiguously
#[test]
fn test_contract_name_packing() {
    let bytes = encode_symbol_table(["a", "bb", "ccc"]).unwrap();
    let mut expected = 3u32.to_le_bytes().to_vec();
    expected.extend_from_slice(b"a\0bb\0ccc\0");
    assert_eq!(bytes, expected);
}

/// Slots start at 1 and follow declaration order
#[test]
fn test_contract_slot_numbering() {
    let mut data = 3u32.to_le_bytes().to_vec();
    data.extend_from_slice(b"a\0bb\0ccc\0");

    let table = decode_symbol_table(&data).unwrap();
    assert_eq!(table.slot("a"), Some(1));
    assert_eq!(table.slot("bb"), Some(2));
    assert_eq!(table.slot("ccc"), Some(3));
}
