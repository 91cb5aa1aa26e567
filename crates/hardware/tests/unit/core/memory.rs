//! # Sparse Memory Tests

use mips_core::core::Memory;

#[test]
fn test_unmapped_read_is_zero_and_maps() {
    let mut mem = Memory::new();
    assert_eq!(mem.peek(100), None);
    assert_eq!(mem.read_word(100), 0);
    assert_eq!(mem.peek(100), Some(0));
    assert_eq!(mem.len(), 1);
}

#[test]
fn test_write_overwrites() {
    let mut mem = Memory::new();
    mem.write_word(8, 1);
    mem.write_word(8, 2);
    assert_eq!(mem.read_word(8), 2);
    assert_eq!(mem.len(), 1);
}

#[test]
fn test_negative_and_unaligned_addresses() {
    let mut mem = Memory::new();
    mem.write_word(-4, 0xDEAD_BEEF);
    mem.write_word(3, 7);
    assert_eq!(mem.read_word(-4), 0xDEAD_BEEF);
    assert_eq!(mem.read_word(3), 7);
    assert_eq!(mem.read_word(0), 0);
}

#[test]
fn test_iter_in_address_order() {
    let mut mem = Memory::new();
    mem.write_word(40, 4);
    mem.write_word(-8, 1);
    mem.write_word(0, 2);
    let entries: Vec<_> = mem.iter().collect();
    assert_eq!(entries, vec![(-8, 1), (0, 2), (40, 4)]);
}

#[test]
fn test_clear() {
    let mut mem = Memory::new();
    mem.write_word(1, 1);
    mem.clear();
    assert!(mem.is_empty());
    assert_eq!(mem, Memory::new());
}
