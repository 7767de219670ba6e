// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::word::Word64;

const TEST_VALUES: [u64; 6] = [
    0x0000_0000_0000_0000,
    0xFFFF_FFFF_FFFF_FFFF,
    0x0123_4567_89AB_CDEF,
    0xFEDC_BA98_7654_3210,
    0x0F0F_0F0F_F0F0_F0F0,
    0x8000_0000_0000_0001,
];

#[test]
fn ch_matches_reference() {
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let mut out = Word64::new(0xAAAA_AAAA_AAAA_AAAA);

                Word64::set_ch(&mut out, &Word64::new(x), &Word64::new(y), &Word64::new(z));

                let expected = (x & y) ^ (!x & z);
                assert_eq!(
                    out.get(),
                    expected,
                    "Ch mismatch for x={x:#018x}, y={y:#018x}, z={z:#018x}"
                );
            }
        }
    }
}

#[test]
fn maj_matches_reference() {
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let mut out = Word64::new(0x5555_5555_5555_5555);

                Word64::set_maj(&mut out, &Word64::new(x), &Word64::new(y), &Word64::new(z));

                let expected = (x & y) ^ (x & z) ^ (y & z);
                assert_eq!(
                    out.get(),
                    expected,
                    "Maj mismatch for x={x:#018x}, y={y:#018x}, z={z:#018x}"
                );
            }
        }
    }
}

#[test]
fn big_sigma0_matches_reference() {
    for &x in &TEST_VALUES {
        let mut out = Word64::zero();
        Word64::set_big_sigma0(&mut out, &Word64::new(x));

        let expected = x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39);
        assert_eq!(out.get(), expected, "Σ0 mismatch for x={x:#018x}");
    }
}

#[test]
fn big_sigma1_matches_reference() {
    for &x in &TEST_VALUES {
        let mut out = Word64::zero();
        Word64::set_big_sigma1(&mut out, &Word64::new(x));

        let expected = x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41);
        assert_eq!(out.get(), expected, "Σ1 mismatch for x={x:#018x}");
    }
}

#[test]
fn small_sigma0_matches_reference() {
    for &x in &TEST_VALUES {
        let mut out = Word64::zero();
        Word64::set_small_sigma0(&mut out, &Word64::new(x));

        let expected = x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7);
        assert_eq!(out.get(), expected, "σ0 mismatch for x={x:#018x}");
    }
}

#[test]
fn small_sigma1_matches_reference() {
    for &x in &TEST_VALUES {
        let mut out = Word64::zero();
        Word64::set_small_sigma1(&mut out, &Word64::new(x));

        let expected = x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6);
        assert_eq!(out.get(), expected, "σ1 mismatch for x={x:#018x}");
    }
}

#[test]
fn add_assign_wraps() {
    let mut w = Word64::new(u64::MAX);
    w.add_assign(&Word64::new(2));
    assert_eq!(w.get(), 1);

    w.add_assign_const(u64::MAX);
    assert_eq!(w.get(), 0);
}

#[test]
fn big_endian_load_and_store() {
    let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

    let mut w = Word64::zero();
    w.load_be(&bytes);
    assert_eq!(w.get(), 0x0123_4567_89ab_cdef);

    let mut out = [0u8; 8];
    w.store_be(&mut out);
    assert_eq!(out, bytes);
}

#[test]
fn zeroize_clears_word() {
    let mut w = Word64::new(0xDEAD_BEEF_DEAD_BEEF);
    assert!(!w.is_zeroized());

    w.zeroize();
    assert!(w.is_zeroized());
}
