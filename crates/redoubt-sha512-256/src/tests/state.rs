// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! State machine tests: initial value, buffering invariants, wiping
//!
//! References:
//! [1] FIPS 180-4 Section 5.3.6 - SHA-512/t IV generation function

use crate::consts::{BLOCK_LEN, DIGEST_LEN};
use crate::state::{IV, Sha512_256State};

/// SHA-512 H(0), FIPS 180-4 Section 5.3.5
const SHA512_H0: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

#[test]
fn test_new_state_loads_sha512_256_iv() {
    let state = Sha512_256State::new();

    assert_eq!(state.hash_words(), IV);
    assert_ne!(state.hash_words(), SHA512_H0);
    assert_eq!(state.buffer_len(), 0);
    assert_eq!(state.total_len(), 0);
}

#[test]
fn test_iv_matches_generation_function() {
    // H(0)'' = SHA-512 H(0) ⊕ a5a5a5a5a5a5a5a5, then SHA-512("SHA-512/256")
    let mut generator = Sha512_256State::with_initial_hash(SHA512_H0.map(|h| h ^ 0xa5a5a5a5a5a5a5a5));
    generator.update(b"SHA-512/256");

    assert_eq!(generator.finalize_words(), IV);
}

#[test]
fn test_total_len_tracks_every_update() {
    let mut state = Sha512_256State::new();
    let chunks: [&[u8]; 5] = [&[], &[0u8; 1], &[0u8; 127], &[0u8; 300], &[0u8; 5]];

    let mut expected = 0u128;
    for chunk in chunks {
        state.update(chunk);
        expected += chunk.len() as u128;

        assert_eq!(state.total_len(), expected);
        assert!(state.buffer_len() < BLOCK_LEN);
        assert_eq!(state.buffer_len() as u128, expected % BLOCK_LEN as u128);
    }
}

#[test]
fn test_exact_block_leaves_buffer_empty() {
    let mut state = Sha512_256State::new();
    state.update(&[0x61; BLOCK_LEN]);

    assert_eq!(state.buffer_len(), 0);
    assert_ne!(state.hash_words(), IV, "full block must be compressed on update");
}

#[test]
fn test_partial_block_is_only_buffered() {
    let mut state = Sha512_256State::new();
    state.update(&[0x61; BLOCK_LEN - 1]);

    assert_eq!(state.buffer_len(), BLOCK_LEN - 1);
    assert_eq!(state.hash_words(), IV, "no compression before a block is complete");

    state.update(&[0x61]);
    assert_eq!(state.buffer_len(), 0);
    assert_ne!(state.hash_words(), IV);
}

#[test]
fn test_finalize_wipes_state() {
    let mut state = Sha512_256State::new();
    state.update(b"secret material that must not linger");

    let mut out = [0u8; DIGEST_LEN];
    state.finalize_into(&mut out);

    assert!(state.is_zeroized());
    assert_ne!(out, [0u8; DIGEST_LEN]);
}

#[test]
fn test_finalize_wipes_state_after_two_block_padding() {
    let mut state = Sha512_256State::new();
    state.update(&[0x5a; 120]);

    let mut out = [0u8; DIGEST_LEN];
    state.finalize_into(&mut out);

    assert!(state.is_zeroized());
}

#[test]
fn test_clone_is_independent() {
    let mut original = Sha512_256State::new();
    original.update(b"shared prefix");

    let mut fork = original.clone();
    fork.update(b" and more");

    assert_eq!(original.total_len(), 13);
    assert_eq!(fork.total_len(), 22);
}
