// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512/256 state machine per FIPS 180-4 Sections 5.1.2, 6.4 and 6.7

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, DIGEST_LEN, LENGTH_FIELD_LEN, OUTPUT_WORDS};
use crate::word::Word64;

/// SHA-512 round constants, FIPS 180-4 Section 4.2.3
/// First 64 bits of fractional parts of cube roots of first 80 primes
#[rustfmt::skip]
const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// SHA-512/256 initial hash value H(0), FIPS 180-4 Section 5.3.6.2
///
/// Output of the SHA-512/t IV generation function for t = 256. Not the
/// SHA-512 or SHA-384 IV.
pub(crate) const IV: [u64; 8] = [
    0x22312194fc2bf72c,
    0x9f555fa3c84c64c2,
    0x2393b86b6f53b151,
    0x963877195940eabd,
    0x96283ee2a88effe3,
    0xbe5e1e2553863992,
    0x2b0199fc2c85b8aa,
    0x0eb72ddc81c52ca2,
];

/// Compression function state, FIPS 180-4 Section 6.4.2
///
/// Holds every word derived from the message so the whole round computation
/// can be wiped in one pass.
#[derive(Clone, Zeroize)]
struct CompressionCore {
    // Hash value H(i)
    h: [Word64; 8],
    // Message schedule W[0..79]
    w: [Word64; 80],
    // Working variables a..h
    wv: [Word64; 8],
    // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
    t1: Word64,
    // T2 = Σ0(a) + Maj(a,b,c)
    t2: Word64,
    // Σ/σ/Ch/Maj results
    scratch: Word64,
}

impl CompressionCore {
    fn new() -> Self {
        Self {
            h: IV.map(Word64::new),
            w: core::array::from_fn(|_| Word64::zero()),
            wv: core::array::from_fn(|_| Word64::zero()),
            t1: Word64::zero(),
            t2: Word64::zero(),
            scratch: Word64::zero(),
        }
    }

    /// Absorb one 128-byte block into H(i)
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_LEN);

        // W[0..15] from the block, big-endian
        for (w, bytes) in self.w.iter_mut().zip(block.chunks_exact(8)) {
            w.load_be(bytes);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..80 {
            let (prev, rest) = self.w.split_at_mut(t);
            let w_t = &mut rest[0];

            w_t.copy_from(&prev[t - 16]);
            w_t.add_assign(&prev[t - 7]);

            Word64::set_small_sigma0(&mut self.scratch, &prev[t - 15]);
            w_t.add_assign(&self.scratch);

            Word64::set_small_sigma1(&mut self.scratch, &prev[t - 2]);
            w_t.add_assign(&self.scratch);
        }

        for (wv, h) in self.wv.iter_mut().zip(self.h.iter()) {
            wv.copy_from(h);
        }

        // wv = [a, b, c, d, e, f, g, h]
        for t in 0..80 {
            self.t1.copy_from(&self.wv[7]);

            Word64::set_big_sigma1(&mut self.scratch, &self.wv[4]);
            self.t1.add_assign(&self.scratch);

            Word64::set_ch(&mut self.scratch, &self.wv[4], &self.wv[5], &self.wv[6]);
            self.t1.add_assign(&self.scratch);

            self.t1.add_assign_const(K[t]);
            self.t1.add_assign(&self.w[t]);
            self.w[t].zeroize();

            Word64::set_big_sigma0(&mut self.t2, &self.wv[0]);
            Word64::set_maj(&mut self.scratch, &self.wv[0], &self.wv[1], &self.wv[2]);
            self.t2.add_assign(&self.scratch);

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            self.wv.rotate_right(1);
            self.wv[4].add_assign(&self.t1);
            self.wv[0].copy_from(&self.t1);
            self.wv[0].add_assign(&self.t2);

            self.t1.zeroize();
            self.t2.zeroize();
        }
        self.scratch.zeroize();

        // H(i) = H(i-1) + working variables
        for (h, wv) in self.h.iter_mut().zip(self.wv.iter_mut()) {
            h.add_assign(wv);
            wv.zeroize();
        }
    }

    /// Truncated output: H0..H3, big-endian
    fn write_output(&self, out: &mut [u8; DIGEST_LEN]) {
        for (h, bytes) in self.h[..OUTPUT_WORDS].iter().zip(out.chunks_exact_mut(8)) {
            h.store_be(bytes);
        }
    }
}

/// SHA-512/256 streaming state.
///
/// Invariants: `buffer_len < BLOCK_LEN`, and `total_len` is the number of
/// bytes absorbed since construction. Wiped on drop and by `finalize_into`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Sha512_256State {
    core: CompressionCore,
    /// Pending bytes of an incomplete block
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u128,
}

impl Sha512_256State {
    pub fn new() -> Self {
        Self {
            core: CompressionCore::new(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.total_len += data.len() as u128;
        let mut input = data;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            self.core.compress(&self.buffer);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Full blocks straight from the caller's slice
        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.core.compress(block);
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffer_len = tail.len();
    }

    /// Pad, compress the final block(s) and write the truncated digest.
    ///
    /// The state is wiped afterwards and must not be reused.
    pub fn finalize_into(&mut self, out: &mut [u8; DIGEST_LEN]) {
        self.pad_and_compress();
        self.core.write_output(out);
        self.zeroize();
    }

    /// Padding per FIPS 180-4 Section 5.1.2: 0x80, zeros, 128-bit bit length
    fn pad_and_compress(&mut self) {
        // Message length in bits, mod 2^128
        let bit_len = self.total_len << 3;
        let length_at = BLOCK_LEN - LENGTH_FIELD_LEN;

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the length field: spill into a second block
        if self.buffer_len > length_at {
            self.buffer[self.buffer_len..].fill(0);
            self.core.compress(&self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..length_at].fill(0);
        self.buffer[length_at..].copy_from_slice(&bit_len.to_be_bytes());
        self.core.compress(&self.buffer);
    }

    /// State seeded with an arbitrary H(0), e.g. the SHA-512/t generation IV
    #[cfg(test)]
    pub(crate) fn with_initial_hash(h0: [u64; 8]) -> Self {
        let mut state = Self::new();
        state.core.h = h0.map(Word64::new);
        state
    }

    /// Untruncated finalization: all eight words of H(N)
    #[cfg(test)]
    pub(crate) fn finalize_words(&mut self) -> [u64; 8] {
        self.pad_and_compress();
        let words = self.hash_words();
        self.zeroize();
        words
    }

    #[cfg(test)]
    pub(crate) fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    #[cfg(test)]
    pub(crate) fn total_len(&self) -> u128 {
        self.total_len
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        let core = &self.core;

        core.h.iter().all(Word64::is_zeroized)
            && core.w.iter().all(Word64::is_zeroized)
            && core.wv.iter().all(Word64::is_zeroized)
            && core.t1.is_zeroized()
            && core.t2.is_zeroized()
            && core.scratch.is_zeroized()
            && self.buffer.iter().all(|&b| b == 0)
            && self.buffer_len == 0
            && self.total_len == 0
    }

    #[cfg(test)]
    pub(crate) fn hash_words(&self) -> [u64; 8] {
        core::array::from_fn(|i| self.core.h[i].get())
    }
}
