// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word64 - 64-bit word wrapper for the SHA-512 family.
//!
//! Operations write into an existing word instead of returning a fresh value,
//! so message-derived data only ever lives in storage owned by the hash state.
//! The few scratch words a function needs are zeroized before it returns.

use zeroize::Zeroize;

/// 64-bit word wrapper.
///
/// Not `Copy`: every duplicate of a word is an explicit `copy_from` into a
/// slot that the caller is responsible for wiping.
#[derive(Clone, Default, Zeroize)]
#[repr(transparent)]
pub(crate) struct Word64(u64);

impl Word64 {
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word64) {
        self.0 = src.0;
    }

    /// Load from 8 big-endian bytes
    #[inline(always)]
    pub fn load_be(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), 8);
        self.0 = 0;
        for &b in bytes {
            self.0 = (self.0 << 8) | u64::from(b);
        }
    }

    /// Store as 8 big-endian bytes
    #[inline(always)]
    pub fn store_be(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), 8);
        for (i, b) in out.iter_mut().enumerate() {
            *b = (self.0 >> (56 - 8 * i)) as u8;
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // In-place arithmetic
    // ═══════════════════════════════════════════════════════════════════════════

    /// self += rhs (mod 2^64)
    #[inline(always)]
    pub fn add_assign(&mut self, rhs: &Word64) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    /// self += rhs (mod 2^64), for public constants such as K[t]
    #[inline(always)]
    pub fn add_assign_const(&mut self, rhs: u64) {
        self.0 = self.0.wrapping_add(rhs);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-512 functions, FIPS 180-4 Section 4.1.3
    // ═══════════════════════════════════════════════════════════════════════════

    /// out = ROTR^a(x) ⊕ ROTR^b(x) ⊕ ROTR^c(x)
    #[inline(always)]
    fn set_rotr3(out: &mut Word64, x: &Word64, a: u32, b: u32, c: u32) {
        out.0 = x.0.rotate_right(a);
        out.0 ^= x.0.rotate_right(b);
        out.0 ^= x.0.rotate_right(c);
    }

    /// out = ROTR^a(x) ⊕ ROTR^b(x) ⊕ SHR^s(x)
    #[inline(always)]
    fn set_rotr2_shr(out: &mut Word64, x: &Word64, a: u32, b: u32, s: u32) {
        out.0 = x.0.rotate_right(a);
        out.0 ^= x.0.rotate_right(b);
        out.0 ^= x.0 >> s;
    }

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    ///
    /// Evaluated as z ⊕ (x ∧ (y ⊕ z)), which needs no scratch word.
    #[inline(always)]
    pub fn set_ch(out: &mut Word64, x: &Word64, y: &Word64, z: &Word64) {
        out.0 = y.0 ^ z.0;
        out.0 &= x.0;
        out.0 ^= z.0;
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    ///
    /// Evaluated as (x ∧ y) ⊕ (z ∧ (x ⊕ y)).
    #[inline(always)]
    pub fn set_maj(out: &mut Word64, x: &Word64, y: &Word64, z: &Word64) {
        let mut x_xor_y = Word64::zero();
        x_xor_y.copy_from(x);
        x_xor_y.0 ^= y.0;
        x_xor_y.0 &= z.0;

        out.0 = x.0 & y.0;
        out.0 ^= x_xor_y.0;

        x_xor_y.zeroize();
    }

    /// Σ0(x) = ROTR^28(x) ⊕ ROTR^34(x) ⊕ ROTR^39(x)
    #[inline(always)]
    pub fn set_big_sigma0(out: &mut Word64, x: &Word64) {
        Self::set_rotr3(out, x, 28, 34, 39);
    }

    /// Σ1(x) = ROTR^14(x) ⊕ ROTR^18(x) ⊕ ROTR^41(x)
    #[inline(always)]
    pub fn set_big_sigma1(out: &mut Word64, x: &Word64) {
        Self::set_rotr3(out, x, 14, 18, 41);
    }

    /// σ0(x) = ROTR^1(x) ⊕ ROTR^8(x) ⊕ SHR^7(x)
    #[inline(always)]
    pub fn set_small_sigma0(out: &mut Word64, x: &Word64) {
        Self::set_rotr2_shr(out, x, 1, 8, 7);
    }

    /// σ1(x) = ROTR^19(x) ⊕ ROTR^61(x) ⊕ SHR^6(x)
    #[inline(always)]
    pub fn set_small_sigma1(out: &mut Word64, x: &Word64) {
        Self::set_rotr2_shr(out, x, 19, 61, 6);
    }

    /// Inner value, for assertions only
    #[cfg(test)]
    pub(crate) fn get(&self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.0 == 0
    }
}
