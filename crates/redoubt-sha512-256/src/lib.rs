// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512/256 with secure memory handling
//!
//! Implementation per FIPS 180-4 Section 6.7 (SHA-512/t with t = 256).
//! SHA-512 compression with the SHA-512/256 initial hash value, output
//! truncated to the first four words. All intermediate values are zeroized.
//!
//! ```
//! use redoubt_sha512_256::{Sha512_256, digest, double_digest};
//!
//! let one_shot = digest(b"abc");
//!
//! let mut hasher = Sha512_256::new();
//! hasher.update(b"a").unwrap();
//! hasher.update(b"bc").unwrap();
//! assert_eq!(hasher.finalize().unwrap(), one_shot);
//!
//! assert_eq!(double_digest(b"abc"), digest(one_shot.as_bytes()));
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod error;
mod hasher;
mod state;
mod word;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use digest::{Digest, digest, double_digest};
pub use error::DigestError;
pub use hasher::Sha512_256;
