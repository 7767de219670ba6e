// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest output and one-shot entry points

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::consts::DIGEST_LEN;
use crate::state::Sha512_256State;

/// A 32-byte SHA-512/256 digest.
///
/// Equality is constant-time. `Display` and `{:x}` print lowercase hex.
#[derive(Clone, Copy)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes, e.g. a stored reference value
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Unwrap into the digest bytes
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl PartialEq<[u8; DIGEST_LEN]> for Digest {
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        self.0[..].ct_eq(&other[..]).into()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

fn hash_into(data: &[u8], out: &mut [u8; DIGEST_LEN]) {
    let mut state = Sha512_256State::new();
    state.update(data);
    state.finalize_into(out);
}

/// SHA-512/256 of `data` in one call
///
/// Same result as feeding `data` to a fresh [`Sha512_256`](crate::Sha512_256)
/// and finalizing it.
pub fn digest(data: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    hash_into(data, &mut out);
    Digest(out)
}

/// SHA-512/256 applied twice: `digest(digest(data))`
///
/// The inner digest hashes from a fresh state and is zeroized once consumed.
pub fn double_digest(data: &[u8]) -> Digest {
    let mut inner = [0u8; DIGEST_LEN];
    hash_into(data, &mut inner);

    let mut out = [0u8; DIGEST_LEN];
    hash_into(&inner, &mut out);
    inner.zeroize();

    Digest(out)
}
