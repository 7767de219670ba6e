// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::consts::DIGEST_LEN;
use crate::digest::Digest;
use crate::error::DigestError;
use crate::state::Sha512_256State;

/// Incremental SHA-512/256 hasher.
///
/// Feed the message with any number of [`update`](Self::update) calls, in any
/// chunking, then call [`finalize`](Self::finalize) once. Finalization is
/// terminal: the internal state is wiped, and further `update` or `finalize`
/// calls return [`DigestError::AlreadyFinalized`].
///
/// Cloning a running hasher forks it, so a shared prefix only has to be
/// absorbed once.
///
/// ```
/// use redoubt_sha512_256::{DigestError, Sha512_256};
///
/// let mut hasher = Sha512_256::new();
/// hasher.update(b"abc")?;
/// let digest = hasher.finalize()?;
///
/// assert_eq!(
///     digest.to_string(),
///     "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
/// );
/// assert_eq!(hasher.update(b"more"), Err(DigestError::AlreadyFinalized));
/// # Ok::<(), DigestError>(())
/// ```
#[derive(Clone)]
pub struct Sha512_256 {
    state: Sha512_256State,
    finalized: bool,
}

impl Sha512_256 {
    /// Create a hasher loaded with the SHA-512/256 initial hash value
    pub fn new() -> Self {
        Self {
            state: Sha512_256State::new(),
            finalized: false,
        }
    }

    /// Absorb `data`
    ///
    /// # Errors
    /// Returns [`DigestError::AlreadyFinalized`] if the digest was already produced.
    pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
        self.ensure_active()?;
        self.state.update(data);
        Ok(())
    }

    /// Pad the message and write the 32-byte digest into `out`
    ///
    /// # Errors
    /// Returns [`DigestError::AlreadyFinalized`] on a second call. `out` is
    /// left untouched in that case.
    pub fn finalize_into(&mut self, out: &mut [u8; DIGEST_LEN]) -> Result<(), DigestError> {
        self.ensure_active()?;
        self.state.finalize_into(out);
        self.finalized = true;
        Ok(())
    }

    /// Pad the message and return its digest
    ///
    /// # Errors
    /// Returns [`DigestError::AlreadyFinalized`] on a second call.
    pub fn finalize(&mut self) -> Result<Digest, DigestError> {
        let mut out = [0u8; DIGEST_LEN];
        self.finalize_into(&mut out)?;
        Ok(Digest::from_bytes(out))
    }

    /// Whether the digest was already produced
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn ensure_active(&self) -> Result<(), DigestError> {
        if self.finalized {
            return Err(DigestError::AlreadyFinalized);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &Sha512_256State {
        &self.state
    }
}

impl Default for Sha512_256 {
    fn default() -> Self {
        Self::new()
    }
}

// Never print message-derived state
impl fmt::Debug for Sha512_256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha512_256")
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}
