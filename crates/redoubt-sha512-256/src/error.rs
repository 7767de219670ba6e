// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SHA-512/256 hasher error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// The hasher already produced its digest and cannot absorb or finalize again
    #[error("hasher already finalized; create a new Sha512_256 to hash another message")]
    AlreadyFinalized,
}
