// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-512/256 output size in bytes
pub const DIGEST_LEN: usize = 32;

/// SHA-512 block size in bytes
pub const BLOCK_LEN: usize = 128;

/// Size of the trailing big-endian bit-length field in the final block
pub(crate) const LENGTH_FIELD_LEN: usize = 16;

/// Number of 64-bit state words copied to the output
pub(crate) const OUTPUT_WORDS: usize = DIGEST_LEN / 8;
