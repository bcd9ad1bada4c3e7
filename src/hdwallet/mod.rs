/*
    This module aims to implement hierarchical deterministic keys
    under the BIP 32 standard.

    Based on chapter 5 of the bitcoin book. (https://github.com/bitcoinbook/bitcoinbook/)
*/

pub mod ckd;
pub mod path;
pub mod extended_keys;

pub use ckd::{ChildOptions, HARDENED_OFFSET};
pub use path::Path;
pub use extended_keys::{ExtendedKey, Xprv, Xpub};

use crate::encoding::Base58Error;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HDWError {
    #[error("seed produces an invalid master key")]
    InvalidSeed,
    #[error("seed must be between 16 and 64 bytes, got {0}")]
    BadSeedLength(usize),
    #[error("hardened child {0} cannot be derived from a public key")]
    HardenedWithoutPrivate(u32),
    #[error("child {0} is not a valid key, use the next index")]
    InvalidDerivation(u32),
    #[error("derivation depth cannot exceed 255")]
    DepthOverflow,
    #[error("malformed derivation path: {0}")]
    MalformedPath(String),
    #[error(transparent)]
    Base58(#[from] Base58Error),
    #[error("extended key must be 78 bytes, got {0}")]
    BadLength(usize),
    #[error("unexpected version prefix {0:#010x}")]
    BadPrefix(u32),
    #[error("extended key holds invalid key data")]
    BadKey,
    #[error("depth 0 key must have a zero parent fingerprint and child number")]
    BadRootKey
}
