/*
    Module that bundles together the Base58 encoding schemes used by
    Bitcoin derived chains. Bech32 is not supported.
*/

pub mod version_prefix;
pub mod base58;
pub use version_prefix::ToVersionPrefix as ToVersionPrefix;
pub use version_prefix::VersionPrefix as VersionPrefix;
pub use base58::{
    Base58,
    Base58Error,
    check_encode,
    check_decode
};
