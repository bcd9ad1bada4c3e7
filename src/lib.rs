/*
    Library to derive keys, scripts and addresses for DIVI
    and Bitcoin from a seed.

    Every chain dependent operation takes the network parameters
    explicitly, see the `network` module for the built in chains.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here

        - learn me a bitcoin (https://learnmeabitcoin.com/)
            for great visualisation of the concepts inroduced in the book

        - BIP 32 (https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki)
            for hierarchical deterministic key derivation and its test vectors.

        - The DIVI repository (https://github.com/DiviProject/Divi)
            for chain parameters and the vault and cold staking opcodes.
*/

//Outward facing modules
pub mod network;
pub mod encoding;
pub mod key;
pub mod script;
pub mod address;
pub mod hdwallet;
pub mod message;
pub mod prelude;

//Hashing primitives
pub mod hash;

//Dependencies
use lazy_static::lazy_static;
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use hmac::{Mac, NewMac, Hmac};
use sha2::{Sha256, Sha512, Digest};
use ripemd160::Ripemd160;

lazy_static! {
    /// Shared verification and signing context.
    pub(crate) static ref SECP: Secp256k1<All> = Secp256k1::new();
}
