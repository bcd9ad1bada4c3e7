/*
    This module implements child key deriveration
    from parent extended private and public keys
    under the BIP32 standard.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

use std::fmt;

use log::{trace, warn};

use crate::{
    hash::hmac_sha512,
    hdwallet::{
        ExtendedKey,
        HDWError,
        Xprv,
        Xpub
    }
};

/// Indexes from 2^31 up are hardened.
pub const HARDENED_OFFSET: u32 = 1 << 31;

/**
    Enum to pattern match child key deriveration options.
    The value is the index below 2^31, hardened children add the offset themselves.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOptions {
    Normal(u32),
    Hardened(u32)
}

impl ChildOptions {
    /// Splits a raw child number into its option.
    pub fn from_index(index: u32) -> Self {
        if index >= HARDENED_OFFSET {
            ChildOptions::Hardened(index - HARDENED_OFFSET)
        } else {
            ChildOptions::Normal(index)
        }
    }

    /**
        The raw child number.
        Fails if the wrapped value is not below 2^31.
    */
    pub fn index(&self) -> Result<u32, HDWError> {
        match *self {
            ChildOptions::Normal(x) if x < HARDENED_OFFSET => Ok(x),
            ChildOptions::Hardened(x) if x < HARDENED_OFFSET => Ok(x + HARDENED_OFFSET),
            _ => Err(HDWError::MalformedPath(self.to_string()))
        }
    }
}

impl fmt::Display for ChildOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChildOptions::Normal(x) => write!(f, "{}", x),
            ChildOptions::Hardened(x) => write!(f, "{}'", x)
        }
    }
}

/// Splits HMAC output into the tweak (IL) and the child chaincode (IR).
fn split(hash: [u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&hash[0..32]);
    right.copy_from_slice(&hash[32..64]);
    (left, right)
}

fn child_depth(parent_depth: u8) -> Result<u8, HDWError> {
    parent_depth.checked_add(1).ok_or(HDWError::DepthOverflow)
}

/**
    Derives the child xprv at `index` from a parent xprv.
    Indexes of 2^31 and above produce hardened children.
*/
pub fn derive_xprv(parent: &Xprv, index: u32) -> Result<Xprv, HDWError> {
    let depth = child_depth(parent.depth)?;

    //Hardened child data is [0x00 || parent priv bytes || index bytes]
    //Normal child data is [parent pub bytes || index bytes]
    let mut data: Vec<u8> = Vec::with_capacity(37);
    if index >= HARDENED_OFFSET {
        data.push(0x00);
        data.extend_from_slice(&parent.key().as_bytes());
    } else {
        data.extend_from_slice(&parent.get_pub().as_bytes());
    }
    data.extend_from_slice(&index.to_be_bytes());

    //Hash the data with the parent chaincode as the key
    let (tweak, chaincode) = split(hmac_sha512(&data, &parent.chaincode()));

    //Child key is (IL + k) mod n, invalid if IL >= n or the sum is zero
    let key = parent.key().tweak_add(&tweak).map_err(|_| {
        warn!("child {} of {} is invalid", index, hex::encode(parent.fingerprint()));
        HDWError::InvalidDerivation(index)
    })?;

    trace!("derived private child {} at depth {}", ChildOptions::from_index(index), depth);
    Ok(Xprv::construct(key, chaincode, depth, parent.fingerprint(), index))
}

/**
    Derives the child xpub at `index` from a parent xpub.
    Hardened children need the parent private key and fail here.
*/
pub fn derive_xpub(parent: &Xpub, index: u32) -> Result<Xpub, HDWError> {
    if index >= HARDENED_OFFSET {
        return Err(HDWError::HardenedWithoutPrivate(index))
    }
    let depth = child_depth(parent.depth)?;

    let mut data: Vec<u8> = Vec::with_capacity(37);
    data.extend_from_slice(&parent.key().as_bytes());
    data.extend_from_slice(&index.to_be_bytes());

    let (tweak, chaincode) = split(hmac_sha512(&data, &parent.chaincode()));

    //Child key is IL*G + K
    let key = parent.key().tweak_add(&tweak).map_err(|_| {
        warn!("child {} of {} is invalid", index, hex::encode(parent.fingerprint()));
        HDWError::InvalidDerivation(index)
    })?;

    trace!("derived public child {} at depth {}", index, depth);
    Ok(Xpub::construct(key, chaincode, depth, parent.fingerprint(), index))
}
