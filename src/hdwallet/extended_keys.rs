/*
    This module implements extended keys that are
    used in BIP32 hierarchal deterministic wallets.

    An extended key is a key plus a 32 byte chaincode, serialized with
    its position in the tree as:
        version(4) | depth(1) | parent fingerprint(4) | child number(4) | chaincode(32) | key data(33)
*/

use std::convert::TryInto;

use log::debug;

use crate::{
    key::{
        PrivKey,
        PubKey
    },
    encoding::{
        Base58,
        ToVersionPrefix,
        VersionPrefix
    },
    hdwallet::{
        ckd::{
            derive_xprv,
            derive_xpub,
            ChildOptions
        },
        HDWError,
        Path
    },
    hash,
    network::NetworkParameters
};

/// Length of a decoded extended key, checksum removed.
const SERIALIZED_LEN: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xprv {
    key: PrivKey,
    chaincode: [u8; 32],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xpub {
    key: PubKey,
    chaincode: [u8; 32],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32
}

pub trait ExtendedKey<T>: Sized {
    /**
        Constructs the Extended Key.
    */
    fn construct(key: T, chaincode: [u8; 32], depth: u8, pf: [u8; 4], child_number: u32) -> Self;

    /**
        Import a extended key from a string.
        The version prefix must match the network.
    */
    fn from_str(key: &str, params: &NetworkParameters) -> Result<Self, HDWError>;

    /**
        Returns the key part of the extended key
    */
    fn key(&self) -> T;

    /**
        Returns the chaincode of the extended key
    */
    fn chaincode(&self) -> [u8; 32];

    /**
        Serialize the extended key with the network's version prefix
    */
    fn serialize(&self, params: &NetworkParameters) -> String;

    /**
        Derives the child at a raw index, hardened if the index is 2^31 or above.
    */
    fn derive_child(&self, index: u32) -> Result<Self, HDWError>;

    /**
        Return the non extended public key of self.
    */
    fn get_pub(&self) -> PubKey;

    /**
        Derives the child key of self
    */
    fn get_xchild(&self, options: ChildOptions) -> Result<Self, HDWError> {
        self.derive_child(options.index()?)
    }

    /// Hash160 of the public key.
    fn identifier(&self) -> [u8; 20] {
        self.get_pub().hash160()
    }

    /// First four bytes of the identifier. Children store it as their parent fingerprint.
    fn fingerprint(&self) -> [u8; 4] {
        let mut fp = [0u8; 4];
        fp.copy_from_slice(&self.identifier()[0..4]);
        fp
    }

    /**
        Derive the key at the given path relative to self.
        eg. m/44'/0'/0'/0 derives four generations below self.
        A leading "m" does not require self to be a master key.
    */
    fn derive_path(&self, path: &Path) -> Result<Self, HDWError>
    where Self: Clone
    {
        debug!("deriving {} from {}", path, hex::encode(self.fingerprint()));
        path.children
            .iter()
            .try_fold(self.clone(), |key, child| key.get_xchild(*child))
    }
}

/**
    Builds the 78 byte payload and Base58Check encodes it.
*/
fn encode(
    version: VersionPrefix,
    depth: u8,
    parent_fingerprint: &[u8; 4],
    child_number: u32,
    chaincode: &[u8; 32],
    key_data: &[u8; 33]
) -> String {
    let mut payload: Vec<u8> = Vec::with_capacity(SERIALIZED_LEN - 4);
    payload.push(depth);
    payload.extend_from_slice(parent_fingerprint);
    payload.extend_from_slice(&child_number.to_be_bytes());
    payload.extend_from_slice(chaincode);
    payload.extend_from_slice(key_data);

    Base58::new(Some(version), &payload).check_encode()
}

/// Fields of a decoded extended key. The key data is left unparsed.
struct Decoded {
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
    chaincode: [u8; 32],
    key_data: [u8; 33]
}

/**
    Decodes an extended key string, checking length, checksum and version.
*/
fn decode(key: &str, expected_version: u32) -> Result<Decoded, HDWError> {
    let bytes = Base58::check_decode(key)?;
    if bytes.len() != SERIALIZED_LEN { return Err(HDWError::BadLength(bytes.len())) }

    let version = u32::from_be_bytes(bytes[0..4].try_into().map_err(|_| HDWError::BadLength(bytes.len()))?);
    if version != expected_version { return Err(HDWError::BadPrefix(version)) }

    let mut decoded = Decoded {
        depth: bytes[4],
        parent_fingerprint: [0u8; 4],
        child_number: 0,
        chaincode: [0u8; 32],
        key_data: [0u8; 33]
    };
    decoded.parent_fingerprint.copy_from_slice(&bytes[5..9]);
    decoded.child_number = u32::from_be_bytes([bytes[9], bytes[10], bytes[11], bytes[12]]);
    decoded.chaincode.copy_from_slice(&bytes[13..45]);
    decoded.key_data.copy_from_slice(&bytes[45..78]);

    //A master key has no parent
    if decoded.depth == 0 && (decoded.parent_fingerprint != [0u8; 4] || decoded.child_number != 0) {
        return Err(HDWError::BadRootKey)
    }

    Ok(decoded)
}

impl Xprv {
    /**
        Creates the master private key from a seed.

        HMAC-SHA512 keyed with "Bitcoin seed", the left half is the key and
        the right half the chaincode. Seeds must be 16 to 64 bytes.
    */
    pub fn from_seed(seed: &[u8]) -> Result<Self, HDWError> {
        if seed.len() < 16 || seed.len() > 64 { return Err(HDWError::BadSeedLength(seed.len())) }

        let hash: [u8; 64] = hash::hmac_sha512(seed, b"Bitcoin seed");
        let key = PrivKey::from_slice(&hash[0..32]).map_err(|_| HDWError::InvalidSeed)?;
        let mut chaincode = [0u8; 32];
        chaincode.copy_from_slice(&hash[32..64]);

        let master = Self::construct(key, chaincode, 0, [0u8; 4], 0);
        debug!("created master key {}", hex::encode(master.fingerprint()));
        Ok(master)
    }

    /**
        Returns the extended public key of self.
    */
    pub fn get_xpub(&self) -> Xpub {
        Xpub::construct(
            self.get_pub(),
            self.chaincode,
            self.depth,
            self.parent_fingerprint,
            self.child_number
        )
    }

    /**
        Export the private key as compressed WIF for the network.
    */
    pub fn to_wif(&self, params: &NetworkParameters) -> String {
        self.key.export_as_wif(true, params)
    }
}

impl ExtendedKey<PrivKey> for Xprv {
    fn construct(key: PrivKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], child_number: u32) -> Self {
        Self {
            key,
            chaincode,
            //Serialisation info
            depth,
            parent_fingerprint: pf,
            child_number
        }
    }

    fn from_str(key: &str, params: &NetworkParameters) -> Result<Self, HDWError> {
        let decoded = decode(key, params.bip32.private)?;

        //Private key data is 0x00 | k
        if decoded.key_data[0] != 0x00 { return Err(HDWError::BadKey) }
        let key = PrivKey::from_slice(&decoded.key_data[1..]).map_err(|_| HDWError::BadKey)?;

        Ok(Self::construct(
            key,
            decoded.chaincode,
            decoded.depth,
            decoded.parent_fingerprint,
            decoded.child_number
        ))
    }

    fn key(&self) -> PrivKey {
        self.key
    }

    fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    fn serialize(&self, params: &NetworkParameters) -> String {
        let mut key_data = [0u8; 33];
        key_data[1..].copy_from_slice(&self.key.as_bytes());

        encode(
            params.private_version_prefix(),
            self.depth,
            &self.parent_fingerprint,
            self.child_number,
            &self.chaincode,
            &key_data
        )
    }

    fn derive_child(&self, index: u32) -> Result<Self, HDWError> {
        derive_xprv(self, index)
    }

    fn get_pub(&self) -> PubKey {
        self.key.public_key()
    }
}

impl ExtendedKey<PubKey> for Xpub {
    fn construct(key: PubKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], child_number: u32) -> Self {
        Self {
            key,
            chaincode,
            depth,
            parent_fingerprint: pf,
            child_number
        }
    }

    fn from_str(key: &str, params: &NetworkParameters) -> Result<Self, HDWError> {
        let decoded = decode(key, params.bip32.public)?;

        //Compressed points only, 0x02 or 0x03 prefix
        if decoded.key_data[0] != 0x02 && decoded.key_data[0] != 0x03 { return Err(HDWError::BadKey) }
        let key = PubKey::from_slice(&decoded.key_data).map_err(|_| HDWError::BadKey)?;

        Ok(Self::construct(
            key,
            decoded.chaincode,
            decoded.depth,
            decoded.parent_fingerprint,
            decoded.child_number
        ))
    }

    fn key(&self) -> PubKey {
        self.key
    }

    fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    fn serialize(&self, params: &NetworkParameters) -> String {
        encode(
            params.public_version_prefix(),
            self.depth,
            &self.parent_fingerprint,
            self.child_number,
            &self.chaincode,
            &self.key.as_bytes()
        )
    }

    fn derive_child(&self, index: u32) -> Result<Self, HDWError> {
        derive_xpub(self, index)
    }

    fn get_pub(&self) -> PubKey {
        self.key
    }
}
