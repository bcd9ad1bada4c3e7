/*
    Single secp256k1 keys.

    Curve arithmetic is delegated to the secp256k1 library, this module
    only wraps the keys and handles their serialisation (WIF, compressed
    and uncompressed SEC encoding).
*/

use crate::{
    SECP,
    PublicKey,
    SecretKey,
    encoding::{
        Base58,
        Base58Error,
        ToVersionPrefix
    },
    hash,
    network::NetworkParameters
};
use std::fmt;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error(transparent)]
    Base58(#[from] Base58Error),
    #[error("expected version byte {expected:#04x}, found {found:#04x}")]
    WrongVersion { expected: u8, found: u8 },
    #[error("unexpected key payload length {0}")]
    BadLength(usize),
    #[error("unexpected compression flag {0:#04x}")]
    BadCompressionFlag(u8),
    #[error("invalid key: {0}")]
    InvalidKey(#[from] secp256k1::Error)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivKey(SecretKey);

impl PrivKey {
    /**
        Use a predefined byte array as a secret key.
        Fails if the bytes are zero or not below the curve order.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        Ok(Self(SecretKey::from_slice(byte_array)?))
    }

    /**
        Serializes the private key into a array of bytes.
    */
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.0[..]);
        bytes
    }

    /// Returns `(self + tweak) mod n`.
    pub(crate) fn tweak_add(&self, tweak: &[u8; 32]) -> Result<Self, secp256k1::Error> {
        let mut key = self.0;
        key.add_assign(tweak)?;
        Ok(Self(key))
    }

    /*
        Export the private key a wallet-import-format (Base58Check Encoded with prefix)
        * Use the parameter to indicate if WIF should include the compression byte.
    */
    pub fn export_as_wif(&self, compressed: bool, params: &NetworkParameters) -> String {
        let mut key: Vec<u8> = self.as_bytes().to_vec();
        if compressed {
            key.push(0x01);
        }

        Base58::new(Some(params.wif_prefix()), &key).check_encode()
    }

    /**
        Import a private key from wallet-import-format.
        Returns the key and whether it was flagged as compressed.
    */
    pub fn from_wif(wif: &str, params: &NetworkParameters) -> Result<(Self, bool), KeyError> {
        let bytes = Base58::check_decode(wif)?;
        if bytes[0] != params.wif {
            return Err(KeyError::WrongVersion { expected: params.wif, found: bytes[0] })
        }

        let compressed = match bytes.len() {
            33 => false,
            34 => match bytes[33] {
                0x01 => true,
                x => return Err(KeyError::BadCompressionFlag(x))
            },
            x => return Err(KeyError::BadLength(x - 1))
        };

        Ok((Self::from_slice(&bytes[1..33])?, compressed))
    }

    pub fn public_key(&self) -> PubKey {
        PubKey::from_priv_key(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PubKey(PublicKey);

impl PubKey {

    /**
        Finds the compressed public key from a secret key.

        Is the result of static point G on the secp256k1 curve multipled k times, where k is the private key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(PublicKey::from_secret_key(&*SECP, &k.0))
    }

    /**
        Parse a compressed (33 byte) or uncompressed (65 byte) public key.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        Ok(Self(PublicKey::from_slice(byte_array)?))
    }

    /**
        Returns the compressed public key as a byte array.
    */
    pub fn as_bytes(&self) -> [u8; 33] {
        //Len should be 33 (32bytes + sign identifier)
        self.0.serialize()
    }

    /**
        Returns the uncompressed public key (0x04 | x | y).
    */
    pub fn decompressed_bytes(&self) -> [u8; 65] {
        self.0.serialize_uncompressed()
    }

    /// Hash160 of the compressed key
    pub fn hash160(&self) -> [u8; 20] {
        hash::hash160(&self.as_bytes())
    }

    /// Returns `self + tweak*G`.
    pub(crate) fn tweak_add(&self, tweak: &[u8; 32]) -> Result<Self, secp256k1::Error> {
        let mut key = self.0;
        key.add_exp_assign(&*SECP, tweak)?;
        Ok(Self(key))
    }

    /**
       Return the compressed public key as a hex string.
    */
    pub fn as_hex(&self) -> String {
        hex::encode(&self.as_bytes()[..])
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{BITCOIN, DIVI, TESTNET};

    //https://en.bitcoin.it/wiki/Wallet_import_format
    const WIKI_KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

    fn wiki_key() -> PrivKey {
        PrivKey::from_slice(&hex::decode(WIKI_KEY).unwrap()).unwrap()
    }

    #[test]
    fn wif_export() {
        let key = wiki_key();
        assert_eq!(key.export_as_wif(false, &BITCOIN), "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ");
        assert_eq!(key.export_as_wif(true, &BITCOIN), "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617");
    }

    #[test]
    fn wif_import() {
        let (key, compressed) = PrivKey::from_wif("KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617", &BITCOIN).unwrap();
        assert!(compressed);
        assert_eq!(key, wiki_key());

        let (key, compressed) = PrivKey::from_wif("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ", &BITCOIN).unwrap();
        assert!(!compressed);
        assert_eq!(hex::encode(key.as_bytes()), WIKI_KEY);
    }

    #[test]
    fn wif_for_other_network_is_rejected() {
        let wif = wiki_key().export_as_wif(true, &DIVI);
        assert_eq!(
            PrivKey::from_wif(&wif, &TESTNET),
            Err(KeyError::WrongVersion { expected: 0xef, found: 0x9e })
        );
        assert_eq!(PrivKey::from_wif(&wif, &DIVI).unwrap().0, wiki_key());
    }

    #[test]
    fn wif_with_bad_flag() {
        let mut payload = hex::decode(WIKI_KEY).unwrap();
        payload.push(0x02);
        let wif = Base58::new(Some(BITCOIN.wif_prefix()), &payload).check_encode();
        assert_eq!(PrivKey::from_wif(&wif, &BITCOIN), Err(KeyError::BadCompressionFlag(0x02)));

        let wif = Base58::new(Some(BITCOIN.wif_prefix()), &payload[..20]).check_encode();
        assert_eq!(PrivKey::from_wif(&wif, &BITCOIN), Err(KeyError::BadLength(20)));
    }

    #[test]
    fn invalid_scalars() {
        assert!(PrivKey::from_slice(&[0u8; 32]).is_err());
        assert!(PrivKey::from_slice(&[0xffu8; 32]).is_err());
        assert!(PrivKey::from_slice(&[1u8; 31]).is_err());
    }

    #[test]
    fn public_key_encodings() {
        let key = PubKey::from_slice(&hex::decode("0204664c60ceabd82967055ccbd0f56a1585dfbd42032656efa501c463b16fbdfe").unwrap()).unwrap();
        let uncompressed = key.decompressed_bytes();
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(PubKey::from_slice(&uncompressed).unwrap(), key);
        assert_eq!(hex::encode(key.hash160()), "0b9492c088247d60b4150ed1d10d01c1c1029a1c");
    }
}
