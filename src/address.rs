/*
    Payment templates.

    A payment bundles the hash committed to by an output, the output
    script and its Base58Check address for one network.
*/

use crate::{
    encoding::{
        check_decode,
        Base58,
        Base58Error,
        ToVersionPrefix,
        VersionPrefix
    },
    hash,
    key::PubKey,
    network::NetworkParameters,
    script::{
        Script,
        ScriptErr
    }
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressErr {
    #[error("public key must be 33 bytes (02/03) or 65 bytes (04) and on the curve")]
    InvalidPublicKey,
    #[error(transparent)]
    Base58(#[from] Base58Error),
    #[error("address version {0:#04x} does not belong to this network")]
    WrongNetwork(u8),
    #[error("address payload must be 20 bytes, got {0}")]
    BadPayloadLength(usize),
    #[error("output script is not P2PKH or P2SH")]
    NonStandardScript,
    #[error(transparent)]
    Script(#[from] ScriptErr)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub hash: [u8; 20],
    pub script: Script,
    pub address: String
}

fn valid_public_key(pubkey: &[u8]) -> bool {
    let prefix_ok = match (pubkey.len(), pubkey.first().copied()) {
        (33, Some(0x02)) | (33, Some(0x03)) => true,
        (65, Some(0x04)) => true,
        _ => false
    };

    prefix_ok && PubKey::from_slice(pubkey).is_ok()
}

/**
    Pay to public key hash.
    * Base58Check( Ripemd160( Sha256( Public Key ) ) )

    The key is hashed as given, so compressed and uncompressed
    encodings of one key give different addresses.
*/
pub fn p2pkh(pubkey: &[u8], params: &NetworkParameters) -> Result<Payment, AddressErr> {
    if !valid_public_key(pubkey) { return Err(AddressErr::InvalidPublicKey) }

    p2pkh_from_hash(&hash::hash160(pubkey), params)
}

/**
    Pay to public key hash from an already hashed key.
*/
pub fn p2pkh_from_hash(hash: &[u8; 20], params: &NetworkParameters) -> Result<Payment, AddressErr> {
    Ok(Payment {
        hash: *hash,
        script: Script::p2pkh(hash)?,
        address: Base58::new(Some(params.p2pkh_prefix()), hash).check_encode()
    })
}

/**
    Pay to script hash of a redeem script.
*/
pub fn p2sh(redeem_script: &Script, params: &NetworkParameters) -> Result<Payment, AddressErr> {
    let hash = redeem_script.hash();

    Ok(Payment {
        hash,
        script: Script::p2sh(&hash)?,
        address: Base58::new(Some(params.p2sh_prefix()), &hash).check_encode()
    })
}

/**
    Output script paying to an address of the network.
*/
pub fn to_output_script(address: &str, params: &NetworkParameters) -> Result<Script, AddressErr> {
    let (version, payload) = check_decode(address)?;
    if payload.len() != 20 { return Err(AddressErr::BadPayloadLength(payload.len())) }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload);

    let prefix = VersionPrefix::Single(version);
    if prefix == params.p2pkh_prefix() {
        Ok(Script::p2pkh(&hash)?)
    } else if prefix == params.p2sh_prefix() {
        Ok(Script::p2sh(&hash)?)
    } else {
        Err(AddressErr::WrongNetwork(version))
    }
}

/**
    Address an output script pays to.
*/
pub fn from_output_script(script: &Script, params: &NetworkParameters) -> Result<String, AddressErr> {
    if let Some(hash) = script.p2pkh_hash() {
        Ok(Base58::new(Some(params.p2pkh_prefix()), &hash).check_encode())
    } else if let Some(hash) = script.p2sh_hash() {
        Ok(Base58::new(Some(params.p2sh_prefix()), &hash).check_encode())
    } else {
        Err(AddressErr::NonStandardScript)
    }
}
