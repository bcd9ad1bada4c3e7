/*
    Hash module include hash function necessary to hash
    a public key into an address, checksum Base58 payloads
    and drive BIP32 child key deriveration.
*/

use crate::{
    Ripemd160, Sha256, Sha512, Digest,
    Hmac, Mac, NewMac
};

/*
    Takes in an byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    let mut out = [0u8; 20];
    out.copy_from_slice(&r.finalize());
    out
}

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&r.finalize());
    out
}

/// Sha256(Sha256(input)). Used for Base58Check checksums and message digests.
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/// Ripemd160(Sha256(input)). Compresses public keys and scripts into address payloads.
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/// HMAC-SHA512 of `data` keyed with `key`.
pub fn hmac_sha512(data: &[u8], key: &[u8]) -> [u8; 64] {
    let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_digests() {
        assert_eq!(hex::encode(sha256(b"")), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(hex::encode(ripemd160(b"")), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
    }

    #[test]
    fn hash160_of_public_key() {
        let key = hex::decode("0204664c60ceabd82967055ccbd0f56a1585dfbd42032656efa501c463b16fbdfe").unwrap();
        assert_eq!(hex::encode(hash160(&key)), "0b9492c088247d60b4150ed1d10d01c1c1029a1c");
    }

    #[test]
    fn hmac_rfc4231_case_2() {
        let mac = hmac_sha512(b"what do ya want for nothing?", b"Jefe");
        assert_eq!(
            hex::encode(&mac[..]),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }
}
