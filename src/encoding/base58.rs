use crate::{
    encoding::{
        version_prefix::VersionPrefix
    },
    hash
};

const BASE58_ALPHABET: &'static [u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const MAP_BASE58: [i8; 128] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
];

/// Version byte plus the 4 checksum bytes.
const MIN_CHECKED_LEN: usize = 5;

#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58Error {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("decoded data is {0} bytes long, at least 5 are required")]
    TooShort(usize),
    #[error("checksum mismatch")]
    ChecksumMismatch
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        //Concatenate: prefix | payload | checksum, to calculate checksum
        let mut bytes: Vec<u8> = if let Some(x) = self.prefix {
            x.to_bytes()
        } else {
            Vec::new()
        };
        bytes.extend_from_slice(&self.payload);
        let checksum = hash::sha256d(&bytes);
        bytes.extend_from_slice(&checksum[0..4]);

        //Prefix is none because it is already accounted for in the payload with the checksum.
        Self::encode(Self { prefix: None, payload: bytes })
    }

    /// Encode data in base58 format.
    pub fn encode(self) -> String {
        //Concatenate the prefix and payload
        let data = if let Some(x) = self.prefix {
            let mut d = x.to_bytes();
            d.extend_from_slice(&self.payload);
            d
        } else {
            self.payload
        };

        //Little endian base58 digits of the big endian input.
        let mut result: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
        let zcount = data.iter().take_while(|x| **x == 0).count();

        for d in &data[zcount..] {
            //Multiply the digits by 256, add the next byte and carry into new digits.
            //    digit = (digit*256 + carry)%58    |   carry = (digit*256 + carry)/58
            let mut carry = *d as usize;
            for digit in result.iter_mut() {
                let new_digit = *digit as usize * 256 + carry;
                *digit = (new_digit % 58) as u8;
                carry = new_digit / 58;
            }

            while carry > 0 {
                result.push((carry % 58) as u8);
                carry /= 58;
            }
        }

        //Each leading zero byte becomes a leading '1'.
        for _ in 0..zcount {
            result.push(0);
        }
        result.iter().rev().map(|x| BASE58_ALPHABET[*x as usize] as char).collect()
    }

    /// Decodes a base58 string into a byte vector.
    /// DOES NOT remove the checksum or version prefix if present.
    ///
    /// Whitespace and any character outside the alphabet are rejected.
    pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        //Enough space for the big-endian base256 representation.
        let size = encoded.len() * 733 / 1000 + 1; // log(58) / log(256), rounded up.
        let mut b256: Vec<u8> = vec![0; size];
        let mut zeroes = 0;
        let mut leading = true;

        for (index, character) in encoded.chars().enumerate() {
            let digit: i8 = if character.is_ascii() { MAP_BASE58[character as usize] } else { -1 };
            if digit < 0 {
                return Err(Base58Error::InvalidCharacter { character, index })
            }

            //Leading '1's are leading zero bytes
            if leading && digit == 0 {
                zeroes += 1;
                continue;
            }
            leading = false;

            let mut carry = digit as u32;
            for byte in b256.iter_mut().rev() {
                carry += 58 * (*byte as u32);
                *byte = (carry % 256) as u8;
                carry /= 256;
            }
            debug_assert_eq!(carry, 0);
        }

        let skip = b256.iter().take_while(|x| **x == 0).count();
        let mut result: Vec<u8> = vec![0; zeroes];
        result.extend_from_slice(&b256[skip..]);

        Ok(result)
    }

    /// Returns the decoded payload with the checksum removed.
    /// Version prefix is NOT removed as it is variable length depending on context.
    pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        let mut bytes = Base58::decode(encoded)?;
        if bytes.len() < MIN_CHECKED_LEN { return Err(Base58Error::TooShort(bytes.len())) }

        let checksum = bytes.split_off(bytes.len() - 4);
        if hash::sha256d(&bytes)[0..4] != checksum[..] {
            return Err(Base58Error::ChecksumMismatch)
        }

        Ok(bytes)
    }
}

/**
    Returns the Base58Check encoding of `version | payload`.
*/
pub fn check_encode(payload: &[u8], version: u8) -> String {
    Base58::new(Some(VersionPrefix::Single(version)), payload).check_encode()
}

/**
    Decodes a Base58Check string into its one byte version and payload.
*/
pub fn check_decode(encoded: &str) -> Result<(u8, Vec<u8>), Base58Error> {
    let mut bytes = Base58::check_decode(encoded)?;
    let payload = bytes.split_off(1);

    Ok((bytes[0], payload))
}
