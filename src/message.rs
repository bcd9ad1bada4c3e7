/*
    Digest of a signed message.

    Wallets sign sha256d(prefix | CompactSize(len) | message) so a message
    signature can never be replayed as a transaction signature. The
    prefix already carries its own length byte.
*/

use crate::{
    hash,
    network::NetworkParameters
};

/// Bitcoin's variable length integer encoding.
pub fn compact_size(n: u64) -> Vec<u8> {
    match n {
        0..=0xfc => vec![n as u8],
        0xfd..=0xffff => {
            let mut v = vec![0xfd];
            v.extend_from_slice(&(n as u16).to_le_bytes());
            v
        },
        0x10000..=0xffff_ffff => {
            let mut v = vec![0xfe];
            v.extend_from_slice(&(n as u32).to_le_bytes());
            v
        },
        _ => {
            let mut v = vec![0xff];
            v.extend_from_slice(&n.to_le_bytes());
            v
        }
    }
}

/**
    Hash to sign for `message` on the network.
*/
pub fn magic_hash<T>(message: T, params: &NetworkParameters) -> [u8; 32]
where T: AsRef<[u8]>
{
    let message = message.as_ref();
    let mut data: Vec<u8> = params.message_prefix.as_bytes().to_vec();
    data.extend(compact_size(message.len() as u64));
    data.extend_from_slice(message);

    hash::sha256d(&data)
}
