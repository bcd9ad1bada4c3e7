/*
    Network parameter registry.

    Every chain dependent operation in this library takes a
    `&NetworkParameters` argument. There is no default network.

    Address prefixes:
        https://en.bitcoin.it/wiki/List_of_address_prefixes
*/

use std::{borrow::Cow, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// BIP32 extended key version bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bip32Versions {
    pub public: u32,
    pub private: u32
}

/// Version bytes and message prefix describing one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NetworkParameters {
    /// Prefix hashed in front of signed messages (length byte included).
    pub message_prefix: Cow<'static, str>,
    /// Segwit human readable part. Carried as data only.
    pub bech32: Option<Cow<'static, str>>,
    pub bip32: Bip32Versions,
    pub pub_key_hash: u8,
    pub script_hash: u8,
    pub wif: u8
}

impl NetworkParameters {
    /**
        Define the parameters of a chain that is not built in.
        No validation is done, the caller is responsible for chain correct values.
    */
    pub const fn new(
        message_prefix: &'static str,
        bech32: Option<&'static str>,
        bip32: Bip32Versions,
        pub_key_hash: u8,
        script_hash: u8,
        wif: u8
    ) -> Self {
        Self {
            message_prefix: Cow::Borrowed(message_prefix),
            bech32: match bech32 {
                Some(x) => Some(Cow::Borrowed(x)),
                None => None
            },
            bip32,
            pub_key_hash,
            script_hash,
            wif
        }
    }
}

const BITCOIN_MESSAGE_PREFIX: &str = "\x18Bitcoin Signed Message:\n";
const DIVI_MESSAGE_PREFIX: &str = "\x19Divi Signed Message:\n";

const MAINNET_BIP32: Bip32Versions = Bip32Versions { public: 0x0488b21e, private: 0x0488ade4 };
const TESTNET_BIP32: Bip32Versions = Bip32Versions { public: 0x043587cf, private: 0x04358394 };

pub static BITCOIN: NetworkParameters = NetworkParameters::new(
    BITCOIN_MESSAGE_PREFIX, Some("bc"), MAINNET_BIP32, 0x00, 0x05, 0x80
);

pub static TESTNET: NetworkParameters = NetworkParameters::new(
    BITCOIN_MESSAGE_PREFIX, Some("tb"), TESTNET_BIP32, 0x6f, 0xc4, 0xef
);

pub static REGTEST: NetworkParameters = NetworkParameters::new(
    BITCOIN_MESSAGE_PREFIX, Some("bcrt"), TESTNET_BIP32, 0x6f, 0xc4, 0xef
);

/// DIVI mainnet. Addresses start with 'D'. DIVI never enabled segwit.
pub static DIVI: NetworkParameters = NetworkParameters::new(
    DIVI_MESSAGE_PREFIX, None, MAINNET_BIP32, 0x1e, 0x0d, 0x9e
);

pub static DIVI_TESTNET: NetworkParameters = NetworkParameters::new(
    DIVI_MESSAGE_PREFIX, None, TESTNET_BIP32, 0x8b, 0x13, 0xef
);

/// The built in chains, selectable by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Network {
    Bitcoin,
    Testnet,
    Regtest,
    Divi,
    DiviTestnet
}

impl Network {
    pub fn params(&self) -> &'static NetworkParameters {
        match self {
            Network::Bitcoin => &BITCOIN,
            Network::Testnet => &TESTNET,
            Network::Regtest => &REGTEST,
            Network::Divi => &DIVI,
            Network::DiviTestnet => &DIVI_TESTNET
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Divi => "divi",
            Network::DiviTestnet => "divi-testnet"
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown network '{0}'")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "bitcoin" | "mainnet" => Network::Bitcoin,
            "testnet" => Network::Testnet,
            "regtest" => Network::Regtest,
            "divi" => Network::Divi,
            "divi-testnet" | "divitestnet" => Network::DiviTestnet,
            _ => return Err(UnknownNetwork(s.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divi_parameters() {
        assert_eq!(DIVI.pub_key_hash, 0x1e);
        assert_eq!(DIVI.script_hash, 0x0d);
        assert_eq!(DIVI.wif, 0x9e);
        assert_eq!(DIVI.bech32, None);
        assert_eq!(DIVI.bip32, BITCOIN.bip32);
        assert_eq!(DIVI_TESTNET.pub_key_hash, 0x8b);
        assert_eq!(DIVI_TESTNET.script_hash, 0x13);
        assert_eq!(DIVI_TESTNET.bip32.private, 0x04358394);
        assert_eq!(DIVI.message_prefix.as_bytes()[0], 0x19);
        assert_eq!(BITCOIN.message_prefix.as_bytes()[0] as usize, BITCOIN.message_prefix.len() - 1);
    }

    #[test]
    fn address_versions_do_not_collide() {
        let chains = [&BITCOIN, &TESTNET, &DIVI, &DIVI_TESTNET];
        for (i, a) in chains.iter().enumerate() {
            for b in chains.iter().skip(i + 1) {
                assert_ne!(a.pub_key_hash, b.pub_key_hash);
            }
        }
    }

    #[test]
    fn network_names() {
        for n in [Network::Bitcoin, Network::Testnet, Network::Regtest, Network::Divi, Network::DiviTestnet].iter() {
            assert_eq!(n.name().parse::<Network>(), Ok(*n));
        }
        assert_eq!("DIVI".parse::<Network>().unwrap().params(), &DIVI);
        assert!("litecoin".parse::<Network>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn custom_chain_from_json() {
        let json = r#"{
            "messagePrefix": "\u0018Custom Signed Message:\n",
            "bech32": null,
            "bip32": { "public": 76067358, "private": 76066276 },
            "pubKeyHash": 30,
            "scriptHash": 13,
            "wif": 158
        }"#;
        let params: NetworkParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.bip32, DIVI.bip32);
        assert_eq!(params.pub_key_hash, DIVI.pub_key_hash);
        assert_eq!(params.message_prefix, "\x18Custom Signed Message:\n");

        let back: NetworkParameters = serde_json::from_str(&serde_json::to_string(&DIVI).unwrap()).unwrap();
        assert_eq!(back, DIVI);
    }
}
