use crate::network::NetworkParameters;

/// Version bytes prepended to a Base58Check payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    //One byte version prefixes (addresses, WIF)
        Single(u8),

    //Four byte version prefixes (BIP-32 extended keys)
        Bip32(u32)
}

impl VersionPrefix {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            VersionPrefix::Single(x) => vec![*x],
            VersionPrefix::Bip32(x) => x.to_be_bytes().to_vec()
        }
    }
}

/**
    Looks up the version prefix for each Base58Check use case of a chain.
*/
pub trait ToVersionPrefix {
    fn p2pkh_prefix(&self) -> VersionPrefix;
    fn p2sh_prefix(&self) -> VersionPrefix;
    fn wif_prefix(&self) -> VersionPrefix;
    fn public_version_prefix(&self) -> VersionPrefix;
    fn private_version_prefix(&self) -> VersionPrefix;
}

impl ToVersionPrefix for NetworkParameters {
    fn p2pkh_prefix(&self) -> VersionPrefix {
        VersionPrefix::Single(self.pub_key_hash)
    }

    fn p2sh_prefix(&self) -> VersionPrefix {
        VersionPrefix::Single(self.script_hash)
    }

    fn wif_prefix(&self) -> VersionPrefix {
        VersionPrefix::Single(self.wif)
    }

    fn public_version_prefix(&self) -> VersionPrefix {
        VersionPrefix::Bip32(self.bip32.public)
    }

    fn private_version_prefix(&self) -> VersionPrefix {
        VersionPrefix::Bip32(self.bip32.private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{BITCOIN, DIVI_TESTNET};

    #[test]
    fn prefix_bytes() {
        assert_eq!(BITCOIN.private_version_prefix().to_bytes(), vec![0x04, 0x88, 0xad, 0xe4]);
        assert_eq!(DIVI_TESTNET.public_version_prefix().to_bytes(), vec![0x04, 0x35, 0x87, 0xcf]);
        assert_eq!(DIVI_TESTNET.p2pkh_prefix().to_bytes(), vec![0x8b]);
        assert_eq!(DIVI_TESTNET.p2sh_prefix().to_bytes(), vec![0x13]);
    }
}
