/*
    This module contains the default imports for the library.

    Import the library using:
        use divi_keyaddress::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey,
        KeyError
    },

    address::{
        Payment,
        AddressErr
    },

    hdwallet::{
        ChildOptions,
        ExtendedKey,
        Xprv, Xpub,
        HDWError,
        Path
    },

    encoding::{
        Base58Error,
        VersionPrefix,
        ToVersionPrefix,
        check_encode,
        check_decode
    },

    network::{
        Network,
        NetworkParameters,
        BITCOIN,
        TESTNET,
        REGTEST,
        DIVI,
        DIVI_TESTNET
    },

    script::{
        Builder,
        Chunk,
        Opcode,
        OpcodeTable,
        Script,
        ScriptErr,
        DIVI_TABLE,
        STANDARD_TABLE
    }

};
