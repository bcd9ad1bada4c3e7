/*
    Scripts as chunk sequences.

    Chunks are compiled to bytes with minimal pushes, decompiled back,
    and rendered as text through an opcode table.
*/

pub mod builder;
pub mod chunk;
pub mod opcodes;
pub mod table;

pub use builder::Builder;
pub use chunk::{compile, decompile, Chunk};
pub use opcodes::Opcode;
pub use table::{OpcodeError, OpcodeExtension, OpcodeTable, DIVI_EXTENSIONS, DIVI_TABLE, STANDARD_TABLE};

use std::fmt;

use crate::hash;
use opcodes::*;

/// Consensus limit on the size of a single pushed element.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptErr {
    #[error("push at offset {offset} needs {needed} bytes but only {available} remain")]
    MalformedScript { offset: usize, needed: usize, available: usize },
    #[error("push of {0} bytes does not fit a length field")]
    PushTooLarge(usize),
    #[error("unknown opcode {0}")]
    UnknownOpcode(String),
    #[error("{0} is neither an opcode nor hex data")]
    BadHex(String)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Script {
    code: Vec<u8>
}

impl Script {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    pub fn compile(chunks: &[Chunk]) -> Result<Self, ScriptErr> {
        compile(chunks)
    }

    pub fn decompile(&self) -> Result<Vec<Chunk>, ScriptErr> {
        decompile(&self.code)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> [u8; 20] {
        hash::hash160(&self.code)
    }

    /**
        Renders the script as space separated opcode names and hex pushes.
    */
    pub fn to_asm(&self, table: &OpcodeTable) -> Result<String, ScriptErr> {
        let words: Vec<String> = self.decompile()?
            .iter()
            .map(|chunk| match chunk {
                Chunk::Op(op) => table.name(*op).into_owned(),
                Chunk::Push(data) => hex::encode(data)
            })
            .collect();

        Ok(words.join(" "))
    }

    /**
        Parses the output of `to_asm`.
        Opcode names and `0xNN` labels are opcodes, anything else must be hex data.
    */
    pub fn from_asm(asm: &str, table: &OpcodeTable) -> Result<Self, ScriptErr> {
        let mut chunks: Vec<Chunk> = vec![];
        for word in asm.split_whitespace() {
            if let Some(op) = table.code(word) {
                chunks.push(Chunk::Op(op));
                continue;
            }
            if word.starts_with("OP_") {
                return Err(ScriptErr::UnknownOpcode(word.to_string()))
            }

            match hex::decode(word) {
                Ok(data) => chunks.push(Chunk::Push(data)),
                Err(_) => return Err(ScriptErr::BadHex(word.to_string()))
            }
        }

        compile(&chunks)
    }

    /**
        OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG
    */
    pub fn p2pkh(hash: &[u8; 20]) -> Result<Self, ScriptErr> {
        Builder::new()
            .push_opcode(OP_DUP)
            .push_opcode(OP_HASH160)
            .push_slice(hash)
            .push_opcode(OP_EQUALVERIFY)
            .push_opcode(OP_CHECKSIG)
            .into_script()
    }

    /**
        OP_HASH160 <hash> OP_EQUAL
    */
    pub fn p2sh(hash: &[u8; 20]) -> Result<Self, ScriptErr> {
        Builder::new()
            .push_opcode(OP_HASH160)
            .push_slice(hash)
            .push_opcode(OP_EQUAL)
            .into_script()
    }

    /**
        DIVI vault script.

        The owner can always spend. The manager can only spend in a
        coinstake transaction, which lets it stake the funds without
        being able to move them elsewhere.
    */
    pub fn vault(owner: &[u8; 20], manager: &[u8; 20]) -> Result<Self, ScriptErr> {
        Builder::new()
            .push_opcode(OP_IF)
            .push_slice(owner)
            .push_opcode(OP_ELSE)
            .push_opcode(OP_REQUIRE_COINSTAKE)
            .push_slice(manager)
            .push_opcode(OP_ENDIF)
            .push_opcode(OP_OVER)
            .push_opcode(OP_HASH160)
            .push_opcode(OP_EQUALVERIFY)
            .push_opcode(OP_CHECKSIG)
            .into_script()
    }

    /// Public key hash of a canonical P2PKH output script.
    pub fn p2pkh_hash(&self) -> Option<[u8; 20]> {
        let c = &self.code;
        let matches = c.len() == 25
            && c[0] == OP_DUP.into_u8()
            && c[1] == OP_HASH160.into_u8()
            && c[2] == 20
            && c[23] == OP_EQUALVERIFY.into_u8()
            && c[24] == OP_CHECKSIG.into_u8();

        if matches { Some(hash20(&c[3..23])) } else { None }
    }

    /// Script hash of a canonical P2SH output script.
    pub fn p2sh_hash(&self) -> Option<[u8; 20]> {
        let c = &self.code;
        let matches = c.len() == 23
            && c[0] == OP_HASH160.into_u8()
            && c[1] == 20
            && c[22] == OP_EQUAL.into_u8();

        if matches { Some(hash20(&c[2..22])) } else { None }
    }
}

fn hash20(slice: &[u8]) -> [u8; 20] {
    let mut hash = [0u8; 20];
    hash.copy_from_slice(slice);
    hash
}

impl From<Vec<u8>> for Script {
    fn from(code: Vec<u8>) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.code))
    }
}
