/*
    Opcode name tables.

    A table maps every byte to at most one canonical name and every known
    name (aliases included) back to its byte. Chains add their own opcodes
    as `OpcodeExtension` values, the DIVI set is one such configuration.
*/

use std::{borrow::Cow, collections::HashMap};

use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::opcodes::{self, Opcode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpcodeError {
    #[error("{name} cannot alias {alias_of}: unknown name or different byte")]
    AliasMismatch { name: String, alias_of: String },
    #[error("{name} wants byte {code:#04x} which is already {existing}")]
    ByteCollision { name: String, code: u8, existing: String },
    #[error("opcode name {0} is already defined")]
    NameCollision(String)
}

/// One chain specific opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpcodeExtension {
    pub name: Cow<'static, str>,
    pub code: u8,
    /// Existing name sharing the byte. The extension becomes the canonical name.
    pub alias_of: Option<Cow<'static, str>>
}

impl OpcodeExtension {
    pub const fn new(name: &'static str, code: u8) -> Self {
        Self { name: Cow::Borrowed(name), code, alias_of: None }
    }

    pub const fn alias(name: &'static str, code: u8, alias_of: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), code, alias_of: Some(Cow::Borrowed(alias_of)) }
    }
}

pub static DIVI_EXTENSIONS: [OpcodeExtension; 4] = [
    OpcodeExtension::alias("OP_REQUIRE_COINSTAKE", 0xb9, "OP_NOP10"),
    OpcodeExtension::new("OP_CHECKCOLDSTAKEVERIFY_LOF", 0xd1),
    OpcodeExtension::new("OP_CHECKCOLDSTAKEVERIFY", 0xd2),
    OpcodeExtension::new("OP_EXCHANGEADDR", 0xe0),
];

lazy_static! {
    /// Bitcoin opcodes.
    pub static ref STANDARD_TABLE: OpcodeTable = OpcodeTable::standard();
    /// Bitcoin opcodes plus `DIVI_EXTENSIONS`.
    pub static ref DIVI_TABLE: OpcodeTable = {
        let mut table = OpcodeTable::standard();
        DIVI_EXTENSIONS.iter().for_each(|ext| table.insert(ext));
        table
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    names: Vec<Option<Cow<'static, str>>>,
    codes: HashMap<Cow<'static, str>, Opcode>
}

impl OpcodeTable {
    pub fn standard() -> Self {
        let mut names = vec![None; 256];
        let mut codes = HashMap::new();
        for (name, op) in opcodes::STANDARD.iter() {
            names[op.into_u8() as usize] = Some(Cow::Borrowed(*name));
            codes.insert(Cow::Borrowed(*name), *op);
        }
        for (name, op) in opcodes::STANDARD_ALIASES.iter() {
            codes.insert(Cow::Borrowed(*name), *op);
        }

        Self { names, codes }
    }

    /**
        Returns a copy of self with the extensions applied in order.
        Nothing is applied if any extension conflicts with the table.
    */
    pub fn with_extensions(&self, extensions: &[OpcodeExtension]) -> Result<Self, OpcodeError> {
        let mut table = self.clone();
        for ext in extensions {
            table.validate(ext)?;
            table.insert(ext);
        }

        Ok(table)
    }

    fn validate(&self, ext: &OpcodeExtension) -> Result<(), OpcodeError> {
        if self.codes.contains_key(&ext.name) {
            return Err(OpcodeError::NameCollision(ext.name.to_string()))
        }

        match &ext.alias_of {
            Some(base) => match self.codes.get(base) {
                Some(op) if op.into_u8() == ext.code => Ok(()),
                _ => Err(OpcodeError::AliasMismatch {
                    name: ext.name.to_string(),
                    alias_of: base.to_string()
                })
            },
            None => match &self.names[ext.code as usize] {
                Some(existing) => Err(OpcodeError::ByteCollision {
                    name: ext.name.to_string(),
                    code: ext.code,
                    existing: existing.to_string()
                }),
                None => Ok(())
            }
        }
    }

    fn insert(&mut self, ext: &OpcodeExtension) {
        self.names[ext.code as usize] = Some(ext.name.clone());
        self.codes.insert(ext.name.clone(), Opcode::from(ext.code));
    }

    /**
        Canonical name of an opcode.
        Unassigned bytes render as a `0xNN` label.
    */
    pub fn name(&self, op: Opcode) -> Cow<'_, str> {
        match &self.names[op.into_u8() as usize] {
            Some(name) => Cow::Borrowed(&**name),
            None => Cow::Owned(format!("0x{:02x}", op.into_u8()))
        }
    }

    /**
        Resolves a name (canonical or alias) or a `0xNN` label.
    */
    pub fn code(&self, name: &str) -> Option<Opcode> {
        if let Some(op) = self.codes.get(name) {
            return Some(*op)
        }

        match name.strip_prefix("0x") {
            Some(digits) if digits.len() == 2 => u8::from_str_radix(digits, 16).ok().map(Opcode::from),
            _ => None
        }
    }

    pub fn is_assigned(&self, op: Opcode) -> bool {
        self.names[op.into_u8() as usize].is_some()
    }
}
