/*
    Compiles chunks into script bytes and back.

    Pushes are always written with the smallest length prefix.
    Nothing is evaluated, branches are opaque opcodes.
*/

use std::convert::TryFrom;

use log::trace;

use super::{
    opcodes::{
        Opcode,
        OP_0,
        OP_PUSHDATA1,
        OP_PUSHDATA2,
        OP_PUSHDATA4
    },
    Script,
    ScriptErr,
    MAX_SCRIPT_ELEMENT_SIZE
};

/// Largest push that fits a single length byte.
const MAX_DIRECT_PUSH: usize = 0x4b;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Op(Opcode),
    Push(Vec<u8>)
}

impl Chunk {
    /// True if the chunk is an opcode or a push no longer than 520 bytes.
    pub fn is_standard_push(&self) -> bool {
        match self {
            Chunk::Op(_) => true,
            Chunk::Push(data) => data.len() <= MAX_SCRIPT_ELEMENT_SIZE
        }
    }
}

impl From<Opcode> for Chunk {
    fn from(op: Opcode) -> Self {
        Chunk::Op(op)
    }
}

/**
    Length prefix of a push.
    An empty push is the single byte OP_0.
*/
fn push_prefix(len: usize) -> Result<Vec<u8>, ScriptErr> {
    Ok(match len {
        0 => vec![OP_0.into_u8()],
        1..=MAX_DIRECT_PUSH => vec![len as u8],
        0x4c..=0xff => vec![OP_PUSHDATA1.into_u8(), len as u8],
        0x100..=0xffff => {
            let mut prefix = vec![OP_PUSHDATA2.into_u8()];
            prefix.extend_from_slice(&(len as u16).to_le_bytes());
            prefix
        },
        _ => {
            let len = u32::try_from(len).map_err(|_| ScriptErr::PushTooLarge(len))?;
            let mut prefix = vec![OP_PUSHDATA4.into_u8()];
            prefix.extend_from_slice(&len.to_le_bytes());
            prefix
        }
    })
}

/**
    Serializes chunks into a script.
*/
pub fn compile(chunks: &[Chunk]) -> Result<Script, ScriptErr> {
    let mut bytes: Vec<u8> = vec![];
    for chunk in chunks {
        match chunk {
            Chunk::Op(op) => bytes.push(op.into_u8()),
            Chunk::Push(data) => {
                bytes.extend(push_prefix(data.len())?);
                bytes.extend_from_slice(data);
            }
        }
    }

    Ok(Script::new(bytes))
}

/// Reads a little endian length field of `width` bytes following the opcode at `offset`.
fn read_len(bytes: &[u8], offset: usize, width: usize) -> Result<usize, ScriptErr> {
    let available = bytes.len() - offset;
    if available < 1 + width {
        return Err(ScriptErr::MalformedScript { offset, needed: 1 + width, available })
    }

    Ok(bytes[offset + 1..offset + 1 + width]
        .iter()
        .rev()
        .fold(0usize, |acc, b| (acc << 8) | *b as usize))
}

/**
    Splits script bytes into chunks.

    Bytes 0x01..=0x4b and the OP_PUSHDATA opcodes are read as pushes,
    every other byte is an opcode. Fails if a push runs past the end.
*/
pub fn decompile(bytes: &[u8]) -> Result<Vec<Chunk>, ScriptErr> {
    let mut chunks: Vec<Chunk> = vec![];
    let mut offset = 0;

    while offset < bytes.len() {
        let op = bytes[offset];
        let (header, len) = match op {
            0x01..=0x4b => (1, op as usize),
            0x4c => (2, read_len(bytes, offset, 1)?),
            0x4d => (3, read_len(bytes, offset, 2)?),
            0x4e => (5, read_len(bytes, offset, 4)?),
            _ => {
                chunks.push(Chunk::Op(Opcode::from(op)));
                offset += 1;
                continue;
            }
        };

        let available = bytes.len() - offset;
        let needed = len.saturating_add(header);
        if needed > available {
            return Err(ScriptErr::MalformedScript { offset, needed, available })
        }

        chunks.push(Chunk::Push(bytes[offset + header..offset + needed].to_vec()));
        offset += needed;
    }

    trace!("decompiled {} script bytes into {} chunks", bytes.len(), chunks.len());
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::opcodes::*;

    #[test]
    fn push_prefix_boundaries() {
        let cases: [(usize, &str); 7] = [
            (1, "01"),
            (75, "4b"),
            (76, "4c4c"),
            (255, "4cff"),
            (256, "4d0001"),
            (65535, "4dffff"),
            (65536, "4e00000100"),
        ];

        for (len, prefix) in cases.iter() {
            let script = compile(&[Chunk::Push(vec![0xab; *len])]).unwrap();
            let header = prefix.len() / 2;
            assert_eq!(hex::encode(&script.as_bytes()[..header]), *prefix);
            assert_eq!(script.len(), header + len);
            assert_eq!(decompile(script.as_bytes()).unwrap(), vec![Chunk::Push(vec![0xab; *len])]);
        }
    }

    #[test]
    fn empty_push_is_op_0() {
        let script = compile(&[Chunk::Push(vec![])]).unwrap();
        assert_eq!(script.as_bytes(), &[0x00]);
        assert_eq!(decompile(script.as_bytes()).unwrap(), vec![Chunk::Op(OP_0)]);
    }

    #[test]
    fn p2pkh_layout() {
        let hash = hex::decode("0b9492c088247d60b4150ed1d10d01c1c1029a1c").unwrap();
        let chunks = vec![
            Chunk::Op(OP_DUP),
            Chunk::Op(OP_HASH160),
            Chunk::Push(hash),
            Chunk::Op(OP_EQUALVERIFY),
            Chunk::Op(OP_CHECKSIG)
        ];
        let script = compile(&chunks).unwrap();
        assert_eq!(hex::encode(script.as_bytes()), "76a9140b9492c088247d60b4150ed1d10d01c1c1029a1c88ac");
        assert_eq!(decompile(script.as_bytes()).unwrap(), chunks);
    }

    #[test]
    fn non_push_bytes_are_opcodes() {
        let chunks = decompile(&[0x00, 0x4f, 0x51, 0xb9, 0xd1, 0xff]).unwrap();
        assert_eq!(chunks, vec![
            Chunk::Op(OP_0),
            Chunk::Op(OP_1NEGATE),
            Chunk::Op(OP_1),
            Chunk::Op(OP_REQUIRE_COINSTAKE),
            Chunk::Op(OP_CHECKCOLDSTAKEVERIFY_LOF),
            Chunk::Op(OP_INVALIDOPCODE)
        ]);
    }

    #[test]
    fn overruns_are_malformed() {
        //Direct push claims 20 bytes, 3 follow
        assert_eq!(
            decompile(&[0x76, 0x14, 0x01, 0x02, 0x03]),
            Err(ScriptErr::MalformedScript { offset: 1, needed: 21, available: 4 })
        );
        //Length field itself is cut off
        assert_eq!(
            decompile(&[0x4d, 0x01]),
            Err(ScriptErr::MalformedScript { offset: 0, needed: 3, available: 2 })
        );
        assert_eq!(
            decompile(&[0x4c]),
            Err(ScriptErr::MalformedScript { offset: 0, needed: 2, available: 1 })
        );
        //PUSHDATA4 length larger than the buffer
        assert_eq!(
            decompile(&[0x4e, 0xff, 0xff, 0xff, 0x7f, 0x00]),
            Err(ScriptErr::MalformedScript { offset: 0, needed: 5 + 0x7fffffff, available: 6 })
        );
    }

    #[test]
    fn non_minimal_pushes_decode() {
        //PUSHDATA1 used for a 3 byte push
        let chunks = decompile(&[0x4c, 0x03, 0x01, 0x02, 0x03]).unwrap();
        assert_eq!(chunks, vec![Chunk::Push(vec![1, 2, 3])]);
        assert_eq!(compile(&chunks).unwrap().as_bytes(), &[0x03, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn standard_push_limit() {
        assert!(Chunk::Push(vec![0; 520]).is_standard_push());
        assert!(!Chunk::Push(vec![0; 521]).is_standard_push());
        assert!(Chunk::Op(OP_RETURN).is_standard_push());
    }
}
