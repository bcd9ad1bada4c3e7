/*

    Script builder module.

*/

use super::{
    chunk::{compile, Chunk},
    opcodes::Opcode,
    Script,
    ScriptErr
};

#[derive(Debug, Clone, Default)]
pub struct Builder {
    chunks: Vec<Chunk>
}

impl Builder {
    /// Return a new instance of self
    pub fn new() -> Self  {
        Self { chunks: Vec::new() }
    }

    /// Push an opcode into self
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.chunks.push(Chunk::Op(opcode));
        self
    }

    //Push a slice as data, the length prefix is added on compilation
    pub fn push_slice(mut self, slice: &[u8]) -> Self {
        self.chunks.push(Chunk::Push(slice.to_vec()));
        self
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Compile self into a script
    pub fn into_script(self) -> Result<Script, ScriptErr> {
        compile(&self.chunks)
    }
}
