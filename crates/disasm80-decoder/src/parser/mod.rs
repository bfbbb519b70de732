use std::fmt;

use serde::Serialize;

use crate::opcodes::{lookup, OpcodeEntry};

/// Operand decoded from the bytes following an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operand {
    None,
    /// Immediate byte or port number.
    Byte(u8),
    /// Little-endian address or immediate word.
    Word(u16),
    /// Operand cut short by the end of the buffer. `width` is the number of
    /// operand bytes the opcode needs, `lo` the low byte if it was present.
    Truncated { width: u8, lo: Option<u8> },
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::None => Ok(()),
            Operand::Byte(b) => write!(f, "{:02X}", b),
            Operand::Word(w) => write!(f, "{:04X}", w),
            Operand::Truncated { width: 1, .. } => write!(f, "??"),
            Operand::Truncated { lo: Some(lo), .. } => write!(f, "??{:02X}", lo),
            Operand::Truncated { .. } => write!(f, "????"),
        }
    }
}

/// Decoded instruction from a code buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Offset of the opcode byte in the buffer.
    pub pos: usize,
    pub opcode: u8,
    /// Operand bytes actually present (0..=2).
    pub data: Vec<u8>,
    pub mnemonic: &'static str,
    /// Encoded length declared by the opcode table.
    pub length: u8,
}

impl Instruction {
    fn from_entry(entry: &'static OpcodeEntry, pos: usize, data: &[u8]) -> Self {
        Self {
            pos,
            opcode: entry.byte_value,
            data: data.to_vec(),
            mnemonic: entry.mnemonic,
            length: entry.length,
        }
    }

    /// Bytes consumed from the buffer. Less than `length` only when truncated.
    pub fn consumed(&self) -> usize {
        1 + self.data.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.consumed() < self.length as usize
    }

    /// Opcode followed by the operand bytes that were present.
    pub fn raw_bytes(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.consumed());
        raw.push(self.opcode);
        raw.extend_from_slice(&self.data);
        raw
    }

    pub fn operand(&self) -> Operand {
        match (self.length, self.data.as_slice()) {
            (1, _) => Operand::None,
            (2, [imm]) => Operand::Byte(*imm),
            (3, [lo, hi]) => Operand::Word(u16::from_le_bytes([*lo, *hi])),
            (len, data) => Operand::Truncated {
                width: len - 1,
                lo: data.first().copied(),
            },
        }
    }
}

/// Lazy linear walk over a code buffer, one [`Instruction`] per step.
///
/// Every byte value decodes, so the walk never stalls. The cursor advances by
/// the instruction length, clamped to the bytes left in the buffer.
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    code: &'a [u8],
    pc: usize,
}

impl<'a> Instructions<'a> {
    pub fn new(code: &'a [u8]) -> Self {
        Self { code, pc: 0 }
    }

    /// Current cursor offset.
    pub fn pc(&self) -> usize {
        self.pc
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        let opcode = *self.code.get(self.pc)?;
        let entry = lookup(opcode);
        let pos = self.pc;
        let end = core::cmp::min(pos + entry.length as usize, self.code.len());
        let ins = Instruction::from_entry(entry, pos, &self.code[pos + 1..end]);
        self.pc = end;
        Some(ins)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.code.len().saturating_sub(self.pc);
        ((left + 2) / 3, Some(left))
    }
}

impl core::iter::FusedIterator for Instructions<'_> {}

/// Decodes a single instruction starting at `pos`, or `None` past the end.
pub fn decode_at(code: &[u8], pos: usize) -> Option<Instruction> {
    let mut it = Instructions { code, pc: pos };
    it.next()
}

/// Decodes raw 8080 code into a list of instructions.
pub fn parse_instructions(code: &[u8]) -> Vec<Instruction> {
    Instructions::new(code).collect()
}
