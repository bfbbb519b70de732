//! Disasm80 Decoder
//!
//! Decodes raw Intel 8080 machine code into an instruction listing.

pub mod opcodes;
pub mod parser;
pub mod listing;

pub use opcodes::{lookup, OpcodeEntry, OPCODE_TABLE};
pub use parser::{decode_at, parse_instructions, Instruction, Instructions, Operand};
pub use listing::{render_line, render_listing, write_listing, ListingSummary};
