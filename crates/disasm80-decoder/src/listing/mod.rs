use std::io::Write;

use disasm80_core::{utils::format_address, DisplayConfig, Result};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::parser::{Instruction, Instructions, Operand};

/// Totals for one listing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    pub instructions: usize,
    pub bytes: usize,
    /// The last instruction ran past the end of the buffer.
    pub truncated: bool,
}

/// Renders one instruction as a listing line, without the trailing newline.
///
/// Hex is always upper case; `config.case` only affects the mnemonic.
pub fn render_line(ins: &Instruction, config: &DisplayConfig) -> String {
    let mnemonic = config.case.apply(ins.mnemonic);
    if config.mnemonics_only {
        return mnemonic.into_owned();
    }

    let raw = ins.raw_bytes();
    let bytes = raw
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<String>>()
        .join(" ");
    // three hex bytes already reach the next tab stop
    let sep = if raw.len() == 3 { "\t" } else { "\t\t" };

    let mut line = format!(
        "{}: {}{}{}",
        format_address(ins.pos, config.address_base),
        bytes,
        sep,
        mnemonic
    );
    let operand = ins.operand();
    if operand != Operand::None {
        line.push(' ');
        line.push_str(&operand.to_string());
    }
    line
}

/// Decodes `code` and renders every instruction.
pub fn render_listing(code: &[u8], config: &DisplayConfig) -> Vec<String> {
    Instructions::new(code)
        .map(|ins| render_line(&ins, config))
        .collect()
}

/// Decodes `code` and writes one line per instruction to `out`.
///
/// Decoding itself cannot fail; the only error is a write failure on `out`.
pub fn write_listing<W: Write>(
    out: &mut W,
    code: &[u8],
    config: &DisplayConfig,
) -> Result<ListingSummary> {
    debug!(
        bytes = code.len(),
        base = %config.address_base,
        case = %config.case,
        mnemonics_only = config.mnemonics_only,
        "iniciando desmontagem"
    );

    let mut summary = ListingSummary::default();
    for ins in Instructions::new(code) {
        trace!(pos = ins.pos, opcode = ins.opcode, mnemonic = ins.mnemonic, "instrução");
        if ins.is_truncated() {
            warn!(
                pos = ins.pos,
                expected = ins.length,
                available = ins.consumed(),
                "instrução final truncada pelo fim do buffer"
            );
            summary.truncated = true;
        }
        writeln!(out, "{}", render_line(&ins, config))?;
        summary.instructions += 1;
        summary.bytes += ins.consumed();
    }
    out.flush()?;

    debug!(
        instructions = summary.instructions,
        bytes = summary.bytes,
        "desmontagem concluída"
    );
    Ok(summary)
}
