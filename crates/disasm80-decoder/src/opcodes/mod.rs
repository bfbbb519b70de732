/// Mnemonic used for byte values with no defined 8080 operation.
pub const ILLEGAL: &str = "illegal";

/// Static description of one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub byte_value: u8,
    /// Canonical lower-case mnemonic, register operands included (`"mov a,m"`).
    pub mnemonic: &'static str,
    /// Total encoded length in bytes, opcode included. Always 1, 2 or 3.
    pub length: u8,
}

impl OpcodeEntry {
    /// Number of operand bytes that follow the opcode.
    pub fn operand_width(&self) -> usize {
        self.length as usize - 1
    }

    pub fn is_illegal(&self) -> bool {
        self.mnemonic == ILLEGAL
    }
}

/// Returns the table entry for `byte`. Total over all 256 values.
#[inline]
pub fn lookup(byte: u8) -> &'static OpcodeEntry {
    &OPCODE_TABLE[byte as usize]
}

/// The 8080 instruction set indexed by opcode byte.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = build_table();

const fn build_table() -> [OpcodeEntry; 256] {
    let mut table = [OpcodeEntry { byte_value: 0, mnemonic: ILLEGAL, length: 1 }; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = OpcodeEntry {
            byte_value: i as u8,
            mnemonic: MNEMONICS[i],
            length: LENGTHS[i],
        };
        i += 1;
    }
    table
}

const MNEMONICS: [&str; 256] = [
    // 0x00
    "nop", "lxi b", "stax b", "inx b", "inr b", "dcr b", "mvi b", "rlc",
    ILLEGAL, "dad b", "ldax b", "dcx b", "inr c", "dcr c", "mvi c", "rrc",
    // 0x10
    ILLEGAL, "lxi d", "stax d", "inx d", "inr d", "dcr d", "mvi d", "ral",
    ILLEGAL, "dad d", "ldax d", "dcx d", "inr e", "dcr e", "mvi e", "rar",
    // 0x20
    ILLEGAL, "lxi h", "shld", "inx h", "inr h", "dcr h", "mvi h", "daa",
    ILLEGAL, "dad h", "lhld", "dcx h", "inr l", "dcr l", "mvi l", "cma",
    // 0x30
    ILLEGAL, "lxi sp", "sta", "inx sp", "inr m", "dcr m", "mvi m", "stc",
    ILLEGAL, "dad sp", "lda", "dcx sp", "inr a", "dcr a", "mvi a", "cmc",
    // 0x40
    "mov b,b", "mov b,c", "mov b,d", "mov b,e", "mov b,h", "mov b,l", "mov b,m", "mov b,a",
    "mov c,b", "mov c,c", "mov c,d", "mov c,e", "mov c,h", "mov c,l", "mov c,m", "mov c,a",
    // 0x50
    "mov d,b", "mov d,c", "mov d,d", "mov d,e", "mov d,h", "mov d,l", "mov d,m", "mov d,a",
    "mov e,b", "mov e,c", "mov e,d", "mov e,e", "mov e,h", "mov e,l", "mov e,m", "mov e,a",
    // 0x60
    "mov h,b", "mov h,c", "mov h,d", "mov h,e", "mov h,h", "mov h,l", "mov h,m", "mov h,a",
    "mov l,b", "mov l,c", "mov l,d", "mov l,e", "mov l,h", "mov l,l", "mov l,m", "mov l,a",
    // 0x70 (0x76 sits where "mov m,m" would be)
    "mov m,b", "mov m,c", "mov m,d", "mov m,e", "mov m,h", "mov m,l", "hlt", "mov m,a",
    "mov a,b", "mov a,c", "mov a,d", "mov a,e", "mov a,h", "mov a,l", "mov a,m", "mov a,a",
    // 0x80
    "add b", "add c", "add d", "add e", "add h", "add l", "add m", "add a",
    "adc b", "adc c", "adc d", "adc e", "adc h", "adc l", "adc m", "adc a",
    // 0x90
    "sub b", "sub c", "sub d", "sub e", "sub h", "sub l", "sub m", "sub a",
    "sbb b", "sbb c", "sbb d", "sbb e", "sbb h", "sbb l", "sbb m", "sbb a",
    // 0xa0
    "ana b", "ana c", "ana d", "ana e", "ana h", "ana l", "ana m", "ana a",
    "xra b", "xra c", "xra d", "xra e", "xra h", "xra l", "xra m", "xra a",
    // 0xb0
    "ora b", "ora c", "ora d", "ora e", "ora h", "ora l", "ora m", "ora a",
    "cmp b", "cmp c", "cmp d", "cmp e", "cmp h", "cmp l", "cmp m", "cmp a",
    // 0xc0
    "rnz", "pop b", "jnz", "jmp", "cnz", "push b", "adi", "rst 0",
    "rz", "ret", "jz", ILLEGAL, "cz", "call", "aci", "rst 1",
    // 0xd0
    "rnc", "pop d", "jnc", "out", "cnc", "push d", "sui", "rst 2",
    "rc", ILLEGAL, "jc", "in", "cc", ILLEGAL, "sbi", "rst 3",
    // 0xe0
    "rpo", "pop h", "jpo", "xthl", "cpo", "push h", "ani", "rst 4",
    "rpe", "pchl", "jpe", "xchg", "cpe", ILLEGAL, "xri", "rst 5",
    // 0xf0
    "rp", "pop psw", "jp", "di", "cp", "push psw", "ori", "rst 6",
    "rm", "sphl", "jm", "ei", "cm", ILLEGAL, "cpi", "rst 7",
];

const LENGTHS: [u8; 256] = [
    //  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f
    1, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 0x00
    1, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 0x10
    1, 3, 3, 1, 1, 1, 2, 1, 1, 1, 3, 1, 1, 1, 2, 1, // 0x20
    1, 3, 3, 1, 1, 1, 2, 1, 1, 1, 3, 1, 1, 1, 2, 1, // 0x30
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0x40
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0x50
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0x60
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0x70
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0x80
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0x90
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0xa0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0xb0
    1, 1, 3, 3, 3, 1, 2, 1, 1, 1, 3, 1, 3, 3, 2, 1, // 0xc0
    1, 1, 3, 2, 3, 1, 2, 1, 1, 1, 3, 2, 3, 1, 2, 1, // 0xd0
    1, 1, 3, 1, 3, 1, 2, 1, 1, 1, 3, 1, 3, 1, 2, 1, // 0xe0
    1, 1, 3, 1, 3, 1, 2, 1, 1, 1, 3, 1, 3, 1, 2, 1, // 0xf0
];
