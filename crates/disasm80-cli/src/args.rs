use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use disasm80_core::{AddressBase, DisplayConfig, LetterCase};
use tracing::warn;

/// Flags curtos reconhecidos (sem o '-')
const SHORT_FLAGS: &[char] = &['u', 'l', 'h', 'd', 'm'];

#[derive(Parser, Debug)]
#[command(name = "disasm80", version)]
#[command(about = "Intel 8080 Disassembler", long_about = None)]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct Args {
    /// Mnemônicos em maiúsculas
    #[arg(short = 'u', action = ArgAction::SetTrue, overrides_with = "lower")]
    pub upper: bool,

    /// Mnemônicos em minúsculas (padrão)
    #[arg(short = 'l', action = ArgAction::SetTrue, overrides_with = "upper")]
    pub lower: bool,

    /// Endereços em hexadecimal (padrão)
    #[arg(short = 'h', action = ArgAction::SetTrue, overrides_with = "decimal")]
    pub hex: bool,

    /// Endereços em decimal
    #[arg(short = 'd', action = ArgAction::SetTrue, overrides_with = "hex")]
    pub decimal: bool,

    /// Imprime apenas os mnemônicos
    #[arg(short = 'm', action = ArgAction::SetTrue)]
    pub mnemonics_only: bool,

    /// Arquivo JSON com a configuração de exibição
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mostra a ajuda
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Binário com código de máquina 8080
    pub file: PathBuf,
}

impl Args {
    /// Interpreta a linha de comando, descartando flags desconhecidos
    pub fn parse_lenient<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(raw))
    }

    /// Aplica os flags sobre a configuração base (arquivo ou padrão)
    pub fn apply(&self, mut config: DisplayConfig) -> DisplayConfig {
        if self.upper {
            config.case = LetterCase::Upper;
        } else if self.lower {
            config.case = LetterCase::Lower;
        }
        if self.decimal {
            config.address_base = AddressBase::Decimal;
        } else if self.hex {
            config.address_base = AddressBase::Hex;
        }
        if self.mnemonics_only {
            config.mnemonics_only = true;
        }
        config
    }
}

/// Normaliza os argumentos no estilo getopt antigo: só o primeiro
/// caractere após '-' conta, sem distinção de caixa. Flags curtos
/// desconhecidos são ignorados.
fn normalize_args<I, T>(raw: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut iter = raw.into_iter().map(Into::into);
    if let Some(bin) = iter.next() {
        out.push(bin);
    }
    for arg in iter {
        let Some(text) = arg.to_str().map(str::to_owned) else {
            out.push(arg);
            continue;
        };
        if text.starts_with("--") || !text.starts_with('-') || text == "-" {
            out.push(arg);
            continue;
        }
        match text.chars().nth(1).map(|c| c.to_ascii_lowercase()) {
            Some(c) if SHORT_FLAGS.contains(&c) => out.push(OsString::from(format!("-{}", c))),
            _ => warn!(flag = %text, "flag desconhecido ignorado"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_lenient(std::iter::once("disasm80").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["rom.bin"]);
        assert_eq!(args.file, PathBuf::from("rom.bin"));
        assert_eq!(args.apply(DisplayConfig::default()), DisplayConfig::default());
    }

    #[test]
    fn flags_are_case_insensitive_and_first_char_only() {
        let args = parse(&["rom.bin", "-U", "-decimal", "-M"]);
        let cfg = args.apply(DisplayConfig::default());
        assert_eq!(cfg.case, LetterCase::Upper);
        assert_eq!(cfg.address_base, AddressBase::Decimal);
        assert!(cfg.mnemonics_only);
    }

    #[test]
    fn last_flag_of_a_group_wins() {
        let cfg = parse(&["-u", "-l", "-d", "-h", "rom.bin"]).apply(DisplayConfig::default());
        assert_eq!(cfg.case, LetterCase::Lower);
        assert_eq!(cfg.address_base, AddressBase::Hex);

        let cfg = parse(&["-l", "-u", "-h", "-d", "rom.bin"]).apply(DisplayConfig::default());
        assert_eq!(cfg.case, LetterCase::Upper);
        assert_eq!(cfg.address_base, AddressBase::Decimal);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let args = parse(&["-x", "rom.bin", "-q"]);
        assert_eq!(args.file, PathBuf::from("rom.bin"));
        assert!(!args.upper && !args.decimal && !args.mnemonics_only);
    }

    #[test]
    fn flags_override_config_file_values() {
        let base = DisplayConfig {
            address_base: AddressBase::Decimal,
            case: LetterCase::Upper,
            mnemonics_only: false,
        };
        let cfg = parse(&["-l", "rom.bin"]).apply(base);
        assert_eq!(cfg.case, LetterCase::Lower);
        assert_eq!(cfg.address_base, AddressBase::Decimal);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Args::parse_lenient(["disasm80", "-u"]).is_err());
    }
}
