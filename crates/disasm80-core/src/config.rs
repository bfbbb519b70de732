use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base numérica usada no prefixo de endereço de cada linha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressBase {
    Hex,
    Decimal,
}

impl Default for AddressBase {
    fn default() -> Self {
        Self::Hex
    }
}

impl fmt::Display for AddressBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressBase::Hex => write!(f, "hex"),
            AddressBase::Decimal => write!(f, "decimal"),
        }
    }
}

/// Caixa das letras dos mnemônicos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    Upper,
    Lower,
}

impl Default for LetterCase {
    fn default() -> Self {
        Self::Lower
    }
}

impl fmt::Display for LetterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterCase::Upper => write!(f, "upper"),
            LetterCase::Lower => write!(f, "lower"),
        }
    }
}

impl LetterCase {
    /// Aplica a caixa a um texto canônico (minúsculo)
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            LetterCase::Lower => Cow::Borrowed(text),
            LetterCase::Upper => Cow::Owned(text.to_ascii_uppercase()),
        }
    }
}

/// Configuração de exibição da listagem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Base do prefixo de endereço
    pub address_base: AddressBase,
    /// Caixa dos mnemônicos
    pub case: LetterCase,
    /// Imprime apenas os mnemônicos, sem endereço, bytes ou operandos
    pub mnemonics_only: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address_base: AddressBase::Hex,
            case: LetterCase::Lower,
            mnemonics_only: false,
        }
    }
}

impl DisplayConfig {
    /// Lê a configuração de um texto JSON; campos ausentes usam o padrão
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Lê a configuração de um arquivo JSON
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
