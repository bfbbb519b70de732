/*!
 * Disasm80 Utils
 *
 * Utilitários comuns usados em toda a workspace Disasm80
 */

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Carrega um binário 8080 inteiro para a memória
///
/// Falha se o arquivo não puder ser aberto ou lido, ou se tiver 0 bytes.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }
    debug!(path = %path.display(), size = bytes.len(), "binário carregado");
    Ok(bytes)
}

/// Formata um offset conforme a base configurada
pub fn format_address(offset: usize, base: crate::AddressBase) -> String {
    match base {
        crate::AddressBase::Hex => format!("{:04X}", offset),
        crate::AddressBase::Decimal => offset.to_string(),
    }
}
