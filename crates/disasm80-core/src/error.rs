use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Erros comuns da biblioteca Disasm80
#[derive(Error, Debug)]
pub enum Error {
    /// Arquivo de entrada não pôde ser aberto ou lido
    #[error("não foi possível abrir {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Arquivo de entrada com 0 bytes
    #[error("arquivo de entrada vazio: {}", .0.display())]
    EmptyInput(PathBuf),

    /// Falha ao escrever a listagem
    #[error("erro de E/S: {0}")]
    Io(#[from] io::Error),

    /// Arquivo de configuração inválido
    #[error("configuração inválida: {0}")]
    Config(String),
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
