/*!
 * Disasm80 Core
 * 
 * Tipos e utilitários compartilhados para a workspace Disasm80
 */

pub mod config;
pub mod error;
pub mod utils;

// Re-exportações públicas
pub use config::*;
pub use error::{Error, Result};
pub use utils::load_binary;
