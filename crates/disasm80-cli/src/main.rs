/*!
 * disasm80
 *
 * Desmontador de código de máquina Intel 8080
 */

mod args;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use disasm80_core::{load_binary, DisplayConfig};
use disasm80_decoder::write_listing;
use tracing::debug;

use crate::args::Args;

fn run(args: Args) -> anyhow::Result<()> {
    let base = match &args.config {
        Some(path) => DisplayConfig::from_json_file(path)
            .with_context(|| format!("falha ao ler configuração {}", path.display()))?,
        None => DisplayConfig::default(),
    };
    let config = args.apply(base);
    debug!(?config, file = %args.file.display(), "configuração efetiva");

    let code = load_binary(&args.file).context("falha ao carregar o binário")?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    write_listing(&mut out, &code, &config).context("falha ao escrever a listagem")?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    let args = match Args::parse_lenient(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // --help e --version também chegam aqui
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
