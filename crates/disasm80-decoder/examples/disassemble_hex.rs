use std::env;

use disasm80_core::DisplayConfig;
use disasm80_decoder::write_listing;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <CODE_HEX>", args[0]);
        std::process::exit(1);
    }
    let code = hex::decode(args[1].trim_start_matches("0x"))?;

    let summary = write_listing(&mut std::io::stdout().lock(), &code, &DisplayConfig::default())?;
    info!("{} instruções, {} bytes", summary.instructions, summary.bytes);
    if summary.truncated {
        info!("última instrução truncada");
    }
    Ok(())
}
