use tracing_subscriber::EnvFilter;

/// Inicializa o tracing em stderr; stdout fica reservado para a listagem.
///
/// O nível vem de `RUST_LOG` (padrão `warn`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_level(true)
        .with_target(false)
        .without_time()
        .init();
}
