//! Logs through the root `tracing` subscriber.

fn main() {
    ctxlog_observability::init();

    tracing::info!("Hello! こんにちは! 123");
    tracing::info!("これはhello.rsでの出力の例です");

    // Printed by the logger's own handler and again by the root subscriber.
    let config = ctxlog::LoggerConfig::from_env().with_propagate(true);
    ctxlog::get_logger_with("hello", &config).info("propagated to the root");
}
