//! Walks through every constructor and the structured helpers.

use anyhow::Context;
use chrono::Utc;
use ctxlog::Logger;
use serde::Serialize;
use serde_json::json;

fn exercise(logger: &Logger) {
    logger.debug("DEBUG TEST");
    logger.info("INFO TEST");
    logger.warning("WARNING TEST");
    logger.error("ERROR TEST");
    logger.critical("CRITICAL TEST");
}

fn get_logger_sample() {
    exercise(&ctxlog::get_logger("test"));
}

fn get_default_logger_sample() {
    exercise(&ctxlog::default_logger!());
}

fn get_class_default_logger_sample() {
    exercise(&ctxlog::class_logger!("TestClass"));
}

#[derive(Serialize)]
struct Heartbeat {
    service: &'static str,
    healthy: bool,
    checked_at: chrono::DateTime<Utc>,
}

fn json_logger_sample() -> ctxlog::LogResult<()> {
    let json_items = json!({"test": "test"});

    ctxlog::json_debug!(json_items, "DEBUG TEST")?;
    ctxlog::json_info!(json_items, "INFO TEST")?;
    ctxlog::json_warning!(json_items, "WARNING TEST")?;
    ctxlog::json_error!(json_items, "ERROR TEST")?;
    ctxlog::json_critical!(json_items, "CRITICAL TEST")?;

    let heartbeat = Heartbeat {
        service: "サンプル",
        healthy: true,
        checked_at: Utc::now(),
    };
    let site = ctxlog::call_site!().with_class(Some("Monitor"));
    ctxlog::log_info(&heartbeat, site, Some("heartbeat"))
}

fn main() -> anyhow::Result<()> {
    ctxlog_observability::init();

    let logger = ctxlog::default_logger!();

    logger.info("Try using get_logger");
    get_logger_sample();

    logger.info("Try using get_default_logger");
    get_default_logger_sample();

    logger.info("Try using get_class_default_logger");
    get_class_default_logger_sample();

    logger.info("Try using json_logger");
    json_logger_sample().context("structured logging sample failed")?;

    tracing::debug!("sample finished");
    Ok(())
}
