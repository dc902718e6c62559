//! Structured logging: a text message followed by the payload as canonical
//! JSON, both at the same level and under the call site's logger name.

use ctxlog_core::{CallSite, Level, LogResult};
use serde::Serialize;

use crate::config::LoggerConfig;
use crate::json;
use crate::registry::LoggerRegistry;

/// Log `message` (if any), then `payload` rendered as JSON, at `level`.
///
/// With a message this emits two records; with `message = None` only the
/// JSON record is emitted. The payload is rendered first, so a
/// `NotSerializable` payload emits nothing.
pub fn log_structured<T>(
    level: Level,
    payload: &T,
    site: CallSite<'_>,
    message: Option<&str>,
) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    log_structured_with(
        LoggerRegistry::global(),
        LoggerConfig::process_default(),
        level,
        payload,
        site,
        message,
    )
}

/// [`log_structured`] against an explicit registry and config.
pub fn log_structured_with<T>(
    registry: &LoggerRegistry,
    config: &LoggerConfig,
    level: Level,
    payload: &T,
    site: CallSite<'_>,
    message: Option<&str>,
) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    let rendered = json::render(payload)?;
    let logger = registry.get_or_create(site.logger_name(), config);

    if let Some(message) = message {
        logger.log(level, message);
    }
    logger.log(level, rendered);
    Ok(())
}

pub fn log_debug<T>(payload: &T, site: CallSite<'_>, message: Option<&str>) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    log_structured(Level::Debug, payload, site, message)
}

pub fn log_info<T>(payload: &T, site: CallSite<'_>, message: Option<&str>) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    log_structured(Level::Info, payload, site, message)
}

pub fn log_warning<T>(payload: &T, site: CallSite<'_>, message: Option<&str>) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    log_structured(Level::Warning, payload, site, message)
}

pub fn log_error<T>(payload: &T, site: CallSite<'_>, message: Option<&str>) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    log_structured(Level::Error, payload, site, message)
}

pub fn log_critical<T>(payload: &T, site: CallSite<'_>, message: Option<&str>) -> LogResult<()>
where
    T: Serialize + ?Sized,
{
    log_structured(Level::Critical, payload, site, message)
}
