//! `ctxlog-core` — primitives shared by the logging facade.
//!
//! Nothing in here touches a stream or a registry: severity levels, logger
//! names derived from call sites, and the error model.

pub mod error;
pub mod level;
pub mod name;

pub use error::{LogError, LogResult};
pub use level::Level;
pub use name::{CallSite, CallStack, LoggerName, resolve_name};
