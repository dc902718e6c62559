//! Macros that fill in the calling function's name.

/// [`CallSite`](crate::CallSite) for the enclosing function.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!())
    };
}

/// Logger named after the enclosing function.
#[macro_export]
macro_rules! default_logger {
    () => {
        $crate::get_default_logger($crate::function_name!())
    };
}

/// Logger named `Class.function` or `module.Class.function`.
///
/// ```
/// fn run() -> String {
///     ctxlog::class_logger!("TestClass", "TestModule").name().to_string()
/// }
/// assert_eq!(run(), "TestModule.TestClass.run");
/// ```
#[macro_export]
macro_rules! class_logger {
    ($class:expr $(,)?) => {
        $crate::get_class_logger($class, None, $crate::function_name!())
    };
    ($class:expr, $module:expr $(,)?) => {
        $crate::get_class_logger($class, Some($module), $crate::function_name!())
    };
}

/// Structured log at an explicit level from the enclosing function.
///
/// `json_log!(level, payload)` or `json_log!(level, payload, message)`.
/// Evaluates to `LogResult<()>`.
#[macro_export]
macro_rules! json_log {
    ($level:expr, $payload:expr $(,)?) => {
        $crate::log_structured($level, &$payload, $crate::call_site!(), None)
    };
    ($level:expr, $payload:expr, $message:expr $(,)?) => {
        $crate::log_structured($level, &$payload, $crate::call_site!(), Some($message))
    };
}

#[macro_export]
macro_rules! json_debug {
    ($($arg:tt)+) => {
        $crate::json_log!($crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! json_info {
    ($($arg:tt)+) => {
        $crate::json_log!($crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! json_warning {
    ($($arg:tt)+) => {
        $crate::json_log!($crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! json_error {
    ($($arg:tt)+) => {
        $crate::json_log!($crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! json_critical {
    ($($arg:tt)+) => {
        $crate::json_log!($crate::Level::Critical, $($arg)+)
    };
}
