//! Logger names derived from call-site context.
//!
//! A name is `module.class.method` with absent segments left out. The method
//! segment comes from an explicit [`CallSite`] (usually filled in by
//! [`function_name!`](crate::function_name)) or, for depth-based lookups,
//! from a caller-maintained [`CallStack`].

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};

/// Dot-delimited logger name, e.g. `TestModule.TestClass.run`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoggerName(String);

impl LoggerName {
    /// Take a full name verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Join optional module/class prefixes with a method name.
    ///
    /// Empty or absent segments are skipped, so the result never has a
    /// leading, trailing or doubled dot.
    pub fn join(module: Option<&str>, class: Option<&str>, method: &str) -> Self {
        let joined = [module, class, Some(method)]
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Name with the last segment removed; `None` for a single-segment name.
    pub fn parent(&self) -> Option<LoggerName> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| LoggerName(parent.to_string()))
    }
}

impl fmt::Display for LoggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LoggerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoggerName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LoggerName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Where a log call comes from: optional module and class, plus the method.
///
/// Callers pass this explicitly instead of having the logger inspect the
/// runtime call stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub module: Option<&'a str>,
    pub class: Option<&'a str>,
    pub method: &'a str,
}

impl<'a> CallSite<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            module: None,
            class: None,
            method,
        }
    }

    pub fn with_module(mut self, module: Option<&'a str>) -> Self {
        self.module = module;
        self
    }

    pub fn with_class(mut self, class: Option<&'a str>) -> Self {
        self.class = class;
        self
    }

    pub fn logger_name(&self) -> LoggerName {
        LoggerName::join(self.module, self.class, self.method)
    }
}

/// Explicit stack of function names, innermost frame last.
///
/// This stands in for runtime frame introspection: code that wants
/// depth-based name resolution records the frames it enters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<String>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, function: impl Into<String>) {
        self.frames.push(function.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.frames.pop()
    }

    /// Copy of this stack with one more frame on top.
    pub fn entered(&self, function: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push(function);
        next
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Function name `depth` frames back; depth 1 is the innermost frame.
    pub fn frame(&self, depth: usize) -> LogResult<&str> {
        if depth < 1 {
            return Err(LogError::invalid_argument(format!(
                "depth is not a natural number: {depth}"
            )));
        }
        let available = self.frames.len();
        if depth > available {
            return Err(LogError::StackExhausted { depth, available });
        }
        Ok(&self.frames[available - depth])
    }
}

/// Resolve a logger name from the frame `depth` steps back in `stack`.
///
/// Fails with [`LogError::InvalidArgument`] when `depth` is 0 and with
/// [`LogError::StackExhausted`] when the stack holds fewer than `depth` frames.
pub fn resolve_name(
    stack: &CallStack,
    depth: usize,
    module: Option<&str>,
    class: Option<&str>,
) -> LogResult<LoggerName> {
    let method = stack.frame(depth)?;
    Ok(LoggerName::join(module, class, method))
}

/// Extract the bare function name from a `type_name` path.
///
/// Strips the marker suffix, any closure segments (async bodies, closures)
/// and the leading path, including `<T as Trait>::` qualifiers.
#[doc(hidden)]
pub fn method_from_type_path(path: &str) -> &str {
    let mut path = path.strip_suffix("::__ctxlog_marker").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the enclosing function, resolved at compile time.
///
/// ```
/// fn run() -> &'static str {
///     ctxlog_core::function_name!()
/// }
/// assert_eq!(run(), "run");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __ctxlog_marker() {}
        fn __ctxlog_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::name::method_from_type_path(__ctxlog_type_name_of(__ctxlog_marker))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_get_method_name() -> CallStack {
        CallStack::from_frames(["main", crate::function_name!()])
    }

    #[test]
    fn joins_module_class_and_method_in_order() {
        let cases = [
            (None, None, "test_get_method_name"),
            (None, Some("TestClass"), "TestClass.test_get_method_name"),
            (Some("TestModule"), None, "TestModule.test_get_method_name"),
            (
                Some("TestModule"),
                Some("TestClass"),
                "TestModule.TestClass.test_get_method_name",
            ),
        ];

        let stack = test_get_method_name();
        for (module, class, expected) in cases {
            let name = resolve_name(&stack, 1, module, class).unwrap();
            assert_eq!(name.as_str(), expected);
        }
    }

    #[test]
    fn depth_walks_outward() {
        let stack = CallStack::from_frames(["main", "outer", "inner"]);
        assert_eq!(stack.frame(1).unwrap(), "inner");
        assert_eq!(stack.frame(3).unwrap(), "main");
        assert_eq!(
            resolve_name(&stack, 2, None, Some("Worker")).unwrap().as_str(),
            "Worker.outer"
        );
    }

    #[test]
    fn zero_depth_is_invalid_argument() {
        let stack = CallStack::from_frames(["main"]);
        assert!(matches!(
            resolve_name(&stack, 0, None, None),
            Err(LogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn depth_past_outermost_frame_is_stack_exhausted() {
        let stack = CallStack::from_frames(["main", "run"]);
        let err = resolve_name(&stack, 10_000, None, None).unwrap_err();
        assert_eq!(
            err,
            LogError::StackExhausted {
                depth: 10_000,
                available: 2
            }
        );
        assert!(CallStack::new().frame(1).is_err());
    }

    #[test]
    fn entered_leaves_original_untouched() {
        let base = CallStack::from_frames(["main"]);
        let mut inner = base.entered("run");
        assert_eq!(base.len(), 1);
        assert_eq!(inner.frame(1).unwrap(), "run");

        assert_eq!(inner.pop().as_deref(), Some("run"));
        assert_eq!(inner, base);
        assert_eq!(inner.pop().as_deref(), Some("main"));
        assert!(inner.is_empty());
        assert_eq!(inner.pop(), None);
    }

    #[test]
    fn empty_prefixes_are_omitted() {
        let name = LoggerName::join(Some(""), Some("TestClass"), "run");
        assert_eq!(name.as_str(), "TestClass.run");
    }

    #[test]
    fn call_site_uses_same_join() {
        let site = CallSite::new("run").with_class(Some("TestClass"));
        assert_eq!(site.logger_name().as_str(), "TestClass.run");
        let site = site.with_module(Some("jobs"));
        assert_eq!(site.logger_name().as_str(), "jobs.TestClass.run");
    }

    #[test]
    fn parent_drops_last_segment() {
        let name = LoggerName::new("a.b.c");
        let parent = name.parent().unwrap();
        assert_eq!(parent.as_str(), "a.b");
        assert_eq!(parent.parent().unwrap().as_str(), "a");
        assert_eq!(parent.parent().unwrap().parent(), None);
    }

    struct TestClass;

    impl TestClass {
        fn run(&self) -> &'static str {
            crate::function_name!()
        }
    }

    trait Describe {
        fn describe(&self) -> &'static str;
    }

    impl Describe for TestClass {
        fn describe(&self) -> &'static str {
            crate::function_name!()
        }
    }

    #[test]
    fn function_name_captures_enclosing_function() {
        assert_eq!(crate::function_name!(), "function_name_captures_enclosing_function");
        assert_eq!(TestClass.run(), "run");
        assert_eq!(TestClass.describe(), "describe");

        let from_closure = || crate::function_name!();
        assert_eq!(from_closure(), "function_name_captures_enclosing_function");
    }

    #[test]
    fn method_from_type_path_strips_qualifiers() {
        assert_eq!(method_from_type_path("app::jobs::run::__ctxlog_marker"), "run");
        assert_eq!(
            method_from_type_path("<app::A as app::B>::go::{{closure}}::__ctxlog_marker"),
            "go"
        );
        assert_eq!(method_from_type_path("bare"), "bare");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment() -> impl Strategy<Value = Option<String>> {
            prop::option::of("[A-Za-z_][A-Za-z0-9_]{0,15}")
        }

        proptest! {
            /// Property: segments join in fixed order with no stray dots.
            #[test]
            fn joined_names_have_no_stray_dots(
                module in segment(),
                class in segment(),
                method in "[A-Za-z_][A-Za-z0-9_]{0,15}",
            ) {
                let name = LoggerName::join(module.as_deref(), class.as_deref(), &method);
                let raw = name.as_str();

                prop_assert!(!raw.starts_with('.'));
                prop_assert!(!raw.ends_with('.'));
                prop_assert!(!raw.contains(".."));

                let expected: Vec<&str> = [module.as_deref(), class.as_deref(), Some(method.as_str())]
                    .into_iter()
                    .flatten()
                    .collect();
                prop_assert_eq!(name.segments().collect::<Vec<_>>(), expected);
            }

            /// Property: resolution from depth 1 equals the call-site join.
            #[test]
            fn depth_one_matches_call_site(
                module in segment(),
                class in segment(),
                method in "[a-z_]{1,12}",
            ) {
                let stack = CallStack::from_frames(["main".to_string(), method.clone()]);
                let resolved = resolve_name(&stack, 1, module.as_deref(), class.as_deref()).unwrap();
                let site = CallSite::new(&method)
                    .with_module(module.as_deref())
                    .with_class(class.as_deref());
                prop_assert_eq!(resolved, site.logger_name());
            }
        }
    }
}
