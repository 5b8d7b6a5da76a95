// crates/sbml-pkg/src/log.rs

use crate::namespaces::{Host, Namespaces};
use alloc::format;
use alloc::string::String;

/// Trait for values that provide metadata for log lines.
pub trait LogMetadata {
    fn meta(&self) -> String;
}

/// Identifies the element a log line is about.
pub struct ElementContext {
    pub language: &'static str,
    pub element: &'static str,
    pub line: u32,
}

impl ElementContext {
    pub fn new(ns: &Namespaces, element: &'static str, line: u32) -> Self {
        let language = match (ns.host(), ns.package()) {
            (Host::Sbml, Some(package)) => package.name(),
            (host, _) => host.name(),
        };
        Self {
            language,
            element,
            line,
        }
    }
}

impl LogMetadata for ElementContext {
    fn meta(&self) -> String {
        format!(
            "lang={}, element={}, line={}",
            self.language, self.element, self.line
        )
    }
}

// =============================================
// Logging macros (namespaced under crate::log)
// =============================================

// The module name shadows the `log` crate inside this crate, hence `::log`.

// ===== sbml_info! =====
macro_rules! sbml_info {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::info!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::info!($fmt $(, $($arg)+)?);
    }};
}

// ===== sbml_error! =====
macro_rules! sbml_error {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::error!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::error!($fmt $(, $($arg)+)?);
    }};
}

// ===== sbml_warn! =====
macro_rules! sbml_warn {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::warn!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::warn!($fmt $(, $($arg)+)?);
    }};
}

// ===== sbml_debug! =====
macro_rules! sbml_debug {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::debug!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::debug!($fmt $(, $($arg)+)?);
    }};
}

// ===== sbml_trace! =====
macro_rules! sbml_trace {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::trace!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::trace!($fmt $(, $($arg)+)?);
    }};
}

// Re-export macros for use in other files
pub(crate) use sbml_debug;
pub(crate) use sbml_error;
pub(crate) use sbml_info;
pub(crate) use sbml_trace;
pub(crate) use sbml_warn;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::Package;

    #[test]
    fn test_context_names_package_or_host() {
        let ctx = ElementContext::new(&Package::Tsb.default_namespaces(), "abc", 7);
        assert_eq!(ctx.meta(), "lang=tsb, element=abc, line=7");
        let ctx = ElementContext::new(&Namespaces::sedml(1, 4), "model", 0);
        assert_eq!(ctx.language, "sedml");
    }
}
