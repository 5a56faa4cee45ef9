//! crates/logging/src/macros.rs
//! Call-site sugar for [`Logger::log`](crate::Logger::log).

/// Logs through a [`Logger`](crate::Logger), converting each trailing
/// argument with [`Arg::from`](crate::Arg).
///
/// Arguments are only evaluated when the logger is enabled.
///
/// # Example
///
/// ```
/// use logging::{RecordCollector, Registry, debug_log};
///
/// let collector = RecordCollector::new();
/// let registry = Registry::builder().hook(collector.hook()).namespaces("db").build();
/// let db = registry.logger("db");
///
/// debug_log!(db, "%s rows in %dms", "12", 7_u32);
/// assert_eq!(collector.drain()[0].message(), "12 rows in 7ms");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        if logger.enabled() {
            logger.log($message, &[$($crate::Arg::from($arg)),*]);
        }
    }};
}
