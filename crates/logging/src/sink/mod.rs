//! crates/logging/src/sink/mod.rs
//! Writers that turn [`Record`](crate::Record)s into terminal lines.

mod render;
mod stream;

pub use render::render;
pub use stream::StreamSink;

use std::io;

use crate::record::Hook;

/// Default output hook: renders records to standard error.
///
/// `colors` selects the ANSI-coloured layout; see [`render`].
#[must_use]
pub fn stderr_hook(colors: bool) -> Hook {
    StreamSink::new(io::stderr(), colors).into_hook()
}
