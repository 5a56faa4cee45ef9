#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod format;
mod parse;
mod unit;

pub use crate::error::{DurationError, InvalidFormatReason};
pub use crate::format::{FormatOptions, format, format_long, format_short, format_std};
pub use crate::parse::{MAX_INPUT_LEN, Millis, parse, parse_std};
pub use crate::unit::Unit;
