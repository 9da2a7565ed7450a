//! Console reporting

pub mod reporter;

pub use reporter::{byte_string_literal, format_row, skip_notice, Reporter};
