//! Library half of `binmetrics`: measure the sizes of a platform's release
//! binaries and append them, as gzip-compressed newline-delimited JSON, to a
//! per-build aggregate object in an object store.

pub mod appender;
pub mod artifact;
pub mod cli;
pub mod error;
pub mod measure;
pub mod record;
pub mod store;
