//! Object store backends for the aggregate metrics object.
//!
//! Submodules:
//! - `s3`: the production backend, one bucket in one region
//! - `localfs`: local directory backend for debugging runs
//! - `memory`: in-memory backend for tests

use async_trait::async_trait;

pub mod localfs;
pub mod memory;
pub mod s3;

pub use localfs::LocalFsStore;
pub use memory::MemoryStore;
pub use s3::S3Store;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// How an uploaded object should be served downstream.
#[derive(Debug, Clone)]
pub struct PutOptions {
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

impl Default for PutOptions {
    fn default() -> Self {
        Self {
            content_type: "application/json",
            cache_control: "max-age=300",
        }
    }
}

/// Minimal whole-object interface: the appender only ever fetches one key and
/// overwrites it. No list, no delete, no versioning.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// `Ok(None)` when the key does not exist; `Err` for every other failure.
    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError>;

    async fn put_object(&self, key: &str, data: &[u8], opts: &PutOptions) -> Result<(), BoxError>;
}
