//! Local directory backend: keys become file paths under a root. Useful for
//! dry-running a CI job without bucket credentials.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};

use crate::store::{BoxError, ObjectStore, PutOptions};

pub struct LocalFsStore {
    root: PathBuf,
}

impl LocalFsStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl ObjectStore for LocalFsStore {
    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError> {
        match fs::read(self.path_for(key)).await {
            Ok(buf) => Ok(Some(buf)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    async fn put_object(&self, key: &str, data: &[u8], _opts: &PutOptions) -> Result<(), BoxError> {
        let path = self.path_for(key);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let mut f = fs::File::create(path).await?;
        f.write_all(data).await?;
        f.flush().await?;
        Ok(())
    }
}
