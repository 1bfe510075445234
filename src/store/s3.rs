//! S3 backend. The client is constructed explicitly from the ambient AWS
//! environment (credential chain, endpoint overrides) and injected into the
//! appender; nothing here is global.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use tracing::debug;

use crate::store::{BoxError, ObjectStore, PutOptions};

pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Loads AWS configuration from the environment, pinning the region.
    pub async fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        let conf = aws_config::ConfigLoader::default()
            .region(aws_config::Region::new(region.into()))
            .load()
            .await;
        Self {
            client: Client::new(&conf),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;
        match resp {
            Ok(o) => {
                use tokio::io::AsyncReadExt;
                let mut body = o.body.into_async_read();
                let mut buf = Vec::new();
                body.read_to_end(&mut buf).await?;
                debug!(bucket = %self.bucket, key, len = buf.len(), "fetched object");
                Ok(Some(buf))
            }
            Err(e) if e.as_service_error().is_some_and(|se| se.is_no_such_key()) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    async fn put_object(&self, key: &str, data: &[u8], opts: &PutOptions) -> Result<(), BoxError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(data.to_owned().into())
            .content_type(opts.content_type)
            .cache_control(opts.cache_control)
            .send()
            .await?;
        debug!(bucket = %self.bucket, key, len = data.len(), "stored object");
        Ok(())
    }
}
