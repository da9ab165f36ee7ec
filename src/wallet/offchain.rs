use async_trait::async_trait;
use futures::future::join_all;
use serde_json::Value;
use tracing::debug;

use crate::error::MetadataFetchError;
use super::types::{DigitalAsset, NonFungibleHolding};

/// Loads the JSON document an asset's `uri` points at.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_metadata(&self, uri: &str) -> Result<Value, MetadataFetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpMetadataFetcher {
    http: reqwest::Client,
}

impl HttpMetadataFetcher {
    pub fn new(http: reqwest::Client) -> Self {
        HttpMetadataFetcher { http }
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch_metadata(&self, uri: &str) -> Result<Value, MetadataFetchError> {
        let response = self.http.get(uri).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(MetadataFetchError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// The `image` field of an off-chain document, if it is an object carrying
/// a string there.
pub fn image_from_metadata(document: &Value) -> Option<String> {
    document
        .as_object()?
        .get("image")?
        .as_str()
        .map(str::to_string)
}

async fn resolve_image(fetcher: &dyn MetadataFetcher, uri: &str) -> Option<String> {
    if uri.is_empty() {
        return None;
    }
    match fetcher.fetch_metadata(uri).await {
        Ok(document) => image_from_metadata(&document),
        Err(e) => {
            debug!(uri, error = %e, "metadata fetch failed, showing asset without image");
            None
        }
    }
}

/// Fetches every asset's document concurrently and waits for all of them.
/// A failed fetch only drops that asset's image.
pub async fn resolve_images(
    fetcher: &dyn MetadataFetcher,
    assets: Vec<DigitalAsset>,
) -> Vec<NonFungibleHolding> {
    let images = join_all(assets.iter().map(|asset| resolve_image(fetcher, &asset.uri))).await;

    assets
        .into_iter()
        .zip(images)
        .map(|(asset, image)| asset.into_holding(image))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct StaticFetcher {
        documents: HashMap<String, Value>,
    }

    #[async_trait]
    impl MetadataFetcher for StaticFetcher {
        async fn fetch_metadata(&self, uri: &str) -> Result<Value, MetadataFetchError> {
            self.documents
                .get(uri)
                .cloned()
                .ok_or(MetadataFetchError::Status(404))
        }
    }

    fn asset(name: &str, uri: &str) -> DigitalAsset {
        DigitalAsset {
            mint_address: format!("mint-{}", name),
            name: name.to_string(),
            symbol: "SYM".to_string(),
            uri: uri.to_string(),
        }
    }

    #[test]
    fn image_requires_string_field_on_object() {
        assert_eq!(
            image_from_metadata(&json!({ "image": "https://img/1.png" })),
            Some("https://img/1.png".to_string())
        );
        assert_eq!(image_from_metadata(&json!({ "image": 3 })), None);
        assert_eq!(image_from_metadata(&json!({ "name": "x" })), None);
        assert_eq!(image_from_metadata(&json!(["image"])), None);
    }

    #[tokio::test]
    async fn one_failed_fetch_only_drops_that_image() {
        let fetcher = StaticFetcher {
            documents: HashMap::from([
                ("https://a".to_string(), json!({ "image": "https://a.png" })),
                ("https://c".to_string(), json!({ "image": "https://c.png" })),
            ]),
        };
        let assets = vec![
            asset("a", "https://a"),
            asset("b", "https://b"),
            asset("c", "https://c"),
        ];

        let nfts = resolve_images(&fetcher, assets).await;

        assert_eq!(nfts.len(), 3);
        assert_eq!(nfts[0].image_url.as_deref(), Some("https://a.png"));
        assert_eq!(nfts[1].image_url, None);
        assert_eq!(nfts[2].image_url.as_deref(), Some("https://c.png"));
        assert_eq!(nfts[1].name, "b");
    }

    #[tokio::test]
    async fn empty_uri_is_not_fetched() {
        let fetcher = StaticFetcher {
            documents: HashMap::new(),
        };
        let nfts = resolve_images(&fetcher, vec![asset("a", "")]).await;
        assert_eq!(nfts[0].image_url, None);
        assert_eq!(nfts[0].metadata_uri, "");
    }
}
