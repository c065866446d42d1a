//! Reader for the generated layer-set document.
//!
//! Mirrors what the frontend does with `layerSets.json`: fetch it as a
//! static asset and treat any failure as "no data". The `try_*` variants
//! expose the underlying error for callers that want it.

use std::path::Path;

use layerbook_core::types::LayerSet;

/// Path of the document below the site root.
pub const LAYER_SETS_PATH: &str = "/dummy/layerSets.json";

/// Errors from loading the layer-set document.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The static host returned a non-2xx status code.
    #[error("Layer sets request returned HTTP {0}")]
    HttpStatus(u16),

    /// The document is not a JSON array of layer sets.
    #[error("Failed to parse layer sets: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read layer sets: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP client for the static site serving `layerSets.json`.
pub struct LayerSetClient {
    client: reqwest::Client,
    base_url: String,
}

impl LayerSetClient {
    /// * `base_url` - Site root, e.g. `http://localhost:5173`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn document_url(&self) -> String {
        format!("{}{}", self.base_url, LAYER_SETS_PATH)
    }

    /// Fetch all layer sets; any failure is logged and yields an empty list.
    pub async fn fetch_layer_sets(&self) -> Vec<LayerSet> {
        match self.try_fetch_layer_sets().await {
            Ok(sets) => sets,
            Err(e) => {
                tracing::error!(url = %self.document_url(), error = %e, "Failed to fetch layer sets");
                Vec::new()
            }
        }
    }

    pub async fn try_fetch_layer_sets(&self) -> Result<Vec<LayerSet>, ClientError> {
        let response = self.client.get(self.document_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Load layer sets from a local document; any failure is logged and
/// yields an empty list.
pub async fn load_layer_sets_from_file(path: &Path) -> Vec<LayerSet> {
    match try_load_layer_sets_from_file(path).await {
        Ok(sets) => sets,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load layer sets");
            Vec::new()
        }
    }
}

pub async fn try_load_layer_sets_from_file(path: &Path) -> Result<Vec<LayerSet>, ClientError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Look up a layer set by id.
pub fn find_layer_set<'a>(sets: &'a [LayerSet], id: &str) -> Option<&'a LayerSet> {
    sets.iter().find(|set| set.id == id)
}

/// Map a bare `images/...` reference onto the dummy image directory.
///
/// Anything else, including paths already under `dummy/`, is returned
/// unchanged.
pub fn resolve_image_path(path: &str) -> String {
    if path.starts_with("images/") {
        format!("dummy/{path}")
    } else {
        path.to_string()
    }
}
