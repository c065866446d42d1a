//! Equipment catalog acquisition from the armor database.
//!
//! [`fetch_catalog`] never fails: any problem with the remote source is
//! logged and replaced by [`EquipmentCatalog::fallback`]. The returned
//! [`CatalogOutcome`] records which of the two paths was taken.

use std::time::Duration;

use serde::Deserialize;

use layerbook_core::catalog::EquipmentCatalog;
use layerbook_core::types::Category;

use crate::config::GeneratorConfig;

/// Pieces below this rarity are left out of the catalog.
pub const MIN_RARITY: f64 = 5.0;

/// Categories with fewer ids than this trigger a warning.
pub const SPARSE_CATEGORY_THRESHOLD: usize = 10;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why the remote catalog could not be used.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The armor database returned a non-2xx status code.
    #[error("Armor database returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse armor sets: {0}")]
    Parse(#[from] serde_json::Error),

    /// No usable piece was found for a category.
    #[error("Armor database has no usable {0} pieces")]
    EmptyCategory(Category),
}

impl CatalogError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Request(e) if e.is_timeout())
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Where a catalog came from.
#[derive(Debug)]
pub enum CatalogSource {
    Remote,
    Fallback { reason: CatalogError },
}

/// A usable catalog plus the path that produced it.
#[derive(Debug)]
pub struct CatalogOutcome {
    pub catalog: EquipmentCatalog,
    pub source: CatalogSource,
}

impl CatalogOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Fallback { .. })
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One entry of the `/armor/sets` response.
#[derive(Debug, Deserialize)]
pub struct ArmorSetDescriptor {
    #[serde(default)]
    pub pieces: Option<Vec<PieceDescriptor>>,
}

#[derive(Debug, Deserialize)]
pub struct PieceDescriptor {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub rarity: Option<f64>,
    pub id: PieceId,
}

/// Piece ids arrive either as slugs or as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PieceId {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceId::Text(s) => f.write_str(s),
            PieceId::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Fetch the catalog, falling back to the built-in one on any failure.
pub async fn fetch_catalog(config: &GeneratorConfig) -> CatalogOutcome {
    tracing::info!(url = %config.armor_sets_url, "Fetching armor catalog");

    match try_fetch_catalog(&config.armor_sets_url, config.request_timeout).await {
        Ok(catalog) => {
            tracing::info!("Armor catalog fetched");
            CatalogOutcome {
                catalog,
                source: CatalogSource::Remote,
            }
        }
        Err(reason) => {
            tracing::error!(
                error = %reason,
                timeout = reason.is_timeout(),
                "Failed to fetch armor catalog, using fallback catalog"
            );
            CatalogOutcome {
                catalog: EquipmentCatalog::fallback(),
                source: CatalogSource::Fallback { reason },
            }
        }
    }
}

/// Single attempt against `url`, bounded by `timeout`.
pub async fn try_fetch_catalog(
    url: &str,
    timeout: Duration,
) -> Result<EquipmentCatalog, CatalogError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let sets: Vec<ArmorSetDescriptor> = serde_json::from_slice(&body)?;

    let catalog = build_catalog(&sets);
    warn_sparse_categories(&catalog);

    if let Some(category) = catalog.empty_categories().first() {
        return Err(CatalogError::EmptyCategory(*category));
    }

    Ok(catalog)
}

/// Group piece ids by category, keeping pieces of known kind with rarity
/// of at least [`MIN_RARITY`], in response order.
pub fn build_catalog(sets: &[ArmorSetDescriptor]) -> EquipmentCatalog {
    let mut catalog = EquipmentCatalog::empty();

    let pieces = sets
        .iter()
        .filter_map(|set| set.pieces.as_deref())
        .flatten();

    for piece in pieces {
        let Some(category) = piece
            .kind
            .as_deref()
            .and_then(|kind| kind.parse::<Category>().ok())
        else {
            continue;
        };

        if piece.rarity.is_some_and(|rarity| rarity >= MIN_RARITY) {
            catalog.push(category, piece.id.to_string());
        }
    }

    catalog
}

fn warn_sparse_categories(catalog: &EquipmentCatalog) {
    for category in Category::ALL {
        let count = catalog.ids(category).len();
        if count < SPARSE_CATEGORY_THRESHOLD {
            tracing::warn!(
                category = %category,
                count,
                threshold = SPARSE_CATEGORY_THRESHOLD,
                "Armor catalog category has few pieces"
            );
        }
    }
}
