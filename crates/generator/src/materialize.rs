//! Collection generation and the JSON document write.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;

use layerbook_core::catalog::EquipmentCatalog;
use layerbook_core::error::CoreError;
use layerbook_core::synthesis::synthesize_layer_set;
use layerbook_core::types::LayerSet;

use crate::catalog::{fetch_catalog, CatalogSource};
use crate::config::GeneratorConfig;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Layer set count must be greater than zero")]
    InvalidCount,

    #[error("Failed to synthesize layer set: {0}")]
    Synthesis(#[from] CoreError),

    #[error("Failed to serialize layer sets: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct GenerationReport {
    pub count: usize,
    pub output_path: PathBuf,
    pub catalog_source: CatalogSource,
}

/// Fetch the catalog, synthesize `config.count` layer sets and write them
/// to `config.output_path`, replacing any previous document.
pub async fn generate_collection(
    config: &GeneratorConfig,
) -> Result<GenerationReport, GenerateError> {
    if config.count == 0 {
        return Err(GenerateError::InvalidCount);
    }

    tracing::info!(count = config.count, "Generating dummy layer sets");

    let outcome = fetch_catalog(config).await;

    let sets = {
        let mut rng = rand::rng();
        synthesize_collection(config.count, &outcome.catalog, Utc::now(), &mut rng)?
    };

    write_collection(&config.output_path, &sets).await?;

    tracing::info!(
        count = sets.len(),
        path = %config.output_path.display(),
        fallback_catalog = outcome.is_fallback(),
        "Dummy layer sets written"
    );

    Ok(GenerationReport {
        count: sets.len(),
        output_path: config.output_path.clone(),
        catalog_source: outcome.source,
    })
}

/// Synthesize indices `0..count` in order against one generation time.
///
/// Each set is checked against the catalog before it is accepted.
pub fn synthesize_collection<R: Rng + ?Sized>(
    count: usize,
    catalog: &EquipmentCatalog,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<LayerSet>, CoreError> {
    (0..count)
        .map(|index| {
            let set = synthesize_layer_set(index, catalog, now, rng)?;
            set.validate(catalog)?;
            Ok(set)
        })
        .collect()
}

/// Write `sets` as a pretty-printed JSON array, creating parent
/// directories as needed.
pub async fn write_collection(path: &Path, sets: &[LayerSet]) -> Result<(), GenerateError> {
    let json = serde_json::to_vec_pretty(sets)?;

    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    tokio::fs::write(path, json).await.map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn collection_ids_are_sequential() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(17);

        let sets =
            synthesize_collection(250, &EquipmentCatalog::fallback(), now, &mut rng).unwrap();

        assert_eq!(sets.len(), 250);
        for (index, set) in sets.iter().enumerate() {
            assert_eq!(set.id, index.to_string());
        }
        assert_eq!(sets[137].images, ["dummy/images/0037.png"]);
        assert_eq!(sets[249].images, ["dummy/images/0049.png"]);
    }

    #[test]
    fn write_error_names_the_path() {
        let err = GenerateError::Write {
            path: PathBuf::from("public/dummy/layerSets.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write public/dummy/layerSets.json: denied"
        );
    }
}
