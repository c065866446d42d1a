//! `generate-dummy-data` -- writes randomized layer sets for the frontend.
//!
//! Fetches the equipment catalog from the armor database (or falls back to
//! the built-in one), synthesizes the layer sets and writes them as JSON.
//!
//! # Environment variables
//!
//! | Variable                         | Default                               |
//! |----------------------------------|---------------------------------------|
//! | `LAYERBOOK_ARMOR_SETS_URL`       | `https://wilds.mhdb.io/ja/armor/sets` |
//! | `LAYERBOOK_OUTPUT_PATH`          | `public/dummy/layerSets.json`         |
//! | `LAYERBOOK_COUNT`                | `100`                                 |
//! | `LAYERBOOK_REQUEST_TIMEOUT_SECS` | `30`                                  |

use layerbook_generator::config::GeneratorConfig;
use layerbook_generator::materialize;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layerbook_generator=info,generate_dummy_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GeneratorConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    match materialize::generate_collection(&config).await {
        Ok(report) => {
            tracing::info!(
                count = report.count,
                path = %report.output_path.display(),
                "Dummy data generation complete",
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Dummy data generation failed");
            std::process::exit(1);
        }
    }
}
