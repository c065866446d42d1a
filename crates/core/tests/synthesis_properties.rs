//! Property tests for layer-set synthesis over many seeds and indices.

use chrono::{TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use layerbook_core::catalog::EquipmentCatalog;
use layerbook_core::synthesis::{created_at_window_start, image_path, synthesize_layer_set};
use layerbook_core::types::{is_hex_color, Category};

fn small_catalog() -> EquipmentCatalog {
    let mut catalog = EquipmentCatalog::empty();
    for category in Category::ALL {
        for n in 0..3 {
            catalog.push(category, format!("{category}-{n}"));
        }
    }
    catalog
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn synthesized_sets_satisfy_invariants(
        seed in any::<u64>(),
        index in 0usize..10_000,
        offset_secs in 0i64..(10 * 365 * 24 * 3600),
        use_fallback in any::<bool>(),
    ) {
        let catalog = if use_fallback { EquipmentCatalog::fallback() } else { small_catalog() };
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
            + TimeDelta::seconds(offset_secs);
        let mut rng = StdRng::seed_from_u64(seed);

        let set = synthesize_layer_set(index, &catalog, now, &mut rng)
            .expect("synthesis against a full catalog should succeed");

        prop_assert_eq!(&set.id, &index.to_string());
        prop_assert!(set.validate(&catalog).is_ok());
        prop_assert!(set.created_at >= created_at_window_start(now) - TimeDelta::milliseconds(1));
        prop_assert!(set.created_at <= now);
        for armer in &set.armers {
            prop_assert!(is_hex_color(&armer.primary_color));
            prop_assert!(is_hex_color(&armer.secondary_color));
        }
    }

    #[test]
    fn image_path_depends_only_on_index_mod_100(index in 0usize..1_000_000) {
        prop_assert_eq!(image_path(index), image_path(index % 100));
        prop_assert_eq!(image_path(index), format!("dummy/images/{:04}.png", index % 100));
    }
}
