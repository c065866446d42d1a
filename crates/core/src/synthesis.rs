//! Random layer-set synthesis.
//!
//! Every function takes the random source as a parameter so callers can
//! use `rand::rng()` in production and a seeded `StdRng` in tests. The
//! catalog and the generation time are plain values; nothing here reads
//! global state.

use chrono::{DateTime, Months, SubsecRound, TimeDelta, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::EquipmentCatalog;
use crate::error::CoreError;
use crate::types::{Armer, Category, Gender, LayerSet, MAX_TAGS, MIN_TAGS};
use crate::vocabulary::{
    DESCRIPTION_FEATURES, DESCRIPTION_INTRODUCTIONS, DESCRIPTION_USAGES, NAME_PREFIXES,
    NAME_SUFFIXES, TAGS,
};

/// Number of distinct dummy images; image references cycle through them.
pub const IMAGE_POOL_SIZE: usize = 100;

/// Length of the trailing `createdAt` window.
pub const CREATED_AT_WINDOW_MONTHS: u32 = 24;

/// Build the layer set for sequence position `index`.
///
/// Fails only if `catalog` has no ids for some category.
pub fn synthesize_layer_set<R: Rng + ?Sized>(
    index: usize,
    catalog: &EquipmentCatalog,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<LayerSet, CoreError> {
    Ok(LayerSet {
        id: index.to_string(),
        name: random_name(rng),
        armers: random_armers(catalog, rng)?,
        description: random_description(rng),
        images: vec![image_path(index)],
        tags: random_tags(rng),
        created_at: random_created_at(now, rng),
    })
}

/// Prefix + suffix, e.g. `炎龍の鎧`.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", pick(&NAME_PREFIXES, rng), pick(&NAME_SUFFIXES, rng))
}

/// Introduction and feature clause, a space, then the usage clause.
pub fn random_description<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{} {}",
        pick(&DESCRIPTION_INTRODUCTIONS, rng),
        pick(&DESCRIPTION_FEATURES, rng),
        pick(&DESCRIPTION_USAGES, rng),
    )
}

/// Between [`MIN_TAGS`] and [`MAX_TAGS`] distinct tags.
///
/// Sampling is without replacement, so the requested count is always met.
pub fn random_tags<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(MIN_TAGS..=MAX_TAGS);
    TAGS.choose_multiple(rng, count)
        .map(|tag| tag.to_string())
        .collect()
}

/// A millisecond-precision instant uniformly distributed between two
/// calendar years before `now` and `now`.
pub fn random_created_at<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> DateTime<Utc> {
    let now = now.trunc_subsecs(3);
    let start = created_at_window_start(now);
    let span_ms = (now - start).num_milliseconds();
    start + TimeDelta::milliseconds(rng.random_range(0..=span_ms))
}

/// Start of the `createdAt` window ending at `now`.
pub fn created_at_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(CREATED_AT_WINDOW_MONTHS))
        .unwrap_or(now - TimeDelta::days(730))
}

/// `#RRGGBB` with upper-case hex digits.
pub fn random_color_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06X}", rng.random_range(0..=0x00FF_FFFF_u32))
}

/// One piece per category, in slot order.
pub fn random_armers<R: Rng + ?Sized>(
    catalog: &EquipmentCatalog,
    rng: &mut R,
) -> Result<Vec<Armer>, CoreError> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let gender = if rng.random::<f64>() > 0.5 {
                Gender::Male
            } else {
                Gender::Female
            };

            let id = catalog
                .ids(category)
                .choose(rng)
                .cloned()
                .ok_or(CoreError::EmptyCategory(category))?;

            Ok(Armer {
                id,
                category,
                gender,
                primary_color: random_color_hex(rng),
                secondary_color: random_color_hex(rng),
            })
        })
        .collect()
}

/// Image path for sequence position `index`: `dummy/images/NNNN.png` where
/// `NNNN` is `index % IMAGE_POOL_SIZE`, zero-padded.
pub fn image_path(index: usize) -> String {
    format!("dummy/images/{:04}.png", index % IMAGE_POOL_SIZE)
}

fn pick<R: Rng + ?Sized>(words: &[&'static str], rng: &mut R) -> &'static str {
    words[rng.random_range(0..words.len())]
}
