//! Favourites ranking.

use std::collections::BTreeMap;

use crate::{model::favourite::RankingEntryDto, server::model::db::FavouriteModel};

/// Counts favourites per exact country name, most popular first
///
/// Names with equal counts are ordered by name ascending. Names are compared as stored,
/// without case folding or trimming.
pub fn rank(favourites: &[FavouriteModel]) -> Vec<RankingEntryDto> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for favourite in favourites {
        *counts.entry(favourite.country_name.as_str()).or_default() += 1;
    }

    let mut ranking: Vec<RankingEntryDto> = counts
        .into_iter()
        .map(|(country_name, count)| RankingEntryDto {
            country_name: country_name.to_string(),
            count,
        })
        .collect();

    // Stable sort keeps the name order of the map for equal counts
    ranking.sort_by(|a, b| b.count.cmp(&a.count));

    ranking
}
