//! Country statistics.
//!
//! Totals and averages of inhabitants, area and pkb over a set of countries, for one
//! continent or for every continent that has at least one country. Summaries are computed on
//! request and never stored.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    model::summary::SummaryDto,
    server::{data::country::CountryStore, error::Error, model::db::CountryModel},
};

/// Sums and averages the statistics of the given countries
///
/// An empty set yields all-zero totals and averages; the divisor is never below one. Totals
/// are widened to `i128` so any number of `i64` statistics sums without overflow.
pub fn summarize(countries: &[CountryModel]) -> SummaryDto {
    let (total_inhabitants, total_area, total_pkb) = countries.iter().fold(
        (0i128, 0i128, 0i128),
        |(inhabitants, area, pkb), country| {
            (
                inhabitants + i128::from(country.inhabitants),
                area + i128::from(country.area),
                pkb + i128::from(country.pkb),
            )
        },
    );

    let divisor = countries.len().max(1) as f64;

    SummaryDto {
        total_inhabitants,
        total_area,
        total_pkb,
        average_inhabitants: total_inhabitants as f64 / divisor,
        average_area: total_area as f64 / divisor,
        average_pkb: total_pkb as f64 / divisor,
    }
}

/// Summary of the countries of a single continent
///
/// An unknown continent is not an error, it simply has no countries.
pub async fn summarize_by_continent<S: CountryStore>(
    store: &S,
    continent_id: i32,
) -> Result<SummaryDto, Error> {
    let countries = store.get_by_continent(continent_id).await?;

    Ok(summarize(&countries))
}

/// Summary per continent, keyed by continent ID
///
/// Keys come from the continents referenced by `countries`, so continents without countries
/// are absent from the result.
pub async fn summarize_all_continents<S: CountryStore>(
    store: &S,
    countries: &[CountryModel],
) -> Result<BTreeMap<i32, SummaryDto>, Error> {
    let continent_ids: BTreeSet<i32> = countries.iter().map(|c| c.continent_id).collect();

    let mut summaries = BTreeMap::new();
    for continent_id in continent_ids {
        let summary = summarize_by_continent(store, continent_id).await?;
        summaries.insert(continent_id, summary);
    }

    Ok(summaries)
}
