//! Aggregations feeding the four dashboard charts
//!
//! All of these are pure functions over the parsed record snapshot and are
//! recomputed from scratch on every load. Where a chart's color or legend
//! order depends on bucket order, ties are broken by first-encounter order,
//! so grouping is done in encounter order and sorting is stable.

use std::collections::BTreeMap;
use std::collections::HashMap;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::Serialize;

use crate::data::TelevisionRecord;

/// Screen sizes outside this range are noise in the registry and dropped
/// from the size chart.
const SIZE_MIN: f64 = 32.0;
const SIZE_MAX: f64 = 100.0;

/// Scatter points below this size are outliers and excluded.
const SCATTER_SIZE_MIN: f64 = 24.0;

/// Upper bound on scatter points; past this the power chart gets a uniform
/// random sample instead of every record.
pub const MAX_POWER_POINTS: usize = 500;

/// Number of brands the brand chart keeps.
pub const TOP_BRAND_COUNT: usize = 12;

/// Model count for one screen size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeBucket {
    /// Advertised size in inches
    pub size: u32,
    /// Number of registered models with that size
    pub count: usize,
}

/// Model count for one screen technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechBucket {
    /// Technology label as registered
    pub technology: String,
    /// Number of matching models
    pub count: usize,
}

/// Technology buckets plus the grand total used for percentage labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechBreakdown {
    /// Buckets sorted descending by count, ties in first-encounter order
    pub buckets: Vec<TechBucket>,
    /// Sum of all bucket counts
    pub total: usize,
}

/// Model count for one brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandBucket {
    /// Brand name as registered
    pub brand: String,
    /// Number of registered models
    pub count: usize,
}

/// Group by integral screen size, keep sizes in `[32, 100]`, ascending.
///
/// NaN sizes fail the range check and are dropped, which is how rows with
/// coerced cells fall out of this chart.
pub fn size_distribution(records: &[TelevisionRecord]) -> Vec<SizeBucket> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        if record.screen_size >= SIZE_MIN && record.screen_size <= SIZE_MAX {
            *counts.entry(record.screen_size as u32).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(size, count)| SizeBucket { size, count })
        .collect()
}

/// Group by screen technology, descending by count.
///
/// The resulting order keys the donut palette and the legend, so equal
/// counts keep their first-encounter order.
pub fn technology_breakdown(records: &[TelevisionRecord]) -> TechBreakdown {
    let mut buckets: Vec<TechBucket> = count_in_encounter_order(records, |r| &r.screen_tech)
        .into_iter()
        .map(|(technology, count)| TechBucket { technology, count })
        .collect();

    let total = buckets.iter().map(|bucket| bucket.count).sum();
    buckets.sort_by(|a, b| b.count.cmp(&a.count));

    TechBreakdown { buckets, total }
}

/// Group by brand, descending by count, truncated to the top twelve.
pub fn top_brands(records: &[TelevisionRecord]) -> Vec<BrandBucket> {
    let mut buckets: Vec<BrandBucket> = count_in_encounter_order(records, |r| &r.brand)
        .into_iter()
        .map(|(brand, count)| BrandBucket { brand, count })
        .collect();

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(TOP_BRAND_COUNT);
    buckets
}

/// Filter to plottable scatter points and cap their number.
///
/// Keeps records with positive power draw and a screen size of at least 24
/// inches. When more than `limit` records survive, draws a uniform sample
/// of exactly `limit` without replacement; otherwise every survivor is
/// returned. Output order carries no meaning. The RNG is injected so tests
/// can seed it.
pub fn sample_power_points<'a, R>(
    records: &'a [TelevisionRecord],
    limit: usize,
    rng: &mut R,
) -> Vec<&'a TelevisionRecord>
where
    R: Rng + ?Sized,
{
    records
        .iter()
        .filter(|r| r.avg_mode_power > 0.0 && r.screen_size >= SCATTER_SIZE_MIN)
        .choose_multiple(rng, limit)
}

/// Count records per key, keeping keys in the order they first appear.
fn count_in_encounter_order<K>(records: &[TelevisionRecord], key: K) -> Vec<(String, usize)>
where
    K: Fn(&TelevisionRecord) -> &str,
{
    let mut buckets: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let k = key(record);
        match index.get(k) {
            Some(&i) => buckets[i].1 += 1,
            None => {
                index.insert(k.to_string(), buckets.len());
                buckets.push((k.to_string(), 1));
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn tv(brand: &str, tech: &str, size: f64, power: f64, star: f64) -> TelevisionRecord {
        TelevisionRecord {
            brand: brand.to_string(),
            screen_tech: tech.to_string(),
            screen_size: size,
            avg_mode_power: power,
            star_rating: star,
        }
    }

    /// The three-row fixture exercised across all four aggregators.
    fn fixture() -> Vec<TelevisionRecord> {
        vec![
            tv("A", "OLED", 55.0, 80.0, 4.0),
            tv("A", "LCD", 55.0, 60.0, 3.0),
            tv("B", "OLED", 65.0, 90.0, 5.0),
        ]
    }

    #[test]
    fn test_size_distribution_fixture() {
        let buckets = size_distribution(&fixture());
        assert_eq!(
            buckets,
            vec![
                SizeBucket { size: 55, count: 2 },
                SizeBucket { size: 65, count: 1 },
            ]
        );
    }

    #[test]
    fn test_size_distribution_range_and_totals() {
        let records = vec![
            tv("A", "LCD", 31.0, 50.0, 3.0),  // below range
            tv("A", "LCD", 32.0, 50.0, 3.0),  // lower edge
            tv("A", "LCD", 100.0, 50.0, 3.0), // upper edge
            tv("A", "LCD", 101.0, 50.0, 3.0), // above range
            tv("A", "LCD", f64::NAN, 50.0, 3.0),
            tv("A", "LCD", 32.0, 50.0, 3.0),
        ];

        let buckets = size_distribution(&records);

        let sizes: Vec<u32> = buckets.iter().map(|b| b.size).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert!(sizes.iter().all(|&s| (32..=100).contains(&s)));

        let in_range = records
            .iter()
            .filter(|r| r.screen_size >= 32.0 && r.screen_size <= 100.0)
            .count();
        let counted: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(counted, in_range);
        assert_eq!(counted, 3);
    }

    #[test]
    fn test_size_distribution_empty_input() {
        assert_eq!(size_distribution(&[]), vec![]);
    }

    #[test]
    fn test_technology_breakdown_fixture() {
        let breakdown = technology_breakdown(&fixture());
        assert_eq!(
            breakdown.buckets,
            vec![
                TechBucket {
                    technology: "OLED".to_string(),
                    count: 2,
                },
                TechBucket {
                    technology: "LCD".to_string(),
                    count: 1,
                },
            ]
        );
        assert_eq!(breakdown.total, 3);
    }

    #[test]
    fn test_technology_breakdown_counts_and_order() {
        let records = vec![
            tv("A", "QLED", 55.0, 80.0, 4.0),
            tv("A", "LCD", 55.0, 80.0, 4.0),
            tv("A", "OLED", 55.0, 80.0, 4.0),
            tv("A", "LCD", 55.0, 80.0, 4.0),
            tv("A", "OLED", 55.0, 80.0, 4.0),
        ];

        let breakdown = technology_breakdown(&records);

        let counts: Vec<usize> = breakdown.buckets.iter().map(|b| b.count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(breakdown.total, records.len());

        // LCD and OLED tie at 2; LCD was seen first so it must sort first
        assert_eq!(breakdown.buckets[0].technology, "LCD");
        assert_eq!(breakdown.buckets[1].technology, "OLED");
        assert_eq!(breakdown.buckets[2].technology, "QLED");
    }

    #[test]
    fn test_top_brands_fixture() {
        let buckets = top_brands(&fixture());
        assert_eq!(
            buckets,
            vec![
                BrandBucket {
                    brand: "A".to_string(),
                    count: 2,
                },
                BrandBucket {
                    brand: "B".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_top_brands_truncates_to_twelve() {
        let mut records = Vec::new();
        for i in 0..15 {
            // brand-0 appears 16 times, brand-1 15 times, ...
            for _ in 0..(16 - i) {
                records.push(tv(&format!("brand-{i}"), "LCD", 55.0, 80.0, 4.0));
            }
        }

        let buckets = top_brands(&records);

        assert_eq!(buckets.len(), TOP_BRAND_COUNT);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));

        let brands: HashSet<&str> = buckets.iter().map(|b| b.brand.as_str()).collect();
        assert_eq!(brands.len(), buckets.len());
        assert_eq!(buckets[0].brand, "brand-0");
    }

    #[test]
    fn test_sampler_passes_small_input_through() {
        let records = fixture();
        let mut rng = StdRng::seed_from_u64(7);

        let points = sample_power_points(&records, MAX_POWER_POINTS, &mut rng);

        // No cap triggered: same content, order not guaranteed
        assert_eq!(points.len(), 3);
        let brands: HashSet<&str> = points.iter().map(|p| p.brand.as_str()).collect();
        assert_eq!(brands, HashSet::from(["A", "B"]));
    }

    #[test]
    fn test_sampler_filters_power_and_size() {
        let records = vec![
            tv("A", "OLED", 55.0, 80.0, 4.0),
            tv("B", "LCD", 55.0, 0.0, 4.0),      // zero power
            tv("C", "LCD", 55.0, -5.0, 4.0),     // negative power
            tv("D", "LCD", 23.0, 80.0, 4.0),     // too small
            tv("E", "LCD", f64::NAN, 80.0, 4.0), // coerced size
            tv("F", "LCD", 55.0, f64::NAN, 4.0), // coerced power
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let points = sample_power_points(&records, MAX_POWER_POINTS, &mut rng);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].brand, "A");
    }

    #[test]
    fn test_sampler_caps_large_input_without_replacement() {
        let records: Vec<TelevisionRecord> = (0..700)
            .map(|i| tv(&format!("brand-{i}"), "LCD", 55.0, 80.0, 4.0))
            .collect();
        let mut rng = StdRng::seed_from_u64(42);

        let points = sample_power_points(&records, MAX_POWER_POINTS, &mut rng);

        assert_eq!(points.len(), MAX_POWER_POINTS);
        assert!(points
            .iter()
            .all(|p| p.avg_mode_power > 0.0 && p.screen_size >= 24.0));

        // Without replacement: every sampled record is distinct
        let brands: HashSet<&str> = points.iter().map(|p| p.brand.as_str()).collect();
        assert_eq!(brands.len(), MAX_POWER_POINTS);
    }

    #[test]
    fn test_sampler_is_deterministic_under_a_fixed_seed() {
        let records: Vec<TelevisionRecord> = (0..700)
            .map(|i| tv(&format!("brand-{i}"), "LCD", 55.0, 80.0, 4.0))
            .collect();

        let first: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(9);
            sample_power_points(&records, MAX_POWER_POINTS, &mut rng)
                .iter()
                .map(|p| p.brand.clone())
                .collect()
        };
        let second: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(9);
            sample_power_points(&records, MAX_POWER_POINTS, &mut rng)
                .iter()
                .map(|p| p.brand.clone())
                .collect()
        };

        assert_eq!(first, second);
    }
}
