use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{STATION_ID_PREFIX, STATION_SUFFIX_LEN};
use crate::generator::{random_inland_near_city, CountryProfile};
use crate::geo::GeoPoint;
use crate::random::RandomSource;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A generated marker position. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: String,
    pub coord: GeoPoint,
}

/// Lowercase base-36 suffix built from a single sample.
fn random_suffix<S: RandomSource + ?Sized>(source: &mut S) -> String {
    let space = 36u64.pow(STATION_SUFFIX_LEN as u32);
    let mut value = ((source.next_unit() * space as f64) as u64).min(space - 1);

    let mut digits = vec![b'0'; STATION_SUFFIX_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36_DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&digits).into_owned()
}

/// Generates `count` independent stations, in index order.
pub fn random_stations<S: RandomSource + ?Sized>(
    profile: &CountryProfile,
    count: usize,
    source: &mut S,
) -> Vec<Station> {
    (0..count)
        .map(|index| {
            let id = format!("{}-{}-{}", STATION_ID_PREFIX, index, random_suffix(source));
            let coord = random_inland_near_city(profile, source);
            Station { id, coord }
        })
        .collect()
}

/// One generation run, keyed by the count it was produced for.
#[derive(Debug, Clone, Serialize)]
pub struct StationSet {
    pub count: usize,
    pub generated_at: DateTime<Utc>,
    pub stations: Vec<Station>,
}

/// Compute-once cache keyed by station count.
///
/// Asking again for the same count returns the cached set untouched; a
/// different count (or an explicit `invalidate`) regenerates everything.
pub struct StationCache<S> {
    profile: CountryProfile,
    source: S,
    current: Option<StationSet>,
    generations: u64,
}

impl<S: RandomSource> StationCache<S> {
    pub fn new(profile: CountryProfile, source: S) -> Self {
        Self {
            profile,
            source,
            current: None,
            generations: 0,
        }
    }

    pub fn get(&mut self, count: usize) -> &StationSet {
        match self.current.take() {
            Some(set) if set.count == count => {
                debug!(count, "Reusing cached station set");
                self.current.insert(set)
            }
            _ => {
                let set = self.generate(count);
                self.current.insert(set)
            }
        }
    }

    fn generate(&mut self, count: usize) -> StationSet {
        let start = std::time::Instant::now();
        let stations = random_stations(&self.profile, count, &mut self.source);
        self.generations += 1;
        info!(
            count,
            generation = self.generations,
            elapsed = ?start.elapsed(),
            "Generated station set"
        );
        StationSet {
            count,
            generated_at: Utc::now(),
            stations,
        }
    }

    /// Drops the cached set so the next `get` starts from scratch.
    pub fn invalidate(&mut self) {
        if self.current.take().is_some() {
            debug!("Station cache invalidated");
        }
    }

    pub fn cached_count(&self) -> Option<usize> {
        self.current.as_ref().map(|set| set.count)
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn profile(&self) -> &CountryProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TURKEY;
    use crate::random::testing::{ConstantSource, ScriptedSource};
    use crate::random::RngSource;
    use std::collections::HashSet;

    #[test]
    fn yields_requested_count_with_unique_ids() {
        let mut source = RngSource::seeded(3);
        for count in [1, 2, 60, 500] {
            let stations = random_stations(&TURKEY, count, &mut source);
            assert_eq!(stations.len(), count);
            let ids: HashSet<_> = stations.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), count);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut source = RngSource::seeded(3);
        assert!(random_stations(&TURKEY, 0, &mut source).is_empty());
    }

    #[test]
    fn ids_follow_index_and_suffix_format() {
        let mut source = RngSource::seeded(11);
        let stations = random_stations(&TURKEY, 12, &mut source);
        for (index, station) in stations.iter().enumerate() {
            let prefix = format!("st-{}-", index);
            assert!(station.id.starts_with(&prefix), "{}", station.id);
            let suffix = &station.id[prefix.len()..];
            assert_eq!(suffix.len(), 6);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn ids_stay_unique_even_with_a_stuck_source() {
        let mut source = ConstantSource(0.0);
        let stations = random_stations(&TURKEY, 5, &mut source);
        assert_eq!(stations[0].id, "st-0-000000");
        assert_eq!(stations[4].id, "st-4-000000");
        let ids: HashSet<_> = stations.iter().map(|s| &s.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn suffix_covers_full_range() {
        assert_eq!(random_suffix(&mut ConstantSource(0.999_999_999_999)), "zzzzzz");
        assert_eq!(random_suffix(&mut ConstantSource(1.0)), "zzzzzz");
        let mut source = ScriptedSource::new(&[0.5]);
        assert_eq!(random_suffix(&mut source), "i00000");
    }

    #[test]
    fn every_station_lies_inside_bounds() {
        let mut source = RngSource::seeded(77);
        for station in random_stations(&TURKEY, 2_000, &mut source) {
            assert!(TURKEY.bounds.contains(&station.coord));
        }
    }

    #[test]
    fn independent_runs_differ() {
        let a = random_stations(&TURKEY, 60, &mut RngSource::from_entropy());
        let b = random_stations(&TURKEY, 60, &mut RngSource::from_entropy());
        let shifts: Vec<f64> = a
            .iter()
            .zip(&b)
            .map(|(x, y)| {
                (x.coord.latitude - y.coord.latitude).abs()
                    + (x.coord.longitude - y.coord.longitude).abs()
            })
            .collect();

        // Cities are degrees apart, so unrelated runs move markers by whole degrees on average
        let mean_shift = shifts.iter().sum::<f64>() / shifts.len() as f64;
        assert!(mean_shift > 0.5, "mean shift {mean_shift}");

        let coinciding = shifts.iter().filter(|s| **s < 1e-6).count();
        assert!(coinciding < 5, "{coinciding} coordinates repeated");

        let spread = |set: &[Station]| {
            let mean = set.iter().map(|s| s.coord.latitude).sum::<f64>() / set.len() as f64;
            set.iter()
                .map(|s| (s.coord.latitude - mean).powi(2))
                .sum::<f64>()
                / set.len() as f64
        };
        assert!(spread(&a) > 0.1);
        assert!(spread(&b) > 0.1);
    }

    #[test]
    fn cache_reuses_set_for_same_count() {
        let mut cache = StationCache::new(TURKEY, RngSource::seeded(5));
        let first = cache.get(10).stations.clone();
        let second = cache.get(10).stations.clone();
        assert_eq!(first, second);
        assert_eq!(cache.generations(), 1);
        assert_eq!(cache.cached_count(), Some(10));
    }

    #[test]
    fn cache_regenerates_when_count_changes() {
        let mut cache = StationCache::new(TURKEY, RngSource::seeded(5));
        let first = cache.get(10).stations.clone();
        assert_eq!(cache.get(4).stations.len(), 4);
        let back = cache.get(10).stations.clone();
        assert_eq!(cache.generations(), 3);
        assert_ne!(first, back);
    }

    #[test]
    fn invalidate_forces_fresh_set() {
        let mut cache = StationCache::new(TURKEY, RngSource::seeded(8));
        let first = cache.get(20).stations.clone();
        cache.invalidate();
        assert_eq!(cache.cached_count(), None);
        let second = cache.get(20).stations.clone();
        assert_eq!(cache.generations(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn seeded_caches_agree() {
        let mut a = StationCache::new(TURKEY, RngSource::seeded(42));
        let mut b = StationCache::new(TURKEY, RngSource::seeded(42));
        assert_eq!(a.get(30).stations, b.get(30).stations);
    }
}
