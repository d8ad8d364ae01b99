//! Inland-biased coordinate generation.
//!
//! A point is produced by picking a city center, moving part of the way
//! toward the country centroid and adding a little per-axis noise. The result
//! is clamped into the country's bounding box, never resampled, so it can
//! still land over water near the coast.

use tracing::trace;

use crate::constants::{
    CITY_CENTERS, CITY_NAMES, COUNTRY_CENTER, JITTER_SCALE_MIN, JITTER_SCALE_SPAN, PULL_MIN,
    PULL_SPAN, TURKEY_BOUNDS,
};
use crate::geo::{BoundingBox, GeoPoint};
use crate::random::{pick_index, uniform, RandomSource};

/// Static description of the country stations are scattered over.
#[derive(Debug, Clone, Copy)]
pub struct CountryProfile {
    pub bounds: BoundingBox,
    pub centroid: GeoPoint,
    pub cities: &'static [GeoPoint],
    pub city_names: &'static [&'static str],
}

pub const TURKEY: CountryProfile = CountryProfile {
    bounds: TURKEY_BOUNDS,
    centroid: COUNTRY_CENTER,
    cities: CITY_CENTERS,
    city_names: CITY_NAMES,
};

impl CountryProfile {
    pub fn city_name(&self, index: usize) -> Option<&'static str> {
        self.city_names.get(index).copied()
    }
}

/// The random inputs behind one generated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlandDraw {
    pub city_index: usize,
    pub pull: f64,
    pub jitter_scale: f64,
    pub jitter_lat: f64,
    pub jitter_lng: f64,
}

impl InlandDraw {
    /// Consumes exactly five samples, in the order city, pull, jitter scale,
    /// latitude noise, longitude noise.
    pub fn sample<S: RandomSource + ?Sized>(profile: &CountryProfile, source: &mut S) -> Self {
        let city_index = pick_index(source, profile.cities.len());
        let pull = uniform(source, PULL_MIN, PULL_SPAN);
        let jitter_scale = uniform(source, JITTER_SCALE_MIN, JITTER_SCALE_SPAN);
        let jitter_lat = (source.next_unit() - 0.5) * jitter_scale;
        let jitter_lng = (source.next_unit() - 0.5) * jitter_scale;
        Self {
            city_index,
            pull,
            jitter_scale,
            jitter_lat,
            jitter_lng,
        }
    }
}

/// Unclamped point for a draw: city + pull * (centroid - city) + jitter.
pub fn candidate(profile: &CountryProfile, draw: &InlandDraw) -> GeoPoint {
    let base = profile.cities[draw.city_index];
    let to_center_lat = profile.centroid.latitude - base.latitude;
    let to_center_lng = profile.centroid.longitude - base.longitude;

    GeoPoint {
        latitude: base.latitude + to_center_lat * draw.pull + draw.jitter_lat,
        longitude: base.longitude + to_center_lng * draw.pull + draw.jitter_lng,
    }
}

/// One point near a random city, biased inland and guaranteed inside `profile.bounds`.
///
/// `profile.cities` must not be empty.
pub fn random_inland_near_city<S: RandomSource + ?Sized>(
    profile: &CountryProfile,
    source: &mut S,
) -> GeoPoint {
    let draw = InlandDraw::sample(profile, source);
    trace!(
        city = profile.city_name(draw.city_index).unwrap_or("unknown"),
        pull = draw.pull,
        jitter_scale = draw.jitter_scale,
        "Inland draw"
    );
    profile.bounds.clamp(candidate(profile, &draw))
}
