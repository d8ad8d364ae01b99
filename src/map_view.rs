use serde::Serialize;

use crate::constants::{INITIAL_LATITUDE_DELTA, INITIAL_LONGITUDE_DELTA};
use crate::generator::CountryProfile;
use crate::geo::{GeoPoint, Region};
use crate::stations::Station;

/// UI affordances of the map widget. Everything is switched off for this screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub shows_compass: bool,
    pub shows_my_location_button: bool,
    pub toolbar_enabled: bool,
    pub rotate_enabled: bool,
    pub pitch_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub key: String,
    pub coordinate: GeoPoint,
}

impl From<&Station> for MarkerSpec {
    fn from(station: &Station) -> Self {
        Self {
            key: station.id.clone(),
            coordinate: station.coord,
        }
    }
}

/// Everything the map widget needs to draw the screen once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScreen {
    pub initial_region: Region,
    pub options: MapOptions,
    pub markers: Vec<MarkerSpec>,
}

impl MapScreen {
    pub fn new(profile: &CountryProfile, stations: &[Station]) -> Self {
        Self {
            initial_region: Region::covering(
                &profile.bounds,
                INITIAL_LATITUDE_DELTA,
                INITIAL_LONGITUDE_DELTA,
            ),
            options: MapOptions::default(),
            markers: stations.iter().map(MarkerSpec::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TURKEY;
    use crate::random::RngSource;
    use crate::stations::random_stations;

    #[test]
    fn camera_frames_the_country() {
        let screen = MapScreen::new(&TURKEY, &[]);
        assert!((screen.initial_region.latitude - 39.15).abs() < 1e-9);
        assert!((screen.initial_region.longitude - 35.25).abs() < 1e-9);
        assert_eq!(screen.initial_region.latitude_delta, 10.5);
        assert_eq!(screen.initial_region.longitude_delta, 12.5);
        assert!(screen.markers.is_empty());
    }

    #[test]
    fn one_marker_per_station_keyed_by_id() {
        let stations = random_stations(&TURKEY, 25, &mut RngSource::seeded(4));
        let screen = MapScreen::new(&TURKEY, &stations);
        assert_eq!(screen.markers.len(), stations.len());
        for (marker, station) in screen.markers.iter().zip(&stations) {
            assert_eq!(marker.key, station.id);
            assert_eq!(marker.coordinate, station.coord);
        }
    }

    #[test]
    fn affordances_are_disabled() {
        let json = serde_json::to_value(MapScreen::new(&TURKEY, &[])).unwrap();
        let options = json["options"].as_object().unwrap();
        assert_eq!(options.len(), 5);
        assert!(options.values().all(|v| v == false));
        assert!(json["initialRegion"]["latitudeDelta"].is_number());
    }
}
