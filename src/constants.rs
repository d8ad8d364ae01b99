use crate::geo::{BoundingBox, GeoPoint};

// Port configuration
pub const DEFAULT_PORT: u16 = 3001;
pub const ALTERNATIVE_PORT: u16 = 3002;
pub const PORTS_TO_CHECK: &[u16] = &[DEFAULT_PORT, ALTERNATIVE_PORT];

// Station generation
pub const DEFAULT_STATION_COUNT: usize = 60;
pub const MAX_STATION_COUNT: usize = 10_000;
pub const STATION_ID_PREFIX: &str = "st";
pub const STATION_SUFFIX_LEN: usize = 6;

// Inward pull is drawn from [PULL_MIN, PULL_MIN + PULL_SPAN)
pub const PULL_MIN: f64 = 0.15;
pub const PULL_SPAN: f64 = 0.20;

// Jitter scale is drawn from [JITTER_SCALE_MIN, JITTER_SCALE_MIN + JITTER_SCALE_SPAN)
pub const JITTER_SCALE_MIN: f64 = 0.05;
pub const JITTER_SCALE_SPAN: f64 = 0.20;

// Initial camera zoom
pub const INITIAL_LATITUDE_DELTA: f64 = 10.5;
pub const INITIAL_LONGITUDE_DELTA: f64 = 12.5;

/// Approximate bounding box of Turkey.
pub const TURKEY_BOUNDS: BoundingBox = BoundingBox {
    south_west: GeoPoint::new(35.8, 25.5),
    north_east: GeoPoint::new(42.5, 45.0),
};

/// Reference point generated stations are pulled toward (middle of the country).
pub const COUNTRY_CENTER: GeoPoint = GeoPoint::new(39.0, 35.0);

/// Province centers, coastal ones included. Ankara appears twice on purpose.
pub const CITY_CENTERS: &[GeoPoint] = &[
    GeoPoint::new(39.9208, 32.8541), // Ankara
    GeoPoint::new(41.0151, 28.9795), // Istanbul
    GeoPoint::new(38.4237, 27.1428), // Izmir
    GeoPoint::new(37.0000, 35.3213), // Adana
    GeoPoint::new(36.8969, 30.7133), // Antalya
    GeoPoint::new(37.8713, 32.4846), // Konya
    GeoPoint::new(38.7312, 35.4787), // Kayseri
    GeoPoint::new(39.7506, 37.0150), // Sivas
    GeoPoint::new(39.9043, 41.2679), // Erzurum
    GeoPoint::new(37.9144, 40.2306), // Diyarbakir
    GeoPoint::new(37.0662, 37.3833), // Gaziantep
    GeoPoint::new(37.7742, 38.2763), // Adiyaman
    GeoPoint::new(37.1674, 38.7955), // Sanliurfa
    GeoPoint::new(38.3552, 38.3095), // Malatya
    GeoPoint::new(40.1950, 29.0600), // Bursa
    GeoPoint::new(39.9208, 32.8541), // Ankara
    GeoPoint::new(40.8438, 31.1565), // Duzce
    GeoPoint::new(40.9833, 27.5167), // Tekirdag
    GeoPoint::new(40.6083, 43.1000), // Kars
    GeoPoint::new(40.6000, 43.4167), // Ardahan
    GeoPoint::new(40.1467, 26.4086), // Canakkale
    GeoPoint::new(39.6472, 27.8861), // Balikesir
    GeoPoint::new(40.5833, 36.5667), // Tokat
    GeoPoint::new(41.2867, 36.3300), // Samsun
    GeoPoint::new(40.6500, 35.8333), // Amasya
    GeoPoint::new(38.6743, 34.8556), // Nevsehir
    GeoPoint::new(39.5481, 34.9533), // Kirikkale
    GeoPoint::new(37.7648, 29.0884), // Denizli
    GeoPoint::new(38.4622, 27.2176), // Manisa
    GeoPoint::new(37.2153, 28.3636), // Mugla
    GeoPoint::new(40.1569, 26.4142), // Gelibolu
    GeoPoint::new(40.6500, 29.2700), // Yalova
    GeoPoint::new(38.7348, 41.4893), // Mus
    GeoPoint::new(39.1167, 39.5333), // Tunceli
    GeoPoint::new(39.7191, 43.0503), // Igdir
    GeoPoint::new(41.0053, 39.7269), // Trabzon
    GeoPoint::new(36.8000, 34.6333), // Mersin
    GeoPoint::new(38.3552, 31.4167), // Isparta
    GeoPoint::new(37.8667, 32.4833), // Karaman
];

/// Labels for `CITY_CENTERS`, same order.
pub const CITY_NAMES: &[&str] = &[
    "Ankara", "Istanbul", "Izmir", "Adana", "Antalya", "Konya", "Kayseri", "Sivas", "Erzurum",
    "Diyarbakir", "Gaziantep", "Adiyaman", "Sanliurfa", "Malatya", "Bursa", "Ankara", "Duzce",
    "Tekirdag", "Kars", "Ardahan", "Canakkale", "Balikesir", "Tokat", "Samsun", "Amasya",
    "Nevsehir", "Kirikkale", "Denizli", "Manisa", "Mugla", "Gelibolu", "Yalova", "Mus", "Tunceli",
    "Igdir", "Trabzon", "Mersin", "Isparta", "Karaman",
];
