use std::sync::{Arc, Mutex};

use crate::generator::TURKEY;
use crate::random::{RandomSource, RngSource};
use crate::settings::Settings;
use crate::stations::StationCache;

pub type SharedSource = Box<dyn RandomSource + Send>;
pub type SharedCache = Arc<Mutex<StationCache<SharedSource>>>;

// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Stations behind the map screen, keyed only by the configured count.
    pub screen: SharedCache,
    /// Ad-hoc `?count=N` queries; never touches the screen's set.
    pub queries: SharedCache,
    pub settings: Arc<Settings>,
}

fn shared_cache(source: SharedSource) -> SharedCache {
    Arc::new(Mutex::new(StationCache::new(TURKEY, source)))
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let (screen_source, query_source): (SharedSource, SharedSource) = match settings.seed {
            Some(seed) => (
                Box::new(RngSource::seeded(seed)),
                Box::new(RngSource::seeded(seed.wrapping_add(1))),
            ),
            None => (
                Box::new(RngSource::from_entropy()),
                Box::new(RngSource::from_entropy()),
            ),
        };
        Self::with_sources(settings, screen_source, query_source)
    }

    pub fn with_sources(
        settings: Settings,
        screen_source: SharedSource,
        query_source: SharedSource,
    ) -> Self {
        Self {
            screen: shared_cache(screen_source),
            queries: shared_cache(query_source),
            settings: Arc::new(settings),
        }
    }
}
