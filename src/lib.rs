//! Random station markers scattered near Turkish city centers, biased inland,
//! served as an interactive Leaflet map.

pub mod constants;
pub mod generator;
pub mod geo;
pub mod html_template;
pub mod map_view;
pub mod random;
pub mod server;
pub mod settings;
pub mod stations;
pub mod utils;
