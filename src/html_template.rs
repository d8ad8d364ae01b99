use anyhow::{Context, Result};
use axum::response::Html;

use crate::map_view::MapScreen;

/// Renders the map page with the screen data inlined as JSON.
pub fn render_map_page(screen: &MapScreen) -> Result<Html<String>> {
    let json = serde_json::to_string(screen).context("Failed to serialize map screen")?;
    // Keep "</script>" inside string values from closing the tag early
    let json = json.replace('<', "\\u003c");
    let bounds = serde_json::to_string(&screen.initial_region.visible_bounds())
        .context("Failed to serialize camera bounds")?;

    let html = MAP_HTML
        .replace("/* SCREEN_JSON_PLACEHOLDER */null", &json)
        .replace("/* BOUNDS_JSON_PLACEHOLDER */null", &bounds)
        .replace("<!-- MARKER_COUNT_PLACEHOLDER -->", &screen.markers.len().to_string());
    Ok(Html(html))
}

// HTML template for the map page
const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
    <title>Station Map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <style>
        html, body { margin: 0; padding: 0; height: 100%; }
        .container { position: absolute; inset: 0; background-color: #fff; }
        #map { position: absolute; inset: 0; }
    </style>
</head>
<body>
    <div class="container" data-markers="<!-- MARKER_COUNT_PLACEHOLDER -->">
        <div id="map"></div>
    </div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        const screen = /* SCREEN_JSON_PLACEHOLDER */null;
        const bounds = /* BOUNDS_JSON_PLACEHOLDER */null;
        const options = screen.options;

        // Compass, toolbar and zoom buttons stay hidden; plain gestures still work
        const map = L.map('map', {
            zoomControl: options.toolbarEnabled,
            attributionControl: options.toolbarEnabled,
            boxZoom: false,
            keyboard: false,
        });

        map.fitBounds([
            [bounds.south_west.latitude, bounds.south_west.longitude],
            [bounds.north_east.latitude, bounds.north_east.longitude],
        ]);

        L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
            maxZoom: 19,
        }).addTo(map);

        const markers = {};
        for (const marker of screen.markers) {
            markers[marker.key] = L.marker(
                [marker.coordinate.latitude, marker.coordinate.longitude],
                { interactive: false, keyboard: false }
            ).addTo(map);
        }
    </script>
</body>
</html>
"#;
