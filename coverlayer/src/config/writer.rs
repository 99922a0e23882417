//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let render = &config.render;
    // quoted so the leading '#' is never read as a comment
    let outline_color = render
        .outline_color
        .map(|c| format!("\"{}\"", c))
        .unwrap_or_default();

    format!(
        r#"[layer]
; Default circle radius (default: 5)
; Meters when absolute_radius = true, pixels otherwise
radius = {}
; Interpret radius in meters and re-project it per zoom level (default: true)
absolute_radius = {}
; Layer color as #rgb, #rrggbb or #rrggbbaa (default: #000)
color = "{}"
; Layer opacity between 0.0 and 1.0 (default: 0.5)
opacity = {}
; Compositing mode:
;   mask  - fill the tile and cut transparent holes around points
;   stamp - paint circles onto a transparent tile
mode = {}
; Circle outline color, empty for no outline
outline_color = {}
; Outline width in pixels (default: 1)
outline_width = {}
; Draw tile borders and coordinates (default: false)
debug = {}

[tiles]
; Tile edge length in pixels (default: 256)
tile_size = {}

[index]
; Points a quadtree node holds before it splits (default: 6)
max_points_per_node = {}
; Maximum quadtree depth (default: 6)
max_depth = {}

[logging]
; Directory for log files (default: logs)
directory = {}
; Log file name (default: coverlayer.log)
file = {}
"#,
        render.radius,
        render.use_absolute_radius,
        render.color,
        render.opacity,
        render.mode,
        outline_color,
        render.outline_width,
        render.debug,
        config.tiles.tile_size,
        config.index.max_points_per_node,
        config.index.max_depth,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Display a path, abbreviating the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
