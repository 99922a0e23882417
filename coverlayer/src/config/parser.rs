//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::defaults::{clamp_opacity, MAX_TILE_SIZE};
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::render::{MaskMode, Rgba};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [layer] section
    if let Some(section) = ini.section(Some("layer")) {
        if let Some(v) = section.get("radius") {
            let radius: f64 = parse_value("layer", "radius", v, "must be a positive number")?;
            if !radius.is_finite() || radius <= 0.0 {
                return Err(invalid("layer", "radius", v, "must be a positive number"));
            }
            config.render.radius = radius;
        }
        if let Some(v) = section.get("absolute_radius") {
            config.render.use_absolute_radius = parse_bool("layer", "absolute_radius", v)?;
        }
        if let Some(v) = section.get("color") {
            config.render.color = parse_value::<Rgba>(
                "layer",
                "color",
                v,
                "expected a hex color like #000 or #3388ff",
            )?;
        }
        if let Some(v) = section.get("opacity") {
            let opacity: f32 =
                parse_value("layer", "opacity", v, "must be a number between 0.0 and 1.0")?;
            if opacity.is_nan() {
                return Err(invalid(
                    "layer",
                    "opacity",
                    v,
                    "must be a number between 0.0 and 1.0",
                ));
            }
            config.render.opacity = clamp_opacity(opacity);
        }
        if let Some(v) = section.get("mode") {
            config.render.mode =
                parse_value::<MaskMode>("layer", "mode", v, "must be 'mask' or 'stamp'")?;
        }
        if let Some(v) = section.get("outline_color") {
            let v = v.trim();
            config.render.outline_color = if v.is_empty() {
                None
            } else {
                Some(parse_value::<Rgba>(
                    "layer",
                    "outline_color",
                    v,
                    "expected a hex color like #fff, or empty for no outline",
                )?)
            };
        }
        if let Some(v) = section.get("outline_width") {
            let width: f32 =
                parse_value("layer", "outline_width", v, "must be a non-negative number")?;
            if !width.is_finite() || width < 0.0 {
                return Err(invalid(
                    "layer",
                    "outline_width",
                    v,
                    "must be a non-negative number",
                ));
            }
            config.render.outline_width = width;
        }
        if let Some(v) = section.get("debug") {
            config.render.debug = parse_bool("layer", "debug", v)?;
        }
    }

    // [tiles] section
    if let Some(section) = ini.section(Some("tiles")) {
        if let Some(v) = section.get("tile_size") {
            let reason = format!("must be an integer between 1 and {}", MAX_TILE_SIZE);
            let size: u32 = parse_value("tiles", "tile_size", v, &reason)?;
            if size == 0 || size > MAX_TILE_SIZE {
                return Err(invalid("tiles", "tile_size", v, &reason));
            }
            config.tiles.tile_size = size;
        }
    }

    // [index] section
    if let Some(section) = ini.section(Some("index")) {
        if let Some(v) = section.get("max_points_per_node") {
            let capacity: usize = parse_value(
                "index",
                "max_points_per_node",
                v,
                "must be a positive integer",
            )?;
            if capacity == 0 {
                return Err(invalid(
                    "index",
                    "max_points_per_node",
                    v,
                    "must be a positive integer",
                ));
            }
            config.index.max_points_per_node = capacity;
        }
        if let Some(v) = section.get("max_depth") {
            config.index.max_depth =
                parse_value("index", "max_depth", v, "must be a non-negative integer")?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_value<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

/// Parse a boolean value from config.
///
/// Accepts `true/yes/on/1` and `false/no/off/0` in any case; anything else is
/// an error rather than a silent `false`.
pub(super) fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(
            section,
            key,
            value,
            "must be true/false, yes/no, on/off or 1/0",
        )),
    }
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
