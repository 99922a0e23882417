//! Configuration for coverage layers.
//!
//! Layer appearance, tile size and index tuning can be read from an INI file
//! so hosts don't hard-code them:
//!
//! ```ini
//! [layer]
//! radius = 80
//! mode = stamp
//!
//! [index]
//! max_points_per_node = 6
//! ```
//!
//! # Example
//!
//! ```
//! use coverlayer::config::ConfigFile;
//! use coverlayer::render::MaskMode;
//!
//! let config = ConfigFile::parse("[layer]\nradius = 80\nmode = stamp\n").unwrap();
//! assert_eq!(config.render.radius, 80.0);
//! assert_eq!(config.render.mode, MaskMode::Stamp);
//! assert_eq!(config.index.max_depth, 6);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, TileSettings};
