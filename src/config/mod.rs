/// Main configuration module.
/// 
/// Re-exports submodules for grid geometry, palette defaults, status timing
/// and the optional JSON configuration file.
pub mod grid;
pub mod palette;
pub mod status;
pub mod file;
