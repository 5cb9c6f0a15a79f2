//! Host detection used to choose between declared alternatives.

pub mod package_manager;

pub use package_manager::select_manager;
