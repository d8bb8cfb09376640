//! Torrent name sources: magnet links and the torrent client's resume files.

pub mod magnet;
pub mod resume;

pub use magnet::Magnet;
