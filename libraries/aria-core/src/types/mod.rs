//! Domain types for Aria Player

mod scan;
mod track;

pub use scan::ScanProgress;
pub use track::Track;
