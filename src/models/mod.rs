pub mod version;

pub use version::{Version, VersionClass};
