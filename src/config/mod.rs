//! Configuration for splitpool
//!
//! Currently this is limited to path resolution; the store files themselves
//! carry no settings.

pub mod paths;

pub use paths::SplitpoolPaths;
