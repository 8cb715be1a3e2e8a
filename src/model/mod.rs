//src/model/mod.rs
pub mod catalog;
pub mod shell;

// Re-exports for cleaner imports
pub use catalog::{EdgeCatalog, EdgeRecord};
pub use shell::{ElectronShell, SpinFraction};
