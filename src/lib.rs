//! EELS edge reference data: electron-shell notation and a periodic table
//! of nominal binding energies.
//!
//! ```no_run
//! use eels_edges::{periodic_table, ElectronShell};
//!
//! let table = periodic_table::global()?;
//! let shell = ElectronShell::from_eels_notation(26, "L3")?;
//! assert_eq!(table.display_label(&shell, true), "Fe-L3 706.8 eV");
//! # Ok::<(), eels_edges::EelsError>(())
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod periodic_table;
pub mod utils;

pub use config::Config;
pub use error::{CatalogLoadError, EelsError, Result};
pub use model::{EdgeCatalog, EdgeRecord, ElectronShell, SpinFraction};
