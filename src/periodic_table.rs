// src/periodic_table.rs

//! Process-wide edge catalog.
//!
//! Loaded once on first use, from the file named in the user config or else
//! from the dataset compiled into the crate. A load failure is stored and
//! returned to every later caller; there is no retry.

use std::sync::OnceLock;

use crate::config::Config;
use crate::error::CatalogLoadError;
use crate::model::EdgeCatalog;

/// Bundled edges.json
pub const EMBEDDED_EDGES: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/edges.json"));

const EMBEDDED_ORIGIN: &str = "embedded edges.json";

type CatalogCell = OnceLock<Result<EdgeCatalog, CatalogLoadError>>;

// Global catalog (initialized once, on first access)
static PERIODIC_TABLE: CatalogCell = OnceLock::new();

/// The shared catalog, or the error its first load hit.
pub fn global() -> Result<&'static EdgeCatalog, CatalogLoadError> {
    get_or_load(&PERIODIC_TABLE, || load(&Config::load()))
}

/// Runs `loader` at most once per cell, even when several threads arrive
/// first together. Its result, success or failure, is final for the cell.
fn get_or_load<F>(cell: &CatalogCell, loader: F) -> Result<&EdgeCatalog, CatalogLoadError>
where
    F: FnOnce() -> Result<EdgeCatalog, CatalogLoadError>,
{
    cell.get_or_init(|| {
        let result = loader();
        match &result {
            Ok(catalog) => log::debug!("Edge catalog ready: {} elements", catalog.len()),
            Err(e) => log::error!("Edge catalog unavailable: {}", e),
        }
        result
    })
    .as_ref()
    .map_err(|e| e.clone())
}

/// A fresh catalog from the bundled dataset, independent of the global one.
pub fn embedded() -> Result<EdgeCatalog, CatalogLoadError> {
    EdgeCatalog::from_json_str(EMBEDDED_EDGES, EMBEDDED_ORIGIN)
}

/// Builds a catalog the way `global` does for the given settings.
pub fn load(config: &Config) -> Result<EdgeCatalog, CatalogLoadError> {
    let catalog = match &config.edge_data_path {
        Some(path) => {
            log::info!("Loading edge data from {:?}", path);
            EdgeCatalog::from_path(path)?
        }
        None => embedded()?,
    };
    Ok(catalog.with_energy_decimals(config.energy_decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElectronShell;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn shell(z: u32, notation: &str) -> ElectronShell {
        ElectronShell::from_eels_notation(z, notation).unwrap()
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let table = embedded().unwrap();
        assert!(table.len() >= 90);
        assert_eq!(table.element_symbol(1), Some("H"));
        assert_eq!(table.element_symbol(92), Some("U"));
        assert_eq!(table.element_by_symbol("Fe"), Some(26));
    }

    #[test]
    fn test_embedded_known_edges() {
        let table = embedded().unwrap();
        assert_eq!(table.nominal_binding_energy_ev(&shell(6, "K")), Some(284.2));
        assert_eq!(table.nominal_binding_energy_ev(&shell(8, "K")), Some(532.0));
        assert_eq!(table.nominal_binding_energy_ev(&shell(26, "L3")), Some(706.8));
        assert_eq!(table.nominal_binding_energy_ev(&shell(6, "L3")), None);

        let fe: Vec<String> = table
            .edges_list(26)
            .unwrap()
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(fe, ["Fe-K 7112.0 eV", "Fe-L 706.8 eV", "Fe-M 52.7 eV"]);
    }

    #[test]
    fn test_every_embedded_element_lists_sorted_shells() {
        let table = embedded().unwrap();
        for (z, _) in table.elements() {
            let list = table.edges_list(z).unwrap();
            for pair in list.windows(2) {
                assert!(pair[0].0.shell_number < pair[1].0.shell_number, "Z={}", z);
            }
        }
    }

    #[test]
    fn test_load_failure_is_permanent() {
        let cell = CatalogCell::new();
        let calls = AtomicUsize::new(0);
        let failing = || -> Result<EdgeCatalog, CatalogLoadError> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CatalogLoadError::Parse {
                origin: "test".into(),
                message: "truncated".into(),
            })
        };

        let first = get_or_load(&cell, failing).unwrap_err();
        // a working loader afterwards is never consulted
        let second = get_or_load(&cell, embedded).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let cell = CatalogCell::new();
        let calls = AtomicUsize::new(0);
        let (cell, calls) = (&cell, &calls);

        let tables: Vec<&EdgeCatalog> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(move || {
                        get_or_load(cell, || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(20));
                            embedded()
                        })
                        .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for table in &tables {
            assert!(std::ptr::eq(*table, tables[0]));
        }
        assert_eq!(tables[0].element_symbol(6), Some("C"));
    }

    #[test]
    fn test_load_with_bad_override_fails() {
        let config = Config {
            edge_data_path: Some(PathBuf::from("/nonexistent/edges.json")),
            ..Config::default()
        };
        assert!(matches!(load(&config), Err(CatalogLoadError::Io { .. })));
    }

    #[test]
    fn test_load_applies_decimals() {
        let config = Config {
            energy_decimals: 0,
            ..Config::default()
        };
        let table = load(&config).unwrap();
        assert_eq!(table.display_label(&shell(6, "K"), true), "C-K 284 eV");
    }
}
