// src/model/catalog.rs

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::CatalogLoadError;
use crate::io::edges_json;
use crate::model::shell::ElectronShell;

/// One element of the edge dataset: symbol plus EELS-notation edges (eV),
/// in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub atomic_number: u32,
    pub symbol: String,
    pub edges: Vec<(String, f64)>,
}

/// Read-only binding-energy catalog.
///
/// Unknown elements or shells come back as `None`; only loading can fail.
#[derive(Debug, Clone)]
pub struct EdgeCatalog {
    records: Vec<EdgeRecord>,
    energy_decimals: usize,
}

impl EdgeCatalog {
    pub const DEFAULT_ENERGY_DECIMALS: usize = 1;

    /// Validates the dataset invariants and builds the catalog.
    pub fn from_records(records: Vec<EdgeRecord>) -> Result<Self, CatalogLoadError> {
        let mut seen = HashSet::new();
        let mut symbols = HashSet::new();
        for record in &records {
            if record.atomic_number == 0 {
                return Err(CatalogLoadError::InvalidAtomicNumber(0));
            }
            if !seen.insert(record.atomic_number) {
                return Err(CatalogLoadError::DuplicateAtomicNumber(record.atomic_number));
            }
            // element_by_symbol ignores case
            if !symbols.insert(record.symbol.to_ascii_lowercase()) {
                return Err(CatalogLoadError::DuplicateSymbol(record.symbol.clone()));
            }
            for (notation, energy) in &record.edges {
                if ElectronShell::from_eels_notation(record.atomic_number, notation).is_err() {
                    return Err(CatalogLoadError::BadEdgeKey {
                        z: record.atomic_number,
                        notation: notation.clone(),
                    });
                }
                if energy.is_nan() || *energy < 0.0 {
                    return Err(CatalogLoadError::InvalidEnergy {
                        z: record.atomic_number,
                        notation: notation.clone(),
                        energy: *energy,
                    });
                }
            }
        }

        Ok(Self {
            records,
            energy_decimals: Self::DEFAULT_ENERGY_DECIMALS,
        })
    }

    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, CatalogLoadError> {
        Self::from_records(edges_json::parse_str(text, origin)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogLoadError> {
        Self::from_records(edges_json::read_file(path)?)
    }

    /// Decimal places used for energies in labels
    pub fn with_energy_decimals(mut self, decimals: usize) -> Self {
        self.energy_decimals = decimals;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record(&self, atomic_number: u32) -> Option<&EdgeRecord> {
        self.records
            .iter()
            .find(|record| record.atomic_number == atomic_number)
    }

    pub fn element_symbol(&self, atomic_number: u32) -> Option<&str> {
        self.record(atomic_number).map(|record| record.symbol.as_str())
    }

    /// Case-insensitive symbol lookup
    pub fn element_by_symbol(&self, symbol: &str) -> Option<u32> {
        self.records
            .iter()
            .find(|record| record.symbol.eq_ignore_ascii_case(symbol))
            .map(|record| record.atomic_number)
    }

    /// Tabulated edge energy (eV) for the shell, if the dataset has one.
    pub fn nominal_binding_energy_ev(&self, shell: &ElectronShell) -> Option<f64> {
        let key = shell.eels_notation(true);
        self.record(shell.atomic_number)?
            .edges
            .iter()
            .find(|(notation, _)| *notation == key)
            .map(|&(_, energy)| energy)
    }

    /// (atomic number, symbol) per record, in dataset order.
    pub fn elements(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.records
            .iter()
            .map(|record| (record.atomic_number, record.symbol.as_str()))
    }

    /// Every tabulated edge of an element, in dataset order.
    pub fn edges(&self, atomic_number: u32) -> Option<Vec<(ElectronShell, f64)>> {
        let record = self.record(atomic_number)?;
        Some(
            record
                .edges
                .iter()
                .filter_map(|(notation, energy)| {
                    ElectronShell::from_eels_notation(atomic_number, notation)
                        .ok()
                        .map(|shell| (shell, *energy))
                })
                .collect(),
        )
    }

    /// One entry per shell, the lowest-energy subshell of each, ordered by
    /// shell number. Labels omit the subshell ("Fe-L 706.8 eV").
    pub fn edges_list(&self, atomic_number: u32) -> Option<Vec<(ElectronShell, String)>> {
        let mut by_shell: BTreeMap<u32, (ElectronShell, f64)> = BTreeMap::new();
        for (shell, energy) in self.edges(atomic_number)? {
            // strict: ties keep the first-seen subshell
            let lower = by_shell
                .get(&shell.shell_number)
                .map_or(true, |&(_, lowest)| energy < lowest);
            if lower {
                by_shell.insert(shell.shell_number, (shell, energy));
            }
        }

        Some(
            by_shell
                .into_values()
                .map(|(shell, _)| (shell, self.display_label(&shell, false)))
                .collect(),
        )
    }

    /// "<Symbol>-<notation>", e.g. "Fe-L3". Unknown elements give just the notation.
    pub fn shell_label(&self, shell: &ElectronShell) -> String {
        let notation = shell.eels_notation(true);
        match self.element_symbol(shell.atomic_number) {
            Some(symbol) => format!("{}-{}", symbol, notation),
            None => notation,
        }
    }

    /// "<Symbol>-<notation> <energy> eV", dropping whichever part is unknown.
    pub fn display_label(&self, shell: &ElectronShell, include_subshell: bool) -> String {
        let notation = shell.eels_notation(include_subshell);
        let mut label = match self.element_symbol(shell.atomic_number) {
            Some(symbol) => format!("{}-{}", symbol, notation),
            None => notation,
        };
        if let Some(energy) = self.nominal_binding_energy_ev(shell) {
            label.push_str(&format!(" {:.*} eV", self.energy_decimals, energy));
        }
        label
    }
}
