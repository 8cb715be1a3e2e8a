// src/utils/report.rs

use crate::model::{EdgeCatalog, ElectronShell};

/// "  Z  Symbol" listing of every element in the catalog
pub fn element_list(catalog: &EdgeCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<6} {:<8}\n", "Z", "Symbol"));
    out.push_str("---------------\n");
    for (z, symbol) in catalog.elements() {
        out.push_str(&format!("{:<6} {:<8}\n", z, symbol));
    }
    out
}

/// One line per shell: the compact edge-selection menu for an element
pub fn edge_menu(catalog: &EdgeCatalog, atomic_number: u32) -> Option<String> {
    let entries = catalog.edges_list(atomic_number)?;
    if entries.is_empty() {
        return Some("No tabulated edges.\n".to_string());
    }

    let mut out = String::new();
    for (shell, label) in entries {
        out.push_str(&format!("{:<6} {}\n", shell.eels_notation(true), label));
    }
    Some(out)
}

/// Every tabulated subshell with its quantum attributes
pub fn edge_table(catalog: &EdgeCatalog, atomic_number: u32) -> Option<String> {
    let mut edges = catalog.edges(atomic_number)?;
    edges.sort_by(|a, b| {
        (a.0.shell_number, a.0.subshell_index).cmp(&(b.0.shell_number, b.0.subshell_index))
    });

    let symbol = catalog.element_symbol(atomic_number).unwrap_or("?");
    let mut out = String::new();
    out.push_str(&format!("Element: {} (Z={})\n", symbol, atomic_number));
    out.push_str("----------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:>10} {:<4} {:<6} {:<6}\n",
        "Edge", "Energy", "l", "Label", "j"
    ));
    out.push_str("----------------------------------------\n");

    for (shell, energy) in &edges {
        let (l, label, spin) = quantum_columns(shell);
        out.push_str(&format!(
            "{:<8} {:>10.1} {:<4} {:<6} {:<6}\n",
            shell.eels_notation(true),
            energy,
            l,
            label,
            spin
        ));
    }

    if edges.is_empty() {
        out.push_str("No tabulated edges.\n");
    }
    Some(out)
}

/// Multi-line description of one shell, for the `shell` command
pub fn shell_summary(catalog: &EdgeCatalog, shell: &ElectronShell) -> String {
    let (l, label, spin) = quantum_columns(shell);
    let mut out = String::new();
    out.push_str(&format!("Shell:     {}\n", catalog.shell_label(shell)));
    out.push_str(&format!("n:         {}\n", shell.shell_number));
    out.push_str(&format!("Subshell:  {}\n", shell.subshell_index));
    out.push_str(&format!("l:         {}\n", l));
    out.push_str(&format!("Label:     {}\n", label));
    out.push_str(&format!("j:         {}\n", spin));
    match catalog.nominal_binding_energy_ev(shell) {
        Some(energy) => out.push_str(&format!("Energy:    {:.1} eV\n", energy)),
        None => out.push_str("Energy:    not tabulated\n"),
    }
    out
}

// K has no subshell attributes; shown as "-"
fn quantum_columns(shell: &ElectronShell) -> (String, String, String) {
    let l = shell
        .azimuthal_quantum_number()
        .map(|l| l.to_string())
        .unwrap_or_else(|_| "-".into());
    let label = shell
        .subshell_label()
        .map(str::to_string)
        .unwrap_or_else(|_| "-".into());
    let spin = shell
        .spin_fraction()
        .map(|j| j.to_string())
        .unwrap_or_else(|_| "-".into());
    (l, label, spin)
}
