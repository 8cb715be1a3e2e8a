// src/main.rs
use eels_edges::model::{EdgeCatalog, ElectronShell};
use eels_edges::periodic_table;
use eels_edges::utils::{logger, report};
use std::process::ExitCode;

const USAGE: &str = "Usage:
  eels-edges elements
  eels-edges edges <Z|Symbol>
  eels-edges table <Z|Symbol>
  eels-edges shell <Z|Symbol> <notation>";

fn main() -> ExitCode {
    let verbose = std::env::var_os("EELS_EDGES_DEBUG").is_some();
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    let _ = logger::init(level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(msg) => {
            log::error!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    let table = periodic_table::global().map_err(|e| e.to_string())?;
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();

    match argv.as_slice() {
        ["elements"] => Ok(report::element_list(table)),
        ["edges", element] => {
            let z = resolve_element(table, element)?;
            report::edge_menu(table, z).ok_or_else(|| unknown(element))
        }
        ["table", element] => {
            let z = resolve_element(table, element)?;
            report::edge_table(table, z).ok_or_else(|| unknown(element))
        }
        ["shell", element, notation] => {
            let z = resolve_element(table, element)?;
            let shell = ElectronShell::from_eels_notation(z, notation).map_err(|e| e.to_string())?;
            Ok(report::shell_summary(table, &shell))
        }
        _ => Err(USAGE.to_string()),
    }
}

/// Accepts an atomic number or a symbol ("26", "Fe", "fe")
fn resolve_element(table: &EdgeCatalog, arg: &str) -> Result<u32, String> {
    match arg.parse::<u32>() {
        Ok(z) => Ok(z),
        Err(_) => table.element_by_symbol(arg).ok_or_else(|| unknown(arg)),
    }
}

fn unknown(element: &str) -> String {
    format!("Unknown element: {}", element)
}
