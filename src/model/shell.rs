// src/model/shell.rs

//! One atomic sub-shell and its EELS shorthand.
//!
//! shell_number is the principal quantum number n (K=1, L=2, M=3, ...).
//! subshell_index is the EELS subshell ordinal:
//! K = 1s, L1 = 2s, L2 = 2p1/2, L3 = 2p3/2, M1 = 3s, M2 = 3p1/2, M3 = 3p3/2,
//! M4 = 3d3/2, M5 = 3d5/2, etc. Index 0 is the K shell, which has no subshell.

use std::fmt;

use crate::error::{EelsError, Result};

/// Azimuthal quantum number per subshell index. Index 0 (K) has none.
const AZIMUTHAL_TABLE: [Option<u32>; 10] = [
    None,
    Some(0),
    Some(1),
    Some(1),
    Some(2),
    Some(2),
    Some(3),
    Some(3),
    Some(4),
    Some(4),
];

/// Indexed by azimuthal quantum number. 'a' stands in at l=0.
const SUBSHELL_LABELS: [&str; 8] = ["a", "s", "d", "f", "g", "h", "i", "j"];

/// Spin numerator (over 2) per subshell index, independent of AZIMUTHAL_TABLE.
const SPIN_NUMERATORS: [Option<u32>; 10] = [
    None,
    Some(1),
    Some(1),
    Some(3),
    Some(3),
    Some(5),
    Some(5),
    Some(7),
    Some(7),
    Some(9),
];

/// Half-integer total angular momentum j = numerator / 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinFraction {
    numerator: u32,
}

impl SpinFraction {
    pub const DENOMINATOR: u32 = 2;

    pub fn new(numerator: u32) -> Self {
        Self { numerator }
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        Self::DENOMINATOR
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / Self::DENOMINATOR as f64
    }
}

impl fmt::Display for SpinFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, Self::DENOMINATOR)
    }
}

/// A coordinate into the edge catalog: element + shell + subshell.
///
/// Construction does not validate; the derived attributes report
/// `InvalidSubshell` when the index is outside the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElectronShell {
    pub atomic_number: u32,
    pub shell_number: u32,
    pub subshell_index: u32,
}

impl ElectronShell {
    pub fn new(atomic_number: u32, shell_number: u32, subshell_index: u32) -> Self {
        Self {
            atomic_number,
            shell_number,
            subshell_index,
        }
    }

    /// Parses `K`, `L1`, `M4`, ... (letter is case-insensitive).
    ///
    /// A `K` letter always gives subshell 0, whatever follows it.
    pub fn from_eels_notation(atomic_number: u32, notation: &str) -> Result<Self> {
        let invalid = |reason| EelsError::InvalidNotation {
            notation: notation.to_string(),
            reason,
        };

        let mut chars = notation.chars();
        let letter = chars
            .next()
            .ok_or_else(|| invalid("empty notation"))?
            .to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || letter < 'K' {
            return Err(invalid("shell letter must be K or later"));
        }
        let shell_number = letter as u32 - 'K' as u32 + 1;

        if letter == 'K' {
            return Ok(Self::new(atomic_number, shell_number, 0));
        }

        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(invalid("missing subshell index"));
        }
        // str::parse would also take a leading '+'
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("subshell index must be a positive integer"));
        }
        let subshell_index: u32 = rest
            .parse()
            .map_err(|_| invalid("subshell index out of range"))?;
        if subshell_index == 0 {
            return Err(invalid("subshell index must be a positive integer"));
        }

        Ok(Self::new(atomic_number, shell_number, subshell_index))
    }

    pub fn is_k_shell(&self) -> bool {
        self.shell_number == 1
    }

    /// Shell letter, plus the subshell digits when asked for (never for K).
    pub fn eels_notation(&self, include_subshell: bool) -> String {
        let code = ('K' as u32 - 1).saturating_add(self.shell_number);
        let mut notation = char::from_u32(code).unwrap_or('?').to_string();
        if !self.is_k_shell() && include_subshell {
            notation.push_str(&self.subshell_index.to_string());
        }
        notation
    }

    pub fn azimuthal_quantum_number(&self) -> Result<u32> {
        AZIMUTHAL_TABLE
            .get(self.subshell_index as usize)
            .copied()
            .flatten()
            .ok_or(EelsError::InvalidSubshell {
                subshell_index: self.subshell_index,
            })
    }

    pub fn subshell_label(&self) -> Result<&'static str> {
        let l = self.azimuthal_quantum_number()?;
        Ok(SUBSHELL_LABELS[l as usize])
    }

    pub fn spin_fraction(&self) -> Result<SpinFraction> {
        SPIN_NUMERATORS
            .get(self.subshell_index as usize)
            .copied()
            .flatten()
            .map(SpinFraction::new)
            .ok_or(EelsError::InvalidSubshell {
                subshell_index: self.subshell_index,
            })
    }
}
