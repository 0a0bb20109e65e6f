//! MIDI note lookup table for the firmware scan loop.
//!
//! `grid[input - 1][output - 1]` holds the MIDI note of the key wired to that pair, or `0`.

use crate::assignment::Matrix;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt::Write as _;

/// MIDI note of key 0 (C2).
pub const MIDI_BASE: u8 = 36;

const MIDI_NOTE_MAX: usize = 127;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MidiGrid {
    rows: Vec<Vec<u8>>,
}

impl MidiGrid {
    pub fn build(matrix: &Matrix, base: u8) -> Result<Self> {
        let highest = (base as usize).saturating_add(matrix.key_count() - 1);
        if highest > MIDI_NOTE_MAX {
            return Err(Error::MidiOutOfRange {
                base,
                key_count: matrix.key_count(),
                note: highest,
            });
        }

        let mut rows = vec![vec![0u8; matrix.output_wire_count()]; matrix.input_wire_count()];
        for key in matrix.keys() {
            // Bounded by the range check above.
            rows[key.input_wire - 1][key.output_wire - 1] = base + key.index as u8;
        }
        tracing::debug!(
            inputs = rows.len(),
            outputs = matrix.output_wire_count(),
            base,
            "built MIDI grid"
        );
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Note at 1-based `(input, output)`, `None` outside the grid.
    pub fn note(&self, input: usize, output: usize) -> Option<u8> {
        self.rows
            .get(input.checked_sub(1)?)?
            .get(output.checked_sub(1)?)
            .copied()
    }

    pub fn populated_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Renders the grid as the body of a C array initializer, one row per input wire.
    pub fn to_c_rows(&self) -> String {
        let mut out = String::new();
        let last = self.rows.len().saturating_sub(1);
        for (row_idx, row) in self.rows.iter().enumerate() {
            let comma = if row_idx < last { "," } else { " " };
            let vals = row
                .iter()
                .map(|v| format!("{v:3}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(&mut out, "  {{{vals}}}{comma}  // IN{}", row_idx + 1);
        }
        out
    }
}
