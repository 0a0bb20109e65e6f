//! Key → (input wire, output wire) assignment.
//!
//! Input wires are assigned round-robin over the key index. Output wires group keys in
//! consecutive runs whose length equals the number of input wires, so each (input, output) pair
//! is used by at most one key. The lowest key sits alone on output wire 1.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const NUM_KEYS: usize = 61;
pub const NUM_INPUT_WIRES: usize = 6;
pub const NUM_OUTPUT_WIRES: usize = 11;
pub const STARTING_OCTAVE: i32 = 2;
/// Largest keyboard (and widest input scan) a matrix may describe: one key per MIDI note.
pub const MAX_KEYS: usize = 128;

pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Input wire (1-based) of key `index` on the default 61-key matrix.
pub fn input_wire(index: usize) -> usize {
    (index % NUM_INPUT_WIRES) + 1
}

/// Output wire (1-based) of key `index` on the default 61-key matrix.
pub fn output_wire(index: usize) -> usize {
    grouped_output_wire(index, NUM_INPUT_WIRES)
}

/// Note name of key `index`, e.g. `C2` for the lowest key.
pub fn note_name(index: usize) -> String {
    note_name_from(index, STARTING_OCTAVE)
}

fn grouped_output_wire(index: usize, group: usize) -> usize {
    if index == 0 {
        1
    } else {
        ((index - 1) / group) + 2
    }
}

fn note_name_from(index: usize, starting_octave: i32) -> String {
    let note = NOTE_NAMES[index % 12];
    let octave = starting_octave + (index / 12) as i32;
    format!("{note}{octave}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub index: usize,
    pub note: String,
    pub input_wire: usize,
    pub output_wire: usize,
}

/// Dimensions of a switch matrix. `Matrix::default()` is the 61-key, 6×11 organ keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Matrix {
    key_count: usize,
    input_wires: usize,
    starting_octave: i32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self {
            key_count: NUM_KEYS,
            input_wires: NUM_INPUT_WIRES,
            starting_octave: STARTING_OCTAVE,
        }
    }
}

impl Matrix {
    pub fn new(key_count: usize, input_wires: usize, starting_octave: i32) -> Result<Self> {
        if key_count == 0 {
            return Err(Error::InvalidMatrix {
                message: "key count must be at least 1".to_string(),
            });
        }
        if key_count > MAX_KEYS {
            return Err(Error::InvalidMatrix {
                message: format!("key count {key_count} exceeds {MAX_KEYS}"),
            });
        }
        if input_wires == 0 {
            return Err(Error::InvalidMatrix {
                message: "input wire count must be at least 1".to_string(),
            });
        }
        if input_wires > MAX_KEYS {
            return Err(Error::InvalidMatrix {
                message: format!("input wire count {input_wires} exceeds {MAX_KEYS}"),
            });
        }
        Ok(Self {
            key_count,
            input_wires,
            starting_octave,
        })
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn input_wire_count(&self) -> usize {
        self.input_wires
    }

    /// Number of output wires actually used; 11 for the default matrix.
    pub fn output_wire_count(&self) -> usize {
        self.output_wire(self.key_count - 1)
    }

    pub fn starting_octave(&self) -> i32 {
        self.starting_octave
    }

    pub fn input_wire(&self, index: usize) -> usize {
        (index % self.input_wires) + 1
    }

    pub fn output_wire(&self, index: usize) -> usize {
        grouped_output_wire(index, self.input_wires)
    }

    pub fn note_name(&self, index: usize) -> String {
        note_name_from(index, self.starting_octave)
    }

    pub fn key(&self, index: usize) -> Key {
        Key {
            index,
            note: self.note_name(index),
            input_wire: self.input_wire(index),
            output_wire: self.output_wire(index),
        }
    }

    /// All keys in ascending index order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        (0..self.key_count).map(|i| self.key(i))
    }

    /// Highest key index wired to output `wire`, if any key uses it.
    pub fn last_key_on_output(&self, wire: usize) -> Option<usize> {
        if wire == 0 || wire > self.output_wire_count() {
            return None;
        }
        if wire == 1 {
            return Some(0);
        }
        Some(((wire - 1) * self.input_wires).min(self.key_count - 1))
    }
}
