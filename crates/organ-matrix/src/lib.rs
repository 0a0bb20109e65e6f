#![forbid(unsafe_code)]

//! `organ-matrix` computes the wiring of a 61-key organ keyboard switch matrix and renders it.
//!
//! Every key is wired to one input (scan) wire and one diode-isolated output wire. From that
//! assignment the crate produces:
//! - an SVG schematic (`layout` computes geometry, `svg` emits markup)
//! - a MIDI note lookup table indexed by `[input - 1][output - 1]` (`midi`)

pub mod assignment;
pub mod config;
pub mod layout;
pub mod midi;
pub mod model;
pub mod palette;
pub mod svg;

pub use assignment::{Key, Matrix, input_wire, note_name, output_wire};
pub use config::MatrixConfig;
pub use layout::layout_schematic;
pub use midi::{MIDI_BASE, MidiGrid};
pub use model::SchematicLayout;
pub use svg::{SvgRenderOptions, render_schematic_svg};

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid matrix: {message}")]
    InvalidMatrix { message: String },
    #[error("MIDI note {note} is out of range (base {base}, {key_count} keys)")]
    MidiOutOfRange {
        base: u8,
        key_count: usize,
        note: usize,
    },
    #[error("configuration JSON error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lays out and renders the schematic for `matrix` in one step.
pub fn generate_schematic_svg(
    matrix: &Matrix,
    options: &SvgRenderOptions,
) -> (SchematicLayout, String) {
    let layout = layout_schematic(matrix);
    let svg = render_schematic_svg(&layout, options);
    (layout, svg)
}

/// Writes a fully rendered document to `path` in a single call.
pub fn write_svg(path: impl AsRef<Path>, svg: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, svg).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = svg.len(), "wrote schematic");
    Ok(())
}
