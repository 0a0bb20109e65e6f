use crate::assignment::{Matrix, NUM_INPUT_WIRES, NUM_KEYS, STARTING_OCTAVE};
use crate::midi::MIDI_BASE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-facing knobs, loadable from JSON. Missing fields take the 61-key organ defaults.
///
/// ```json
/// { "keyCount": 49, "startingOctave": 3, "title": "Swell manual" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MatrixConfig {
    pub key_count: usize,
    pub input_wires: usize,
    pub starting_octave: i32,
    pub midi_base: u8,
    pub title: Option<String>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            key_count: NUM_KEYS,
            input_wires: NUM_INPUT_WIRES,
            starting_octave: STARTING_OCTAVE,
            midi_base: MIDI_BASE,
            title: None,
        }
    }
}

impl MatrixConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded matrix config");
        Ok(cfg)
    }

    pub fn matrix(&self) -> Result<Matrix> {
        Matrix::new(self.key_count, self.input_wires, self.starting_octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default_organ() {
        let cfg = MatrixConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, MatrixConfig::default());
        assert_eq!(cfg.matrix().unwrap(), Matrix::default());
    }

    #[test]
    fn partial_overrides() {
        let cfg =
            MatrixConfig::from_json_str(r#"{"keyCount": 49, "title": "Swell"}"#).unwrap();
        assert_eq!(cfg.key_count, 49);
        assert_eq!(cfg.input_wires, NUM_INPUT_WIRES);
        assert_eq!(cfg.title.as_deref(), Some("Swell"));
        assert_eq!(cfg.matrix().unwrap().output_wire_count(), 9);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = MatrixConfig::from_json_str(r#"{"keys": 49}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn invalid_matrix_surfaces_on_validation() {
        let cfg = MatrixConfig::from_json_str(r#"{"inputWires": 0}"#).unwrap();
        assert!(matches!(cfg.matrix(), Err(Error::InvalidMatrix { .. })));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = MatrixConfig::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
