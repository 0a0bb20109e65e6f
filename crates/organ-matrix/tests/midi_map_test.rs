use organ_matrix::{MIDI_BASE, Matrix, MidiGrid, input_wire};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn default_map_matches_golden() {
    let expected = std::fs::read_to_string(fixture("midi_note_map.txt")).expect("fixture");
    let grid = MidiGrid::build(&Matrix::default(), MIDI_BASE).expect("grid");
    assert_eq!(grid.to_c_rows(), expected);
}

#[test]
fn last_row_ends_with_highest_key_on_input_six() {
    let grid = MidiGrid::build(&Matrix::default(), MIDI_BASE).expect("grid");
    let highest = (0..61).filter(|&i| input_wire(i) == 6).max().expect("key on IN6");
    let last_row = grid.rows().last().expect("rows");
    let last_value = last_row.iter().rev().find(|&&v| v != 0).copied();
    assert_eq!(last_value, Some(MIDI_BASE + highest as u8));
}

#[test]
fn smaller_keyboard_shrinks_the_grid() {
    let m = Matrix::new(25, 6, 2).expect("matrix");
    let grid = MidiGrid::build(&m, MIDI_BASE).expect("grid");
    assert_eq!(grid.rows().len(), 6);
    assert_eq!(grid.rows()[0].len(), 5);
    assert_eq!(grid.populated_cells(), 25);
    let text = grid.to_c_rows();
    assert!(text.starts_with("  { 36,  42,  48,  54,  60},  // IN1\n"));
}
