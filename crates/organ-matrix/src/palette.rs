//! Fixed wire colors. Wire numbers past the end of a palette wrap around.

pub const INPUT_WIRE_COLORS: [&str; 6] = [
    "#e6194b", // red
    "#3cb44b", // green
    "#4363d8", // blue
    "#f58231", // orange
    "#911eb4", // purple
    "#42d4f4", // cyan
];

pub const OUTPUT_WIRE_COLORS: [&str; 11] = [
    "#800000", // maroon
    "#e6194b", // red
    "#f58231", // orange
    "#bfef45", // lime
    "#3cb44b", // green
    "#42d4f4", // cyan
    "#4363d8", // blue
    "#911eb4", // purple
    "#f032e6", // magenta
    "#a9a9a9", // grey
    "#469990", // teal
];

/// Color of 1-based input wire `wire`.
pub fn input_wire_color(wire: usize) -> &'static str {
    cycle(&INPUT_WIRE_COLORS, wire)
}

/// Color of 1-based output wire `wire`.
pub fn output_wire_color(wire: usize) -> &'static str {
    cycle(&OUTPUT_WIRE_COLORS, wire)
}

fn cycle(palette: &[&'static str], wire: usize) -> &'static str {
    palette[wire.saturating_sub(1) % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_are_one_based() {
        assert_eq!(input_wire_color(1), "#e6194b");
        assert_eq!(input_wire_color(6), "#42d4f4");
        assert_eq!(output_wire_color(1), "#800000");
        assert_eq!(output_wire_color(11), "#469990");
    }

    #[test]
    fn palettes_wrap() {
        assert_eq!(input_wire_color(7), input_wire_color(1));
        assert_eq!(output_wire_color(12), output_wire_color(1));
    }
}
