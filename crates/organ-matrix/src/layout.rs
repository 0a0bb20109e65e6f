use crate::assignment::{Key, Matrix};
use crate::model::{
    BusLayout, DiodeLayout, KeyUnitLayout, SchematicLayout, SwitchLayout, VerticalSegment,
};
use crate::palette::{input_wire_color, output_wire_color};

pub const UNIT_SPACING: f64 = 45.0;
pub const UNIT_WIDTH: f64 = 30.0;
pub const MARGIN_LEFT: f64 = 30.0;
pub const MARGIN_TOP: f64 = 100.0;
pub const MARGIN_BOTTOM: f64 = 160.0;

// Offsets inside a key unit, relative to the key group origin.
pub const LABEL_Y: f64 = 0.0;
pub const WIRE_IN_TOP: f64 = 15.0;
pub const WIRE_IN_BOTTOM: f64 = 35.0;
pub const SWITCH_TOP: f64 = 35.0;
pub const SWITCH_BOTTOM: f64 = 70.0;
pub const WIRE_MID_TOP: f64 = 70.0;
pub const WIRE_MID_BOTTOM: f64 = 85.0;
pub const DIODE_TOP: f64 = 85.0;
pub const DIODE_BOTTOM: f64 = 115.0;
pub const WIRE_OUT_TOP: f64 = 115.0;
pub const WIRE_OUT_BOTTOM: f64 = 135.0;
pub const UNIT_HEIGHT: f64 = 140.0;

pub const INPUT_BUS_START_Y: f64 = 10.0;
pub const INPUT_BUS_SPACING: f64 = 12.0;
pub const OUTPUT_BUS_SPACING: f64 = 12.0;
/// Gap between the bottom of the key units and the first output bus.
pub const OUTPUT_BUS_GAP: f64 = 15.0;

const BUS_LEFT_INSET: f64 = 10.0;
const BUS_RIGHT_OVERHANG: f64 = 15.0;
const BUS_LABEL_GAP: f64 = 5.0;
const BUS_LABEL_BASELINE: f64 = 4.0;
const SWITCH_ARM_DX: f64 = 8.0;
const SWITCH_ARM_SHORTFALL: f64 = 5.0;
const DIODE_HALF_WIDTH: f64 = 8.0;
const DIODE_CLEARANCE: f64 = 6.0;

pub fn key_center_x(index: usize) -> f64 {
    MARGIN_LEFT + (index as f64) * UNIT_SPACING + UNIT_WIDTH / 2.0
}

pub fn input_bus_y(wire: usize) -> f64 {
    INPUT_BUS_START_Y + ((wire - 1) as f64) * INPUT_BUS_SPACING
}

pub fn output_bus_y(wire: usize, key_group_y: f64) -> f64 {
    key_group_y + UNIT_HEIGHT + OUTPUT_BUS_GAP + ((wire - 1) as f64) * OUTPUT_BUS_SPACING
}

pub fn canvas_width(key_count: usize) -> f64 {
    MARGIN_LEFT * 2.0 + (key_count.saturating_sub(1) as f64) * UNIT_SPACING + UNIT_WIDTH
}

pub fn canvas_height() -> f64 {
    MARGIN_TOP + UNIT_HEIGHT + MARGIN_BOTTOM
}

fn bus_left() -> f64 {
    MARGIN_LEFT - BUS_LEFT_INSET
}

fn bus(label: String, wire: usize, color: &str, x2: f64, y: f64) -> BusLayout {
    let x1 = bus_left();
    BusLayout {
        wire,
        label,
        color: color.to_string(),
        x1,
        x2,
        y,
        label_x: x1 - BUS_LABEL_GAP,
        label_y: y + BUS_LABEL_BASELINE,
    }
}

fn layout_key_unit(key: &Key, key_group_y: f64) -> KeyUnitLayout {
    let cx = key_center_x(key.index);
    let gy = key_group_y;
    let diode_top = gy + DIODE_TOP;
    let diode_bar = diode_top + (DIODE_BOTTOM - DIODE_TOP - DIODE_CLEARANCE);

    KeyUnitLayout {
        index: key.index,
        note: key.note.clone(),
        cx,
        input_wire: key.input_wire,
        output_wire: key.output_wire,
        input_color: input_wire_color(key.input_wire).to_string(),
        output_color: output_wire_color(key.output_wire).to_string(),
        label_y: gy + LABEL_Y,
        input_tap: VerticalSegment {
            y1: input_bus_y(key.input_wire),
            y2: gy + WIRE_IN_TOP,
        },
        wire_in: VerticalSegment {
            y1: gy + WIRE_IN_TOP,
            y2: gy + WIRE_IN_BOTTOM,
        },
        switch: SwitchLayout {
            top_y: gy + SWITCH_TOP,
            bottom_y: gy + SWITCH_BOTTOM,
            arm_x: cx + SWITCH_ARM_DX,
            arm_y: gy + SWITCH_BOTTOM - SWITCH_ARM_SHORTFALL,
        },
        wire_mid: VerticalSegment {
            y1: gy + WIRE_MID_TOP,
            y2: gy + WIRE_MID_BOTTOM,
        },
        diode: DiodeLayout {
            top_y: diode_top,
            bar_y: diode_bar,
            left_x: cx - DIODE_HALF_WIDTH,
            right_x: cx + DIODE_HALF_WIDTH,
        },
        output_tap: VerticalSegment {
            y1: gy + WIRE_OUT_TOP,
            y2: output_bus_y(key.output_wire, gy),
        },
    }
}

/// Computes the geometry of the whole schematic. Buses and units are in ascending wire/key
/// order, which is also their left-to-right (and document) order.
pub fn layout_schematic(matrix: &Matrix) -> SchematicLayout {
    let key_count = matrix.key_count();
    let key_group_y = MARGIN_TOP;
    let bus_right = key_center_x(key_count - 1) + BUS_RIGHT_OVERHANG;

    let input_buses = (1..=matrix.input_wire_count())
        .map(|wire| {
            bus(
                format!("IN{wire}"),
                wire,
                input_wire_color(wire),
                bus_right,
                input_bus_y(wire),
            )
        })
        .collect();

    let units = matrix
        .keys()
        .map(|key| layout_key_unit(&key, key_group_y))
        .collect();

    // Output buses stop at the last key that taps them.
    let output_buses = (1..=matrix.output_wire_count())
        .filter_map(|wire| {
            let last = matrix.last_key_on_output(wire)?;
            Some(bus(
                format!("OUT{wire}"),
                wire,
                output_wire_color(wire),
                key_center_x(last),
                output_bus_y(wire, key_group_y),
            ))
        })
        .collect();

    let layout = SchematicLayout {
        key_count,
        width: canvas_width(key_count),
        height: canvas_height(),
        key_group_y,
        input_buses,
        units,
        output_buses,
    };
    tracing::debug!(
        keys = key_count,
        width = layout.width,
        height = layout.height,
        "laid out schematic"
    );
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas() {
        let layout = layout_schematic(&Matrix::default());
        assert_eq!(layout.width, 2790.0);
        assert_eq!(layout.height, 400.0);
        assert_eq!(layout.units.len(), 61);
        assert_eq!(layout.input_buses.len(), 6);
        assert_eq!(layout.output_buses.len(), 11);
    }

    #[test]
    fn unit_offsets_span_the_unit_height() {
        assert_eq!(WIRE_IN_BOTTOM, SWITCH_TOP);
        assert_eq!(SWITCH_BOTTOM, WIRE_MID_TOP);
        assert_eq!(WIRE_MID_BOTTOM, DIODE_TOP);
        assert_eq!(DIODE_BOTTOM, WIRE_OUT_TOP);
        assert!(WIRE_OUT_BOTTOM <= UNIT_HEIGHT);
    }

    #[test]
    fn input_buses_span_all_keys() {
        let layout = layout_schematic(&Matrix::default());
        for (i, bus) in layout.input_buses.iter().enumerate() {
            assert_eq!(bus.wire, i + 1);
            assert_eq!(bus.x1, 20.0);
            assert_eq!(bus.x2, 2760.0);
            assert_eq!(bus.y, 10.0 + 12.0 * i as f64);
            assert_eq!(bus.label_x, 15.0);
        }
    }

    #[test]
    fn output_buses_are_trimmed_to_their_last_key() {
        let layout = layout_schematic(&Matrix::default());
        let first = &layout.output_buses[0];
        assert_eq!(first.label, "OUT1");
        assert_eq!(first.x2, 45.0);
        assert_eq!(first.y, 255.0);
        let last = layout.output_buses.last().unwrap();
        assert_eq!(last.label, "OUT11");
        assert_eq!(last.x2, 2745.0);
        assert_eq!(last.y, 375.0);
        assert_eq!(layout.output_buses[8].x2, 2205.0);
    }

    #[test]
    fn output_taps_land_on_their_bus() {
        let layout = layout_schematic(&Matrix::default());
        for unit in &layout.units {
            let bus = &layout.output_buses[unit.output_wire - 1];
            assert_eq!(unit.output_tap.y2, bus.y);
            assert!(unit.cx <= bus.x2);
            let input = &layout.input_buses[unit.input_wire - 1];
            assert_eq!(unit.input_tap.y1, input.y);
        }
    }

    #[test]
    fn first_unit_geometry() {
        let layout = layout_schematic(&Matrix::default());
        let u = &layout.units[0];
        assert_eq!(u.note, "C2");
        assert_eq!(u.cx, 45.0);
        assert_eq!(u.switch.arm_x, 53.0);
        assert_eq!(u.switch.arm_y, 165.0);
        assert_eq!(u.diode.top_y, 185.0);
        assert_eq!(u.diode.bar_y, 209.0);
        assert_eq!(u.diode.left_x, 37.0);
        assert_eq!(u.output_tap.y1, 215.0);
        assert_eq!(u.output_tap.y2, 255.0);
    }

    #[test]
    fn width_scales_with_key_count() {
        for n in [1usize, 12, 25, 61] {
            let m = Matrix::new(n, 6, 2).unwrap();
            let layout = layout_schematic(&m);
            assert_eq!(layout.width, 2.0 * 30.0 + (n as f64 - 1.0) * 45.0 + 30.0);
            assert_eq!(layout.units.len(), n);
            assert_eq!(layout.output_buses.len(), m.output_wire_count());
        }
    }
}
