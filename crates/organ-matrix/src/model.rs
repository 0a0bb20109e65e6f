use serde::{Deserialize, Serialize};

/// A vertical wire segment at a key's center line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalSegment {
    pub y1: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusLayout {
    pub wire: usize,
    pub label: String,
    pub color: String,
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// Normally-open switch: two terminal dots and an arm that stops short of the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchLayout {
    pub top_y: f64,
    pub bottom_y: f64,
    pub arm_x: f64,
    pub arm_y: f64,
}

/// Downward-pointing diode: triangle from `top_y` to `bar_y`, cathode bar at `bar_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiodeLayout {
    pub top_y: f64,
    pub bar_y: f64,
    pub left_x: f64,
    pub right_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyUnitLayout {
    pub index: usize,
    pub note: String,
    pub cx: f64,
    pub input_wire: usize,
    pub output_wire: usize,
    pub input_color: String,
    pub output_color: String,
    pub label_y: f64,
    pub input_tap: VerticalSegment,
    pub wire_in: VerticalSegment,
    pub switch: SwitchLayout,
    pub wire_mid: VerticalSegment,
    pub diode: DiodeLayout,
    pub output_tap: VerticalSegment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicLayout {
    pub key_count: usize,
    pub width: f64,
    pub height: f64,
    pub key_group_y: f64,
    pub input_buses: Vec<BusLayout>,
    pub units: Vec<KeyUnitLayout>,
    pub output_buses: Vec<BusLayout>,
}
