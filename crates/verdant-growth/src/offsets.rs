//! Fixed relative probe positions around a growable.
//!
//! Order matters: scans stop at the first match.

/// Horizontal distance to the blocks checked for river water.
pub const IRRIGATION_REACH: i32 = 5;

/// Where an artificial light source may sit: up, west, east, north, south.
pub const GREENHOUSE_LIGHT_OFFSETS: [(i32, i32, i32); 5] = [
    (0, 1, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// River-water probes one layer down: west, east, north, south.
pub const IRRIGATION_OFFSETS: [(i32, i32, i32); 4] = [
    (-IRRIGATION_REACH, -1, 0),
    (IRRIGATION_REACH, -1, 0),
    (0, -1, -IRRIGATION_REACH),
    (0, -1, IRRIGATION_REACH),
];
