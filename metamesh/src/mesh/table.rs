//! Marching cubes case table
//!
//! Maps each [`CellMask`] to the triangles which approximate the surface within
//! that cube, given as triples of [`Edge`]s.  The surface passes through each
//! edge at the field's zero crossing.
//!
//! This is the classic Lorensen-Cline table, re-indexed to the bit-packed
//! corner and edge numbering from [`types`](super::types).  Each triangle is
//! wound counter-clockwise when viewed from the negative (outside) side, so
//! its face normal points from positive to negative field values.  Ambiguous
//! cases are resolved the same way as in the reference table; as a result, a
//! mask and its complement don't always produce the same number of triangles.
use super::types::{CellMask, Edge};

/// Returns the number of triangles for the given mask, in the range 0-5
pub fn triangle_count(mask: CellMask) -> usize {
    CELL_TO_TRIANGLES[mask.index()].len()
}

/// Returns the triangles for the given mask, as triples of edges
///
/// The slice has exactly [`triangle_count(mask)`](triangle_count) items.
pub fn triangles(mask: CellMask) -> &'static [[Edge; 3]] {
    CELL_TO_TRIANGLES[mask.index()]
}

/// Maximum number of triangles emitted by a single cube
pub const MAX_TRIANGLES: usize = 5;

// Every case fits within `MAX_TRIANGLES`
const _: () = {
    let mut i = 0;
    while i < CELL_TO_TRIANGLES.len() {
        assert!(CELL_TO_TRIANGLES[i].len() <= MAX_TRIANGLES);
        i += 1;
    }
};

const fn t(a: u8, b: u8, c: u8) -> [Edge; 3] {
    [Edge::new(a), Edge::new(b), Edge::new(c)]
}

#[rustfmt::skip]
const CELL_TO_TRIANGLES: [&[[Edge; 3]]; 256] = [
    /* 0x00 */ &[],
    /* 0x01 */ &[t(0, 4, 8)],
    /* 0x02 */ &[t(0, 9, 6)],
    /* 0x03 */ &[t(6, 4, 8), t(9, 6, 8)],
    /* 0x04 */ &[t(4, 1, 10)],
    /* 0x05 */ &[t(0, 1, 10), t(8, 0, 10)],
    /* 0x06 */ &[t(6, 0, 9), t(1, 10, 4)],
    /* 0x07 */ &[t(6, 1, 10), t(6, 10, 9), t(9, 10, 8)],
    /* 0x08 */ &[t(6, 11, 1)],
    /* 0x09 */ &[t(0, 4, 8), t(6, 11, 1)],
    /* 0x0a */ &[t(9, 11, 1), t(0, 9, 1)],
    /* 0x0b */ &[t(1, 4, 8), t(1, 8, 11), t(11, 8, 9)],
    /* 0x0c */ &[t(4, 6, 11), t(10, 4, 11)],
    /* 0x0d */ &[t(0, 6, 11), t(0, 11, 8), t(8, 11, 10)],
    /* 0x0e */ &[t(4, 0, 9), t(4, 9, 10), t(10, 9, 11)],
    /* 0x0f */ &[t(9, 11, 8), t(11, 10, 8)],
    /* 0x10 */ &[t(2, 8, 5)],
    /* 0x11 */ &[t(2, 0, 4), t(5, 2, 4)],
    /* 0x12 */ &[t(0, 9, 6), t(8, 5, 2)],
    /* 0x13 */ &[t(2, 9, 6), t(2, 6, 5), t(5, 6, 4)],
    /* 0x14 */ &[t(8, 5, 2), t(4, 1, 10)],
    /* 0x15 */ &[t(10, 5, 2), t(10, 2, 1), t(1, 2, 0)],
    /* 0x16 */ &[t(9, 6, 0), t(8, 5, 2), t(1, 10, 4)],
    /* 0x17 */ &[t(2, 10, 5), t(9, 10, 2), t(9, 1, 10), t(9, 6, 1)],
    /* 0x18 */ &[t(6, 11, 1), t(8, 5, 2)],
    /* 0x19 */ &[t(4, 5, 2), t(4, 2, 0), t(6, 11, 1)],
    /* 0x1a */ &[t(9, 11, 1), t(9, 1, 0), t(8, 5, 2)],
    /* 0x1b */ &[t(1, 9, 11), t(1, 5, 9), t(1, 4, 5), t(5, 2, 9)],
    /* 0x1c */ &[t(4, 6, 11), t(4, 11, 10), t(5, 2, 8)],
    /* 0x1d */ &[t(6, 11, 10), t(6, 10, 2), t(6, 2, 0), t(5, 2, 10)],
    /* 0x1e */ &[t(2, 8, 5), t(9, 10, 0), t(9, 11, 10), t(10, 4, 0)],
    /* 0x1f */ &[t(2, 10, 5), t(2, 9, 10), t(9, 11, 10)],
    /* 0x20 */ &[t(9, 2, 7)],
    /* 0x21 */ &[t(9, 2, 7), t(0, 4, 8)],
    /* 0x22 */ &[t(0, 2, 7), t(6, 0, 7)],
    /* 0x23 */ &[t(8, 2, 7), t(8, 7, 4), t(4, 7, 6)],
    /* 0x24 */ &[t(9, 2, 7), t(1, 10, 4)],
    /* 0x25 */ &[t(0, 1, 10), t(0, 10, 8), t(2, 7, 9)],
    /* 0x26 */ &[t(0, 2, 7), t(0, 7, 6), t(1, 10, 4)],
    /* 0x27 */ &[t(1, 7, 6), t(1, 8, 7), t(1, 10, 8), t(2, 7, 8)],
    /* 0x28 */ &[t(6, 11, 1), t(9, 2, 7)],
    /* 0x29 */ &[t(4, 8, 0), t(6, 11, 1), t(2, 7, 9)],
    /* 0x2a */ &[t(7, 11, 1), t(7, 1, 2), t(2, 1, 0)],
    /* 0x2b */ &[t(1, 7, 11), t(4, 7, 1), t(4, 2, 7), t(4, 8, 2)],
    /* 0x2c */ &[t(11, 10, 4), t(11, 4, 6), t(9, 2, 7)],
    /* 0x2d */ &[t(2, 7, 9), t(0, 6, 8), t(8, 6, 11), t(8, 11, 10)],
    /* 0x2e */ &[t(7, 0, 2), t(7, 10, 0), t(7, 11, 10), t(10, 4, 0)],
    /* 0x2f */ &[t(7, 8, 2), t(7, 11, 8), t(11, 10, 8)],
    /* 0x30 */ &[t(9, 8, 5), t(7, 9, 5)],
    /* 0x31 */ &[t(9, 0, 4), t(9, 4, 7), t(7, 4, 5)],
    /* 0x32 */ &[t(0, 8, 5), t(0, 5, 6), t(6, 5, 7)],
    /* 0x33 */ &[t(6, 4, 7), t(4, 5, 7)],
    /* 0x34 */ &[t(5, 7, 9), t(5, 9, 8), t(4, 1, 10)],
    /* 0x35 */ &[t(9, 5, 7), t(9, 1, 5), t(9, 0, 1), t(1, 10, 5)],
    /* 0x36 */ &[t(1, 10, 4), t(0, 8, 6), t(6, 8, 5), t(6, 5, 7)],
    /* 0x37 */ &[t(10, 6, 1), t(10, 5, 6), t(5, 7, 6)],
    /* 0x38 */ &[t(9, 8, 5), t(9, 5, 7), t(11, 1, 6)],
    /* 0x39 */ &[t(11, 1, 6), t(9, 0, 7), t(7, 0, 4), t(7, 4, 5)],
    /* 0x3a */ &[t(8, 1, 0), t(8, 7, 1), t(8, 5, 7), t(11, 1, 7)],
    /* 0x3b */ &[t(1, 7, 11), t(1, 4, 7), t(4, 5, 7)],
    /* 0x3c */ &[t(9, 8, 7), t(8, 5, 7), t(11, 4, 6), t(11, 10, 4)],
    /* 0x3d */ &[t(7, 0, 5), t(7, 9, 0), t(5, 0, 10), t(6, 11, 0), t(10, 0, 11)],
    /* 0x3e */ &[t(10, 0, 11), t(10, 4, 0), t(11, 0, 7), t(8, 5, 0), t(7, 0, 5)],
    /* 0x3f */ &[t(10, 7, 11), t(5, 7, 10)],
    /* 0x40 */ &[t(5, 10, 3)],
    /* 0x41 */ &[t(4, 8, 0), t(10, 3, 5)],
    /* 0x42 */ &[t(0, 9, 6), t(10, 3, 5)],
    /* 0x43 */ &[t(8, 9, 6), t(8, 6, 4), t(10, 3, 5)],
    /* 0x44 */ &[t(5, 4, 1), t(3, 5, 1)],
    /* 0x45 */ &[t(5, 8, 0), t(5, 0, 3), t(3, 0, 1)],
    /* 0x46 */ &[t(1, 3, 5), t(1, 5, 4), t(0, 9, 6)],
    /* 0x47 */ &[t(6, 1, 3), t(6, 3, 8), t(6, 8, 9), t(8, 3, 5)],
    /* 0x48 */ &[t(11, 1, 6), t(3, 5, 10)],
    /* 0x49 */ &[t(6, 11, 1), t(4, 8, 0), t(3, 5, 10)],
    /* 0x4a */ &[t(1, 0, 9), t(1, 9, 11), t(3, 5, 10)],
    /* 0x4b */ &[t(3, 5, 10), t(1, 4, 11), t(11, 4, 8), t(11, 8, 9)],
    /* 0x4c */ &[t(11, 3, 5), t(11, 5, 6), t(6, 5, 4)],
    /* 0x4d */ &[t(11, 3, 5), t(6, 11, 5), t(6, 5, 8), t(6, 8, 0)],
    /* 0x4e */ &[t(0, 5, 4), t(0, 11, 5), t(0, 9, 11), t(3, 5, 11)],
    /* 0x4f */ &[t(5, 11, 3), t(5, 8, 11), t(8, 9, 11)],
    /* 0x50 */ &[t(3, 2, 8), t(10, 3, 8)],
    /* 0x51 */ &[t(4, 10, 3), t(4, 3, 0), t(0, 3, 2)],
    /* 0x52 */ &[t(8, 10, 3), t(8, 3, 2), t(9, 6, 0)],
    /* 0x53 */ &[t(9, 3, 2), t(9, 4, 3), t(9, 6, 4), t(10, 3, 4)],
    /* 0x54 */ &[t(8, 4, 1), t(8, 1, 2), t(2, 1, 3)],
    /* 0x55 */ &[t(0, 1, 2), t(2, 1, 3)],
    /* 0x56 */ &[t(6, 0, 9), t(1, 2, 4), t(1, 3, 2), t(2, 8, 4)],
    /* 0x57 */ &[t(6, 2, 9), t(6, 1, 2), t(1, 3, 2)],
    /* 0x58 */ &[t(3, 2, 8), t(3, 8, 10), t(1, 6, 11)],
    /* 0x59 */ &[t(6, 11, 1), t(4, 10, 0), t(0, 10, 3), t(0, 3, 2)],
    /* 0x5a */ &[t(2, 8, 10), t(2, 10, 3), t(0, 9, 1), t(1, 9, 11)],
    /* 0x5b */ &[t(11, 4, 9), t(11, 1, 4), t(9, 4, 2), t(10, 3, 4), t(2, 4, 3)],
    /* 0x5c */ &[t(8, 4, 6), t(8, 6, 3), t(8, 3, 2), t(3, 6, 11)],
    /* 0x5d */ &[t(11, 0, 6), t(11, 3, 0), t(3, 2, 0)],
    /* 0x5e */ &[t(2, 4, 3), t(2, 8, 4), t(3, 4, 11), t(0, 9, 4), t(11, 4, 9)],
    /* 0x5f */ &[t(11, 2, 9), t(3, 2, 11)],
    /* 0x60 */ &[t(2, 7, 9), t(5, 10, 3)],
    /* 0x61 */ &[t(0, 4, 8), t(2, 7, 9), t(10, 3, 5)],
    /* 0x62 */ &[t(7, 6, 0), t(7, 0, 2), t(5, 10, 3)],
    /* 0x63 */ &[t(10, 3, 5), t(8, 2, 4), t(4, 2, 7), t(4, 7, 6)],
    /* 0x64 */ &[t(5, 4, 1), t(5, 1, 3), t(7, 9, 2)],
    /* 0x65 */ &[t(9, 2, 7), t(0, 3, 8), t(0, 1, 3), t(3, 5, 8)],
    /* 0x66 */ &[t(4, 1, 3), t(4, 3, 5), t(6, 0, 7), t(7, 0, 2)],
    /* 0x67 */ &[t(3, 8, 1), t(3, 5, 8), t(1, 8, 6), t(2, 7, 8), t(6, 8, 7)],
    /* 0x68 */ &[t(9, 2, 7), t(11, 1, 6), t(5, 10, 3)],
    /* 0x69 */ &[t(3, 5, 10), t(6, 11, 1), t(0, 4, 8), t(2, 7, 9)],
    /* 0x6a */ &[t(5, 10, 3), t(7, 11, 2), t(2, 11, 1), t(2, 1, 0)],
    /* 0x6b */ &[t(4, 8, 2), t(4, 2, 7), t(4, 7, 1), t(11, 1, 7), t(10, 3, 5)],
    /* 0x6c */ &[t(9, 2, 7), t(11, 3, 6), t(6, 3, 5), t(6, 5, 4)],
    /* 0x6d */ &[t(6, 11, 3), t(6, 3, 5), t(6, 5, 0), t(8, 0, 5), t(9, 2, 7)],
    /* 0x6e */ &[t(2, 11, 0), t(2, 7, 11), t(0, 11, 4), t(3, 5, 11), t(4, 11, 5)],
    /* 0x6f */ &[t(5, 11, 3), t(5, 8, 11), t(7, 11, 2), t(2, 11, 8)],
    /* 0x70 */ &[t(3, 7, 9), t(3, 9, 10), t(10, 9, 8)],
    /* 0x71 */ &[t(4, 10, 3), t(0, 4, 3), t(0, 3, 7), t(0, 7, 9)],
    /* 0x72 */ &[t(0, 8, 10), t(0, 10, 7), t(0, 7, 6), t(7, 10, 3)],
    /* 0x73 */ &[t(3, 4, 10), t(3, 7, 4), t(7, 6, 4)],
    /* 0x74 */ &[t(7, 9, 8), t(7, 8, 1), t(7, 1, 3), t(4, 1, 8)],
    /* 0x75 */ &[t(9, 3, 7), t(9, 0, 3), t(0, 1, 3)],
    /* 0x76 */ &[t(6, 8, 7), t(6, 0, 8), t(7, 8, 3), t(4, 1, 8), t(3, 8, 1)],
    /* 0x77 */ &[t(6, 3, 7), t(1, 3, 6)],
    /* 0x78 */ &[t(6, 11, 1), t(9, 10, 7), t(9, 8, 10), t(10, 3, 7)],
    /* 0x79 */ &[t(0, 4, 10), t(0, 10, 3), t(0, 3, 9), t(7, 9, 3), t(6, 11, 1)],
    /* 0x7a */ &[t(10, 7, 8), t(10, 3, 7), t(8, 7, 0), t(11, 1, 7), t(0, 7, 1)],
    /* 0x7b */ &[t(3, 4, 10), t(3, 7, 4), t(1, 4, 11), t(11, 4, 7)],
    /* 0x7c */ &[t(6, 3, 4), t(6, 11, 3), t(4, 3, 8), t(7, 9, 3), t(8, 3, 9)],
    /* 0x7d */ &[t(11, 0, 6), t(11, 3, 0), t(9, 0, 7), t(7, 0, 3)],
    /* 0x7e */ &[t(0, 8, 4), t(7, 11, 3)],
    /* 0x7f */ &[t(11, 3, 7)],
    /* 0x80 */ &[t(11, 7, 3)],
    /* 0x81 */ &[t(0, 4, 8), t(7, 3, 11)],
    /* 0x82 */ &[t(9, 6, 0), t(7, 3, 11)],
    /* 0x83 */ &[t(6, 4, 8), t(6, 8, 9), t(7, 3, 11)],
    /* 0x84 */ &[t(1, 10, 4), t(11, 7, 3)],
    /* 0x85 */ &[t(10, 8, 0), t(10, 0, 1), t(11, 7, 3)],
    /* 0x86 */ &[t(0, 9, 6), t(1, 10, 4), t(7, 3, 11)],
    /* 0x87 */ &[t(7, 3, 11), t(6, 1, 9), t(9, 1, 10), t(9, 10, 8)],
    /* 0x88 */ &[t(6, 7, 3), t(1, 6, 3)],
    /* 0x89 */ &[t(6, 7, 3), t(6, 3, 1), t(4, 8, 0)],
    /* 0x8a */ &[t(9, 7, 3), t(9, 3, 0), t(0, 3, 1)],
    /* 0x8b */ &[t(7, 8, 9), t(7, 1, 8), t(7, 3, 1), t(4, 8, 1)],
    /* 0x8c */ &[t(3, 10, 4), t(3, 4, 7), t(7, 4, 6)],
    /* 0x8d */ &[t(0, 10, 8), t(0, 7, 10), t(0, 6, 7), t(7, 3, 10)],
    /* 0x8e */ &[t(4, 3, 10), t(0, 3, 4), t(0, 7, 3), t(0, 9, 7)],
    /* 0x8f */ &[t(3, 9, 7), t(3, 10, 9), t(10, 8, 9)],
    /* 0x90 */ &[t(7, 3, 11), t(2, 8, 5)],
    /* 0x91 */ &[t(2, 0, 4), t(2, 4, 5), t(3, 11, 7)],
    /* 0x92 */ &[t(6, 0, 9), t(7, 3, 11), t(8, 5, 2)],
    /* 0x93 */ &[t(11, 7, 3), t(6, 5, 9), t(6, 4, 5), t(5, 2, 9)],
    /* 0x94 */ &[t(4, 1, 10), t(5, 2, 8), t(11, 7, 3)],
    /* 0x95 */ &[t(7, 3, 11), t(2, 1, 5), t(2, 0, 1), t(1, 10, 5)],
    /* 0x96 */ &[t(0, 9, 6), t(2, 8, 5), t(1, 10, 4), t(7, 3, 11)],
    /* 0x97 */ &[t(9, 6, 1), t(9, 1, 10), t(9, 10, 2), t(5, 2, 10), t(7, 3, 11)],
    /* 0x98 */ &[t(3, 1, 6), t(3, 6, 7), t(2, 8, 5)],
    /* 0x99 */ &[t(6, 7, 1), t(7, 3, 1), t(4, 2, 0), t(4, 5, 2)],
    /* 0x9a */ &[t(8, 5, 2), t(9, 7, 0), t(0, 7, 3), t(0, 3, 1)],
    /* 0x9b */ &[t(5, 9, 4), t(5, 2, 9), t(4, 9, 1), t(7, 3, 9), t(1, 9, 3)],
    /* 0x9c */ &[t(8, 5, 2), t(4, 7, 10), t(4, 6, 7), t(7, 3, 10)],
    /* 0x9d */ &[t(7, 10, 6), t(7, 3, 10), t(6, 10, 0), t(5, 2, 10), t(0, 10, 2)],
    /* 0x9e */ &[t(0, 9, 7), t(0, 7, 3), t(0, 3, 4), t(10, 4, 3), t(8, 5, 2)],
    /* 0x9f */ &[t(3, 9, 7), t(3, 10, 9), t(2, 9, 5), t(5, 9, 10)],
    /* 0xa0 */ &[t(11, 9, 2), t(3, 11, 2)],
    /* 0xa1 */ &[t(2, 3, 11), t(2, 11, 9), t(0, 4, 8)],
    /* 0xa2 */ &[t(11, 6, 0), t(11, 0, 3), t(3, 0, 2)],
    /* 0xa3 */ &[t(8, 6, 4), t(8, 3, 6), t(8, 2, 3), t(3, 11, 6)],
    /* 0xa4 */ &[t(11, 9, 2), t(11, 2, 3), t(10, 4, 1)],
    /* 0xa5 */ &[t(0, 1, 8), t(1, 10, 8), t(2, 11, 9), t(2, 3, 11)],
    /* 0xa6 */ &[t(4, 1, 10), t(0, 3, 6), t(0, 2, 3), t(3, 11, 6)],
    /* 0xa7 */ &[t(3, 6, 2), t(3, 11, 6), t(2, 6, 8), t(1, 10, 6), t(8, 6, 10)],
    /* 0xa8 */ &[t(6, 9, 2), t(6, 2, 1), t(1, 2, 3)],
    /* 0xa9 */ &[t(4, 8, 0), t(6, 9, 1), t(1, 9, 2), t(1, 2, 3)],
    /* 0xaa */ &[t(0, 2, 1), t(2, 3, 1)],
    /* 0xab */ &[t(8, 1, 4), t(8, 2, 1), t(2, 3, 1)],
    /* 0xac */ &[t(9, 2, 3), t(9, 3, 4), t(9, 4, 6), t(10, 4, 3)],
    /* 0xad */ &[t(8, 6, 10), t(8, 0, 6), t(10, 6, 3), t(9, 2, 6), t(3, 6, 2)],
    /* 0xae */ &[t(4, 3, 10), t(4, 0, 3), t(0, 2, 3)],
    /* 0xaf */ &[t(3, 8, 2), t(10, 8, 3)],
    /* 0xb0 */ &[t(5, 3, 11), t(5, 11, 8), t(8, 11, 9)],
    /* 0xb1 */ &[t(0, 4, 5), t(0, 5, 11), t(0, 11, 9), t(3, 11, 5)],
    /* 0xb2 */ &[t(11, 5, 3), t(6, 5, 11), t(6, 8, 5), t(6, 0, 8)],
    /* 0xb3 */ &[t(11, 5, 3), t(11, 6, 5), t(6, 4, 5)],
    /* 0xb4 */ &[t(1, 10, 4), t(11, 8, 3), t(11, 9, 8), t(8, 5, 3)],
    /* 0xb5 */ &[t(1, 5, 0), t(1, 10, 5), t(0, 5, 9), t(3, 11, 5), t(9, 5, 11)],
    /* 0xb6 */ &[t(6, 0, 8), t(6, 8, 5), t(6, 5, 11), t(3, 11, 5), t(1, 10, 4)],
    /* 0xb7 */ &[t(10, 6, 1), t(10, 5, 6), t(11, 6, 3), t(3, 6, 5)],
    /* 0xb8 */ &[t(6, 3, 1), t(6, 8, 3), t(6, 9, 8), t(8, 5, 3)],
    /* 0xb9 */ &[t(1, 9, 3), t(1, 6, 9), t(3, 9, 5), t(0, 4, 9), t(5, 9, 4)],
    /* 0xba */ &[t(5, 0, 8), t(5, 3, 0), t(3, 1, 0)],
    /* 0xbb */ &[t(5, 1, 4), t(3, 1, 5)],
    /* 0xbc */ &[t(8, 3, 9), t(8, 5, 3), t(9, 3, 6), t(10, 4, 3), t(6, 3, 4)],
    /* 0xbd */ &[t(0, 6, 9), t(10, 5, 3)],
    /* 0xbe */ &[t(5, 0, 8), t(5, 3, 0), t(4, 0, 10), t(10, 0, 3)],
    /* 0xbf */ &[t(5, 3, 10)],
    /* 0xc0 */ &[t(10, 11, 7), t(5, 10, 7)],
    /* 0xc1 */ &[t(10, 11, 7), t(10, 7, 5), t(8, 0, 4)],
    /* 0xc2 */ &[t(7, 5, 10), t(7, 10, 11), t(6, 0, 9)],
    /* 0xc3 */ &[t(11, 7, 5), t(11, 5, 10), t(9, 6, 8), t(8, 6, 4)],
    /* 0xc4 */ &[t(1, 11, 7), t(1, 7, 4), t(4, 7, 5)],
    /* 0xc5 */ &[t(8, 0, 1), t(8, 1, 7), t(8, 7, 5), t(11, 7, 1)],
    /* 0xc6 */ &[t(9, 6, 0), t(7, 4, 11), t(7, 5, 4), t(4, 1, 11)],
    /* 0xc7 */ &[t(9, 1, 8), t(9, 6, 1), t(8, 1, 5), t(11, 7, 1), t(5, 1, 7)],
    /* 0xc8 */ &[t(10, 1, 6), t(10, 6, 5), t(5, 6, 7)],
    /* 0xc9 */ &[t(0, 4, 8), t(6, 5, 1), t(6, 7, 5), t(5, 10, 1)],
    /* 0xca */ &[t(9, 7, 5), t(9, 5, 1), t(9, 1, 0), t(1, 5, 10)],
    /* 0xcb */ &[t(5, 1, 7), t(5, 10, 1), t(7, 1, 9), t(4, 8, 1), t(9, 1, 8)],
    /* 0xcc */ &[t(6, 7, 4), t(4, 7, 5)],
    /* 0xcd */ &[t(0, 5, 8), t(0, 6, 5), t(6, 7, 5)],
    /* 0xce */ &[t(9, 4, 0), t(9, 7, 4), t(7, 5, 4)],
    /* 0xcf */ &[t(9, 5, 8), t(7, 5, 9)],
    /* 0xd0 */ &[t(7, 2, 8), t(7, 8, 11), t(11, 8, 10)],
    /* 0xd1 */ &[t(7, 2, 0), t(7, 0, 10), t(7, 10, 11), t(10, 0, 4)],
    /* 0xd2 */ &[t(0, 9, 6), t(8, 11, 2), t(8, 10, 11), t(11, 7, 2)],
    /* 0xd3 */ &[t(11, 2, 10), t(11, 7, 2), t(10, 2, 4), t(9, 6, 2), t(4, 2, 6)],
    /* 0xd4 */ &[t(1, 11, 7), t(4, 1, 7), t(4, 7, 2), t(4, 2, 8)],
    /* 0xd5 */ &[t(7, 1, 11), t(7, 2, 1), t(2, 0, 1)],
    /* 0xd6 */ &[t(4, 1, 11), t(4, 11, 7), t(4, 7, 8), t(2, 8, 7), t(0, 9, 6)],
    /* 0xd7 */ &[t(7, 1, 11), t(7, 2, 1), t(6, 1, 9), t(9, 1, 2)],
    /* 0xd8 */ &[t(1, 6, 7), t(1, 7, 8), t(1, 8, 10), t(2, 8, 7)],
    /* 0xd9 */ &[t(0, 10, 2), t(0, 4, 10), t(2, 10, 7), t(1, 6, 10), t(7, 10, 6)],
    /* 0xda */ &[t(0, 7, 1), t(0, 9, 7), t(1, 7, 10), t(2, 8, 7), t(10, 7, 8)],
    /* 0xdb */ &[t(9, 7, 2), t(1, 4, 10)],
    /* 0xdc */ &[t(8, 7, 2), t(8, 4, 7), t(4, 6, 7)],
    /* 0xdd */ &[t(0, 7, 2), t(6, 7, 0)],
    /* 0xde */ &[t(8, 7, 2), t(8, 4, 7), t(9, 7, 0), t(0, 7, 4)],
    /* 0xdf */ &[t(9, 7, 2)],
    /* 0xe0 */ &[t(2, 5, 10), t(2, 10, 9), t(9, 10, 11)],
    /* 0xe1 */ &[t(0, 4, 8), t(2, 5, 9), t(9, 5, 10), t(9, 10, 11)],
    /* 0xe2 */ &[t(6, 10, 11), t(6, 2, 10), t(6, 0, 2), t(5, 10, 2)],
    /* 0xe3 */ &[t(4, 2, 6), t(4, 8, 2), t(6, 2, 11), t(5, 10, 2), t(11, 2, 10)],
    /* 0xe4 */ &[t(1, 11, 9), t(1, 9, 5), t(1, 5, 4), t(5, 9, 2)],
    /* 0xe5 */ &[t(9, 5, 11), t(9, 2, 5), t(11, 5, 1), t(8, 0, 5), t(1, 5, 0)],
    /* 0xe6 */ &[t(4, 11, 5), t(4, 1, 11), t(5, 11, 2), t(6, 0, 11), t(2, 11, 0)],
    /* 0xe7 */ &[t(6, 1, 11), t(8, 2, 5)],
    /* 0xe8 */ &[t(2, 5, 10), t(9, 2, 10), t(9, 10, 1), t(9, 1, 6)],
    /* 0xe9 */ &[t(9, 2, 5), t(9, 5, 10), t(9, 10, 6), t(1, 6, 10), t(0, 4, 8)],
    /* 0xea */ &[t(10, 2, 5), t(10, 1, 2), t(1, 0, 2)],
    /* 0xeb */ &[t(10, 2, 5), t(10, 1, 2), t(8, 2, 4), t(4, 2, 1)],
    /* 0xec */ &[t(2, 6, 9), t(2, 5, 6), t(5, 4, 6)],
    /* 0xed */ &[t(2, 6, 9), t(2, 5, 6), t(0, 6, 8), t(8, 6, 5)],
    /* 0xee */ &[t(2, 4, 0), t(5, 4, 2)],
    /* 0xef */ &[t(2, 5, 8)],
    /* 0xf0 */ &[t(9, 8, 11), t(11, 8, 10)],
    /* 0xf1 */ &[t(4, 9, 0), t(4, 10, 9), t(10, 11, 9)],
    /* 0xf2 */ &[t(0, 11, 6), t(0, 8, 11), t(8, 10, 11)],
    /* 0xf3 */ &[t(4, 11, 6), t(10, 11, 4)],
    /* 0xf4 */ &[t(1, 8, 4), t(1, 11, 8), t(11, 9, 8)],
    /* 0xf5 */ &[t(9, 1, 11), t(0, 1, 9)],
    /* 0xf6 */ &[t(1, 8, 4), t(1, 11, 8), t(0, 8, 6), t(6, 8, 11)],
    /* 0xf7 */ &[t(6, 1, 11)],
    /* 0xf8 */ &[t(6, 10, 1), t(6, 9, 10), t(9, 8, 10)],
    /* 0xf9 */ &[t(4, 9, 0), t(4, 10, 9), t(6, 9, 1), t(1, 9, 10)],
    /* 0xfa */ &[t(0, 10, 1), t(8, 10, 0)],
    /* 0xfb */ &[t(4, 10, 1)],
    /* 0xfc */ &[t(6, 8, 4), t(9, 8, 6)],
    /* 0xfd */ &[t(0, 6, 9)],
    /* 0xfe */ &[t(0, 8, 4)],
    /* 0xff */ &[],
];

static_assertions::const_assert_eq!(CELL_TO_TRIANGLES[0].len(), 0);
static_assertions::const_assert_eq!(CELL_TO_TRIANGLES[255].len(), 0);
