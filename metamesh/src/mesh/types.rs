//! Strongly-typed indexes of various flavors
//!
//! Corners are bit-packed as `x | y << 1 | z << 2`, so a corner's index is
//! also its offset within the unit cube:
//!
//! ```text
//!         6 -------- 7
//!        /|         /|      Z
//!       / |        / |      ^  _ Y
//!      4----------5  |      | /
//!      |  |       |  |      |/
//!      |  2-------|--3      ---> X
//!      | /        | /
//!      |/         |/
//!      0----------1
//! ```

/// A single axis, represented as a `u8` with one bit (between 0 and 2) set
///
/// These invariants are enforced at construction
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Axis(u8);

impl Axis {
    /// Builds a new axis
    ///
    /// ```
    /// # use metamesh::mesh::types::Axis;
    /// const X: Axis = Axis::new(1);
    /// const Y: Axis = Axis::new(2);
    /// const Z: Axis = Axis::new(4);
    /// ```
    ///
    /// # Panics
    /// If the input does not have exactly 1 set bit
    ///
    /// ```compile_fail
    /// # use metamesh::mesh::types::Axis;
    /// const A: Axis = Axis::new(0b11);
    /// ```
    ///
    /// If the input has a bit set that's not in the 0-2 range
    /// ```compile_fail
    /// # use metamesh::mesh::types::Axis;
    /// const A: Axis = Axis::new(0b1000);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i.count_ones() == 1);
        assert!(i.trailing_zeros() < 3);
        Self(i)
    }

    /// Converts from a bitmask to an index
    pub fn index(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// Cycles through X-Y-Z axes, returning the next one
    pub const fn next(self) -> Self {
        let u = self.0 << 1;
        if u > Z.0 { X } else { Axis(u) }
    }
}

/// The X axis, i.e. `[1, 0, 0]`
pub const X: Axis = Axis(1);
/// The Y axis, i.e. `[0, 1, 0]`
pub const Y: Axis = Axis(2);
/// The Z axis, i.e. `[0, 0, 1]`
pub const Z: Axis = Axis(4);

impl std::ops::Mul<bool> for Axis {
    type Output = Corner;
    fn mul(self, rhs: bool) -> Corner {
        if rhs { Corner(self.0) } else { Corner(0) }
    }
}

impl std::ops::BitOr<Corner> for Axis {
    type Output = Corner;
    fn bitor(self, rhs: Corner) -> Corner {
        Corner(self.0 | rhs.0)
    }
}

/// Strongly-typed cube corner, in the `[0, 8)` range
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Corner(u8);

impl Corner {
    /// Builds a new corner
    ///
    /// # Panics
    /// If `i >= 8`, which is not a valid corner index
    pub const fn new(i: u8) -> Self {
        assert!(i < 8);
        Self(i)
    }
    /// Returns the value of this corner as an index
    pub fn index(self) -> usize {
        self.0 as usize
    }
    /// Iterates over all 8 corners
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(Corner)
    }
    /// Returns this corner's position within the unit cube
    pub fn offset(self) -> nalgebra::Vector3<f64> {
        let [x, y, z] = CORNER_OFFSETS[self.index()];
        nalgebra::Vector3::new(x as f64, y as f64, z as f64)
    }
}

impl std::ops::BitAnd<Axis> for Corner {
    type Output = bool;
    fn bitand(self, rhs: Axis) -> bool {
        (self.0 & rhs.0) != 0
    }
}

impl std::ops::BitOr<Corner> for Corner {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Corner(self.0 | rhs.0)
    }
}

/// Offsets of each corner within the unit cube, indexed by corner
pub const CORNER_OFFSETS: [[u8; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// Start and end corners of each edge, indexed by edge
///
/// This is the tabulated form of [`Edge::corners`].
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
    // X edges
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    // Y edges
    [0, 2],
    [4, 6],
    [1, 3],
    [5, 7],
    // Z edges
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// An undirected edge within a cube
///
/// With `(t, u, v)` as a right-handed coordinate system and `t` being the
/// varying axis of the edge, this is packed as `4 * t + 2 * v + 1 * u`
/// (where `t`, `u`, and `v` are values in the range 0-2 representing an axis)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edge(u8);

impl Edge {
    /// Builds a new edge
    ///
    /// # Panics
    /// If `i >= 12`, since that's an invalid edge
    ///
    /// ```compile_fail
    /// # use metamesh::mesh::types::Edge;
    /// const E: Edge = Edge::new(12);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 12);
        Self(i)
    }
    /// Converts from an edge to an index
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    /// Iterates over all 12 edges
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..12).map(Edge)
    }

    /// Returns the axis along which this edge varies
    pub fn axis(&self) -> Axis {
        Axis(1 << (self.0 / 4))
    }

    /// Returns a `(start, end)` tuple for the given edge
    ///
    /// In the `t, u, v` coordinate system, the start always has the `t` bit
    /// clear and the end always has the `t` bit set; the `u` and `v` bits are
    /// the same at both start and end.
    pub fn corners(&self) -> (Corner, Corner) {
        let t = self.axis();
        let u = t.next();
        let v = u.next();

        let u = u * ((self.0 % 4) % 2 != 0);
        let v = v * ((self.0 % 4) / 2 != 0);

        (u | v, t | u | v)
    }
}

/// Bitmask of which corners in a cube have a positive field value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellMask(u8);

impl CellMask {
    /// Mask with no corners set (the cube is entirely outside)
    pub const EMPTY: Self = Self(0);
    /// Mask with every corner set (the cube is entirely inside)
    pub const FULL: Self = Self(0xFF);

    /// Builds a new `CellMask`
    pub const fn new(i: u8) -> Self {
        Self(i)
    }

    /// Builds a mask from per-corner field values
    ///
    /// A corner's bit is set iff its value is strictly greater than zero.
    pub fn from_values(values: &[f64; 8]) -> Self {
        let mask = values
            .iter()
            .enumerate()
            .filter(|(_i, v)| **v > 0.0)
            .fold(0, |acc, (i, _v)| acc | (1 << i));
        Self(mask)
    }

    /// Returns the bitmask as an index
    ///
    /// The index has the same value as the bitmask, but is cast to a `usize`
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the raw bitmask
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Checks whether the surface crosses this cube
    pub fn has_surface(&self) -> bool {
        *self != Self::EMPTY && *self != Self::FULL
    }

    /// Iterates over all 256 masks
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }
}

impl std::ops::BitAnd<Corner> for CellMask {
    type Output = bool;
    fn bitand(self, c: Corner) -> bool {
        (self.0 & (1 << c.index())) != 0
    }
}

impl std::ops::Not for CellMask {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0)
    }
}
