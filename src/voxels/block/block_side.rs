//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block and the
//! fixed face ordering shared by terrain generation and the per-face
//! vertex/texture templates consumed by the presentation layer.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant corresponds to a specific face and is assigned a unique
/// integer value fixing the face ordering used everywhere a per-face array
/// appears: the terrain generator writes visibility flags in this order and
/// the presentation layer's face templates consume them in the same order.
///
/// The order is: [FRONT (-Z), BACK (+Z), TOP (+Y), BOTTOM (-Y), RIGHT (+X), LEFT (-X)]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing negative Z)
    FRONT = 0,

    /// The back face (facing positive Z)
    BACK = 1,

    /// The top face (facing positive Y)
    TOP = 2,

    /// The bottom face (facing negative Y)
    BOTTOM = 3,

    /// The right face (facing positive X)
    RIGHT = 4,

    /// The left face (facing negative X)
    LEFT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in face-index order.
    ///
    /// This is useful for iterating over all possible faces of a block.
    /// The order is: [FRONT, BACK, TOP, BOTTOM, RIGHT, LEFT]
    ///
    /// # Returns
    /// An array containing all `BlockSide` variants.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::RIGHT,
            BlockSide::LEFT,
        ]
    }

    /// Returns the unit vector pointing from a block towards the neighbor
    /// that covers this face.
    ///
    /// A face is visible exactly when no block occupies the position offset
    /// by this vector.
    ///
    /// # Returns
    /// The axis-aligned unit offset of the neighboring block position.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, -1),
            BlockSide::BACK => Vector3::new(0, 0, 1),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
        }
    }

    /// Returns the side covering the opposite face of a block.
    pub fn opposite(self) -> BlockSide {
        match self {
            BlockSide::FRONT => BlockSide::BACK,
            BlockSide::BACK => BlockSide::FRONT,
            BlockSide::TOP => BlockSide::BOTTOM,
            BlockSide::BOTTOM => BlockSide::TOP,
            BlockSide::RIGHT => BlockSide::LEFT,
            BlockSide::LEFT => BlockSide::RIGHT,
        }
    }
}
