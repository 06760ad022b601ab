//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel
//! world. It includes block type definitions, block face handling, and the
//! compact block data structure carrying per-face visibility.

use block_side::BlockSide;
use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is used for efficient storage of block data.
pub type BlockTypeSize = u8;

/// The underlying integer type used to store the six face-visibility flags.
/// Bit `i` corresponds to face index `i` in `BlockSide` order.
pub type FaceMaskSize = u8;

/// Represents a single voxel block in the world.
///
/// This is a lightweight structure that stores only the essential block
/// data: the block's type and which of its six faces border empty space and
/// must be rendered. Both are fixed when the owning chunk is generated and
/// never change afterwards.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute ensures a consistent two-byte layout so block
/// data can be handed to the presentation layer as plain bytes. The block
/// type and face mask are stored as compact integers for memory efficiency.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,

    /// Face-visibility flags packed one bit per face in `BlockSide` order.
    pub face_mask: FaceMaskSize,
}

impl Block {
    /// Creates a new block of the specified type with the given visible faces.
    ///
    /// # Arguments
    /// * `block_type` - The type of block to create
    /// * `visible_faces` - One flag per face in `BlockSide` order; `true`
    ///   means the face borders empty space and must be rendered
    ///
    /// # Returns
    /// A new `Block` instance with the specified type and face visibility.
    pub fn new(block_type: BlockType, visible_faces: [bool; 6]) -> Self {
        let mut face_mask: FaceMaskSize = 0;
        for (face_index, visible) in visible_faces.iter().enumerate() {
            if *visible {
                face_mask |= 1 << face_index;
            }
        }

        Block {
            block_type: block_type as BlockTypeSize,
            face_mask,
        }
    }

    /// Gets the type of this block as the rich enum type.
    ///
    /// # Panics
    /// Panics if the stored compact value doesn't correspond to a valid
    /// `BlockType`; blocks are only ever constructed from valid types.
    pub fn get_block_type(&self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }

    /// Decodes the face-visibility flags for all six faces.
    ///
    /// # Returns
    /// An array of 6 booleans in `BlockSide` order, where each boolean
    /// indicates whether the corresponding face should be rendered.
    pub fn face_visibility(&self) -> [bool; 6] {
        let mut visible_faces = [false; 6];
        for (face_index, visible) in visible_faces.iter_mut().enumerate() {
            *visible = self.face_mask & (1 << face_index) != 0;
        }
        visible_faces
    }

    /// Checks whether a single face of this block is visible.
    ///
    /// # Arguments
    /// * `side` - The face to check
    ///
    /// # Returns
    /// `true` if the face borders empty space and should be rendered.
    pub fn is_face_visible(&self, side: BlockSide) -> bool {
        self.face_mask & (1 << side as usize) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_mask_preserves_each_face_flag() {
        let visible_faces = [true, false, true, false, false, true];
        let block = Block::new(BlockType::DIRT, visible_faces);

        assert_eq!(block.face_visibility(), visible_faces);
        for side in BlockSide::all() {
            assert_eq!(
                block.is_face_visible(side),
                visible_faces[side as usize],
                "{:?} flag must match the constructor input",
                side
            );
        }
    }

    #[test]
    fn block_type_survives_compact_storage() {
        let block = Block::new(BlockType::GRASS, [false; 6]);
        assert_eq!(block.get_block_type(), BlockType::GRASS);
    }
}
