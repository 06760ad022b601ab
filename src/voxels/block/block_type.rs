//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification and conversion
//! from the compact integer representation.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Every position inside a chunk's column holds exactly one of these
/// variants; the world has no air gaps below the surface. The
/// `FromPrimitive` derive allows conversion from integers, which is used
/// when decoding the compact block storage format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// A dirt block, filling the layers just below the surface.
    DIRT,

    /// A grass block, forming the topmost generated layer of the world.
    /// The top face uses a dedicated texture; the sides show grass over
    /// dirt and the bottom is plain dirt.
    GRASS,

    /// A stone block, filling everything below the dirt layers.
    STONE,
}

/// The number of distinct block types, used to size per-type lookup tables.
pub const BLOCK_TYPE_COUNT: usize = 3;

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// This is used when converting from the compact storage format back to
    /// the rich enum type.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`
    ///
    /// # Panics
    /// Panics if the input value doesn't correspond to a valid `BlockType`.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        let btype_option = num::FromPrimitive::from_u8(btype);
        btype_option.unwrap()
    }
}
