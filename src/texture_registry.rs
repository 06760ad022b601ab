//! # Texture Registry Module
//!
//! Maps block types and faces to texture handles for the presentation
//! layer. The registry is built once at startup from the handles the asset
//! loader produced; the per-block draw path is a plain table lookup with no
//! allocation.

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::block_type::{BlockType, BLOCK_TYPE_COUNT};

/// An opaque handle to a loaded texture, assigned by the asset loader.
///
/// The core never interprets handles; it only routes them from the loader
/// to the presentation layer per block type and face.
pub type TextureHandle = u32;

/// Maps each block type to its texture handle for each face.
///
/// The table is indexed by `BlockType` and face index in `BlockSide`
/// order. Grass uses a dedicated texture on its top face, plain dirt on the
/// bottom, and the grass side texture on the four lateral faces; dirt and
/// stone are uniform on all six faces.
///
/// # Examples
///
/// ```
/// use voxel_world::{BlockSide, BlockType, TextureRegistry};
///
/// let registry = TextureRegistry::new(1, 2, 3, 4);
/// assert_eq!(registry.handle_for(BlockType::GRASS, BlockSide::TOP), 2);
/// assert_eq!(registry.handle_for(BlockType::GRASS, BlockSide::BOTTOM), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureRegistry {
    /// Per block type, the texture handle for each of the six faces.
    face_handles: [[TextureHandle; 6]; BLOCK_TYPE_COUNT],
}

impl TextureRegistry {
    /// Builds the registry from the four loaded texture handles.
    ///
    /// # Arguments
    /// * `dirt` - The dirt texture, also used under grass blocks
    /// * `grass_top` - The texture for the top face of grass blocks
    /// * `grass_side` - The texture for the lateral faces of grass blocks
    /// * `stone` - The stone texture
    ///
    /// # Returns
    /// A registry ready to answer per-face lookups for every block type.
    pub fn new(
        dirt: TextureHandle,
        grass_top: TextureHandle,
        grass_side: TextureHandle,
        stone: TextureHandle,
    ) -> Self {
        let mut face_handles = [[0; 6]; BLOCK_TYPE_COUNT];

        face_handles[BlockType::DIRT as usize] = [dirt; 6];

        let mut grass = [grass_side; 6];
        grass[BlockSide::TOP as usize] = grass_top;
        grass[BlockSide::BOTTOM as usize] = dirt;
        face_handles[BlockType::GRASS as usize] = grass;

        face_handles[BlockType::STONE as usize] = [stone; 6];

        TextureRegistry { face_handles }
    }

    /// Gets the texture handles for all six faces of a block type.
    ///
    /// # Arguments
    /// * `block_type` - The block type to look up
    ///
    /// # Returns
    /// An array of 6 texture handles, one per face in `BlockSide` order.
    pub fn face_handles(&self, block_type: BlockType) -> &[TextureHandle; 6] {
        &self.face_handles[block_type as usize]
    }

    /// Gets the texture handle for one face of a block type.
    ///
    /// # Arguments
    /// * `block_type` - The block type to look up
    /// * `side` - The face to look up
    ///
    /// # Returns
    /// The texture handle the presentation layer should bind for that face.
    pub fn handle_for(&self, block_type: BlockType, side: BlockSide) -> TextureHandle {
        self.face_handles[block_type as usize][side as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_splits_top_bottom_and_sides() {
        let registry = TextureRegistry::new(10, 20, 30, 40);

        assert_eq!(registry.handle_for(BlockType::GRASS, BlockSide::TOP), 20);
        assert_eq!(registry.handle_for(BlockType::GRASS, BlockSide::BOTTOM), 10);
        for side in [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ] {
            assert_eq!(registry.handle_for(BlockType::GRASS, side), 30);
        }
    }

    #[test]
    fn dirt_and_stone_are_uniform() {
        let registry = TextureRegistry::new(10, 20, 30, 40);

        assert_eq!(registry.face_handles(BlockType::DIRT), &[10; 6]);
        assert_eq!(registry.face_handles(BlockType::STONE), &[40; 6]);
    }
}
