//! # Chunk Creation Module
//!
//! Deterministic terrain generation for a single chunk. Generation runs in
//! two stages: every position in the chunk's volume is first assigned a
//! block type by the height stratification rule, then each block's six-face
//! visibility is computed against that freshly generated block set.
//!
//! ## Edge policy
//!
//! Visibility only ever consults the chunk's own stage-one lookup. A
//! neighbor position falling in an adjacent chunk is treated as absent, so
//! a boundary face is marked visible even when the adjacent chunk is (or
//! will become) resident. Both sides of every chunk seam therefore carry
//! visible faces; the presentation layer draws the duplicate seam geometry.

use std::collections::HashMap;

use cgmath::{Point2, Point3};

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::Block;

use super::{Chunk, WORLD_FLOOR_Y, WORLD_SURFACE_Y};

/// Y threshold for the stone layer: every block strictly below this height
/// is stone.
pub const STONE_BELOW_Y: i32 = -5;

/// Selects the block type for a world-space Y layer.
///
/// The stratification rule is fixed: stone below [`STONE_BELOW_Y`], dirt
/// from there up to (excluding) the surface, grass at the surface.
fn block_type_for_height(y: i32) -> BlockType {
    if y < STONE_BELOW_Y {
        BlockType::STONE
    } else if y < WORLD_SURFACE_Y {
        BlockType::DIRT
    } else {
        BlockType::GRASS
    }
}

impl Chunk {
    /// Generates the chunk at the specified chunk coordinates.
    ///
    /// Generation is pure and deterministic: the same coordinate always
    /// produces the same block set and visibility flags, independent of
    /// call order or which other chunks are resident. It cannot fail for
    /// any integer coordinate pair.
    ///
    /// # Arguments
    /// * `coordinate` - The chunk coordinates of the chunk to generate
    /// * `chunk_size` - The chunk edge length in world-block units
    ///
    /// # Returns
    /// A fully populated `Chunk` covering
    /// `[cx * chunk_size, (cx + 1) * chunk_size)` in X,
    /// `[cz * chunk_size, (cz + 1) * chunk_size)` in Z and the whole world
    /// height range in Y.
    pub fn generate(coordinate: Point2<i32>, chunk_size: i32) -> Self {
        // Stage one: stratify every position in the chunk's volume.
        let mut block_types = HashMap::new();
        for local_x in 0..chunk_size {
            for local_z in 0..chunk_size {
                for y in WORLD_FLOOR_Y..=WORLD_SURFACE_Y {
                    let position = Point3::new(
                        local_x + coordinate.x * chunk_size,
                        y,
                        local_z + coordinate.y * chunk_size,
                    );
                    block_types.insert(position, block_type_for_height(y));
                }
            }
        }

        // Stage two: a face is visible iff its neighbor position is absent
        // from the stage-one lookup. Neighbors in adjacent chunks are never
        // consulted.
        let mut blocks = HashMap::with_capacity(block_types.len());
        for (&position, &block_type) in &block_types {
            let mut visible_faces = [false; 6];
            for side in BlockSide::all() {
                let neighbor = position + side.offset();
                visible_faces[side as usize] = !block_types.contains_key(&neighbor);
            }
            blocks.insert(position, Block::new(block_type, visible_faces));
        }

        Chunk { coordinate, blocks }
    }
}
