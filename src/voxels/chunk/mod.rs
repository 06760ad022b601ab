//! # Chunk Module
//!
//! This module provides the `Chunk` struct, the unit of world streaming.
//! A chunk is a `chunk_size x chunk_size` column of blocks spanning the
//! fixed world height range, fully materialized at generation time.
//!
//! ## Storage
//!
//! Blocks are kept in a hash map keyed by world-block position. Every
//! position in the chunk's volume is populated (the world has no air gaps
//! below the surface), so the map holds exactly
//! `chunk_size * chunk_size * WORLD_COLUMN_LAYERS` entries. Each entry is a
//! two-byte [`Block`], so the per-block cost is dominated by the key.
//!
//! Chunks are never mutated after creation; the streaming manager replaces
//! them wholesale when their coordinate leaves the target set.

use std::collections::HashMap;

use cgmath::{Point2, Point3};

use super::block::block_type::BlockType;
use super::block::Block;

pub mod chunk_creation;

/// The lowest world-space Y layer generated in every chunk column.
pub const WORLD_FLOOR_Y: i32 = -128;

/// The topmost world-space Y layer; blocks at this height are grass.
pub const WORLD_SURFACE_Y: i32 = 0;

/// The number of Y layers in every chunk column.
pub const WORLD_COLUMN_LAYERS: i32 = WORLD_SURFACE_Y - WORLD_FLOOR_Y + 1;

/// Represents one streamed column of the voxel world.
///
/// Chunks are the fundamental unit of world data: they are created whole by
/// the terrain generator when their coordinate enters the render radius and
/// removed whole when it leaves. Block positions are world-space, so chunk
/// contents can be iterated without any coordinate translation.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// The coordinate of this chunk in chunk coordinates (not block coordinates).
    pub coordinate: Point2<i32>,

    /// The block data for this chunk, keyed by world-block position.
    pub blocks: HashMap<Point3<i32>, Block>,
}

impl Chunk {
    /// Retrieves the block at the specified world-block position.
    ///
    /// # Arguments
    /// * `position` - The world-block position to look up
    ///
    /// # Returns
    /// A reference to the block if the position lies inside this chunk's
    /// volume, or `None` if not.
    pub fn get_block_at(&self, position: Point3<i32>) -> Option<&Block> {
        self.blocks.get(&position)
    }

    /// Returns the number of blocks in this chunk.
    ///
    /// For any generated chunk this is exactly
    /// `chunk_size * chunk_size * WORLD_COLUMN_LAYERS`.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterates over every block in this chunk.
    ///
    /// This is the read surface consumed by the presentation layer: one
    /// `(position, block type, face visibility)` triple per block, with the
    /// visibility flags in `BlockSide` order. Iteration order is
    /// unspecified.
    pub fn iter_blocks(&self) -> impl Iterator<Item = (Point3<i32>, BlockType, [bool; 6])> + '_ {
        self.blocks
            .iter()
            .map(|(position, block)| (*position, block.get_block_type(), block.face_visibility()))
    }
}
