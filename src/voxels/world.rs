//! # World Module
//!
//! This module provides the `World` struct which manages the collection of
//! currently-resident chunks. It serves as the central store for chunk
//! creation, eviction, and read access.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only the chunks inside
//! the observer's render radius are kept in memory. The streaming manager
//! decides which coordinates must be resident; this module only enforces
//! that a chunk is fully generated before it becomes observable and that
//! lookup stays O(1).

use std::collections::HashMap;

use cgmath::Point2;
use log::debug;

use super::chunk::Chunk;

/// Represents a voxel world composed of the currently-resident chunks.
///
/// The world is stored as a sparse grid of chunks keyed by chunk
/// coordinate. A coordinate is present exactly when the streaming manager
/// has decided it belongs to the current target set; chunks outside it are
/// removed wholesale.
///
/// # Examples
///
/// ```
/// use cgmath::Point2;
/// use voxel_world::World;
///
/// let mut world = World::new();
/// world.add_chunk_at(Point2::new(0, 0), 16);
///
/// assert!(world.get_chunk_at(Point2::new(0, 0)).is_some());
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    pub chunks: HashMap<Point2<i32>, Chunk>,
}

impl World {
    /// Creates a new, empty world.
    ///
    /// # Returns
    ///
    /// A new `World` instance with no chunks resident.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Adds a new chunk at the specified chunk coordinates if one doesn't
    /// already exist.
    ///
    /// The chunk is fully generated before it is inserted, so readers never
    /// observe a partially initialized chunk. If a chunk already exists at
    /// the specified coordinate, this method does nothing; resident chunks
    /// are never regenerated.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - The chunk coordinates where the new chunk should be added
    /// * `chunk_size` - The chunk edge length in world-block units
    pub fn add_chunk_at(&mut self, coordinate: Point2<i32>, chunk_size: i32) {
        if self.chunks.contains_key(&coordinate) {
            return;
        }

        let chunk = Chunk::generate(coordinate, chunk_size);
        debug!(
            "Generated chunk at ({}, {}) with {} blocks",
            coordinate.x,
            coordinate.y,
            chunk.block_count()
        );
        self.chunks.insert(coordinate, chunk);
    }

    /// Removes the chunk at the specified chunk coordinates.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - The chunk coordinates to evict
    ///
    /// # Returns
    ///
    /// `true` if a chunk was resident at the coordinate and has been
    /// removed, `false` if the coordinate was already absent.
    pub fn remove_chunk_at(&mut self, coordinate: Point2<i32>) -> bool {
        let removed = self.chunks.remove(&coordinate).is_some();
        if removed {
            debug!("Chunk removed at ({}, {})", coordinate.x, coordinate.y);
        }
        removed
    }

    /// Retrieves a reference to the chunk at the specified chunk coordinates.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - The chunk coordinates to look up
    ///
    /// # Returns
    ///
    /// A reference to the `Chunk` if it is resident, or `None` if not.
    pub fn get_chunk_at(&self, coordinate: Point2<i32>) -> Option<&Chunk> {
        self.chunks.get(&coordinate)
    }

    /// Returns the number of currently-resident chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over the currently-resident chunks.
    ///
    /// This is the read surface the presentation layer walks once per
    /// frame, after reconciliation has completed. Iteration order is
    /// unspecified.
    pub fn iter_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_twice_does_not_regenerate() {
        let mut world = World::new();
        let coordinate = Point2::new(1, 1);

        world.add_chunk_at(coordinate, 16);
        let first = world.get_chunk_at(coordinate).unwrap().clone();

        world.add_chunk_at(coordinate, 16);
        assert_eq!(world.chunk_count(), 1);
        assert_eq!(world.get_chunk_at(coordinate).unwrap(), &first);
    }

    #[test]
    fn removing_reports_whether_a_chunk_was_resident() {
        let mut world = World::new();
        let coordinate = Point2::new(-3, 7);

        assert!(!world.remove_chunk_at(coordinate));

        world.add_chunk_at(coordinate, 16);
        assert!(world.remove_chunk_at(coordinate));
        assert!(world.get_chunk_at(coordinate).is_none());
    }
}
