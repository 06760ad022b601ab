//! # Streaming Module
//!
//! The chunk stream manager: computes the target chunk-coordinate set for
//! an observer position and reconciles the resident world against it once
//! per tick. Chunks entering the render radius are generated and inserted;
//! chunks leaving it are removed; everything else is left untouched.

use std::collections::HashSet;

use cgmath::Point2;
use log::info;

use crate::config::StreamConfig;

use super::world::World;

/// Floor division of `a` by a positive `b`.
///
/// Chunk coordinates require flooring: naive integer division truncates
/// toward zero and maps the world-block range `[-16, -1]` to chunk 0
/// instead of chunk -1, which silently drops chunks at negative observer
/// positions.
pub fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// Owns the resident chunk set and keeps it synchronized with the observer.
///
/// The manager is driven by one [`reconcile`](ChunkStreamManager::reconcile)
/// call per tick. Between ticks the resident [`World`] is a consistent
/// snapshot that the presentation layer may iterate read-only.
///
/// # Examples
///
/// ```
/// use cgmath::Point2;
/// use voxel_world::{ChunkStreamManager, StreamConfig};
///
/// let config = StreamConfig::new(16, 2).expect("valid configuration");
/// let mut manager = ChunkStreamManager::new(config);
///
/// manager.reconcile(Point2::new(0, 0));
/// assert_eq!(manager.world().chunk_count(), 9);
/// ```
pub struct ChunkStreamManager {
    /// The validated streaming configuration.
    config: StreamConfig,
    /// The resident chunk set, owned exclusively by this manager.
    world: World,
}

impl ChunkStreamManager {
    /// Creates a manager with no resident chunks.
    ///
    /// # Arguments
    ///
    /// * `config` - The streaming configuration; construction of
    ///   [`StreamConfig`] has already validated it
    pub fn new(config: StreamConfig) -> Self {
        ChunkStreamManager {
            config,
            world: World::new(),
        }
    }

    /// Read access to the resident world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The streaming configuration this manager was created with.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Computes the set of chunk coordinates that must be resident for the
    /// given observer position.
    ///
    /// The axis-aligned square `[x - r, x + r] x [z - r, z + r]` in
    /// world-block units is converted to an inclusive chunk range per axis:
    /// the floor of the minimum bound through the ceiling of the maximum
    /// bound, so a chunk partially overlapped by the square is included.
    ///
    /// # Arguments
    ///
    /// * `observer` - The observer's `(x, z)` position in world-block units
    ///
    /// # Returns
    ///
    /// Every chunk coordinate whose footprint intersects the square, in
    /// row-major order.
    pub fn target_chunks(&self, observer: Point2<i32>) -> Vec<Point2<i32>> {
        let chunk_size = self.config.chunk_size;
        let radius = self.config.render_radius;

        let min_cx = floor_div(observer.x - radius, chunk_size);
        let max_cx = floor_div(observer.x + radius + chunk_size - 1, chunk_size);
        let min_cz = floor_div(observer.y - radius, chunk_size);
        let max_cz = floor_div(observer.y + radius + chunk_size - 1, chunk_size);

        let x_count = (max_cx - min_cx + 1) as usize;
        let z_count = (max_cz - min_cz + 1) as usize;
        let mut target = Vec::with_capacity(x_count * z_count);
        for cx in min_cx..=max_cx {
            for cz in min_cz..=max_cz {
                target.push(Point2::new(cx, cz));
            }
        }
        target
    }

    /// Reconciles the resident world against the target set for `observer`.
    ///
    /// Coordinates in the target set but not resident are generated and
    /// inserted; resident coordinates outside the target set are removed;
    /// coordinates in both are left untouched. Only the end state is
    /// guaranteed; insertions and removals within one pass are unordered.
    /// Calling this twice with an unchanged observer performs no additional
    /// work the second time.
    ///
    /// # Arguments
    ///
    /// * `observer` - The observer's `(x, z)` position in world-block units
    pub fn reconcile(&mut self, observer: Point2<i32>) {
        let target: HashSet<Point2<i32>> = self.target_chunks(observer).into_iter().collect();

        let mut added = 0usize;
        for &coordinate in &target {
            if self.world.get_chunk_at(coordinate).is_none() {
                self.world.add_chunk_at(coordinate, self.config.chunk_size);
                added += 1;
            }
        }

        let stale: Vec<Point2<i32>> = self
            .world
            .chunks
            .keys()
            .filter(|coordinate| !target.contains(coordinate))
            .copied()
            .collect();
        let removed = stale.len();
        for coordinate in stale {
            self.world.remove_chunk_at(coordinate);
        }

        if added > 0 || removed > 0 {
            info!(
                "Reconciled chunks around ({}, {}): {} added, {} removed, {} resident",
                observer.x,
                observer.y,
                added,
                removed,
                self.world.chunk_count()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(chunk_size: i32, render_radius: i32) -> ChunkStreamManager {
        let config = StreamConfig::new(chunk_size, render_radius).expect("valid test configuration");
        ChunkStreamManager::new(config)
    }

    #[test]
    fn floor_div_floors_negative_operands() {
        assert_eq!(floor_div(0, 16), 0);
        assert_eq!(floor_div(15, 16), 0);
        assert_eq!(floor_div(16, 16), 1);
        assert_eq!(floor_div(-1, 16), -1);
        assert_eq!(floor_div(-16, 16), -1);
        assert_eq!(floor_div(-17, 16), -2);
        assert_eq!(floor_div(-22, 16), -2);
    }

    #[test]
    fn target_set_at_origin_spans_the_surrounding_chunks() {
        let manager = manager_with(16, 2);
        let target = manager.target_chunks(Point2::new(0, 0));

        // The square [-2, 2] maps to the chunk range [-1, 1] on both axes.
        assert_eq!(target.len(), 9);
        for cx in -1..=1 {
            for cz in -1..=1 {
                assert!(
                    target.contains(&Point2::new(cx, cz)),
                    "({}, {}) must be targeted",
                    cx,
                    cz
                );
            }
        }
    }

    #[test]
    fn target_set_floors_at_negative_observer_positions() {
        let manager = manager_with(16, 2);
        let target = manager.target_chunks(Point2::new(-20, -20));

        // The square [-22, -18] maps to the chunk range [-2, -1]; chunk
        // (-2, -2) covers world blocks -32..=-17 and must be included.
        // Truncating division would map -22 to chunk -1 and miss it.
        assert!(target.contains(&Point2::new(-2, -2)));
        assert_eq!(target.len(), 4);
        for cx in -2..=-1 {
            for cz in -2..=-1 {
                assert!(target.contains(&Point2::new(cx, cz)));
            }
        }
    }

    #[test]
    fn target_set_includes_partially_overlapped_chunks() {
        let manager = manager_with(16, 0);
        let target = manager.target_chunks(Point2::new(8, 8));

        // A zero-radius square still includes the ceiling of its max bound,
        // so the neighboring chunk on each axis is targeted as well.
        assert_eq!(target.len(), 4);
        for cx in 0..=1 {
            for cz in 0..=1 {
                assert!(target.contains(&Point2::new(cx, cz)));
            }
        }
    }

    #[test]
    fn reconcile_generates_exactly_the_target_set() {
        let mut manager = manager_with(16, 2);
        manager.reconcile(Point2::new(0, 0));

        let target: HashSet<Point2<i32>> = manager.target_chunks(Point2::new(0, 0)).into_iter().collect();
        let resident: HashSet<Point2<i32>> = manager.world().chunks.keys().copied().collect();
        assert_eq!(resident, target);
    }
}
