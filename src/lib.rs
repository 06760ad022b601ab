#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A streaming voxel world core: deterministic per-chunk terrain generation
//! with per-block face visibility, and a stream manager that keeps the
//! resident chunk set synchronized with an observer's position.
//!
//! ## Key Modules
//!
//! * `config` - Validated streaming configuration (chunk size, render radius)
//! * `voxels` - Blocks, chunks, terrain generation, and the streaming world
//! * `texture_registry` - Per-type per-face texture handle lookup for the
//!   presentation layer
//!
//! ## Architecture
//!
//! The crate has two core components. The **terrain generator** is a pure
//! function from a chunk coordinate to a fully populated chunk: every
//! position in the chunk's column is stratified by height (stone, then
//! dirt, grass on top) and each block's six-face visibility is computed
//! against the chunk's own block set. The **chunk stream manager** owns the
//! resident chunk set and reconciles it once per tick against the target
//! set derived from the observer position and render radius.
//!
//! The graphics presentation layer is an external collaborator: it iterates
//! the resident chunks read-only between ticks and maps block types to
//! texture handles through the [`TextureRegistry`]. Nothing in this crate
//! opens windows, loads assets, or draws.
//!
//! ## Usage
//!
//! ```
//! use cgmath::Point2;
//! use voxel_world::{ChunkStreamManager, StreamConfig};
//!
//! let config = StreamConfig::new(16, 2).expect("valid configuration");
//! let mut manager = ChunkStreamManager::new(config);
//!
//! // One reconciliation per tick, driven by the observer position.
//! manager.reconcile(Point2::new(0, 0));
//!
//! for chunk in manager.world().iter_chunks() {
//!     for (_position, _block_type, _visible_faces) in chunk.iter_blocks() {
//!         // Hand each visible face to the presentation layer.
//!     }
//! }
//! ```

use cgmath::Point2;
use log::info;

mod config;
mod texture_registry;
mod voxels;

pub use config::{ConfigError, StreamConfig, DEFAULT_CHUNK_SIZE, DEFAULT_RENDER_RADIUS};
pub use texture_registry::{TextureHandle, TextureRegistry};
pub use voxels::block::block_side::BlockSide;
pub use voxels::block::block_type::{BlockType, BLOCK_TYPE_COUNT};
pub use voxels::block::{Block, BlockTypeSize, FaceMaskSize};
pub use voxels::chunk::{Chunk, WORLD_COLUMN_LAYERS, WORLD_FLOOR_Y, WORLD_SURFACE_Y};
pub use voxels::streaming::{floor_div, ChunkStreamManager};
pub use voxels::world::World;

/// Runs a short headless streaming demonstration.
///
/// Initializes logging, builds the default configuration, and walks an
/// observer eastward through the world one block per tick, reconciling the
/// resident chunk set every step. Run with `RUST_LOG=debug` to watch chunks
/// enter and leave the render radius.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = StreamConfig::new(DEFAULT_CHUNK_SIZE, DEFAULT_RENDER_RADIUS)
        .expect("default stream configuration is valid");
    let mut manager = ChunkStreamManager::new(config);

    for tick in 0..64 {
        let observer = Point2::new(tick, 0);
        manager.reconcile(observer);
    }

    let visible_faces: usize = manager
        .world()
        .iter_chunks()
        .flat_map(Chunk::iter_blocks)
        .map(|(_, _, faces)| faces.iter().filter(|visible| **visible).count())
        .sum();

    info!(
        "Streaming demo finished with {} resident chunks and {} visible faces",
        manager.world().chunk_count(),
        visible_faces
    );
}
