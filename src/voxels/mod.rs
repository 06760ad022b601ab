//! # Voxel World Core
//!
//! This module contains the core voxel functionality: representing blocks
//! and chunks, generating terrain, and streaming the resident chunk set.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Defines individual voxel types, faces, and the compact
//!   per-block data carrying face visibility
//! * **Chunk**: A fixed-footprint column of blocks, the unit of streaming
//! * **World**: The sparse set of currently-resident chunks
//! * **Streaming**: Computes the target chunk set for an observer position
//!   and reconciles the world against it each tick
//!
//! ## Data Flow
//!
//! 1. The streaming manager receives the observer position each tick
//! 2. It computes the target chunk-coordinate set for the render radius
//! 3. Missing coordinates are generated by the terrain generator and
//!    inserted whole; stale coordinates are removed whole
//! 4. The presentation layer iterates the resident chunks read-only
//!    between ticks

pub mod block;
pub mod chunk;
pub mod streaming;
pub mod world;
