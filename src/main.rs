//! # Voxel World Demo Entry Point
//!
//! This is the entry point for the headless streaming demonstration. It
//! simply calls into the library's `run()` function, which initializes
//! logging and drives an observer through the world.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_world::run();
}
