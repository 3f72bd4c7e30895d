/// Photo entity and decoding module
///
/// This module handles:
/// - The immutable photo value the editor works on (entry.rs)
/// - Reading and decoding picked files off the UI loop (loader.rs)

pub mod entry;
pub mod loader;

pub use entry::{PhotoEntry, PhotoId};
