//! Collecting tiles per block and merging them into one run-wide set.
//!
//! Each block of input records is scanned by a [`BlockWorker`] that fills a private
//! [`LocalTileSet`] without any locking. When the worker finishes (or is dropped) its tiles are
//! merged into the shared [`GlobalTileSet`], taking the lock once per block.

mod global;
mod local;
mod worker;

pub use global::*;
pub use local::*;
pub use worker::*;
