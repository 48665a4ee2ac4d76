//! Loaders for the JSON setup, target and matcher descriptions.
//!
//! Setup and target files have a fixed schema and deserialize into typed
//! structures; the matcher file is schema-less and stays a raw JSON tree,
//! queried leniently by [`crate::mask::StripMask`].

pub mod matcher;
pub mod setup;
pub mod target;
