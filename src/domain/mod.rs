//! In-memory domain state.
//!
//! Liked and expanded flags live only for the process lifetime and are never
//! derived from the network payload. Both containers are owned by the single
//! UI task and handed to controllers at construction; worker tasks never see
//! them.

pub mod expansion;
pub mod likes;

pub use expansion::{ExpansionState, SharedExpansion};
pub use likes::{LikeState, SharedLikes};
