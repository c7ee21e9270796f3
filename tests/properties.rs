//! Property tests for Sidekick.
//!
//! Properties use randomized input generation to protect naming and
//! descriptor invariants like "never panics" and "previews never collide
//! with the primary app".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/descriptor.rs"]
mod descriptor;

#[path = "properties/routing.rs"]
mod routing;

#[path = "properties/value_objects.rs"]
mod value_objects;
