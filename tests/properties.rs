//! Property tests for Tuyau.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics", "round-trips" and "idempotent".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/naming.rs"]
mod naming;

#[path = "properties/layout.rs"]
mod layout;

#[path = "properties/textures.rs"]
mod textures;
