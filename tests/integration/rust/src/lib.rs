//! Integration test suite for the real-type workspace
//!
//! This crate provides integration tests that verify the value model, the
//! classifier and the example harness work together across component
//! boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use type_check;
    pub use type_inspect;
}
