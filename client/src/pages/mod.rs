//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (head metadata, lookups,
//! redirects) and delegates rendering details to `components`.

pub mod article;
pub mod newsroom;
