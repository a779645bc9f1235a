//! Client-side reactive state shared through Leptos context.

pub mod newsroom;
