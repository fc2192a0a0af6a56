//! The components module contains all shared components for our app.

pub mod change_badge;
pub mod pico;
