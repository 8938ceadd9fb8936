//! HealthPoint component kit: thin styled wrappers over native elements and
//! `dioxus-primitives`, each loading its own stylesheet.

pub mod components;

pub use components::*;
