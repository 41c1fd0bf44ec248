//! HSC Study UI Components
//!
//! Dioxus components shared by the desktop app. They are stateless: every
//! component renders from props and reports interaction through
//! `EventHandler`s, leaving state to `hscstudy_core::StudyApp`.

pub mod components;

pub use components::*;
