//! Shared Dioxus components and browser adapters for the manhole report form.
//!
//! This crate provides:
//! - `platform`: web-sys implementations of the positioning and file-reading capabilities
//! - `state`: `AppState` holding the form record in a Dioxus Signal
//! - `components`: RSX components for each form section

pub mod components;
pub mod platform;
pub mod state;
