//! # Le Chiffre
//!
//! Keymaps and callback glue for the Le Chiffre keyboard: an RGB pseudo-toggle, a layer
//! indicator LED, an OLED status screen with layer names and a keylogger.
//!
//! The firmware runtime is reached only through the traits in [`host`], every piece of state
//! lives in plain structs owned by the [`keyboard::Keyboard`] dispatcher.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub use heapless;
pub use lechiffre_types as types;

pub mod combo;
pub mod config;
pub mod display;
pub mod event;
pub mod hooks;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod keymaps;
pub mod layer;
mod layout_macro;
pub mod light;
