//! # Le Chiffre types
//!
//! Fundamental type definitions shared by the keymap tables and the callback glue.
//!
//! ## Modules
//!
//! - [`action`] - Key actions stored in keymaps and encoder maps (key presses, tap/hold, layer operations)
//! - [`keycode`] - HID keycodes, consumer keys, lighting keys and user keycodes
//! - [`modifier`] - Modifier key combinations and HID modifier state
//! - [`led_indicator`] - Lock key (NumLock, CapsLock, ...) states reported by the host
//! - [`lighting`] - RGB matrix effect modes and HSV colors

#![no_std]

pub mod action;
pub mod keycode;
pub mod led_indicator;
pub mod lighting;
pub mod modifier;
