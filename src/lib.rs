// SPDX-License-Identifier: MPL-2.0
//! `zs_tool` is a small desktop utility for decompressing Zstandard data,
//! built with the Iced GUI framework.
//!
//! It decompresses single `.zs`/`.zst` files or whole folder trees, resolves
//! optional `.zsdic` decoder dictionaries from a configured directory, and
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

pub mod app;
pub mod config;
pub mod decompress;
pub mod error;
pub mod i18n;
pub mod ui;
