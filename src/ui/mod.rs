// SPDX-License-Identifier: MPL-2.0
//! UI components: screens, navigation, notifications, and shared styling.

pub mod about;
pub mod decompressor;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
