// SPDX-License-Identifier: MPL-2.0
//! Default values for user-configurable settings.

/// Whether folder decompression descends into subdirectories by default.
pub const DEFAULT_RECURSIVE: bool = true;
