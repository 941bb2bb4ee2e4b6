// SPDX-License-Identifier: MPL-2.0
//! Zstandard decompression engine.
//!
//! A single file is read fully into memory, validated against the frame
//! magic, and stream-decoded with the `zstd` crate. Folder decompression
//! walks the input tree, mirrors the directory structure into the output
//! directory, and strips the compression extension from every file name.
//! Per-file failures during a folder walk are collected in the summary
//! instead of aborting the walk.

pub mod dictionary;

pub use dictionary::DictionaryStore;

use crate::error::{Error, Result, ZstdError};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Magic number at the start of every Zstandard frame.
const ZSTD_MAGIC: u32 = 0xFD2F_B528;

/// Skippable frames use magics `0x184D2A50..=0x184D2A5F`.
const SKIPPABLE_MAGIC_BASE: u32 = 0x184D_2A50;
const SKIPPABLE_MAGIC_MASK: u32 = 0xFFFF_FFF0;

/// File extensions recognized as Zstandard-compressed.
pub const COMPRESSED_EXTENSIONS: &[&str] = &["zs", "zst", "zstd"];

/// Returns whether `path` carries a recognized compressed extension.
pub fn is_compressed_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            COMPRESSED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Returns the output file name for a source path: the file name with the
/// compression extension stripped. A path without a recognized extension is
/// returned unchanged (minus its directory).
pub fn output_name(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    if is_compressed_path(path) {
        path.file_stem().map(PathBuf::from)
    } else {
        Some(PathBuf::from(name))
    }
}

/// Returns whether `data` starts with a Zstandard (or skippable) frame magic.
fn has_frame_magic(data: &[u8]) -> bool {
    if data.len() < 4 {
        return false;
    }
    let magic = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    magic == ZSTD_MAGIC || (magic & SKIPPABLE_MAGIC_MASK) == SKIPPABLE_MAGIC_BASE
}

fn map_decoder_error(err: std::io::Error) -> Error {
    Error::Zstd(ZstdError::from_message(&err.to_string()))
}

/// Decompresses an in-memory Zstandard stream, optionally with a decoder
/// dictionary.
pub fn decompress_bytes(data: &[u8], dict: Option<&[u8]>) -> Result<Vec<u8>> {
    if !has_frame_magic(data) {
        return Err(ZstdError::NotZstandard.into());
    }

    let mut decoder = match dict {
        Some(dict) => zstd::stream::read::Decoder::with_dictionary(data, dict),
        None => zstd::stream::read::Decoder::with_buffer(data),
    }
    .map_err(map_decoder_error)?;

    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(map_decoder_error)?;
    Ok(out)
}

/// Decompresses a single file, resolving the decoder dictionary from the
/// store by the source file name.
pub fn decompress_file(path: &Path, dictionaries: &DictionaryStore) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    decompress_bytes(&data, dictionaries.for_target(path))
}

/// Decompresses `src` and writes the result to `dest`, creating parent
/// directories as needed. Returns the number of bytes written.
pub fn decompress_file_to(
    src: &Path,
    dest: &Path,
    dictionaries: &DictionaryStore,
) -> Result<u64> {
    let out = decompress_file(src, dictionaries)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, &out)?;
    Ok(out.len() as u64)
}

/// Outcome of a folder decompression walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSummary {
    /// Files successfully decompressed into the output tree.
    pub decompressed: usize,
    /// Files without a recognized compressed extension, left untouched.
    pub skipped: usize,
    /// Files that failed to decompress, with the reason for each.
    pub failed: Vec<(PathBuf, Error)>,
}

impl FolderSummary {
    /// Returns whether every compressed file decompressed cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Decompresses every compressed file under `input` into `output`, mirroring
/// the relative directory structure. Only the top level is visited unless
/// `recursive` is set.
///
/// A file that fails to decompress is recorded in the summary and the walk
/// continues.
pub fn decompress_folder(
    input: &Path,
    output: &Path,
    recursive: bool,
    dictionaries: &DictionaryStore,
) -> Result<FolderSummary> {
    if !input.is_dir() {
        return Err(Error::Io(format!(
            "not a directory: {}",
            input.display()
        )));
    }

    let mut summary = FolderSummary::default();
    let mut pending = vec![input.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                if recursive {
                    pending.push(path);
                }
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            if !is_compressed_path(&path) {
                summary.skipped += 1;
                continue;
            }

            // Mirror the source layout below the output root.
            let relative = path
                .strip_prefix(input)
                .map_err(|_| Error::Io(format!("path escapes input root: {}", path.display())))?;
            let mut dest = output.join(relative);
            if let Some(name) = output_name(&path) {
                dest.set_file_name(name);
            }

            match decompress_file_to(&path, &dest, dictionaries) {
                Ok(_) => summary.decompressed += 1,
                Err(err) => summary.failed.push((path, err)),
            }
        }
    }

    Ok(summary)
}
