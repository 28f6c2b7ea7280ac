// RetinaLens - core/accept.rs
//
// File-acceptance policy for the upload surface.
//
// Two rules, both enforced here rather than scattered through the UI:
//   1. Only .jpg/.jpeg/.png files are eligible (case-insensitive).
//   2. At most one file proceeds per interaction: the first accepted file
//      of a multi-file drop wins, everything else is silently ignored.

use crate::util::constants::ACCEPTED_IMAGE_EXTENSIONS;
use std::path::{Path, PathBuf};

/// Returns true if the path carries an accepted image extension.
pub fn is_accepted_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reduces a dropped batch to the single file that may proceed.
///
/// Returns the first accepted file, or `None` when nothing in the batch is
/// eligible. Rejected files produce no error; the drop is simply inert.
pub fn select_single_image(paths: &[PathBuf]) -> Option<PathBuf> {
    paths.iter().find(|p| is_accepted_image(p)).cloned()
}
