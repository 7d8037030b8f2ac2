//! File-name sanitization.
//!
//! Archive file names arrive from model- or user-controlled text, so the
//! name is cleaned against an explicit illegal-character enumeration
//! rather than trusted. The set is the canonical Windows invalid-filename
//! set — a strict superset of the Unix one (`/`, NUL) — applied on every
//! platform so produced archives stay portable.

use newsdesk_core::error::ArchiveError;

/// Characters that may not appear in a file name on at least one
/// supported platform.
pub const INVALID_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replace every illegal character (and ASCII control characters) in
/// `name` with `_`, one replacement per character.
///
/// Rejects names that are empty or whitespace-only after cleaning —
/// there is nothing meaningful to write under such a name.
pub fn sanitize_file_name(name: &str) -> Result<String, ArchiveError> {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if INVALID_FILE_NAME_CHARS.contains(&c) || c.is_ascii_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ArchiveError::InvalidFileName(format!(
            "nothing left of {name:?} after sanitization"
        )));
    }

    Ok(cleaned.to_string())
}
