//! Ordering rules shared by every library backend.

use scriptwright_core::GenerationResult;

/// Puts `result` at the front, dropping any older entry with the same id.
pub(crate) fn upsert_front(entries: &mut Vec<GenerationResult>, result: &GenerationResult) {
    entries.retain(|entry| entry.id != result.id);
    entries.insert(0, result.clone());
}

/// Removes the entry with `id`, returning whether one existed.
pub(crate) fn remove(entries: &mut Vec<GenerationResult>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    entries.len() != before
}

pub(crate) fn find(entries: &[GenerationResult], id: &str) -> Option<GenerationResult> {
    entries.iter().find(|entry| entry.id == id).cloned()
}
