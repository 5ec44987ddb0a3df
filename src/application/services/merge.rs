//! Merge engine for independently sourced collections.

use std::collections::HashSet;

use crate::domain::entities::DiscoverVideo;

/// Record that can participate in a cross-source merge.
pub trait MergeRecord {
    /// Identity unique within a merged result; source-prefixed so records
    /// from different feeds can never collide.
    fn merge_id(&self) -> &str;

    /// Canonical timestamp string used for recency ordering. Values are
    /// compared lexicographically, not as parsed dates, so they must be in
    /// a directly comparable form.
    fn recency_key(&self) -> &str;
}

/// Flattens batches into one list, deduplicated by id (first occurrence
/// wins) and ordered newest first.
///
/// Batches from failed sources arrive empty; an entirely empty merge result
/// is a no-data condition for the caller, not an error.
#[must_use]
pub fn merge_by_recency<T: MergeRecord>(batches: Vec<Vec<T>>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut merged: Vec<T> = batches
        .into_iter()
        .flatten()
        .filter(|record| seen.insert(record.merge_id().to_string()))
        .collect();

    merged.sort_by(|a, b| b.recency_key().cmp(a.recency_key()));
    merged
}

impl MergeRecord for DiscoverVideo {
    fn merge_id(&self) -> &str {
        &self.id
    }

    fn recency_key(&self) -> &str {
        self.created_at.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, created_at: Option<&str>) -> DiscoverVideo {
        DiscoverVideo {
            id: id.to_string(),
            youtube_id: "yt".to_string(),
            title: String::new(),
            thumbnail_url: None,
            username: None,
            created_at: created_at.map(ToString::to_string),
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_merge_sorts_newest_first() {
        let merged = merge_by_recency(vec![
            vec![
                video("combined-1", Some("2025-10-01T00:00:00.000Z")),
                video("combined-2", Some("2025-10-03T00:00:00.000Z")),
            ],
            vec![video("music_video-a", Some("2025-10-02T00:00:00.000Z"))],
        ]);

        let ids: Vec<&str> = merged.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["combined-2", "music_video-a", "combined-1"]);
    }

    #[test]
    fn test_failed_source_contributes_nothing() {
        // A failed fetch is represented as an empty batch.
        let merged = merge_by_recency(vec![
            vec![
                video("combined-1", Some("2025-10-01T00:00:00.000Z")),
                video("combined-2", Some("2025-10-03T00:00:00.000Z")),
            ],
            Vec::new(),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "combined-2");
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let merged = merge_by_recency(vec![
            vec![video("combined-1", Some("2025-10-05T00:00:00.000Z"))],
            vec![video("combined-1", Some("2025-10-01T00:00:00.000Z"))],
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].created_at.as_deref(),
            Some("2025-10-05T00:00:00.000Z")
        );
    }

    #[test]
    fn test_missing_timestamps_sort_last() {
        let merged = merge_by_recency(vec![vec![
            video("a", None),
            video("b", Some("2025-01-01T00:00:00.000Z")),
        ]]);

        assert_eq!(merged[0].id, "b");
        assert_eq!(merged[1].id, "a");
    }

    #[test]
    fn test_all_sources_empty_is_empty_not_an_error() {
        let merged: Vec<DiscoverVideo> = merge_by_recency(vec![Vec::new(), Vec::new()]);
        assert!(merged.is_empty());
    }
}
