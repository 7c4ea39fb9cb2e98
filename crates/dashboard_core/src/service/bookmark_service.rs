//! Bookmark use-case service.
//!
//! # Responsibility
//! - Create, delete and reorder bookmarks persisted in the `bookmarks` slot.
//! - Provide search/tag filtering and tag aggregation for the filter bar.
//!
//! # Invariants
//! - Filtering never reorders; results keep list order.
//! - Moves address a bookmark by id and swap it with its direct neighbor in
//!   the full (unfiltered) list.

use crate::model::bookmark::{parse_tag_input, Bookmark};
use crate::service::{ServiceError, ServiceResult};
use crate::storage::{SlotStorage, SLOT_BOOKMARKS};
use crate::store::record_store::RecordStore;
use crate::store::reorder::MoveDirection;
use log::info;
use std::collections::HashSet;

/// Returns bookmarks matching both the search term and the selected tag.
///
/// Search is a case-insensitive substring match against title, url or note;
/// an empty term matches everything. An empty tag matches everything,
/// otherwise the tag must be one of the bookmark's tags.
pub fn filter_bookmarks<'a>(
    records: &'a [Bookmark],
    search_term: &str,
    selected_tag: &str,
) -> Vec<&'a Bookmark> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|bookmark| matches_search(bookmark, &needle))
        .filter(|bookmark| selected_tag.is_empty() || bookmark.has_tag(selected_tag))
        .collect()
}

fn matches_search(bookmark: &Bookmark, needle: &str) -> bool {
    needle.is_empty()
        || [&bookmark.title, &bookmark.url, &bookmark.note]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Union of all bookmark tags, each once, in first-seen order.
pub fn collect_tags(records: &[Bookmark]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|bookmark| bookmark.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Bookmark widget state bound to its persistent slot.
pub struct BookmarkService<S: SlotStorage> {
    store: RecordStore<Bookmark, S>,
}

impl<S: SlotStorage> BookmarkService<S> {
    /// Loads the bookmark list from `storage`.
    pub fn open(storage: S) -> Self {
        Self {
            store: RecordStore::open(storage, SLOT_BOOKMARKS),
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.store.records()
    }

    /// Creates one bookmark from form input and appends it.
    ///
    /// `tags_input` is comma separated.
    pub fn add(
        &mut self,
        title: &str,
        url: &str,
        tags_input: &str,
        note: &str,
    ) -> ServiceResult<Bookmark> {
        let bookmark = Bookmark::new(title, url, parse_tag_input(tags_input), note)?;
        self.store.append(bookmark.clone())?;
        info!(
            "event=bookmark_add module=service status=ok tags={} total={}",
            bookmark.tags.len(),
            self.store.len()
        );
        Ok(bookmark)
    }

    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        self.require(id)?;
        self.store.remove_by_id(id)?;
        Ok(())
    }

    /// Moves one bookmark a single step; returns `false` at list edges.
    pub fn move_bookmark(&mut self, id: &str, direction: MoveDirection) -> ServiceResult<bool> {
        let index = self.require(id)?;
        Ok(self.store.move_adjacent(index, direction)?)
    }

    /// Bookmarks visible under the current search term and tag selection.
    pub fn visible(&self, search_term: &str, selected_tag: &str) -> Vec<&Bookmark> {
        filter_bookmarks(self.store.records(), search_term, selected_tag)
    }

    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(self.store.records())
    }

    fn require(&self, id: &str) -> ServiceResult<usize> {
        self.store
            .position(id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}
