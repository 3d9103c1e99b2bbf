//! Table snapshot shared by the in-process and archive stores.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{
    LinkedPhoto, MediaId, MediaRecord, Memory, MemoryId, MemoryMediaLink, MemoryPerson,
};

/// Every table of a family archive.
///
/// This is also the on-disk JSON layout of an archive file. Missing tables
/// deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArchiveSnapshot {
    #[serde(default)]
    pub memories: Vec<Memory>,

    #[serde(default)]
    pub media: Vec<MediaRecord>,

    #[serde(default)]
    pub links: Vec<MemoryMediaLink>,

    #[serde(default)]
    pub people: Vec<MemoryPerson>,
}

impl ArchiveSnapshot {
    pub fn memory(&self, id: MemoryId) -> Option<Memory> {
        self.memories.iter().find(|m| m.id == id).cloned()
    }

    pub fn memories_by_id(&self) -> Vec<Memory> {
        let mut memories = self.memories.clone();
        memories.sort_by_key(|m| m.id);
        memories
    }

    pub fn people_for(&self, memory_id: MemoryId) -> Vec<String> {
        self.people
            .iter()
            .filter(|p| p.memory_id == memory_id)
            .map(|p| p.person_name.clone())
            .collect()
    }

    pub fn media_item(&self, id: MediaId) -> Option<MediaRecord> {
        self.media.iter().find(|m| m.id == id).cloned()
    }

    pub fn media_by_id(&self) -> Vec<MediaRecord> {
        let mut media = self.media.clone();
        media.sort_by_key(|m| m.id);
        media
    }

    pub fn unlinked_media(&self, memory_id: MemoryId, file_type: &str) -> Vec<MediaRecord> {
        let linked: HashSet<MediaId> = self
            .links
            .iter()
            .filter(|l| l.memory_id == memory_id)
            .map(|l| l.media_id)
            .collect();

        let mut candidates: Vec<MediaRecord> = self
            .media
            .iter()
            .filter(|m| m.file_type == file_type && !linked.contains(&m.id))
            .cloned()
            .collect();
        candidates.sort_by_key(|m| m.id);
        candidates
    }

    fn has_link(&self, memory_id: MemoryId, media_id: MediaId) -> bool {
        self.links
            .iter()
            .any(|l| l.memory_id == memory_id && l.media_id == media_id)
    }

    /// Insert at `max(order) + 1`, or `0` for the first link. `None` if present.
    pub fn append_link(&mut self, memory_id: MemoryId, media_id: MediaId) -> Option<i64> {
        if self.has_link(memory_id, media_id) {
            return None;
        }

        let display_order = self
            .links
            .iter()
            .filter(|l| l.memory_id == memory_id)
            .map(|l| l.display_order)
            .max()
            .map_or(0, |max| max + 1);

        self.links.push(MemoryMediaLink {
            memory_id,
            media_id,
            display_order,
        });
        Some(display_order)
    }

    /// Links joined with their media records. Links to missing media are skipped.
    pub fn linked(&self, memory_id: MemoryId) -> Vec<LinkedPhoto> {
        let mut links: Vec<&MemoryMediaLink> = self
            .links
            .iter()
            .filter(|l| l.memory_id == memory_id)
            .collect();
        // stable: equal orders keep insertion order
        links.sort_by_key(|l| l.display_order);

        links
            .into_iter()
            .filter_map(|link| {
                let media = self.media.iter().find(|m| m.id == link.media_id)?;
                Some(LinkedPhoto {
                    photo_id: media.id,
                    filename: media.filename.clone(),
                    title: media.title.clone(),
                    order: link.display_order,
                })
            })
            .collect()
    }

    pub fn remove_link(&mut self, memory_id: MemoryId, media_id: MediaId) -> bool {
        let before = self.links.len();
        self.links
            .retain(|l| !(l.memory_id == memory_id && l.media_id == media_id));
        self.links.len() != before
    }

    /// Drop every link of the memory, then insert `media_ids` at orders `0..n`.
    /// Repeated ids keep their first position.
    pub fn replace_links(&mut self, memory_id: MemoryId, media_ids: &[MediaId]) {
        self.links.retain(|l| l.memory_id != memory_id);

        let mut seen = HashSet::new();
        let fresh = media_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .zip(0..)
            .map(|(media_id, display_order)| MemoryMediaLink {
                memory_id,
                media_id,
                display_order,
            });
        self.links.extend(fresh);
    }

    /// Insert or replace a memory by id
    pub fn upsert_memory(&mut self, memory: Memory) {
        match self.memories.iter_mut().find(|m| m.id == memory.id) {
            Some(existing) => *existing = memory,
            None => self.memories.push(memory),
        }
    }

    /// Insert or replace a media record by id
    pub fn upsert_media(&mut self, media: MediaRecord) {
        match self.media.iter_mut().find(|m| m.id == media.id) {
            Some(existing) => *existing = media,
            None => self.media.push(media),
        }
    }

    pub fn add_person(&mut self, memory_id: MemoryId, person_name: impl Into<String>) {
        self.people.push(MemoryPerson {
            memory_id,
            person_name: person_name.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_media(ids: &[MediaId]) -> ArchiveSnapshot {
        let mut snapshot = ArchiveSnapshot::default();
        snapshot.upsert_memory(Memory::new(1, "A day at the beach"));
        for id in ids {
            snapshot.upsert_media(MediaRecord::image(*id, format!("photo_{id}.jpg")));
        }
        snapshot
    }

    #[test]
    fn test_append_link_orders_and_ignores_duplicates() {
        let mut snapshot = snapshot_with_media(&[10, 11, 12]);

        assert_eq!(snapshot.append_link(1, 10), Some(0));
        assert_eq!(snapshot.append_link(1, 11), Some(1));
        assert_eq!(snapshot.append_link(1, 10), None);
        assert_eq!(snapshot.links.len(), 2);

        // another memory starts its own sequence
        assert_eq!(snapshot.append_link(2, 10), Some(0));
    }

    #[test]
    fn test_append_link_follows_max_not_count() {
        let mut snapshot = snapshot_with_media(&[10, 11]);
        snapshot.links.push(MemoryMediaLink {
            memory_id: 1,
            media_id: 10,
            display_order: 7,
        });
        assert_eq!(snapshot.append_link(1, 11), Some(8));
    }

    #[test]
    fn test_unlinked_media_excludes_links_and_other_types() {
        let mut snapshot = snapshot_with_media(&[12, 10, 11]);
        snapshot.upsert_media(MediaRecord::image(13, "voice.mp3").with_file_type("audio"));
        snapshot.append_link(1, 11);

        let ids: Vec<MediaId> = snapshot
            .unlinked_media(1, "image")
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn test_linked_sorted_by_order_with_stable_ties() {
        let mut snapshot = snapshot_with_media(&[10, 11, 12]);
        for (media_id, display_order) in [(10, 1), (11, 0), (12, 1)] {
            snapshot.links.push(MemoryMediaLink {
                memory_id: 1,
                media_id,
                display_order,
            });
        }

        let ids: Vec<MediaId> = snapshot.linked(1).iter().map(|p| p.photo_id).collect();
        assert_eq!(ids, vec![11, 10, 12]);
    }

    #[test]
    fn test_replace_links_renumbers_and_dedupes() {
        let mut snapshot = snapshot_with_media(&[10, 11, 12]);
        snapshot.append_link(1, 10);
        snapshot.append_link(2, 10);

        snapshot.replace_links(1, &[12, 11, 12]);
        let linked = snapshot.linked(1);
        assert_eq!(
            linked.iter().map(|p| (p.photo_id, p.order)).collect::<Vec<_>>(),
            vec![(12, 0), (11, 1)]
        );
        assert_eq!(snapshot.linked(2).len(), 1);
    }

    #[test]
    fn test_remove_link() {
        let mut snapshot = snapshot_with_media(&[10]);
        snapshot.append_link(1, 10);
        assert!(snapshot.remove_link(1, 10));
        assert!(!snapshot.remove_link(1, 10));
    }
}
