//! Home page split of a fetched episode list.

use podcastr_core::Episode;

/// Number of episodes shown as "latest releases" unless configured otherwise
pub const DEFAULT_LATEST_COUNT: usize = 2;

/// Section of the episode listing a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Latest,
    All,
}

/// A fetched list split into the latest releases and the remainder.
///
/// Both sections play from the same combined queue, so selecting a row
/// from either one starts playback at its position in `latest ++ all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeListing {
    pub latest: Vec<Episode>,
    pub all: Vec<Episode>,
}

impl EpisodeListing {
    /// Split `episodes` keeping the first `latest_count` as latest releases.
    pub fn split(mut episodes: Vec<Episode>, latest_count: usize) -> Self {
        let all = episodes.split_off(latest_count.min(episodes.len()));
        Self {
            latest: episodes,
            all,
        }
    }

    /// Total number of episodes across both sections
    pub fn len(&self) -> usize {
        self.latest.len() + self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.all.is_empty()
    }

    /// The combined playback queue
    pub fn queue(&self) -> Vec<Episode> {
        self.latest.iter().chain(self.all.iter()).cloned().collect()
    }

    /// Index into [`queue`](Self::queue) for a row of a section.
    ///
    /// Returns `None` when the row is outside the section.
    pub fn queue_index(&self, section: Section, row: usize) -> Option<usize> {
        match section {
            Section::Latest => (row < self.latest.len()).then_some(row),
            Section::All => (row < self.all.len()).then_some(self.latest.len() + row),
        }
    }

    /// Index into the combined queue of the episode with `id`
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.latest
            .iter()
            .chain(self.all.iter())
            .position(|episode| episode.id == id)
    }
}
