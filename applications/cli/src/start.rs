//! Where `play` starts in the home page listing

use crate::error::{CliError, Result};
use podcastr_client::{EpisodeListing, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartAt {
    /// Position in the combined queue, as numbered by `list`
    Position(usize),
    /// Row within one section of the listing
    Row(Section, usize),
    /// Episode with this id
    Episode(String),
}

impl StartAt {
    /// Queue index to start playback at
    ///
    /// `Ok(None)` means an episode id that the listing does not contain; the
    /// caller plays it on its own.
    pub fn resolve(&self, listing: &EpisodeListing) -> Result<Option<usize>> {
        if let StartAt::Episode(id) = self {
            return Ok(listing.position_of(id));
        }

        if listing.is_empty() {
            return Err(CliError::NoEpisodes);
        }

        match *self {
            StartAt::Position(index) if index < listing.len() => Ok(Some(index)),
            StartAt::Position(index) => Err(CliError::IndexOutOfRange {
                index,
                len: listing.len(),
            }),
            StartAt::Row(section, row) => listing
                .queue_index(section, row)
                .map(Some)
                .ok_or_else(|| CliError::IndexOutOfRange {
                    index: row,
                    len: match section {
                        Section::Latest => listing.latest.len(),
                        Section::All => listing.all.len(),
                    },
                }),
            StartAt::Episode(_) => Ok(None),
        }
    }
}
