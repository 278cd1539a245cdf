//! Property-based tests for the playback session
//!
//! Uses proptest to verify session invariants across many random queues and
//! command sequences.

use podcastr_core::Episode;
use podcastr_playback::{EndedOutcome, PlaybackSession, SessionConfig};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_episode() -> impl Strategy<Value = Episode> {
    (
        "[a-z0-9]{1,10}",    // id
        "[A-Za-z ]{1,30}",   // title
        "[A-Za-z, ]{1,30}",  // members
        0u64..10_000,        // duration
    )
        .prop_map(|(id, title, members, duration_seconds)| Episode {
            audio_url: format!("https://example.com/{}.m4a", id),
            thumbnail_url: format!("https://example.com/{}.jpg", id),
            id,
            title,
            members,
            duration_seconds,
            published_at: "22 jan 21".to_string(),
            description: None,
        })
}

fn arbitrary_queue() -> impl Strategy<Value = Vec<Episode>> {
    prop::collection::vec(arbitrary_episode(), 1..30)
}

fn queue_with_index() -> impl Strategy<Value = (Vec<Episode>, usize)> {
    arbitrary_queue().prop_flat_map(|queue| {
        let len = queue.len();
        (Just(queue), 0..len)
    })
}

#[derive(Debug, Clone)]
enum Command {
    PlayList(Vec<Episode>, usize),
    TogglePlay,
    SetPlaying(bool),
    ToggleLoop,
    ToggleShuffle,
    Next,
    Previous,
    Ended,
    Clear,
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        // Start index may be out of range on purpose
        (arbitrary_queue(), 0usize..40).prop_map(|(q, i)| Command::PlayList(q, i)),
        Just(Command::TogglePlay),
        any::<bool>().prop_map(Command::SetPlaying),
        Just(Command::ToggleLoop),
        Just(Command::ToggleShuffle),
        Just(Command::Next),
        Just(Command::Previous),
        Just(Command::Ended),
        Just(Command::Clear),
    ]
}

fn apply(session: &mut PlaybackSession, command: Command) {
    match command {
        Command::PlayList(queue, index) => {
            session.play_list(queue, index).ok();
        }
        Command::TogglePlay => {
            session.toggle_play().ok();
        }
        Command::SetPlaying(value) => {
            session.set_playing_state(value).ok();
        }
        Command::ToggleLoop => {
            session.toggle_loop();
        }
        Command::ToggleShuffle => {
            session.toggle_shuffle();
        }
        Command::Next => {
            session.play_next().ok();
        }
        Command::Previous => {
            session.play_previous().ok();
        }
        Command::Ended => {
            session.on_episode_ended();
        }
        Command::Clear => session.clear(),
    }
}

fn assert_invariants(session: &PlaybackSession) -> Result<(), TestCaseError> {
    match session.current_index() {
        Some(index) => {
            prop_assert!(index < session.len());
        }
        None => {
            prop_assert!(session.is_empty());
        }
    }
    prop_assert_eq!(session.current_index().is_some(), !session.is_empty());
    prop_assert!(!(session.is_playing() && session.is_empty()));
    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: after play_list, sequential boundary queries match the index
    #[test]
    fn boundaries_after_play_list((queue, index) in queue_with_index()) {
        let len = queue.len();
        let mut session = PlaybackSession::default();
        session.play_list(queue, index).unwrap();

        prop_assert_eq!(session.has_next(), index < len - 1);
        prop_assert_eq!(session.has_previous(), index > 0);
        prop_assert_eq!(session.current_index(), Some(index));
        prop_assert!(session.is_playing());
    }

    /// Property: out-of-range start index always fails and changes nothing
    #[test]
    fn out_of_range_start_rejected(queue in arbitrary_queue(), extra in 0usize..10) {
        let len = queue.len();
        let mut session = PlaybackSession::default();

        prop_assert!(session.play_list(queue, len + extra).is_err());
        prop_assert!(session.is_empty());
        prop_assert!(!session.is_playing());
    }

    /// Property: navigation on an empty session never creates a queue
    #[test]
    fn empty_navigation_is_noop(moves in prop::collection::vec(any::<bool>(), 1..20)) {
        let mut session = PlaybackSession::default();
        for forward in moves {
            let result = if forward { session.play_next() } else { session.play_previous() };
            prop_assert!(result.is_err());
        }
        prop_assert!(session.is_empty());
        prop_assert_eq!(session.current_index(), None);
    }

    /// Property: toggle_loop is an involution
    #[test]
    fn toggle_loop_twice_restores(start_looping in any::<bool>()) {
        let mut session = PlaybackSession::new(SessionConfig {
            start_looping,
            ..Default::default()
        });
        session.toggle_loop();
        session.toggle_loop();
        prop_assert_eq!(session.is_looping(), start_looping);
    }

    /// Property: with looping on, ending an episode never moves the index
    #[test]
    fn looping_end_keeps_index(
        (queue, index) in queue_with_index(),
        shuffling in any::<bool>(),
        repeats in 1usize..10
    ) {
        let mut session = PlaybackSession::new(SessionConfig {
            shuffle_seed: Some(7),
            start_looping: true,
            start_shuffling: shuffling,
        });
        session.play_list(queue, index).unwrap();

        for _ in 0..repeats {
            prop_assert_eq!(session.on_episode_ended(), EndedOutcome::Restart);
            prop_assert_eq!(session.current_index(), Some(index));
        }
    }

    /// Property: shuffled next always lands inside the queue
    #[test]
    fn shuffle_next_in_range((queue, index) in queue_with_index(), seed in any::<u64>()) {
        let len = queue.len();
        let mut session = PlaybackSession::new(SessionConfig {
            shuffle_seed: Some(seed),
            start_shuffling: true,
            ..Default::default()
        });
        session.play_list(queue, index).unwrap();

        match session.play_next() {
            Ok(next) => {
                prop_assert!(len > 1);
                prop_assert!(next < len);
            }
            Err(err) => {
                prop_assert!(len == 1);
                prop_assert!(err.is_not_possible());
            }
        }
    }

    /// Property: invariants hold after any command sequence, and clear empties
    #[test]
    fn invariants_hold_and_clear_empties(
        commands in prop::collection::vec(arbitrary_command(), 1..40),
        seed in any::<u64>()
    ) {
        let mut session = PlaybackSession::new(SessionConfig {
            shuffle_seed: Some(seed),
            ..Default::default()
        });

        for command in commands {
            apply(&mut session, command);
            assert_invariants(&session)?;
        }

        session.clear();
        prop_assert!(session.is_empty());
        prop_assert!(!session.is_playing());
        prop_assert_eq!(session.current_index(), None);
    }

    /// Property: a failed command leaves the observable state untouched
    #[test]
    fn failed_commands_do_not_mutate(
        commands in prop::collection::vec(arbitrary_command(), 1..30),
        seed in any::<u64>()
    ) {
        let mut session = PlaybackSession::new(SessionConfig {
            shuffle_seed: Some(seed),
            ..Default::default()
        });

        for command in commands {
            let before = session.snapshot();
            let failed = match command {
                Command::Next => session.play_next().is_err(),
                Command::Previous => session.play_previous().is_err(),
                Command::TogglePlay => session.toggle_play().is_err(),
                Command::PlayList(queue, index) => session.play_list(queue, index).is_err(),
                other => {
                    apply(&mut session, other);
                    false
                }
            };

            if failed {
                prop_assert_eq!(session.snapshot(), before);
            }
        }
    }
}
