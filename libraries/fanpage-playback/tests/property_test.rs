//! Property-based tests for the media shelf
//!
//! Random catalogs and activation sequences; every property checks an
//! invariant the page relies on.

use fanpage_core::testing::{RecordingOpener, RecordingSink};
use fanpage_core::types::{ElementRef, Mark, TimerTask, Track, TrackId};
use fanpage_core::TimerQueue;
use fanpage_playback::{
    classify, Catalog, PlaybackConfig, PlaybackController, TrackKind, ViewSynchronizer,
};
use proptest::prelude::*;
use std::time::Duration;

// ===== Helpers =====

fn arbitrary_src() -> impl Strategy<Value = String> {
    prop_oneof![
        "media/[a-z]{1,8}\\.(mp3|wav|ogg|m4a)",
        "media/[a-z]{1,8}\\.(MP3|Ogg)\\?v=[0-9]{1,3}",
        "https://open\\.example\\.com/track/[a-zA-Z0-9]{4,12}",
    ]
}

/// Catalog with unique ids `t0..tn`
fn arbitrary_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arbitrary_src(), 1..8).prop_map(|srcs| {
        Catalog::new(
            srcs.into_iter()
                .enumerate()
                .map(|(i, src)| Track::new(&format!("t{i}"), "Song", &src, "Band"))
                .collect(),
        )
    })
}

// ===== Property Tests =====

proptest! {
    /// Property: classification ignores case and query strings
    #[test]
    fn classification_ignores_case_and_query(
        stem in "[a-z]{1,10}",
        ext in prop::sample::select(vec!["mp3", "wav", "ogg", "m4a"]),
        query in "[a-z0-9=&]{0,12}",
    ) {
        let plain = format!("media/{stem}.{ext}");
        let shouted = plain.to_uppercase();
        let with_query = format!("{plain}?{query}");

        prop_assert_eq!(classify(&plain), TrackKind::LocalAudio);
        prop_assert_eq!(classify(&shouted), TrackKind::LocalAudio);
        prop_assert_eq!(classify(&with_query), TrackKind::LocalAudio);
    }

    /// Property: after any activation sequence, local playing marks follow
    /// the current track in both collections
    #[test]
    fn marks_follow_current_track(
        catalog in arbitrary_catalog(),
        clicks in prop::collection::vec((0usize..8, any::<bool>()), 1..20),
    ) {
        let mut view = ViewSynchronizer::new(&catalog);
        let mut timers = TimerQueue::new();
        let len = catalog.len();
        let mut playback = PlaybackController::new(
            catalog.clone(),
            Box::new(RecordingSink::new()),
            Box::new(RecordingOpener::new()),
            PlaybackConfig::default(),
        );

        for (index, on_vinyl) in clicks {
            let index = index % len;
            let origin = if on_vinyl { ElementRef::vinyl(index) } else { ElementRef::playlist(index) };
            let id = catalog.at(index).unwrap().id.clone();
            playback.activate(&id, origin, &mut view, &mut timers).unwrap();
        }

        // Let every transient mark expire
        for (timer, task) in timers.drain_all() {
            if let TimerTask::ReleaseTransient { element, track_id } = task {
                playback.release_transient(timer, element, &track_id, &mut view);
            }
        }

        let current = playback.current_track_id().cloned();
        for (i, track) in catalog.tracks().iter().enumerate() {
            let expected = current.as_ref() == Some(&track.id);
            prop_assert_eq!(view.is_marked(ElementRef::playlist(i), Mark::Playing), expected);
            prop_assert_eq!(view.is_marked(ElementRef::vinyl(i), Mark::Playing), expected);
        }
    }

    /// Property: reconcile is idempotent
    #[test]
    fn reconcile_is_idempotent(catalog in arbitrary_catalog(), pick in 0usize..10) {
        let mut view = ViewSynchronizer::new(&catalog);
        let current = catalog.at(pick % (catalog.len() + 1)).map(|t| t.id.clone());

        view.reconcile(current.as_ref());
        let once = view.clone();
        view.reconcile(current.as_ref());

        prop_assert_eq!(view, once);
    }

    /// Property: ended walks forward through local tracks and never wraps
    #[test]
    fn ended_never_wraps(tracks in 1usize..8) {
        let catalog = Catalog::new(
            (0..tracks)
                .map(|i| Track::new(&format!("t{i}"), "Song", &format!("media/{i}.mp3"), "Band"))
                .collect(),
        );
        let mut view = ViewSynchronizer::new(&catalog);
        let sink = RecordingSink::new();
        let mut playback = PlaybackController::new(
            catalog,
            Box::new(sink.clone()),
            Box::new(RecordingOpener::new()),
            PlaybackConfig::default(),
        );
        let mut timers = TimerQueue::new();
        playback
            .activate(&TrackId::new("t0"), ElementRef::playlist(0), &mut view, &mut timers)
            .unwrap();

        let mut played = 1;
        while playback.on_ended(&mut view).is_some() {
            played += 1;
            prop_assert!(played <= tracks);
        }

        prop_assert_eq!(played, tracks);
        prop_assert_eq!(sink.play_count(), tracks);
        let last = format!("t{}", tracks - 1);
        prop_assert_eq!(playback.current_track_id().map(TrackId::as_str), Some(last.as_str()));
        prop_assert_eq!(timers.advance(Duration::from_secs(60)).len(), 0);
    }
}
