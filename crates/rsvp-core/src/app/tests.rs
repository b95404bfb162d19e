use super::*;
use crate::{
    content::sample_content,
    input::{Key, KeyEvent, MockInput, ScriptedInput},
    render::Screen,
};
use alloc::string::ToString;

fn make_app(text: &str) -> ReaderApp<MockInput> {
    ReaderApp::new(
        Content::new("Test", "unit", text),
        MockInput::new(),
        ReaderConfig::default(),
    )
}

fn assert_index_in_bounds(app: &ReaderApp<MockInput>) {
    let total = app.content().tokens().len();
    assert!(app.current_index() <= total.saturating_sub(1));
    assert!(app.start_index() <= total.saturating_sub(1));
}

#[test]
fn quick_brown_fox_plays_at_three_hundred_wpm() {
    let mut app = make_app("The quick brown fox");
    assert_eq!(app.wpm(), 300);
    assert_eq!(app.tick_interval_ms(), 200);

    assert!(app.play(0));
    assert_eq!(app.next_deadline_ms(), Some(200));

    assert_eq!(app.tick(200), TickResult::RenderRequested);
    assert_eq!(app.tick(400), TickResult::RenderRequested);
    assert_eq!(app.tick(600), TickResult::RenderRequested);

    assert_eq!(app.current_index(), 3);
    assert_eq!(app.current_chunk(), "fox");
    assert!(app.is_playing());

    // Next tick hits the end and stops without moving.
    let _ = app.tick(800);
    assert_eq!(app.current_index(), 3);
    assert!(!app.is_playing());
    assert_eq!(app.armed_clock(), None);
}

#[test]
fn tick_before_deadline_does_nothing() {
    let mut app = make_app("a b c d");
    app.play(1_000);
    assert_eq!(app.tick(1_050), TickResult::RenderRequested);

    assert_eq!(app.tick(1_100), TickResult::NoRender);
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.tick(1_200), TickResult::RenderRequested);
    assert_eq!(app.current_index(), 1);
}

#[test]
fn late_host_does_not_burst_catch_up() {
    let mut app = make_app("a b c d e f g");
    app.play(0);

    let _ = app.tick(1_000);
    assert_eq!(app.current_index(), 1);
    assert_eq!(app.next_deadline_ms(), Some(1_200));
}

#[test]
fn auto_stop_leaves_last_index_unchanged() {
    let mut app = make_app("a b c");
    app.play(0);
    assert!(app.skip(2));
    assert_eq!(app.current_index(), 2);

    let _ = app.tick(200);
    assert!(!app.is_playing());
    assert_eq!(app.current_index(), 2);
    assert_eq!(app.next_deadline_ms(), None);
}

#[test]
fn chunked_playback_stops_once_chunk_reaches_the_end() {
    let mut app = make_app("a b c d e");
    app.set_chunk_size(2, 0);
    assert_eq!(app.tick_interval_ms(), 400);
    app.play(0);

    let _ = app.tick(400);
    assert_eq!(app.current_index(), 2);
    assert_eq!(app.current_chunk(), "c d");

    let _ = app.tick(800);
    assert_eq!(app.current_index(), 4);
    assert_eq!(app.current_chunk(), "e");
    assert!(app.is_playing());

    let _ = app.tick(1_200);
    assert_eq!(app.current_index(), 4);
    assert!(!app.is_playing());
}

#[test]
fn chunk_near_end_takes_available_words() {
    let mut app = make_app("one two three four");
    app.set_chunk_size(3, 0);
    app.skip(2);
    assert_eq!(app.current_chunk(), "three four");
    assert_eq!(app.chunk_words().len(), 2);
}

#[test]
fn play_at_end_rewinds_to_start_point() {
    let mut app = make_app("a b c d e f");
    app.skip(2);
    app.set_start_point();
    app.skip(100);
    assert_eq!(app.current_index(), 5);

    assert!(app.play(0));
    assert_eq!(app.current_index(), 2);
    assert!(app.is_playing());
}

#[test]
fn start_point_then_restart() {
    let mut app = make_app("zero one two three four five six seven");
    app.play(0);
    app.skip(5);
    assert!(app.set_start_point());
    app.skip(2);

    assert!(app.restart(10));
    assert_eq!(app.current_index(), 5);
    assert!(!app.is_playing());
    assert_eq!(app.armed_clock(), None);
}

#[test]
fn pause_is_idempotent() {
    let mut app = make_app("a b c");
    app.play(0);
    assert!(app.pause(50));
    let index = app.current_index();

    assert!(!app.pause(60));
    assert!(!app.is_playing());
    assert_eq!(app.current_index(), index);
    assert_eq!(app.armed_clock(), None);
}

#[test]
fn repeated_play_keeps_the_same_clock() {
    let mut app = make_app("a b c d");
    app.play(0);
    let first = app.armed_clock();
    assert!(first.is_some());

    assert!(!app.play(150));
    assert_eq!(app.armed_clock(), first);
    assert_eq!(app.next_deadline_ms(), Some(200));
}

#[test]
fn rate_and_chunk_changes_rearm_a_single_clock() {
    let mut app = make_app("a b c d e f g h");
    app.play(0);
    let first = app.armed_clock().unwrap();

    app.adjust_rate(300, 100);
    let second = app.armed_clock().unwrap();
    assert_ne!(first, second);
    assert_eq!(app.tick_interval_ms(), 100);
    assert_eq!(app.next_deadline_ms(), Some(200));

    app.set_chunk_size(2, 150);
    let third = app.armed_clock().unwrap();
    assert_ne!(second, third);
    assert_eq!(app.next_deadline_ms(), Some(350));

    // Nothing fires on the cancelled deadlines.
    let _ = app.tick(199);
    assert_eq!(app.current_index(), 0);
    let _ = app.tick(350);
    assert_eq!(app.current_index(), 2);
}

#[test]
fn rate_changes_while_paused_do_not_arm() {
    let mut app = make_app("a b c");
    app.adjust_rate(25, 0);
    app.set_chunk_size(3, 0);
    assert_eq!(app.armed_clock(), None);
}

#[test]
fn rate_is_clamped() {
    let mut app = make_app("a");
    app.adjust_rate(-10_000, 0);
    assert_eq!(app.wpm(), 50);
    assert!(!app.adjust_rate(-25, 0));

    app.adjust_rate(10_000, 0);
    assert_eq!(app.wpm(), 888);
    app.adjust_rate(i32::MAX, 0);
    assert_eq!(app.wpm(), 888);
    app.adjust_rate(i32::MIN, 0);
    assert_eq!(app.wpm(), 50);
}

#[test]
fn chunk_size_is_clamped_to_allowed_set() {
    let mut app = make_app("a b c");
    app.set_chunk_size(0, 0);
    assert_eq!(app.chunk_size(), ChunkSize::One);
    app.set_chunk_size(9, 0);
    assert_eq!(app.chunk_size(), ChunkSize::Three);
    assert_eq!(ChunkSize::ALL.map(ChunkSize::get), [1, 2, 3]);
}

#[test]
fn skip_clamps_both_ends() {
    let mut app = make_app("a b c d e");
    assert!(!app.skip(-10));
    assert_eq!(app.current_index(), 0);
    app.skip(i32::MAX);
    assert_eq!(app.current_index(), 4);
    app.skip(i32::MIN);
    assert_eq!(app.current_index(), 0);
}

#[test]
fn skip_keeps_play_state() {
    let mut app = make_app("a b c d e f g h i j k l");
    app.play(0);
    app.skip(10);
    assert!(app.is_playing());
    app.skip(-3);
    assert_eq!(app.current_index(), 7);
    assert!(app.is_playing());
}

#[test]
fn seek_maps_percent_to_index() {
    let mut app = make_app("a b c d e f g h i j");
    app.seek_to(0.0);
    assert_eq!(app.current_index(), 0);
    app.seek_to(100.0);
    assert_eq!(app.current_index(), 9);
    app.seek_to(55.0);
    assert_eq!(app.current_index(), 5);
    app.seek_to(-20.0);
    assert_eq!(app.current_index(), 0);
    app.seek_to(250.0);
    assert_eq!(app.current_index(), 9);
    app.seek_to(f32::NAN);
    assert_eq!(app.current_index(), 0);
}

#[test]
fn seek_does_not_touch_play_state() {
    let mut app = make_app("a b c d");
    app.play(0);
    let clock = app.armed_clock();
    app.seek_to(50.0);
    assert!(app.is_playing());
    assert_eq!(app.armed_clock(), clock);
}

#[test]
fn progress_and_time_remaining() {
    let mut app = make_app("a b c d");
    assert_eq!(app.progress_percent(), 25.0);
    assert_eq!(app.estimated_minutes_remaining(), 1);

    app.skip(3);
    assert_eq!(app.progress_percent(), 100.0);

    let long_text = "word ".repeat(601);
    app.load_content("Long", "unit", &long_text, 0).unwrap();
    assert_eq!(app.estimated_minutes_remaining(), 3);
}

#[test]
fn focal_split_only_for_single_words() {
    let mut app = make_app("jumps over");
    let focal = app.current_focal().unwrap();
    assert_eq!((focal.prefix, focal.focus, focal.suffix), ("j", "u", "mps"));

    app.set_chunk_size(2, 0);
    assert_eq!(app.current_focal(), None);
}

#[test]
fn load_resets_position_but_keeps_preferences() {
    let mut app = ReaderApp::new(sample_content(), MockInput::new(), ReaderConfig::default());
    app.skip(12);
    app.set_start_point();
    app.adjust_rate(100, 0);
    app.set_chunk_size(2, 0);

    app.load_content("New", "paste", "fresh words here", 0).unwrap();
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.start_index(), 0);
    assert_eq!(app.wpm(), 400);
    assert_eq!(app.chunk_size(), ChunkSize::Two);
    assert_eq!(app.content().title(), "New");
    assert_eq!(app.last_error(), None);
}

#[test]
fn empty_content_disables_playback() {
    let mut app = make_app("a b c");
    app.play(0);

    assert_eq!(
        app.load_content("Blank", "paste", "  \n\t ", 10),
        Err(LoadError::EmptyContent)
    );
    assert!(!app.is_playing());
    assert_eq!(app.armed_clock(), None);
    assert_eq!(app.last_error(), Some(LoadError::EmptyContent));

    assert!(!app.play(20));
    assert!(!app.seek_to(50.0));
    assert!(!app.skip(5));
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.progress_percent(), 0.0);
    assert_eq!(app.estimated_minutes_remaining(), 0);
    assert_eq!(app.current_chunk(), "");
    assert_eq!(app.tick(1_000), TickResult::RenderRequested);
    assert_eq!(app.tick(2_000), TickResult::NoRender);

    app.load_content("Back", "paste", "words again", 30).unwrap();
    assert_eq!(app.last_error(), None);
}

#[test]
fn index_stays_in_bounds_after_every_command() {
    let mut app = make_app("a b c d e f g");
    let commands = [
        Command::Play,
        Command::Skip(4),
        Command::SetChunkSize(3),
        Command::SeekTo(100.0),
        Command::SetStartPoint,
        Command::Skip(-100),
        Command::Toggle,
        Command::Restart,
        Command::AdjustRate(-1_000),
        Command::Play,
        Command::Skip(1_000),
        Command::Pause,
        Command::SeekTo(37.5),
        Command::Toggle,
    ];

    let mut now_ms = 0;
    for command in commands {
        app.dispatch(command, now_ms);
        assert_index_in_bounds(&app);
        now_ms += 500;
        let _ = app.tick(now_ms);
        assert_index_in_bounds(&app);
    }
}

#[test]
fn shutdown_releases_the_clock() {
    let mut app = make_app("a b c");
    app.play(0);
    app.shutdown();
    assert!(!app.is_playing());
    assert_eq!(app.next_deadline_ms(), None);
    let _ = app.tick(10_000);
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.tick(20_000), TickResult::NoRender);
}

#[test]
fn key_events_drive_the_control_surface() {
    let events = [
        KeyEvent::new(Key::Space),
        KeyEvent::new(Key::Right),
        KeyEvent::new(Key::Up),
        KeyEvent::typed(Key::Char('r')),
    ];
    let mut app = ReaderApp::new(
        sample_content(),
        ScriptedInput::new(events),
        ReaderConfig::default(),
    );

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert!(app.is_playing());
    assert_eq!(app.current_index(), 10);
    assert_eq!(app.wpm(), 325);
    assert!(app.input_mut().is_drained());

    assert!(app.handle_key(KeyEvent::new(Key::Char('s')), 5));
    assert_eq!(app.start_index(), 10);
    assert!(!app.handle_key(KeyEvent::new(Key::Char('z')), 5));
}

#[test]
fn config_is_normalized() {
    let config = ReaderConfig {
        wpm: 5_000,
        min_wpm: 900,
        max_wpm: 100,
        ..ReaderConfig::default()
    };
    let app = ReaderApp::new(Content::new("t", "s", "a"), MockInput::new(), config);
    assert_eq!(app.wpm(), 900);
}

#[test]
fn reading_screen_reflects_state() {
    let mut app = make_app("jumps over the lazy dog");
    app.skip(0);
    app.adjust_rate(100, 0);

    let mut seen = None;
    app.with_screen(|screen| {
        if let Screen::Reading {
            title,
            chunk,
            focal,
            playing,
            wpm,
            speed,
            time_saved_pct,
            word_total,
            ..
        } = screen
        {
            seen = Some((
                title.to_string(),
                chunk.to_string(),
                focal.map(|f| f.focus.to_string()),
                playing,
                wpm,
                speed,
                time_saved_pct,
                word_total,
            ));
        }
    });

    let (title, chunk, focus, playing, wpm, speed, saved, total) = seen.unwrap();
    assert_eq!(title, "Test");
    assert_eq!(chunk, "jumps");
    assert_eq!(focus.as_deref(), Some("u"));
    assert!(!playing);
    assert_eq!(wpm, 400);
    assert_eq!(speed, SpeedLabel::Fast);
    assert_eq!(saved, 68);
    assert_eq!(total, 5);
}

#[test]
fn empty_screen_carries_error() {
    let app = make_app("");
    let mut error = None;
    app.with_screen(|screen| {
        if let Screen::Empty { error: e, .. } = screen {
            error = e;
        }
    });
    assert_eq!(error, Some(LoadError::EmptyContent));
}

struct BrokenInput {
    polls: u32,
}

impl InputProvider for BrokenInput {
    type Error = &'static str;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error> {
        self.polls += 1;
        Err("device gone")
    }
}

#[test]
fn input_failure_is_kept_and_shown() {
    let mut app = ReaderApp::new(
        Content::new("Test", "unit", "one two three"),
        BrokenInput { polls: 0 },
        ReaderConfig::default(),
    );
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.input_mut().polls, 1);
    assert_eq!(app.input_error(), Some(&"device gone"));

    let mut fault = false;
    app.with_screen(|screen| {
        if let Screen::Reading { input_fault, .. } = screen {
            fault = input_fault;
        }
    });
    assert!(fault);

    // A repeated failure does not request another frame by itself.
    assert_eq!(app.tick(10), TickResult::NoRender);
    assert_eq!(app.take_input_error(), Some("device gone"));
    assert!(app.input_error().is_none());
}

#[test]
fn long_titles_are_cut_for_the_header() {
    let title = "An extremely long article title that keeps going well past the header";
    let app = ReaderApp::new(
        Content::new(title, "unit", ""),
        MockInput::new(),
        ReaderConfig::default(),
    );
    let mut shown = None;
    app.with_screen(|screen| {
        if let Screen::Empty { title, .. } = screen {
            shown = Some(title.to_string());
        }
    });
    let shown = shown.unwrap();
    assert!(shown.ends_with("..."));
    assert!(shown.chars().count() <= crate::text_policy::HEADER_MAX_CHARS + 3);
}
