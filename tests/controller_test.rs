// Integration tests for the controller state machine

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::config::Config;
use sortviz::sorts::{Algorithm, SortDirection};
use sortviz::ui::panes::FrameKind;
use sortviz::ui::session::{Command, SessionState};
use sortviz::ui::App;

fn seeded_app(seed: u64) -> App {
    App::with_rng(Config::default(), &mut StdRng::seed_from_u64(seed))
        .expect("default config is valid")
}

/// Tick until the run ends, returning how many steps were rendered
fn drain(app: &mut App) -> usize {
    let mut frames = 0;
    while app.session.is_sorting() {
        app.tick();
        if app.frame_kind == FrameKind::Step {
            frames += 1;
        }
    }
    frames
}

#[test]
fn test_full_run_for_every_algorithm() {
    for algorithm in Algorithm::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut app = seeded_app(11);
            let mut original = app.model.values.clone();

            app.dispatch(Command::SelectAlgorithm(algorithm));
            app.dispatch(Command::SetDirection(direction));
            app.dispatch(Command::Start);
            let frames = drain(&mut app);

            assert!(direction.is_sorted(&app.model.values), "{} {}", algorithm, direction);
            let mut sorted = app.model.values.clone();
            sorted.sort_unstable();
            original.sort_unstable();
            assert_eq!(sorted, original);

            assert_eq!(app.session.state(), SessionState::Sorted);
            assert_eq!(app.session.steps(), frames);
        }
    }
}

#[test]
fn test_reset_while_sorting_discards_progress() {
    let mut app = seeded_app(5);
    app.dispatch(Command::SelectAlgorithm(Algorithm::Merge));
    app.dispatch(Command::Start);
    for _ in 0..20 {
        app.tick();
    }
    assert!(app.session.is_sorting());
    let partial = app.model.values.clone();

    app.dispatch_with_rng(Command::Reset, &mut StdRng::seed_from_u64(99));

    assert!(!app.session.is_sorting());
    assert_eq!(app.session.state(), SessionState::Idle);
    assert_eq!(app.model.len(), 50);
    assert!(app.model.values.iter().all(|v| (0..=100).contains(v)));
    assert_ne!(app.model.values, partial);
    assert!(app.highlights.is_empty());

    // The next tick is an idle redraw
    app.tick();
    assert_eq!(app.frame_kind, FrameKind::Full);
}

#[test]
fn test_selection_commands_ignored_while_sorting() {
    let mut app = seeded_app(8);
    app.dispatch(Command::Start);
    app.tick();

    app.dispatch(Command::SelectAlgorithm(Algorithm::Insertion));
    app.dispatch(Command::SetDirection(SortDirection::Descending));
    assert_eq!(app.session.algorithm, Algorithm::Bubble);
    assert_eq!(app.session.direction, SortDirection::Ascending);
    assert_eq!(app.status_message, "Ignored while sorting");

    // A second start does not restart the run
    let steps_before = app.session.steps();
    app.dispatch(Command::Start);
    assert_eq!(app.session.steps(), steps_before);

    drain(&mut app);
    assert!(SortDirection::Ascending.is_sorted(&app.model.values));

    app.dispatch(Command::SetDirection(SortDirection::Descending));
    assert_eq!(app.session.direction, SortDirection::Descending);
}

#[test]
fn test_reset_recomputes_metrics() {
    let mut app = seeded_app(21);
    app.dispatch_with_rng(Command::Reset, &mut StdRng::seed_from_u64(22));

    let metrics = *app.model.metrics();
    let min = *app.model.values.iter().min().unwrap();
    assert_eq!(metrics.min_value, min);
    assert_eq!(metrics.block_width, 14);
    assert_eq!(metrics.start_x, 50);
}
