// Headless runs of every demo through the frame loop.

use geodemos::config::Config;
use geodemos::controllers::{InputEvent, KeyCode};
use geodemos::demos::{self, DemoKind};
use geodemos::draw::{DrawCommand, RecordingSurface};
use geodemos::models::{pt, Bounds, Point2D};
use geodemos::services::FrameLoop;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start(kind: DemoKind, bounds: Bounds) -> FrameLoop {
    let config = Config::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let demo = demos::create(kind, &config, bounds, &mut rng);
    FrameLoop::new(demo, bounds, &config.app)
}

fn points(command: &DrawCommand) -> Vec<Point2D> {
    match command {
        DrawCommand::Line { start, end, .. } => vec![*start, *end],
        DrawCommand::Polyline { points, .. } | DrawCommand::Polygon { points, .. } => points.clone(),
        DrawCommand::Circle { center, .. } => vec![*center],
        DrawCommand::Text { position, .. } => vec![*position],
        DrawCommand::Clear(_) => vec![],
    }
}

#[test]
fn every_demo_draws_without_pointer() {
    for kind in DemoKind::ALL {
        let mut frames = start(kind, Bounds::new(1280.0, 720.0));
        let mut surface = RecordingSurface::new();
        for _ in 0..30 {
            frames.step(&mut surface);
            assert!(
                matches!(surface.commands()[0], DrawCommand::Clear(_)),
                "{} did not clear first",
                kind
            );
        }
        assert!(surface.drawn() > 0, "{} drew nothing", kind);
        assert_eq!(frames.demo().kind(), kind);
    }
}

#[test]
fn every_demo_survives_pointer_and_resizes() {
    let sizes = [
        Bounds::new(1920.0, 1080.0),
        Bounds::new(300.0, 200.0),
        Bounds::new(1.0, 1.0),
        Bounds::new(1280.0, 720.0),
    ];
    for kind in DemoKind::ALL {
        let mut frames = start(kind, Bounds::new(1280.0, 720.0));
        let mut surface = RecordingSurface::new();

        frames.handle_event(InputEvent::PointerMoved(pt(640.0, 360.0)));
        frames.handle_event(InputEvent::PointerPressed);
        for (i, bounds) in sizes.iter().enumerate() {
            frames.handle_event(InputEvent::PointerMoved(pt(100.0 * i as f64, 50.0 * i as f64)));
            frames.handle_event(InputEvent::Wheel(-120.0));
            frames.step(&mut surface);
            frames.handle_event(InputEvent::Resized(*bounds));
            assert_eq!(frames.bounds(), *bounds);
            frames.step(&mut surface);
        }
        frames.handle_event(InputEvent::PointerReleased);
        for _ in 0..10 {
            frames.step(&mut surface);
        }
        assert_eq!(frames.frame_count(), 18, "{}", kind);
    }
}

#[test]
fn monge_circles_stay_on_screen_after_resize() {
    let bounds = Bounds::new(640.0, 480.0);
    let mut frames = start(DemoKind::MongesTheorem, Bounds::new(1920.0, 1080.0));
    let mut surface = RecordingSurface::new();
    frames.handle_event(InputEvent::Resized(bounds));
    for _ in 0..200 {
        frames.step(&mut surface);
    }

    let mut circles = 0;
    for command in surface.commands() {
        if let DrawCommand::Circle { center, radius, .. } = command {
            assert!(bounds.contains(*center, *radius), "{:?} off screen", center);
            circles += 1;
        }
    }
    // outline and coloured stroke per circle
    assert_eq!(circles, 6);
}

#[test]
fn chaos_game_pause_and_reset() {
    let mut frames = start(DemoKind::ChaosGameTriangle, Bounds::new(800.0, 600.0));
    let mut surface = RecordingSurface::new();
    frames.step(&mut surface);
    assert_eq!(surface.texts(), vec!["1"]);

    frames.handle_event(InputEvent::KeyPressed(KeyCode::Space));
    frames.handle_event(InputEvent::KeyReleased(KeyCode::Space));
    for _ in 0..9 {
        frames.step(&mut surface);
    }
    assert_eq!(surface.texts(), vec!["10"]);

    frames.handle_event(InputEvent::KeyPressed(KeyCode::R));
    frames.handle_event(InputEvent::KeyReleased(KeyCode::R));
    frames.step(&mut surface);
    assert_eq!(surface.texts(), vec!["1"]);
}

#[test]
fn switching_demos_cycles_the_catalogue() {
    let config = Config::default();
    let bounds = Bounds::new(1024.0, 768.0);
    let mut rng = StdRng::seed_from_u64(1);
    let mut kind = DemoKind::ALL[0];
    let mut frames = FrameLoop::new(demos::create(kind, &config, bounds, &mut rng), bounds, &config.app);
    let mut surface = RecordingSurface::new();

    for _ in 0..DemoKind::ALL.len() {
        kind = kind.next();
        frames.replace_demo(demos::create(kind, &config, bounds, &mut rng));
        frames.step(&mut surface);
        assert_eq!(frames.demo().kind(), kind);
        assert!(surface.drawn() > 0);
    }
    assert_eq!(kind, DemoKind::ALL[0]);
}

#[test]
fn finite_geometry_after_warmup() {
    for kind in DemoKind::ALL {
        let mut frames = start(kind, Bounds::new(1280.0, 720.0));
        let mut surface = RecordingSurface::new();
        frames.handle_event(InputEvent::PointerMoved(pt(700.0, 300.0)));
        for _ in 0..50 {
            frames.step(&mut surface);
        }
        if kind == DemoKind::TrigonometricFunctions {
            // axis angles are legitimately infinite
            continue;
        }
        for command in surface.commands() {
            assert!(
                points(command).iter().all(|p| p.is_finite()),
                "{}: non-finite {:?}",
                kind,
                command
            );
        }
    }
}
