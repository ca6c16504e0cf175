// src/main.rs
use nannou::prelude::*;
use rand::rngs::StdRng;

use geodemos::{
    config::{Config, PROJECT_ENV},
    controllers::{InputEvent, KeyCode},
    demos::{self, DemoKind},
    draw::NannouSurface,
    models::{pt, Bounds},
    services::FrameLoop,
};

struct Model {
    frame_loop: FrameLoop,
    config: Config,
    kind: DemoKind,
    rng: StdRng,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let (config, config_path) = Config::load_or_default();
    match &config_path {
        Some(path) => println!("Config loaded from {}", path.display()),
        None => println!("Config: built-in defaults"),
    }

    // Pick the demo: command line, then environment, then config
    let requested = config.resolve_demo_name(
        std::env::args().nth(1),
        std::env::var(PROJECT_ENV).ok(),
    );
    let kind = match requested {
        Some(name) => match name.parse::<DemoKind>() {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => DemoKind::ALL[0],
    };

    // Create window
    let window_id = app
        .new_window()
        .title(window_title(&config, kind))
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_wheel(mouse_wheel)
        .key_pressed(key_pressed)
        .key_released(key_released)
        .resized(resized)
        .build()
        .unwrap();
    let bounds = match app.window(window_id) {
        Some(window) => {
            let rect = window.rect();
            Bounds::new(rect.w() as f64, rect.h() as f64)
        }
        None => Bounds::new(config.window.width as f64, config.window.height as f64),
    };

    let mut rng = demos::session_rng(config.app.seed);
    let demo = demos::create(kind, &config, bounds, &mut rng);
    let frame_loop = FrameLoop::new(demo, bounds, &config.app);
    log_demo(kind);

    Model {
        frame_loop,
        config,
        kind,
        rng,
    }
}

fn window_title(config: &Config, kind: DemoKind) -> String {
    format!("{} - {}", config.window.title, kind.title())
}

fn log_demo(kind: DemoKind) {
    println!("Demo: {} [{}]", kind.title(), kind.name());
    println!("  {}", kind.controls());
    println!("  Tab: next demo");
}

fn screen_bounds(app: &App) -> Bounds {
    let rect = app.window_rect();
    Bounds::new(rect.w() as f64, rect.h() as f64)
}

fn next_demo(app: &App, model: &mut Model) {
    model.kind = model.kind.next();
    let bounds = screen_bounds(app);
    let demo = demos::create(model.kind, &model.config, bounds, &mut model.rng);
    model.frame_loop.replace_demo(demo);
    app.main_window()
        .set_title(&window_title(&model.config, model.kind));
    log_demo(model.kind);
}

fn key_code(key: Key) -> KeyCode {
    match key {
        Key::Space => KeyCode::Space,
        Key::R => KeyCode::R,
        Key::Tab => KeyCode::Tab,
        _ => KeyCode::Other,
    }
}

// ******************************* Input *****************************

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    // nannou reports centre-origin, y-up; demos work top-left, y-down
    let bounds = screen_bounds(app);
    let screen = pt(
        position.x as f64 + bounds.width / 2.0,
        bounds.height / 2.0 - position.y as f64,
    );
    model.frame_loop.handle_event(InputEvent::PointerMoved(screen));
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.frame_loop.handle_event(InputEvent::PointerPressed);
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.frame_loop.handle_event(InputEvent::PointerReleased);
    }
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    // scrolling up is negative, as in a browser wheel event
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y as f64,
        MouseScrollDelta::PixelDelta(p) => -p.y,
    };
    model.frame_loop.handle_event(InputEvent::Wheel(dy));
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    let code = key_code(key);
    model.frame_loop.handle_event(InputEvent::KeyPressed(code));
    if code == KeyCode::Tab {
        next_demo(app, model);
    }
}

fn key_released(_app: &App, model: &mut Model, key: Key) {
    model
        .frame_loop
        .handle_event(InputEvent::KeyReleased(key_code(key)));
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let bounds = Bounds::new(size.x as f64, size.y as f64);
    model.frame_loop.handle_event(InputEvent::Resized(bounds));
}

// ******************************* Frame *****************************

fn update(_app: &App, model: &mut Model, _update: Update) {
    model.frame_loop.update();
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, model.frame_loop.bounds());
    model.frame_loop.render(&mut surface);
    draw.to_frame(app, &frame).expect("Failed to draw frame");
}
