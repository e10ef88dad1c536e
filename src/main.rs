//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use bug_crossing::sim::GameEvent;

/// Surface the events a player would notice
fn log_event(event: &GameEvent, score: u64) {
    match event {
        GameEvent::PlayerHit { enemy } => log::info!("Squashed by bug {}! Score reset", enemy),
        GameEvent::WaterReached { points } => log::info!("Made it across! +{} ({})", points, score),
        GameEvent::ItemCollected { color, points } => {
            log::info!("Picked up {:?} gem +{} ({})", color, points, score)
        }
        other => log::debug!("{:?}", other),
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use bug_crossing::Tuning;
    use bug_crossing::consts::*;
    use bug_crossing::renderer::{CanvasBackend, render_all};
    use bug_crossing::sim::{Direction, GameState, handle_input, update_all};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        backend: CanvasBackend,
        last_time: f64,
        /// Sprites loaded and the clock is running
        started: bool,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, backend: CanvasBackend) -> Self {
            Self {
                state: GameState::with_tuning(seed, tuning),
                backend,
                last_time: 0.0,
                started: false,
            }
        }

        /// Update every entity, then draw
        fn frame(&mut self, time: f64) {
            if !self.started {
                if !self.backend.ready() {
                    return;
                }
                log::info!("Sprites loaded, starting");
                self.started = true;
                self.last_time = time;
            }

            let dt = (((time - self.last_time) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT);
            self.last_time = time;

            for event in update_all(&mut self.state, dt) {
                super::log_event(&event, self.state.scoreboard.score);
            }
            render_all(&self.state, &mut self.backend);
        }

        fn key_released(&mut self, event: &KeyboardEvent) {
            let direction = Direction::from_key(&event.key())
                .or_else(|| Direction::from_key_code(event.key_code()));
            if direction.is_some() {
                event.prevent_default();
            }
            if let Some(ev) = handle_input(&mut self.state, direction) {
                super::log_event(&ev, self.state.scoreboard.score);
            }
        }
    }

    /// Tuning overrides from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &Document) -> Tuning {
        match document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        {
            Some(json) => Tuning::from_json_or_default(&json),
            None => Tuning::default(),
        }
    }

    /// Use the page's `#canvas`, or create one sized for the board
    fn find_or_create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(el) = document.get_element_by_id("canvas") {
            return el.dyn_into::<HtmlCanvasElement>().map_err(JsValue::from);
        }

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&canvas)?;
        Ok(canvas)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Bug Crossing starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas = find_or_create_canvas(&document)?;
        let backend = CanvasBackend::new(&canvas)?;
        let tuning = load_tuning(&document);

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game::new(seed, tuning, backend)));

        setup_input_handlers(&window, game.clone());
        request_animation_frame(game);

        log::info!("Bug Crossing running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_released(&event);
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window vanished, stopping");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session: a player who only ever walks up
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use bug_crossing::Tuning;
    use bug_crossing::consts::DEMO_DT;
    use bug_crossing::renderer::{RecordingBackend, render_all};
    use bug_crossing::sim::{Direction, GameEvent, GameState, handle_input, update_all};

    /// Simulated length of the demo
    const DEMO_SECONDS: u32 = 60;
    /// Frames between key presses
    const STEP_EVERY: u64 = 40;

    #[derive(Debug, Default)]
    pub struct Summary {
        pub crossings: u32,
        pub squashed: u32,
        pub gems: u32,
        pub best_score: u64,
    }

    pub fn run(seed: u64, tuning: Tuning) -> (GameState, Summary) {
        let mut state = GameState::with_tuning(seed, tuning);
        let mut backend = RecordingBackend::default();
        let mut summary = Summary::default();
        let frames = (DEMO_SECONDS as f32 / DEMO_DT).round() as u64;

        for frame in 0..frames {
            let mut events = update_all(&mut state, DEMO_DT);
            if frame % STEP_EVERY == 0 {
                events.extend(handle_input(&mut state, Some(Direction::Up)));
            }

            for event in &events {
                match event {
                    GameEvent::WaterReached { .. } => summary.crossings += 1,
                    GameEvent::PlayerHit { .. } => summary.squashed += 1,
                    GameEvent::ItemCollected { .. } => summary.gems += 1,
                    _ => {}
                }
                super::log_event(event, state.scoreboard.score);
            }
            summary.best_score = summary.best_score.max(state.scoreboard.score);

            backend.reset();
            render_all(&state, &mut backend);
        }

        log::debug!("Last frame drew {} calls", backend.calls.len());
        if let Some(text) = backend.last_text() {
            log::info!("Final overlay: {}", text);
        }

        (state, summary)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bug_crossing::Tuning;

    env_logger::init();
    log::info!("Bug Crossing (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::error!("Cannot read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let (state, summary) = demo::run(seed, tuning);

    println!("\nDemo finished (seed {})", seed);
    println!("  crossings:   {}", summary.crossings);
    println!("  squashed:    {}", summary.squashed);
    println!("  gems:        {}", summary.gems);
    println!("  best score:  {}", summary.best_score);
    println!("  final score: {}", state.scoreboard.score);
    match serde_json::to_string(&state.enemies) {
        Ok(json) => println!("  enemies:     {}", json),
        Err(e) => log::warn!("Could not serialize enemies: {}", e),
    }
}
