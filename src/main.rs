//! Arkanoid entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use arkanoid::{Key, LoopControl, Session, tick};

    /// Canvas element the game draws into
    const CANVAS_ID: &str = "arkanoid";

    /// Game instance holding all state
    struct Game {
        session: Session,
        context: CanvasRenderingContext2d,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Arkanoid starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas #arkanoid not found")?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed),
            context,
        }));

        setup_input_handlers(&window, game.clone())?;
        request_animation_frame(game);

        log::info!("Arkanoid running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = Key::from_key_name(&event.key());
            if key != Key::Other {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
                game.borrow_mut().session.handle_key(key);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let control = {
            let mut g = game.borrow_mut();
            let Game { session, context } = &mut *g;
            tick(session, context)
        };

        match control {
            LoopControl::Continue => request_animation_frame(game),
            LoopControl::Stop => log::info!("Game over, loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Upper bound for a headless run (the ball can escape the field and never be lost)
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_TICKS: u64 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arkanoid::render::RecordingSurface;
    use arkanoid::sim::{Session, run};

    env_logger::init();
    log::info!("Arkanoid (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the playable web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(1);

    let mut session = Session::new(seed);
    let mut surface = RecordingSurface::new();
    let ticks = run(&mut session, &mut surface, MAX_HEADLESS_TICKS);

    log::info!(
        "Stopped after {} ticks: {:?}, {} of {} tiles left",
        ticks,
        session.status,
        session.tiles.alive_count(),
        session.tiles.rows() * session.tiles.cols()
    );

    match session.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
