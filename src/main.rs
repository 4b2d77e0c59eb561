//! Star Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use star_hop::consts::*;
    use star_hop::renderer::{RenderState, build_scene};
    use star_hop::sim::{GameEvent, GameState, TickInput, tick};
    use star_hop::{AssetCatalog, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        game_over_shown: bool,
    }

    impl Game {
        fn new(state: GameState, settings: Settings) -> Self {
            Self {
                state,
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                game_over_shown: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::StarCollected { star, score } => {
                        log::debug!("Star {} collected ({})", star, score)
                    }
                    GameEvent::StarsRespawned => log::info!("New batch of stars"),
                    GameEvent::BombSpawned { id, x, .. } => {
                        log::info!("Bomb {} incoming at x={}", id, x)
                    }
                    GameEvent::GameOver { score, .. } => {
                        log::info!("Game over! Final score: {}", score)
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state, self.settings.debug_bodies);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                let text = self.state.score.text().text();
                if el.text_content().as_deref() != Some(text) {
                    el.set_text_content(Some(text));
                }
            }

            if self.state.is_game_over() && !self.game_over_shown {
                if let Some(el) = document.get_element_by_id("game-over") {
                    let _ = el.set_attribute("class", "");
                }
                self.game_over_shown = true;
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Star Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let settings = Settings::load();
        // Write back so the stored copy lists every field for hand editing
        settings.save();
        let seed = settings.resolve_seed(js_sys::Date::now() as u64);
        let state = match GameState::new(seed, settings.world, &AssetCatalog::builtin()) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot build level: {}", e);
                return;
            }
        };
        let world_size = settings.world.bounds();
        let game = Rc::new(RefCell::new(Game::new(state, settings)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, world_size).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(game.clone());

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Star Hop running!");
    }

    /// Map a key to the held flag it drives
    fn held_flag<'a>(input: &'a mut TickInput, key: &str) -> Option<&'a mut bool> {
        match key {
            "ArrowLeft" => Some(&mut input.left),
            "ArrowRight" => Some(&mut input.right),
            "ArrowUp" => Some(&mut input.up),
            _ => None,
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(flag) = held_flag(&mut g.input, &event.key()) {
                    *flag = held;
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur drops all held keys (no keyup arrives while unfocused)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input = TickInput::default();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Native build: headless run of the level with logging
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), star_hop::AssetError> {
    use star_hop::consts::SIM_DT;
    use star_hop::sim::{GameState, TickInput, tick};
    use star_hop::{AssetCatalog, Settings};

    env_logger::init();
    log::info!("Star Hop (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let fallback = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let seed = settings.resolve_seed(fallback);
    let mut state = GameState::new(seed, settings.world, &AssetCatalog::builtin())?;

    // Ten seconds of pacing back and forth across the ground
    let ticks = (10.0 / SIM_DT) as u32;
    for i in 0..ticks {
        let phase = (i / 120) % 3;
        let input = TickInput {
            left: phase == 0,
            right: phase == 2,
            up: i % 90 == 0,
        };
        tick(&mut state, &input, SIM_DT);
        for event in state.drain_events() {
            log::info!("tick {}: {:?}", state.time_ticks, event);
        }
        if state.is_game_over() {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: {}, {} bombs, phase {:?}",
        state.time_ticks,
        state.score.text().text(),
        state.bombs.len(),
        state.phase
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
