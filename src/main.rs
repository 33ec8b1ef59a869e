//! Pinfield entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use glam::Vec2;
    use pinfield::Settings;
    use pinfield::input::InputMapper;
    use pinfield::renderer::{RenderState, scene_vertices};
    use pinfield::sim::{Bounds, GameState, PointerId, step};

    /// Hard cap on a single frame's delta (seconds); a backgrounded tab
    /// can otherwise hand us a multi-second dt on return
    const MAX_FRAME_DT: f32 = 0.1;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        mapper: InputMapper,
        render_state: Option<RenderState>,
        bounds: Bounds,
        /// 0.0 means warm-up: the next callback records a timestamp and
        /// integrates nothing
        last_time: f64,
        /// Ball has been seated at the launch position
        seeded: bool,
        settings: Settings,
        dpr: f32,
        // FPS tracking
        frames: u32,
        fps_window_start: f64,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings, dpr: f32) -> Self {
            Self {
                state: GameState::new(),
                mapper: InputMapper::new(),
                render_state: None,
                bounds: Bounds::default(),
                last_time: 0.0,
                seeded: false,
                settings,
                dpr,
                frames: 0,
                fps_window_start: 0.0,
                fps: 0,
            }
        }

        /// The surface reported a (possibly new) size. The first real size
        /// seats the ball; later resizes never reposition it.
        fn set_bounds(&mut self, width: f32, height: f32) {
            self.bounds = Bounds::new(width, height);
            if !self.seeded && self.bounds.is_valid() {
                self.state.reset(self.bounds);
                self.seeded = true;
                self.last_time = 0.0;
                log::info!("Playfield ready: {width}x{height}");
            }
        }

        /// Pointer event position in playfield pixels
        fn event_pos(&self, event: &PointerEvent) -> Vec2 {
            Vec2::new(
                event.offset_x() as f32 * self.dpr,
                event.offset_y() as f32 * self.dpr,
            )
        }

        /// One display frame: sample time, step, draw
        fn frame(&mut self, time: f64) {
            if !self.bounds.is_valid() {
                // Surface went away; re-enter via a warm-up tick
                self.last_time = 0.0;
                return;
            }

            if self.last_time == 0.0 {
                self.last_time = time;
            } else {
                let dt = (((time - self.last_time) / 1000.0) as f32).min(MAX_FRAME_DT);
                self.last_time = time;
                step(&mut self.state, self.bounds, dt);
            }

            self.render();
            self.track_fps(time);
        }

        fn render(&mut self) {
            let vertices = scene_vertices(&self.state, self.bounds);
            if let Some(ref mut render_state) = self.render_state {
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

        fn track_fps(&mut self, time: f64) {
            self.frames += 1;
            if time - self.fps_window_start >= 1000.0 {
                self.fps = self.frames;
                self.frames = 0;
                self.fps_window_start = time;
                self.update_hud();
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            if !self.settings.show_fps {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&format!("{} fps", self.fps)));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pinfield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio() as f32;
        let width = (canvas.client_width() as f32 * dpr) as u32;
        let height = (canvas.client_height() as f32 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let show_hint = settings.show_hint;
        let game = Rc::new(RefCell::new(Game::new(settings, dpr)));

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

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            g.set_bounds(width as f32, height as f32);
        }

        // Hint line visibility follows settings
        if let Some(el) = document.get_element_by_id("hint") {
            if show_hint {
                el.set_text_content(Some(
                    "Tap left/right to flip. Drag the lower-right well down and release to launch.",
                ));
            } else {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        setup_pointer_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start frame loop
        request_animation_frame(game);

        log::info!("Pinfield running!");
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down - may press a paddle zone or grab the plunger
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                // Keep receiving moves even when the finger leaves the canvas
                let _ = canvas_clone.set_pointer_capture(event.pointer_id());

                let mut g = game.borrow_mut();
                let pos = g.event_pos(&event);
                let id = PointerId(event.pointer_id());
                let g = &mut *g;
                g.mapper.pointer_down(id, pos, g.bounds, &mut g.state);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move - drives the plunger pull and zone changes
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let pos = g.event_pos(&event);
                let id = PointerId(event.pointer_id());
                let g = &mut *g;
                g.mapper.pointer_move(id, pos, g.bounds, &mut g.state);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up - releases zones and fires the plunger
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let id = PointerId(event.pointer_id());
                let g = &mut *g;
                g.mapper.pointer_up(id, g.bounds, &mut g.state);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer cancel - the browser took the gesture; never launch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                let id = PointerId(event.pointer_id());
                let g = &mut *g;
                g.mapper.pointer_cancel(id, g.bounds, &mut g.state);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio() as f32;
            let width = (canvas.client_width() as f32 * dpr) as u32;
            let height = (canvas.client_height() as f32 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut g = game.borrow_mut();
            g.dpr = dpr;
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(width, height);
            }
            g.set_bounds(width as f32, height as f32);
            log::info!("Resized to {width}x{height}");
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pinfield (native) starting...");
    log::info!("Headless demo mode - run with `trunk serve` for the web version");

    run_headless_demo();
}

/// Drive the full core without a window: plunger shot, a few seconds of
/// flipping, trajectory logged along the way
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use glam::Vec2;
    use pinfield::input::InputMapper;
    use pinfield::sim::{Bounds, GameState, PointerId, step};

    let bounds = Bounds::new(1080.0, 1920.0);
    let mut state = GameState::new();
    state.reset(bounds);
    let mut mapper = InputMapper::new();

    // Pull the plunger halfway and let go
    let finger = PointerId(1);
    mapper.pointer_down(finger, Vec2::new(918.0, 1710.0), bounds, &mut state);
    mapper.pointer_move(finger, Vec2::new(918.0, 1810.0), bounds, &mut state);
    mapper.pointer_up(finger, bounds, &mut state);
    log::info!("Plunger released at half pull");

    let dt = 1.0 / 120.0;
    for frame in 0..600u32 {
        // Flip both paddles for a tenth of a second every half second
        let t = frame as f32 * dt;
        let flipping = t % 0.5 < 0.1;
        state.left_paddle.pressed = flipping;
        state.right_paddle.pressed = flipping;

        step(&mut state, bounds, dt);

        if frame % 60 == 0 {
            log::info!(
                "t={:.2}s pos=({:.0}, {:.0}) vel=({:.0}, {:.0})",
                t,
                state.ball.pos.x,
                state.ball.pos.y,
                state.ball.vel.x,
                state.ball.vel.y
            );
        }
    }

    println!("✓ Headless demo finished");
}
