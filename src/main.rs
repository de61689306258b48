//! Parallax Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use parallax_runner::audio::AudioManager;
    use parallax_runner::renderer::CanvasSurface;
    use parallax_runner::sim::{DeviceEvent, Flow};
    use parallax_runner::{Game, Settings};

    /// Everything the refresh callback needs
    struct App {
        game: Game,
        surface: CanvasSurface,
        audio: AudioManager,
    }

    type Shared = Rc<RefCell<App>>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Parallax Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let surface = CanvasSurface::new(&canvas, &document).expect("no 2d context");
        let audio = AudioManager::new(&document, &settings);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(&settings),
            surface,
            audio,
        }));

        setup_input_handlers(app.clone());
        setup_fullscreen_button();

        {
            let mut a = app.borrow_mut();
            let App { game, audio, .. } = &mut *a;
            game.start(audio);
        }

        request_animation_frame(app);

        log::info!("Parallax Runner running!");
    }

    /// Forward a device event; resume the loop if it restarted the game
    fn dispatch(app: &Shared, event: DeviceEvent) {
        let restarted = {
            let mut a = app.borrow_mut();
            let App { game, audio, .. } = &mut *a;
            game.handle_input(&event, audio)
        };
        if restarted {
            request_animation_frame(app.clone());
        }
    }

    fn setup_input_handlers(app: Shared) {
        let window = web_sys::window().unwrap();

        // Key down (plus the fullscreen shortcut, which bypasses the simulation)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "f" {
                    toggle_fullscreen();
                    return;
                }
                dispatch(&app, DeviceEvent::KeyDown(key));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                dispatch(&app, DeviceEvent::KeyUp(event.key()));
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move record the vertical swipe
        for (name, starting) in [("touchstart", true), ("touchmove", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else { return };
                let y = touch.page_y() as f32;
                let event = if starting {
                    DeviceEvent::TouchStart { y }
                } else {
                    DeviceEvent::TouchMove { y }
                };
                dispatch(&app, event);
            });
            let _ =
                window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end clears swipe actions
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                dispatch(&app, DeviceEvent::TouchEnd);
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_fullscreen_button() {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(btn) = document.get_element_by_id("fullScreenButton") else {
            log::warn!("No fullscreen button");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            toggle_fullscreen();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Enter or leave fullscreen. Failures are shown to the user and
    /// otherwise ignored; the game keeps running either way.
    fn toggle_fullscreen() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let Some(canvas) = document.get_element_by_id("canvas1") else { return };

        if document.fullscreen_element().is_none() {
            if let Err(e) = canvas.request_fullscreen() {
                log::warn!("Fullscreen request failed: {:?}", e);
                let _ = window.alert_with_message(&format!(
                    "Error, can't enable fullscreen mode, {:?}",
                    e
                ));
                return;
            }
            let _ = canvas.class_list().remove_1("border");
        } else {
            document.exit_fullscreen();
            let _ = canvas.class_list().add_1("border");
        }
    }

    fn request_animation_frame(app: Shared) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Shared, time: f64) {
        let flow = {
            let mut a = app.borrow_mut();
            let App {
                game,
                surface,
                audio,
            } = &mut *a;
            game.frame(time, surface, audio)
        };

        match flow {
            Flow::Continue => request_animation_frame(app),
            Flow::Stop => log::info!("Loop stopped; waiting for restart"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Parallax Runner (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted session at 60 Hz: jump whenever an obstacle gets close
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use parallax_runner::audio::SilentAudio;
    use parallax_runner::renderer::DrawList;
    use parallax_runner::sim::{DeviceEvent, Flow};
    use parallax_runner::{Game, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 60;

    let settings = Settings::load();
    let mut game = Game::new(&settings);
    let mut surface = DrawList::new();
    let mut audio = SilentAudio;
    game.start(&mut audio);

    let mut frames = 0;
    let mut jumping = false;
    while frames < MAX_FRAMES {
        let player_x = game.state.player.pos.x;
        let threat = game
            .state
            .obstacles
            .iter()
            .any(|o| o.pos.x > player_x && o.pos.x - player_x < 260.0);
        if threat != jumping {
            let event = if threat {
                DeviceEvent::KeyDown(" ".to_string())
            } else {
                DeviceEvent::KeyUp(" ".to_string())
            };
            game.handle_input(&event, &mut audio);
            jumping = threat;
        }

        let flow = game.frame(frames as f64 * FRAME_MS, &mut surface, &mut audio);
        frames += 1;
        if flow == Flow::Stop {
            break;
        }
    }

    log::info!(
        "Headless run finished after {} frames: score {}, game over: {}, {} draw calls in last frame",
        frames,
        game.state.score,
        game.is_game_over(),
        surface.commands.len()
    );
    println!("Score: {}", game.state.score);
}
