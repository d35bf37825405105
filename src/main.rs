//! Particle Web entry point
//!
//! Web: finds the canvas, sizes it, and drives one step+draw per animation frame.
//! Native: runs a headless simulation against a recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use particle_web::{ParticleField, Settings};

    /// Canvas element the field is drawn on
    const CANVAS_ID: &str = "header";
    /// Optional JSON settings on the canvas element
    const SETTINGS_ATTR: &str = "data-settings";

    struct App {
        field: ParticleField,
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    }

    fn js_err(e: particle_web::Error) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Particle Web starting...");

        match start() {
            Ok(()) => log::info!("Particle Web running!"),
            Err(e) => log::error!("Startup failed: {:?}", e),
        }
    }

    fn start() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = match canvas.get_attribute(SETTINGS_ATTR) {
            Some(json) => Settings::from_json(&json).map_err(js_err)?,
            None => Settings::default(),
        };

        if settings.fullscreen {
            size_to_viewport(&canvas, &document);
        }

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let fullscreen = settings.fullscreen;
        let field = ParticleField::new(bounds, settings, seed).map_err(js_err)?;

        let app = Rc::new(RefCell::new(App {
            field,
            canvas,
            context,
        }));

        setup_focus_handlers(&window, app.clone());
        if fullscreen {
            setup_resize_handler(&window, app.clone());
        }

        request_animation_frame(app);
        Ok(())
    }

    fn size_to_viewport(canvas: &HtmlCanvasElement, document: &Document) {
        if let Some(body) = document.body() {
            canvas.set_width(body.client_width().max(1) as u32);
            canvas.set_height(body.client_height().max(1) as u32);
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let App { field, context, .. } = &mut *a;
            field.frame(time, context);
        }

        request_animation_frame(app);
    }

    fn setup_focus_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Window blur (tab switch, click outside)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().field.pause();
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window focus
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().field.resume(now());
            });
            let _ = window
                .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let mut a = app.borrow_mut();
            size_to_viewport(&a.canvas, &document);
            let bounds = Vec2::new(a.canvas.width() as f32, a.canvas.height() as f32);
            if let Err(e) = a.field.resize(bounds) {
                log::warn!("Resize ignored: {}", e);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use particle_web::renderer::RecordingSurface;
    use particle_web::{Error, ParticleField, Result, Settings};

    /// Surface size for headless runs
    const BOUNDS: Vec2 = Vec2::new(1280.0, 720.0);
    /// Frame cadence (~60 Hz), in ms
    const FRAME_MS: f64 = 16.0;
    const DEFAULT_FRAMES: u32 = 600;
    const SEED: u64 = 12345;

    /// `particle-web [settings.json] [frames]`
    pub fn run() -> Result<()> {
        let mut args = std::env::args().skip(1);

        let settings = match args.next() {
            Some(path) => {
                log::info!("Loading settings from {}", path);
                Settings::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Settings::default(),
        };

        let frames = match args.next() {
            Some(n) => n
                .parse::<u32>()
                .map_err(|e| Error::InvalidConfiguration(format!("frame count {n:?}: {e}")))?,
            None => DEFAULT_FRAMES,
        };

        let mut field = ParticleField::new(BOUNDS, settings, SEED)?;
        let mut surface = RecordingSurface::new();
        let mut total_joints = 0usize;

        for i in 0..frames {
            surface.clear();
            if let Some(stats) = field.frame(i as f64 * FRAME_MS, &mut surface) {
                total_joints += stats.joints;
                if i % 60 == 0 {
                    log::info!(
                        "frame {:>5}: {} disks, {} joints, {} commands",
                        i,
                        stats.disks,
                        stats.joints,
                        surface.commands.len()
                    );
                }
            }
        }

        let avg = if frames > 0 {
            total_joints as f64 / frames as f64
        } else {
            0.0
        };
        log::info!(
            "Ran {} frames with {} particles, {:.1} joints per frame on average",
            frames,
            field.state().len(),
            avg
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Particle Web (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the canvas version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
