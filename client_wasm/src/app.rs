//! Browser entry point: canvas, DOM listeners and the animation-frame loop

use crate::clock::FrameClock;
use crate::input::{is_serve_key, pointer_to_field_y};
use crate::logger;
use crate::renderer::CanvasSurface;
use game_core::{scene, Config, Game};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

const CANVAS_ID: &str = "game";

/// Everything the page-lifetime callbacks share
struct Client {
    game: Game,
    surface: CanvasSurface,
    clock: FrameClock,
    canvas: HtmlCanvasElement,
}

impl Client {
    fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let config = Config::new();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);
        let surface = CanvasSurface::new(&canvas)?;

        Ok(Self {
            game: Game::new(config, seed),
            surface,
            clock: FrameClock::new(),
            canvas,
        })
    }

    fn on_pointer_move(&mut self, event: &MouseEvent) {
        let rect = self.canvas.get_bounding_client_rect();
        let y = pointer_to_field_y(
            f64::from(event.client_y()),
            rect.top(),
            rect.height(),
            self.game.config.field_height,
        );
        self.game.set_pointer_y(y);
    }

    fn on_trigger(&mut self) {
        self.game.serve_or_restart();
    }

    fn frame(&mut self, now_ms: f64) {
        for _ in 0..self.clock.advance(now_ms) {
            self.game.update();
        }
        if let Err(err) = scene::draw_scene(&self.game, &mut self.surface) {
            log::error!("Failed to draw frame: {:?}", err);
        }
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("Missing <canvas id=\"{}\">", CANVAS_ID)))?
        .dyn_into::<HtmlCanvasElement>()?;

    let seed = js_sys::Date::now() as u64;
    let client = Rc::new(RefCell::new(Client::new(canvas.clone(), seed)?));

    {
        let client = client.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            client.borrow_mut().on_pointer_move(&event);
        });
        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let client = client.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            client.borrow_mut().on_trigger();
        });
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let client = client.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if is_serve_key(&event.key()) {
                // Keep Space from scrolling the page
                event.prevent_default();
                client.borrow_mut().on_trigger();
            }
        });
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    start_animation_loop(window, client)?;
    log::info!("Pong client started (seed {})", seed);
    Ok(())
}

/// Run `Client::frame` on every display refresh for the lifetime of the page
fn start_animation_loop(window: Window, client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        client.borrow_mut().frame(now_ms);

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(err) = loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
