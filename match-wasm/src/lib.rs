use std::cell::RefCell;
use std::rc::Rc;

use match_core::{PlaceOutcome, Point, ShapeKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlAudioElement, HtmlCanvasElement, HtmlElement,
    MouseEvent, Window,
};

mod audio;
mod constants;
mod models;
mod state;
mod utils;

use constants::{
    AUDIO_ID, CANVAS_ID, CLEAR_BTN_ID, OUTLINE_COLOR, OUTLINE_WIDTH, RESET_BTN_ID, SCORE_ID,
};
use models::LevelSpec;
use state::{State, STATE};
use utils::{
    asset_url, event_canvas_coords, fetch_text_with_fallbacks, get_query_param, log,
    set_fill_style, set_stroke_style,
};

/// Redraw the whole scene: clear, then every target outline, then every
/// shape fill. Two full passes so fills are never occluded by outlines.
fn draw(state: &State) {
    let width = state.canvas.width() as f64;
    let height = state.canvas.height() as f64;
    state.ctx.clear_rect(0.0, 0.0, width, height);

    state.ctx.set_line_width(OUTLINE_WIDTH);
    set_stroke_style(&state.ctx, OUTLINE_COLOR);
    for shape in state.session.shapes() {
        trace_shape(&state.ctx, shape.kind, shape.target);
        state.ctx.stroke();
    }
    for shape in state.session.shapes() {
        set_fill_style(&state.ctx, &shape.color);
        trace_shape(&state.ctx, shape.kind, shape.position);
        state.ctx.fill();
    }
}

fn trace_shape(ctx: &CanvasRenderingContext2d, kind: ShapeKind, at: Point) {
    ctx.begin_path();
    match kind {
        ShapeKind::Circle { radius } => {
            let _ = ctx.arc(at.x, at.y, radius, 0.0, std::f64::consts::TAU);
        }
        ShapeKind::Square { side } => {
            ctx.rect(at.x - side / 2.0, at.y - side / 2.0, side, side);
        }
        ShapeKind::Triangle { bound } => {
            // point-up triangle inscribed in its bounding circle
            for i in 0..3 {
                let a = -std::f64::consts::FRAC_PI_2 + (i as f64) * std::f64::consts::TAU / 3.0;
                let (x, y) = (at.x + bound * a.cos(), at.y + bound * a.sin());
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.close_path();
        }
    }
}

fn update_score_dom(state: &State) {
    if let Some(el) = state.document.get_element_by_id(SCORE_ID)
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(&format!("Score: {}", state.session.score()));
    }
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    // Reset button: shapes back to start, score preserved
    if let Some(btn) = doc.get_element_by_id(RESET_BTN_ID)
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.session.reset_shapes();
            draw(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Clear button: score to zero, then reset shapes
    if let Some(btn) = doc.get_element_by_id(CLEAR_BTN_ID)
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.session.clear_score();
            update_score_dom(&s);
            draw(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Mouse events
    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let pt = event_canvas_coords(&e, &s.canvas);
            s.session.pointer_down(Point::from(pt));
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let pt = event_canvas_coords(&e, &s.canvas);
            if s.session.pointer_move(Point::from(pt)) {
                draw(&s);
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        let st = state.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            let mut s = st.borrow_mut();
            match s.session.pointer_up() {
                PlaceOutcome::Placed => {
                    audio::play_success(s.audio.as_ref());
                    update_score_dom(&s);
                    draw(&s);
                }
                PlaceOutcome::Missed => draw(&s),
                PlaceOutcome::Idle => {}
            }
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }

    Ok(())
}

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas #gameCanvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

/// The level bundled into the binary and used when no query parameter is
/// given or the requested one fails to load.
fn default_level() -> LevelSpec {
    serde_json::from_str(include_str!("../../levels/scored.json")).unwrap_or_default()
}

fn embedded_level(name: &str) -> Option<LevelSpec> {
    let text = match name {
        "scored" => include_str!("../../levels/scored.json"),
        "basic" => include_str!("../../levels/basic.json"),
        _ => return None,
    };
    serde_json::from_str(text).ok()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;
    let audio = document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());

    let session = models::build_session(&default_level());

    // If URL param level is set, load levels/<level>.json instead;
    // the default stays on screen until that resolves.
    if let Ok(search) = window.location().search()
        && let Some(name) = get_query_param(&search, "level")
    {
        let win = window.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = fetch_and_load_level(win, &name).await {
                log(&format!("Failed to load level '{}': {:?}", name, err));
            }
        });
    }

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        audio,
        session,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));
    attach_ui(state.clone())?;
    update_score_dom(&state.borrow());
    draw(&state.borrow());
    Ok(())
}

async fn fetch_and_load_level(window: Window, name: &str) -> Result<(), JsValue> {
    let level = if let Some(level) = embedded_level(name) {
        level
    } else {
        let text = fetch_text_with_fallbacks(
            &window,
            &[
                &asset_url(&format!("levels/{}.json", name)),
                &format!("/levels/{}.json", name),
                &format!("levels/{}.json", name),
            ],
        )
        .await
        .ok_or_else(|| JsValue::from_str("level not found"))?;
        serde_json::from_str::<LevelSpec>(&text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    STATE.with(|st| {
        if let Some(st_rc) = st.borrow().as_ref() {
            let mut s = st_rc.borrow_mut();
            s.session = models::build_session(&level);
            update_score_dom(&s);
            draw(&s);
        }
    });
    Ok(())
}
