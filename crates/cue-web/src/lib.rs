//! WASM bridge for cue-solver.
//!
//! Two surfaces are exported:
//! - a stateful aim session (`aim_*` calls plus pointer accessors), kept in a
//!   `thread_local!` because wasm-bindgen cannot export the runner directly;
//! - stateless helpers that take flat `[x0, y0, x1, y1, ...]` coordinate
//!   arrays and return JSON.

use std::cell::RefCell;

use cue_solver::{DVec2, TableConfig};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::AimRunner;
use runner::points_from_flat;

thread_local! {
    static RUNNER: RefCell<Option<AimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Aim session not initialized. Call aim_init() first.");
        f(runner)
    })
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_config(config_json: &str) -> Result<TableConfig, JsValue> {
    TableConfig::from_json_or_default(config_json).map_err(to_js_error)
}

fn parse_points(coords: &[f64]) -> Result<Vec<DVec2>, JsValue> {
    points_from_flat(coords).map_err(to_js_error)
}

// ---- Session ----

#[wasm_bindgen]
pub fn aim_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = AimRunner::from_json(config_json).map_err(to_js_error)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("cue-web: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn aim_set_cue(x: f64, y: f64) -> bool {
    with_runner(|r| r.set_cue(x, y))
}

#[wasm_bindgen]
pub fn aim_set_ball(index: u32, x: f64, y: f64) -> bool {
    with_runner(|r| r.set_ball(index as usize, x, y))
}

#[wasm_bindgen]
pub fn aim_set_ball_enabled(index: u32, enabled: bool) -> bool {
    with_runner(|r| r.set_ball_enabled(index as usize, enabled))
}

/// True when the cue was moved to a new placement.
#[wasm_bindgen]
pub fn aim_auto_cue() -> bool {
    with_runner(|r| r.auto_cue().is_some())
}

#[wasm_bindgen]
pub fn aim_next_shot() -> i32 {
    with_runner(|r| r.next_shot())
}

#[wasm_bindgen]
pub fn aim_prev_shot() -> i32 {
    with_runner(|r| r.prev_shot())
}

// ---- Data accessors ----

/// Scale that fits the session's table into a canvas `canvas_width` wide.
#[wasm_bindgen]
pub fn get_scale_for_width(canvas_width: f64) -> f64 {
    with_runner(|r| r.scale_for_width(canvas_width))
}

/// Pocket, cue and ball circles as JSON, scaled to canvas coordinates.
#[wasm_bindgen]
pub fn table_circles_json(scale: f64) -> Result<String, JsValue> {
    with_runner(|r| serde_json::to_string(&r.table_circles(scale))).map_err(to_js_error)
}

/// Overlay for the selected shot as JSON, or `"null"` when there is none.
#[wasm_bindgen]
pub fn shot_overlay_json(scale: f64) -> Result<String, JsValue> {
    with_runner(|r| serde_json::to_string(&r.shot_overlay(scale))).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn get_shots_ptr() -> *const f32 {
    with_runner(|r| r.shots_ptr())
}

#[wasm_bindgen]
pub fn get_shot_count() -> u32 {
    with_runner(|r| r.shot_count())
}

#[wasm_bindgen]
pub fn get_shot_index() -> i32 {
    with_runner(|r| r.shot_index())
}

#[wasm_bindgen]
pub fn get_cue_x() -> f64 {
    with_runner(|r| r.cue().x)
}

#[wasm_bindgen]
pub fn get_cue_y() -> f64 {
    with_runner(|r| r.cue().y)
}

#[wasm_bindgen]
pub fn get_table_width() -> f64 {
    with_runner(|r| r.table_width())
}

#[wasm_bindgen]
pub fn get_table_height() -> f64 {
    with_runner(|r| r.table_height())
}

// ---- Stateless helpers ----

#[wasm_bindgen]
pub fn find_shots_json(
    config_json: &str,
    cue_x: f64,
    cue_y: f64,
    targets: Vec<f64>,
) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let targets = parse_points(&targets)?;
    let shots = cue_solver::find_shots(&config, DVec2::new(cue_x, cue_y), &targets)
        .map_err(to_js_error)?;
    serde_json::to_string(&shots).map_err(to_js_error)
}

/// JSON placement, or `"null"` when no grid point has a legal shot.
#[wasm_bindgen]
pub fn auto_place_cue_json(config_json: &str, targets: Vec<f64>) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let targets = parse_points(&targets)?;
    let placement = cue_solver::auto_place_cue(&config, &targets).map_err(to_js_error)?;
    serde_json::to_string(&placement).map_err(to_js_error)
}

/// Ghost-ball position as `[x, y]` JSON.
#[wasm_bindgen]
pub fn ghost_ball_json(
    config_json: &str,
    target_x: f64,
    target_y: f64,
    pocket_x: f64,
    pocket_y: f64,
) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let ghost = cue_solver::ghost_ball_position(
        &config,
        DVec2::new(target_x, target_y),
        DVec2::new(pocket_x, pocket_y),
    )
    .map_err(to_js_error)?;
    serde_json::to_string(&ghost).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn is_path_clear(
    config_json: &str,
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    obstacles: Vec<f64>,
) -> Result<bool, JsValue> {
    let config = parse_config(config_json)?;
    let obstacles = parse_points(&obstacles)?;
    Ok(cue_solver::is_path_clear(
        &config,
        DVec2::new(start_x, start_y),
        DVec2::new(end_x, end_y),
        &obstacles,
    ))
}
