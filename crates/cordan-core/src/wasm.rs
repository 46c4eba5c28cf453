//! WebAssembly bindings for the Cordan setup engine.
//!
//! This module exposes board setup to JavaScript through wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::setup::{setup_game, setup_game_seeded};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed setup entry point
#[wasm_bindgen]
pub struct WasmSetup;

#[wasm_bindgen]
impl WasmSetup {
    /// Set up a game for four player names given as a JSON array.
    ///
    /// Returns the board and turn tracker as JSON. Pass a seed to get a
    /// reproducible board.
    pub fn generate(player_names_json: &str, seed: Option<u64>) -> Result<String, JsValue> {
        let player_names: Vec<String> = serde_json::from_str(player_names_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid player names: {}", e)))?;

        let setup = match seed {
            Some(seed) => setup_game_seeded(&player_names, seed),
            None => setup_game(&player_names),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&setup)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
