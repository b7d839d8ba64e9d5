//! WASM bindings for JavaScript bot harnesses

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::strategy::describe_strategy;
use crate::{Engine, EngineConfig, MatchHistory, SeededRng, Strategy, StrategyBase};

/// Parse a strategy given either as a bare base name or as strategy JSON
///
/// - Name: `"Adaptive"`
/// - Full: `{"base": "DrawDynamite", "params": {...}}`
fn parse_strategy(input: &str) -> Result<Strategy, String> {
    if let Ok(base) = input.parse::<StrategyBase>() {
        return Ok(Strategy::new(base));
    }
    serde_json::from_str(input).map_err(|e| format!("Invalid strategy: {}", e))
}

fn engine_for(side: &str, strategy: &str) -> Result<Engine, JsError> {
    let strategy = parse_strategy(strategy).map_err(|e| JsError::new(&e))?;
    Ok(Engine::new(side, EngineConfig::standard())
        .map_err(|e| JsError::new(&e.to_string()))?
        .with_strategy(strategy))
}

/// Choose the next move for `side` from a harness game state
///
/// # Arguments
/// * `gamestate_json` - `{"rounds": [{"p1": "R", "p2": "D"}, ...]}`
/// * `side` - `"p1"` or `"p2"`
/// * `strategy` - strategy name or JSON
/// * `seed` - 32-byte match seed
/// * `match_index` - Index of this match
///
/// # Returns
/// Single move letter
#[wasm_bindgen]
pub fn make_move(
    gamestate_json: &str,
    side: &str,
    strategy: &str,
    seed: &[u8],
    match_index: u32,
) -> Result<String, JsError> {
    let engine = engine_for(side, strategy)?;
    let seed_arr: [u8; 32] = seed.try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;
    let history = MatchHistory::from_json(gamestate_json)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let round = u32::try_from(history.len()).unwrap_or(u32::MAX);
    let mut rng = SeededRng::new(&seed_arr, match_index).for_round(round);

    Ok(engine.make_move(&history, &mut rng).to_string())
}

/// Choose the next move with a fresh seed from `Math.random`
#[wasm_bindgen]
pub fn make_move_unseeded(gamestate_json: &str, side: &str, strategy: &str) -> Result<String, JsError> {
    let mut seed = [0u8; 32];
    for byte in seed.iter_mut() {
        *byte = (js_sys::Math::random() * 256.0) as u8;
    }
    make_move(gamestate_json, side, strategy, &seed, 0)
}

/// Legal moves for `side` after the given game state
#[wasm_bindgen]
pub fn legal_moves(gamestate_json: &str, side: &str) -> Result<JsValue, JsError> {
    let engine = Engine::new(side, EngineConfig::standard())
        .map_err(|e| JsError::new(&e.to_string()))?;
    let history = MatchHistory::from_json(gamestate_json)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&engine.legal_moves(&history))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(strategy: &str) -> Result<String, JsError> {
    let strategy = parse_strategy(strategy).map_err(|e| JsError::new(&e))?;
    Ok(describe_strategy(&strategy))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: String,
    description: String,
}

/// Get all available strategy base types
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = StrategyBase::ALL
        .into_iter()
        .map(|base| StrategyInfo {
            id: base.name().to_string(),
            description: describe_strategy(&Strategy::new(base)),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
