//! Baseline engine that plays a uniformly random legal move. Useful as a
//! sparring partner and as a sanity check for the legal move generator.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let moves = generate_legal_moves(game_state).map_err(|err| err.to_string())?;
        let mut rng = rand::rng();

        Ok(EngineOutput {
            best_move: moves.choose(&mut rng).copied(),
            score: None,
            info_lines: Vec::new(),
        })
    }
}
