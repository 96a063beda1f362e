//! Engine wrapper around the parallel alpha-beta search.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::is_null_move;
use crate::search::board_scoring::{BoardScorer, CenterControlScorer};
use crate::search::parallel_root::find_best_move;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

pub struct AlphaBetaEngine<S: BoardScorer + Clone + 'static> {
    scorer: S,
    default_depth: u8,
}

impl<S: BoardScorer + Clone + 'static> AlphaBetaEngine<S> {
    pub fn new(scorer: S, default_depth: u8) -> Self {
        AlphaBetaEngine {
            scorer,
            default_depth,
        }
    }
}

impl Default for AlphaBetaEngine<CenterControlScorer> {
    fn default() -> Self {
        AlphaBetaEngine::new(CenterControlScorer, DEFAULT_SEARCH_DEPTH)
    }
}

impl<S: BoardScorer + Clone + 'static> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "alpha-beta"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.default_depth);
        let outcome =
            find_best_move(game_state, depth, &self.scorer).map_err(|err| err.to_string())?;

        if is_null_move(outcome.best_move) {
            return Ok(EngineOutput {
                best_move: None,
                score: None,
                info_lines: vec!["no legal moves".to_owned()],
            });
        }

        let failed_workers = outcome
            .reports
            .iter()
            .filter(|report| report.outcome.is_err())
            .count();
        let mut info_lines = vec![format!(
            "depth {} score {} root_moves {}",
            depth,
            outcome.score,
            outcome.reports.len()
        )];
        if failed_workers > 0 {
            info_lines.push(format!("{failed_workers} root workers failed"));
        }

        Ok(EngineOutput {
            best_move: Some(outcome.best_move),
            score: Some(outcome.score),
            info_lines,
        })
    }
}
