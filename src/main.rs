//! Console self-play driver.
//!
//! Plays the engine against itself from the starting position, printing
//! the board and the chosen move each ply, until one side has no legal
//! moves or the ply limit is reached.
//!
//! Usage: quince_chess [depth] [max_plies]

use std::env;
use std::process::ExitCode;

use quince_chess::engines::engine_alpha_beta::{AlphaBetaEngine, DEFAULT_SEARCH_DEPTH};
use quince_chess::engines::engine_trait::{Engine, GoParams};
use quince_chess::game_state::chess_types::Color;
use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::legal_move_apply::make_move;
use quince_chess::move_generation::legal_move_checks::is_king_in_check;
use quince_chess::search::board_scoring::CenterControlScorer;
use quince_chess::utils::long_algebraic::move_description_to_long_algebraic;
use quince_chess::utils::render_game_state::render_game_state;

const DEFAULT_MAX_PLIES: u32 = 100;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let depth = parse_arg(&args, 1, DEFAULT_SEARCH_DEPTH)?;
    let max_plies = parse_arg(&args, 2, DEFAULT_MAX_PLIES)?;

    let mut game_state = GameState::new_game()?;
    let mut engine = AlphaBetaEngine::new(CenterControlScorer, depth);

    println!("{}", render_game_state(&game_state));

    for ply in 0..max_plies {
        let mover = game_state.side_to_move;
        let output = engine.choose_move(&game_state, &GoParams::default())?;

        let Some(mv) = output.best_move else {
            if is_king_in_check(&game_state, mover) {
                println!("checkmate: {} wins", side_name(mover.opposite()));
            } else {
                println!("stalemate");
            }
            return Ok(());
        };

        let notation = move_description_to_long_algebraic(mv, &game_state)?;
        match output.score {
            Some(score) => println!(
                "{}. {} plays {notation} (score {score})",
                ply + 1,
                side_name(mover)
            ),
            None => println!("{}. {} plays {notation}", ply + 1, side_name(mover)),
        }

        make_move(&mut game_state, mv)?;
        println!("{}", render_game_state(&game_state));

        if is_king_in_check(&game_state, game_state.side_to_move) {
            println!("{} is in check", side_name(game_state.side_to_move));
        }
    }

    println!("ply limit reached");
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("invalid argument '{raw}'")),
        None => Ok(default),
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
