use serde::{Deserialize, Serialize};

use crate::game::{Board, GameOutcome, GameState, Player, COLS, ROWS};

use super::agent::Agent;

/// Score of a decided position inside the search. Large enough that no sum
/// of positional weights can reach it.
const WIN_SCORE: i32 = 1_000_000;

/// Column ordering: center-first, so alpha-beta sees the strongest branches
/// early and equal scores resolve toward the center.
const MOVE_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Strength tuning for [`MinimaxAgent`]. Depth and weights trade time for
/// playing strength; none of them affect correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies.
    pub depth: usize,
    /// Positional weight of a disc in the center column.
    pub center_weight: i32,
    /// Positional weight of a disc in the two columns beside the center.
    pub adjacent_weight: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 9,
            center_weight: 4,
            adjacent_weight: 2,
        }
    }
}

/// Depth-bounded minimax opponent with alpha-beta pruning.
///
/// Before searching it takes any single-move win, then blocks any
/// single-move opponent win, both scanning columns in ascending order so the
/// choice is deterministic. On an empty board it plays the center outright.
pub struct MinimaxAgent {
    config: SearchConfig,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            config: SearchConfig {
                depth,
                ..SearchConfig::default()
            },
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        MinimaxAgent { config }
    }

    fn best_move(&self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");

        // The first disc of the game belongs in the center.
        if state.turn_count() == 0 {
            return COLS / 2;
        }

        if let Some(col) = immediate_win(state, state.current_player()) {
            return col;
        }
        if let Some(col) = immediate_win(state, state.current_player().other()) {
            return col;
        }

        let mut best_action = legal[0];
        let mut best_score = i32::MIN;

        for &col in &MOVE_ORDER {
            if !legal.contains(&col) {
                continue;
            }
            let next = state.apply_move(col).unwrap();
            // Negamax: the opponent's score is negated
            let score = -self.negamax(&next, self.config.depth.saturating_sub(1), -WIN_SCORE, WIN_SCORE);
            if score > best_score {
                best_score = score;
                best_action = col;
            }
        }

        best_action
    }

    fn negamax(&self, state: &GameState, depth: usize, mut alpha: i32, beta: i32) -> i32 {
        if let Some(outcome) = state.outcome() {
            return match outcome {
                // The winner is whoever just moved, so from the side to
                // move this is a decided loss.
                GameOutcome::Winner(_) => -WIN_SCORE,
                GameOutcome::Draw => 0,
            };
        }

        if depth == 0 {
            return evaluate(state.board(), state.current_player(), &self.config);
        }

        let legal = state.legal_actions();
        let mut best = -WIN_SCORE;

        for &col in &MOVE_ORDER {
            if !legal.contains(&col) {
                continue;
            }
            let next = state.apply_move(col).unwrap();
            let score = -self.negamax(&next, depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Lowest column where `player` would complete four-in-a-row, simulated on a
/// scratch copy of the board.
fn immediate_win(state: &GameState, player: Player) -> Option<usize> {
    (0..COLS).find(|&col| {
        let mut probe = *state.board();
        match probe.drop_piece(col, player.to_cell()) {
            Ok(row) => probe.check_win(row, col),
            Err(_) => false,
        }
    })
}

/// Positional score from `player`'s perspective: center column discs count
/// most, the two neighboring columns less, everything else nothing.
fn evaluate(board: &Board, player: Player, config: &SearchConfig) -> i32 {
    let own = player.to_cell();
    let opp = player.other().to_cell();
    let center = COLS / 2;
    let mut score = 0;

    for col in [center - 1, center, center + 1] {
        let weight = if col == center {
            config.center_weight
        } else {
            config.adjacent_weight
        };
        for row in 0..ROWS {
            let cell = board.get(row, col);
            if cell == own {
                score += weight;
            } else if cell == opp {
                score -= weight;
            }
        }
    }

    score
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        self.best_move(state)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::with_config(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{Cell, GameOutcome};

    // --- Heuristic tests ---

    #[test]
    fn empty_board_evaluates_to_zero() {
        let board = Board::new();
        let config = SearchConfig::default();
        assert_eq!(evaluate(&board, Player::Red, &config), 0);
        assert_eq!(evaluate(&board, Player::Yellow, &config), 0);
    }

    #[test]
    fn center_outscores_adjacent_outscores_edge() {
        let config = SearchConfig::default();
        let score_at = |col: usize| {
            let mut board = Board::new();
            board.drop_piece(col, Cell::Red).unwrap();
            evaluate(&board, Player::Red, &config)
        };
        assert!(score_at(3) > score_at(2));
        assert_eq!(score_at(2), score_at(4));
        assert_eq!(score_at(0), 0);
        assert_eq!(score_at(6), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(0, Cell::Red).unwrap();
        let config = SearchConfig::default();
        assert_eq!(
            evaluate(&board, Player::Red, &config),
            -evaluate(&board, Player::Yellow, &config)
        );
    }

    // --- Move selection tests ---

    #[test]
    fn opens_in_the_center() {
        let mut agent = MinimaxAgent::new(9);
        let state = GameState::initial();
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn selects_legal_action() {
        let mut agent = MinimaxAgent::new(4);
        let mut state = GameState::initial();
        // Fill column 3 entirely so the center is unavailable
        for _ in 0..6 {
            state = state.apply_move(3).unwrap();
        }
        let action = agent.select_action(&state);
        assert!(state.legal_actions().contains(&action));
        assert_ne!(action, 3);
    }

    #[test]
    fn takes_vertical_winning_move() {
        // Red stones at (5,0),(4,0),(3,0); column 0 wins on the spot
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply_move(0).unwrap(); // Red
            state = state.apply_move(6).unwrap(); // Yellow
        }
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&state), 0);
    }

    #[test]
    fn takes_lowest_winning_column_when_several_win() {
        // Red holds (5,1),(5,2),(5,3): both column 0 and column 4 win
        let mut state = GameState::initial();
        for col in 1..4 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow above
        }
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&state), 0);
    }

    #[test]
    fn blocks_opponent_win() {
        // Yellow has (5,0),(5,1),(5,2); Red has no win and must take col 3
        let mut state = GameState::initial();
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(0).unwrap(); // Yellow
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(1).unwrap(); // Yellow
        state = state.apply_move(5).unwrap(); // Red
        state = state.apply_move(2).unwrap(); // Yellow
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn prefers_win_over_block() {
        // Red and Yellow both threaten column 3; Red should finish its own line
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red on the bottom row
            state = state.apply_move(col).unwrap(); // Yellow on the row above
        }
        let mut agent = MinimaxAgent::new(4);
        let action = agent.select_action(&state);
        assert_eq!(action, 3);
        let next = state.apply_move(action).unwrap();
        assert_eq!(next.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn never_plays_a_full_column() {
        let mut agent = MinimaxAgent::new(3);
        let mut state = GameState::initial();
        while !state.is_terminal() {
            let action = agent.select_action(&state);
            assert!(
                !state.board().is_column_full(action),
                "agent chose full column {action}"
            );
            state = state.apply_move(action).unwrap();
        }
    }

    // --- Integration tests ---

    #[test]
    fn full_game_vs_self_completes() {
        let mut red = MinimaxAgent::new(4);
        let mut yellow = MinimaxAgent::new(4);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let action = match state.current_player() {
                Player::Red => red.select_action(&state),
                Player::Yellow => yellow.select_action(&state),
            };
            state = state.apply_move(action).unwrap();
        }

        assert!(state.outcome().is_some());
        assert!(state.turn_count() <= 42);
    }

    #[test]
    fn beats_random_agent() {
        let games_per_color = 10;
        let mut minimax_wins = 0;
        let total = games_per_color * 2;

        for minimax_side in [Player::Red, Player::Yellow] {
            for _ in 0..games_per_color {
                let mut minimax = MinimaxAgent::new(5);
                let mut random = RandomAgent::new();
                let mut state = GameState::initial();

                while !state.is_terminal() {
                    let action = if state.current_player() == minimax_side {
                        minimax.select_action(&state)
                    } else {
                        random.select_action(&state)
                    };
                    state = state.apply_move(action).unwrap();
                }

                if state.outcome() == Some(GameOutcome::Winner(minimax_side)) {
                    minimax_wins += 1;
                }
            }
        }

        let win_rate = minimax_wins as f64 / total as f64;
        assert!(
            win_rate > 0.80,
            "Minimax should beat random >80% of the time, got {:.0}% ({minimax_wins}/{total})",
            win_rate * 100.0
        );
    }

    // --- Agent trait tests ---

    #[test]
    fn name_is_minimax() {
        let agent = MinimaxAgent::new(7);
        assert_eq!(agent.name(), "Minimax");
    }

    #[test]
    fn clone_agent_keeps_config() {
        let agent = MinimaxAgent::with_config(SearchConfig {
            depth: 2,
            ..SearchConfig::default()
        });
        let mut cloned = agent.clone_agent();
        assert_eq!(cloned.name(), "Minimax");
        assert_eq!(cloned.select_action(&GameState::initial()), 3);
    }
}
