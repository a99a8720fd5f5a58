//! One AI-vs-AI match.
//!
//! The search strategies cannot be interrupted, so the wall-clock budget is
//! enforced here: each `get_move` is timed and a mover that overruns the
//! budget forfeits the game.

use crate::core::{PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::AIPlayer;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub notation: String,
    pub elapsed_ms: u64,
    pub timeout: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub winner: Option<PlayerId>,
    pub total_moves: u32,
    pub player1_captured: u32,
    pub player2_captured: u32,
    pub seeds_on_board: u32,
    /// Player who lost by overrunning the time budget or playing an illegal move.
    pub forfeit: Option<PlayerId>,
    pub history: Vec<MoveRecord>,
}

pub struct Game<R: Rules = StandardRules> {
    pub position: Position,
    pub time_limit: Duration,
    pub history: Vec<MoveRecord>,
    pub forfeit: Option<PlayerId>,
    rules: R,
    stalled: bool,
}

impl Game {
    pub fn new(time_limit: Duration) -> Self {
        Self::with_rules(StandardRules::default(), time_limit)
    }
}

impl<R: Rules> Game<R> {
    pub fn with_rules(rules: R, time_limit: Duration) -> Self {
        Game {
            position: Position::initial(),
            time_limit,
            history: Vec::new(),
            forfeit: None,
            rules,
            stalled: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.stalled || self.forfeit.is_some() || self.rules.is_terminal(&self.position)
    }

    /// Lets the player to move pick and play one move. Returns `false` once the
    /// game is over.
    pub fn play_turn(&mut self, players: [&AIPlayer; 2]) -> bool {
        if self.is_over() {
            return false;
        }

        let mover = self.position.current_player;
        let seat = players[mover.index()];

        let start = Instant::now();
        let mv = seat.get_move(&self.position);
        let elapsed = start.elapsed();
        let timeout = elapsed > self.time_limit;

        self.history.push(MoveRecord {
            player: mover,
            notation: mv.to_string(),
            elapsed_ms: elapsed.as_millis() as u64,
            timeout,
        });

        if timeout {
            warn!(
                "{} ({}) took {} ms, over the {} ms budget: forfeit",
                mover,
                seat.name(),
                elapsed.as_millis(),
                self.time_limit.as_millis()
            );
            self.forfeit = Some(mover);
            return false;
        }

        let Some(mv) = mv.into_option() else {
            warn!("{} ({}) has no move, game stops", mover, seat.name());
            self.stalled = true;
            return false;
        };

        if !self.rules.legal_moves(&self.position, mover).contains(&mv) {
            warn!("{} ({}) played illegal move {}: forfeit", mover, seat.name(), mv);
            self.forfeit = Some(mover);
            return false;
        }

        self.position = self.rules.apply_move(&self.position, &mv);
        let stats = seat.stats();
        info!(
            "#{} {} plays {} ({} ms, {} nodes, {} pruned) | captured {}-{}",
            self.position.move_count,
            mover,
            mv,
            elapsed.as_millis(),
            stats.nodes_explored,
            stats.pruned_branches,
            self.position.captured(PlayerId::Player1),
            self.position.captured(PlayerId::Player2)
        );

        !self.is_over()
    }

    /// Plays until the game ends or `max_turns` turns have been taken.
    pub fn play(&mut self, players: [&AIPlayer; 2], max_turns: usize) -> MatchReport {
        for _ in 0..max_turns {
            if !self.play_turn(players) {
                break;
            }
        }
        let report = self.report();
        match report.winner {
            Some(winner) => info!("{} wins after {} moves", winner, report.total_moves),
            None => info!("draw after {} moves", report.total_moves),
        }
        report
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.forfeit {
            Some(loser) => Some(loser.opponent()),
            None => self.rules.winner(&self.position),
        }
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            winner: self.winner(),
            total_moves: self.position.move_count,
            player1_captured: self.position.captured(PlayerId::Player1),
            player2_captured: self.position.captured(PlayerId::Player2),
            seeds_on_board: self.position.seeds_on_board(),
            forfeit: self.forfeit,
            history: self.history.clone(),
        }
    }
}
