use std::collections::BTreeMap;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::infra::{CompositeObserver, DefaultObserver, MatchObserver, ReplayObserver};
use crate::planners::{BotLogic, GoalSelector, RandomWalker};
use crate::sim::{Match, MatchError, MatchResult, SimConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotTotals {
    pub matches: usize,
    pub wins: usize,
    pub score: i64,
}

/// Aggregated results keyed by bot name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentSummary {
    pub matches: usize,
    pub draws: usize,
    pub bots: BTreeMap<String, BotTotals>,
}

impl TournamentSummary {
    pub fn record(&mut self, result: &MatchResult) {
        self.matches += 1;
        let winner = result.winner().map(|s| s.bot_id);
        if winner.is_none() {
            self.draws += 1;
        }

        for standing in &result.standings {
            let totals = self.bots.entry(standing.name.clone()).or_default();
            totals.matches += 1;
            totals.score += i64::from(standing.score);
            if winner == Some(standing.bot_id) {
                totals.wins += 1;
            }
        }
    }

    pub fn log(&self) {
        info!("Tournament finished: {} matches, {} draws", self.matches, self.draws);
        for (name, totals) in &self.bots {
            info!(
                "- {}: {} wins, {} points total, {:.1} per match",
                name,
                totals.wins,
                totals.score,
                totals.score as f64 / totals.matches.max(1) as f64
            );
        }
    }
}

fn lineup(config: &SimConfig, seed: u64) -> Vec<Box<dyn BotLogic>> {
    let mut logics: Vec<Box<dyn BotLogic>> = Vec::with_capacity(config.bot_count());
    for _ in 0..config.cascade_bots {
        logics.push(Box::new(GoalSelector::new()));
    }
    for idx in 0..config.random_bots {
        logics.push(Box::new(RandomWalker::new(seed.wrapping_add(idx as u64))));
    }
    logics
}

fn build_observer(config: &SimConfig, seed: u64) -> Box<dyn MatchObserver> {
    let mut observers: Vec<Box<dyn MatchObserver>> = vec![Box::new(DefaultObserver)];

    if let Some(folder) = &config.replays_folder {
        match ReplayObserver::new(folder, "diamondbot", seed) {
            Ok(replay) => observers.push(Box::new(replay)),
            Err(err) => warn!("Replay for seed {} disabled: {}", seed, err),
        }
    }

    Box::new(CompositeObserver::new(observers))
}

/// Play a single match with the configured lineup.
pub fn play_match(config: &SimConfig, seed: u64) -> Result<MatchResult, MatchError> {
    let mut game = Match::new(config, seed, lineup(config, seed), build_observer(config, seed))?;
    game.run()
}

/// Play `config.matches` matches on consecutive seeds, in parallel.
pub async fn run_tournament(config: &SimConfig) -> Result<TournamentSummary, MatchError> {
    let mut tasks = JoinSet::new();
    for idx in 0..config.matches {
        let seed = config.seed.wrapping_add(idx as u64);
        let config = config.clone();
        tasks.spawn_blocking(move || play_match(&config, seed));
    }

    let mut summary = TournamentSummary::default();
    while let Some(joined) = tasks.join_next().await {
        let result = joined??;
        summary.record(&result);
    }
    Ok(summary)
}
