//! Simulation command handler: scripted multi-hand sessions.
//!
//! Plays N complete hands with a simple seed-derived caller policy
//! (prefer check/call, open or raise occasionally, fold to pressure now
//! and then). The policy lives here, not in the engine: the engine only
//! validates and applies whatever the policy submits. Hand records are
//! appended to a JSONL file when `--output` is given.

use crate::config;
use crate::error::CliError;
use crate::ui;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use showdown_engine::logger::HandLogger;
use showdown_engine::seat::{Action, SeatConfig, SeatId};
use showdown_engine::state::PublicState;
use showdown_engine::table::Table;
use std::io::Write;

/// Handle the sim command: play `hands` complete hands and summarize.
///
/// Each hand runs on a fresh table seeded with `seed + i`, so a run is
/// reproducible hand by hand and an interrupted run can be re-created
/// from its base seed.
pub fn handle_sim_command(
    hands: u64,
    seats: Option<usize>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seats = seats.unwrap_or(cfg.seats);
    if !(2..=9).contains(&seats) {
        return Err(CliError::InvalidInput(
            "seats must be between 2 and 9".to_string(),
        ));
    }

    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = match &output {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    for i in 0..hands {
        let hand_seed = base_seed.wrapping_add(i);
        let configs: Vec<SeatConfig> = (0..seats)
            .map(|s| SeatConfig::new(format!("Seat {}", s), cfg.starting_stack))
            .collect();
        let mut table = Table::new(configs, Some(hand_seed))?;
        let mut policy = ScriptedPolicy::new(hand_seed);

        let mut state = table.start_hand()?;
        while let Some(seat) = state.seat_to_act {
            let action = policy.choose(&table.public_state(), seat);
            state = table.apply_action(seat, action)?;
        }

        let result = table
            .showdown_result()
            .expect("terminal stage carries a result");
        let summary: Vec<String> = result
            .payouts
            .iter()
            .map(|p| format!("seat {} wins {}", p.seat, p.amount))
            .collect();
        writeln!(out, "Hand {}: {}", i + 1, summary.join(", "))?;

        let total: u32 = table.seats().iter().map(|s| s.stack()).sum();
        debug_assert_eq!(total, cfg.starting_stack * seats as u32);

        if let Some(logger) = &mut logger {
            let id = logger.next_id();
            let record = table
                .hand_record(&id)
                .expect("finished hand has a record");
            logger.write(&record)?;
        }
    }

    writeln!(out, "Simulated: {} hands", hands)?;
    writeln!(
        out,
        "Chips conserved: {} seats x {} = {}",
        seats,
        cfg.starting_stack,
        cfg.starting_stack * seats as u32
    )?;
    Ok(())
}

/// Seed-derived action policy. Legality is derived from the public
/// snapshot so every submitted action is accepted by the engine.
struct ScriptedPolicy {
    rng: ChaCha20Rng,
}

impl ScriptedPolicy {
    fn new(seed: u64) -> Self {
        Self {
            // Decorrelate from the deck, which uses the raw seed.
            rng: ChaCha20Rng::seed_from_u64(seed ^ 0x5EED_0FAC_7001_0A5E),
        }
    }

    fn choose(&mut self, state: &PublicState, seat: SeatId) -> Action {
        let me = &state.seats[seat.0];
        let to_call = state.highest_bet.saturating_sub(me.bet_this_round);
        let roll: u8 = self.rng.random_range(0..100);

        if to_call == 0 {
            if state.highest_bet == 0 && roll < 30 && me.stack > 0 {
                Action::Bet(me.stack.min(50))
            } else if state.highest_bet > 0 && roll < 10 {
                Action::Raise(state.highest_bet + 50)
            } else {
                Action::Check
            }
        } else if roll < 60 {
            Action::Call
        } else if roll < 75 {
            Action::Raise(state.highest_bet + 50)
        } else {
            Action::Fold
        }
    }
}
