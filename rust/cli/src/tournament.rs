//! Round-robin orchestration over `dealer::play_hand`.
//!
//! A `Match` is three agents playing a fixed number of hands with the
//! button rotating so no seat keeps the positional edge; a `Tournament`
//! runs a match for every unique trio drawn from a list of presets and
//! aggregates scores and placements. All randomness derives from one
//! base seed, so a whole tournament replays exactly.

use std::io::Write;

use kuhn3p_ai::Registry;
use kuhn3p_engine::betting::NUM_SEATS;
use kuhn3p_engine::dealer::{play_hand, winner};
use kuhn3p_engine::deck::Deck;
use kuhn3p_engine::logger::{HandLogger, HandRecord};
use kuhn3p_engine::player::Player;

use crate::error::CliError;

/// Per-player totals for one match, indexed by roster position (the
/// order the players were handed in), not by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchScores {
    pub scores: [i64; NUM_SEATS],
    pub forfeits: [u32; NUM_SEATS],
    pub hands: u32,
}

/// Play one match between three players.
///
/// With `rotate_button` the roster shifts one seat per hand and deltas
/// are mapped back to roster order, the way the original round-robin
/// rotates its lineup. Scores are exact integers and must sum to zero;
/// a nonzero sum means the engine broke its defining guarantee and is
/// reported as an engine fault rather than smoothed over.
pub fn play_match(
    players: &mut [Box<dyn Player>; NUM_SEATS],
    hands: u32,
    deck_seed: u64,
    rotate_button: bool,
    mut logger: Option<&mut HandLogger>,
) -> Result<MatchScores, CliError> {
    let mut deck = Deck::new_with_seed(deck_seed);
    let mut scores = [0i64; NUM_SEATS];
    let mut forfeits = [0u32; NUM_SEATS];

    for hand_num in 0..hands {
        let ranks = deck.deal();
        let first = if rotate_button {
            hand_num as usize % NUM_SEATS
        } else {
            0
        };

        let [a, b, c] = players;
        let outcome = match first {
            0 => play_hand([a.as_mut(), b.as_mut(), c.as_mut()], ranks)?,
            1 => play_hand([b.as_mut(), c.as_mut(), a.as_mut()], ranks)?,
            _ => play_hand([c.as_mut(), a.as_mut(), b.as_mut()], ranks)?,
        };

        for seat in 0..NUM_SEATS {
            scores[(first + seat) % NUM_SEATS] += outcome.deltas[seat];
        }
        if let Some((seat, _)) = &outcome.forfeit {
            forfeits[(first + seat) % NUM_SEATS] += 1;
        }

        if let Some(log) = logger.as_deref_mut() {
            let win_seat = winner(outcome.state, ranks);
            let record = HandRecord {
                hand_id: log.next_id(),
                seed: Some(deck_seed),
                ranks,
                actions: outcome.actions,
                final_state: outcome.state.id(),
                deltas: outcome.deltas,
                winner: win_seat,
                result: Some(format!(
                    "seat {} wins {} [{}]",
                    win_seat,
                    outcome.state.pot_size(),
                    outcome.state.describe()
                )),
                ts: None,
                forfeit: outcome.forfeit.as_ref().map(|(seat, _)| *seat),
            };
            log.write(&record)?;
        }
    }

    let total: i64 = scores.iter().sum();
    if total != 0 {
        return Err(CliError::Engine(format!(
            "match scores sum to {}, expected 0: {:?}",
            total, scores
        )));
    }

    Ok(MatchScores {
        scores,
        forfeits,
        hands,
    })
}

/// Aggregate results for one preset across a tournament.
#[derive(Debug, Clone)]
pub struct Standing {
    pub name: String,
    pub total: i64,
    pub matches: u32,
    pub firsts: u32,
    pub seconds: u32,
    pub thirds: u32,
}

/// Run every unique trio of `names` against each other, `rounds` times.
///
/// Returns standings sorted by total score, best first. Placement ties
/// within a match are broken by roster order.
pub fn run_round_robin(
    registry: &Registry,
    names: &[String],
    hands: u32,
    rounds: u32,
    base_seed: u64,
    rotate_button: bool,
    progress: Option<&mut dyn Write>,
) -> Result<Vec<Standing>, CliError> {
    if names.len() < NUM_SEATS {
        return Err(CliError::InvalidInput(format!(
            "a tournament needs at least 3 agents, got {}",
            names.len()
        )));
    }

    let mut standings: Vec<Standing> = names
        .iter()
        .map(|name| Standing {
            name: name.clone(),
            total: 0,
            matches: 0,
            firsts: 0,
            seconds: 0,
            thirds: 0,
        })
        .collect();

    let trios = unique_trios(names.len());
    let mut match_num = 0u64;

    let mut progress = progress;
    if let Some(out) = progress.as_deref_mut() {
        writeln!(
            out,
            "Tournament: {} agents, {} matches over {} round(s), {} hands per match",
            names.len(),
            trios.len() * rounds as usize,
            rounds,
            hands
        )?;
    }

    for _round in 0..rounds {
        for &(i, j, k) in &trios {
            // Every match gets its own stream of deck and agent seeds so
            // reordering the roster never changes unrelated matches.
            let match_seed = base_seed.wrapping_add(match_num.wrapping_mul(0x9E37_79B9_7F4A_7C15));
            match_num += 1;

            let mut players = [
                registry.create(&names[i], match_seed.wrapping_add(1))?,
                registry.create(&names[j], match_seed.wrapping_add(2))?,
                registry.create(&names[k], match_seed.wrapping_add(3))?,
            ];
            let result = play_match(&mut players, hands, match_seed, rotate_button, None)?;

            let roster = [i, j, k];
            for (pos, &who) in roster.iter().enumerate() {
                standings[who].total += result.scores[pos];
                standings[who].matches += 1;
            }
            // Placements: sort roster positions by score, best first.
            let mut order = [0usize, 1, 2];
            order.sort_by_key(|&pos| -result.scores[pos]);
            standings[roster[order[0]]].firsts += 1;
            standings[roster[order[1]]].seconds += 1;
            standings[roster[order[2]]].thirds += 1;
        }
    }

    standings.sort_by(|a, b| b.total.cmp(&a.total).then(a.name.cmp(&b.name)));
    Ok(standings)
}

/// All index trios i < j < k over `n` entrants.
fn unique_trios(n: usize) -> Vec<(usize, usize, usize)> {
    let mut trios = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                trios.push((i, j, k));
            }
        }
    }
    trios
}
