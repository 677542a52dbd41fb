//! Engine-wide invariants over random games, checked against brute force.

mod common;

use gamma::GammaGame;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Copy, Debug)]
enum Op {
    Place(u32, u32, u32),
    Capture(u32, u32, u32),
}

/// Apply `op`, checking that a rejected call changes nothing.
fn apply(game: &mut GammaGame, op: Op) -> bool {
    let before = game.snapshot();
    let stats: Vec<_> = (1..=game.players()).map(|p| game.player_stats(p)).collect();
    let ok = match op {
        Op::Place(p, x, y) => game.place(p, x, y),
        Op::Capture(p, x, y) => game.capture(p, x, y),
    };
    if !ok {
        assert_eq!(game.snapshot(), before, "failed {op:?} changed the board");
        let after: Vec<_> = (1..=game.players()).map(|p| game.player_stats(p)).collect();
        assert_eq!(stats, after, "failed {op:?} changed player stats");
    }
    ok
}

fn op_strategy(width: u32, height: u32, players: u32) -> impl Strategy<Value = Op> {
    // Ids and coordinates reach one past the valid range.
    (0..=players + 1, 0..=width, 0..=height, 0..8u8).prop_map(|(p, x, y, kind)| {
        if kind == 0 {
            Op::Capture(p, x, y)
        } else {
            Op::Place(p, x, y)
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold(
        areas in 1u32..4,
        ops in prop::collection::vec(op_strategy(5, 4, 3), 1..80),
    ) {
        let mut game = GammaGame::new(5, 4, 3, areas).unwrap();
        for op in ops {
            apply(&mut game, op);
            common::assert_consistent(&game);
        }
    }

    #[test]
    fn prop_fragments_match_brute_force(
        cells in prop::collection::vec(0u32..3, 16),
        probe in 0usize..16,
    ) {
        // Lay the pattern down directly; a generous cap makes every claim legal.
        let mut game = GammaGame::new(4, 4, 2, 16).unwrap();
        for (i, &owner) in cells.iter().enumerate() {
            if owner != 0 {
                prop_assert!(game.place(owner, (i % 4) as u32, (i / 4) as u32));
            }
        }
        let (x, y) = ((probe % 4) as u32, (probe / 4) as u32);
        match game.fragments_after_removal(x, y) {
            Some(n) => {
                prop_assert_eq!(n, common::fragments(&game, x, y));
            }
            None => {
                prop_assert_eq!(cells[probe], 0);
            }
        }
    }
}

#[test]
fn test_long_random_games_stay_consistent() {
    for seed in 0..8u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let width = rng.gen_range(1..8);
        let height = rng.gen_range(1..8);
        let players = rng.gen_range(1..5);
        let areas = rng.gen_range(1..5);
        let mut game = GammaGame::new(width, height, players, areas).unwrap();

        for _ in 0..300 {
            let player = rng.gen_range(1..=players);
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let op = if rng.gen_bool(0.15) {
                Op::Capture(player, x, y)
            } else {
                Op::Place(player, x, y)
            };

            let feasible = match op {
                Op::Capture(p, ..) => Some(game.capture_feasible(p)),
                Op::Place(..) => None,
            };
            let ok = apply(&mut game, op);
            if ok {
                if let Some(feasible) = feasible {
                    assert!(feasible, "seed {seed}: capture succeeded but was reported infeasible");
                }
            }
            common::assert_consistent(&game);
        }

        for player in 1..=players {
            assert_eq!(
                game.capture_feasible(player),
                common::any_capture(&game, player),
                "seed {seed}, player {player}"
            );
        }
    }
}
