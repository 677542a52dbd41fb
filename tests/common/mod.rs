//! Brute-force reference computations over the public API.

#![allow(dead_code)]

use gamma::GammaGame;

/// Owner of every cell, row-major, as raw ids (0 = unclaimed).
pub fn owners(game: &GammaGame) -> Vec<u32> {
    let mut out = Vec::new();
    for y in 0..game.height() {
        for x in 0..game.width() {
            out.push(game.owner(x, y).map_or(0, |p| p.get()));
        }
    }
    out
}

fn neighbours(width: u32, height: u32, idx: usize) -> Vec<usize> {
    let w = width as usize;
    let (x, y) = (idx % w, idx / w);
    let mut out = Vec::new();
    if x > 0 {
        out.push(idx - 1);
    }
    if x + 1 < w {
        out.push(idx + 1);
    }
    if y > 0 {
        out.push(idx - w);
    }
    if y + 1 < height as usize {
        out.push(idx + w);
    }
    out
}

/// Number of 4-connected areas of `player` in `cells`.
fn count_areas(width: u32, height: u32, cells: &[u32], player: u32) -> u32 {
    let mut seen = vec![false; cells.len()];
    let mut areas = 0;
    for start in 0..cells.len() {
        if cells[start] != player || seen[start] {
            continue;
        }
        areas += 1;
        seen[start] = true;
        let mut stack = vec![start];
        while let Some(c) = stack.pop() {
            for n in neighbours(width, height, c) {
                if cells[n] == player && !seen[n] {
                    seen[n] = true;
                    stack.push(n);
                }
            }
        }
    }
    areas
}

/// Areas of `player` on the current board.
pub fn areas(game: &GammaGame, player: u32) -> u32 {
    count_areas(game.width(), game.height(), &owners(game), player)
}

/// Unclaimed cells touching `player`.
pub fn frontier(game: &GammaGame, player: u32) -> u64 {
    let cells = owners(game);
    (0..cells.len())
        .filter(|&c| {
            cells[c] == 0
                && neighbours(game.width(), game.height(), c)
                    .into_iter()
                    .any(|n| cells[n] == player)
        })
        .count() as u64
}

/// Change in the owner's area count if `(x, y)` were emptied, plus one:
/// the fragment count of the cell's area after removal.
pub fn fragments(game: &GammaGame, x: u32, y: u32) -> u32 {
    let mut cells = owners(game);
    let idx = (y * game.width() + x) as usize;
    let owner = cells[idx];
    let before = count_areas(game.width(), game.height(), &cells, owner);
    cells[idx] = 0;
    let after = count_areas(game.width(), game.height(), &cells, owner);
    after + 1 - before
}

/// Whether any capture by `player` would succeed, by trying each one on a
/// copy of the game.
pub fn any_capture(game: &GammaGame, player: u32) -> bool {
    for y in 0..game.height() {
        for x in 0..game.width() {
            let mut copy = game.clone();
            if copy.capture(player, x, y) {
                return true;
            }
        }
    }
    false
}

/// Check every engine-wide invariant against the brute-force oracle.
pub fn assert_consistent(game: &GammaGame) {
    let cells = owners(game);
    let occupied = cells.iter().filter(|&&c| c != 0).count() as u64;
    assert_eq!(game.occupied_count(), occupied);

    let mut busy_total = 0;
    for player in 1..=game.players() {
        let busy = cells.iter().filter(|&&c| c == player).count() as u64;
        assert_eq!(game.busy_count(player), busy, "busy count of player {player}");
        busy_total += game.busy_count(player);

        let used = game.area_count(player);
        assert!(used <= game.max_areas(), "player {player} above area cap");
        assert_eq!(used, areas(game, player), "area count of player {player}");

        let stats = game.player_stats(player).unwrap();
        assert_eq!(stats.frontier_cells, frontier(game, player), "frontier of player {player}");

        let expected_free = if used < game.max_areas() {
            cells.len() as u64 - occupied
        } else {
            stats.frontier_cells
        };
        assert_eq!(game.free_count(player), expected_free);
    }
    assert_eq!(busy_total, occupied);
}
