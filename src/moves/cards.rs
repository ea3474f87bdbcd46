use super::*;
use crate::game::*;
use crate::pieces::*;

/// Every move the active side can make by playing `card`.
pub fn play(game: &Game, card: Card, wild: bool) -> Vec<Move> {
    match card {
        Card::MoveOne => move_one(game, wild),
        Card::MoveAll => move_all(game, wild),
        Card::Split => split(game, wild),
        Card::PlaceCubes => place_cubes(game, wild),
    }
}

/// One marker to the inactive space one left or two right of its own.
pub fn move_one(game: &Game, wild: bool) -> Vec<Move> {
    let side = game.active();
    let board = game.board();
    let reach = board.inactive().spaces().len();
    let mut moves = Vec::new();
    for (from, space) in board.active().spaces().iter().enumerate() {
        for color in space.colors().colors() {
            let targets = [from.checked_sub(1), Some(from + 2).filter(|t| *t < reach)];
            for to in targets.into_iter().flatten() {
                let action = Action::MoveOne {
                    from,
                    to,
                    color,
                    wild,
                };
                moves.push(Move::shaped(Some(side), action, board));
            }
        }
    }
    moves
}

/// Every marker of one color shifts together, all left or all right.
///
/// Both shifts are offered for every color, including colors with no
/// marker on the active row; those spend the card without moving anything.
pub fn move_all(game: &Game, wild: bool) -> Vec<Move> {
    let side = game.active();
    let board = game.board();
    Color::all()
        .into_iter()
        .flat_map(|color| {
            [0, 1].into_iter().map(move |shift| Action::MoveAll { color, shift, wild })
        })
        .map(|action| Move::shaped(Some(side), action, board))
        .collect()
}

/// One space's markers divided between its two inactive neighbours.
///
/// Each bipartition with a smaller side of 1 to n/2 markers is sent both
/// ways round. A lone marker counts as the partition of itself against
/// nothing.
pub fn split(game: &Game, wild: bool) -> Vec<Move> {
    let side = game.active();
    let board = game.board();
    let mut moves = Vec::new();
    for (i, space) in board.active().spaces().iter().enumerate() {
        for (left, right) in bipartitions(space.markers()) {
            for (l, r) in [(left, right), (right, left)] {
                let action = Action::Split {
                    space: i,
                    left: l,
                    right: r,
                    wild,
                };
                moves.push(Move::shaped(Some(side), action, board));
            }
        }
    }
    dedup(moves)
}

/// Places any markers left over from a dropped edge. With nothing pending
/// the card is a pass-through that readies the wildcard.
pub fn place_cubes(game: &Game, wild: bool) -> Vec<Move> {
    let side = game.active();
    let board = game.board();
    placements(game)
        .into_iter()
        .map(|placement| Action::PlaceCubes { placement, wild })
        .map(|action| Move::shaped(Some(side), action, board))
        .collect()
}

fn bipartitions(markers: &[Color]) -> Vec<(Palette, Palette)> {
    let n = markers.len();
    match n {
        0 => vec![],
        1 => vec![(markers.iter().copied().collect(), Palette::empty())],
        _ => (1..=n / 2)
            .flat_map(|k| combinations(n, k))
            .map(|chosen| {
                let mut left = Palette::empty();
                let mut right = Palette::empty();
                for (i, color) in markers.iter().enumerate() {
                    match chosen.contains(&i) {
                        true => left.add(*color),
                        false => right.add(*color),
                    }
                }
                (left, right)
            })
            .collect(),
    }
}

/// All `k`-subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(start: usize, n: usize, k: usize, acc: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if acc.len() == k {
            out.push(acc.clone());
            return;
        }
        for i in start..n {
            acc.push(i);
            extend(i + 1, n, k, acc, out);
            acc.pop();
        }
    }
    let mut out = Vec::new();
    extend(0, n, k, &mut Vec::with_capacity(k), &mut out);
    out
}
