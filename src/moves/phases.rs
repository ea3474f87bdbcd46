use super::*;
use crate::board::*;
use crate::game::*;
use crate::players::*;
use std::collections::BTreeSet;

/// The active side draws, plays a distinct card from hand, or plays a
/// configured card as its wildcard.
pub fn markers(game: &Game) -> Vec<Move> {
    let side = game.active();
    let player = game.player(side);
    let mut moves = Vec::new();
    let stock = player.deck().len() + player.deck().discards().len();
    if player.can_draw() && stock > 0 {
        moves.push(Move::shaped(Some(side), Action::Draw, game.board()));
    }
    for card in player.unique() {
        moves.extend(play(game, card, false));
    }
    if player.wildcard() {
        for card in game.config().wildcards.iter() {
            moves.extend(play(game, *card, true));
        }
    }
    dedup(moves)
}

/// Every number or color set the creature could announce about the tiles
/// it may have reached.
///
/// Announcements that would leave fewer than two presence tiles lose on
/// the spot; they are withheld unless every announcement does so.
pub fn updates(game: &Game) -> Vec<Move> {
    let board = game.board();
    let candidates = board.candidates();
    let numbers = candidates
        .iter()
        .map(|i| board.inactive().adjacent_count(*i))
        .collect::<BTreeSet<_>>();
    let colors = candidates
        .iter()
        .map(|i| board.inactive().adjacent_colors(*i))
        .collect::<BTreeSet<_>>();
    let claims = std::iter::empty()
        .chain(numbers.into_iter().map(Claim::Number))
        .chain(colors.into_iter().map(Claim::Colors))
        .map(|claim| {
            let mut after = board.clone();
            Action::Announce(claim).reshape(&mut after);
            let safe = after.presence() >= 2;
            (Move::shaped(Some(Side::Creature), Action::Announce(claim), board), safe)
        })
        .collect::<Vec<_>>();
    let any = claims.iter().any(|(_, safe)| *safe);
    dedup(
        claims
            .into_iter()
            .filter(|(_, safe)| *safe || !any)
            .map(|(m, _)| m)
            .collect(),
    )
}

/// The creature claims one token from a tile it may occupy, or none if
/// no such tile holds one.
pub fn tokens(game: &Game) -> Vec<Move> {
    let board = game.board();
    let claims = board
        .creature_tokens()
        .into_iter()
        .map(|i| Move::shaped(Some(Side::Creature), Action::Token(Some(i)), board))
        .collect::<Vec<_>>();
    match claims.is_empty() {
        true => vec![Move::shaped(Some(Side::Creature), Action::Token(None), board)],
        false => claims,
    }
}

/// At full width the scientists drop an edge whose inactive tile the
/// creature cannot be on. Otherwise, or with both edges covered, nothing
/// is dropped.
pub fn drops(game: &Game) -> Vec<Move> {
    let board = game.board();
    let mut moves = Vec::new();
    if board.is_full() {
        for flank in Flank::all() {
            if !board.inactive().edge(flank).has_creature() {
                moves.push(Move::shaped(Some(Side::Scientist), Action::Drop(Some(flank)), board));
            }
        }
    }
    if moves.is_empty() {
        moves.push(Move::shaped(Some(Side::Scientist), Action::Drop(None), board));
    }
    moves
}

/// The creature puts the dropped markers back on the inactive row.
pub fn free(game: &Game) -> Vec<Move> {
    let board = game.board();
    placements(game)
        .into_iter()
        .map(|placement| Move::shaped(Some(Side::Creature), Action::Place(placement), board))
        .collect()
}

/// The first player lays the next two tiles in either order.
pub fn tiles(game: &Game) -> Vec<Move> {
    Orientation::all()
        .into_iter()
        .map(|o| Move::shaped(Some(game.first()), Action::Tiles(o), game.board()))
        .collect()
}

pub fn tiebreak(game: &Game) -> Vec<Move> {
    vec![Move::shaped(None, Action::Tiebreak, game.board())]
}
