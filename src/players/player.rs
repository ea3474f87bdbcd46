use super::*;
use crate::Tokens;
use crate::pieces::*;
use rand::Rng;
use serde::Serialize;

/// One side's private holdings: a bounded hand, a card deck with discard
/// pile, collected tokens, and whether a wildcard may be played.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct Player {
    side: Side,
    limit: usize,
    hand: Vec<Card>,
    deck: Deck<Card>,
    tokens: Tokens,
    wildcard: bool,
}

impl Player {
    /// Shuffles the loadout's cards and draws the starting hand.
    pub fn deal<R: Rng + ?Sized>(side: Side, loadout: &Loadout, rng: &mut R) -> Self {
        let mut deck = Deck::from(loadout.cards());
        deck.shuffle(rng);
        let mut player = Self {
            side,
            limit: loadout.limit,
            hand: Vec::with_capacity(loadout.limit),
            deck,
            tokens: 0,
            wildcard: false,
        };
        player.draw(loadout.hand, rng);
        player
    }

    pub fn side(&self) -> Side {
        self.side
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn deck(&self) -> &Deck<Card> {
        &self.deck
    }
    pub fn tokens(&self) -> Tokens {
        self.tokens
    }
    pub fn wildcard(&self) -> bool {
        self.wildcard
    }
    pub fn can_draw(&self) -> bool {
        self.hand.len() < self.limit
    }
    /// Distinct card kinds in hand, sorted.
    pub fn unique(&self) -> Vec<Card> {
        let mut cards = self.hand.clone();
        cards.sort();
        cards.dedup();
        cards
    }

    /// Draws up to `n` cards without exceeding the hand limit, recycling
    /// the discard pile once if the deck runs dry. Returns how many arrived.
    pub fn draw<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> usize {
        let n = n.min(self.limit.saturating_sub(self.hand.len()));
        let mut cards = self.deck.draw(n);
        if cards.len() < n {
            self.deck.recycle(rng);
            cards.extend(self.deck.draw(n - cards.len()));
        }
        let drawn = cards.len();
        self.hand.extend(cards);
        drawn
    }
    /// Moves one copy of `card` from the hand to the discard pile.
    pub fn play(&mut self, card: Card) {
        let i = self
            .hand
            .iter()
            .position(|c| *c == card)
            .unwrap_or_else(|| panic!("{} plays {} which is not in hand", self.side, card));
        let card = self.hand.remove(i);
        self.deck.discard(card);
    }
    /// Spends the wildcard.
    pub fn spend_wildcard(&mut self) {
        assert!(self.wildcard, "{} has no wildcard to spend", self.side);
        self.wildcard = false;
    }
    pub fn ready_wildcard(&mut self) {
        self.wildcard = true;
    }
    /// Collects a token, which also readies the wildcard.
    pub fn add_token(&mut self) {
        self.tokens += 1;
        self.wildcard = true;
    }

    /// A copy consistent with what the other side can see.
    ///
    /// The draw pile order is always hidden. The hand is hidden too unless
    /// the observer owns this player, in which case it is kept as is.
    /// Hand size, discard pile and tokens are public and are preserved.
    pub fn determinize<R: Rng + ?Sized>(&self, observer: Side, rng: &mut R) -> Self {
        let mut player = self.clone();
        if observer == self.side {
            player.deck.shuffle(rng);
        } else {
            let held = player.hand.len();
            let mut pool = std::mem::take(&mut player.hand);
            pool.extend(player.deck.items().iter().copied());
            let mut unseen = Deck::from(pool);
            unseen.shuffle(rng);
            player.hand = unseen.draw(held);
            player.deck.restock(unseen.draw(unseen.len()));
        }
        player
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hand = self.hand.iter().map(|c| c.to_string()).collect::<String>();
        write!(
            f,
            "{:<9} hand {:<4} deck {:>2} tokens {}{}",
            self.side,
            hand,
            self.deck.len(),
            self.tokens,
            if self.wildcard { " *" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn player(rng: &mut SmallRng) -> Player {
        Player::deal(Side::Scientist, &Loadout::scientist(), rng)
    }

    #[test]
    fn deal_draws_starting_hand() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let player = player(rng);
        assert_eq!(player.hand().len(), 3);
        assert_eq!(player.deck().len(), 7);
        assert!(!player.wildcard());
    }

    #[test]
    fn draw_stops_at_limit() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut player = player(rng);
        assert_eq!(player.draw(5, rng), 1);
        assert_eq!(player.hand().len(), 4);
        assert!(!player.can_draw());
        assert_eq!(player.draw(1, rng), 0);
    }

    #[test]
    fn draw_recycles_discards() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut player = player(rng);
        for _ in 0..20 {
            let card = player.hand()[0];
            player.play(card);
            player.draw(1, rng);
            assert_eq!(player.hand().len(), 3);
        }
        assert_eq!(player.deck().len() + player.deck().discards().len(), 7);
    }

    #[test]
    fn token_readies_wildcard() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut player = player(rng);
        player.add_token();
        assert_eq!(player.tokens(), 1);
        assert!(player.wildcard());
        player.spend_wildcard();
        assert!(!player.wildcard());
    }

    #[test]
    fn determinize_preserves_public_counts() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut player = player(rng);
        let card = player.hand()[0];
        player.play(card);
        let own = player.determinize(Side::Scientist, rng);
        assert_eq!(own.hand(), player.hand());
        let other = player.determinize(Side::Creature, rng);
        assert_eq!(other.hand().len(), player.hand().len());
        assert_eq!(other.deck().len(), player.deck().len());
        assert_eq!(other.deck().discards(), player.deck().discards());
        let mut a = other.hand().to_vec();
        a.extend(other.deck().items());
        a.sort();
        let mut b = player.hand().to_vec();
        b.extend(player.deck().items());
        b.sort();
        assert_eq!(a, b);
    }
}
