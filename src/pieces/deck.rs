use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// An ordered draw pile with a discard pile.
///
/// Index 0 of the draw pile is the top of the deck. Shuffling always takes an
/// explicit random source so that searches and tests stay reproducible.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct Deck<T> {
    items: Vec<T>,
    discard: Vec<T>,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            discard: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            discard: Vec::new(),
        }
    }
}

impl<T> Deck<T> {
    /// Cards left to draw.
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn items(&self) -> &[T] {
        &self.items
    }
    pub fn discards(&self) -> &[T] {
        &self.discard
    }
    /// Draws up to `n` items from the top; fewer if the pile runs short.
    pub fn draw(&mut self, n: usize) -> Vec<T> {
        let n = n.min(self.items.len());
        self.items.drain(..n).collect()
    }
    pub fn discard(&mut self, item: T) {
        self.discard.push(item);
    }
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }
    /// Shuffles only the bottom `n` items, leaving the top in place.
    pub fn shuffle_bottom<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        let top = self.items.len().saturating_sub(n);
        self.items[top..].shuffle(rng);
    }
    /// Returns the discard pile to the draw pile and shuffles everything.
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.append(&mut self.discard);
        self.shuffle(rng);
    }
    /// Replaces the draw pile, keeping the discard pile.
    pub fn restock(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draw_from_top() {
        let mut deck = Deck::from(vec![1, 2, 3]);
        assert_eq!(deck.draw(2), vec![1, 2]);
        assert_eq!(deck.draw(5), vec![3]);
        assert!(deck.draw(1).is_empty());
    }

    #[test]
    fn recycle_returns_discards() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::from(vec![1]);
        deck.discard(2);
        deck.discard(3);
        deck.recycle(rng);
        assert_eq!(deck.len(), 3);
        assert!(deck.discards().is_empty());
    }

    #[test]
    fn shuffle_bottom_keeps_top() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::from((0..20).collect::<Vec<_>>());
        deck.shuffle_bottom(10, rng);
        assert_eq!(&deck.items()[..10], &(0..10).collect::<Vec<_>>()[..]);
        let mut tail = deck.items()[10..].to_vec();
        tail.sort();
        assert_eq!(tail, (10..20).collect::<Vec<_>>());
    }
}
