use crate::content::Flashcard;

/// A flashcard deck being reviewed, one card at a time.
///
/// Cards show their term first; [`Deck::flip`] turns them to the definition.
/// Moving to another card always shows its term again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Flashcard>,
    position: usize,
    flipped: bool,
}

impl Deck {
    /// Returns `None` for an empty card list.
    pub fn new(cards: Vec<Flashcard>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            cards,
            position: 0,
            flipped: false,
        })
    }

    pub fn current(&self) -> &Flashcard {
        &self.cards[self.position]
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Next card, wrapping to the first after the last.
    pub fn next(&mut self) -> &Flashcard {
        self.position = (self.position + 1) % self.cards.len();
        self.flipped = false;
        self.current()
    }

    /// Previous card, wrapping to the last before the first.
    pub fn previous(&mut self) -> &Flashcard {
        self.position = (self.position + self.cards.len() - 1) % self.cards.len();
        self.flipped = false;
        self.current()
    }

    /// Zero-based position of the current card.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::flashcards;

    #[test]
    fn test_empty_deck() {
        assert!(Deck::new(vec![]).is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut deck = Deck::new(flashcards()).unwrap();
        assert_eq!(deck.current().term, "Phishing");
        assert_eq!(deck.previous().term, "DDoS");
        assert_eq!(deck.position(), 2);
        assert_eq!(deck.next().term, "Phishing");
        assert_eq!(deck.next().term, "Ransomware");
    }

    #[test]
    fn test_flip_resets_on_move() {
        let mut deck = Deck::new(flashcards()).unwrap();
        deck.flip();
        assert!(deck.is_flipped());
        deck.flip();
        assert!(!deck.is_flipped());

        deck.flip();
        deck.next();
        assert!(!deck.is_flipped());
    }
}
