//! Interactive player.

use super::{BidRound, Card, Player, PlayerError, Prompt, Suit};

/// A player whose decisions are made by a person, through a [`Prompt`].
///
/// The hand is kept in natural rank order, and cards are chosen by their index in that order.
pub struct Human<P> {
    name: String,
    hand: Vec<Card>,
    prompt: P,
}

impl<P: Prompt> Human<P> {
    pub fn new(name: &str, prompt: P) -> Self {
        Self {
            name: name.to_string(),
            hand: vec![],
            prompt,
        }
    }

    /// The prompt used to interact with the player.
    #[cfg(test)]
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    fn sort_hand(&mut self) {
        self.hand.sort_by(|a, b| a.cmp_rank(*b));
    }

    fn show_hand(&mut self) -> Result<(), PlayerError> {
        for (i, card) in self.hand.iter().enumerate() {
            let line = format!("Human player {}'s hand: [{i}] {card}", self.name);
            self.prompt.show(&line)?;
        }
        Ok(())
    }

    /// Asks for the index of a card in the hand.
    fn ask_index(&mut self, question: &str) -> Result<usize, PlayerError> {
        let len = self.hand.len();
        self.prompt.ask(question, |s| {
            s.parse::<usize>().ok().filter(|idx| *idx < len)
        })
    }

    fn take(&mut self, idx: usize) -> Card {
        let card = self.hand.remove(idx);
        self.sort_hand();
        card
    }
}

impl<P: Prompt> Player for Human<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.sort_hand();
    }

    fn decide_trump(
        &mut self,
        _upcard: Card,
        _is_dealer: bool,
        _round: BidRound,
    ) -> Result<Option<Suit>, PlayerError> {
        self.show_hand()?;
        let question = format!(
            "Human player {}, please enter a suit, or \"pass\":",
            self.name
        );
        self.prompt.ask(&question, |s| match s {
            "pass" => Some(None),
            _ => s.parse::<Suit>().ok().map(Some),
        })
    }

    fn add_and_discard(&mut self, upcard: Card) -> Result<(), PlayerError> {
        self.show_hand()?;
        self.prompt.show("Discard upcard: [-1]")?;
        let len = self.hand.len();
        let question = format!(
            "Human player {}, please select a card to discard:",
            self.name
        );
        let choice = self.prompt.ask(&question, |s| match s.parse::<i64>() {
            Ok(-1) => Some(None),
            Ok(idx) => usize::try_from(idx).ok().filter(|idx| *idx < len).map(Some),
            Err(_) => None,
        })?;
        if let Some(idx) = choice {
            self.take(idx);
            self.add_card(upcard);
        }
        Ok(())
    }

    fn lead_card(&mut self, _trump: Suit) -> Result<Card, PlayerError> {
        if self.hand.is_empty() {
            return Err(PlayerError::EmptyHand);
        }
        self.show_hand()?;
        let question = format!("Human player {}, please select a card:", self.name);
        let idx = self.ask_index(&question)?;
        Ok(self.take(idx))
    }

    fn play_card(&mut self, _led: Card, trump: Suit) -> Result<Card, PlayerError> {
        self.lead_card(trump)
    }

    fn handle_error(&mut self, err: &PlayerError) -> bool {
        match err {
            PlayerError::InputClosed | PlayerError::Io(_) => false,
            _ => self.prompt.show(&format!("Error: {err}")).is_ok(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::convert::TryFrom;

    use assert_matches::assert_matches;

    use super::*;
    use crate::euchre::player::Scripted;
    use crate::euchre::Rank;

    fn card(s: &str) -> Card {
        let mut chars = s.chars();
        let rank = Rank::try_from(chars.next().unwrap()).unwrap();
        let suit = Suit::try_from(chars.next().unwrap()).unwrap();
        Card { rank, suit }
    }

    fn human(cards: &[&str], script: &[&str]) -> Human<Scripted> {
        let prompt = script
            .iter()
            .fold(Scripted::default(), |prompt, line| prompt.answers(line));
        let mut player = Human::new("Brian", prompt);
        for c in cards {
            player.add_card(card(c));
        }
        player
    }

    #[test]
    fn test_hand_sorted_by_rank() {
        let player = human(&["AS", "9H", "JC", "TD"], &[]);
        assert_eq!(&[card("9H"), card("TD"), card("JC"), card("AS")], player.hand());
    }

    #[test]
    fn test_decide_trump() {
        let mut player = human(&["AS", "9H"], &["pass", "", "hearts", "Hearts"]);
        let upcard = card("KH");
        assert_eq!(None, player.decide_trump(upcard, false, BidRound::First).unwrap());
        assert_eq!(
            Some(Suit::Hearts),
            player.decide_trump(upcard, false, BidRound::First).unwrap()
        );
        let output = &player.prompt().output;
        assert_eq!("Human player Brian's hand: [0] Nine of Hearts", output[0]);
        assert_eq!("Human player Brian's hand: [1] Ace of Spades", output[1]);
        assert_eq!(
            "Human player Brian, please enter a suit, or \"pass\":",
            output[2]
        );
        assert!(output.contains(&"Invalid input, try again".to_string()));
    }

    #[test]
    fn test_discard() {
        let mut player = human(&["9S", "TS", "JS", "QS", "KS"], &["7", "-1", "0"]);
        player.add_and_discard(card("AS")).unwrap();
        assert_eq!(5, player.hand().len());
        assert!(!player.hand().contains(&card("AS")));

        player.add_and_discard(card("AH")).unwrap();
        assert_eq!(
            &[card("TS"), card("JS"), card("QS"), card("KS"), card("AH")],
            player.hand()
        );
    }

    #[test]
    fn test_lead_and_play() {
        let mut player = human(&["KD", "9C", "AH"], &["2", "x", "0", "0"]);
        assert_eq!(card("AH"), player.lead_card(Suit::Spades).unwrap());
        assert_eq!(card("9C"), player.play_card(card("QD"), Suit::Spades).unwrap());
        assert_eq!(card("KD"), player.play_card(card("QD"), Suit::Spades).unwrap());
        assert_matches!(player.lead_card(Suit::Spades), Err(PlayerError::EmptyHand));
    }

    #[test]
    fn test_input_closed() {
        let mut player = human(&["KD"], &[]);
        assert_matches!(player.lead_card(Suit::Spades), Err(PlayerError::InputClosed));
        assert!(!player.handle_error(&PlayerError::InputClosed));
        assert!(player.handle_error(&PlayerError::DealerMustOrderUp));
        assert_eq!(
            Some(&"Error: the dealer must order up a suit".to_string()),
            player.prompt().output.last()
        );
    }
}
