use crate::engine::{generate_options, random_fact};
use crate::model::{Fact, QuizState, ScoreTally};
use rand::Rng;

/// What a `select` call did, so the caller can pick the matching sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Correct,
    Wrong,
    /// Selecting after the reveal does nothing.
    Ignored,
}

/// One quiz session: the current fact, its answer choices, the per-question
/// phase and the running score. Owned by the controller; the UI only ever
/// sees it read-only.
pub struct QuizSession {
    fact: Fact,
    options: Vec<u32>,
    state: QuizState,
    tally: ScoreTally,
    wrong_selection: Option<u32>,
}

impl QuizSession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let fact = random_fact(rng);
        let options = generate_options(fact.product, rng);
        Self {
            fact,
            options,
            state: QuizState::Thinking,
            tally: ScoreTally::default(),
            wrong_selection: None,
        }
    }

    /// Swaps in a fresh fact and option set. Valid from any state; the tally
    /// carries over, the wrong-pick marker does not.
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) {
        self.fact = random_fact(rng);
        self.options = generate_options(self.fact.product, rng);
        self.state = QuizState::Thinking;
        self.wrong_selection = None;
    }

    /// Evaluates an answer pick. Every pick while thinking counts as an
    /// attempt, right or wrong; picks after the reveal are ignored.
    pub fn select(&mut self, value: u32) -> Selection {
        if self.state == QuizState::Revealed {
            return Selection::Ignored;
        }

        self.tally.attempts += 1;
        if value == self.fact.product {
            self.tally.correct += 1;
            self.state = QuizState::Revealed;
            self.wrong_selection = None;
            Selection::Correct
        } else {
            self.wrong_selection = Some(value);
            Selection::Wrong
        }
    }

    pub fn fact(&self) -> Fact {
        self.fact
    }

    pub fn options(&self) -> &[u32] {
        &self.options
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    pub fn wrong_selection(&self) -> Option<u32> {
        self.wrong_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(seed: u64) -> (QuizSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = QuizSession::new(&mut rng);
        (session, rng)
    }

    fn some_wrong_option(session: &QuizSession) -> u32 {
        session
            .options()
            .iter()
            .copied()
            .find(|&v| v != session.fact().product)
            .unwrap()
    }

    #[test]
    fn new_session_starts_thinking_with_zero_tally() {
        let (session, _) = session(1);
        assert_eq!(session.state(), QuizState::Thinking);
        assert_eq!(session.tally(), ScoreTally::default());
        assert_eq!(session.wrong_selection(), None);
        assert!(session.options().contains(&session.fact().product));
    }

    #[test]
    fn correct_pick_reveals_and_counts_both() {
        let (mut session, _) = session(2);
        let outcome = session.select(session.fact().product);
        assert_eq!(outcome, Selection::Correct);
        assert_eq!(session.state(), QuizState::Revealed);
        assert_eq!(session.tally().correct, 1);
        assert_eq!(session.tally().attempts, 1);
        assert_eq!(session.wrong_selection(), None);
    }

    #[test]
    fn wrong_pick_marks_and_counts_only_attempt() {
        let (mut session, _) = session(3);
        let wrong = some_wrong_option(&session);
        let outcome = session.select(wrong);
        assert_eq!(outcome, Selection::Wrong);
        assert_eq!(session.state(), QuizState::Thinking);
        assert_eq!(session.tally().correct, 0);
        assert_eq!(session.tally().attempts, 1);
        assert_eq!(session.wrong_selection(), Some(wrong));
    }

    #[test]
    fn repeating_the_same_wrong_pick_keeps_counting_attempts() {
        let (mut session, _) = session(4);
        let wrong = some_wrong_option(&session);
        session.select(wrong);
        session.select(wrong);
        session.select(wrong);
        assert_eq!(session.tally().attempts, 3);
        assert_eq!(session.tally().correct, 0);
        assert_eq!(session.wrong_selection(), Some(wrong));
    }

    #[test]
    fn picks_after_reveal_are_ignored() {
        let (mut session, _) = session(5);
        session.select(session.fact().product);
        let tally = session.tally();
        assert_eq!(session.select(session.fact().product), Selection::Ignored);
        assert_eq!(session.select(some_wrong_option(&session)), Selection::Ignored);
        assert_eq!(session.tally(), tally);
        assert_eq!(session.state(), QuizState::Revealed);
    }

    #[test]
    fn next_question_resets_phase_and_marker_but_not_tally() {
        let (mut session, mut rng) = session(6);
        let wrong = some_wrong_option(&session);
        session.select(wrong);
        session.select(session.fact().product);
        let tally = session.tally();

        session.next_question(&mut rng);
        assert_eq!(session.state(), QuizState::Thinking);
        assert_eq!(session.wrong_selection(), None);
        assert_eq!(session.tally(), tally);
        assert!(session.options().contains(&session.fact().product));
    }

    #[test]
    fn next_question_clears_marker_while_still_thinking() {
        let (mut session, mut rng) = session(7);
        let wrong = some_wrong_option(&session);
        session.select(wrong);
        session.next_question(&mut rng);
        assert_eq!(session.wrong_selection(), None);
        assert_eq!(session.state(), QuizState::Thinking);
    }
}
