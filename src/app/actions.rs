use super::*;
use crate::engine::Selection;
use crate::mnemonic::{fallback_mnemonic, spawn_fetch};

impl QuizApp {
    /// Welcome → quiz. The session already holds a fresh question.
    pub fn start_quiz(&mut self) {
        self.play(SoundEvent::Click);
        self.state = AppState::Quiz;
    }

    pub fn next_question(&mut self) {
        self.play(SoundEvent::Click);
        self.session.next_question(&mut self.rng);
        self.mnemonic = None;
        // A late remote answer for the previous fact must not surface here.
        self.mnemonic_rx = None;
    }

    pub fn select_option(&mut self, value: u32) {
        match self.session.select(value) {
            Selection::Correct => {
                self.play(SoundEvent::Correct);
                let fact = self.session.fact();
                self.mnemonic = Some(fallback_mnemonic(&fact));
                self.mnemonic_rx = spawn_fetch(fact);
            }
            Selection::Wrong => {
                self.play(SoundEvent::Wrong);
            }
            Selection::Ignored => {}
        }
    }

    /// Drops the old session (and with it the tally) and starts over.
    pub fn reset_session(&mut self) {
        self.play(SoundEvent::Click);
        self.session = QuizSession::new(&mut self.rng);
        self.mnemonic = None;
        self.mnemonic_rx = None;
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        self.play(SoundEvent::Click);
    }

    /// Pulls in a finished mnemonic fetch, if any. Called once per frame.
    pub fn poll_mnemonic(&mut self) {
        use std::sync::mpsc::TryRecvError;

        let Some(rx) = &self.mnemonic_rx else { return };
        match rx.try_recv() {
            Ok(mnemonic) => {
                self.mnemonic = Some(mnemonic);
                self.mnemonic_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.mnemonic_rx = None;
            }
        }
    }

    /// True while a remote fetch is still in flight; the UI keeps repainting
    /// so the card can swap without user input.
    pub fn awaiting_mnemonic(&self) -> bool {
        self.mnemonic_rx.is_some()
    }
}
