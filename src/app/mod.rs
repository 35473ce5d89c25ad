use crate::audio::{AudioEngine, SoundEvent};
use crate::engine::QuizSession;
use crate::model::{AppState, Mnemonic};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc::Receiver;

pub mod actions;
pub mod queries;

/// The controller: owns the session, the RNG, the audio engine and the
/// in-flight mnemonic fetch. Views read through `quiz_view()` and mutate
/// only via the action methods.
pub struct QuizApp {
    pub session: QuizSession,
    pub state: AppState,
    pub sound_enabled: bool,
    /// Card shown after a correct answer. Fallback text goes up immediately;
    /// it is replaced in place if the remote provider answers before the
    /// next question.
    pub mnemonic: Option<Mnemonic>,
    rng: StdRng,
    mnemonic_rx: Option<Receiver<Mnemonic>>,
    audio: Option<AudioEngine>,
}

impl QuizApp {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let session = QuizSession::new(&mut rng);

        let audio = match AudioEngine::new() {
            Ok(engine) => Some(engine),
            Err(e) => {
                log::warn!("sound disabled: {e}");
                None
            }
        };

        Self {
            session,
            state: AppState::Welcome,
            sound_enabled: true,
            mnemonic: None,
            rng,
            mnemonic_rx: None,
            audio,
        }
    }

    pub(crate) fn play(&self, event: SoundEvent) {
        if !self.sound_enabled {
            return;
        }
        if let Some(audio) = &self.audio {
            audio.play(event);
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
