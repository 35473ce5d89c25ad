use super::*;
use crate::engine::kou_jue;
use crate::model::QuizState;
use crate::view_models::{OptionButton, QuizView, ScoreBox};

impl QuizApp {
    /// Snapshot of everything the quiz view renders.
    pub fn quiz_view(&self) -> QuizView {
        let fact = self.session.fact();
        let revealed = self.session.state() == QuizState::Revealed;
        let wrong = self.session.wrong_selection();
        let tally = self.session.tally();

        QuizView {
            factor_a: fact.factor_a,
            factor_b: fact.factor_b,
            product: fact.product,
            revealed,
            options: self
                .session
                .options()
                .iter()
                .map(|&value| OptionButton {
                    value,
                    wrong_pick: wrong == Some(value),
                })
                .collect(),
            kou_jue: revealed.then(|| kou_jue(&fact)),
            score: [
                ScoreBox {
                    caption: "答对",
                    value: tally.correct,
                },
                ScoreBox {
                    caption: "尝试",
                    value: tally.attempts,
                },
            ],
        }
    }
}
