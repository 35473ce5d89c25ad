//! Read-only view state handed to the UI. Views render these and call back
//! into `QuizApp` actions; they never touch the session directly.

#[derive(Clone, Debug)]
pub struct OptionButton {
    pub value: u32,
    /// The most recent wrong pick; rendered disabled and flagged until the
    /// next question.
    pub wrong_pick: bool,
}

#[derive(Clone, Debug)]
pub struct ScoreBox {
    pub caption: &'static str,
    pub value: u32,
}

#[derive(Clone, Debug)]
pub struct QuizView {
    pub factor_a: u32,
    pub factor_b: u32,
    pub product: u32,
    pub revealed: bool,
    pub options: Vec<OptionButton>,
    /// The kou jue headline; only set after the reveal.
    pub kou_jue: Option<String>,
    pub score: [ScoreBox; 2],
}

impl QuizView {
    /// What goes in the `=` slot of the equation.
    pub fn answer_text(&self) -> String {
        if self.revealed {
            self.product.to_string()
        } else {
            "?".to_owned()
        }
    }
}
