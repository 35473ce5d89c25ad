use serde::{Deserialize, Serialize};

/// A single multiplication problem from the 1–9 table.
///
/// Factors are stored in canonical order (`factor_a <= factor_b`), the way
/// the table is recited: 3×7, never 7×3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub factor_a: u32,
    pub factor_b: u32,
    pub product: u32,
}

impl Fact {
    pub fn new(a: u32, b: u32) -> Self {
        let (factor_a, factor_b) = if a <= b { (a, b) } else { (b, a) };
        Self {
            factor_a,
            factor_b,
            product: factor_a * factor_b,
        }
    }
}

/// Per-question phase: the child is either still picking an answer or has
/// found the right one and is looking at the reveal card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    Thinking,
    Revealed,
}

/// Running score for the session. Monotone; only a full reset rebuilds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub correct: u32,
    pub attempts: u32,
}

/// Fun memory aid for a fact, either fetched from the remote text-generation
/// service or built locally as a fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mnemonic {
    pub rhyme: String,
    pub visual_cue: String,
    pub emojis: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_new_orders_factors() {
        let f = Fact::new(7, 3);
        assert_eq!(f.factor_a, 3);
        assert_eq!(f.factor_b, 7);
        assert_eq!(f.product, 21);
    }

    #[test]
    fn mnemonic_parses_camel_case_json() {
        let json = r#"{"rhyme":"三七二十一，数数真容易","visualCue":"把7想象成一把镰刀","emojis":"🔢✨🎈"}"#;
        let m: Mnemonic = serde_json::from_str(json).unwrap();
        assert_eq!(m.visual_cue, "把7想象成一把镰刀");
        assert_eq!(m.emojis, "🔢✨🎈");
    }
}
