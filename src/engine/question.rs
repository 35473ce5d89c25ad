use crate::model::Fact;
use rand::Rng;

/// Draws both factors uniformly from 1..=9; `Fact::new` puts them in
/// recitation order (small × large).
pub fn random_fact<R: Rng>(rng: &mut R) -> Fact {
    let a = rng.gen_range(1..=9);
    let b = rng.gen_range(1..=9);
    Fact::new(a, b)
}
