use rand::Rng;
use rand::seq::SliceRandom;

/// One correct answer plus three distractors.
pub const OPTION_COUNT: usize = 4;

/// Random-offset attempts before the deterministic top-up kicks in.
const FALLBACK_ATTEMPTS: usize = 64;

/// Builds the four answer choices for `product`, shuffled.
///
/// Distractors are drawn from the same tens decade as the product, so the
/// child has to look at the units digit instead of ballparking. If the
/// decade pool ever runs dry (it holds 8 positive candidates even for
/// single-digit products, but the guarantee must not depend on that), a
/// random ±offset search fills the rest, with a deterministic sweep behind
/// it so the routine is bounded.
pub fn generate_options<R: Rng>(product: u32, rng: &mut R) -> Vec<u32> {
    debug_assert!((1..=81).contains(&product));

    let decade_start = product / 10 * 10;
    let mut pool: Vec<u32> = (decade_start..=decade_start + 9)
        .filter(|&v| v != product && v > 0)
        .collect();
    pool.shuffle(rng);

    let mut options = vec![product];
    while options.len() < OPTION_COUNT {
        match pool.pop() {
            Some(v) => options.push(v),
            None => break,
        }
    }

    // Offset fallback for sparse decades.
    for _ in 0..FALLBACK_ATTEMPTS {
        if options.len() == OPTION_COUNT {
            break;
        }
        let offset = rng.gen_range(1..=10);
        let candidate = if rng.gen_bool(0.5) {
            product + offset
        } else {
            product.saturating_sub(offset)
        };
        if candidate > 0 && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    // Deterministic top-up keeps the whole routine bounded. Not expected to
    // run; the offset loop has far more candidates than misses for any
    // product >= 1.
    let mut candidate = product + 1;
    while options.len() < OPTION_COUNT {
        if !options.contains(&candidate) {
            options.push(candidate);
        }
        candidate += 1;
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn check(options: &[u32], product: u32) {
        assert_eq!(options.len(), OPTION_COUNT);
        let unique: HashSet<u32> = options.iter().copied().collect();
        assert_eq!(unique.len(), OPTION_COUNT, "duplicates for {product}: {options:?}");
        assert!(options.iter().all(|&v| v > 0), "non-positive option for {product}");
        assert_eq!(
            options.iter().filter(|&&v| v == product).count(),
            1,
            "product missing for {product}: {options:?}"
        );
    }

    #[test]
    fn four_unique_positive_options_for_every_product() {
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for product in 1..=81 {
                let options = generate_options(product, &mut rng);
                check(&options, product);
            }
        }
    }

    #[test]
    fn single_digit_products_fill_from_the_zero_decade() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            for product in 1..=9 {
                let options = generate_options(product, &mut rng);
                check(&options, product);
            }
        }
    }

    #[test]
    fn large_products_stay_in_their_decade() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let options = generate_options(72, &mut rng);
            check(&options, 72);
            assert!(options.iter().all(|&v| (70..=79).contains(&v)));
        }
    }
}
