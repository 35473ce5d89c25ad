use crate::model::Fact;

/// Digit glyphs 0–9 for the recitation.
const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

fn digit(n: u32) -> char {
    DIGITS[n as usize]
}

/// Renders the traditional 九九乘法表 phrase for a fact.
///
/// Prefix is both factor glyphs; the suffix follows the table's recitation
/// rules rather than literal number composition:
/// - products below 10 take 得 (一一得一);
/// - exactly 10 is 一十 (二五一十);
/// - teens drop the leading 一 (三四十二, never 三四一十二) — irregular but
///   canonical, do not "repair" it;
/// - 20 and up spell tens 十 units, units omitted when zero (四五二十,
///   三七二十一).
///
/// Only defined for facts out of [`random_fact`](crate::engine::random_fact);
/// factors outside 1..=9 are a caller bug.
pub fn kou_jue(fact: &Fact) -> String {
    let mut phrase = String::new();
    phrase.push(digit(fact.factor_a));
    phrase.push(digit(fact.factor_b));

    let p = fact.product;
    if p < 10 {
        phrase.push('得');
        phrase.push(digit(p));
    } else if p == 10 {
        phrase.push_str("一十");
    } else if p < 20 {
        phrase.push('十');
        phrase.push(digit(p % 10));
    } else {
        phrase.push(digit(p / 10));
        phrase.push('十');
        if p % 10 != 0 {
            phrase.push(digit(p % 10));
        }
    }
    phrase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(a: u32, b: u32) -> String {
        kou_jue(&Fact::new(a, b))
    }

    #[test]
    fn single_digit_products_use_de() {
        assert_eq!(phrase(1, 1), "一一得一");
        assert_eq!(phrase(2, 4), "二四得八");
        assert_eq!(phrase(3, 3), "三三得九");
    }

    #[test]
    fn exactly_ten_is_yi_shi() {
        assert_eq!(phrase(2, 5), "二五一十");
    }

    #[test]
    fn teens_drop_the_leading_one() {
        assert_eq!(phrase(3, 4), "三四十二");
        assert_eq!(phrase(2, 9), "二九十八");
        assert_eq!(phrase(2, 6), "二六十二");
    }

    #[test]
    fn round_tens_omit_the_units_glyph() {
        assert_eq!(phrase(4, 5), "四五二十");
        assert_eq!(phrase(5, 6), "五六三十");
        assert_eq!(phrase(5, 8), "五八四十");
    }

    #[test]
    fn twenty_and_up_spell_tens_and_units() {
        assert_eq!(phrase(3, 7), "三七二十一");
        assert_eq!(phrase(6, 9), "六九五十四");
        assert_eq!(phrase(9, 9), "九九八十一");
    }

    #[test]
    fn total_over_the_whole_table() {
        for a in 1..=9 {
            for b in a..=9 {
                let p = phrase(a, b);
                assert!(!p.is_empty());
                // Every phrase opens with both factor glyphs.
                let mut chars = p.chars();
                assert_eq!(chars.next(), Some(DIGITS[a as usize]));
                assert_eq!(chars.next(), Some(DIGITS[b as usize]));
            }
        }
    }
}
