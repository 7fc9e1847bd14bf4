//! Paj Ajap numerals
//!
//! Numbers are arithmetic expressions over five atoms (`oza`=0, `naj`=1,
//! `neþ`=3, `nwo`=6, `þon`=10) joined by three operators (`a` add, `w`
//! subtract, `ф` multiply). Magnitude comes from multiplication chains of
//! `þon`, not from digit position:
//!
//! ```text
//! 7     nwo a naj
//! 30    neþ ф þon
//! 1000  þon ф þon ф þon
//! 2000  þon ф þon ф þon a þon ф þon ф þon
//! ```
//!
//! An expression is a sum of signed terms, each term a product of atoms.
//! Multiplication binds tighter than addition and subtraction, and there is
//! no grouping, so a multiplier that is itself a sum (2 = `naj a naj`) is
//! distributed over the place value instead of being written in front of it.

pub const ZERO: &str = "oza";
pub const ONE: &str = "naj";
pub const THREE: &str = "neþ";
pub const SIX: &str = "nwo";
pub const TEN: &str = "þon";

pub const ADD: &str = "a";
pub const SUBTRACT: &str = "w";
pub const MULTIPLY: &str = "ф";

/// Place divisors and the number of `þon` factors that spell each one
const PLACES: [(u128, usize); 3] = [(1000, 3), (100, 2), (10, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

/// A signed product of atom values
#[derive(Debug, Clone, PartialEq, Eq)]
struct Term {
    sign: Sign,
    factors: Vec<u64>,
}

impl Term {
    fn plus(factors: Vec<u64>) -> Self {
        Self {
            sign: Sign::Plus,
            factors,
        }
    }

    fn minus(factors: Vec<u64>) -> Self {
        Self {
            sign: Sign::Minus,
            factors,
        }
    }
}

fn atom_token(value: u64) -> &'static str {
    match value {
        1 => ONE,
        3 => THREE,
        6 => SIX,
        10 => TEN,
        _ => ZERO,
    }
}

/// Value of a non-zero atom token
fn atom_value(token: &str) -> Option<i64> {
    match token {
        ONE => Some(1),
        THREE => Some(3),
        SIX => Some(6),
        TEN => Some(10),
        _ => None,
    }
}

/// Fixed spellings of 1..=10
fn small_terms(n: u128) -> Vec<Term> {
    match n {
        1 => vec![Term::plus(vec![1])],
        2 => vec![Term::plus(vec![1]), Term::plus(vec![1])],
        3 => vec![Term::plus(vec![3])],
        4 => vec![Term::plus(vec![6]), Term::minus(vec![1]), Term::minus(vec![1])],
        5 => vec![Term::plus(vec![6]), Term::minus(vec![1])],
        6 => vec![Term::plus(vec![6])],
        7 => vec![Term::plus(vec![6]), Term::plus(vec![1])],
        8 => vec![Term::plus(vec![6]), Term::plus(vec![1]), Term::plus(vec![1])],
        9 => vec![Term::plus(vec![10]), Term::minus(vec![1])],
        10 => vec![Term::plus(vec![10])],
        _ => Vec::new(),
    }
}

/// Terms spelling `n` (n >= 1); the first term is always positive
fn terms(n: u128) -> Vec<Term> {
    if n <= 10 {
        return small_terms(n);
    }

    let mut rest = n;
    let mut out = Vec::new();
    for (divisor, width) in PLACES {
        let quotient = rest / divisor;
        rest %= divisor;
        match quotient {
            0 => {}
            1 => out.push(Term::plus(vec![10; width])),
            _ => {
                for term in terms(quotient) {
                    // naj ф þon is just þon
                    let mut factors = if term.factors == [1] {
                        Vec::new()
                    } else {
                        term.factors
                    };
                    factors.extend(std::iter::repeat_n(10, width));
                    out.push(Term {
                        sign: term.sign,
                        factors,
                    });
                }
            }
        }
    }
    if rest > 0 {
        out.extend(small_terms(rest));
    }
    out
}

fn render(terms: &[Term]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(match term.sign {
                Sign::Plus => ADD,
                Sign::Minus => SUBTRACT,
            });
            out.push(' ');
        }
        let factors: Vec<&str> = term.factors.iter().map(|&f| atom_token(f)).collect();
        out.push_str(&factors.join(&format!(" {} ", MULTIPLY)));
    }
    out
}

/// Spell a non-negative integer in Paj Ajap
///
/// Returns `None` for negative numbers.
///
/// # Example
///
/// ```ignore
/// assert_eq!(to_paj_ajap(7).as_deref(), Some("nwo a naj"));
/// assert_eq!(to_paj_ajap(-1), None);
/// ```
pub fn to_paj_ajap(n: i64) -> Option<String> {
    u128::try_from(n).ok().map(to_paj_ajap_unsigned)
}

/// Spell any unsigned integer in Paj Ajap
pub fn to_paj_ajap_unsigned(n: u128) -> String {
    let terms = terms(n);
    if terms.is_empty() {
        return ZERO.to_string();
    }
    render(&terms)
}

/// Evaluate a Paj Ajap numeral expression
///
/// Returns `None` for empty input, unknown tokens and results that overflow
/// `i64`. The result may be negative (`naj w nwo` is -5). A group with no
/// atoms is an empty product (1) and no groups at all sum to 0, so `a` is 0
/// and `ф` is 1.
pub fn from_paj_ajap(text: &str) -> Option<i64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    if tokens == [ZERO] {
        return Some(0);
    }

    let mut groups: Vec<(Sign, Vec<&str>)> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut sign = Sign::Plus;
    for token in tokens {
        let next_sign = match token {
            ADD => Sign::Plus,
            SUBTRACT => Sign::Minus,
            _ => {
                current.push(token);
                continue;
            }
        };
        if !current.is_empty() {
            groups.push((sign, std::mem::take(&mut current)));
        }
        sign = next_sign;
    }
    if !current.is_empty() {
        groups.push((sign, current));
    }

    let mut total: i64 = 0;
    for (sign, group) in groups {
        let mut product: i64 = 1;
        for token in group {
            if token == MULTIPLY {
                continue;
            }
            product = product.checked_mul(atom_value(token)?)?;
        }
        total = match sign {
            Sign::Plus => total.checked_add(product)?,
            Sign::Minus => total.checked_sub(product)?,
        };
    }
    Some(total)
}

/// True if every token is a numeral atom or operator
///
/// Checked before [`from_paj_ajap`] so that ordinary sentences containing a
/// word like `a` or `oza` are not read as numbers.
pub fn is_numeral_text(text: &str) -> bool {
    let mut tokens = text.split_whitespace().peekable();
    tokens.peek().is_some()
        && tokens.all(|token| {
            matches!(
                token,
                ZERO | ONE | THREE | SIX | TEN | ADD | SUBTRACT | MULTIPLY
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        let expected = [
            "oza",
            "naj",
            "naj a naj",
            "neþ",
            "nwo w naj w naj",
            "nwo w naj",
            "nwo",
            "nwo a naj",
            "nwo a naj a naj",
            "þon w naj",
            "þon",
        ];
        for (n, text) in expected.iter().enumerate() {
            assert_eq!(to_paj_ajap(n as i64).as_deref(), Some(*text), "n = {}", n);
        }
    }

    #[test]
    fn test_seven_round_trip() {
        let text = to_paj_ajap(7).unwrap();
        assert_eq!(text, format!("{} {} {}", SIX, ADD, ONE));
        assert_eq!(from_paj_ajap(&text), Some(7));
    }

    #[test]
    fn test_negative_is_rejected() {
        assert_eq!(to_paj_ajap(-1), None);
        assert_eq!(to_paj_ajap(i64::MIN), None);
    }

    #[test]
    fn test_place_values() {
        assert_eq!(to_paj_ajap(11).as_deref(), Some("þon a naj"));
        assert_eq!(to_paj_ajap(30).as_deref(), Some("neþ ф þon"));
        assert_eq!(to_paj_ajap(100).as_deref(), Some("þon ф þon"));
        assert_eq!(to_paj_ajap(1000).as_deref(), Some("þon ф þon ф þon"));
        assert_eq!(to_paj_ajap(600).as_deref(), Some("nwo ф þon ф þon"));
        assert_eq!(to_paj_ajap(110).as_deref(), Some("þon ф þon a þon"));
    }

    #[test]
    fn test_compound_multiplier_is_distributed() {
        assert_eq!(to_paj_ajap(20).as_deref(), Some("þon a þon"));
        assert_eq!(
            to_paj_ajap(40).as_deref(),
            Some("nwo ф þon w þon w þon")
        );
        assert_eq!(
            to_paj_ajap(2000).as_deref(),
            Some("þon ф þon ф þon a þon ф þon ф þon")
        );
        assert_eq!(from_paj_ajap("nwo ф þon w þon w þon"), Some(40));
    }

    #[test]
    fn test_round_trip_up_to_ten_thousand() {
        for n in 0..=10_000 {
            let text = to_paj_ajap(n).unwrap();
            assert_eq!(from_paj_ajap(&text), Some(n), "{} -> {}", n, text);
            assert!(is_numeral_text(&text), "{} -> {}", n, text);
        }
    }

    #[test]
    fn test_spell_beyond_i64() {
        let n = u128::from(u64::MAX) + 1;
        let text = to_paj_ajap_unsigned(n);
        assert!(is_numeral_text(&text));
        // too large to read back as i64
        assert_eq!(from_paj_ajap(&text), None);
        assert_eq!(to_paj_ajap_unsigned(0), ZERO);
        assert_eq!(to_paj_ajap_unsigned(7), "nwo a naj");
    }

    #[test]
    fn test_round_trip_large_numbers() {
        for n in [10_001, 12_345, 20_000, 99_999, 123_456, 1_000_000, 987_654_321] {
            let text = to_paj_ajap(n).unwrap();
            assert_eq!(from_paj_ajap(&text), Some(n), "{} -> {}", n, text);
        }
    }

    #[test]
    fn test_never_multiplies_by_one() {
        for n in 0..=10_000 {
            let text = to_paj_ajap(n).unwrap();
            let tokens: Vec<&str> = text.split_whitespace().collect();
            for pair in tokens.windows(2) {
                assert_ne!(pair, [ONE, MULTIPLY], "{} -> {}", n, text);
                assert_ne!(pair, [MULTIPLY, ONE], "{} -> {}", n, text);
            }
        }
    }

    #[test]
    fn test_decode_examples() {
        assert_eq!(from_paj_ajap("oza"), Some(0));
        assert_eq!(from_paj_ajap("  nwo   a naj "), Some(7));
        assert_eq!(from_paj_ajap("neþ ф neþ"), Some(9));
        assert_eq!(from_paj_ajap("naj w nwo"), Some(-5));
        assert_eq!(from_paj_ajap("w naj"), Some(-1));
        assert_eq!(from_paj_ajap("naj a a naj"), Some(2));
    }

    #[test]
    fn test_decode_failures() {
        assert_eq!(from_paj_ajap(""), None);
        assert_eq!(from_paj_ajap("   "), None);
        assert_eq!(from_paj_ajap("nwo a kson"), None);
        assert_eq!(from_paj_ajap("oza a naj"), None);
    }

    #[test]
    fn test_decode_groups_without_atoms() {
        assert_eq!(from_paj_ajap("a"), Some(0));
        assert_eq!(from_paj_ajap("a w"), Some(0));
        assert_eq!(from_paj_ajap("ф"), Some(1));
        assert_eq!(from_paj_ajap("naj a ф"), Some(2));
        assert_eq!(from_paj_ajap("w ф"), Some(-1));
    }

    #[test]
    fn test_decode_overflow_fails() {
        let huge = vec![TEN; 40].join(" ф ");
        assert_eq!(from_paj_ajap(&huge), None);
    }

    #[test]
    fn test_is_numeral_text() {
        assert!(is_numeral_text("nwo a naj"));
        assert!(is_numeral_text("oza"));
        assert!(is_numeral_text("a"));
        assert!(!is_numeral_text(""));
        assert!(!is_numeral_text("je es фok"));
        assert!(!is_numeral_text("nwo a kson"));
    }
}
