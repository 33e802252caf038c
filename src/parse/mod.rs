mod cursor;
mod grammar;

use crate::error::{InvalidTerm, ParseError};

/// Most dice a single expression, `&` combinations included, can roll.
pub const MAX_DICE: u32 = 10_000;
/// Most die terms that can be joined with `&` in one expression.
pub const MAX_TERMS: usize = 100;
/// Most expressions one notation can expand to, `{repeat}x` included.
pub const MAX_EXPRESSIONS: usize = 1_000;

/// `{count}d{sides}{bonus}`\
/// Roll `count` dice with `sides` faces each and add `bonus` to their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieTerm {
    pub(crate) count: u32,
    pub(crate) sides: u32,
    pub(crate) bonus: i32,
}

/// A parsed dice formula. Immutable, so it can be rolled as many times as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollExpression {
    Term(DieTerm),
    /// `{left} & {right}`\
    /// Both sides are rolled independently and their results added together.
    Combination(Box<RollExpression>, Box<RollExpression>),
}

impl DieTerm {
    /// Creates a new die term.
    /// A term needs between one and [`MAX_DICE`] dice and every die needs at least two sides,
    /// values outside of that are rejected instead of clamped.
    pub fn new(count: u32, sides: u32, bonus: i32) -> Result<Self, InvalidTerm> {
        if count == 0 {
            return Err(InvalidTerm::NoDice);
        }
        if count > MAX_DICE {
            return Err(InvalidTerm::TooManyDice {
                count,
                limit: MAX_DICE,
            });
        }
        if sides <= 1 {
            return Err(InvalidTerm::TooFewSides(sides));
        }

        Ok(Self {
            count,
            sides,
            bonus,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }
    pub fn sides(&self) -> u32 {
        self.sides
    }
    pub fn bonus(&self) -> i32 {
        self.bonus
    }
}

impl RollExpression {
    /// Parses `;` separated expressions, `{repeat}x` prefixes are expanded in place.
    pub fn parse(notation: &str) -> Result<Vec<RollExpression>, ParseError> {
        grammar::parse_whole(notation)
    }

    pub fn combine(left: RollExpression, right: RollExpression) -> Self {
        RollExpression::Combination(Box::new(left), Box::new(right))
    }

    /// Leaf terms from left to right, the same order their dice are rolled in.
    pub fn terms(&self) -> Vec<&DieTerm> {
        let mut terms = Vec::new();
        self.collect_terms(&mut terms);
        terms
    }

    fn collect_terms<'a>(&'a self, terms: &mut Vec<&'a DieTerm>) {
        match self {
            RollExpression::Term(term) => terms.push(term),
            RollExpression::Combination(left, right) => {
                left.collect_terms(terms);
                right.collect_terms(terms);
            }
        }
    }

    /// Number of dice a single roll of this expression throws.
    pub fn dice_count(&self) -> u64 {
        self.terms().iter().map(|t| u64::from(t.count)).sum()
    }
}

impl From<DieTerm> for RollExpression {
    fn from(term: DieTerm) -> Self {
        RollExpression::Term(term)
    }
}

impl std::fmt::Display for DieTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}{}", self.count, self.sides, signed_suffix(self.bonus.into()))
    }
}

impl std::fmt::Display for RollExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollExpression::Term(term) => write!(f, "{term}"),
            RollExpression::Combination(left, right) => write!(f, "{left} & {right}"),
        }
    }
}

// Zero is left out, negative numbers already carry their sign
pub(crate) fn signed_suffix(value: i64) -> String {
    match value {
        0 => String::new(),
        v if v > 0 => format!("+{v}"),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{DieTerm, RollExpression, MAX_DICE};
    use crate::error::InvalidTerm;

    fn term(count: u32, sides: u32, bonus: i32) -> RollExpression {
        DieTerm::new(count, sides, bonus).unwrap().into()
    }

    #[test]
    fn test_new_rejects_zero_dice() {
        assert_eq!(DieTerm::new(0, 6, 0), Err(InvalidTerm::NoDice));
    }

    #[test]
    fn test_new_rejects_too_many_dice() {
        assert!(DieTerm::new(MAX_DICE, 6, 0).is_ok());
        assert_eq!(
            DieTerm::new(u32::MAX, 6, 0),
            Err(InvalidTerm::TooManyDice {
                count: u32::MAX,
                limit: MAX_DICE
            })
        );
    }

    #[test]
    fn test_new_rejects_one_sided_die() {
        assert_eq!(DieTerm::new(2, 1, 0), Err(InvalidTerm::TooFewSides(1)));
        assert_eq!(DieTerm::new(2, 0, 0), Err(InvalidTerm::TooFewSides(0)));
    }

    #[test]
    fn test_display_term() {
        #[rustfmt::skip]
        let inputs = [
            (term(1, 6, 0), "1d6"),
            (term(4, 6, 3), "4d6+3"),
            (term(8, 12, -15), "8d12-15"),
        ];

        for (expression, expected) in inputs {
            assert_eq!(expression.to_string(), expected);
        }
    }

    #[test]
    fn test_display_combination() {
        let expression = RollExpression::combine(
            term(9, 10, 0),
            RollExpression::combine(term(3, 6, 0), term(4, 12, 17)),
        );
        assert_eq!(expression.to_string(), "9d10 & 3d6 & 4d12+17");
    }

    #[test]
    fn test_terms_order_and_dice_count() {
        let expression = RollExpression::combine(
            term(12, 10, 5),
            RollExpression::combine(term(4, 6, 2), term(1, 20, 0)),
        );
        let sides: Vec<_> = expression.terms().iter().map(|t| t.sides()).collect();
        assert_eq!(sides, vec![10, 6, 20]);
        assert_eq!(expression.dice_count(), 17);
    }

    proptest! {
        #[test]
        fn test_display_parse_round_trip(count in 1u32..=1000, sides in 2u32..=1000, bonus in any::<i32>()) {
            let expression = term(count, sides, bonus);
            let parsed = RollExpression::parse(&expression.to_string()).unwrap();

            prop_assert_eq!(parsed, vec![expression]);
        }
    }
}
