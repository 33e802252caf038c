use rand::{thread_rng, Rng};

use super::roll::RollResult;
use crate::parse::{DieTerm, RollExpression};

impl DieTerm {
    /// Rolls every die of the term with the rng specified.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RollResult {
        let mut result = RollResult::with_modifier(self.bonus.into(), self.count as usize);

        for _ in 0..self.count {
            result.push(rng.gen_range(1..=self.sides));
        }

        result
    }
}

impl RollExpression {
    /// Roll the expression.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self) -> RollResult {
        self.roll_with(&mut thread_rng())
    }

    /// Roll the expression with the rng specified.
    /// The left side of a combination is always rolled before the right side.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RollResult {
        match self {
            RollExpression::Term(term) => term.roll_with(rng),
            RollExpression::Combination(left, right) => {
                let left = left.roll_with(rng);
                left.merge(right.roll_with(rng))
            }
        }
    }
}
