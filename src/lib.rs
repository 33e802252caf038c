//! Parse dice notation and roll it.
//!
//! ```rust
//! # use dice_notation::{parse, roll, roll_with, DieTerm, RollExpression};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Roll 4 d6 and add 3, then roll 8 d12 and subtract 15.
//! for rolled in roll("4d6+3 ; 8d12-15")? {
//!     println!("{rolled}"); // 17  <= [6, 2, 1, 5]+3
//! }
//!
//! // `&` adds expressions together, `{n}x` repeats one.
//! let expressions = parse("2x 12d10+5 & 4d6+2")?;
//! assert_eq!(expressions.len(), 2);
//! assert_eq!(expressions[0].to_string(), "12d10+5 & 4d6+2");
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with("3d20", &mut rng)?;
//! assert_eq!(rolled[0].rolls().len(), 3);
//!
//! // Create a die term directly without parsing
//! let expression = RollExpression::from(DieTerm::new(5, 8, -2)?);
//! let rolled = expression.roll_with(&mut rng);
//! assert_eq!(rolled.total(), rolled.modifier() + rolled.rolls().iter().map(|&r| i64::from(r)).sum::<i64>());
//! # Ok(())
//! # }
//! ```

mod error;
mod evaluate;
mod parse;

pub use error::{InvalidTerm, ParseError};
pub use evaluate::roll::RollResult;
pub use parse::{DieTerm, RollExpression, MAX_DICE, MAX_EXPRESSIONS, MAX_TERMS};

/// Parses the notation returning every expression in it without rolling the dice.
pub fn parse(notation: &str) -> Result<Vec<RollExpression>, ParseError> {
    RollExpression::parse(notation)
}

/// Rolls an already parsed expression with the rng specified.
pub fn evaluate(expression: &RollExpression, rng: &mut impl rand::Rng) -> RollResult {
    expression.roll_with(rng)
}

/// Parses the notation returning the result of rolling every expression in it.
pub fn roll(notation: &str) -> Result<Vec<RollResult>, ParseError> {
    roll_with(notation, &mut rand::thread_rng())
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<Vec<RollResult>, ParseError> {
    let expressions = RollExpression::parse(notation)?;
    Ok(expressions
        .iter()
        .map(|expression| expression.roll_with(rng))
        .collect())
}
