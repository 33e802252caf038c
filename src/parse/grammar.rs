//! Recursive descent over the dice notation:
//!
//! ```text
//! roll      ::= xdice (";" xdice)*
//! xdice     ::= [count "x"] dice
//! dice      ::= die [bonus] dice_tail
//! dice_tail ::= "&" dice | <nothing>
//! die       ::= [count] "d" sides
//! ```

use super::{cursor::Cursor, DieTerm, RollExpression, MAX_DICE, MAX_EXPRESSIONS, MAX_TERMS};
use crate::error::ParseError;

type PResult<T> = Result<T, ParseError>;

pub(crate) fn parse_whole(notation: &str) -> PResult<Vec<RollExpression>> {
    // ASCII only, so positions line up with the caller's text
    let lowered = notation.to_ascii_lowercase();
    let mut cursor = Cursor::new(&lowered);

    let rolls = parse_roll(&mut cursor)?;

    if !cursor.is_exhausted() {
        return Err(ParseError::TrailingInput {
            position: cursor.offset(),
            found: cursor.remaining().to_string(),
        });
    }

    Ok(rolls)
}

fn parse_roll(cursor: &mut Cursor<'_>) -> PResult<Vec<RollExpression>> {
    let mut rolls = Vec::new();
    parse_xdice(cursor, &mut rolls)?;

    while cursor.try_consume_literal(";") {
        parse_xdice(cursor, &mut rolls)?;
    }

    Ok(rolls)
}

fn parse_xdice(cursor: &mut Cursor<'_>, rolls: &mut Vec<RollExpression>) -> PResult<()> {
    cursor.skip_whitespace();
    let saved = cursor.snapshot();
    let start = cursor.offset();

    let repeat = match cursor.read_unsigned_int() {
        Some(repeat) if cursor.try_consume_literal("x") => repeat as usize,
        // The number is the quantity of the die that follows
        Some(_) => {
            cursor.restore(saved);
            1
        }
        None => 1,
    };

    if repeat > MAX_EXPRESSIONS - rolls.len() {
        return Err(too_large(start, "expressions", MAX_EXPRESSIONS as u64));
    }

    let dice = parse_dice(cursor, 1)?;
    if dice.dice_count() > u64::from(MAX_DICE) {
        return Err(too_large(start, "dice in one expression", MAX_DICE.into()));
    }

    rolls.extend(std::iter::repeat(dice).take(repeat));
    Ok(())
}

/// `terms` counts the die terms of the current `&` chain, this one included.
fn parse_dice(cursor: &mut Cursor<'_>, terms: usize) -> PResult<RollExpression> {
    if terms > MAX_TERMS {
        cursor.skip_whitespace();
        return Err(too_large(cursor.offset(), "terms joined with '&'", MAX_TERMS as u64));
    }

    let die = parse_die(cursor)?;
    parse_dice_tail(cursor, die.into(), terms)
}

fn parse_dice_tail(
    cursor: &mut Cursor<'_>,
    left: RollExpression,
    terms: usize,
) -> PResult<RollExpression> {
    if !cursor.try_consume_literal("&") {
        return Ok(left);
    }

    let right = parse_dice(cursor, terms + 1)?;
    Ok(RollExpression::combine(left, right))
}

fn parse_die(cursor: &mut Cursor<'_>) -> PResult<DieTerm> {
    cursor.skip_whitespace();
    let start = cursor.offset();

    let count = cursor.read_unsigned_int().unwrap_or(1);
    if !cursor.try_consume_literal("d") {
        return Err(expected(cursor, "'d'"));
    }
    let sides = cursor
        .read_unsigned_int()
        .ok_or_else(|| expected(cursor, "number of sides"))?;
    let bonus = cursor.read_signed_int().unwrap_or(0);

    DieTerm::new(count, sides, bonus).map_err(|source| ParseError::InvalidTerm {
        position: start,
        source,
    })
}

fn too_large(position: usize, what: &'static str, limit: u64) -> ParseError {
    ParseError::TooLarge {
        position,
        what,
        limit,
    }
}

fn expected(cursor: &mut Cursor<'_>, expected: &'static str) -> ParseError {
    cursor.skip_whitespace();
    ParseError::Expected {
        position: cursor.offset(),
        expected,
    }
}
