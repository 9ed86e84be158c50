//! Recursive-descent grammar over `nom` primitives

use super::SyntaxError;
use crate::logic::{BinaryOp, Formula, FormulaKind, Sequent};
use nom::bytes::complete::tag;
use nom::character::complete::{char as token, multispace0, one_of};
use nom::error::{ErrorKind, ParseError};
use nom::IResult;
use std::rc::Rc;

/// Internal error: remembers how much input was left at the failure, so
/// the public error can report an absolute offset
#[derive(Debug)]
struct RawError {
    remaining: usize,
    message: String,
}

impl<'a> ParseError<&'a str> for RawError {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        RawError {
            remaining: input.len(),
            message: "unrecognized symbol".to_string(),
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type Parsed<'a, T> = IResult<&'a str, T, RawError>;

fn is_variable_letter(c: char) -> bool {
    c.is_alphabetic() && c != 'v' && c != 'V'
}

/// Whether the remaining input starts with a recognizable token (end of
/// input counts). Anything else is lexically invalid and reported as an
/// unrecognized symbol, wherever the parse happens to stand.
fn token_starts_here(input: &str) -> bool {
    if input.starts_with("->") || input.starts_with("=>") {
        return true;
    }
    match input.chars().next() {
        Some(c) => c.is_alphabetic() || matches!(c, '(' | ')' | '!' | '~' | '&' | '|' | ','),
        None => true,
    }
}

fn raw_error(input: &str, message: &str) -> RawError {
    RawError {
        remaining: input.len(),
        message: message.to_string(),
    }
}

fn classify(input: &str, message: &str) -> RawError {
    if token_starts_here(input) {
        raw_error(input, message)
    } else {
        raw_error(input, "unrecognized symbol")
    }
}

fn expected<'a, T>(input: &'a str, message: &str) -> Parsed<'a, T> {
    Err(nom::Err::Failure(classify(input, message)))
}

fn flatten(err: nom::Err<RawError>) -> RawError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => RawError {
            remaining: 0,
            message: "unexpected end of input".to_string(),
        },
    }
}

fn into_syntax_error(input: &str, raw: RawError) -> SyntaxError {
    SyntaxError {
        offset: input.len() - raw.remaining,
        message: raw.message,
    }
}

/// Unit = (Not, Unit) | Variable | '(' Node ')'
fn unit(input: &str) -> Parsed<'_, Rc<Formula>> {
    let (input, _) = multispace0::<_, RawError>(input)?;

    if let Ok((rest, _)) = one_of::<_, _, RawError>("!~")(input) {
        let (rest, inner) = unit(rest)?;
        return Ok((rest, Formula::not(inner)));
    }

    if let Ok((rest, _)) = token::<_, RawError>('(')(input) {
        let (rest, inner) = node(rest)?;
        let (rest, _) = multispace0::<_, RawError>(rest)?;
        return match token::<_, RawError>(')')(rest) {
            Ok((rest, _)) => Ok((rest, inner)),
            Err(_) => {
                if matches!(inner.kind(), FormulaKind::Binary(..)) {
                    expected(rest, "expected )")
                } else {
                    expected(rest, "expected ), |, &, or ->")
                }
            }
        };
    }

    match input.chars().next() {
        Some(c) if is_variable_letter(c) => {
            let rest = &input[c.len_utf8()..];
            if let Some(next) = rest.chars().next() {
                // an adjacent letter would make a multi-letter name; `Av`
                // falls under this as well, the Or spelling needs a space
                if next.is_alphabetic() {
                    return Err(nom::Err::Failure(raw_error(
                        rest,
                        "only one letter names are supported",
                    )));
                }
            }
            Ok((rest, Formula::literal(c)))
        }
        _ => expected(input, "expected !, (, or variable"),
    }
}

/// Consume a binary operator if one starts here
fn binary_operator(input: &str) -> Option<(&str, BinaryOp)> {
    if let Ok((rest, _)) = tag::<_, _, RawError>("->")(input) {
        return Some((rest, BinaryOp::Implies));
    }
    if let Ok((rest, _)) = token::<_, RawError>('&')(input) {
        return Some((rest, BinaryOp::And));
    }
    if let Ok((rest, _)) = one_of::<_, _, RawError>("|vV")(input) {
        return Some((rest, BinaryOp::Or));
    }
    None
}

/// Node = Unit | Unit (And | Or | Implies) Unit
fn node(input: &str) -> Parsed<'_, Rc<Formula>> {
    let (input, first) = unit(input)?;
    let (input, _) = multispace0::<_, RawError>(input)?;
    if let Some((rest, op)) = binary_operator(input) {
        let (rest, second) = unit(rest)?;
        Ok((rest, Formula::binary(op, first, second)))
    } else {
        Ok((input, first))
    }
}

/// Parse a whole input line as one formula
pub fn parse_formula(input: &str) -> Result<Rc<Formula>, SyntaxError> {
    parse_formula_raw(input).map_err(|raw| into_syntax_error(input, raw))
}

fn parse_formula_raw(input: &str) -> Result<Rc<Formula>, RawError> {
    let (rest, formula) = node(input).map_err(flatten)?;
    let (rest, _) = multispace0::<_, RawError>(rest).map_err(flatten)?;
    if rest.is_empty() {
        Ok(formula)
    } else {
        Err(classify(rest, "expected input to be over"))
    }
}

/// Parse a whole input line as a sequent `premises => outcomes`
pub fn parse_sequent(input: &str) -> Result<Sequent, SyntaxError> {
    parse_sequent_raw(input).map_err(|raw| into_syntax_error(input, raw))
}

fn parse_sequent_raw(input: &str) -> Result<Sequent, RawError> {
    let (rest, _) = multispace0::<_, RawError>(input).map_err(flatten)?;

    let mut premises = Vec::new();
    let mut rest = rest;
    if let Ok((after, _)) = tag::<_, _, RawError>("=>")(rest) {
        rest = after;
    } else {
        loop {
            let (after, formula) = node(rest).map_err(flatten)?;
            premises.push(formula);
            let (after, _) = multispace0::<_, RawError>(after).map_err(flatten)?;
            if let Ok((after, _)) = token::<_, RawError>(',')(after) {
                rest = after;
                continue;
            }
            if let Ok((after, _)) = tag::<_, _, RawError>("=>")(after) {
                rest = after;
                break;
            }
            return Err(classify(after, "expected , or =>"));
        }
    }

    let (mut rest, _) = multispace0::<_, RawError>(rest).map_err(flatten)?;
    let mut outcomes = Vec::new();
    if !rest.is_empty() {
        loop {
            let (after, formula) = node(rest).map_err(flatten)?;
            outcomes.push(formula);
            let (after, _) = multispace0::<_, RawError>(after).map_err(flatten)?;
            if let Ok((after, _)) = token::<_, RawError>(',')(after) {
                rest = after;
                continue;
            }
            if after.is_empty() {
                break;
            }
            return Err(classify(after, "expected input to be over"));
        }
    }

    Ok(Sequent::new(premises, outcomes))
}
