//! Style value parsing.
//!
//! Built on `winnow` 0.7. Only lengths need a real grammar; colors, font
//! families and keywords are kept as written.

use crate::model::{Length, Unit};
use winnow::ascii::space0;
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a CSS length such as `100px`, `-20px`, `1.5em`, `50%` or `0`.
///
/// Surrounding whitespace is allowed; anything else after the unit rejects
/// the whole input.
pub fn parse_length(input: &str) -> Option<Length> {
    let mut rest = input;
    terminated(length, (space0, eof))
        .parse_next(&mut rest)
        .ok()
}

fn length(input: &mut &str) -> ModalResult<Length> {
    preceded(space0, (parse_number, parse_unit))
        .map(|(value, unit)| Length { value, unit })
        .parse_next(input)
}

fn parse_number(input: &mut &str) -> ModalResult<f32> {
    (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(0.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .try_map(str::parse::<f32>)
        .parse_next(input)
}

fn parse_unit(input: &mut &str) -> ModalResult<Unit> {
    opt(alt((
        "px".value(Unit::Px),
        "rem".value(Unit::Rem),
        "em".value(Unit::Em),
        "%".value(Unit::Percent),
        "pt".value(Unit::Pt),
        "vw".value(Unit::Vw),
        "vh".value(Unit::Vh),
    )))
    .map(|unit| unit.unwrap_or(Unit::None))
    .parse_next(input)
}
