//! Line-oriented `name,votes_a,votes_b,seats` records.
//!
//! Blank lines and `#` comments are skipped, a leading header line is allowed,
//! and names containing commas can be double-quoted.

use super::{FormatError, Result};
use crate::model::StateResult;
use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, preceded, tuple},
    IResult,
};
use std::str::FromStr;

fn quoted_name(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), is_not("\""), char('"'))(input)
}

fn bare_name(input: &str) -> IResult<&str, &str> {
    map(is_not(",\""), str::trim_end)(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    delimited(space0, alt((quoted_name, bare_name)), space0)(input)
}

fn number<T: FromStr>(input: &str) -> IResult<&str, T> {
    delimited(space0, map_res(digit1, |digits: &str| digits.parse::<T>()), space0)(input)
}

type Record<'a> = (&'a str, u64, u64, u32);

fn record(input: &str) -> IResult<&str, Record<'_>> {
    all_consuming(tuple((
        name,
        preceded(char(','), number::<u64>),
        preceded(char(','), number::<u64>),
        preceded(char(','), number::<u32>),
    )))(input)
}

fn is_header(line: &str) -> bool {
    let first = line.split(',').next().unwrap_or_default().trim();
    first.eq_ignore_ascii_case("name") || first.eq_ignore_ascii_case("state")
}

pub fn parse_text(input: &str) -> Result<Vec<StateResult>> {
    let mut results = Vec::new();
    let mut header_allowed = true;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let first_record = header_allowed;
        header_allowed = false;

        match record(line) {
            Ok((_, (name, votes_a, votes_b, seats))) => {
                let result = StateResult::new(name, votes_a, votes_b, seats).map_err(|e| {
                    FormatError::Line {
                        line: index + 1,
                        message: e.to_string(),
                    }
                })?;
                results.push(result);
            }
            Err(_) if first_record && is_header(line) => continue,
            Err(_) => {
                return Err(FormatError::Line {
                    line: index + 1,
                    message: format!("expected `name,votes_a,votes_b,seats`, got {:?}", line),
                })
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_with_header_and_comments() {
        let input = "\
# provisional numbers
name, votes_a, votes_b, seats

California, 1000, 900, 32
\"Washington, D.C.\",10,90,3
New York,  5 ,  7,29
";
        let results = parse_text(input).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], StateResult::new("California", 1000, 900, 32).unwrap());
        assert_eq!(results[1].name.as_str(), "Washington, D.C.");
        assert_eq!(results[2].name.as_str(), "New York");
        assert_eq!(results[2].votes_a, 5);
        assert_eq!(results[2].seats, 29);
    }

    #[test]
    fn zero_seats_and_ties_still_parse() {
        let results = parse_text("Texas,300,300,0").unwrap();
        assert_eq!(results[0].seats, 0);
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_text("California,1000,900,32\nOhio,800,twelve,33\n").unwrap_err();
        match err {
            FormatError::Line { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn header_is_only_allowed_first() {
        assert!(parse_text("Ohio,1,2,3\nname,votes_a,votes_b,seats\n").is_err());
    }

    #[test]
    fn empty_names_are_rejected() {
        assert!(parse_text(",1,2,3").is_err());
        assert!(parse_text("\"\",1,2,3").is_err());
    }

    #[test]
    fn unstorable_vote_counts_are_rejected() {
        let err = parse_text("California,1000,900,32\nBig,18446744073709551615,0,5\n").unwrap_err();
        assert!(matches!(err, FormatError::Line { line: 2, .. }));
    }

    #[test]
    fn seat_overflow_is_rejected() {
        assert!(parse_text("Ohio,1,2,99999999999").is_err());
    }
}
