//! The numeric PCN interchange format.
//!
//! A document is a whitespace-separated stream of decimal integers. Two
//! header values give the arity `N` and the term count `M`; each of the `M`
//! cube records then starts with its enumerated-variable count `k`, followed
//! by `k` signed indices. Indices are 1-based on disk: `3` puts `x2` in
//! positive polarity, `-3` puts it in negative polarity, unlisted variables
//! are don't cares.
//!
//! ```text
//! 3        <- N
//! 2        <- M
//! 2 1 2    <- x0 * x1
//! 1 -3     <- x2'
//! ```
//!
//! The grammar below only recognises the token stream; counts and indexing
//! are interpreted in code.

use crate::{Cube, CubeList, Factor, Literal, PcnError};
use pest::Parser;
use std::fmt::Write;

#[derive(Parser)]
#[grammar_inline = r#"
document   = _{ SOI ~ integer* ~ EOI }
integer    = @{ "-"? ~ ASCII_DIGIT+ }
WHITESPACE = _{ " " | "\t" | "\r" | "\n" }
"#]
struct PcnTokens;

/// Parse the text of a PCN document into a cube list.
///
/// Contradictory records (a variable listed in both polarities) produce a
/// zero term, which is dropped rather than stored.
pub fn parse_document(text: &str) -> Result<CubeList, PcnError> {
    let pairs =
        PcnTokens::parse(Rule::document, text).map_err(|_| PcnError::InvalidDocument)?;
    let mut tokens = pairs
        .filter(|pair| pair.as_rule() == Rule::integer)
        .map(|pair| pair.as_str().parse::<i64>());

    let arity = next_count(&mut tokens)?;
    let terms = next_count(&mut tokens)?;

    let mut sop = CubeList::new(arity);
    for _ in 0..terms {
        let enumerated = next_count(&mut tokens)?;
        let mut product = Cube::universe(arity);
        for _ in 0..enumerated {
            let index = next_token(&mut tokens)?;
            let position = index.unsigned_abs() as usize;
            if position == 0 || position > arity {
                return Err(PcnError::IndexRange { index, arity });
            }
            let lit = if index > 0 {
                Literal::positive(position - 1)
            } else {
                Literal::negative(position - 1)
            };
            product = product.and_literal(&lit);
        }
        sop.push_nonzero(product);
    }

    if tokens.next().is_some() {
        return Err(PcnError::TrailingData);
    }
    Ok(sop)
}

/// Render a cube list as a PCN document.
pub fn format_document(sop: &CubeList) -> String {
    let mut out = String::new();
    writeln!(out, "{}", sop.arity()).unwrap();
    writeln!(out, "{}", sop.len()).unwrap();
    for cube in sop {
        writeln!(out, "{}", cube_record(cube)).unwrap();
    }
    out
}

/// One line of a PCN document: the enumerated count, then signed 1-based indices.
fn cube_record(cube: &Cube) -> String {
    let mut record = cube.enumerated().to_string();
    for (idx, &factor) in cube.iter().enumerate() {
        if factor == Factor::POS {
            write!(record, " {}", idx + 1).unwrap();
        } else if factor == Factor::NEG {
            write!(record, " -{}", idx + 1).unwrap();
        }
    }
    record
}

fn next_token<I>(tokens: &mut I) -> Result<i64, PcnError>
where
    I: Iterator<Item = Result<i64, std::num::ParseIntError>>,
{
    tokens
        .next()
        .ok_or(PcnError::Truncated)?
        .map_err(|_| PcnError::InvalidDocument)
}

fn next_count<I>(tokens: &mut I) -> Result<usize, PcnError>
where
    I: Iterator<Item = Result<i64, std::num::ParseIntError>>,
{
    let value = next_token(tokens)?;
    usize::try_from(value).map_err(|_| PcnError::NegativeCount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_document() -> Result<(), PcnError> {
        let sop = parse_document("3\n2\n2 1 2\n1 -3\n")?;
        assert_eq!(sop.arity(), 3);
        assert_eq!(sop.len(), 2);
        assert!(sop.contains(&"01 01 11".parse()?));
        assert!(sop.contains(&"11 11 10".parse()?));
        Ok(())
    }

    #[test]
    fn indices_are_one_based() -> Result<(), PcnError> {
        let sop = parse_document("2 1 1 2")?;
        assert_eq!(sop.len(), 1);
        assert!(sop.contains(&"11 01".parse()?));
        Ok(())
    }

    #[test]
    fn contradictory_record_is_dropped() -> Result<(), PcnError> {
        let sop = parse_document("1\n1\n2 1 -1\n")?;
        assert!(sop.is_empty());
        assert_eq!(sop.arity(), 1);
        Ok(())
    }

    #[test]
    fn empty_record_is_the_universe() -> Result<(), PcnError> {
        let sop = parse_document("2\n1\n0\n")?;
        assert_eq!(sop.len(), 1);
        assert!(sop.first().unwrap().is_tautology());
        Ok(())
    }

    #[test]
    fn format_errors() {
        assert!(matches!(parse_document("3"), Err(PcnError::Truncated)));
        assert!(matches!(
            parse_document("3 1 2 1"),
            Err(PcnError::Truncated)
        ));
        assert!(matches!(
            parse_document("2 1 1 3"),
            Err(PcnError::IndexRange { index: 3, arity: 2 })
        ));
        assert!(matches!(
            parse_document("2 1 1 0"),
            Err(PcnError::IndexRange { index: 0, arity: 2 })
        ));
        assert!(matches!(
            parse_document("1 1 1 1 7"),
            Err(PcnError::TrailingData)
        ));
        assert!(matches!(
            parse_document("x y z"),
            Err(PcnError::InvalidDocument)
        ));
        assert!(matches!(
            parse_document("-1 0"),
            Err(PcnError::NegativeCount)
        ));
    }

    #[test]
    fn round_trip() -> Result<(), PcnError> {
        let text = "3\n2\n2 1 2\n1 -3\n";
        let sop = parse_document(text)?;
        assert_eq!(format_document(&sop), text);
        Ok(())
    }
}
