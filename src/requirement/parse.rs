use super::{DepOrdering, DepRequirement};
use crate::version::parse_evr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::space0,
    combinator::value,
    error::context,
    IResult,
};

/// Comparison operator. The two-character operators must be tried before
/// their one-character prefixes, or `>=` would parse as `>` with a
/// dangling `=`.
fn dep_ordering(i: &str) -> IResult<&str, DepOrdering> {
    alt((
        value(DepOrdering::GreaterOrEqual, tag(">=")),
        value(DepOrdering::LessOrEqual, tag("<=")),
        value(DepOrdering::Equal, tag("=")),
        value(DepOrdering::Less, tag("<")),
        value(DepOrdering::Greater, tag(">")),
    ))(i)
}

/// `name op evr`, consuming the whole input.
fn constrained(i: &str) -> IResult<&str, DepRequirement> {
    let (i, name) = take_till(|c| c == ' ')(i)?;
    let (i, _) = space0(i)?;
    let (i, ordering) = context("parsing compare literal", dep_ordering)(i)?;
    let (i, _) = space0(i)?;
    let (i, evr) = context("parsing version in requirement", parse_evr)(i)?;

    Ok((
        i,
        DepRequirement {
            name: name.to_owned(),
            constraint: Some((ordering, evr)),
        },
    ))
}

/// Parse a dependency requirement: a name, optionally followed by a
/// comparison operator and an EVR bound.
///
/// Never fails. Requirement strings in the wild carry all sorts of
/// malformed version expressions, so any error after the name turns the
/// entire input into a constraint-less name instead.
pub fn parse_dep_requirement(i: &str) -> IResult<&str, DepRequirement> {
    match constrained(i) {
        Ok(res) => Ok(res),
        Err(_) => Ok((
            "",
            DepRequirement {
                name: i.to_owned(),
                constraint: None,
            },
        )),
    }
}
