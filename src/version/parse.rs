use super::Evr;

use nom::{
    character::complete::{char, digit1},
    combinator::{eof, opt},
    error::{Error, ErrorKind},
    sequence::{pair, preceded},
    IResult, InputTakeAtPosition,
};

/// Characters allowed in the version and release components.
fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '%' | '{' | '}' | '~')
}

fn version_chunk(i: &str) -> IResult<&str, &str> {
    i.split_at_position1_complete(|item| !is_version_char(item), ErrorKind::Char)
}

/// The `<digits>:` epoch prefix. The digit run must fit an u32; anything
/// larger is a hard parse failure, never a silent wrap or saturation.
fn epoch(i: &str) -> IResult<&str, u32> {
    let (rest, (digits, _)) = pair(digit1, char(':'))(i)?;
    match digits.parse::<u32>() {
        Ok(epoch) => Ok((rest, epoch)),
        Err(_) => Err(nom::Err::Failure(Error::new(i, ErrorKind::MapRes))),
    }
}

/// Parse an EVR string, `[epoch:]version[-release]`. The whole input must
/// be consumed; trailing garbage fails the parse.
pub fn parse_evr(i: &str) -> IResult<&str, Evr> {
    let (i, epoch) = opt(epoch)(i)?;
    let (i, version) = version_chunk(i)?;
    let (i, release) = opt(preceded(char('-'), version_chunk))(i)?;
    let (i, _) = eof(i)?;

    Ok((
        i,
        Evr {
            epoch,
            version: version.to_owned(),
            release: release.unwrap_or("").to_owned(),
        },
    ))
}
