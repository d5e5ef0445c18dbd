use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, tag_no_case, take_while1},
    character::complete::{char, digit1, hex_digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, value},
    multi::separated_list0,
    sequence::{delimited, preceded, separated_pair},
    Finish, IResult,
};

use crate::{engine::CHECK_INPUT, AlgorithmParameters, Crc16, Error, Result};

const DEFAULT_NAME: &str = "CRC-16/CUSTOM";

fn key(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Double-quoted string with `\"` and `\\` escapes
fn quoted(input: &str) -> IResult<&str, String> {
    let escaped = escaped_transform(
        is_not("\\\""),
        '\\',
        alt((value("\\", tag("\\")), value("\"", tag("\"")))),
    );
    delimited(
        char('"'),
        map(opt(escaped), Option::unwrap_or_default),
        char('"'),
    )(input)
}

fn bare(input: &str) -> IResult<&str, String> {
    map(is_not(" \t\r\n\""), str::to_owned)(input)
}

fn field(input: &str) -> IResult<&str, (&str, String)> {
    separated_pair(key, char('='), alt((quoted, bare)))(input)
}

fn fields(input: &str) -> IResult<&str, Vec<(&str, String)>> {
    delimited(
        multispace0,
        separated_list0(multispace1, field),
        multispace0,
    )(input)
}

/// Parse a `u16`, hexadecimal with a `0x` prefix or decimal
fn number(input: &str) -> IResult<&str, u16> {
    alt((
        map_res(
            preceded(alt((tag("0x"), tag("0X"))), hex_digit1),
            |digits: &str| u16::from_str_radix(digits, 16),
        ),
        map_res(digit1, |digits: &str| digits.parse::<u16>()),
    ))(input)
}

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, tag_no_case("true")),
        value(false, tag_no_case("false")),
    ))(input)
}

fn field_value<'a, T>(
    key: &str,
    raw: &'a str,
    parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Result<T> {
    all_consuming(parser)(raw)
        .finish()
        .map(|(_, value)| value)
        .map_err(|_| Error::Parse(format!("invalid value '{raw}' for '{key}'")))
}

/// Parse one algorithm description
///
/// Takes a CRC RevEng catalogue line such as
/// `width=16 poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000 check=0x31c3 residue=0x0000 name="CRC-16/XMODEM"`.
///
/// - `poly`, `init`, `refin`, `refout` and `xorout` are required
/// - `width` must be 16 when given
/// - `check` defaults to the checksum of `"123456789"` under the parsed parameters
/// - `residue` is accepted and ignored
/// - `name` defaults to `CRC-16/CUSTOM`
///
/// # Errors
///
/// [`Error::Parse`] for malformed input, unknown or repeated keys,
/// [`Error::UnsupportedWidth`] and [`Error::MissingField`] as named.
pub fn parameters(input: &str) -> Result<AlgorithmParameters> {
    let (_, fields) = all_consuming(fields)(input)
        .finish()
        .map_err(|e| Error::Parse(format!("unexpected input at '{}'", e.input)))?;

    let mut polynomial = None;
    let mut initial = None;
    let mut reflect_in = None;
    let mut reflect_out = None;
    let mut xor_out = None;
    let mut check = None;
    let mut name = None;
    let mut seen: Vec<&str> = Vec::with_capacity(fields.len());

    for (key, raw) in &fields {
        let (key, raw) = (*key, raw.as_str());
        if seen.contains(&key) {
            return Err(Error::Parse(format!("duplicate key '{key}'")));
        }
        seen.push(key);

        match key {
            "width" => {
                let width = field_value(key, raw, number)?;
                if width != 16 {
                    return Err(Error::UnsupportedWidth(width));
                }
            }
            "poly" => polynomial = Some(field_value(key, raw, number)?),
            "init" => initial = Some(field_value(key, raw, number)?),
            "refin" => reflect_in = Some(field_value(key, raw, boolean)?),
            "refout" => reflect_out = Some(field_value(key, raw, boolean)?),
            "xorout" => xor_out = Some(field_value(key, raw, number)?),
            "check" => check = Some(field_value(key, raw, number)?),
            "residue" => {
                field_value(key, raw, number)?;
            }
            "name" => name = Some(raw.to_owned()),
            _ => return Err(Error::Parse(format!("unknown key '{key}'"))),
        }
    }

    let polynomial = polynomial.ok_or(Error::MissingField("poly"))?;
    let initial = initial.ok_or(Error::MissingField("init"))?;
    let reflect_in = reflect_in.ok_or(Error::MissingField("refin"))?;
    let reflect_out = reflect_out.ok_or(Error::MissingField("refout"))?;
    let xor_out = xor_out.ok_or(Error::MissingField("xorout"))?;
    let name = name.unwrap_or_else(|| DEFAULT_NAME.to_owned());

    let check = match check {
        Some(check) => check,
        None => {
            let unchecked = AlgorithmParameters::with_name(
                name.clone(),
                polynomial,
                initial,
                reflect_in,
                reflect_out,
                xor_out,
                0,
            );
            Crc16::new(unchecked).checksum(CHECK_INPUT)
        }
    };

    Ok(AlgorithmParameters::with_name(
        name,
        polynomial,
        initial,
        reflect_in,
        reflect_out,
        xor_out,
        check,
    ))
}

/// Parse a list of algorithm descriptions, one per line
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parameters_list(input: &str) -> Result<Vec<AlgorithmParameters>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parameters)
        .collect()
}
