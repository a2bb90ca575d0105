/// Parser for groupfile catalogs
///
/// A groupfile supplies generator sets as configuration instead of code:
///
/// ```text
/// # comment
/// group <name> <euclidean|spherical|hyperbolic> <depth>
///   matrix <16 floats, row-major>
/// endgroup
/// ```
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{multispace1, u32 as depth_value},
    combinator::{cut, value},
    multi::many0,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use nalgebra::Matrix4;

use crate::geometry::Geometry;
use crate::group::{GroupDef, MAX_PRIMARIES};

/// A groupfile that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupfileError {
    #[error("syntax error: {detail}")]
    Syntax { detail: String },

    #[error("group '{group}' has {count} matrices, between 1 and {MAX_PRIMARIES} are supported")]
    BadArity { group: String, count: usize },

    #[error("unparsed trailing input starting at: {at}")]
    TrailingInput { at: String },

    #[error("groupfile contains no groups")]
    Empty,
}

/// Parse a groupfile into group definitions, in file order.
pub fn parse_groupfile(input: &str) -> Result<Vec<GroupDef>, GroupfileError> {
    let (rest, defs) = match many0(parse_group)(input) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Err(GroupfileError::Syntax {
                detail: format!("{:?}", e),
            })
        }
    };

    let (rest, _) = sp(rest).unwrap_or((rest, ()));
    if !rest.is_empty() {
        return Err(GroupfileError::TrailingInput {
            at: rest.lines().next().unwrap_or(rest).to_string(),
        });
    }
    if defs.is_empty() {
        return Err(GroupfileError::Empty);
    }
    for def in &defs {
        if def.primaries.is_empty() || def.primaries.len() > MAX_PRIMARIES {
            return Err(GroupfileError::BadArity {
                group: def.name.clone(),
                count: def.primaries.len(),
            });
        }
    }

    Ok(defs)
}

/// Consume whitespace and `#` line comments (possibly none).
fn sp(input: &str) -> IResult<&str, ()> {
    let mut rest = input.trim_start();
    while let Some(comment) = rest.strip_prefix('#') {
        rest = match comment.find('\n') {
            Some(newline) => comment[newline + 1..].trim_start(),
            None => "",
        };
    }
    Ok((rest, ()))
}

fn group_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')(input)
}

fn geometry_word(input: &str) -> IResult<&str, Geometry> {
    alt((
        value(Geometry::Euclidean, tag("euclidean")),
        value(Geometry::Spherical, tag("spherical")),
        value(Geometry::Hyperbolic, tag("hyperbolic")),
    ))(input)
}

fn parse_matrix(input: &str) -> IResult<&str, Matrix4<f32>> {
    let (input, _) = preceded(sp, tag("matrix"))(input)?;

    // The keyword commits us to 16 entries
    let mut entries = [0.0f32; 16];
    let mut rest = input;
    for entry in entries.iter_mut() {
        let (after, v) = cut(preceded(multispace1, float))(rest)?;
        *entry = v;
        rest = after;
    }

    Ok((rest, Matrix4::from_row_slice(&entries)))
}

fn parse_group(input: &str) -> IResult<&str, GroupDef> {
    let (input, _) = preceded(sp, tag("group"))(input)?;
    let (input, name) = cut(preceded(multispace1, group_name))(input)?;
    let (input, geometry) = cut(preceded(multispace1, geometry_word))(input)?;
    let (input, max_depth) = cut(preceded(multispace1, depth_value))(input)?;
    let (input, primaries) = many0(parse_matrix)(input)?;
    let (input, _) = cut(preceded(sp, tag("endgroup")))(input)?;

    Ok((
        input,
        GroupDef::new(name.to_string(), geometry, max_depth, primaries),
    ))
}
