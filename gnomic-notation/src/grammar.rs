//! nom grammar for genotype notation
//!
//! The parsers here only build a borrowed syntax tree. Resolving organism and
//! type aliases and building the annotation model happens in
//! [`crate::semantics`].

use gnomic_core::{GnomicError, GnomicResult};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alphanumeric1, char, one_of, space0, space1},
    combinator::{all_consuming, eof, map, opt, recognize, value, verify},
    error::{Error, ErrorKind},
    multi::{many1, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

/// Variant written as a `+` suffix
pub const WILD_TYPE: &str = "wild-type";
/// Variant written as a `-` suffix
pub const MUTANT: &str = "mutant";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessionNode<'a> {
    pub database: Option<&'a str>,
    pub identifier: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureNode<'a> {
    pub organism: Option<&'a str>,
    pub feature_type: Option<&'a str>,
    pub name: Option<&'a str>,
    pub accession: Option<AccessionNode<'a>>,
    pub variant: Option<Vec<&'a str>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlasmidNode<'a> {
    pub name: &'a str,
    pub members: Vec<AnnotationNode<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationNode<'a> {
    Feature(FeatureNode<'a>),
    Fusion(Vec<AnnotationNode<'a>>),
    Set(Vec<AnnotationNode<'a>>),
    Plasmid(PlasmidNode<'a>),
    AtLocus(Box<AnnotationNode<'a>>, FeatureNode<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeNode<'a> {
    Insertion(AnnotationNode<'a>),
    Deletion(AnnotationNode<'a>),
    Replacement {
        target: AnnotationNode<'a>,
        replacement: AnnotationNode<'a>,
        multiple: bool,
    },
    /// A bare plasmid: the plasmid is present
    Plasmid(PlasmidNode<'a>),
    /// A bare feature with a variant, e.g. `pheneA+`
    Phene(FeatureNode<'a>),
}

/// One change as written, together with its `::` markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub change: ChangeNode<'a>,
    pub markers: Vec<AnnotationNode<'a>>,
}

/// Parse a whole genotype into statements.
pub fn parse_statements(text: &str) -> GnomicResult<Vec<Statement<'_>>> {
    genotype(text)
        .map(|(_, statements)| statements)
        .map_err(|e| syntax_error(text, e))
}

/// Parse exactly one statement, surrounding whitespace allowed.
pub fn parse_statement(text: &str) -> GnomicResult<Statement<'_>> {
    all_consuming(delimited(space0, change, space0))(text)
        .map(|(_, statement)| statement)
        .map_err(|e| syntax_error(text, e))
}

/// Parse exactly one feature, surrounding whitespace allowed.
pub fn parse_feature_node(text: &str) -> GnomicResult<FeatureNode<'_>> {
    all_consuming(delimited(space0, feature, space0))(text)
        .map(|(_, feature)| feature)
        .map_err(|e| syntax_error(text, e))
}

pub fn is_valid(text: &str) -> bool {
    genotype(text).is_ok()
}

fn syntax_error(text: &str, err: nom::Err<Error<&str>>) -> GnomicError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let offset = text.len() - e.input.len();
            if e.input.is_empty() {
                GnomicError::syntax(offset, "unexpected end of input")
            } else {
                let near: String = e.input.chars().take(16).collect();
                GnomicError::syntax(offset, format!("unexpected input near {:?}", near))
            }
        }
        nom::Err::Incomplete(_) => GnomicError::syntax(text.len(), "incomplete input"),
    }
}

fn genotype(input: &str) -> IResult<&str, Vec<Statement<'_>>> {
    let (input, _) = space0(input)?;
    let (input, statements) = opt(separated_list1(list_sep, change))(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, statements.unwrap_or_default()))
}

fn list_sep(input: &str) -> IResult<&str, &str> {
    alt((recognize(delimited(space0, char(','), space0)), space1))(input)
}

fn change(input: &str) -> IResult<&str, Statement<'_>> {
    let (input, change) = alt((
        insertion,
        replacement,
        deletion,
        map(plasmid, ChangeNode::Plasmid),
        phene,
    ))(input)?;
    let (input, markers) = opt(markers)(input)?;
    Ok((
        input,
        Statement {
            change,
            markers: markers.unwrap_or_default(),
        },
    ))
}

fn insertion(input: &str) -> IResult<&str, ChangeNode<'_>> {
    map(
        preceded(char('+'), alt((map(plasmid, AnnotationNode::Plasmid), annotation))),
        ChangeNode::Insertion,
    )(input)
}

fn replacement(input: &str) -> IResult<&str, ChangeNode<'_>> {
    let (input, target) = alt((at_locus, annotation))(input)?;
    let (input, op) = alt((tag(">>"), tag(">")))(input)?;
    let (input, replacement) = alt((map(plasmid, AnnotationNode::Plasmid), annotation))(input)?;
    Ok((
        input,
        ChangeNode::Replacement {
            target,
            replacement,
            multiple: op == ">>",
        },
    ))
}

fn deletion(input: &str) -> IResult<&str, ChangeNode<'_>> {
    map(
        preceded(
            char('-'),
            alt((map(plasmid, AnnotationNode::Plasmid), at_locus, annotation)),
        ),
        ChangeNode::Deletion,
    )(input)
}

fn phene(input: &str) -> IResult<&str, ChangeNode<'_>> {
    map(verify(feature, |f: &FeatureNode| f.variant.is_some()), ChangeNode::Phene)(input)
}

fn markers(input: &str) -> IResult<&str, Vec<AnnotationNode<'_>>> {
    preceded(
        tag("::"),
        alt((map(feature, |f| vec![AnnotationNode::Feature(f)]), feature_set)),
    )(input)
}

fn at_locus(input: &str) -> IResult<&str, AnnotationNode<'_>> {
    let (input, annotation) = annotation(input)?;
    let (input, _) = one_of("@%")(input)?;
    let (input, locus) = feature(input)?;
    Ok((input, AnnotationNode::AtLocus(Box::new(annotation), locus)))
}

fn annotation(input: &str) -> IResult<&str, AnnotationNode<'_>> {
    alt((
        fusion,
        map(feature, AnnotationNode::Feature),
        map(feature_set, AnnotationNode::Set),
    ))(input)
}

fn fusion(input: &str) -> IResult<&str, AnnotationNode<'_>> {
    let (input, first) = fusion_part(input)?;
    let (input, rest) = many1(preceded(char(':'), fusion_part))(input)?;
    let mut members = vec![first];
    members.extend(rest);
    Ok((input, AnnotationNode::Fusion(members)))
}

fn fusion_part(input: &str) -> IResult<&str, AnnotationNode<'_>> {
    alt((
        map(feature_set, AnnotationNode::Set),
        map(feature, AnnotationNode::Feature),
    ))(input)
}

fn feature_fusion(input: &str) -> IResult<&str, AnnotationNode<'_>> {
    let (input, first) = feature(input)?;
    let (input, rest) = many1(preceded(char(':'), feature))(input)?;
    let members = std::iter::once(first)
        .chain(rest)
        .map(AnnotationNode::Feature)
        .collect();
    Ok((input, AnnotationNode::Fusion(members)))
}

fn member(input: &str) -> IResult<&str, AnnotationNode<'_>> {
    alt((feature_fusion, map(feature, AnnotationNode::Feature)))(input)
}

fn members(input: &str) -> IResult<&str, Vec<AnnotationNode<'_>>> {
    delimited(space0, separated_list1(list_sep, member), space0)(input)
}

fn feature_set(input: &str) -> IResult<&str, Vec<AnnotationNode<'_>>> {
    delimited(char('{'), members, char('}'))(input)
}

fn plasmid(input: &str) -> IResult<&str, PlasmidNode<'_>> {
    alt((bracketed_plasmid, legacy_plasmid))(input)
}

/// `(pA geneA geneB)`
fn bracketed_plasmid(input: &str) -> IResult<&str, PlasmidNode<'_>> {
    let (input, _) = char('(')(input)?;
    let (input, name) = identifier(input)?;
    let (input, members) = opt(preceded(space1, members))(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((
        input,
        PlasmidNode {
            name,
            members: members.unwrap_or_default(),
        },
    ))
}

/// `pA{geneA geneB}`
fn legacy_plasmid(input: &str) -> IResult<&str, PlasmidNode<'_>> {
    let (input, name) = identifier(input)?;
    let (input, _) = char('{')(input)?;
    let (input, members) = opt(members)(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char('}')(input)?;
    Ok((
        input,
        PlasmidNode {
            name,
            members: members.unwrap_or_default(),
        },
    ))
}

fn feature(input: &str) -> IResult<&str, FeatureNode<'_>> {
    alt((named_feature, accession_feature))(input)
}

fn named_feature(input: &str) -> IResult<&str, FeatureNode<'_>> {
    let (input, organism) = opt(organism)(input)?;
    let (input, feature_type) = opt(terminated(identifier, char('.')))(input)?;
    let (input, name) = identifier(input)?;
    let (input, accession) = opt(accession)(input)?;
    let (input, variant) = opt(variant)(input)?;
    Ok((
        input,
        FeatureNode {
            organism,
            feature_type,
            name: Some(name),
            accession,
            variant,
        },
    ))
}

fn accession_feature(input: &str) -> IResult<&str, FeatureNode<'_>> {
    let (input, accession) = accession(input)?;
    let (input, variant) = opt(variant)(input)?;
    Ok((
        input,
        FeatureNode {
            accession: Some(accession),
            variant,
            ..FeatureNode::default()
        },
    ))
}

/// `Ec/` or `E.coli/`
fn organism(input: &str) -> IResult<&str, &str> {
    terminated(
        recognize(pair(alphanumeric1, opt(pair(char('.'), alphanumeric1)))),
        char('/'),
    )(input)
}

fn accession(input: &str) -> IResult<&str, AccessionNode<'_>> {
    let (input, _) = char('#')(input)?;
    let (input, database) = opt(terminated(database, char(':')))(input)?;
    let (input, identifier) = identifier(input)?;
    Ok((
        input,
        AccessionNode {
            database,
            identifier,
        },
    ))
}

fn database(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
        |s: &str| s.len() >= 2 && !s[1..].contains('-'),
    )(input)
}

/// Alphanumeric words joined by `_` or `-`; never ends on a separator so
/// that a trailing `-` is left for the mutant suffix.
fn identifier(input: &str) -> IResult<&str, &str> {
    let (_, run) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(input)?;
    let trimmed = run.trim_end_matches(['_', '-']);
    if !trimmed.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::AlphaNumeric)));
    }
    Ok((&input[trimmed.len()..], trimmed))
}

fn variant(input: &str) -> IResult<&str, Vec<&str>> {
    alt((
        delimited(
            char('('),
            separated_list1(pair(one_of(",;"), space0), variant_item),
            char(')'),
        ),
        value(vec![WILD_TYPE], char('+')),
        value(vec![MUTANT], char('-')),
    ))(input)
}

/// A permissive variant token such as `c.[12C>T;13C>G]` or `key="a b"`.
///
/// Stops at whitespace, `,`, `;` or an unmatched closing bracket. Bracket
/// groups and quoted strings are kept whole, and `;[` continues an HGVS
/// allele list.
fn variant_item(input: &str) -> IResult<&str, &str> {
    let fail = || nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1));
    let mut depth = 0usize;
    let mut end = input.len();
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                let mut closed = false;
                while let Some((_, q)) = chars.next() {
                    match q {
                        '\\' => {
                            chars.next();
                        }
                        '"' => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(fail());
                }
            }
            '(' | '[' => depth += 1,
            ')' | ']' if depth > 0 => depth -= 1,
            ')' | ']' => {
                end = i;
                break;
            }
            ';' if depth == 0 && input[i + 1..].starts_with('[') => {}
            ',' | ';' if depth == 0 => {
                end = i;
                break;
            }
            c if c.is_whitespace() && depth == 0 => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    if depth > 0 || end == 0 {
        return Err(fail());
    }
    Ok((&input[end..], &input[..end]))
}
