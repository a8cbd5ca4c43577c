use crate::error::{ConvertError, Result};
use lazy_static::lazy_static;
use nom::bytes::complete::is_not;
use nom::character::complete::{char, multispace1, space0};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::IResult;
use regex::Regex;

/// One token of the movetext, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A single ply or move-number token, before aggregation.
    Move(String),
    /// A run of consecutive plies joined into one mainline unit.
    Moves(String),
    Comment(String),
    StartVariation,
    EndVariation,
    Evaluation(String),
    Result(String),
    /// Sentinel appended after the last real element.
    End,
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Move(_) => "move",
            Element::Moves(_) => "moves",
            Element::Comment(_) => "comment",
            Element::StartVariation => "start-variation",
            Element::EndVariation => "end-variation",
            Element::Evaluation(_) => "evaluation",
            Element::Result(_) => "result",
            Element::End => "end",
        }
    }
}

fn header_tag(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        space0,
        delimited(
            char('['),
            separated_pair(
                is_not(" \""),
                multispace1,
                delimited(char('"'), is_not("\""), char('"')),
            ),
            char(']'),
        ),
    )(input)
}

/// Parse one `[Key "Value"]` header line. Keys are lower-cased.
pub fn header_line(line: &str) -> Option<(String, String)> {
    match header_tag(line) {
        Ok((_, (key, value))) => Some((key.to_lowercase(), value.to_string())),
        Err(_) => None,
    }
}

type Build = fn(String) -> Element;

fn start_variation(_: String) -> Element {
    Element::StartVariation
}

fn end_variation(_: String) -> Element {
    Element::EndVariation
}

lazy_static! {
    // First match wins, so evaluation symbols and results are tried before
    // the move fallback can swallow them.
    static ref MOVETEXT_RULES: [(Build, Regex); 5] = [
        (Element::Comment as Build, Regex::new(r"^\{([^}]*)\}").unwrap()),
        (start_variation, Regex::new(r"^\(").unwrap()),
        (end_variation, Regex::new(r"^\)").unwrap()),
        (Element::Evaluation, Regex::new(r"^([-+/=]{1,3})").unwrap()),
        (Element::Result, Regex::new(r"^(1-0|0-1|1/2-1/2)").unwrap()),
    ];
}

fn first_match(rest: &str) -> Option<(Build, usize, String)> {
    for (build, pattern) in MOVETEXT_RULES.iter() {
        if let Some(caps) = pattern.captures(rest) {
            let end = caps.get(0).map_or(0, |m| m.end());
            let text = caps.get(1).map_or(String::new(), |m| m.as_str().to_string());
            return Some((*build, end, text));
        }
    }
    None
}

/// Scan the movetext into a flat element sequence. Every iteration must
/// consume input, otherwise the scan stops with `MalformedMovetext`.
pub fn tokenize(movetext: &str) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    let mut rest = movetext;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let consumed = match first_match(rest) {
            Some((build, end, text)) => {
                elements.push(build(text));
                end
            }
            None => {
                // moves have no reliable prefix; anything the rules do not
                // claim is the next whitespace-delimited move token
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                elements.push(Element::Move(rest[..end].to_string()));
                end
            }
        };

        if consumed == 0 {
            return Err(ConvertError::MalformedMovetext {
                rest: rest.to_string(),
            });
        }
        rest = &rest[consumed..];
    }

    Ok(elements)
}
