use std::collections::HashMap;

use super::lexer::{self, Element};
use crate::error::{ConvertError, Result};

pub type Headers = HashMap<String, String>;

/// One parsed game: lower-cased headers plus the aggregated element
/// sequence, always terminated by `Element::End`.
#[derive(Debug)]
pub struct Pgn {
    pub headers: Headers,
    pub game: Vec<Element>,
}

pub fn parse(content: &str) -> Result<Pgn> {
    let (headers, movetext) = split_headers(content)?;
    let mut game = combine_moves(lexer::tokenize(&movetext)?);
    game.push(Element::End);
    Ok(Pgn { headers, game })
}

/// Consume the leading block of header lines. The first blank line ends the
/// headers; the rest of the content is the movetext body, returned unparsed.
fn split_headers(content: &str) -> Result<(Headers, String)> {
    let mut headers = Headers::new();
    let lines: Vec<&str> = content.split('\n').collect();

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            return Ok((headers, lines[index + 1..].join("\n")));
        }
        let (key, value) = lexer::header_line(line).ok_or_else(|| ConvertError::HeaderSyntax {
            line: line.to_string(),
        })?;
        headers.insert(key, value);
    }

    // headers ran to the end of the file: no movetext
    Ok((headers, String::new()))
}

/// Merge every run of consecutive `Move` elements into a single `Moves`
/// element, flushed where the run ends. Everything else passes through in
/// order.
fn combine_moves(raw: Vec<Element>) -> Vec<Element> {
    let mut game = Vec::with_capacity(raw.len());
    let mut run: Vec<String> = Vec::new();

    for element in raw {
        match element {
            Element::Move(text) => run.push(text),
            other => {
                if !run.is_empty() {
                    game.push(Element::Moves(run.join(" ")));
                    run.clear();
                }
                game.push(other);
            }
        }
    }
    if !run.is_empty() {
        game.push(Element::Moves(run.join(" ")));
    }

    game
}
