mod lexer;
mod parser;

pub use self::lexer::Element;
pub use self::parser::{Headers, Pgn};

use crate::error::Result;
use std::fs;
use std::path::PathBuf;

pub fn parse_pgn_file(path: &PathBuf) -> Result<Pgn> {
    let content = fs::read_to_string(path)?;
    parser::parse(&content)
}

#[cfg(test)]
pub fn parse_pgn(content: &str) -> Result<Pgn> {
    parser::parse(content)
}
