mod generator;
mod tex;

use self::generator::Generator;
use self::tex::TexWriter;
use crate::error::{ConvertError, Result};
use crate::reader::Pgn;

/// Render a parsed game as a complete xskak LaTeX document.
pub fn render(pgn: &Pgn) -> Result<String> {
    let mut tex = TexWriter::new();

    tex.preamble();
    tex.title(&make_title(pgn)?);
    if let Some(fen) = pgn.headers.get("fen") {
        tex.board_setup(fen);
        tex.diagram();
    }

    let mut generator = Generator::new(&pgn.game);
    generator.run(&mut tex)?;

    Ok(tex.finish())
}

fn make_title(pgn: &Pgn) -> Result<String> {
    let mut title = format!("{} - {}", surname(pgn, "white")?, surname(pgn, "black")?);
    if let (Some(site), Some(date)) = (pgn.headers.get("site"), pgn.headers.get("date")) {
        let year = date.split('.').next().unwrap_or("");
        title.push_str(&format!(" {} {}", site, year));
    }
    Ok(title)
}

fn surname(pgn: &Pgn, key: &'static str) -> Result<String> {
    let name = pgn
        .headers
        .get(key)
        .ok_or(ConvertError::MissingHeader { key })?;
    Ok(name.split(',').next().unwrap_or("").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_pgn;

    fn pgn_with_headers(pairs: &[(&str, &str)]) -> Pgn {
        Pgn {
            headers: pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            game: vec![crate::reader::Element::End],
        }
    }

    #[test]
    fn the_title_combines_surnames_site_and_year() {
        let pgn = pgn_with_headers(&[
            ("white", "Smith, John"),
            ("black", "Doe, Jane"),
            ("site", "London"),
            ("date", "2020.01.15"),
        ]);
        assert_eq!(make_title(&pgn).unwrap(), "Smith - Doe London 2020");
    }

    #[test]
    fn site_and_date_only_appear_together() {
        let pgn = pgn_with_headers(&[("white", "Smith"), ("black", "Doe"), ("site", "London")]);
        assert_eq!(make_title(&pgn).unwrap(), "Smith - Doe");
    }

    #[test]
    fn a_missing_player_header_is_an_error() {
        let err = make_title(&pgn_with_headers(&[("white", "Smith")])).unwrap_err();
        assert!(matches!(err, ConvertError::MissingHeader { key: "black" }));
    }

    #[test]
    fn a_fen_header_sets_up_the_board_and_draws_it() {
        let mut pgn = pgn_with_headers(&[("white", "Smith"), ("black", "Doe")]);
        pgn.headers.insert(
            "fen".to_string(),
            "8/8/8/8/8/8/8/K6k w - - 0 1".to_string(),
        );
        let out = render(&pgn).unwrap();
        assert!(out.contains(r"\fenboard{8/8/8/8/8/8/8/K6k w - - 0 1}"));
        assert!(out.contains(r"\chessboard"));
    }

    #[test]
    fn renders_a_whole_game_in_order() {
        let pgn = parse_pgn(
            "[White \"Smith, John\"]\n\
             [Black \"Doe, Jane\"]\n\
             [Result \"1-0\"]\n\
             \n\
             1. e4 e5 2. Nf3 {A solid reply.} 1-0\n",
        )
        .unwrap();
        let out = render(&pgn).unwrap();

        let landmarks = [
            "\\documentclass[a4paper]{article}",
            "\\section{Smith - Doe}",
            "\\mainline { 1. e4 e5 2. Nf3 }",
            "A solid reply.",
            "1-0",
            "\\end{document}",
        ];
        let mut last = 0;
        for landmark in landmarks {
            let at = out[last..]
                .find(landmark)
                .unwrap_or_else(|| panic!("missing or out of order: {}", landmark));
            last += at + landmark.len();
        }
    }
}
