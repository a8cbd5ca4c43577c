use crate::error::{ConvertError, Result};

const WRAP_COLUMN: usize = 78;

/// Accumulates the xskak document. Every line is word-wrapped at
/// `WRAP_COLUMN`; the variation stack tracks the chessgame ids xskak needs
/// to resume a parent line.
pub struct TexWriter {
    buf: String,
    variation_counter: u32,
    variation_stack: Vec<String>,
}

impl TexWriter {
    pub fn new() -> Self {
        TexWriter {
            buf: String::new(),
            variation_counter: 0,
            variation_stack: Vec::new(),
        }
    }

    pub fn line(&mut self, text: &str) {
        for wrapped in wrap(text, WRAP_COLUMN) {
            self.buf.push_str(&wrapped);
            self.buf.push('\n');
        }
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn paragraph(&mut self, text: &str) {
        self.blank();
        self.line(text);
        self.blank();
    }

    pub fn preamble(&mut self) {
        self.line(r"\documentclass[a4paper]{article}");
        self.line(r"\usepackage{xskak}");
        self.line(r"\setlength{\parskip}{1em}");
        self.line(r"\begin{document}");
        self.blank();
        self.line(r"\newchessgame[id=main]");
    }

    pub fn title(&mut self, title: &str) {
        self.line(&format!(r"\section{{{}}}", title));
    }

    pub fn board_setup(&mut self, fen: &str) {
        self.line(&format!(r"\fenboard{{{}}}", fen));
    }

    pub fn diagram(&mut self) {
        self.paragraph(r"\chessboard");
    }

    pub fn mainline(&mut self, moves: &str) {
        self.line(&format!(r"\mainline {{ {} }}", moves));
    }

    fn current_variation(&self) -> &str {
        self.variation_stack
            .last()
            .map(String::as_str)
            .unwrap_or("main")
    }

    pub fn start_variation(&mut self) {
        let id = format!("var{}", self.variation_counter);
        self.variation_counter += 1;
        self.line(&format!(
            r"\newchessgame[newvar={}, id={}]",
            self.current_variation(),
            id
        ));
        self.variation_stack.push(id);
    }

    pub fn end_variation(&mut self) -> Result<()> {
        if self.variation_stack.pop().is_none() {
            return Err(ConvertError::UnbalancedVariation);
        }
        self.line(&format!(r"\resumechessgame[id={}]", self.current_variation()));
        if self.variation_stack.is_empty() {
            self.blank();
        }
        Ok(())
    }

    pub fn finish(mut self) -> String {
        self.blank();
        self.line(r"\end{document}");
        self.buf
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap("a short line", WRAP_COLUMN), vec!["a short line"]);
        assert_eq!(wrap("", WRAP_COLUMN), vec![""]);
    }

    #[test]
    fn long_lines_fold_at_word_boundaries() {
        let text = "word ".repeat(40);
        let lines = wrap(text.trim_end(), WRAP_COLUMN);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= WRAP_COLUMN);
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn long_mainlines_wrap_in_the_document() {
        let mut tex = TexWriter::new();
        tex.mainline(&"1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 ".repeat(5));
        let out = tex.finish();
        assert!(out.lines().count() > 2);
        assert!(out.lines().all(|line| line.len() <= WRAP_COLUMN));
    }

    #[test]
    fn variation_ids_grow_from_the_current_context() {
        let mut tex = TexWriter::new();
        tex.start_variation();
        tex.start_variation();
        tex.end_variation().unwrap();
        tex.end_variation().unwrap();
        let out = tex.finish();

        assert!(out.contains(r"\newchessgame[newvar=main, id=var0]"));
        assert!(out.contains(r"\newchessgame[newvar=var0, id=var1]"));
        assert!(out.contains(r"\resumechessgame[id=var0]"));
        assert!(out.contains(r"\resumechessgame[id=main]"));
    }

    #[test]
    fn closing_the_last_variation_breaks_the_paragraph() {
        let mut tex = TexWriter::new();
        tex.start_variation();
        tex.end_variation().unwrap();
        assert!(tex.buf.ends_with("\\resumechessgame[id=main]\n\n"));
    }

    #[test]
    fn closing_with_no_open_variation_fails() {
        let mut tex = TexWriter::new();
        assert!(matches!(
            tex.end_variation(),
            Err(ConvertError::UnbalancedVariation)
        ));
    }

    #[test]
    fn preamble_and_closing_frame_the_document() {
        let mut tex = TexWriter::new();
        tex.preamble();
        let out = tex.finish();
        assert!(out.starts_with("\\documentclass[a4paper]{article}\n\\usepackage{xskak}\n"));
        assert!(out.contains("\\begin{document}\n\n\\newchessgame[id=main]\n"));
        assert!(out.ends_with("\n\\end{document}\n"));
    }
}
