use super::tex::TexWriter;
use crate::error::{ConvertError, Result};
use crate::reader::Element;

/// Walks the aggregated element sequence and drives the TeX writer. The
/// cursor only moves forward; the comment rule is the one step that may
/// consume two elements.
pub struct Generator<'a> {
    elements: &'a [Element],
    cursor: usize,
}

impl<'a> Generator<'a> {
    pub fn new(elements: &'a [Element]) -> Self {
        Generator {
            elements,
            cursor: 0,
        }
    }

    fn next_element(&mut self) -> Option<&'a Element> {
        let element = self.elements.get(self.cursor);
        self.cursor += 1;
        element
    }

    fn peek(&self) -> Option<&'a Element> {
        self.elements.get(self.cursor)
    }

    pub fn run(&mut self, tex: &mut TexWriter) -> Result<()> {
        while let Some(element) = self.next_element() {
            match element {
                Element::Moves(text) => tex.mainline(text),
                Element::Comment(text) => self.comment(tex, text)?,
                Element::Evaluation(text) => tex.line(text),
                Element::Result(text) => tex.paragraph(text),
                Element::StartVariation => {
                    tex.line("(");
                    tex.start_variation();
                }
                Element::EndVariation => {
                    tex.line(")");
                    tex.end_variation()?;
                }
                Element::End => break,
                Element::Move(_) => {
                    return Err(ConvertError::UnknownElement {
                        kind: element.kind(),
                    })
                }
            }
        }
        Ok(())
    }

    fn comment(&mut self, tex: &mut TexWriter, text: &str) -> Result<()> {
        // A comment that is the last element of a variation would leave the
        // ")" dangling after its text; emit the delimiter now and do the
        // pop/resume once the comment is out.
        let closes_variation = matches!(self.peek(), Some(Element::EndVariation));
        if closes_variation {
            tex.line(")");
            self.cursor += 1;
        }

        // lower-case comments continue the preceding line
        let inline = text.chars().next().map_or(false, char::is_lowercase);
        if inline {
            tex.line(text);
        } else {
            let text = match text.strip_prefix("(D)") {
                Some(after_marker) => {
                    tex.diagram();
                    after_marker.trim()
                }
                None => text,
            };
            tex.blank();
            for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
                tex.line(line);
            }
            tex.blank();
        }

        if closes_variation {
            tex.end_variation()?;
            tex.blank();
        }
        Ok(())
    }
}
