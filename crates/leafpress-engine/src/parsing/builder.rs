use relative_path::RelativePathBuf;

use crate::model::{Block, CalloutKind, HeadingLevel};

use super::{
    classify::{LineClass, LineKind},
    directive::Directive,
    entities::decode_entities,
    error::{ValidationError, ValidationReason},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Listing {
        language: Option<String>,
        lines: Vec<String>,
    },
    Callout {
        items: Vec<String>,
    },
}

/// Assembles classified lines into validated blocks.
///
/// Validation is not a separate pass: heading nesting is checked as headings
/// are emitted, and delimited blocks that never close surface as errors from
/// [`BlockBuilder::finish`]. Rejection is total — the builder never repairs.
pub struct BlockBuilder {
    leaf: LeafState,
    /// Heading levels emitted so far, indexed by depth - 1.
    seen_levels: [bool; 3],
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            seen_levels: [false; 3],
            out: vec![],
        }
    }

    pub fn push(&mut self, lc: &LineClass) -> Result<(), ValidationError> {
        if self.in_listing() {
            self.consume_listing_line(lc);
            return Ok(());
        }
        if self.in_callout() {
            return self.consume_callout_line(lc);
        }

        match &lc.kind {
            LineKind::Blank => {
                self.flush_paragraph();
                Ok(())
            }
            LineKind::Malformed => {
                self.flush_paragraph();
                Err(self.reject(ValidationReason::MalformedDirective {
                    line: lc.raw.clone(),
                }))
            }
            LineKind::Directive(d) => {
                self.flush_paragraph();
                self.open_or_emit(d, &lc.raw)
            }
            // Outside a callout a bullet line is ordinary prose.
            LineKind::Item { .. } | LineKind::Text => {
                self.extend_paragraph(&lc.raw);
                Ok(())
            }
        }
    }

    pub fn finish(mut self) -> Result<Vec<Block>, ValidationError> {
        // EOF closes paragraphs but never delimited blocks.
        self.flush_paragraph();
        match self.leaf {
            LeafState::Listing { .. } => Err(self.reject(ValidationReason::UnterminatedListing)),
            LeafState::Callout { .. } => Err(self.reject(ValidationReason::UnterminatedCallout)),
            _ => Ok(self.out),
        }
    }

    fn in_listing(&self) -> bool {
        matches!(self.leaf, LeafState::Listing { .. })
    }

    fn in_callout(&self) -> bool {
        matches!(self.leaf, LeafState::Callout { .. })
    }

    /// Error positioned at the index the current block occupies (or would
    /// occupy) in reading order.
    fn reject(&self, reason: ValidationReason) -> ValidationError {
        ValidationError::new(reason, self.out.len())
    }

    fn open_or_emit(&mut self, d: &Directive, raw: &str) -> Result<(), ValidationError> {
        if d.is_terminator {
            return Err(self.reject(ValidationReason::StrayTerminator {
                name: format!("/{}", d.name),
            }));
        }

        match d.name.as_str() {
            "h1" => self.emit_heading(HeadingLevel::H1, d, raw),
            "h2" => self.emit_heading(HeadingLevel::H2, d, raw),
            "h3" => self.emit_heading(HeadingLevel::H3, d, raw),
            "code" => {
                if !d.rest.is_empty() {
                    return Err(self.malformed(raw));
                }
                self.leaf = LeafState::Listing {
                    language: d.attr("language").map(str::to_string),
                    lines: vec![],
                };
                Ok(())
            }
            "remember" => {
                if !d.rest.is_empty() || d.has_attrs() {
                    return Err(self.malformed(raw));
                }
                self.leaf = LeafState::Callout { items: vec![] };
                Ok(())
            }
            "figure" => {
                let Some(reference) = d.attr("ref").filter(|r| !r.is_empty()) else {
                    return Err(self.malformed(raw));
                };
                self.out.push(Block::Figure {
                    caption: decode_entities(&d.rest),
                    reference: RelativePathBuf::from(reference),
                });
                Ok(())
            }
            name => Err(self.reject(ValidationReason::UnknownDirective {
                name: name.to_string(),
            })),
        }
    }

    fn emit_heading(
        &mut self,
        level: HeadingLevel,
        d: &Directive,
        raw: &str,
    ) -> Result<(), ValidationError> {
        if d.rest.is_empty() || d.has_attrs() {
            return Err(self.malformed(raw));
        }

        // Strict, non-skipping nesting: a heading deeper than level 1 needs
        // some earlier heading of strictly lower level.
        let depth = level.depth() as usize;
        if depth > 1 && !self.seen_levels[..depth - 1].iter().any(|&seen| seen) {
            return Err(self.reject(ValidationReason::HeadingSkipsLevel {
                level: level.depth(),
            }));
        }
        self.seen_levels[depth - 1] = true;

        self.out.push(Block::Heading {
            level,
            text: decode_entities(&d.rest),
        });
        Ok(())
    }

    fn consume_listing_line(&mut self, lc: &LineClass) {
        let LeafState::Listing { language, lines } = &mut self.leaf else {
            return;
        };

        // Only the exact terminator ends a listing; every other line is code,
        // whatever it classified as. Literal braces belong in entities.
        if lc.raw.trim_end() == "{/code}" {
            let code = decode_entities(&lines.join("\n"));
            let language = language.take();
            self.out.push(Block::CodeListing { code, language });
            self.leaf = LeafState::None;
        } else {
            lines.push(lc.raw.clone());
        }
    }

    fn consume_callout_line(&mut self, lc: &LineClass) -> Result<(), ValidationError> {
        let is_remember_terminator = matches!(
            &lc.kind,
            LineKind::Directive(d) if d.is_terminator && d.name == "remember"
        );
        if is_remember_terminator {
            let LeafState::Callout { items } = std::mem::replace(&mut self.leaf, LeafState::None)
            else {
                unreachable!("checked by caller");
            };
            if items.is_empty() {
                return Err(self.reject(ValidationReason::EmptyCallout));
            }
            self.out.push(Block::Callout {
                kind: CalloutKind::Remember,
                items,
            });
            return Ok(());
        }

        match &lc.kind {
            LineKind::Blank => Ok(()),
            LineKind::Item { text } => {
                let LeafState::Callout { items } = &mut self.leaf else {
                    unreachable!("checked by caller");
                };
                items.push(decode_entities(text));
                Ok(())
            }
            _ => Err(self.reject(ValidationReason::CalloutItemExpected {
                line: lc.raw.clone(),
            })),
        }
    }

    fn extend_paragraph(&mut self, line: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line.to_string()),
            _ => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.to_string()],
                };
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            self.out.push(Block::Paragraph {
                text: decode_entities(&lines.join(" ")),
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf
        }
    }

    fn malformed(&self, raw: &str) -> ValidationError {
        self.reject(ValidationReason::MalformedDirective {
            line: raw.to_string(),
        })
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
