//! Markdown to scorable prose.
//!
//! Readability formulas only see sentences, so a markdown document is reduced
//! to the blocks a reader reads as prose: paragraphs, list items, block
//! quotes and footnotes. Code, headings, tables, images and metadata blocks
//! are dropped. Each prose block becomes its own sentence on its own line,
//! ending in a period when it has no terminal punctuation of its own, so a
//! bullet list scores as short sentences instead of one run-on.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Punctuation that already ends a sentence.
const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Closing marks that may follow a terminator.
const CLOSERS: [char; 4] = ['\'', '"', ')', ']'];

/// Reduce markdown to prose, one sentence-terminated block per line.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
        | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS;

    let mut prose = ProseBlocks::default();
    for event in Parser::new_ext(text, options) {
        prose.push(event);
    }
    prose.finish()
}

/// Accumulates prose text block by block.
#[derive(Default)]
struct ProseBlocks {
    out: String,
    block: String,
    /// Depth of open elements whose text is not prose.
    hidden: usize,
}

impl ProseBlocks {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(ref tag) if is_hidden(tag) => self.hidden += 1,
            Event::End(end) if is_hidden_end(end) => {
                self.hidden = self.hidden.saturating_sub(1);
            }
            _ if self.hidden > 0 => {}
            Event::Text(text) => self.block.push_str(&text),
            Event::SoftBreak | Event::HardBreak => self.block.push(' '),
            // a new item closes the text of its parent in tight lists
            Event::Start(Tag::Item) | Event::End(TagEnd::Paragraph | TagEnd::Item) => {
                self.end_block();
            }
            _ => {}
        }
    }

    fn end_block(&mut self) {
        let sentence = self.block.trim();
        if !sentence.is_empty() {
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            self.out.push_str(sentence);
            if !sentence.trim_end_matches(CLOSERS).ends_with(TERMINATORS) {
                self.out.push('.');
            }
        }
        self.block.clear();
    }

    fn finish(mut self) -> String {
        self.end_block();
        self.out
    }
}

fn is_hidden(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::CodeBlock(_)
            | Tag::Heading { .. }
            | Tag::Table(_)
            | Tag::Image { .. }
            | Tag::MetadataBlock(_)
    )
}

fn is_hidden_end(end: TagEnd) -> bool {
    matches!(
        end,
        TagEnd::CodeBlock
            | TagEnd::Heading(_)
            | TagEnd::Table
            | TagEnd::Image
            | TagEnd::MetadataBlock(_)
    )
}
