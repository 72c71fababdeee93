//! Text rendering of an alignment beneath its source sentence.

use crate::alignment::Alignment;
use crate::token::Sentence;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Renders alignments under the source sentence, one line per aligned
/// source token, labelled with the target tokens it is aligned to.
///
/// ```text
/// Four  men  died  in  an  accident  .
/// ╰──╯1:4
///       ╰─╯2:people
/// ```
pub struct AlignmentDisplay<'a> {
    source: &'a Sentence,
    target: &'a Sentence,
    pairs: Vec<Alignment>,
}

impl<'a> AlignmentDisplay<'a> {
    pub fn new(source: &'a Sentence, target: &'a Sentence, pairs: &[Alignment]) -> Self {
        Self {
            source,
            target,
            pairs: pairs.to_vec(),
        }
    }
}

impl<'a> fmt::Display for AlignmentDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut starts = Vec::with_capacity(self.source.len());
        let mut ends = Vec::with_capacity(self.source.len());

        let mut opening_line = String::new();
        for (n, token) in self.source.tokens().iter().enumerate() {
            if n > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.surface);
            ends.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        let mut by_source: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for &(source, target) in &self.pairs {
            by_source.entry(source).or_default().push(target);
        }

        for (source, mut targets) in by_source {
            let Some(position) = source.checked_sub(1).filter(|&p| p < starts.len()) else {
                continue;
            };
            targets.sort_unstable();
            f.write_char('\n')?;

            let start = starts[position];
            let end = ends[position];
            for _ in 0..start {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in (start + 1)..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end - start > 1 {
                f.write_char('╯')?;
            }

            for (n, target) in targets.iter().enumerate() {
                if n > 0 {
                    f.write_char(' ')?;
                }
                let surface = self
                    .target
                    .token(*target)
                    .map_or("?", |token| token.surface.as_str());
                write!(f, "{}:{}", target, surface)?;
            }
        }
        Ok(())
    }
}
