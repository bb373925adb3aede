//! Line-oriented surface for non-interactive output.

use std::io::Write;

use super::Surface;
use crate::error::VizResult;

/// Writes one line per redraw, highlighted values wrapped in `*`.
///
/// A redraw identical to the previous one writes nothing, so repeated
/// renders of the same state leave the output unchanged.
#[derive(Debug)]
pub struct TextSurface<W: Write> {
    out: W,
    frames: bool,
    last: Option<(Vec<i64>, Vec<usize>)>,
}

impl<W: Write> TextSurface<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames: true,
            last: None,
        }
    }

    /// Wrap a writer but draw nothing; callers still write through
    /// [`writer_mut`](Self::writer_mut).
    pub fn narration_only(out: W) -> Self {
        Self {
            frames: false,
            ..Self::new(out)
        }
    }

    /// The underlying writer, for interleaving other output.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Format a sequence the way [`Surface::render`] prints it.
    #[must_use]
    pub fn format_line(sequence: &[i64], highlights: &[usize]) -> String {
        let cells: Vec<String> = sequence
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if highlights.contains(&i) {
                    format!("*{v}*")
                } else {
                    v.to_string()
                }
            })
            .collect();
        format!("[ {} ]", cells.join(" "))
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()> {
        let unchanged = self
            .last
            .as_ref()
            .is_some_and(|(s, h)| s.as_slice() == sequence && h.as_slice() == highlights);
        if unchanged || !self.frames {
            return Ok(());
        }
        writeln!(self.out, "    {}", Self::format_line(sequence, highlights))?;
        self.last = Some((sequence.to_vec(), highlights.to_vec()));
        Ok(())
    }

    fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()> {
        if !self.frames {
            return Ok(());
        }
        writeln!(self.out, "    swap {from} <-> {to}")?;
        self.out.flush()?;
        Ok(())
    }
}
