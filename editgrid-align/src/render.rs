use crate::cost_model::Symbol;
use crate::edits::EditSet;
use crate::engine::AlignmentEngine;
use std::fmt::{self, Display, Write};

/// Formats the cost and edit matrices as a fixed-width grid.
///
/// Each cell shows a substitution marker (`\`), an insertion marker (`<`) and
/// a deletion marker (`|`), followed by the right-aligned cost. Cells that
/// have not been computed show `--`. Cells are separated by `,` and every row
/// ends with `;`.
///
/// ```text
///             a     b
///
///       0,    1,    2;
/// a     1,\   0, <  1;
/// b     2,  | 1,\   0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixRenderer {
    cell_width: usize,
}

impl Default for MatrixRenderer {
    fn default() -> Self {
        Self { cell_width: 2 }
    }
}

impl MatrixRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum width of the numeric column. Wider numbers are not truncated.
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width.max(2);
        self
    }

    pub fn render<T: Symbol + Display>(&self, engine: &AlignmentEngine<T>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out, engine);
        out
    }

    pub fn write_grid<T, W>(&self, out: &mut W, engine: &AlignmentEngine<T>) -> fmt::Result
    where
        T: Symbol + Display,
        W: Write,
    {
        let width = self.cell_width;
        let matrix = engine.matrix();

        // Row label plus the boundary column line up with the header indent.
        write!(out, "{:indent$}", "", indent = 2 + 3 + width + 1)?;
        for symbol in engine.second() {
            write!(out, "{:>field$} ", symbol.to_string(), field = 3 + width)?;
        }
        writeln!(out)?;
        writeln!(out)?;

        for i in 0..matrix.rows() {
            if i > 0 {
                write!(out, "{} ", engine.first()[i - 1])?;
            } else {
                write!(out, "  ")?;
            }

            for j in 0..matrix.cols() {
                if j > 0 {
                    write!(out, ",")?;
                }
                let edits = matrix.edits(i, j);
                if edits.is_populated() {
                    write!(
                        out,
                        "{}{}{}{:>width$}",
                        substitution_marker(edits),
                        if edits.contains(EditSet::INSERTION) { '<' } else { ' ' },
                        if edits.contains(EditSet::DELETION) { '|' } else { ' ' },
                        matrix.cost(i, j),
                        width = width
                    )?;
                } else {
                    write!(out, "{:>field$}", "--", field = 3 + width)?;
                }
            }
            writeln!(out, ";")?;
        }
        Ok(())
    }
}

fn substitution_marker(edits: EditSet) -> char {
    if edits.contains(EditSet::SUBSTITUTION) {
        '\\'
    } else if edits.contains(EditSet::TRANSPOSITION) {
        'x'
    } else {
        ' '
    }
}

impl<T: Symbol + Display> Display for AlignmentEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixRenderer::default().write_grid(f, self)
    }
}
