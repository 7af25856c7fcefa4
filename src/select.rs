//! Linear paths through a grid: rows, columns, walks along two sides
//! meeting at a corner, and diagonals.

use crate::BlendBundle;

/// A path through a grid.  Rows are indexed from the top and columns
/// from the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Row(usize),
    RowReverse(usize),
    Column(usize),
    ColumnReverse(usize),
    /// Left side bottom to top, then top side left to right.
    CornerTopLeft,
    /// Top side left to right, then right side top to bottom.
    CornerTopRight,
    /// Bottom side right to left, then left side bottom to top.
    CornerBottomLeft,
    /// Right side top to bottom, then bottom side right to left.
    CornerBottomRight,
    /// Main diagonal from the top-left corner.
    DiagonalTopLeft,
    /// Anti-diagonal from the top-right corner.
    DiagonalTopRight,
    /// Anti-diagonal from the bottom-left corner.
    DiagonalBottomLeft,
    /// Main diagonal from the bottom-right corner.
    DiagonalBottomRight,
}

impl Selection {
    /// Stable name of the selection, stored as the `op` of a
    /// [`BlendBundle`].
    pub fn operation(&self) -> &'static str {
        use Selection::*;
        match self {
            Row(_) => "row",
            RowReverse(_) => "row-reverse",
            Column(_) => "column",
            ColumnReverse(_) => "column-reverse",
            CornerTopLeft => "corner-tl",
            CornerTopRight => "corner-tr",
            CornerBottomLeft => "corner-bl",
            CornerBottomRight => "corner-br",
            DiagonalTopLeft => "diagonal-tl",
            DiagonalTopRight => "diagonal-tr",
            DiagonalBottomLeft => "diagonal-bl",
            DiagonalBottomRight => "diagonal-br",
        }
    }

    /// `(row, column)` positions visited in a `height × width` grid.
    fn path(&self, height: usize, width: usize) -> Vec<(usize, usize)> {
        use Selection::*;
        let (bottom, right) = (height - 1, width - 1);
        let row = |y: usize| (0 .. width).map(move |x| (y, x));
        let col = |x: usize| (0 .. height).map(move |y| (y, x));
        let diagonal = |p: fn(usize, usize) -> (usize, usize)| -> Vec<(usize, usize)> {
            assert_eq!(height, width, "diagonal of a non-square {height}×{width} grid");
            (0 .. width).map(|i| p(i, right)).collect()
        };
        match *self {
            Row(y) => { assert!(y < height, "row {y} of {height}"); row(y).collect() }
            RowReverse(y) => { assert!(y < height, "row {y} of {height}"); row(y).rev().collect() }
            Column(x) => { assert!(x < width, "column {x} of {width}"); col(x).collect() }
            ColumnReverse(x) => {
                assert!(x < width, "column {x} of {width}");
                col(x).rev().collect()
            }
            CornerTopLeft => col(0).rev().chain(row(0).skip(1)).collect(),
            CornerTopRight => row(0).chain(col(right).skip(1)).collect(),
            CornerBottomLeft => row(bottom).rev().chain(col(0).rev().skip(1)).collect(),
            CornerBottomRight => col(right).chain(row(bottom).rev().skip(1)).collect(),
            DiagonalTopLeft => diagonal(|i, _| (i, i)),
            DiagonalTopRight => diagonal(|i, last| (i, last - i)),
            DiagonalBottomLeft => diagonal(|i, last| (last - i, i)),
            DiagonalBottomRight => diagonal(|i, last| (last - i, last - i)),
        }
    }

    /// The cells of `grid` along the selection.
    ///
    /// # Panics
    ///
    /// If `grid` is empty or not rectangular, if a row or column index
    /// is out of range, or for a diagonal of a non-square grid.
    ///
    /// ```
    /// use palette_blend::Selection;
    /// let grid = vec![vec![1, 2], vec![3, 4]];
    /// assert_eq!(Selection::CornerTopLeft.extract(&grid), vec![3, 1, 2]);
    /// assert_eq!(Selection::DiagonalTopRight.extract(&grid), vec![2, 3]);
    /// ```
    pub fn extract<T: Clone>(&self, grid: &[Vec<T>]) -> Vec<T> {
        assert!(!grid.is_empty() && !grid[0].is_empty(), "empty grid");
        let width = grid[0].len();
        assert!(grid.iter().all(|r| r.len() == width), "ragged grid");
        self.path(grid.len(), width).into_iter()
            .map(|(y, x)| grid[y][x].clone())
            .collect()
    }
}

/// Palette text with one color per line; the first line carries
/// `bundle` as a comment.
pub fn to_palette_text(colors: &[String], bundle: Option<&BlendBundle>) -> String {
    colors.iter().enumerate()
        .map(|(i, c)| match bundle {
            Some(b) if i == 0 => format!("{c} // {b}"),
            _ => c.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
