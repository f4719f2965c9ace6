//! Grid module - manages the game board
//!
//! The board is a W x H grid where each cell is empty or holds a gem kind.
//! Uses a flat row-major array for cache locality.
//! Coordinates: (col, row) where col ranges 0..W (left to right) and
//! row ranges 0..H (top to bottom). Row 0 is the top; gravity pulls
//! toward row H-1.

use gem_crush_types::{Cell, Position, TileKind};

/// The game board - runtime dimensions, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index, `None` when out of bounds
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.col >= self.width || pos.row >= self.height {
            return None;
        }
        Some(pos.row as usize * self.width as usize + pos.col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.col < self.width && pos.row < self.height
    }

    /// Get cell at position
    /// Returns `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Gem kind at position; `None` for empty or out-of-bounds cells
    pub fn kind_at(&self, pos: Position) -> Option<TileKind> {
        self.get(pos).flatten()
    }

    /// Swap the contents of two in-bounds cells
    /// Returns false (grid untouched) if either position is out of bounds
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// True when gravity has fully settled: in every column, no empty
    /// cell sits below a filled one
    pub fn is_settled(&self) -> bool {
        for col in 0..self.width {
            let mut seen_filled = false;
            for row in 0..self.height {
                match self.kind_at(Position::new(col, row)) {
                    Some(_) => seen_filled = true,
                    None if seen_filled => return false,
                    None => {}
                }
            }
        }
        true
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Read access to the flat cell array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a grid from glyph rows, top row first
    ///
    /// Each string is one row; characters are [`TileKind`] glyphs or `.`
    /// for an empty cell. All rows must share one length. Panics on
    /// malformed input - this is fixture notation, not a parser for
    /// untrusted data.
    ///
    /// ```
    /// use gem_crush_core::Grid;
    /// use gem_crush_types::{Position, TileKind};
    ///
    /// let grid = Grid::from_glyphs(&["RA", ".E"]);
    /// assert_eq!(grid.kind_at(Position::new(0, 0)), Some(TileKind::Ruby));
    /// assert_eq!(grid.kind_at(Position::new(0, 1)), None);
    /// ```
    pub fn from_glyphs(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "glyph fixture needs at least one row");
        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            assert_eq!(row.chars().count(), width, "ragged glyph fixture");
            for c in row.chars() {
                if c == '.' {
                    cells.push(None);
                } else {
                    let kind = TileKind::from_glyph(c)
                        .unwrap_or_else(|| panic!("unknown glyph {c:?} in fixture"));
                    cells.push(Some(kind));
                }
            }
        }
        Self {
            width: width as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    /// Render the grid back to glyph rows (inverse of [`Grid::from_glyphs`])
    pub fn to_glyphs(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| match self.kind_at(Position::new(col, row)) {
                        Some(kind) => kind.glyph(),
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }
}
