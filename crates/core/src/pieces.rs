//! Pieces module - shape bitmaps and the active piece
//!
//! A [`Shape`] is a small boolean matrix in piece-local coordinates (row 0 on top).
//! The canonical tetrominoes are stored in square bounding boxes so that the plain
//! matrix rotation in [`Shape::rotate_cw`] cycles back to the original after four turns.

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::types::{ColorId, PieceKind};

/// Largest supported bounding box side
pub const MAX_SHAPE_DIM: usize = 4;

/// Upper bound on filled cells in a shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Offsets (dx, dy) of the filled cells of a shape
pub type CellOffsets = ArrayVec<(i32, i32), MAX_SHAPE_CELLS>;

/// Boolean occupancy matrix of `rows x cols` (at most 4x4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

const fn shape(rows: u8, cols: u8, m: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Shape {
    let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut r = 0;
    while r < MAX_SHAPE_DIM {
        let mut c = 0;
        while c < MAX_SHAPE_DIM {
            bits[r][c] = m[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape { rows, cols, bits }
}

pub const I_SHAPE: Shape = shape(4, 4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
pub const O_SHAPE: Shape = shape(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
pub const T_SHAPE: Shape = shape(3, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
pub const S_SHAPE: Shape = shape(3, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
pub const Z_SHAPE: Shape = shape(3, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
pub const J_SHAPE: Shape = shape(3, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
pub const L_SHAPE: Shape = shape(3, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Spawn orientation of a canonical piece
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

impl Shape {
    /// Parse a shape from text rows.
    ///
    /// `#`, `X`/`x` and `1` are filled; `.`, `0` and space are empty.
    pub fn parse<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Self, ConfigError> {
        let height = rows.len();
        if height == 0 {
            return Err(ConfigError::EmptyShape {
                name: name.to_string(),
            });
        }
        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(ConfigError::EmptyShape {
                name: name.to_string(),
            });
        }
        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(ConfigError::ShapeTooLarge {
                name: name.to_string(),
                rows: height,
                cols: width,
                max: MAX_SHAPE_DIM,
            });
        }

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(ConfigError::RaggedShape {
                    name: name.to_string(),
                    row: r,
                    len,
                    expected: width,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                bits[r][c] = match ch {
                    '#' | 'X' | 'x' | '1' => true,
                    '.' | '0' | ' ' => false,
                    other => {
                        return Err(ConfigError::BadShapeCell {
                            name: name.to_string(),
                            ch: other,
                        })
                    }
                };
            }
        }

        let shape = Shape {
            rows: height as u8,
            cols: width as u8,
            bits,
        };
        if shape.filled_count() == 0 {
            return Err(ConfigError::BlankShape {
                name: name.to_string(),
            });
        }
        Ok(shape)
    }

    /// Text rows in the same format [`Shape::parse`] accepts
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| if self.bits[r][c] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Bounding box width, used as the kick search bound
    pub fn width(&self) -> usize {
        self.cols()
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Offsets (dx, dy) of filled cells, row by row
    pub fn cells(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] {
                    out.push((c as i32, r as i32));
                }
            }
        }
        out
    }

    pub fn filled_count(&self) -> usize {
        self.bits
            .iter()
            .flatten()
            .filter(|&&filled| filled)
            .count()
    }

    /// Index of the topmost row with a filled cell
    pub fn first_filled_row(&self) -> usize {
        (0..self.rows())
            .find(|&r| self.bits[r][..self.cols()].iter().any(|&b| b))
            .unwrap_or(0)
    }

    /// 90° clockwise rotation: an N x M shape becomes M x N with
    /// `rotated[j][N-1-i] = shape[i][j]`.
    pub fn rotate_cw(&self) -> Shape {
        let n = self.rows();
        let m = self.cols();
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..n {
            for j in 0..m {
                bits[j][n - 1 - i] = self.bits[i][j];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: ColorId,
    /// Column of the bounding box's left edge
    pub x: i32,
    /// Row of the bounding box's top edge (may be negative)
    pub y: i32,
}

impl Piece {
    pub fn new(shape: Shape, color: ColorId, x: i32, y: i32) -> Self {
        Self { shape, color, x, y }
    }

    /// Same piece shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with a different shape and anchor
    pub fn reshaped(&self, shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y, ..*self }
    }

    /// Absolute grid coordinates of the filled cells
    pub fn cells(&self) -> CellOffsets {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).filled_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_canonical_shapes_are_square() {
        for kind in PieceKind::ALL {
            let s = get_shape(kind);
            assert_eq!(s.rows(), s.cols(), "{:?}", kind);
        }
    }

    #[test]
    fn test_t_rotation_cw() {
        let east = T_SHAPE.rotate_cw();
        assert_eq!(east.to_rows(), vec![".#.", ".##", ".#."]);
        let south = east.rotate_cw();
        assert_eq!(south.to_rows(), vec!["...", "###", ".#."]);
    }

    #[test]
    fn test_i_rotation_becomes_vertical() {
        let vertical = I_SHAPE.rotate_cw();
        assert_eq!(vertical.cells().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_non_square_rotation_swaps_dimensions() {
        let bar = Shape::parse("bar", &["###"]).unwrap();
        let turned = bar.rotate_cw();
        assert_eq!((turned.rows(), turned.cols()), (3, 1));
        assert_eq!(turned.to_rows(), vec!["#", "#", "#"]);

        let ell = Shape::parse("ell", &["#.", "#.", "##"]).unwrap();
        assert_eq!(ell.rotate_cw().to_rows(), vec!["###", "#.."]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Shape::parse::<&str>("e", &[]),
            Err(ConfigError::EmptyShape { .. })
        ));
        assert!(matches!(
            Shape::parse("r", &["##", "#"]),
            Err(ConfigError::RaggedShape { row: 1, .. })
        ));
        assert!(matches!(
            Shape::parse("big", &["#####"]),
            Err(ConfigError::ShapeTooLarge { .. })
        ));
        assert!(matches!(
            Shape::parse("bad", &["#?"]),
            Err(ConfigError::BadShapeCell { ch: '?', .. })
        ));
        assert!(matches!(
            Shape::parse("blank", &["..", ".."]),
            Err(ConfigError::BlankShape { .. })
        ));
    }

    #[test]
    fn test_first_filled_row() {
        assert_eq!(I_SHAPE.first_filled_row(), 1);
        assert_eq!(T_SHAPE.first_filled_row(), 0);
        assert_eq!(I_SHAPE.rotate_cw().rotate_cw().first_filled_row(), 2);
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let piece = Piece::new(O_SHAPE, ColorId(1), 4, -1);
        assert_eq!(piece.cells().as_slice(), &[(4, -1), (5, -1), (4, 0), (5, 0)]);
        let moved = piece.translated(-1, 2);
        assert_eq!((moved.x, moved.y), (3, 1));
        assert_eq!(moved.shape, piece.shape);
    }
}
