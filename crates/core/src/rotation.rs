//! Rotation resolver - clockwise rotation with horizontal wall kicks
//!
//! Every shape rotates with the same matrix transform ([`Shape::rotate_cw`]);
//! there are no per-piece rotation tables. When the rotated shape collides, the
//! resolver tries horizontal offsets -1, +1, -2, +2, ... up to the rotated
//! shape's width and keeps the first one that fits. This is a simple kick
//! scheme, not the guideline SRS.

use crate::collision::would_collide;
use crate::grid::Grid;
use crate::pieces::{Piece, Shape};

/// A successful rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOutcome {
    /// The rotated, possibly kicked, piece
    pub piece: Piece,
    /// Horizontal offset that made it fit (0 when no kick was needed)
    pub kick: i32,
}

/// Horizontal offsets to try, in order: 0, -1, +1, -2, +2, ... , -max, +max
pub fn kick_offsets(max: usize) -> impl Iterator<Item = i32> {
    let max = max as i32;
    std::iter::once(0).chain((1..=max).flat_map(|d| [-d, d]))
}

/// Anchor for `rotated` that keeps the bounding-box centre of `piece` in place.
///
/// Square shapes keep their anchor. The shift is symmetric, so four
/// rotations of a rectangular shape in open space return to the starting anchor.
pub fn recentred_anchor(piece: &Piece, rotated: &Shape) -> (i32, i32) {
    let dx = (piece.shape.cols() as i32 - rotated.cols() as i32) / 2;
    let dy = (piece.shape.rows() as i32 - rotated.rows() as i32) / 2;
    (piece.x + dx, piece.y + dy)
}

/// Rotate `piece` 90° clockwise against `grid`.
///
/// Returns `None` when no kick offset fits; the caller keeps the original piece.
pub fn try_rotate(piece: &Piece, grid: &Grid) -> Option<RotationOutcome> {
    let rotated = piece.shape.rotate_cw();
    let (x, y) = recentred_anchor(piece, &rotated);
    let candidate = piece.reshaped(rotated, x, y);

    for kick in kick_offsets(rotated.width()) {
        let kicked = candidate.translated(kick, 0);
        if !would_collide(&kicked, grid) {
            return Some(RotationOutcome {
                piece: kicked,
                kick,
            });
        }
    }

    log::trace!(
        "rotation abandoned at ({}, {}): no kick within {} columns",
        piece.x,
        piece.y,
        rotated.width()
    );
    None
}
