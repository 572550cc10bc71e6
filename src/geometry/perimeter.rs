//! Perimeter: border cells of a rectangle.

use super::Position;

/// Every cell on the border of the rectangle from `origin` to
/// `origin + size` (both corners inclusive).
///
/// `size` is the offset to the opposite corner, the same convention the
/// window API uses, so for `w, h >= 1` the result holds exactly `2w + 2h`
/// positions, or `2w + 2h - 4` when `include_corners` is false. Cells are
/// listed column by column, each column top to bottom, with no duplicates.
///
/// A zero or negative extent yields the degenerate rectangle's cells (a line
/// or a single point) and never panics. A corner past the `i32` range is
/// pulled back to `i32::MIN` or `i32::MAX`.
pub fn perimeter(origin: Position, size: Position, include_corners: bool) -> Vec<Position> {
    let (x1, x2) = ordered(origin.x, origin.x.saturating_add(size.x));
    let (y1, y2) = ordered(origin.y, origin.y.saturating_add(size.y));

    let is_corner = |x: i32, y: i32| (x == x1 || x == x2) && (y == y1 || y == y2);

    let mut cells = Vec::with_capacity(perimeter_len(x2.abs_diff(x1), y2.abs_diff(y1)));
    for x in x1..=x2 {
        if x == x1 || x == x2 {
            // Edge column: every row is on the border.
            cells.extend(
                (y1..=y2)
                    .filter(|&y| include_corners || !is_corner(x, y))
                    .map(|y| Position::new(x, y)),
            );
        } else {
            cells.push(Position::new(x, y1));
            if y2 != y1 {
                cells.push(Position::new(x, y2));
            }
        }
    }
    cells
}

#[inline]
const fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
const fn perimeter_len(w: u32, h: u32) -> usize {
    let n = 2 * w as usize + 2 * h as usize;
    if n == 0 {
        1
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_perimeter_counts() {
        for w in 1..8 {
            for h in 1..8 {
                let with = perimeter(Position::new(3, -2), Position::new(w, h), true);
                let without = perimeter(Position::new(3, -2), Position::new(w, h), false);
                assert_eq!(with.len(), (2 * w + 2 * h) as usize, "w={w} h={h}");
                assert_eq!(without.len(), (2 * w + 2 * h - 4) as usize, "w={w} h={h}");
            }
        }
    }

    #[test]
    fn test_perimeter_no_duplicates() {
        let cells = perimeter(Position::ORIGIN, Position::new(5, 3), true);
        let unique: BTreeSet<Position> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len());
    }

    #[test]
    fn test_perimeter_only_border_cells() {
        let origin = Position::new(2, 1);
        let size = Position::new(4, 3);
        for p in perimeter(origin, size, true) {
            let on_x = p.x == 2 || p.x == 6;
            let on_y = p.y == 1 || p.y == 4;
            assert!(on_x || on_y, "{p:?} is not on the border");
            assert!((2..=6).contains(&p.x) && (1..=4).contains(&p.y));
        }
    }

    #[test]
    fn test_perimeter_corners_excluded() {
        let cells: BTreeSet<Position> = perimeter(Position::ORIGIN, Position::new(3, 2), false)
            .into_iter()
            .collect();
        for corner in [(0, 0), (3, 0), (0, 2), (3, 2)] {
            assert!(!cells.contains(&Position::from(corner)));
        }
        assert!(cells.contains(&Position::new(1, 0)));
        assert!(cells.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_perimeter_column_major_order() {
        let cells = perimeter(Position::ORIGIN, Position::new(2, 1), true);
        let expected: Vec<Position> = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_perimeter_degenerate() {
        assert_eq!(perimeter(Position::new(4, 4), Position::ORIGIN, true), vec![Position::new(4, 4)]);
        assert_eq!(perimeter(Position::ORIGIN, Position::new(3, 0), true).len(), 4);
        assert_eq!(perimeter(Position::ORIGIN, Position::new(-2, -1), true).len(), 6);
    }

    #[test]
    fn test_perimeter_len_never_zero() {
        assert_eq!(perimeter_len(0, 0), 1);
        assert_eq!(perimeter_len(3, 2), 10);
    }

    #[test]
    fn test_perimeter_saturates_at_edge() {
        let cells = perimeter(Position::new(i32::MAX - 1, 0), Position::new(5, 1), true);
        assert!(cells.iter().all(|p| p.x >= i32::MAX - 1));
        assert_eq!(cells.len(), 4);
    }
}
