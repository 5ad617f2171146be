//! Move generation and static move ordering.

use crate::board::Board;
use crate::types::{Cell, Square};

/// Ordering weight of the board centre.
pub const CENTER_WEIGHT: u8 = 4;

/// Ordering weight of diagonal cells and cells next to the centre.
pub const NEAR_WEIGHT: u8 = 3;

/// Ordering weight of every other cell.
pub const EDGE_WEIGHT: u8 = 2;

/// Returns every empty cell in row-major order.
pub fn generate(board: &Board) -> Vec<Cell> {
    let mut moves = Vec::with_capacity(board.size() * board.size());
    generate_into(board, &mut moves);
    moves
}

/// Fills `moves` with every empty cell in row-major order, reusing its buffer.
pub fn generate_into(board: &Board, moves: &mut Vec<Cell>) {
    moves.clear();
    let n = board.size();
    moves.extend(
        board
            .squares()
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(i, _)| Cell::new(i / n, i % n)),
    );
}

/// Static positional weight of a cell on a `size`×`size` board.
///
/// The centre distance is the Manhattan distance to the nearest central
/// cell; even boards have four central cells, odd boards one.
pub fn weight(size: usize, cell: Cell) -> u8 {
    let distance = axis_distance(size, cell.row) + axis_distance(size, cell.col);
    let on_diagonal = cell.row == cell.col || cell.row + cell.col + 1 == size;
    if distance == 0 {
        CENTER_WEIGHT
    } else if on_diagonal || distance == 1 {
        NEAR_WEIGHT
    } else {
        EDGE_WEIGHT
    }
}

/// Reorders `moves` heaviest first. Equal weights keep their relative order.
pub fn order(size: usize, moves: &mut [Cell]) {
    // Stable sort: equal weights keep row-major order.
    moves.sort_by_key(|&cell| std::cmp::Reverse(weight(size, cell)));
}

/// Distance from `index` to the nearest central index along one axis.
fn axis_distance(size: usize, index: usize) -> usize {
    let high = size / 2;
    let low = if size % 2 == 0 { high - 1 } else { high };
    if index < low {
        low - index
    } else {
        index.saturating_sub(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_row_major() {
        let board: Board = "x.o/.x./o..".parse().unwrap();
        assert_eq!(
            generate(&board),
            vec![
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_generate_into_reuses_buffer() {
        let mut moves = vec![Cell::new(9, 9)];
        generate_into(&"xxx/xxx/xx.".parse::<Board>().unwrap(), &mut moves);
        assert_eq!(moves, vec![Cell::new(2, 2)]);
    }

    #[test]
    fn test_weights_on_standard_board() {
        assert_eq!(weight(3, Cell::new(1, 1)), CENTER_WEIGHT);
        assert_eq!(weight(3, Cell::new(0, 0)), NEAR_WEIGHT);
        assert_eq!(weight(3, Cell::new(0, 1)), NEAR_WEIGHT);
        assert_eq!(weight(3, Cell::new(2, 0)), NEAR_WEIGHT);
    }

    #[test]
    fn test_weights_on_even_board() {
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(weight(4, Cell::new(row, col)), CENTER_WEIGHT);
        }
        assert_eq!(weight(4, Cell::new(0, 0)), NEAR_WEIGHT);
        assert_eq!(weight(4, Cell::new(0, 1)), NEAR_WEIGHT);
        assert_eq!(weight(4, Cell::new(3, 0)), NEAR_WEIGHT);
        assert_eq!(weight(4, Cell::new(0, 2)), NEAR_WEIGHT);
    }

    #[test]
    fn test_weights_on_five_board() {
        assert_eq!(weight(5, Cell::new(2, 2)), CENTER_WEIGHT);
        assert_eq!(weight(5, Cell::new(0, 0)), NEAR_WEIGHT);
        assert_eq!(weight(5, Cell::new(1, 2)), NEAR_WEIGHT);
        assert_eq!(weight(5, Cell::new(0, 1)), EDGE_WEIGHT);
        assert_eq!(weight(5, Cell::new(0, 2)), EDGE_WEIGHT);
    }

    #[test]
    fn test_order_is_stable_partition() {
        let board = Board::with_size(5).unwrap();
        let mut moves = generate(&board);
        order(5, &mut moves);
        assert_eq!(moves[0], Cell::new(2, 2));
        // Within the middle bucket, row-major order survives.
        assert_eq!(moves[1], Cell::new(0, 0));
        assert_eq!(moves[2], Cell::new(0, 4));
        assert_eq!(moves[3], Cell::new(1, 1));
        let weights: Vec<_> = moves.iter().map(|&c| weight(5, c)).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*moves.last().unwrap(), Cell::new(4, 3));
    }

    #[test]
    fn test_order_standard_board_puts_centre_first() {
        let mut moves = generate(&Board::new());
        order(3, &mut moves);
        assert_eq!(moves[0], Cell::new(1, 1));
        assert_eq!(&moves[1..3], &[Cell::new(0, 0), Cell::new(0, 1)]);
    }
}
