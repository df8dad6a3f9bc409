//! Precomputed leaper tables, built at compile time.

use super::Side;

/// KNIGHT_TARGETS[square] is the mask of squares a knight reaches from that square
pub static KNIGHT_TARGETS: [u64; 64] = generate_offset_table(&[
    (1, 2),   // NNE
    (-1, 2),  // NNW
    (2, 1),   // NEE
    (-2, 1),  // NWW
    (2, -1),  // SEE
    (-2, -1), // SWW
    (1, -2),  // SSE
    (-1, -2), // SSW
]);

/// KING_TARGETS[square] is the mask of squares adjacent to that square
pub static KING_TARGETS: [u64; 64] = generate_offset_table(&[
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
]);

/// PAWN_CAPTURES[side][square] is the mask of diagonals a pawn of that side attacks
/// Index 0 = White, Index 1 = Black
pub static PAWN_CAPTURES: [[u64; 64]; 2] = [
    generate_offset_table(&[(-1, 1), (1, 1)]),
    generate_offset_table(&[(-1, -1), (1, -1)]),
];

#[inline]
pub fn pawn_captures(side: Side, square_idx: usize) -> u64 {
    PAWN_CAPTURES[side.index()][square_idx]
}

/// Offsets are (file delta, rank delta).
const fn generate_offset_table<const N: usize>(offsets: &[(i8, i8); N]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut mask = 0u64;

        let mut i = 0;
        while i < N {
            let (df, dr) = offsets[i];
            let new_rank = rank + dr;
            let new_file = file + df;

            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                mask |= 1u64 << (new_rank * 8 + new_file) as u64;
            }

            i += 1;
        }

        table[sq] = mask;
        sq += 1;
    }

    table
}
