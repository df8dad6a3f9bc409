use super::*;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Promotions count once per piece choice. Used to check move
    /// generation against published node counts.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut next = self.probe();
            next.apply_unconditional(mv);
            nodes += next.perft(depth - 1);
        }
        nodes
    }

    /// Per-move node counts at `depth`, in coordinate notation.
    pub fn perft_divide(&self, depth: u32) -> Vec<(String, u64)> {
        let mut lines: Vec<(String, u64)> = self
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let mut next = self.probe();
                next.apply_unconditional(mv);
                (mv.to_string(), next.perft(depth.saturating_sub(1)))
            })
            .collect();
        lines.sort();
        lines
    }
}
