use crate::infra::Position;
use crate::state::Board;

/// Shortest route to a destination allowing at most one teleporter jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub distance: i32,
    /// Where to head right now: the destination itself or the entry teleporter.
    pub first_hop: Position,
}

/// Teleporter-aware distance queries against one board snapshot.
///
/// Any teleporter may be entered and any *other* teleporter used as the exit.
/// The jump itself is free, so a route costs the walk to the entry plus the
/// walk from the exit to the destination.
#[derive(Debug, Clone, Default)]
pub struct DistanceOracle {
    teleporters: Vec<Position>,
}

impl DistanceOracle {
    pub fn new(board: &Board) -> Self {
        Self {
            teleporters: board.teleporters().iter().map(|t| t.position).collect(),
        }
    }

    pub fn teleporters(&self) -> &[Position] {
        &self.teleporters
    }

    pub fn manhattan(a: Position, b: Position) -> i32 {
        a.distance(&b)
    }

    pub fn route(&self, start: Position, end: Position) -> Route {
        let mut best = Route {
            distance: start.distance(&end),
            first_hop: end,
        };

        if self.teleporters.len() < 2 {
            return best;
        }

        // Strict comparison: the direct path wins ties, then the earliest pair in board order
        for (entry_idx, entry) in self.teleporters.iter().enumerate() {
            for (exit_idx, exit) in self.teleporters.iter().enumerate() {
                if entry_idx == exit_idx {
                    continue;
                }
                let via = start.distance(entry) + exit.distance(&end);
                if via < best.distance {
                    best = Route {
                        distance: via,
                        first_hop: *entry,
                    };
                }
            }
        }

        best
    }

    pub fn effective_distance(&self, start: Position, end: Position) -> i32 {
        self.route(start, end).distance
    }

    pub fn best_step_target(&self, start: Position, dest: Position) -> Position {
        self.route(start, dest).first_hop
    }
}

pub fn manhattan(a: Position, b: Position) -> i32 {
    DistanceOracle::manhattan(a, b)
}

pub fn effective_distance(start: Position, end: Position, board: &Board) -> i32 {
    DistanceOracle::new(board).effective_distance(start, end)
}

pub fn best_step_target(start: Position, dest: Position, board: &Board) -> Position {
    DistanceOracle::new(board).best_step_target(start, dest)
}
