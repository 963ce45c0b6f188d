//! Candidate placements and best-so-far tracking.

/// A scored template placement (top-left coordinates in the scene).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// X coordinate (column) of the template's top-left corner.
    pub x: usize,
    /// Y coordinate (row) of the template's top-left corner.
    pub y: usize,
    /// Similarity score in `[0, 1]`.
    pub score: f64,
}

/// Keeps the first candidate that reached the highest score.
///
/// Updates use a strict `>`, so in row-major scan order the top-most then
/// left-most placement wins ties. Scores of exactly zero never register.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BestCandidate {
    best: Option<Candidate>,
}

impl BestCandidate {
    /// Offers a candidate; returns true when it became the new best.
    pub(crate) fn offer(&mut self, candidate: Candidate) -> bool {
        let floor = self.best.map_or(0.0, |b| b.score);
        if candidate.score > floor {
            self.best = Some(candidate);
            true
        } else {
            false
        }
    }

    pub(crate) fn get(&self) -> Option<Candidate> {
        self.best
    }
}
