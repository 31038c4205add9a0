// Wordhunt – A word search game
// Copyright (C) 2026  Wordhunt authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::{HashMap, HashSet};

use super::directions::{self, N_DIRECTIONS};
use super::grid::Grid;

/// A placed word and where it lives in the grid. The end coordinate is
/// inclusive and follows the placement direction, so a word written
/// right to left has its end to the left of its start.
#[derive(Debug)]
pub struct Word {
    pub word: String,
    pub start: (u32, u32),
    pub end: (u32, u32),
    pub found: bool,
}

#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<Word>,
}

impl Puzzle {
    pub(crate) fn new(grid: Grid, words: Vec<Word>) -> Puzzle {
        Puzzle { grid, words }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Checks whether ((x, y), (sx, sy)) is the recorded span of a word
    /// and marks that word as found. The endpoints are compared exactly
    /// as recorded, without normalizing the direction, so a caller that
    /// does not know which end the word starts at should call this a
    /// second time with the arguments swapped.
    pub fn answer(&mut self, x: u32, y: u32, sx: u32, sy: u32) -> bool {
        for word in self.words.iter_mut() {
            if word.start == (x, y) && word.end == (sx, sy) {
                word.found = true;
                return true;
            }
        }

        false
    }

    /// Scans the whole grid for vocabulary words that ended up in it by
    /// accident, either spelled by filler letters or by overlapping
    /// placements. Returns each word with the origin and direction it
    /// was first seen at. Every cell is tried against all 8 directions
    /// and every run length, so this is only meant as a debugging aid.
    pub fn extra_words(
        &self,
        vocabulary: &HashSet<String>,
        minimum_length: usize,
    ) -> HashMap<String, (u32, u32, i32, i32)> {
        let placed = self
            .words
            .iter()
            .map(|word| word.word.as_str())
            .collect::<HashSet<&str>>();

        let mut extra = HashMap::new();

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                for direction in 0..N_DIRECTIONS {
                    let (dx, dy) = directions::offset(direction);
                    let mut len = minimum_length;

                    while let Ok(run) = self.grid.read_run(x, y, dx, dy, len) {
                        if vocabulary.contains(&run) &&
                            !placed.contains(run.as_str()) &&
                            !extra.contains_key(&run)
                        {
                            extra.insert(run, (x, y, dx, dy));
                        }

                        len += 1;
                    }
                }
            }
        }

        extra
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cat_puzzle() -> Puzzle {
        let mut grid = Grid::new(3, 3);

        grid.write_run(0, 0, 1, 0, "cat");

        Puzzle::new(
            grid,
            vec![Word {
                word: "cat".to_string(),
                start: (0, 0),
                end: (2, 0),
                found: false,
            }],
        )
    }

    #[test]
    fn answer_matches_recorded_span() {
        let mut puzzle = cat_puzzle();

        assert!(puzzle.answer(0, 0, 2, 0));
        assert!(puzzle.words()[0].found);
    }

    #[test]
    fn answer_does_not_normalize_direction() {
        let mut puzzle = cat_puzzle();

        // The reversed span only matches when the caller swaps the
        // arguments themselves
        assert!(!puzzle.answer(2, 0, 0, 0));
        assert!(!puzzle.words()[0].found);
        assert!(puzzle.answer(0, 0, 2, 0));
    }

    #[test]
    fn answer_is_idempotent() {
        let mut puzzle = cat_puzzle();

        assert!(puzzle.answer(0, 0, 2, 0));
        assert!(puzzle.answer(0, 0, 2, 0));
        assert!(puzzle.words()[0].found);
    }

    #[test]
    fn answer_rejects_other_spans() {
        let mut puzzle = cat_puzzle();

        assert!(!puzzle.answer(0, 0, 1, 0));
        assert!(!puzzle.answer(0, 1, 2, 1));
        assert!(!puzzle.words()[0].found);
    }

    #[test]
    fn extra_words_finds_accidental_words() {
        let mut grid = Grid::new(3, 3);

        grid.write_run(0, 0, 1, 0, "cat");
        grid.write_run(0, 1, 1, 0, "xyz");
        grid.write_run(0, 2, 1, 0, "uvw");

        let puzzle = Puzzle::new(
            grid,
            vec![Word {
                word: "cat".to_string(),
                start: (0, 0),
                end: (2, 0),
                found: false,
            }],
        );

        let vocabulary = ["cat", "at", "ta"]
            .iter()
            .map(|word| word.to_string())
            .collect::<HashSet<String>>();

        let extra = puzzle.extra_words(&vocabulary, 2);

        // “cat” was placed deliberately so only its fragments count
        assert_eq!(extra.len(), 2);
        assert_eq!(extra.get("at"), Some(&(1, 0, 1, 0)));
        assert_eq!(extra.get("ta"), Some(&(2, 0, -1, 0)));
    }
}
