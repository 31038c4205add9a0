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

use std::collections::HashSet;
use std::fmt;

use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::grid::{Grid, EMPTY};
use super::puzzle::{Puzzle, Word};

// Independent random (origin, direction) trials per word before the grid
// is grown to make room for it.
const MAX_TRIALS: u32 = 19999;

#[derive(Debug, Clone)]
pub struct Config {
    /// Initial grid width
    pub width: u32,
    /// Initial grid height
    pub height: u32,
    /// How many words to place
    pub n_words: usize,
    /// Shortest word to pick from the vocabulary
    pub minimum_length: usize,
    /// How many columns and rows to append when a word has no room
    pub expand_step: u32,
    /// How many times the grid may be grown for a single word
    pub max_expansions: u32,
    /// Replace the remaining empty cells with random letters
    pub fill_letters: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: 10,
            height: 10,
            n_words: 10,
            minimum_length: 3,
            expand_step: 5,
            max_expansions: 100,
            fill_letters: true,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(), Error> {
        if self.width == 0 {
            Err(Error::InvalidConfiguration("width"))
        } else if self.height == 0 {
            Err(Error::InvalidConfiguration("height"))
        } else if self.n_words == 0 {
            Err(Error::InvalidConfiguration("n_words"))
        } else if self.minimum_length == 0 {
            Err(Error::InvalidConfiguration("minimum_length"))
        } else if self.expand_step == 0 {
            Err(Error::InvalidConfiguration("expand_step"))
        } else if self.max_expansions == 0 {
            Err(Error::InvalidConfiguration("max_expansions"))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidConfiguration(&'static str),
    InsufficientVocabulary { needed: usize, available: usize },
    PlacementExhausted(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(field) => {
                write!(f, "{} must be greater than zero", field)
            },
            Error::InsufficientVocabulary { needed, available } => {
                write!(
                    f,
                    "the vocabulary has only {} distinct words of the \
                     minimum length, {} needed",
                    available,
                    needed,
                )
            },
            Error::PlacementExhausted(word) => {
                write!(
                    f,
                    "no room to place “{}” within the expansion limit",
                    word,
                )
            },
        }
    }
}

/// Whether `word` can be written starting at (x, y) along (dx, dy).
///
/// The degenerate (0, 0) direction never fits, and neither does a run
/// that leaves the grid. Cells already holding a letter are fine as long
/// as the letter matches, so words may cross each other.
pub fn check_fits(
    grid: &Grid,
    x: u32,
    y: u32,
    dx: i32,
    dy: i32,
    word: &str,
) -> bool {
    if dx == 0 && dy == 0 {
        return false;
    }

    let Ok(run) = grid.read_run(x, y, dx, dy, word.chars().count()) else {
        return false;
    };

    run.chars()
        .zip(word.chars())
        .all(|(cell, letter)| cell == EMPTY || cell == letter)
}

// Picks n_words distinct qualifying words, uniformly at random without
// replacement. Shuffling the filtered pool up front keeps the selection
// a single pass instead of sampling until enough distinct words turn up.
fn select_words<I, T>(vocabulary: I, config: &Config) -> Result<Vec<String>, Error>
    where I: IntoIterator<Item = T>,
          T: AsRef<str>,
{
    let mut candidates = vocabulary
        .into_iter()
        .filter(|word| word.as_ref().chars().count() >= config.minimum_length)
        .map(|word| word.as_ref().to_string())
        .collect::<HashSet<String>>()
        .into_iter()
        .collect::<Vec<String>>();

    if candidates.len() < config.n_words {
        return Err(Error::InsufficientVocabulary {
            needed: config.n_words,
            available: candidates.len(),
        });
    }

    candidates.shuffle(&mut rand::rng());
    candidates.truncate(config.n_words);

    Ok(candidates)
}

/// Generates a puzzle by hiding random words from `vocabulary` in a grid.
///
/// Each word is tried at random origins and directions until a batch of
/// trials yields at least one fit, growing the grid by
/// [`Config::expand_step`] between batches. A word that still has no room
/// after [`Config::max_expansions`] growths fails with
/// [`Error::PlacementExhausted`].
pub fn generate<I, T>(vocabulary: I, config: &Config) -> Result<Puzzle, Error>
    where I: IntoIterator<Item = T>,
          T: AsRef<str>,
{
    config.validate()?;

    let words = select_words(vocabulary, config)?;

    let mut grid = Grid::new(config.width, config.height);
    let mut placed = Vec::with_capacity(words.len());
    let mut rng = rand::rng();

    for word in words {
        let mut expansions = 0;

        let (x, y, dx, dy) = loop {
            let mut candidates = Vec::new();

            for _ in 0..MAX_TRIALS {
                let x = rng.random_range(0..grid.width());
                let y = rng.random_range(0..grid.height());
                // The sampler can draw the degenerate (0, 0) direction,
                // which check_fits rejects
                let dx = rng.random_range(-1..=1);
                let dy = rng.random_range(-1..=1);

                if check_fits(&grid, x, y, dx, dy, &word) {
                    candidates.push((x, y, dx, dy));
                }
            }

            if let Some(&position) = candidates.choose(&mut rng) {
                debug!(
                    "placed “{}” at ({}, {}) direction ({}, {}), \
                     {} candidates, {} expansions",
                    word,
                    position.0, position.1,
                    position.2, position.3,
                    candidates.len(),
                    expansions,
                );
                break position;
            }

            expansions += 1;

            if expansions > config.max_expansions {
                return Err(Error::PlacementExhausted(word));
            }

            debug!(
                "no room for “{}”, growing the grid to {}×{}",
                word,
                grid.width() + config.expand_step,
                grid.height() + config.expand_step,
            );

            grid.expand(config.expand_step, config.expand_step);
        };

        grid.write_run(x, y, dx, dy, &word);

        let steps = word.chars().count() as i32 - 1;
        let end = (
            x.wrapping_add_signed(dx * steps),
            y.wrapping_add_signed(dy * steps),
        );

        placed.push(Word {
            word,
            start: (x, y),
            end,
            found: false,
        });
    }

    if config.fill_letters {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.at(x, y) == EMPTY {
                    grid.set(x, y, rng.random_range('a'..='z'));
                }
            }
        }
    }

    Ok(Puzzle::new(grid, placed))
}
