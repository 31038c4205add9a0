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

use std::fmt;

/// Marker for a cell that no word occupies yet.
pub const EMPTY: char = '.';

#[derive(Debug)]
pub struct Grid {
    values: Vec<char>,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfBounds => write!(f, "position outside the grid"),
        }
    }
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Grid {
        Grid {
            values: vec![EMPTY; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn at(&self, x: u32, y: u32) -> char {
        assert!(x < self.width && y < self.height);

        self.values[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, letter: char) {
        assert!(x < self.width && y < self.height);

        self.values[(y * self.width + x) as usize] = letter;
    }

    /// Appends `by_width` empty columns to every row and then `by_height`
    /// empty rows at the new width. Existing cells keep their coordinates
    /// and values, so spans recorded before the expansion stay valid.
    pub fn expand(&mut self, by_width: u32, by_height: u32) {
        let width = self.width + by_width;
        let height = self.height + by_height;

        // The buffer is rebuilt rather than spliced because a width change
        // moves the start of every row.
        let mut values = vec![EMPTY; (width * height) as usize];

        for y in 0..self.height {
            for x in 0..self.width {
                values[(y * width + x) as usize] =
                    self.values[(y * self.width + x) as usize];
            }
        }

        self.values = values;
        self.width = width;
        self.height = height;
    }

    /// Reads the run of `len` cells starting at (x, y) and stepping by
    /// (dx, dy). Each coordinate is checked as it is visited, so the run
    /// fails the moment it leaves the grid. Stepping off the left or top
    /// edge wraps the coordinate around the integer maximum, which the
    /// single comparison against the dimensions also catches.
    pub fn read_run(
        &self,
        x: u32,
        y: u32,
        dx: i32,
        dy: i32,
        len: usize,
    ) -> Result<String, Error> {
        let (mut x, mut y) = (x, y);
        let mut run = String::with_capacity(len);

        for _ in 0..len {
            if x >= self.width || y >= self.height {
                return Err(Error::OutOfBounds);
            }

            run.push(self.at(x, y));

            x = x.wrapping_add_signed(dx);
            y = y.wrapping_add_signed(dy);
        }

        Ok(run)
    }

    /// Writes `text` along (dx, dy) starting at (x, y). The caller must
    /// have validated the fit with a read first, otherwise this panics
    /// partway through the write.
    pub fn write_run(&mut self, x: u32, y: u32, dx: i32, dy: i32, text: &str) {
        let (mut x, mut y) = (x, y);

        for letter in text.chars() {
            self.set(x, y, letter);

            x = x.wrapping_add_signed(dx);
            y = y.wrapping_add_signed(dy);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x != 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", self.at(x, y))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                assert_eq!(grid.at(x, y), EMPTY);
            }
        }
    }

    #[test]
    fn set_and_at() {
        let mut grid = Grid::new(2, 2);

        grid.set(1, 0, 'q');

        assert_eq!(grid.at(1, 0), 'q');
        assert_eq!(grid.at(0, 0), EMPTY);
    }

    #[test]
    fn expand_preserves_cells() {
        let mut grid = Grid::new(2, 2);

        grid.set(0, 0, 'a');
        grid.set(1, 0, 'b');
        grid.set(0, 1, 'c');
        grid.set(1, 1, 'd');

        grid.expand(1, 2);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);

        assert_eq!(grid.at(0, 0), 'a');
        assert_eq!(grid.at(1, 0), 'b');
        assert_eq!(grid.at(0, 1), 'c');
        assert_eq!(grid.at(1, 1), 'd');

        // The appended column and rows are empty
        assert_eq!(grid.at(2, 0), EMPTY);
        assert_eq!(grid.at(2, 1), EMPTY);

        for y in 2..4 {
            for x in 0..3 {
                assert_eq!(grid.at(x, y), EMPTY);
            }
        }
    }

    #[test]
    fn expand_is_monotonic() {
        let mut grid = Grid::new(1, 1);

        grid.set(0, 0, 'z');

        for _ in 0..3 {
            let (width, height) = (grid.width(), grid.height());

            grid.expand(2, 1);

            assert!(grid.width() > width);
            assert!(grid.height() > height);
            assert_eq!(grid.at(0, 0), 'z');
        }
    }

    #[test]
    fn run_round_trip() {
        let mut grid = Grid::new(5, 5);

        grid.write_run(4, 0, -1, 1, "word");

        assert_eq!(&grid.read_run(4, 0, -1, 1, 4).unwrap(), "word");
        // The same run read backwards from the other end
        assert_eq!(&grid.read_run(1, 3, 1, -1, 4).unwrap(), "drow");
    }

    #[test]
    fn read_run_out_of_bounds() {
        let grid = Grid::new(3, 3);

        // Off the right edge
        assert_eq!(grid.read_run(1, 0, 1, 0, 3), Err(Error::OutOfBounds));
        // Off the bottom edge
        assert_eq!(grid.read_run(0, 2, 0, 1, 2), Err(Error::OutOfBounds));
        // Off the left edge, caught by the wraparound comparison
        assert_eq!(grid.read_run(0, 0, -1, 0, 2), Err(Error::OutOfBounds));
        // Off the top edge
        assert_eq!(grid.read_run(0, 0, 0, -1, 2), Err(Error::OutOfBounds));

        // The full diagonal still fits
        assert!(grid.read_run(0, 0, 1, 1, 3).is_ok());

        assert_eq!(&Error::OutOfBounds.to_string(), "position outside the grid");
    }

    #[test]
    fn display() {
        let mut grid = Grid::new(2, 2);

        grid.set(0, 0, 'a');
        grid.set(1, 1, 'b');

        assert_eq!(&grid.to_string(), "a .\n. b\n");
    }
}
