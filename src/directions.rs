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

// A word can run along any of the 8 compass directions. The offsets are
// unit steps in grid coordinates with y growing downwards, so north is
// (0, -1) and the directions continue clockwise from there.

pub const N_DIRECTIONS: u8 = 8;

pub fn offset(direction: u8) -> (i32, i32) {
    assert!(direction < N_DIRECTIONS);

    [
        (0, -1),
        (1, -1),
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ][direction as usize]
}

pub fn step(x: u32, y: u32, dx: i32, dy: i32) -> (u32, u32) {
    (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
}
