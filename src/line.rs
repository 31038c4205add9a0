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

/// Returns the grid cells lying on the straight segment between `a` and
/// `b`, both included.
///
/// The segment is scanned twice, once per x computing the rounded y and
/// once per y computing the rounded x. A single scan misses cells on
/// steep or shallow diagonals, so the result is the deduplicated union
/// of both. The cells are ordered by ascending x and, for equal x, by
/// ascending y when the slope is non-negative or the line is vertical,
/// descending y otherwise. That ordering lets a caller read the cells
/// off as a left-to-right word path.
pub fn rasterize(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (ax, ay) = a;
    let (bx, by) = b;

    let slope = if bx == ax {
        None
    } else {
        Some((by - ay) as f64 / (bx - ax) as f64)
    };

    // The x-intercept for a vertical line, the y-intercept otherwise
    let intercept = match slope {
        None => ax as f64,
        Some(m) => -(m * bx as f64) + by as f64,
    };

    let mut cells = Vec::new();

    if let Some(m) = slope {
        for x in ax.min(bx)..=ax.max(bx) {
            let y = (m * x as f64 + intercept).round() as i32;
            cells.push((x, y));
        }
    }

    // A horizontal line is fully covered by the x scan
    if slope != Some(0.0) {
        for y in ay.min(by)..=ay.max(by) {
            let x = match slope {
                None => intercept as i32,
                Some(m) => ((y as f64 - intercept) / m).round() as i32,
            };

            cells.push((x, y));
        }
    }

    let descending_y = slope.is_some_and(|m| m < 0.0);

    cells.sort_unstable_by(|p, q| {
        p.0.cmp(&q.0).then_with(|| {
            if descending_y {
                q.1.cmp(&p.1)
            } else {
                p.1.cmp(&q.1)
            }
        })
    });
    cells.dedup();

    cells
}
