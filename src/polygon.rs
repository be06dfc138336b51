//! Scanline intersection math for polygon filling.

use heapless::consts::U32;
use heapless::Vec;

/// Most edge crossings kept for a single scanline. Further crossings are
/// dropped, keeping the lowest x values.
pub const MAX_INTERSECTIONS: usize = 32;

pub(crate) type Intersections = Vec<i32, U32>;

/// Consecutive vertex pairs, including the closing edge from the last vertex
/// back to the first.
pub(crate) fn edges(
    points: &[(i32, i32)],
) -> impl Iterator<Item = (&(i32, i32), &(i32, i32))> + '_ {
    points.iter().zip(points.iter().cycle().skip(1))
}

///
/// Sorted x intercepts of the polygon outline with scanline `row`.
///
/// An edge crosses the row when one endpoint lies strictly above it and the
/// other on or below it, so vertices shared by two edges are counted once and
/// horizontal edges never count. Intercepts truncate toward zero.
///
pub(crate) fn scanline_intersections(points: &[(i32, i32)], row: i32) -> Intersections {
    let mut nodes = Intersections::new();
    for (&(xk, yk), &(xi, yi)) in edges(points) {
        let crosses = (yi < row && yk >= row) || (yk < row && yi >= row);
        if !crosses {
            continue;
        }
        let dy = i64::from(yk) - i64::from(yi);
        let x = i64::from(xi) + (i64::from(row) - i64::from(yi)) * (i64::from(xk) - i64::from(xi)) / dy;
        insert_sorted(&mut nodes, x as i32);
    }
    nodes
}

fn insert_sorted(nodes: &mut Intersections, x: i32) {
    if let Err(x) = nodes.push(x) {
        match nodes.last() {
            Some(&max) if x < max => {
                nodes.pop();
                let _ = nodes.push(x);
            }
            _ => return,
        }
    }
    let mut i = nodes.len() - 1;
    while i > 0 && nodes[i - 1] > nodes[i] {
        nodes.swap(i - 1, i);
        i -= 1;
    }
}
