//! The canonical golden-ratio board.
//!
//! An outer triangle `v1 v2 v3`, one point on each outer edge and an inner
//! triangle. Every derived point divides a segment in the golden ratio,
//! measured from its first endpoint, and is named after the segment it
//! was cut from (`v1_v2` lies on `v1 -> v2`).
//!
//! ```text
//!  v1 ------ v1_v2 ---------------- v2
//!    \        \                   /
//!   v3_v1  (inner triangle)   v2_v3
//!       \                     /
//!                 v3
//! ```
//!
//! Nine lines: the three outer edges, three spokes from each edge point
//! through an inner vertex to the opposite outer vertex, and three inner
//! lines joining each edge point to two inner vertices.

use super::graph::{BoardGraph, Point};

/// φ, the ratio every derived point is cut at.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_75;

/// Margin so the outer vertices are fully visible.
const INSET: f64 = 10.0;
/// Side length of the drawing area.
const EXTENT: f64 = 90.0;

/// Point on `from -> to` at `1 / (1 + φ)` of the way.
#[must_use]
pub fn golden_cut(from: Point, to: Point) -> Point {
    Point::new(
        from.x + (to.x - from.x) / (1.0 + GOLDEN_RATIO),
        from.y + (to.y - from.y) / (1.0 + GOLDEN_RATIO),
    )
}

impl BoardGraph {
    /// The 9-position, 9-line board the game is played on.
    ///
    /// Line `l2` is wired endpoint / midpoint / endpoint like every other
    /// line (`v1, v3_v1, v3`).
    #[must_use]
    pub fn canonical() -> Self {
        let v1 = Point::new(INSET, INSET);
        let v2 = Point::new(EXTENT + INSET, INSET);
        let v3 = Point::new(EXTENT / 2.0 + INSET, EXTENT + INSET);

        let v1_v2 = golden_cut(v1, v2);
        let v2_v3 = golden_cut(v2, v3);
        let v3_v1 = golden_cut(v3, v1);

        let x1 = golden_cut(v1_v2, v3);
        let x2 = golden_cut(v3_v1, v2);
        let x3 = golden_cut(v2_v3, v1);

        let built = BoardGraph::builder()
            .position("v1", v1)
            .position("v2", v2)
            .position("v3", v3)
            .position("v1_v2", v1_v2)
            .position("v2_v3", v2_v3)
            .position("v3_v1", v3_v1)
            .position("v1_v2_v3", x1)
            .position("v3_v1_v2", x2)
            .position("v2_v3_v1", x3)
            .line("l1", ["v1", "v1_v2", "v2"])
            .line("l2", ["v1", "v3_v1", "v3"])
            .line("l3", ["v3", "v2_v3", "v2"])
            .line("l4", ["v1_v2", "v1_v2_v3", "v3"])
            .line("l5", ["v3_v1", "v3_v1_v2", "v2"])
            .line("l6", ["v2_v3", "v2_v3_v1", "v1"])
            .line("l7", ["v1_v2", "v3_v1_v2", "v2_v3_v1"])
            .line("l8", ["v3_v1", "v1_v2_v3", "v2_v3_v1"])
            .line("l9", ["v2_v3", "v1_v2_v3", "v3_v1_v2"])
            .build();

        match built {
            Ok(graph) => graph,
            // Fixed geometry above satisfies every builder check.
            Err(err) => unreachable!("canonical board is malformed: {err}"),
        }
    }
}
