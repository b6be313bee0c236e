// bounds.rs - Axis-aligned box queries
//
// All boxes are in screen pixels, y growing downward, as measured by the
// shell from the DOM.

/// Axis-aligned box, stored by edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Box from origin and size.
    pub fn sized(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// The same box shifted horizontally.
    pub fn shifted_x(self, dx: f32) -> Self {
        Self {
            left: self.left + dx,
            right: self.right + dx,
            ..self
        }
    }
}

/// Which edge a one-sided probe compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Right,
    Left,
}

/// One-sided boundary probe: is the child's trailing edge still within the
/// parent's matching edge? `Edge::Right` compares right edges (rightward
/// travel), `Edge::Left` compares left edges. Not a full containment test.
#[inline]
pub fn inside_edge(child: &Rect, parent: &Rect, edge: Edge) -> bool {
    match edge {
        Edge::Right => child.right <= parent.right,
        Edge::Left => child.left >= parent.left,
    }
}

/// AABB overlap; touching edges count as overlapping.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right < b.left || a.left > b.right || a.bottom < b.top || a.top > b.bottom)
}
