/// Axis-aligned rectangles in play-area pixels.
///
/// `x`/`y` is the top-left corner; `right`/`bottom` are exclusive edges.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Rectangle of `size` whose center lands on `center`.
    pub fn from_center(center: (i32, i32), size: (i32, i32)) -> Self {
        Rect {
            x: center.0 - size.0 / 2,
            y: center.1 - size.1 / 2,
            width: size.0,
            height: size.1,
        }
    }

    /// Rectangle of `size` whose left edge midpoint lands on `mid_left`.
    pub fn from_mid_left(mid_left: (i32, i32), size: (i32, i32)) -> Self {
        Rect {
            x: mid_left.0,
            y: mid_left.1 - size.1 / 2,
            width: size.0,
            height: size.1,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn mid_right(&self) -> (i32, i32) {
        (self.right(), self.y + self.height / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when the two rectangles share a region of positive area.
    /// Touching edges and empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `self` lies entirely inside `outer`.
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.left() >= outer.left()
            && self.right() <= outer.right()
            && self.top() >= outer.top()
            && self.bottom() <= outer.bottom()
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
