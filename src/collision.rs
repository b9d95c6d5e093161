/// Stateless overlap tests.
///
/// The detector never breaks ties; when several pairs overlap in one frame the
/// engine decides which one resolves.

use crate::entities::{Bullet, Enemy, Player};

/// Axis-aligned rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Rectangle of the given size centred on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Rect {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Anything that occupies space on the play field.
pub trait HasBounds {
    fn bounds(&self) -> Rect;
}

impl HasBounds for Player {
    fn bounds(&self) -> Rect {
        // Hull plus glow and engine trails extend further below the nose.
        Rect {
            x: self.x - 15.0,
            y: self.y - 25.0,
            width: 30.0,
            height: 48.0,
        }
    }
}

impl HasBounds for Enemy {
    fn bounds(&self) -> Rect {
        let a = self.kind.archetype();
        Rect::centered(self.x, self.y, a.width, a.height)
    }
}

impl HasBounds for Bullet {
    fn bounds(&self) -> Rect {
        let (w, h) = self.owner.size();
        Rect::centered(self.x, self.y, w, h)
    }
}

impl HasBounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Strict AABB overlap; touching edges do not count.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Convenience wrapper over `overlaps` for two entities.
pub fn collides(a: &impl HasBounds, b: &impl HasBounds) -> bool {
    overlaps(&a.bounds(), &b.bounds())
}

/// True when the centres are closer than the sum of the radii.
pub fn circle_overlap(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt() < r1 + r2
}

/// Euclidean distance between the centres of two entities.
pub fn distance(a: &impl HasBounds, b: &impl HasBounds) -> f32 {
    let (ax, ay) = a.bounds().center();
    let (bx, by) = b.bounds().center();
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}
