/// Axis-aligned rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Inset from the left edge, keeping the right edge in place.
    pub fn indent(self, amount: u16) -> Self {
        let amount = amount.min(self.width);
        Self {
            x: self.x.saturating_add(amount),
            width: self.width - amount,
            ..self
        }
    }

    /// A zero-height line spanning this rect's width at row `y`.
    pub const fn hline(&self, y: u16) -> Self {
        Self {
            x: self.x,
            y,
            width: self.width,
            height: 0,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
