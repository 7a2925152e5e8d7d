//! Custom pointer that follows the mouse and reacts to hoverable elements.

/// Gradient classes the cursor cycles through, one step per hover.
pub static CURSOR_COLOURS: &[&str] = &[
    "bg-gradient-to-br from-pink-500 to-yellow-400",
    "bg-gradient-to-br from-cyan-400 to-blue-500",
    "bg-gradient-to-br from-green-400 to-teal-500",
    "bg-gradient-to-br from-purple-500 to-pink-500",
];

pub const CURSOR_SIZE: f64 = 32.0;
pub const CURSOR_HOVER_SIZE: f64 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
    pub colour: usize,
}

impl CursorState {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Pointer entered a hoverable element.
    pub fn enter(&mut self) {
        self.hovering = true;
        self.colour = (self.colour + 1) % CURSOR_COLOURS.len();
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    pub fn size(&self) -> f64 {
        if self.hovering {
            CURSOR_HOVER_SIZE
        } else {
            CURSOR_SIZE
        }
    }

    /// Distance from the pointer to the cursor's top-left corner.
    pub fn offset(&self) -> f64 {
        self.size() / 2.0
    }

    /// `left`/`top` of the cursor so it stays centred on the pointer.
    pub fn position(&self) -> (f64, f64) {
        let offset = self.offset();
        (self.x - offset, self.y - offset)
    }

    pub fn style(&self) -> String {
        let (left, top) = self.position();
        format!("left: {left}px; top: {top}px")
    }

    pub fn class(&self) -> String {
        let (size, opacity) = if self.hovering {
            ("w-16 h-16", "opacity-80 scale-110")
        } else {
            ("w-8 h-8", "opacity-60")
        };
        format!(
            "cool-cursor {size} {} {opacity}",
            CURSOR_COLOURS[self.colour % CURSOR_COLOURS.len()]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_enlarges_and_recentres() {
        let mut cursor = CursorState::default();
        cursor.moved(100.0, 50.0);
        assert_eq!(cursor.position(), (84.0, 34.0));

        cursor.enter();
        assert_eq!(cursor.size(), 64.0);
        assert_eq!(cursor.offset(), 32.0);
        assert_eq!(cursor.position(), (68.0, 18.0));

        cursor.leave();
        assert_eq!(cursor.offset(), 16.0);
    }

    #[test]
    fn colour_cycles_on_each_enter() {
        let mut cursor = CursorState::default();
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                cursor.enter();
                cursor.leave();
                cursor.colour
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn class_reflects_hover() {
        let mut cursor = CursorState::default();
        assert!(cursor.class().contains("w-8 h-8"));
        cursor.enter();
        assert!(cursor.class().contains("w-16 h-16"));
        assert!(cursor.class().contains(CURSOR_COLOURS[1]));
    }
}
