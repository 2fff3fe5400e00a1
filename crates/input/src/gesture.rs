//! Swipe gestures to game commands.
//!
//! A swipe is the displacement between press and release:
//!
//! - horizontal-dominant: `MoveLeft` / `MoveRight` by the sign of `dx`
//! - vertical-dominant and downward: `SoftDrop`
//! - anything else (upward, or a tap with no motion): `Rotate`
//!
//! Ties go to the vertical branch.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::GameCommand;

/// Classify a swipe. `dy` grows downward, as in screen coordinates.
pub fn command_for_swipe(dx: i32, dy: i32) -> GameCommand {
    if dx.abs() > dy.abs() {
        if dx > 0 {
            GameCommand::MoveRight
        } else {
            GameCommand::MoveLeft
        }
    } else if dy > 0 {
        GameCommand::SoftDrop
    } else {
        GameCommand::Rotate
    }
}

/// Turns terminal mouse press/release pairs into swipe commands.
///
/// Terminal cells are roughly twice as tall as they are wide, so horizontal
/// distance is divided by `x_per_y` before comparing.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    x_per_y: u16,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SwipeTracker {
    /// `x_per_y` of 0 is treated as 1.
    pub fn new(x_per_y: u16) -> Self {
        Self {
            start: None,
            x_per_y: x_per_y.max(1),
        }
    }

    /// True between a left press and its release.
    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<GameCommand> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                let dx = (event.column as i32 - x0 as i32) / self.x_per_y as i32;
                let dy = event.row as i32 - y0 as i32;
                Some(command_for_swipe(dx, dy))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn swipe_directions() {
        assert_eq!(command_for_swipe(30, 5), GameCommand::MoveRight);
        assert_eq!(command_for_swipe(-30, -5), GameCommand::MoveLeft);
        assert_eq!(command_for_swipe(3, 40), GameCommand::SoftDrop);
        assert_eq!(command_for_swipe(-3, -40), GameCommand::Rotate);
    }

    #[test]
    fn ties_and_taps_are_vertical() {
        assert_eq!(command_for_swipe(10, 10), GameCommand::SoftDrop);
        assert_eq!(command_for_swipe(10, -10), GameCommand::Rotate);
        assert_eq!(command_for_swipe(0, 0), GameCommand::Rotate);
    }

    #[test]
    fn tracker_pairs_press_and_release() {
        let mut t = SwipeTracker::default();
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10)), None);
        assert!(t.in_progress());
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 14, 10)), None);
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 11)),
            Some(GameCommand::MoveRight)
        );
        assert!(!t.in_progress());
    }

    #[test]
    fn tracker_scales_horizontal_distance() {
        let mut t = SwipeTracker::default();
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        // 6 columns is 3 cells, less than 4 rows down.
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 16, 9)),
            Some(GameCommand::SoftDrop)
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = SwipeTracker::default();
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)), None);
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)), None);
        assert!(!t.in_progress());
    }
}
