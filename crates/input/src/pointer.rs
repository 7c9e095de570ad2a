//! Pointer tracking from terminal mouse and focus events.
//!
//! Terminal mouse reports are in character cells; the renderer wants pixels.
//! The tracker reports the centre of the hovered cell, scaled by a
//! [`PixelScale`], so picking resolves to the cell under the mouse.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{PixelScale, PointerState};

#[derive(Debug, Clone)]
pub struct PointerTracker {
    scale: PixelScale,
    state: PointerState,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(PixelScale::default())
    }
}

impl PointerTracker {
    /// Start unfocused: nothing is hovered until the first mouse report.
    pub fn new(scale: PixelScale) -> Self {
        Self {
            scale,
            state: PointerState::default(),
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Update from one terminal event. Returns `true` if the event was a
    /// pointer or focus event.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                true
            }
            Event::FocusLost => {
                self.state.focused = false;
                self.state.primary_pressed = false;
                true
            }
            Event::FocusGained => {
                self.state.focused = true;
                true
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let (x, y) = self.scale.cell_center(mouse.column, mouse.row);
        self.state.x = x;
        self.state.y = y;
        self.state.focused = true;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.state.primary_pressed = true;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.state.primary_pressed = false;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn starts_unfocused() {
        let tracker = PointerTracker::default();
        assert!(!tracker.state().focused);
    }

    #[test]
    fn moves_to_cell_centre() {
        let mut tracker = PointerTracker::default();
        assert!(tracker.handle_event(&mouse(MouseEventKind::Moved, 3, 2)));
        let s = tracker.state();
        assert_eq!((s.x, s.y), (105.0, 150.0));
        assert!(s.focused);
        assert!(!s.primary_pressed);
    }

    #[test]
    fn left_button_held_until_released() {
        let mut tracker = PointerTracker::default();
        tracker.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(tracker.state().primary_pressed);
        tracker.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 2, 1));
        assert!(tracker.state().primary_pressed);
        tracker.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), 2, 1));
        assert!(tracker.state().primary_pressed);
        tracker.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 2, 1));
        assert!(!tracker.state().primary_pressed);
    }

    #[test]
    fn focus_loss_releases_button() {
        let mut tracker = PointerTracker::default();
        tracker.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(tracker.handle_event(&Event::FocusLost));
        let s = tracker.state();
        assert!(!s.focused && !s.primary_pressed);
    }

    #[test]
    fn ignores_other_events() {
        let mut tracker = PointerTracker::default();
        assert!(!tracker.handle_event(&Event::Resize(80, 24)));
    }
}
