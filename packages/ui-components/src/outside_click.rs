//! Outside-click detection for dismissable panels
//!
//! [`OutsideClick`] reports `Some(false)` when a pointer press or a focus
//! loss happens outside its region while the owner is open. Raw events come
//! from [`subscription`], which only listens while the owner is open; dropping
//! the subscription releases the runtime listener.

use iced::event::{self, Event};
use iced::{mouse, touch, window, Point, Rectangle, Subscription};

/// Interaction relevant to outside-click detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Pointer moved to a new position
    CursorMoved(Point),
    /// Pointer button pressed at the last known cursor position
    Pressed,
    /// Touch started at a position
    Touched(Point),
    /// Window lost focus
    FocusLost,
}

/// Tracks pointer position and decides whether interactions fall outside a region
#[derive(Debug, Clone)]
pub struct OutsideClick {
    region: Rectangle,
    cursor: Option<Point>,
}

impl OutsideClick {
    pub fn new(region: Rectangle) -> Self {
        Self {
            region,
            cursor: None,
        }
    }

    pub fn set_region(&mut self, region: Rectangle) {
        self.region = region;
    }

    /// Forget the cursor position; called when observation stops
    pub fn release(&mut self) {
        self.cursor = None;
    }

    /// Feed an interaction; returns `Some(false)` when the owner should close
    pub fn observe(&mut self, is_open: bool, interaction: Interaction) -> Option<bool> {
        if !is_open {
            self.release();
            return None;
        }

        let outside = match interaction {
            Interaction::CursorMoved(position) => {
                self.cursor = Some(position);
                false
            }
            // Unknown cursor position counts as inside
            Interaction::Pressed => self
                .cursor
                .map(|position| !self.region.contains(position))
                .unwrap_or(false),
            Interaction::Touched(position) => {
                self.cursor = Some(position);
                !self.region.contains(position)
            }
            Interaction::FocusLost => true,
        };

        if outside {
            self.release();
            Some(false)
        } else {
            None
        }
    }
}

/// Listen for interactions while `is_open`; no listener exists otherwise
pub fn subscription(is_open: bool) -> Subscription<Interaction> {
    if is_open {
        event::listen_with(interaction_from_event)
    } else {
        Subscription::none()
    }
}

fn interaction_from_event(event: Event, _status: event::Status) -> Option<Interaction> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Interaction::CursorMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Interaction::Pressed),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Interaction::Touched(position))
        }
        Event::Window(_, window::Event::Unfocused) => Some(Interaction::FocusLost),
        _ => None,
    }
}
