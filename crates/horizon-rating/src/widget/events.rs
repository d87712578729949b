//! Widget-specific event types.
//!
//! Pointer input reaches widgets as [`WidgetEvent`]s. Positions are always in
//! widget-local coordinates, with (0, 0) at the widget's top-left corner.

use horizon_rating_render::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing it to propagate.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse button press.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse button release.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse movement.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// The phase of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger touched the surface.
    Started,
    /// A finger moved on the surface.
    Moved,
    /// A finger lifted from the surface.
    Ended,
    /// The system cancelled tracking of the touch.
    Cancelled,
}

/// A single touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier.
    pub id: u64,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl TouchPoint {
    /// Create a new touch point.
    pub fn new(id: u64, local_pos: Point) -> Self {
        Self { id, local_pos }
    }
}

/// Touch input for one phase of a touch sequence.
#[derive(Debug, Clone)]
pub struct TouchEvent {
    /// Base event data.
    pub base: EventBase,
    /// The phase this event reports.
    pub phase: TouchPhase,
    /// Touch points involved, in platform order.
    pub points: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create a new touch event.
    pub fn new(phase: TouchPhase, points: Vec<TouchPoint>) -> Self {
        Self {
            base: EventBase::new(),
            phase,
            points,
        }
    }

    /// Convenience constructor for a single-finger event.
    pub fn single(phase: TouchPhase, local_pos: Point) -> Self {
        Self::new(phase, vec![TouchPoint::new(0, local_pos)])
    }

    /// The first touch point, if any.
    pub fn first(&self) -> Option<&TouchPoint> {
        self.points.first()
    }
}

/// Events delivered to widgets.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Touch event.
    Touch(TouchEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Touch(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Touch(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}
