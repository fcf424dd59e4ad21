/// Input events the table understands, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Press: starts charging a shot.
    PointerDown { x: f32, y: f32 },
    /// Release: fires the charged shot away from this point.
    PointerUp { x: f32, y: f32 },
    /// Aim target moved.
    PointerMove { x: f32, y: f32 },
    /// Page UI event (restart button, mode switch). `kind` picks the meaning.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Input buffered between frames, handed to one fixed step and then cleared.
///
/// A run of pointer moves collapses to its last position: only where the
/// pointer ended up matters for aiming, and a high-rate mouse would
/// otherwise flood the queue between two frames. Presses, releases and UI
/// events are kept as they arrived.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        if let (InputEvent::PointerMove { .. }, Some(InputEvent::PointerMove { .. })) =
            (event, self.events.last())
        {
            self.events.pop();
        }
        self.events.push(event);
    }

    /// Events in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Forget everything, once a step has consumed it.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
