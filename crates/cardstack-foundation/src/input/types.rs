use cardstack_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Changed,
    Ended,
    Cancelled,
}

/// One drag sample from the host's gesture detector.
///
/// `translation` is relative to where the drag started. `predicted_end` is
/// the platform's ballistic estimate of where the drag would come to rest,
/// only meaningful on [`DragPhase::Ended`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub translation: Point,
    pub predicted_end: Option<Point>,
}

impl DragEvent {
    pub fn changed(translation: Point) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
            predicted_end: None,
        }
    }

    pub fn ended(translation: Point) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation,
            predicted_end: None,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            phase: DragPhase::Cancelled,
            translation: Point::ZERO,
            predicted_end: None,
        }
    }

    /// Attach the platform's predicted end translation.
    pub fn with_predicted_end(mut self, predicted_end: Point) -> Self {
        self.predicted_end = Some(predicted_end);
        self
    }
}

/// Everything the gesture layer can report about the top card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Drag(DragEvent),
    Tap,
}

impl From<DragEvent> for GestureEvent {
    fn from(event: DragEvent) -> Self {
        GestureEvent::Drag(event)
    }
}
