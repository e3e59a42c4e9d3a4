//! Driving a component tree for one frame.

use tracing::debug;

use crate::{
    ComputedData, Constraint, Density, DimensionValue, PxSize,
    cursor::{CursorEvent, InputHandlerInput, TextEdit},
    layout::{Component, LayoutDirection, MeasureInput},
    renderer::{Canvas, DrawScope},
};

/// The surface a component tree is laid out on.
///
/// The root component is offered the whole surface: both axes are `Fill`
/// bounded by the surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Surface size in pixels.
    pub size: PxSize,
    /// Surface density.
    pub density: Density,
    /// Reading direction.
    pub layout_direction: LayoutDirection,
}

impl Frame {
    /// A left-to-right frame.
    pub fn new(size: PxSize, density: Density) -> Self {
        Self {
            size,
            density,
            layout_direction: LayoutDirection::Ltr,
        }
    }

    /// Sets the reading direction.
    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    /// The constraint offered to the root component.
    pub fn constraint(&self) -> Constraint {
        Constraint::new(
            DimensionValue::Fill {
                min: None,
                max: Some(self.size.width),
            },
            DimensionValue::Fill {
                min: None,
                max: Some(self.size.height),
            },
        )
    }

    fn root_input(&self) -> MeasureInput {
        MeasureInput::new(self.constraint(), self.density, self.layout_direction)
    }

    /// Measures the root component.
    pub fn measure(&self, root: &dyn Component) -> ComputedData {
        root.measure(&self.root_input())
    }

    /// Measures and records `root` onto `canvas`.
    pub fn render(&self, root: &dyn Component, canvas: &mut dyn Canvas) -> ComputedData {
        let computed = self.measure(root);
        debug!(
            width = computed.width.0,
            height = computed.height.0,
            density = self.density.0,
            "recording frame"
        );
        let mut scope = DrawScope::new(
            canvas,
            computed.size(),
            self.density,
            self.layout_direction,
        );
        root.record(&mut scope);
        computed
    }

    /// Delivers input to `root`. Returns the events nothing consumed.
    pub fn dispatch(
        &self,
        root: &dyn Component,
        mut cursor_events: Vec<CursorEvent>,
        mut text_edits: Vec<TextEdit>,
    ) -> (Vec<CursorEvent>, Vec<TextEdit>) {
        let computed = self.measure(root);
        debug!(
            cursor_events = cursor_events.len(),
            text_edits = text_edits.len(),
            "dispatching input"
        );
        {
            let mut input = InputHandlerInput::new(
                computed,
                self.density,
                self.layout_direction,
                &mut cursor_events,
                &mut text_edits,
            );
            root.handle_input(&mut input);
        }
        (cursor_events, text_edits)
    }
}
