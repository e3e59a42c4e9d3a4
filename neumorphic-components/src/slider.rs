//! An inset track with a raised thumb that picks a value in `[0, 1]`.
//!
//! ## Usage
//!
//! Adjust a continuous value by dragging the thumb horizontally.

use derive_setters::Setters;
use neumorphic_ui::{
    CallbackWith, Color, Component, ComputedData, Constraint, Density, Dp, DrawScope,
    InputHandlerInput, LayoutDirection, Length, MeasureInput, Px, PxRect, PxSize, State,
};
use tracing::debug;

use crate::{
    alignment::Alignment,
    interaction::{InteractionState, handle_horizontal_drag},
    layout_utils::clamp_unit,
    neumorphic::{NeumorphicDefaults, NeumorphicStyle, Orientation, neumorphic_surface},
    shape_def::Shape,
};

/// Defaults for [`SliderArgs`].
pub struct SliderDefaults;

impl SliderDefaults {
    /// Track height.
    pub const HEIGHT: Dp = Dp(32.0);
    /// Track shape.
    pub const TRACK_SHAPE: Shape = Shape::rounded_percent(50.0);
    /// Thumb shape.
    pub const THUMB_SHAPE: Shape = Shape::Circle;
    /// Content padding of the track and the thumb, also their shadow blur and
    /// offset. The thumb keeps this distance from the track ends.
    pub const CONTENT_PADDING: Dp = Dp(4.0);
    /// Thumb diameter.
    pub const THUMB_SIZE: Dp = Dp(24.0);
}

/// Arguments for [`Slider`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SliderArgs {
    /// Current value. Clamped to `[0, 1]` before use.
    pub value: f32,
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Track height.
    pub height: Dp,
    /// Track shape.
    pub track_shape: Shape,
    /// Thumb shape.
    pub thumb_shape: Shape,
    /// Content padding of the track and the thumb.
    pub content_padding: Dp,
    /// Thumb diameter.
    pub thumb_size: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Called with the new value on every drag step.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<f32>>,
    /// Drag tracking. Supply one to keep a drag alive across rebuilt trees.
    #[setters(strip_option)]
    pub interaction_state: Option<State<InteractionState>>,
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            width: Length::Fill,
            height: SliderDefaults::HEIGHT,
            track_shape: SliderDefaults::TRACK_SHAPE,
            thumb_shape: SliderDefaults::THUMB_SHAPE,
            content_padding: SliderDefaults::CONTENT_PADDING,
            thumb_size: SliderDefaults::THUMB_SIZE,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            on_value_change: None,
            interaction_state: None,
        }
    }
}

impl SliderArgs {
    /// Sets the change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(on_value_change));
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_value_change_shared(mut self, on_value_change: impl Into<CallbackWith<f32>>) -> Self {
        self.on_value_change = Some(on_value_change.into());
        self
    }

    fn style(&self, shape: &Shape, orientation: Orientation) -> NeumorphicStyle {
        NeumorphicStyle::default()
            .shape(shape.clone())
            .light_color(self.light_color)
            .shadow_color(self.shadow_color)
            .content_padding(self.content_padding)
            .orientation(orientation)
    }
}

/// A horizontal slider.
///
/// The thumb travels between the two track ends, keeping the content padding
/// from each. Dragging by `dx` pixels changes the value by `dx / width`.
pub struct Slider {
    args: SliderArgs,
    interaction_state: State<InteractionState>,
}

impl Slider {
    /// Creates a slider.
    pub fn new(mut args: SliderArgs) -> Self {
        let interaction_state = args.interaction_state.take().unwrap_or_default();
        Self {
            args,
            interaction_state,
        }
    }

    /// The clamped value.
    pub fn value(&self) -> f32 {
        clamp_unit(self.args.value)
    }

    /// Where the thumb sits on a track of `size`.
    ///
    /// ```
    /// use neumorphic_components::slider::{Slider, SliderArgs};
    /// use neumorphic_ui::{Density, LayoutDirection, Px, PxRect, PxSize};
    ///
    /// let track = PxSize::new(Px(232), Px(32));
    /// let half = Slider::new(SliderArgs::default().value(0.5));
    /// assert_eq!(
    ///     half.thumb_rect(track, Density::ONE, LayoutDirection::Ltr),
    ///     PxRect::new(Px(104), Px(4), Px(24), Px(24))
    /// );
    /// ```
    pub fn thumb_rect(&self, size: PxSize, density: Density, direction: LayoutDirection) -> PxRect {
        let padding = self.args.content_padding.max(Dp::ZERO).to_px(density);
        let thumb = self.args.thumb_size.max(Dp::ZERO).to_px(density);
        let travel = (size.width - thumb - padding * 2).max(Px::ZERO);
        let start = padding + travel.mul_f32(self.value());
        let x = match direction {
            LayoutDirection::Ltr => start,
            LayoutDirection::Rtl => size.width - start - thumb,
        };
        let y = Alignment::CenterStart
            .align(size, PxSize::new(thumb, thumb), direction)
            .y;
        PxRect::new(x, y, thumb, thumb)
    }
}

impl Component for Slider {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(
            self.args.width,
            Length::Fixed(self.args.height),
            input.density,
        )
        .merge(&input.constraint);
        let thumb = self.args.thumb_size.max(Dp::ZERO).to_px(input.density);
        let padding = self.args.content_padding.max(Dp::ZERO).to_px(input.density);
        ComputedData::new(PxSize::new(
            constraint.width.resolve(thumb + padding * 2),
            constraint.height.resolve(Px::ZERO),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        let track = self.args.style(&self.args.track_shape, Orientation::Inset);
        neumorphic_surface(scope, &track, Alignment::TopStart, PxSize::ZERO);

        let thumb_rect = self.thumb_rect(scope.size(), scope.density(), scope.layout_direction());
        let thumb = self.args.style(&self.args.thumb_shape, Orientation::Raised);
        scope.child(thumb_rect, |scope| {
            neumorphic_surface(scope, &thumb, Alignment::Center, PxSize::ZERO);
        });
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let Some(on_value_change) = &self.args.on_value_change else {
            return;
        };
        let width = input.computed_data.width.to_f32();
        if width <= 0.0 {
            return;
        }
        let direction = match input.layout_direction {
            LayoutDirection::Ltr => 1.0,
            LayoutDirection::Rtl => -1.0,
        };
        let mut value = self.value();
        handle_horizontal_drag(input, &self.interaction_state, |dx| {
            value = clamp_unit(value + direction * dx.to_f32() / width);
            debug!(value, "slider dragged");
            on_value_change.call(value);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use neumorphic_ui::{CursorEvent, Frame, PxPosition};

    use super::*;

    const TRACK: PxSize = PxSize::new(Px(232), Px(32));

    fn thumb_x(value: f32, direction: LayoutDirection) -> Px {
        Slider::new(SliderArgs::default().value(value))
            .thumb_rect(TRACK, Density::ONE, direction)
            .x
    }

    #[test]
    fn thumb_stays_inside_the_track() {
        assert_eq!(thumb_x(0.0, LayoutDirection::Ltr), Px(4));
        assert_eq!(thumb_x(1.0, LayoutDirection::Ltr), Px(204));
        assert_eq!(thumb_x(0.0, LayoutDirection::Rtl), Px(204));
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(thumb_x(-0.3, LayoutDirection::Ltr), thumb_x(0.0, LayoutDirection::Ltr));
        assert_eq!(thumb_x(1.7, LayoutDirection::Ltr), thumb_x(1.0, LayoutDirection::Ltr));
    }

    fn drag(value: f32, direction: LayoutDirection, events: Vec<CursorEvent>) -> Vec<f32> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let slider = Slider::new(SliderArgs::default().value(value).on_value_change(move |value| {
            if let Ok(mut values) = sink.lock() {
                values.push(value);
            }
        }));
        let frame = Frame::new(PxSize::new(Px(200), Px(32)), Density::ONE)
            .with_layout_direction(direction);
        frame.dispatch(&slider, events, Vec::new());
        received.lock().map(|values| values.clone()).unwrap_or_default()
    }

    #[test]
    fn drag_moves_the_value_by_width_fractions() {
        let at = |x| PxPosition::new(Px(x), Px(16));
        let values = drag(
            0.5,
            LayoutDirection::Ltr,
            vec![
                CursorEvent::pressed(at(100)),
                CursorEvent::moved(at(120)),
                CursorEvent::moved(at(300)),
                CursorEvent::released(at(300)),
            ],
        );
        assert_eq!(values.len(), 2);
        assert!((values[0] - 0.6).abs() < 1e-6);
        assert_eq!(values[1], 1.0);

        let rtl = drag(
            0.5,
            LayoutDirection::Rtl,
            vec![CursorEvent::pressed(at(100)), CursorEvent::moved(at(120))],
        );
        assert!((rtl[0] - 0.4).abs() < 1e-6);
    }
}
