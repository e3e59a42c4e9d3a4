//! An inset track with a raised thumb that toggles a boolean.
//!
//! ## Usage
//!
//! Control an on/off setting. The checked value lives with the caller; the
//! switch reports the requested value through `on_checked_change`.

use derive_setters::Setters;
use neumorphic_ui::{
    CallbackWith, Color, Component, ComputedData, Constraint, Density, Dp, DrawScope,
    InputHandlerInput, LayoutDirection, Length, MeasureInput, Px, PxPosition, PxRect, PxSize,
    State,
};
use tracing::debug;

use crate::{
    alignment::Alignment,
    interaction::{InteractionState, handle_click},
    neumorphic::{NeumorphicDefaults, NeumorphicStyle, Orientation, neumorphic_surface},
    shape_def::Shape,
};

/// Defaults for [`SwitchArgs`].
pub struct SwitchDefaults;

impl SwitchDefaults {
    /// Track width.
    pub const WIDTH: Dp = Dp(64.0);
    /// Track height.
    pub const HEIGHT: Dp = Dp(32.0);
    /// Track shape.
    pub const TRACK_SHAPE: Shape = Shape::rounded_percent(50.0);
    /// Thumb shape.
    pub const THUMB_SHAPE: Shape = Shape::Circle;
    /// Content padding of the track and the thumb, also their shadow blur and
    /// offset.
    pub const CONTENT_PADDING: Dp = Dp(4.0);
    /// Thumb diameter.
    pub const THUMB_SIZE: Dp = Dp(24.0);
    /// Gap between the track edge and the thumb.
    pub const THUMB_INSET: Dp = Dp(4.0);
}

/// Arguments for [`Switch`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SwitchArgs {
    /// Current value.
    pub checked: bool,
    /// Track width.
    pub width: Dp,
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
    /// Gap between the track edge and the thumb.
    pub thumb_inset: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Called with the negated value on every click.
    #[setters(skip)]
    pub on_checked_change: Option<CallbackWith<bool>>,
    /// Press tracking. Supply one to keep a press alive across rebuilt trees.
    #[setters(strip_option)]
    pub interaction_state: Option<State<InteractionState>>,
}

impl Default for SwitchArgs {
    fn default() -> Self {
        Self {
            checked: false,
            width: SwitchDefaults::WIDTH,
            height: SwitchDefaults::HEIGHT,
            track_shape: SwitchDefaults::TRACK_SHAPE,
            thumb_shape: SwitchDefaults::THUMB_SHAPE,
            content_padding: SwitchDefaults::CONTENT_PADDING,
            thumb_size: SwitchDefaults::THUMB_SIZE,
            thumb_inset: SwitchDefaults::THUMB_INSET,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            on_checked_change: None,
            interaction_state: None,
        }
    }
}

impl SwitchArgs {
    /// Sets the change handler.
    pub fn on_checked_change<F>(mut self, on_checked_change: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_checked_change = Some(CallbackWith::new(on_checked_change));
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_checked_change_shared(
        mut self,
        on_checked_change: impl Into<CallbackWith<bool>>,
    ) -> Self {
        self.on_checked_change = Some(on_checked_change.into());
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

/// A toggle switch.
///
/// The thumb rests at the center-start of the track when unchecked and at the
/// center-end when checked.
pub struct Switch {
    args: SwitchArgs,
    interaction_state: State<InteractionState>,
}

impl Switch {
    /// Creates a switch.
    pub fn new(mut args: SwitchArgs) -> Self {
        let interaction_state = args.interaction_state.take().unwrap_or_default();
        Self {
            args,
            interaction_state,
        }
    }

    /// Where the thumb sits on a track of `size`.
    ///
    /// ```
    /// use neumorphic_components::switch::{Switch, SwitchArgs};
    /// use neumorphic_ui::{Density, LayoutDirection, Px, PxRect, PxSize};
    ///
    /// let track = PxSize::new(Px(64), Px(32));
    /// let off = Switch::new(SwitchArgs::default());
    /// let on = Switch::new(SwitchArgs::default().checked(true));
    /// assert_eq!(
    ///     off.thumb_rect(track, Density::ONE, LayoutDirection::Ltr),
    ///     PxRect::new(Px(4), Px(4), Px(24), Px(24))
    /// );
    /// assert_eq!(
    ///     on.thumb_rect(track, Density::ONE, LayoutDirection::Ltr),
    ///     PxRect::new(Px(36), Px(4), Px(24), Px(24))
    /// );
    /// ```
    pub fn thumb_rect(&self, size: PxSize, density: Density, direction: LayoutDirection) -> PxRect {
        let inset = self.args.thumb_inset.max(Dp::ZERO).to_px(density);
        let track = PxRect::from_position_size(PxPosition::ZERO, size).inset(inset);
        let thumb = self.args.thumb_size.max(Dp::ZERO).to_px(density);
        let thumb = PxSize::new(thumb, thumb);
        let alignment = if self.args.checked {
            Alignment::CenterEnd
        } else {
            Alignment::CenterStart
        };
        let offset = alignment.align(track.size(), thumb, direction);
        PxRect::from_position_size(track.position() + offset, thumb)
    }
}

impl Component for Switch {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(
            Length::Fixed(self.args.width),
            Length::Fixed(self.args.height),
            input.density,
        )
        .merge(&input.constraint);
        ComputedData::new(PxSize::new(
            constraint.width.resolve(Px::ZERO),
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
        let Some(on_checked_change) = &self.args.on_checked_change else {
            return;
        };
        let checked = self.args.checked;
        handle_click(input, &self.interaction_state, || {
            debug!(checked = !checked, "switch toggled");
            on_checked_change.call(!checked);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use neumorphic_ui::{CursorEvent, Frame};

    use super::*;

    #[test]
    fn thumb_mirrors_in_rtl() {
        let track = PxSize::new(Px(64), Px(32));
        let off = Switch::new(SwitchArgs::default());
        let on = Switch::new(SwitchArgs::default().checked(true));
        assert_eq!(off.thumb_rect(track, Density::ONE, LayoutDirection::Rtl).x, Px(36));
        assert_eq!(on.thumb_rect(track, Density::ONE, LayoutDirection::Rtl).x, Px(4));
    }

    #[test]
    fn measures_to_the_track_size() {
        let frame = Frame::new(PxSize::new(Px(400), Px(400)), Density(1.5));
        assert_eq!(
            frame.measure(&Switch::new(SwitchArgs::default())).size(),
            PxSize::new(Px(96), Px(48))
        );
    }

    #[test]
    fn click_requests_the_negated_value() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let switch = Switch::new(SwitchArgs::default().checked(true).on_checked_change(
            move |checked| {
                if let Ok(mut values) = sink.lock() {
                    values.push(checked);
                }
            },
        ));
        let frame = Frame::new(PxSize::new(Px(64), Px(32)), Density::ONE);
        let tap = PxPosition::new(Px(10), Px(10));
        let (rest, _) = frame.dispatch(
            &switch,
            vec![CursorEvent::pressed(tap), CursorEvent::released(tap)],
            Vec::new(),
        );
        assert!(rest.is_empty());
        assert_eq!(*received.lock().unwrap_or_else(|e| e.into_inner()), vec![false]);
    }

    #[test]
    fn switch_without_handler_lets_input_through() {
        let frame = Frame::new(PxSize::new(Px(64), Px(32)), Density::ONE);
        let tap = PxPosition::new(Px(10), Px(10));
        let events = vec![CursorEvent::pressed(tap), CursorEvent::released(tap)];
        let (rest, _) = frame.dispatch(
            &Switch::new(SwitchArgs::default()),
            events.clone(),
            Vec::new(),
        );
        assert_eq!(rest, events);
    }
}
