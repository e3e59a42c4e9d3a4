use neumorphic_components::{
    alignment::Alignment,
    column::{Column, ColumnArgs},
    inner_shadow::{InnerShadowArgs, inner_shadow},
    neumorphic::{NeumorphicStyle, neumorphic_surface},
    progress::{ProgressBar, ProgressBarArgs},
    shape_def::Shape,
    slider::{Slider, SliderArgs},
    switch::{Switch, SwitchArgs},
    text::Text,
    theme::NeumorphicColors,
};
use neumorphic_ui::{
    Canvas, Color, CursorEvent, Density, Dp, DrawScope, Frame, LayoutDirection, Px, PxPosition,
    PxRect, PxSize, State, renderer::SoftwareCanvas,
};

fn surface_canvas(width: u32, height: u32) -> SoftwareCanvas {
    SoftwareCanvas::with_background(width, height, NeumorphicColors::DEFAULT.surface)
}

fn render_switch(checked: bool) -> SoftwareCanvas {
    let frame = Frame::new(PxSize::new(Px(64), Px(32)), Density::ONE);
    let mut canvas = surface_canvas(64, 32);
    frame.render(&Switch::new(SwitchArgs::default().checked(checked)), &mut canvas);
    canvas
}

#[test]
fn switch_only_moves_its_thumb() {
    let off = render_switch(false);
    let on = render_switch(true);
    let thumbs = [
        PxRect::new(Px(4), Px(4), Px(24), Px(24)),
        PxRect::new(Px(36), Px(4), Px(24), Px(24)),
    ];
    let mut compared = 0;
    for y in 0..32 {
        for x in 0..64 {
            let position = PxPosition::new(Px(x), Px(y));
            if thumbs.iter().any(|thumb| thumb.contains(position)) {
                continue;
            }
            assert_eq!(
                off.pixmap().color_at(x as u32, y as u32),
                on.pixmap().color_at(x as u32, y as u32),
                "pixel ({x}, {y}) differs"
            );
            compared += 1;
        }
    }
    assert!(compared > 0);
    assert_ne!(off.pixmap(), on.pixmap());
}

#[test]
fn out_of_range_values_clamp() {
    let track = PxSize::new(Px(200), Px(32));
    let slider_x = |value| {
        Slider::new(SliderArgs::default().value(value))
            .thumb_rect(track, Density::ONE, LayoutDirection::Ltr)
            .x
    };
    assert_eq!(slider_x(-0.3), slider_x(0.0));
    assert_eq!(slider_x(1.7), slider_x(1.0));

    let fill = |progress| {
        ProgressBar::new(ProgressBarArgs::default().progress(progress))
            .fill_rect(track, LayoutDirection::Ltr)
            .width
    };
    assert_eq!(fill(-0.3), Px(0));
    assert_eq!(fill(1.7), Px(200));
}

#[test]
fn zero_size_surface_draws_nothing() {
    let mut canvas = surface_canvas(16, 16);
    let before = canvas.pixmap().clone();
    let save_count = canvas.save_count();
    {
        let mut scope = DrawScope::new(
            &mut canvas,
            PxSize::ZERO,
            Density::ONE,
            LayoutDirection::Ltr,
        );
        neumorphic_surface(
            &mut scope,
            &NeumorphicStyle::raised().background(Color::WHITE),
            Alignment::Center,
            PxSize::ZERO,
        );
    }
    assert_eq!(canvas.save_count(), save_count);
    assert_eq!(canvas.pixmap(), &before);
}

#[test]
fn shadow_stays_inside_the_shape_footprint() {
    let mut canvas = surface_canvas(100, 100);
    let before = canvas.pixmap().clone();
    let footprint = PxRect::new(Px(20), Px(20), Px(40), Px(40));
    {
        let mut scope = DrawScope::new(
            &mut canvas,
            PxSize::new(Px(100), Px(100)),
            Density::ONE,
            LayoutDirection::Ltr,
        );
        scope.child(footprint, |scope| {
            inner_shadow(
                scope,
                &Shape::rounded(Dp(8.0)),
                &InnerShadowArgs::default().color(Color::DARK_GRAY).blur(Dp(6.0)),
            );
        });
    }
    for y in 0..100u32 {
        for x in 0..100u32 {
            if footprint.contains(PxPosition::new(Px(x as i32), Px(y as i32))) {
                continue;
            }
            assert_eq!(canvas.pixmap().color_at(x, y), before.color_at(x, y));
        }
    }
    assert_ne!(canvas.pixmap(), &before);
}

#[test]
fn offset_shadow_hugs_the_top_and_left_edges() {
    let mut canvas = SoftwareCanvas::new(100, 100);
    {
        let mut scope = DrawScope::new(
            &mut canvas,
            PxSize::new(Px(100), Px(100)),
            Density::ONE,
            LayoutDirection::Ltr,
        );
        inner_shadow(
            &mut scope,
            &Shape::Rectangle,
            &InnerShadowArgs::default()
                .color(Color::GRAY)
                .blur(Dp(4.0))
                .offset_x(Dp(2.0))
                .offset_y(Dp(2.0)),
        );
    }
    let alpha = |x, y| canvas.pixmap().alpha_at(x, y);
    assert!(alpha(1, 50) > 0.5, "left edge {}", alpha(1, 50));
    assert!(alpha(50, 1) > 0.5, "top edge {}", alpha(50, 1));
    assert!(alpha(98, 50) < 0.2, "right edge {}", alpha(98, 50));
    assert!(alpha(50, 98) < 0.2, "bottom edge {}", alpha(50, 98));
    assert!(alpha(1, 50) > alpha(98, 50) * 3.0);
    assert!(alpha(50, 50) < 0.01);
}

#[test]
fn raised_and_inset_are_color_swaps() {
    let a = Color::from_rgb_u8(0xFF, 0xFF, 0xFF);
    let b = Color::from_rgb_u8(0xA3, 0xB1, 0xC6);
    let paint = |style: NeumorphicStyle| {
        let mut canvas = surface_canvas(80, 60);
        {
            let mut scope = DrawScope::new(
                &mut canvas,
                PxSize::new(Px(80), Px(60)),
                Density::ONE,
                LayoutDirection::Ltr,
            );
            neumorphic_surface(&mut scope, &style, Alignment::TopStart, PxSize::ZERO);
        }
        canvas.into_pixmap()
    };
    let raised = paint(NeumorphicStyle::raised().light_color(a).shadow_color(b));
    let inset = paint(NeumorphicStyle::inset().light_color(b).shadow_color(a));
    assert_eq!(raised, inset);
    assert_eq!(
        raised,
        paint(NeumorphicStyle::raised().light_color(a).shadow_color(b))
    );
}

#[test]
fn tapping_a_switch_in_a_column_updates_caller_state() {
    let checked = State::new(false);
    let build = || {
        let sink = checked.clone();
        Column::new(ColumnArgs::default().spacing(Dp(8.0)).padding(Dp(20.0)))
            .child(Text::new("Switches"))
            .child(Switch::new(
                SwitchArgs::default()
                    .checked(checked.get())
                    .on_checked_change(move |value| sink.set(value)),
            ))
    };
    let frame = Frame::new(PxSize::new(Px(200), Px(200)), Density::ONE);

    // Padding 20, text line 20, spacing 8: the switch starts at y = 48.
    let tap = PxPosition::new(Px(30), Px(60));
    let taps = || vec![CursorEvent::pressed(tap), CursorEvent::released(tap)];

    let (rest, _) = frame.dispatch(&build(), taps(), Vec::new());
    assert!(rest.is_empty());
    assert!(checked.get());

    frame.dispatch(&build(), taps(), Vec::new());
    assert!(!checked.get());
}
