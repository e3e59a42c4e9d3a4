//! The component showcase: one titled section per component family.

use closure::closure;
use neumorphic_components::{
    alignment::{Alignment, CrossAxisAlignment},
    button::{Button, ButtonArgs},
    card::{Card, CardArgs},
    column::{Column, ColumnArgs},
    floating_action_button::{FloatingActionButton, FloatingActionButtonArgs},
    icon::{Icon, IconArgs},
    neumorphic::{NeumorphicBoxArgs, neumorphic_down, neumorphic_up},
    popup::{Popup, PopupArgs},
    progress::{ProgressBar, ProgressBarArgs},
    shape_def::{CornerSize, Shape},
    slider::{Slider, SliderArgs},
    switch::{Switch, SwitchArgs},
    text::{Text, TextArgs},
    text_field::{TextField, TextFieldArgs},
    theme::NeumorphicColors,
};
use neumorphic_ui::{Color, Component, Dp, Length, Px};

use crate::{
    anchor::Anchor,
    app_state::{AppState, ControlState, TextFieldState},
    screen::Screen,
};

pub struct ShowcaseDefaults;

impl ShowcaseDefaults {
    pub const SCREEN_PADDING: Dp = Dp(20.0);
    pub const SECTION_SPACING: Dp = Dp(24.0);
    pub const HEADER_SPACING: Dp = Dp(8.0);
    pub const CONTENT_SPACING: Dp = Dp(12.0);
    pub const TITLE_SIZE: Dp = Dp(22.0);
    pub const DESCRIPTION_SIZE: Dp = Dp(14.0);
    pub const BACKGROUND: Color = NeumorphicColors::DEFAULT.surface;
}

/// A titled showcase entry.
pub struct ComponentDemo {
    pub title: &'static str,
    pub description: &'static str,
    pub content: Box<dyn Component>,
}

impl ComponentDemo {
    fn new(
        title: &'static str,
        description: &'static str,
        content: impl Component + 'static,
    ) -> Self {
        Self {
            title,
            description,
            content: Box::new(content),
        }
    }

    fn into_section(self) -> Column {
        let mut section = Column::new(
            ColumnArgs::default()
                .width(Length::Fill)
                .spacing(ShowcaseDefaults::HEADER_SPACING),
        )
        .child(Text::new(
            TextArgs::default()
                .text(self.title)
                .size(ShowcaseDefaults::TITLE_SIZE)
                .bold(true),
        ))
        .child(Text::new(
            TextArgs::default()
                .text(self.description)
                .size(ShowcaseDefaults::DESCRIPTION_SIZE)
                .color(Color::GRAY)
                .width(Length::Fill),
        ));
        section.push(self.content);
        section
    }
}

fn content_column() -> Column {
    Column::new(
        ColumnArgs::default()
            .width(Length::Fill)
            .spacing(ShowcaseDefaults::CONTENT_SPACING),
    )
}

fn title_and_body(title: &str, body: &str) -> Column {
    Column::new(ColumnArgs::default().width(Length::Fill).spacing(Dp(4.0)))
        .child(Text::new(TextArgs::default().text(title).bold(true)))
        .child(Text::new(
            TextArgs::default()
                .text(body)
                .size(ShowcaseDefaults::DESCRIPTION_SIZE)
                .width(Length::Fill),
        ))
}

fn corners(top_start: Dp, top_end: Dp, bottom_end: Dp, bottom_start: Dp) -> Shape {
    Shape::RoundedCorner {
        top_start: CornerSize::Dp(top_start),
        top_end: CornerSize::Dp(top_end),
        bottom_end: CornerSize::Dp(bottom_end),
        bottom_start: CornerSize::Dp(bottom_start),
    }
}

fn labeled_box(raised: bool, shape: Shape, padding: Option<Dp>, label: &str) -> impl Component {
    let mut args = NeumorphicBoxArgs::default()
        .width(Length::Fill)
        .height(Dp(100.0))
        .shape(shape)
        .content_alignment(Alignment::Center);
    if let Some(padding) = padding {
        args = args.content_padding(padding);
    }
    let surface = if raised {
        neumorphic_up(args)
    } else {
        neumorphic_down(args)
    };
    surface.child(Text::new(label))
}

fn switch(state: &ControlState<bool>, track_shape: Shape) -> Switch {
    Switch::new(
        SwitchArgs::default()
            .checked(state.value.get())
            .track_shape(track_shape)
            .on_checked_change(closure!(clone state.value, |checked| value.set(checked)))
            .interaction_state(state.interaction.clone()),
    )
}

fn slider(state: &ControlState<f32>, track_shape: Shape) -> Slider {
    Slider::new(
        SliderArgs::default()
            .value(state.value.get())
            .track_shape(track_shape)
            .on_value_change(closure!(clone state.value, |new_value| value.set(new_value)))
            .interaction_state(state.interaction.clone()),
    )
}

fn text_field(state: &TextFieldState, shape: Shape) -> TextField {
    TextField::new(
        TextFieldArgs::default()
            .value(state.value.get())
            .placeholder("Type something")
            .shape(shape)
            .on_value_change(closure!(clone state.value, |text| value.set(text)))
            .editor_state(state.editor.clone())
            .interaction_state(state.interaction.clone()),
    )
}

/// Builds every showcase entry from the current state.
pub fn component_demos(state: &AppState) -> Vec<ComponentDemo> {
    vec![
        ComponentDemo::new(
            "Basic Shapes",
            "Neumorphic boxes with rounded corners in raised and inset styles.",
            content_column()
                .child(labeled_box(true, Shape::rounded(Dp(20.0)), None, "UP"))
                .child(labeled_box(false, Shape::rounded(Dp(20.0)), None, "Down")),
        ),
        ComponentDemo::new(
            "Circular Shapes",
            "Circular neumorphic boxes in raised and inset styles.",
            content_column()
                .child(labeled_box(true, Shape::Circle, None, "UP"))
                .child(labeled_box(false, Shape::Circle, None, "Down")),
        ),
        ComponentDemo::new(
            "Buttons",
            "Interactive neumorphic buttons with rounded and circular shapes.",
            content_column()
                .child(
                    Button::new(
                        ButtonArgs::default()
                            .width(Length::Fill)
                            .height(Dp(48.0))
                            .shape(Shape::rounded(Dp(12.0)))
                            .content_padding(Dp(12.0))
                            .on_click(closure!(clone state.button_clicks, || {
                                button_clicks.with_mut(|clicks| *clicks += 1);
                            })),
                    )
                    .child(Text::new("Button UP")),
                )
                .child(
                    Button::new(
                        ButtonArgs::default()
                            .width(Length::Fill)
                            .height(Dp(48.0))
                            .shape(Shape::Circle)
                            .content_padding(Dp(12.0))
                            .on_click(closure!(clone state.button_clicks, || {
                                button_clicks.with_mut(|clicks| *clicks += 1);
                            })),
                    )
                    .child(Text::new("Circle")),
                ),
        ),
        ComponentDemo::new(
            "Cards",
            "Neumorphic cards with standard and asymmetric corner designs.",
            content_column()
                .child(
                    Card::new(
                        CardArgs::default()
                            .width(Length::Fill)
                            .height(Dp(120.0))
                            .shape(Shape::rounded(Dp(16.0))),
                    )
                    .child(title_and_body(
                        "Card Title",
                        "Neumorphic card content with rounded corners.",
                    )),
                )
                .child(
                    Card::new(
                        CardArgs::default()
                            .width(Length::Fill)
                            .height(Dp(120.0))
                            .shape(corners(Dp(24.0), Dp::ZERO, Dp(24.0), Dp::ZERO)),
                    )
                    .child(title_and_body(
                        "Asymmetric Card",
                        "Card with asymmetric corners.",
                    )),
                ),
        ),
        ComponentDemo::new(
            "Switches",
            "Toggle switches with rounded and circular designs.",
            content_column()
                .child(Anchor::new(
                    state.anchors.switch.clone(),
                    switch(&state.switch, Shape::rounded_percent(50.0)),
                ))
                .child(switch(&state.circle_switch, Shape::Circle)),
        ),
        ComponentDemo::new(
            "Progress Bars",
            "Horizontal progress bars with different corner radii.",
            content_column()
                .child(ProgressBar::new(
                    ProgressBarArgs::default()
                        .progress(0.3)
                        .shape(Shape::rounded_percent(50.0)),
                ))
                .child(ProgressBar::new(
                    ProgressBarArgs::default()
                        .progress(0.7)
                        .shape(Shape::rounded(Dp(8.0))),
                )),
        ),
        ComponentDemo::new(
            "Sliders",
            "Interactive sliders with rounded and circular tracks.",
            content_column()
                .child(Anchor::new(
                    state.anchors.slider.clone(),
                    slider(&state.slider, Shape::rounded_percent(50.0)),
                ))
                .child(slider(&state.circle_slider, Shape::Circle)),
        ),
        ComponentDemo::new(
            "Text Fields",
            "Input fields with rounded and circular shapes.",
            content_column()
                .child(Anchor::new(
                    state.anchors.text_field.clone(),
                    text_field(&state.text_field, Shape::rounded(Dp(12.0))),
                ))
                .child(text_field(&state.circle_text_field, Shape::Circle)),
        ),
        ComponentDemo::new(
            "Floating Action Button",
            "Neumorphic FAB with a circular shape and icon.",
            Column::new(
                ColumnArgs::default()
                    .width(Length::Fill)
                    .spacing(ShowcaseDefaults::CONTENT_SPACING)
                    .cross_axis_alignment(CrossAxisAlignment::Center),
            )
            .child(
                FloatingActionButton::new(FloatingActionButtonArgs::default().on_click(
                    closure!(clone state.button_clicks, || {
                        button_clicks.with_mut(|clicks| *clicks += 1);
                    }),
                ))
                .child(Icon::new(IconArgs::default())),
            ),
        ),
        ComponentDemo::new(
            "Popup",
            "Neumorphic popup with rounded corners and dismiss action.",
            content_column().child(
                Popup::new(PopupArgs::default().on_dismiss(
                    closure!(clone state.popup_dismissals, || {
                        popup_dismissals.with_mut(|count| *count += 1);
                    }),
                ))
                .child(title_and_body(
                    "Popup Title",
                    "This is a neumorphic popup with dismiss action.",
                )),
            ),
        ),
        ComponentDemo::new(
            "Asymmetric Shapes",
            "Neumorphic boxes with non-uniform corner radii.",
            content_column()
                .child(labeled_box(
                    true,
                    corners(Dp(24.0), Dp::ZERO, Dp(24.0), Dp::ZERO),
                    Some(Dp(12.0)),
                    "Asymmetric",
                ))
                .child(labeled_box(
                    false,
                    corners(Dp::ZERO, Dp(24.0), Dp::ZERO, Dp(24.0)),
                    Some(Dp(12.0)),
                    "Opposite",
                )),
        ),
    ]
}

/// Stacks every section in a padded column.
pub fn showcase(state: &AppState) -> Column {
    let mut column = Column::new(
        ColumnArgs::default()
            .width(Length::Fill)
            .spacing(ShowcaseDefaults::SECTION_SPACING)
            .padding(ShowcaseDefaults::SCREEN_PADDING),
    );
    for demo in component_demos(state) {
        column = column.child(demo.into_section());
    }
    column
}

/// The whole screen, scrolled down by `scroll` pixels.
pub fn showcase_screen(state: &AppState, scroll: Px) -> Screen {
    Screen::new(showcase(state))
        .scroll(scroll)
        .background(ShowcaseDefaults::BACKGROUND)
}

#[cfg(test)]
mod tests {
    use neumorphic_ui::{Density, Frame, LayoutDirection, PxSize};

    use super::*;
    use crate::anchor::LayoutCanvas;

    #[test]
    fn sections_follow_the_catalogue_order() {
        let titles: Vec<_> = component_demos(&AppState::new())
            .iter()
            .map(|demo| demo.title)
            .collect();
        assert_eq!(
            titles,
            [
                "Basic Shapes",
                "Circular Shapes",
                "Buttons",
                "Cards",
                "Switches",
                "Progress Bars",
                "Sliders",
                "Text Fields",
                "Floating Action Button",
                "Popup",
                "Asymmetric Shapes",
            ]
        );
    }

    #[test]
    fn interactive_controls_are_anchored_in_order() {
        let state = AppState::new();
        let screen = showcase_screen(&state, Px::ZERO);
        let width = Px(360);
        let height = screen
            .content_size(width, Density::ONE, LayoutDirection::Ltr)
            .height;
        Frame::new(PxSize::new(width, height), Density::ONE)
            .render(&screen, &mut LayoutCanvas::new());

        let switch = state.anchors.switch.get();
        let slider = state.anchors.slider.get();
        let text_field = state.anchors.text_field.get();
        let (Some(switch), Some(slider), Some(text_field)) = (switch, slider, text_field) else {
            panic!("every scripted control is recorded");
        };
        assert_eq!(switch.size(), PxSize::new(Px(64), Px(32)));
        assert_eq!(switch.x, Px(20));
        assert!(switch.y < slider.y && slider.y < text_field.y);
        assert_eq!(slider.width, Px(320));
        assert!(text_field.bottom() < height);
    }
}
