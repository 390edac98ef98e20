// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that slides its content in and out according to a
//! banner [`Placement`] and a progress value.
//!
//! The content is laid out with unbounded height, so it always gets its
//! natural size and is never squeezed. The wrapper then sizes itself to the
//! visible slice, offsets the content, and clips drawing to its own bounds.
//! It also reports raw pointer activity over the drawn part of the content,
//! which the banner turns into taps and swipes.

use crate::ui::banner::Placement;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Pointer activity reported by a [`Slide`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    /// Pressed inside the visible slice.
    Pressed(Point),
    /// Moved while pressed, anywhere in the window.
    Moved(Point),
    /// Released after a press.
    Released(Point),
    /// The press ended without a usable position (cursor left, finger lost).
    Lost,
}

#[derive(Debug, Default)]
struct State {
    pressed: bool,
}

pub struct Slide<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    placement: Placement,
    progress: f32,
    on_pointer: Option<Box<dyn Fn(Pointer) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        placement: Placement,
        progress: f32,
    ) -> Self {
        Self {
            content: content.into(),
            placement,
            progress,
            on_pointer: None,
        }
    }

    /// Sets the message produced for pointer activity over the banner.
    #[must_use]
    pub fn on_pointer(mut self, on_pointer: impl Fn(Pointer) -> Message + 'a) -> Self {
        self.on_pointer = Some(Box::new(on_pointer));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let width = limits.max().width;
        let content_limits = layout::Limits::new(Size::ZERO, Size::new(width, f32::INFINITY));
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits);

        arrange(&self.placement, self.progress, width, content)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                visible_cursor(cursor, Some(clip)),
                &clip,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let area = hit_area(layout);

        if let Some(on_pointer) = &self.on_pointer {
            let state = tree.state.downcast_mut::<State>();
            if let Some(pointer) = pointer_event(event, cursor, area, state) {
                shell.publish(on_pointer(pointer));
                if matches!(pointer, Pointer::Pressed(_)) {
                    shell.capture_event();
                }
            }
        }

        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            visible_cursor(cursor, area),
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let area = hit_area(layout);
        if self.on_pointer.is_some() && area.is_some_and(|area| cursor.is_over(area)) {
            return mouse::Interaction::Pointer;
        }

        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::None;
        };

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            visible_cursor(cursor, area),
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], content_layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;

        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

/// Sizes the slide to the visible slice and offsets the content within it.
fn arrange(
    placement: &Placement,
    progress: f32,
    width: f32,
    content: layout::Node,
) -> layout::Node {
    let content_height = content.size().height;
    let visible_height = placement.visible_height(progress, content_height);
    let offset = placement.content_offset(progress, content_height);

    layout::Node::with_children(
        Size::new(width, visible_height),
        vec![content.move_to(Point::new(0.0, offset))],
    )
}

/// The part of the window where the content is actually drawn.
///
/// An offset banner keeps its full height while its content sits partly or
/// wholly above the slice, so the slice bounds alone are not enough.
fn hit_area(layout: Layout<'_>) -> Option<Rectangle> {
    let content = layout.children().next()?.bounds();
    layout.bounds().intersection(&content)
}

/// Hides the cursor from content outside the drawn area.
fn visible_cursor(cursor: mouse::Cursor, area: Option<Rectangle>) -> mouse::Cursor {
    match area {
        Some(area) if cursor.is_over(area) => cursor,
        _ => mouse::Cursor::Unavailable,
    }
}

/// Translates a raw event into pointer activity, tracking the press state.
///
/// Presses only count inside `area`; once pressed, moves and releases are
/// reported anywhere.
fn pointer_event(
    event: &Event,
    cursor: mouse::Cursor,
    area: Option<Rectangle>,
    state: &mut State,
) -> Option<Pointer> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_over(area?)?;
            state.pressed = true;
            Some(Pointer::Pressed(position))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. })
            if area.is_some_and(|area| area.contains(*position)) =>
        {
            state.pressed = true;
            Some(Pointer::Pressed(*position))
        }
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. })
            if state.pressed =>
        {
            Some(Pointer::Moved(*position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.pressed => {
            state.pressed = false;
            Some(cursor.position().map_or(Pointer::Lost, Pointer::Released))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) if state.pressed => {
            state.pressed = false;
            Some(Pointer::Released(*position))
        }
        Event::Mouse(mouse::Event::CursorLeft) | Event::Touch(touch::Event::FingerLost { .. })
            if state.pressed =>
        {
            state.pressed = false;
            Some(Pointer::Lost)
        }
        _ => None,
    }
}
