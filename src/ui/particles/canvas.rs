// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing a [`ParticleField`] and reporting pointer and
//! size changes back to it.

use super::ParticleField;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Changes the field must be told about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Resized(Size),
    PointerMoved(Point),
    PointerLeft,
}

/// Whether the pointer was inside on the previous event.
#[derive(Debug, Default)]
pub struct PointerState {
    inside: bool,
}

pub struct ParticleCanvas<'a> {
    field: &'a ParticleField,
}

impl<'a> ParticleCanvas<'a> {
    #[must_use]
    pub fn new(field: &'a ParticleField) -> Self {
        Self { field }
    }

    /// Full-size canvas element.
    pub fn view(field: &'a ParticleField) -> Element<'a, Message> {
        Canvas::new(Self::new(field))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl canvas::Program<Message> for ParticleCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let (width, height) = self.field.size();
        if (bounds.width, bounds.height) != (width, height) {
            return Some(Action::publish(Message::Resized(bounds.size())));
        }

        match event {
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.inside => {
                state.inside = false;
                Some(Action::publish(Message::PointerLeft))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        state.inside = true;
                        Some(Action::publish(Message::PointerMoved(position)))
                    }
                    None if state.inside => {
                        state.inside = false;
                        Some(Action::publish(Message::PointerLeft))
                    }
                    None => None,
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for particle in self.field.particles() {
            frame.fill(
                &Path::circle(Point::new(particle.x, particle.y), particle.size),
                Color {
                    a: particle.alpha,
                    ..Color::WHITE
                },
            );
        }
        vec![frame.into_geometry()]
    }
}
