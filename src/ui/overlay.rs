// SPDX-License-Identifier: MPL-2.0
//! An iced-backed toast host.
//!
//! [`Overlay`] implements [`Surface`]: it keeps the attached toasts, runs
//! their fades on frame ticks and renders them as a layer meant to be stacked
//! over the application content.
//!
//! ```ignore
//! // update
//! Message::Tick(now) => self.overlay.tick(now),
//!
//! // subscription
//! self.overlay.subscription().map(Message::Tick)
//!
//! // view
//! Stack::new().push(content).push(self.overlay.view())
//! ```

use crate::toast::{Completion, Fade, Label, Layer, Phase, Segment, Surface, ToastId};
use crate::ui::design_tokens::opacity;
use iced::widget::{container, image, text, Container, Row, Stack};
use iced::{
    alignment, Background, Border, Color, Element, Length, Padding, Rectangle, Size, Subscription, Theme,
};
use std::time::{Duration, Instant};
use tracing::trace;

/// Interval between animation frames while a fade is pending.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Natural frequency of the fade spring, chosen so it settles by the end of
/// the fade.
const SPRING_FREQUENCY: f32 = 10.0;

/// Custom toast content, rebuilt on every view with the toast's current
/// alpha. iced has no generic opacity wrapper, so the view applies the alpha
/// to its own colours and images. It is not rendered while the toast is
/// fully transparent.
pub type CustomView<M> = Box<dyn Fn(f32) -> Element<'static, M>>;

struct Attached<M> {
    id: ToastId,
    layer: Layer<CustomView<M>>,
    alpha: f32,
}

struct Running<M> {
    id: ToastId,
    fade: Fade,
    from: f32,
    /// Set on the first tick after the fade was scheduled.
    started_at: Option<Instant>,
    on_complete: Completion<CustomView<M>>,
}

impl<M> Running<M> {
    fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start))
    }

    fn is_waiting(&self, now: Instant) -> bool {
        self.started_at.is_none() || self.elapsed(now) < self.fade.delay
    }
}

/// Toast layer for an iced application.
pub struct Overlay<M> {
    size: Size,
    children: Vec<Attached<M>>,
    running: Vec<Running<M>>,
}

impl<M: 'static> Overlay<M> {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            children: Vec::new(),
            running: Vec::new(),
        }
    }

    /// Updates the surface size, usually from window resize events.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` when nothing is attached.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.children.is_empty() && self.running.is_empty()
    }

    #[must_use]
    pub fn alpha(&self, id: ToastId) -> Option<f32> {
        self.child(id).map(|child| child.alpha)
    }

    #[must_use]
    pub fn layer(&self, id: ToastId) -> Option<&Layer<CustomView<M>>> {
        self.child(id).map(|child| &child.layer)
    }

    /// Lifecycle phase of an attached toast, `None` once removed.
    #[must_use]
    pub fn phase(&self, id: ToastId, now: Instant) -> Option<Phase> {
        let child = self.child(id)?;
        let phase = match self.running.iter().find(|run| run.id == id) {
            Some(run) if run.fade.is_fade_in() => {
                if run.started_at.is_none() {
                    Phase::Attached
                } else {
                    Phase::FadingIn
                }
            }
            Some(run) if run.is_waiting(now) => Phase::Visible,
            Some(_) => Phase::FadingOut,
            None if child.alpha <= opacity::TRANSPARENT => Phase::Attached,
            None => Phase::Visible,
        };
        Some(phase)
    }

    /// Advances every pending fade to `now`.
    ///
    /// Alphas are updated first; completions of the fades that ended run
    /// afterwards, in the order the fades were scheduled.
    pub fn tick(&mut self, now: Instant) {
        let mut finished = Vec::new();

        for (index, run) in self.running.iter_mut().enumerate() {
            let start = *run.started_at.get_or_insert(now);
            let elapsed = now.saturating_duration_since(start);
            let Some(active) = elapsed.checked_sub(run.fade.delay) else {
                continue;
            };

            let progress = if run.fade.duration.is_zero() {
                1.0
            } else {
                (active.as_secs_f32() / run.fade.duration.as_secs_f32()).min(1.0)
            };
            let eased = spring(progress, run.fade.damping, run.fade.initial_velocity);
            let alpha = run.from + (run.fade.to - run.from) * eased;

            if let Some(child) = self.children.iter_mut().find(|child| child.id == run.id) {
                child.alpha = alpha;
            }
            if progress >= 1.0 {
                finished.push(index);
            }
        }

        if finished.is_empty() {
            return;
        }

        let (done, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.running)
            .into_iter()
            .enumerate()
            .partition(|(index, _)| finished.contains(index));
        self.running = pending.into_iter().map(|(_, run)| run).collect();

        for (_, run) in done {
            trace!(id = ?run.id, "fade finished");
            let surface: &mut dyn Surface<CustomView<M>> = &mut *self;
            (run.on_complete)(surface);
        }
    }

    /// Frame ticks while a fade is pending, nothing otherwise.
    pub fn subscription(&self) -> Subscription<Instant> {
        if self.running.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(FRAME_INTERVAL)
        }
    }

    /// Renders attached toasts at their frames, oldest at the bottom.
    pub fn view(&self) -> Element<'_, M> {
        let layers: Vec<Element<'_, M>> = self.children.iter().map(toast_view).collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn child(&self, id: ToastId) -> Option<&Attached<M>> {
        self.children.iter().find(|child| child.id == id)
    }
}

impl<M: 'static> Surface<CustomView<M>> for Overlay<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn add_child(&mut self, id: ToastId, layer: Layer<CustomView<M>>) {
        self.children.push(Attached {
            id,
            layer,
            alpha: opacity::OPAQUE,
        });
    }

    fn remove_child(&mut self, id: ToastId) {
        self.children.retain(|child| child.id != id);
        self.running.retain(|run| run.id != id);
    }

    fn set_alpha(&mut self, id: ToastId, alpha: f32) {
        if let Some(child) = self.children.iter_mut().find(|child| child.id == id) {
            child.alpha = alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
        }
    }

    fn animate(&mut self, id: ToastId, fade: Fade, on_complete: Completion<CustomView<M>>) {
        let from = self.alpha(id).unwrap_or(opacity::TRANSPARENT);
        self.running.push(Running {
            id,
            fade,
            from,
            started_at: None,
            on_complete,
        });
    }
}

/// Spring response from 0 to 1 over `t` in `[0, 1]`.
///
/// `damping` of 1.0 or more is critically damped and never overshoots.
fn spring(t: f32, damping: f32, initial_velocity: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    let t = t.max(0.0);
    let omega = SPRING_FREQUENCY;

    if damping >= 1.0 {
        1.0 - (1.0 + (omega - initial_velocity) * t) * (-omega * t).exp()
    } else {
        let damped = omega * (1.0 - damping * damping).sqrt();
        let decay = (-damping * omega * t).exp();
        let sine_weight = (damping * omega - initial_velocity) / damped;
        1.0 - decay * ((damped * t).cos() + sine_weight * (damped * t).sin())
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_view<M: 'static>(child: &Attached<M>) -> Element<'_, M> {
    let frame = child.layer.frame;
    let alpha = child.alpha;
    let background = faded(child.layer.background_color, alpha);
    let radius = child.layer.corner_radius;

    let label: Element<'_, M> = label_view(&child.layer.label, alpha);
    let label = Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let content: Element<'_, M> = match custom_view(child.layer.custom_content.as_ref(), alpha) {
        Some(custom) => {
            let custom: Element<'_, M> = custom;
            Stack::new().push(custom).push(label).into()
        }
        None => label.into(),
    };

    let card = Container::new(content)
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(placement(frame))
        .into()
}

/// Offset of a card inside the full-size overlay layer.
///
/// Padding cannot be negative, so a toast larger than its container or
/// reference region is pinned to the top or left edge of the overlay instead
/// of being cut off there.
fn placement(frame: Rectangle) -> Padding {
    Padding {
        top: frame.y.max(0.0),
        left: frame.x.max(0.0),
        right: 0.0,
        bottom: 0.0,
    }
}

fn custom_view<M: 'static>(custom: Option<&CustomView<M>>, alpha: f32) -> Option<Element<'static, M>> {
    if alpha <= opacity::TRANSPARENT {
        return None;
    }
    custom.map(|view| view(alpha))
}

/// Padding that moves a glyph by its bounds' vertical offset.
///
/// A negative `y` lowers the glyph: the space goes above the image and the
/// row centers the padded box.
fn glyph_padding(bounds: Rectangle) -> Padding {
    Padding {
        top: (-bounds.y).max(0.0),
        bottom: bounds.y.max(0.0),
        left: 0.0,
        right: 0.0,
    }
}

fn label_view<M: 'static>(label: &Label, alpha: f32) -> Element<'static, M> {
    let segments = label.segments();
    if segments.is_empty() {
        return text("").into();
    }

    Row::with_children(
        segments
            .into_iter()
            .map(|segment| segment_view(segment, alpha)),
    )
    .align_y(alignment::Vertical::Center)
    .into()
}

fn segment_view<M: 'static>(segment: Segment, alpha: f32) -> Element<'static, M> {
    match segment {
        Segment::Run { text: run, font, color } => text(run)
            .font(font.font)
            .size(font.size)
            .color(faded(color, alpha))
            .into(),
        Segment::Glyph { glyph, bounds } => {
            let glyph_image = image(glyph.handle()).opacity(alpha);
            match bounds {
                Some(bounds) => container(
                    glyph_image
                        .width(Length::Fixed(bounds.width))
                        .height(Length::Fixed(bounds.height)),
                )
                .padding(glyph_padding(bounds))
                .into(),
                None => glyph_image.into(),
            }
        }
    }
}
