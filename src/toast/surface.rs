// SPDX-License-Identifier: MPL-2.0
//! The capabilities a toast needs from its host toolkit.
//!
//! A presenter only ever talks to a [`Surface`]: it attaches a [`Layer`],
//! changes its alpha, schedules [`Fade`]s and finally removes it. Anything
//! that can do that (an iced overlay, a test double) can host toasts.

use super::text::{Segment, StyledText, ToastFont};
use crate::ui::design_tokens::{motion, opacity};
use iced::{Color, Point, Rectangle, Size};
use std::time::Duration;

/// Unique identifier for an attached toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown by an attached toast.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// Nothing to show. The toast still appears, with a blank label.
    Empty,
    Plain {
        text: String,
        font: ToastFont,
        color: Color,
    },
    Styled(StyledText),
}

impl Label {
    /// The label's text, glyphs left out.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Label::Empty => String::new(),
            Label::Plain { text, .. } => text.clone(),
            Label::Styled(styled) => styled.plain_text(),
        }
    }

    /// The label as styled segments.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            Label::Empty => Vec::new(),
            Label::Plain { text, font, color } => vec![Segment::Run {
                text: text.clone(),
                font: *font,
                color: *color,
            }],
            Label::Styled(styled) => styled.segments().to_vec(),
        }
    }
}

/// Everything a surface needs to draw an attached toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<C> {
    /// Frame in the surface's coordinate space.
    pub frame: Rectangle,
    pub background_color: Color,
    pub corner_radius: f32,
    pub label: Label,
    /// Caller-supplied content drawn under the label.
    pub custom_content: Option<C>,
}

/// An alpha animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Target alpha, reached at the end of the animation.
    pub to: f32,
    pub duration: Duration,
    /// Wait before the animation starts.
    pub delay: Duration,
    /// Spring damping ratio, 1.0 for no overshoot.
    pub damping: f32,
    pub initial_velocity: f32,
}

impl Fade {
    /// Fade from transparent to opaque, starting immediately.
    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            to: opacity::OPAQUE,
            duration,
            delay: Duration::ZERO,
            damping: motion::SPRING_DAMPING,
            initial_velocity: motion::SPRING_VELOCITY,
        }
    }

    /// Fade from opaque to transparent after `delay`.
    #[must_use]
    pub fn fade_out(duration: Duration, delay: Duration) -> Self {
        Self {
            to: opacity::TRANSPARENT,
            duration,
            delay,
            damping: motion::SPRING_DAMPING,
            initial_velocity: motion::SPRING_VELOCITY,
        }
    }

    #[must_use]
    pub fn is_fade_in(&self) -> bool {
        self.to > opacity::TRANSPARENT
    }
}

/// Lifecycle phase of an attached toast, as reported by a surface.
///
/// A toast that is not attached (not yet presented, or already removed) has
/// no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached with alpha 0, fade-in not started.
    Attached,
    FadingIn,
    /// Fully opaque, waiting out the hold duration.
    Visible,
    FadingOut,
}

/// Scheduled by [`Surface::animate`], called once the animation finishes.
pub type Completion<C> = Box<dyn FnOnce(&mut dyn Surface<C>)>;

/// A container toasts can be attached to.
///
/// All calls happen on the UI thread. `animate` must not invoke `on_complete`
/// synchronously; it runs later, from the host's event loop, once the fade
/// has ended.
pub trait Surface<C> {
    /// Size of the surface in its own coordinates.
    fn size(&self) -> Size;

    fn add_child(&mut self, id: ToastId, layer: Layer<C>);

    fn remove_child(&mut self, id: ToastId);

    fn set_alpha(&mut self, id: ToastId, alpha: f32);

    fn animate(&mut self, id: ToastId, fade: Fade, on_complete: Completion<C>);
}

/// A rectangle that can be located in host coordinates.
pub trait Region {
    fn bounds_in_host(&self) -> Rectangle;
}

impl Region for Rectangle {
    fn bounds_in_host(&self) -> Rectangle {
        *self
    }
}

/// A child view: its own size plus where its origin lands in the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildView {
    pub origin_in_host: Point,
    pub size: Size,
}

impl Region for ChildView {
    fn bounds_in_host(&self) -> Rectangle {
        Rectangle::new(self.origin_in_host, self.size)
    }
}
