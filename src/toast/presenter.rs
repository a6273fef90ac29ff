// SPDX-License-Identifier: MPL-2.0
//! The toast entity and its show → hold → hide → remove sequence.
//!
//! Presenting a toast consumes it. The sequence is a strict chain of
//! animation completions on the surface:
//!
//! 1. attach with alpha 0, placed and labelled
//! 2. fade in over [`motion::FADE`]
//! 3. once faded in, fade out over [`motion::FADE`] after the hold duration
//! 4. once faded out, detach, then run the caller's callback

use super::element::HintText;
use super::layout;
use super::style::{ResolvedStyle, Style};
use super::surface::{Fade, Label, Layer, Region, Surface, ToastId};
use super::text::StyledText;
use crate::ui::design_tokens::{motion, opacity};
use iced::{Rectangle, Size};
use std::time::Duration;
use tracing::{debug, trace};

/// Called once, after the toast has been removed from its surface.
pub type Callback = Box<dyn FnOnce()>;

/// A transient notification.
///
/// Set at most one of text, styled text or hint text. If several are set the
/// hint text wins over styled text, which wins over plain text. Custom
/// content is shown alongside whichever label is picked. With no label source
/// at all the toast shows a blank label.
///
/// `C` is the host toolkit's custom content type.
#[derive(Debug, Clone)]
pub struct Toast<C = ()> {
    frame: Rectangle,
    pub style: Style,
    text: Option<String>,
    styled_text: Option<StyledText>,
    hint_text: Option<HintText>,
    custom_content: Option<C>,
}

impl<C: 'static> Toast<C> {
    /// Creates a toast with the given frame. Only the frame's size matters;
    /// its origin is replaced when the toast is presented.
    #[must_use]
    pub fn new(frame: Rectangle, style: Option<Style>) -> Self {
        Self {
            frame,
            style: style.unwrap_or_default(),
            text: None,
            styled_text: None,
            hint_text: None,
            custom_content: None,
        }
    }

    /// Creates a toast of the given size with the default style.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(Rectangle::with_size(Size::new(width, height)), None)
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_styled_text(&mut self, styled_text: StyledText) {
        self.styled_text = Some(styled_text);
    }

    pub fn set_hint_text(&mut self, hint_text: HintText) {
        self.hint_text = Some(hint_text);
    }

    pub fn set_custom_content(&mut self, content: C) {
        self.custom_content = Some(content);
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_styled_text(mut self, styled_text: StyledText) -> Self {
        self.set_styled_text(styled_text);
        self
    }

    #[must_use]
    pub fn with_hint_text(mut self, hint_text: HintText) -> Self {
        self.set_hint_text(hint_text);
        self
    }

    #[must_use]
    pub fn with_custom_content(mut self, content: C) -> Self {
        self.set_custom_content(content);
        self
    }

    /// Presents the toast inside `parent` without a completion callback.
    pub fn present(self, parent: &mut dyn Surface<C>) -> ToastId {
        self.present_in_parent(parent, None)
    }

    /// Attaches the toast to `parent`, placed against the parent's own bounds,
    /// and starts the fade sequence.
    pub fn present_in_parent(
        self,
        parent: &mut dyn Surface<C>,
        on_complete: Option<Callback>,
    ) -> ToastId {
        let style = self.style.resolve();
        let frame = layout::frame_in_parent(style.position, parent.size(), self.size());
        self.attach(parent, frame, style, on_complete)
    }

    /// Attaches the toast to `host`, placed against `reference` (or the whole
    /// host when `None`), and starts the fade sequence.
    ///
    /// Without a host this does nothing: the toast is dropped and
    /// `on_complete` never runs.
    pub fn present_in_host(
        self,
        host: Option<&mut dyn Surface<C>>,
        reference: Option<&dyn Region>,
        on_complete: Option<Callback>,
    ) -> Option<ToastId> {
        let Some(host) = host else {
            debug!("no host surface available, toast not presented");
            return None;
        };

        let style = self.style.resolve();
        let reference = reference
            .map(Region::bounds_in_host)
            .unwrap_or_else(|| Rectangle::with_size(host.size()));
        let frame = layout::frame_in_host(style.position, reference, self.size());

        Some(self.attach(host, frame, style, on_complete))
    }

    fn attach(
        self,
        surface: &mut dyn Surface<C>,
        frame: Rectangle,
        style: ResolvedStyle,
        on_complete: Option<Callback>,
    ) -> ToastId {
        let id = ToastId::new();
        let label = self.label(&style);
        if label == Label::Empty && self.custom_content.is_none() {
            debug!(?id, "toast has no content, showing a blank label");
        }

        surface.add_child(
            id,
            Layer {
                frame,
                background_color: style.background_color,
                corner_radius: style.corner_radius,
                label,
                custom_content: self.custom_content,
            },
        );
        surface.set_alpha(id, opacity::TRANSPARENT);
        debug!(?id, x = frame.x, y = frame.y, "toast attached");

        fade_in(surface, id, style.duration, on_complete);
        id
    }

    fn label(&self, style: &ResolvedStyle) -> Label {
        if let Some(hint_text) = &self.hint_text {
            Label::Styled(hint_text.build(style.font, style.text_color))
        } else if let Some(styled_text) = &self.styled_text {
            Label::Styled(styled_text.clone())
        } else if let Some(text) = &self.text {
            Label::Plain {
                text: text.clone(),
                font: style.font,
                color: style.text_color,
            }
        } else {
            Label::Empty
        }
    }
}

fn fade_in<C: 'static>(
    surface: &mut dyn Surface<C>,
    id: ToastId,
    hold: Duration,
    on_complete: Option<Callback>,
) {
    surface.animate(
        id,
        Fade::fade_in(motion::FADE),
        Box::new(move |surface: &mut dyn Surface<C>| {
            trace!(?id, "toast faded in");
            fade_out(surface, id, hold, on_complete);
        }),
    );
}

fn fade_out<C: 'static>(
    surface: &mut dyn Surface<C>,
    id: ToastId,
    hold: Duration,
    on_complete: Option<Callback>,
) {
    surface.animate(
        id,
        Fade::fade_out(motion::FADE, hold),
        Box::new(move |surface: &mut dyn Surface<C>| {
            surface.remove_child(id);
            debug!(?id, "toast removed");
            if let Some(callback) = on_complete {
                callback();
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Event, RecordingSurface};
    use crate::toast::{GlyphId, Position, Segment, ToastFont};
    use iced::{Color, Point};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counter() -> (Rc<RefCell<u32>>, Callback) {
        let count = Rc::new(RefCell::new(0));
        let handle = Rc::clone(&count);
        (count, Box::new(move || *handle.borrow_mut() += 1))
    }

    #[test]
    fn hint_text_beats_styled_and_plain_text() {
        let toast: Toast = Toast::sized(800.0, 140.0)
            .with_text("plain")
            .with_styled_text(StyledText::run("styled", ToastFont::sized(20.0), Color::WHITE))
            .with_hint_text(HintText::new().text("hint").glyph(GlyphId::MenuWhite));

        let label = toast.label(&toast.style.resolve());
        assert_eq!(label.plain_text(), "hint");
        assert_eq!(label.segments().len(), 2);
    }

    #[test]
    fn styled_text_beats_plain_text() {
        let toast: Toast = Toast::sized(800.0, 140.0)
            .with_text("plain")
            .with_styled_text(StyledText::run("styled", ToastFont::sized(20.0), Color::WHITE));

        let label = toast.label(&toast.style.resolve());
        assert_eq!(label.plain_text(), "styled");
    }

    #[test]
    fn plain_text_uses_resolved_font_and_color() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let toast: Toast = Toast::sized(800.0, 140.0)
            .with_style(Style::new().with_text_color(red))
            .with_text("hello");

        let style = toast.style.resolve();
        assert_eq!(
            toast.label(&style),
            Label::Plain {
                text: "hello".to_string(),
                font: style.font,
                color: red,
            }
        );
    }

    #[test]
    fn hint_text_is_built_with_resolved_style() {
        let font = ToastFont::sized(10.0);
        let toast: Toast = Toast::sized(800.0, 140.0)
            .with_style(Style::new().with_font(font))
            .with_hint_text(HintText::new().glyph(GlyphId::VolumeWhite));

        let segments = toast.label(&toast.style.resolve()).segments();
        let Segment::Glyph {
            bounds: Some(bounds),
            ..
        } = segments[0]
        else {
            panic!("expected glyph");
        };
        assert_eq!(bounds.width, 40.0);
        assert_eq!(bounds.y, -10.0);
    }

    #[test]
    fn no_content_gives_empty_label() {
        let toast: Toast = Toast::sized(800.0, 140.0);
        assert_eq!(toast.label(&toast.style.resolve()), Label::Empty);
    }

    #[test]
    fn in_parent_lifecycle_runs_in_order() {
        let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
        let (count, callback) = counter();

        let id = Toast::<()>::sized(800.0, 140.0)
            .with_text("hello")
            .present_in_parent(&mut surface, Some(callback));

        assert_eq!(surface.attached_count(), 1);
        assert_eq!(surface.alpha(id), Some(0.0));

        surface.finish_next();
        assert_eq!(surface.alpha(id), Some(1.0));
        assert_eq!(*count.borrow(), 0);

        surface.finish_next();
        assert_eq!(surface.attached_count(), 0);
        assert_eq!(*count.borrow(), 1);
        assert!(!surface.has_pending());

        let events = surface.events();
        assert!(matches!(events[0], Event::Added(added) if added == id));
        assert_eq!(events[1], Event::Alpha(id, 0.0));
        assert!(matches!(events[2], Event::Animated(_, fade) if fade.is_fade_in()));
        assert!(matches!(events[3], Event::Alpha(_, alpha) if alpha == 1.0));
        assert!(
            matches!(events[4], Event::Animated(_, fade) if fade.delay == Duration::from_secs(3))
        );
        assert_eq!(events[5], Event::Alpha(id, 0.0));
        assert_eq!(events[6], Event::Removed(id));
        assert_eq!(events.len(), 7);
    }

    #[test]
    fn callback_runs_after_removal() {
        let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
        let log = surface.event_log();
        let seen_at_callback = Rc::new(RefCell::new(None));
        let seen = Rc::clone(&seen_at_callback);

        Toast::<()>::sized(400.0, 100.0).present_in_parent(
            &mut surface,
            Some(Box::new(move || {
                *seen.borrow_mut() = log.borrow().last().copied();
            })),
        );
        surface.finish_all();

        assert!(matches!(*seen_at_callback.borrow(), Some(Event::Removed(_))));
    }

    #[test]
    fn fade_out_waits_for_style_duration() {
        let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
        Toast::<()>::sized(400.0, 100.0)
            .with_style(Style::new().with_duration(Duration::from_secs(7)))
            .present(&mut surface);

        surface.finish_next();
        let fade = surface.pending_fades()[0];
        assert_eq!(fade.delay, Duration::from_secs(7));
        assert_eq!(fade.duration, motion::FADE);
    }

    #[test]
    fn in_parent_places_bottom_center() {
        let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
        let id = Toast::<()>::sized(800.0, 140.0).present(&mut surface);

        let frame = surface.layer(id).map(|layer| layer.frame);
        assert_eq!(
            frame,
            Some(Rectangle::new(Point::new(560.0, 920.0), Size::new(800.0, 140.0)))
        );
    }

    #[test]
    fn in_host_defaults_to_whole_host() {
        let mut host = RecordingSurface::new(Size::new(1920.0, 1080.0));
        let id = Toast::<()>::sized(500.0, 140.0)
            .with_style(Style::new().with_position(Position::BottomRight(20.0)))
            .present_in_host(Some(&mut host), None, None)
            .expect("host is available");

        let frame = host.layer(id).expect("attached").frame;
        assert_eq!(frame.center(), Point::new(1650.0, 990.0));
    }

    #[test]
    fn in_host_uses_reference_bounds() {
        let mut host = RecordingSurface::new(Size::new(1920.0, 1080.0));
        let reference = Rectangle::new(Point::new(100.0, 100.0), Size::new(600.0, 400.0));
        let id = Toast::<()>::sized(200.0, 50.0)
            .with_style(Style::new().with_position(Position::TopLeft(10.0)))
            .present_in_host(Some(&mut host), Some(&reference), None)
            .expect("host is available");

        let frame = host.layer(id).expect("attached").frame;
        assert_eq!(frame.center(), Point::new(210.0, 135.0));
    }

    #[test]
    fn in_host_without_host_is_a_no_op() {
        let (count, callback) = counter();
        let id = Toast::<()>::sized(500.0, 140.0).present_in_host(None, None, Some(callback));

        assert!(id.is_none());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn custom_content_is_attached_alongside_label() {
        let mut surface: RecordingSurface<&'static str> =
            RecordingSurface::with_content(Size::new(1920.0, 1080.0));
        let id = Toast::<&'static str>::sized(300.0, 300.0)
            .with_text("caption")
            .with_custom_content("poster")
            .present(&mut surface);

        let layer = surface.layer(id).expect("attached");
        assert_eq!(layer.custom_content, Some("poster"));
        assert_eq!(layer.label.plain_text(), "caption");
    }

    #[test]
    fn layer_uses_resolved_appearance() {
        let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
        let id = Toast::<()>::sized(300.0, 100.0)
            .with_style(Style::new().with_corner_radius(3.0))
            .present(&mut surface);

        let layer = surface.layer(id).expect("attached");
        assert_eq!(layer.corner_radius, 3.0);
        assert_eq!(layer.background_color, crate::ui::design_tokens::palette::GRAY_500);
    }
}
