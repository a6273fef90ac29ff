// SPDX-License-Identifier: MPL-2.0
//! Test helpers for code that presents toasts.
//!
//! [`RecordingSurface`] implements [`Surface`] without a UI runtime. It logs
//! every call and queues animations instead of running them; tests finish
//! them one at a time with [`RecordingSurface::finish_next`].

use crate::toast::{Completion, Fade, Layer, Surface, ToastId};
use iced::Size;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// A call made on a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Added(ToastId),
    Alpha(ToastId, f32),
    Animated(ToastId, Fade),
    Removed(ToastId),
}

struct Child<C> {
    layer: Layer<C>,
    alpha: f32,
}

/// A [`Surface`] that records calls and runs animations on demand.
pub struct RecordingSurface<C = ()> {
    size: Size,
    children: HashMap<ToastId, Child<C>>,
    pending: VecDeque<(ToastId, Fade, Completion<C>)>,
    log: Rc<RefCell<Vec<Event>>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self::with_content(size)
    }
}

impl<C: 'static> RecordingSurface<C> {
    /// A surface whose toasts carry custom content of type `C`.
    #[must_use]
    pub fn with_content(size: Size) -> Self {
        Self {
            size,
            children: HashMap::new(),
            pending: VecDeque::new(),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Shared handle on the call log, readable from inside callbacks.
    #[must_use]
    pub fn event_log(&self) -> Rc<RefCell<Vec<Event>>> {
        Rc::clone(&self.log)
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn layer(&self, id: ToastId) -> Option<&Layer<C>> {
        self.children.get(&id).map(|child| &child.layer)
    }

    #[must_use]
    pub fn alpha(&self, id: ToastId) -> Option<f32> {
        self.children.get(&id).map(|child| child.alpha)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Fades scheduled but not finished yet, oldest first.
    #[must_use]
    pub fn pending_fades(&self) -> Vec<Fade> {
        self.pending.iter().map(|(_, fade, _)| *fade).collect()
    }

    /// Finishes the oldest pending animation: applies its target alpha, then
    /// runs its completion. Returns `false` when nothing was pending.
    pub fn finish_next(&mut self) -> bool {
        let Some((id, fade, on_complete)) = self.pending.pop_front() else {
            return false;
        };
        self.set_alpha(id, fade.to);
        let surface: &mut dyn Surface<C> = self;
        on_complete(surface);
        true
    }

    /// Finishes animations until none are left.
    pub fn finish_all(&mut self) {
        while self.finish_next() {}
    }
}

impl<C: 'static> Surface<C> for RecordingSurface<C> {
    fn size(&self) -> Size {
        self.size
    }

    fn add_child(&mut self, id: ToastId, layer: Layer<C>) {
        self.log.borrow_mut().push(Event::Added(id));
        self.children.insert(id, Child { layer, alpha: 1.0 });
    }

    fn remove_child(&mut self, id: ToastId) {
        self.log.borrow_mut().push(Event::Removed(id));
        self.children.remove(&id);
    }

    fn set_alpha(&mut self, id: ToastId, alpha: f32) {
        self.log.borrow_mut().push(Event::Alpha(id, alpha));
        if let Some(child) = self.children.get_mut(&id) {
            child.alpha = alpha;
        }
    }

    fn animate(&mut self, id: ToastId, fade: Fade, on_complete: Completion<C>) {
        self.log.borrow_mut().push(Event::Animated(id, fade));
        self.pending.push_back((id, fade, on_complete));
    }
}
