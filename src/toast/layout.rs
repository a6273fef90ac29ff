// SPDX-License-Identifier: MPL-2.0
//! Toast placement.
//!
//! Two addressing modes share the same six anchors:
//!
//! - [`frame_in_parent`]: the toast is a child of the container it is placed
//!   against, so edges are measured in the container's own coordinates.
//! - [`center_in_host`]: the toast is a child of a host surface (the window)
//!   but placed against a reference rectangle already expressed in host
//!   coordinates.

use super::style::Position;
use iced::{Point, Rectangle, Size};

/// Frame of a `toast`-sized child anchored inside a `container`-sized parent.
#[must_use]
pub fn frame_in_parent(position: Position, container: Size, toast: Size) -> Rectangle {
    let centered_x = container.width / 2.0 - toast.width / 2.0;
    let right_x = container.width - position.inset() - toast.width;
    let bottom_y = container.height - position.inset() - toast.height;

    let (x, y) = match position {
        Position::Top(inset) => (centered_x, inset),
        Position::TopLeft(inset) => (inset, inset),
        Position::TopRight(inset) => (right_x, inset),
        Position::Bottom(_) => (centered_x, bottom_y),
        Position::BottomLeft(inset) => (inset, bottom_y),
        Position::BottomRight(_) => (right_x, bottom_y),
    };

    Rectangle::new(Point::new(x, y), toast)
}

/// Center of a `toast`-sized child anchored against `reference`.
#[must_use]
pub fn center_in_host(position: Position, reference: Rectangle, toast: Size) -> Point {
    let half_w = toast.width / 2.0;
    let half_h = toast.height / 2.0;

    let middle_x = reference.x + reference.width / 2.0;
    let top_y = |inset: f32| reference.y + inset + half_h;
    let bottom_y = |inset: f32| reference.y + reference.height - inset - half_h;
    let left_x = |inset: f32| reference.x + inset + half_w;
    let right_x = |inset: f32| reference.x + reference.width - inset - half_w;

    match position {
        Position::Top(inset) => Point::new(middle_x, top_y(inset)),
        Position::TopLeft(inset) => Point::new(left_x(inset), top_y(inset)),
        Position::TopRight(inset) => Point::new(right_x(inset), top_y(inset)),
        Position::Bottom(inset) => Point::new(middle_x, bottom_y(inset)),
        Position::BottomLeft(inset) => Point::new(left_x(inset), bottom_y(inset)),
        Position::BottomRight(inset) => Point::new(right_x(inset), bottom_y(inset)),
    }
}

/// Frame of a `toast`-sized child anchored against `reference`, in host
/// coordinates.
#[must_use]
pub fn frame_in_host(position: Position, reference: Rectangle, toast: Size) -> Rectangle {
    let center = center_in_host(position, reference, toast);
    Rectangle::new(
        Point::new(center.x - toast.width / 2.0, center.y - toast.height / 2.0),
        toast,
    )
}
