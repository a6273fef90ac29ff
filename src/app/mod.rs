// SPDX-License-Identifier: MPL-2.0
//! Demo application: a full-screen canvas that presents the example toasts.
//!
//! One press of the button shows a styled-text toast (top left), a hint toast
//! with a Menu glyph (bottom), a plain-text toast (top right) and a toast
//! placed against the whole window (bottom right).

mod message;

pub use message::{Flags, Message};

use crate::config::{self, ToastConfig};
use crate::toast::{GlyphId, HintText, Position, Style, StyledText, Toast, ToastFont};
use crate::ui::design_tokens::{palette, typography};
use crate::ui::overlay::{CustomView, Overlay};
use iced::widget::{button, text, Column, Container, Stack};
use iced::{alignment, font, window, Element, Length, Size, Subscription, Task};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_WIDTH: f32 = 1920.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 1080.0;

type DemoToast = Toast<CustomView<Message>>;

/// Root state: the toast overlay plus the style loaded from the config file.
pub struct App {
    overlay: Overlay<Message>,
    style: Style,
    completed: Rc<Cell<u32>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("style", &self.style)
            .field("toasts", &self.overlay.attached_count())
            .field("completed", &self.completed.get())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            warn!(error = %err, "could not read toast config, using defaults");
            ToastConfig::default()
        });
        if flags.save_config {
            match config::save(&config) {
                Ok(()) => info!("toast config saved"),
                Err(err) => warn!(error = %err, "could not save toast config"),
            }
        }
        let style = config.style.to_style().unwrap_or_else(|err| {
            warn!(error = %err, "invalid toast style, using defaults");
            Style::default()
        });

        let app = App {
            overlay: Overlay::new(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
            style,
            completed: Rc::new(Cell::new(0)),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Toast demo")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowToasts => self.show_examples(),
            Message::Tick(now) => self.overlay.tick(now),
            Message::WindowResized(size) => self.overlay.set_size(size),
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.overlay.subscription().map(Message::Tick),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(24.0)
            .align_x(alignment::Horizontal::Center)
            .push(text("Toasts").size(typography::HEADLINE))
            .push(button(text("Show toasts").size(typography::BODY)).on_press(Message::ShowToasts))
            .push(
                text(format!("Finished: {}", self.completed.get()))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            );

        let canvas = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new().push(canvas).push(self.overlay.view()).into()
    }

    fn toast(&self, width: f32, height: f32, position: Position) -> DemoToast {
        Toast::sized(width, height).with_style(self.style.with_position(position))
    }

    fn show_examples(&mut self) {
        let resolved = self.style.resolve();

        let italic = ToastFont::new(
            iced::Font {
                style: font::Style::Italic,
                ..iced::Font::DEFAULT
            },
            25.0,
        );
        self.toast(800.0, 140.0, Position::TopLeft(20.0))
            .with_styled_text(StyledText::concat([
                StyledText::run("This is ", resolved.font, resolved.text_color),
                StyledText::run("attributed string", italic, resolved.text_color),
            ]))
            .present(&mut self.overlay);

        self.toast(800.0, 140.0, Position::Bottom(20.0))
            .with_hint_text(
                HintText::new()
                    .text("Press the ")
                    .glyph(GlyphId::MenuWhite)
                    .text(" button to exit app"),
            )
            .present(&mut self.overlay);

        self.toast(800.0, 140.0, Position::TopRight(20.0))
            .with_text("This is regular text")
            .present(&mut self.overlay);

        let completed = Rc::clone(&self.completed);
        self.toast(500.0, 140.0, Position::BottomRight(20.0))
            .with_text("This is toast on window")
            .present_in_host(
                Some(&mut self.overlay),
                None,
                Some(Box::new(move || {
                    completed.set(completed.get() + 1);
                    info!("window toast finished");
                })),
            );
    }
}
