// SPDX-License-Identifier: MPL-2.0
//! Demo application root state.
//!
//! The `App` owns the snackbar façade attached to an Iced surface and turns
//! button presses into snackbar requests. Queued snackbars are let through
//! at the end of every update.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Request};

use crate::config;
use crate::error::Result;
use crate::i18n::I18n;
use crate::snackbar::{ConsumerContext, DisplayDuration, Snackbars};
use crate::ui::snackbar::Surface;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of snackbars fired by one burst.
const BURST_SIZE: usize = 3;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    snackbars: Snackbars<Surface>,
    /// Label of the dismiss button, resolved once.
    dismiss_label: String,
    /// Undo presses reported by action callbacks, not yet acknowledged.
    undo_requests: Arc<AtomicUsize>,
    bursts: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("snackbars", &self.snackbars)
            .field("bursts", &self.bursts)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        // Boot runs on the UI thread, which also runs every update.
        let app = App::new(flags, &ConsumerContext::current())
            .expect("snackbar surface attaches on the UI thread");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and translations, then attaches the snackbar
    /// surface to the given consumer thread.
    pub fn new(flags: Flags, context: &ConsumerContext) -> Result<Self> {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load config, using defaults");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let dismiss_label = i18n.tr("snackbar-dismiss");
        let snackbars = Snackbars::attach(Surface::new(&config.snackbar), context)?;

        Ok(Self {
            i18n,
            snackbars,
            dismiss_label,
            undo_requests: Arc::new(AtomicUsize::new(0)),
            bursts: 0,
        })
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.snackbars.surface().is_visible())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let result = match message {
            Message::Show(request) => self.request(request),
            Message::Snackbar(message) => {
                self.snackbars.surface_mut().update(message);
                self.acknowledge_undo()
            }
        };
        if let Err(err) = result.and_then(|()| self.snackbars.process_pending().map(|_| ())) {
            tracing::error!(error = %err, "snackbar request failed");
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snackbars: &self.snackbars,
            dismiss_label: &self.dismiss_label,
        })
    }

    fn request(&mut self, request: Request) -> Result<()> {
        let i18n = &self.i18n;
        let snackbars = &self.snackbars;
        match request {
            Request::Success => snackbars
                .create(i18n.tr("demo-message-success"))
                .success_background_color()
                .duration(DisplayDuration::Short)
                .show()?,
            Request::Error => snackbars
                .create(i18n.tr("demo-message-error"))
                .error_background_color()
                .max_lines(2)
                .show()?,
            Request::Warning => snackbars
                .create(i18n.tr("demo-message-warning"))
                .warning_background_color()
                .text_color(crate::ui::design_tokens::palette::GRAY_900)
                .show()?,
            Request::Neutral => snackbars
                .create(i18n.tr("demo-message-neutral"))
                .neutral_background_color()
                .show()?,
            Request::Important => self.important_with_undo()?,
            Request::Burst => {
                self.bursts += 1;
                self.important_with_undo()?;
                for index in 1..BURST_SIZE {
                    let text = self
                        .i18n
                        .tr_with_args("demo-message-burst", &[("index", &index.to_string())]);
                    self.snackbars.create(text).show()?;
                }
                return Ok(());
            }
        };
        Ok(())
    }

    fn important_with_undo(&self) -> Result<crate::snackbar::SnackbarId> {
        let undo_requests = Arc::clone(&self.undo_requests);
        self.snackbars
            .create(self.i18n.tr("demo-message-important"))
            .important()
            .duration(DisplayDuration::Indefinite)
            .action_text(self.i18n.tr("demo-action-undo"))
            .action_text_color(crate::ui::design_tokens::palette::PRIMARY_200)
            .action(move || {
                undo_requests.fetch_add(1, Ordering::SeqCst);
            })
            .show()
    }

    /// Confirms undo presses with a follow-up snackbar.
    fn acknowledge_undo(&mut self) -> Result<()> {
        let presses = self.undo_requests.swap(0, Ordering::SeqCst);
        for _ in 0..presses {
            self.snackbars
                .create(self.i18n.tr("demo-message-restored"))
                .success_background_color()
                .duration(DisplayDuration::Short)
                .show()?;
        }
        Ok(())
    }
}
