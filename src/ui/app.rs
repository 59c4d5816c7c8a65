//! Main extensions manager application using iced.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::style;
use super::theme::Palette;
use crate::catalog::{self, Extension, ExtensionId};
use crate::config::Config;
use crate::error::ManagerResult;
use crate::filter::Filter;
use crate::store::{ExtensionStore, Intent};
use crate::theme::ThemeMode;

use iced::font::Weight;
use iced::keyboard::{self, Key};
use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, svg, text, toggler, Column,
    Row, Space,
};
use iced::{Alignment, Element, Font, Length, Subscription, Task, Theme};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// The main application state.
pub struct ExtensionsApp {
    config: Config,
    store: ExtensionStore,

    // Display mode, independent of the extension data
    mode: ThemeMode,
    palette: Palette,

    // Logos resolved once at startup; missing files fall back to a monogram
    logos: HashMap<ExtensionId, svg::Handle>,

    // Where the theme choice is written back; None keeps it in memory
    config_path: Option<PathBuf>,
}

/// What one filter button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: Filter,
    pub selected: bool,
    pub count: usize,
}

/// Messages that the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    // Intents on the store
    FilterSelected(Filter),
    DeleteExtension(ExtensionId),
    ToggleExtension(ExtensionId),

    // Header
    ToggleTheme,
}

impl Message {
    /// The store intent this message carries, if any.
    pub fn intent(&self) -> Option<Intent> {
        match *self {
            Message::FilterSelected(filter) => Some(Intent::SetFilter(filter)),
            Message::DeleteExtension(id) => Some(Intent::Delete(id)),
            Message::ToggleExtension(id) => Some(Intent::Toggle(id)),
            Message::ToggleTheme => None,
        }
    }
}

impl ExtensionsApp {
    /// Create the application from config, loading the configured catalog.
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let filter = config.behavior.initial_filter;
        let store = ExtensionStore::with_filter(catalog::from_config(&config), filter)
            .unwrap_or_else(|e| {
                log::warn!("Rejected catalog: {}, using built-in catalog", e);
                ExtensionStore::builtin(filter)
            });
        log::info!("Starting with {} extensions", store.len());

        let app = Self::with_store(config, store).persist_to(Config::config_path());
        (app, Task::none())
    }

    /// Build the app over `extensions`; fails on duplicate ids.
    pub fn with_catalog(config: Config, extensions: Vec<Extension>) -> ManagerResult<Self> {
        let store = ExtensionStore::with_filter(extensions, config.behavior.initial_filter)?;
        Ok(Self::with_store(config, store))
    }

    fn with_store(config: Config, store: ExtensionStore) -> Self {
        let logos = store
            .extensions()
            .iter()
            .filter(|ext| !ext.logo.is_empty() && Path::new(&ext.logo).exists())
            .map(|ext| (ext.id, svg::Handle::from_path(&ext.logo)))
            .collect();

        let mode = config.appearance.theme;

        Self {
            config,
            store,
            mode,
            palette: Palette::for_mode(mode),
            logos,
            config_path: None,
        }
    }

    /// Write theme changes to the config file at `path`.
    pub fn persist_to(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Update the application state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterSelected(filter) => self.store.dispatch(Intent::SetFilter(filter)),
            Message::DeleteExtension(id) => self.store.dispatch(Intent::Delete(id)),
            Message::ToggleExtension(id) => self.store.dispatch(Intent::Toggle(id)),
            Message::ToggleTheme => self.toggle_theme(),
        }

        Task::none()
    }

    /// Create the view for the application.
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.build_header(),
            self.build_toolbar(),
            self.build_card_grid(),
        ]
        .spacing(32)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| style::main_container(&self.palette))
            .into()
    }

    /// Number keys pick a filter, `t` flips the theme.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            if modifiers.command() {
                return None;
            }
            match key.as_ref() {
                Key::Character("1") => Some(Message::FilterSelected(Filter::All)),
                Key::Character("2") => Some(Message::FilterSelected(Filter::Active)),
                Key::Character("3") => Some(Message::FilterSelected(Filter::Inactive)),
                Key::Character("t") => Some(Message::ToggleTheme),
                _ => None,
            }
        })
    }

    /// Base iced theme so unstyled widgets match the palette.
    pub fn theme(&self) -> Theme {
        match self.mode {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        "Extensions".to_string()
    }

    pub fn store(&self) -> &ExtensionStore {
        &self.store
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// One entry per filter, in button order; exactly one is selected.
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        let current = self.store.filter();
        let counts = self.store.counts();

        Filter::ALL
            .iter()
            .map(|&filter| FilterButton {
                filter,
                selected: filter == current,
                count: counts.get(filter),
            })
            .collect()
    }

    /// Visible extensions split into grid rows, preserving order.
    pub fn card_rows(&self) -> Vec<Vec<&Extension>> {
        let columns = self.config.appearance.columns.max(1) as usize;
        self.store
            .visible_extensions()
            .chunks(columns)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    // --- Private methods ---

    fn toggle_theme(&mut self) {
        self.mode = self.mode.toggled();
        self.palette = Palette::for_mode(self.mode);
        self.config.appearance.theme = self.mode;
        log::debug!("Theme switched to {:?}", self.mode);

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                log::warn!("Failed to save config: {}", e);
            }
        }
    }

    fn build_header(&self) -> Element<'_, Message> {
        let palette = &self.palette;

        let logo = text("Extensions").size(24).font(BOLD).color(palette.text);

        let toggle_label = match self.mode {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        };
        let theme_toggle = button(text(toggle_label).size(14))
            .on_press(Message::ToggleTheme)
            .padding([10, 14])
            .style(move |_, status| style::theme_toggle(palette, status));

        container(
            row![logo, horizontal_space(), theme_toggle].align_y(Alignment::Center),
        )
        .padding([12, 16])
        .width(Length::Fill)
        .style(move |_| style::header_bar(palette))
        .into()
    }

    fn build_toolbar(&self) -> Element<'_, Message> {
        let title = text("Extensions List")
            .size(30)
            .font(BOLD)
            .color(self.palette.text);

        row![title, horizontal_space(), self.build_filter_buttons()]
            .align_y(Alignment::Center)
            .into()
    }

    fn build_filter_buttons(&self) -> Element<'_, Message> {
        let palette = &self.palette;

        let buttons: Vec<Element<Message>> = self
            .filter_buttons()
            .into_iter()
            .map(|FilterButton { filter, selected, count }| {
                let label = format!("{} ({})", filter.label(), count);
                button(text(label).size(16))
                    .on_press(Message::FilterSelected(filter))
                    .padding([8, 20])
                    .style(move |_, status| style::filter_button(palette, selected, status))
                    .into()
            })
            .collect();

        Row::with_children(buttons).spacing(12).into()
    }

    fn build_card_grid(&self) -> Element<'_, Message> {
        let card_rows = self.card_rows();

        if card_rows.is_empty() {
            let message = match self.store.filter() {
                Filter::All => "No extensions installed.",
                Filter::Active => "No active extensions.",
                Filter::Inactive => "No inactive extensions.",
            };
            return text(message).size(16).color(self.palette.subtext).into();
        }

        let columns = self.config.appearance.columns.max(1) as usize;
        let rows: Vec<Element<Message>> = card_rows
            .into_iter()
            .map(|chunk| {
                let filled = chunk.len();
                let mut cards: Vec<Element<Message>> =
                    chunk.into_iter().map(|ext| self.build_card(ext)).collect();
                // Keep card widths equal on a short last row
                for _ in filled..columns {
                    cards.push(Space::with_width(Length::FillPortion(1)).into());
                }
                Row::with_children(cards).spacing(12).into()
            })
            .collect();

        scrollable(Column::with_children(rows).spacing(12))
            .style(|_, _| style::cards_scrollable(&self.palette))
            .height(Length::Fill)
            .into()
    }

    fn build_card<'a>(&'a self, ext: &'a Extension) -> Element<'a, Message> {
        let palette = &self.palette;
        let id = ext.id;
        let is_active = ext.is_active;

        let logo: Element<Message> = match self.logos.get(&id) {
            Some(handle) => svg(handle.clone())
                .width(Length::Fixed(60.0))
                .height(Length::Fixed(60.0))
                .into(),
            None => container(text(ext.monogram()).size(28).font(BOLD))
                .center_x(Length::Fixed(60.0))
                .center_y(Length::Fixed(60.0))
                .style(move |_| style::logo_badge(palette))
                .into(),
        };

        let details = column![
            text(&ext.name).size(20).font(BOLD).color(palette.text),
            text(&ext.description).size(15).color(palette.subtext),
        ]
        .spacing(8);

        let remove = button(text("Remove").size(15))
            .on_press(Message::DeleteExtension(id))
            .padding([6, 16])
            .style(move |_, status| style::remove_button(palette, status));

        let switch = toggler(is_active)
            .on_toggle(move |_| Message::ToggleExtension(id))
            .size(22)
            .style(move |_, _| style::active_switch(palette, is_active));

        let content = column![
            row![logo, details].spacing(16).align_y(Alignment::Start),
            Space::with_height(Length::Fill),
            row![remove, horizontal_space(), switch].align_y(Alignment::Center),
        ]
        .spacing(24);

        container(content)
            .padding(20)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(200.0))
            .style(move |_| style::card(palette))
            .into()
    }
}

impl Default for ExtensionsApp {
    fn default() -> Self {
        Self::with_store(Config::default(), ExtensionStore::builtin(Filter::All))
    }
}
