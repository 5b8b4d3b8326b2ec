//! The iced application
//!
//! Translates UI events into `SectionsAdmin` operations and runs the
//! resulting commands as background tasks.

use iced::widget::{column, container, horizontal_rule, scrollable, text};
use iced::{Element, Length, Task, Theme};

use crate::admin::{Command, SectionsAdmin};
use crate::api::SectionsClient;
use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::media::{generate_preview, DataUrl};
use crate::state::{HomeSection, SelectedFile, StagedId};
use crate::ui::{dialogs, view, NativePrompter};

/// Main application state
pub struct AdminApp {
    admin: SectionsAdmin<NativePrompter>,
    client: SectionsClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User asked for a fresh list
    Refresh,
    /// Section list request finished
    Loaded(Result<Vec<HomeSection>, AdminError>),

    // ========== Banner form ==========
    PickBannerFiles,
    BannerPreviewReady {
        generation: u64,
        file: SelectedFile,
        result: Result<DataUrl, AdminError>,
    },
    RemoveBannerFile(StagedId),
    BannerTitleChanged(String),
    BannerDescriptionChanged(String),
    SubmitBanners,
    BannerCreated {
        batch: u64,
        result: Result<HomeSection, AdminError>,
    },

    // ========== Card form ==========
    PickCardFile,
    CardPreviewReady {
        file: SelectedFile,
        result: Result<DataUrl, AdminError>,
    },
    CardTitleChanged(String),
    CardDescriptionChanged(String),
    SubmitCard,
    CardCreated(Result<HomeSection, AdminError>),

    // ========== Existing rows ==========
    DescriptionChanged(i64, String),
    RouteChanged(i64, String),
    PickReplacementImage(i64),
    UpdateSection(i64),
    Updated {
        id: i64,
        result: Result<HomeSection, AdminError>,
    },
    DeleteSection(i64),
    Deleted {
        id: i64,
        result: Result<(), AdminError>,
    },
}

impl AdminApp {
    /// Create the application and kick off the initial load
    pub fn new(config: AdminConfig, client: SectionsClient) -> (Self, Task<Message>) {
        let admin = SectionsAdmin::new(NativePrompter, config.image_base_url());
        let app = AdminApp { admin, client };
        let task = app.run(app.admin.load());
        (app, task)
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let commands = match message {
            Message::Refresh => self.admin.load(),
            Message::Loaded(result) => self.admin.on_loaded(result),

            Message::PickBannerFiles => {
                let files = dialogs::pick_images("Select Banner Images");
                if files.is_empty() {
                    return Task::none();
                }
                self.admin.select_banner_files(files)
            }
            Message::BannerPreviewReady {
                generation,
                file,
                result,
            } => self.admin.on_banner_preview(generation, file, result),
            Message::RemoveBannerFile(id) => {
                self.admin.remove_banner_file(id);
                Vec::new()
            }
            Message::BannerTitleChanged(value) => {
                self.admin.banners.title = value;
                Vec::new()
            }
            Message::BannerDescriptionChanged(value) => {
                self.admin.banners.description = value;
                Vec::new()
            }
            Message::SubmitBanners => self.admin.submit_banners(),
            Message::BannerCreated { batch, result } => self.admin.on_banner_created(batch, result),

            Message::PickCardFile => match dialogs::pick_image("Select Card Image") {
                Some(file) => self.admin.select_card_file(file),
                None => Vec::new(),
            },
            Message::CardPreviewReady { file, result } => self.admin.on_card_preview(file, result),
            Message::CardTitleChanged(value) => {
                self.admin.card.title = value;
                Vec::new()
            }
            Message::CardDescriptionChanged(value) => {
                self.admin.card.description = value;
                Vec::new()
            }
            Message::SubmitCard => self.admin.submit_card(),
            Message::CardCreated(result) => self.admin.on_card_created(result),

            Message::DescriptionChanged(id, value) => {
                self.admin.edit_description(id, value);
                Vec::new()
            }
            Message::RouteChanged(id, value) => {
                self.admin.edit_route(id, value);
                Vec::new()
            }
            Message::PickReplacementImage(id) => {
                if let Some(file) = dialogs::pick_image("Select Replacement Image") {
                    self.admin.attach_image(id, file);
                }
                Vec::new()
            }
            Message::UpdateSection(id) => self.admin.update(id),
            Message::Updated { id, result } => self.admin.on_updated(id, result),
            Message::DeleteSection(id) => self.admin.delete(id),
            Message::Deleted { id, result } => self.admin.on_deleted(id, result),
        };

        self.run(commands)
    }

    /// Run commands concurrently, each reporting back on its own
    fn run(&self, commands: Vec<Command>) -> Task<Message> {
        Task::batch(commands.into_iter().map(|command| self.perform(command)))
    }

    fn perform(&self, command: Command) -> Task<Message> {
        let client = self.client.clone();
        match command {
            Command::Load => Task::perform(
                async move { client.list_sections().await },
                Message::Loaded,
            ),
            Command::PreviewBanner { generation, file } => Task::perform(
                async move {
                    let result = generate_preview(file.clone()).await;
                    (file, result)
                },
                move |(file, result)| Message::BannerPreviewReady {
                    generation,
                    file,
                    result,
                },
            ),
            Command::PreviewCard { file } => Task::perform(
                async move {
                    let result = generate_preview(file.clone()).await;
                    (file, result)
                },
                |(file, result)| Message::CardPreviewReady { file, result },
            ),
            Command::CreateBanner { batch, form } => Task::perform(
                async move { client.create_section(form).await },
                move |result| Message::BannerCreated { batch, result },
            ),
            Command::CreateCard { form } => Task::perform(
                async move { client.create_section(form).await },
                Message::CardCreated,
            ),
            Command::Update { id, form } => Task::perform(
                async move { client.update_section(id, form).await },
                move |result| Message::Updated { id, result },
            ),
            Command::Delete { id } => Task::perform(
                async move { client.delete_section(id).await },
                move |result| Message::Deleted { id, result },
            ),
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let content = column![
            text("Home Sections").size(36),
            view::banner_form(&self.admin.banners),
            horizontal_rule(1),
            view::card_form(&self.admin.card),
            horizontal_rule(1),
            view::section_list(self.admin.sections(), |id| self.admin.pending_image(id)),
        ]
        .spacing(24)
        .padding(30);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
