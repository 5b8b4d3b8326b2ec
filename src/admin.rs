//! The home sections admin state machine
//!
//! `SectionsAdmin` owns everything the panel displays and stages. Each
//! operation returns the [`Command`]s it wants performed; the GUI runs them
//! as background tasks and feeds the results back through the matching
//! `on_*` handler. Keeping the toolkit out of this module means every
//! workflow can be exercised without a window or a backend.

use std::collections::HashMap;

use crate::api::{CreateSection, UpdateSection};
use crate::error::Result;
use crate::media::DataUrl;
use crate::state::{
    BannerStaging, CardStaging, HomeSection, PendingImages, SectionType, SelectedFile, StagedId,
};

/// Severity of a modal notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Success,
}

/// A modal notification shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub text: &'static str,
}

impl Notice {
    const fn warning(title: &'static str, text: &'static str) -> Self {
        Self { level: NoticeLevel::Warning, title, text }
    }

    const fn success(title: &'static str, text: &'static str) -> Self {
        Self { level: NoticeLevel::Success, title, text }
    }
}

pub const NO_IMAGES_SELECTED: Notice =
    Notice::warning("No Images Selected", "Please select at least one image.");
pub const BANNER_TITLE_REQUIRED: Notice =
    Notice::warning("Title Required", "Please enter a title for the banner.");
pub const BANNERS_ADDED: Notice =
    Notice::success("Banners Added!", "Your banners have been successfully added.");
pub const CARD_TITLE_REQUIRED: Notice =
    Notice::warning("Title Required", "Please enter a title for the card.");
pub const CARD_IMAGE_REQUIRED: Notice =
    Notice::warning("Image Required", "Please select an image for the card.");
pub const CARD_ADDED: Notice =
    Notice::success("Card Added!", "Your new card has been successfully added.");

pub const UPDATE_SUCCEEDED: &str = "Section updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update section.";
pub const DELETE_PROMPT: &str = "Delete this section?";

/// Blocking user interaction
///
/// Implemented with native dialogs by the GUI and with a recorder in tests.
pub trait Prompter {
    /// Show a modal notification
    fn notify(&self, notice: Notice);
    /// Show a plain alert with a single OK button
    fn alert(&self, message: &str);
    /// Ask a yes/no question, `true` means yes
    fn confirm(&self, question: &str) -> bool;
}

/// Work the state machine asks the application to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the section list
    Load,
    /// Generate a preview for a file of a banner selection
    PreviewBanner { generation: u64, file: SelectedFile },
    /// Generate a preview for the staged card file
    PreviewCard { file: SelectedFile },
    /// Create one banner of a submitted batch
    CreateBanner { batch: u64, form: CreateSection },
    /// Create the staged card
    CreateCard { form: CreateSection },
    /// Send a partial update for one section
    Update { id: i64, form: UpdateSection },
    /// Delete one section
    Delete { id: i64 },
}

/// Outcome tally for one multi-banner submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerBatch {
    pub issued: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BannerBatch {
    pub fn is_complete(&self) -> bool {
        self.succeeded + self.failed >= self.issued
    }
}

/// Admin panel state
pub struct SectionsAdmin<P> {
    prompter: P,
    image_base_url: String,
    sections: Vec<HomeSection>,
    /// Multi-banner upload form
    pub banners: BannerStaging,
    /// New card form
    pub card: CardStaging,
    pending_images: PendingImages,
    batches: HashMap<u64, BannerBatch>,
    next_batch: u64,
}

impl<P: Prompter> SectionsAdmin<P> {
    pub fn new(prompter: P, image_base_url: impl Into<String>) -> Self {
        Self {
            prompter,
            image_base_url: image_base_url.into(),
            sections: Vec::new(),
            banners: BannerStaging::default(),
            card: CardStaging::default(),
            pending_images: PendingImages::default(),
            batches: HashMap::new(),
            next_batch: 0,
        }
    }

    /// Sections as of the last successful load
    pub fn sections(&self) -> &[HomeSection] {
        &self.sections
    }

    pub fn pending_image(&self, section_id: i64) -> Option<&SelectedFile> {
        self.pending_images.get(section_id)
    }

    pub fn batch(&self, batch: u64) -> Option<&BannerBatch> {
        self.batches.get(&batch)
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    // ========== Loader ==========

    /// Request a fresh section list
    pub fn load(&self) -> Vec<Command> {
        vec![Command::Load]
    }

    /// Replace the list wholesale, or keep the old one on failure
    pub fn on_loaded(&mut self, result: Result<Vec<HomeSection>>) -> Vec<Command> {
        match result {
            Ok(sections) => {
                let base = &self.image_base_url;
                self.sections = sections
                    .into_iter()
                    .map(|s| s.with_resolved_images(base))
                    .collect();

                let ids: Vec<i64> = self.sections.iter().map(|s| s.id).collect();
                self.pending_images.retain_sections(&ids);

                log::info!("Loaded {} home sections", self.sections.len());
            }
            Err(e) => log::error!("Failed to load home sections: {}", e),
        }
        Vec::new()
    }

    // ========== Uploader ==========

    /// Start a new banner selection and preview every file in it
    pub fn select_banner_files(&mut self, files: Vec<SelectedFile>) -> Vec<Command> {
        let generation = self.banners.begin_selection();
        files
            .into_iter()
            .map(|file| Command::PreviewBanner { generation, file })
            .collect()
    }

    /// Stage a finished banner preview
    pub fn on_banner_preview(
        &mut self,
        generation: u64,
        file: SelectedFile,
        result: Result<DataUrl>,
    ) -> Vec<Command> {
        match result {
            Ok(preview) => {
                self.banners.push_preview(generation, file, preview);
            }
            Err(e) => log::error!("Failed to preview {}: {}", file.name(), e),
        }
        Vec::new()
    }

    pub fn remove_banner_file(&mut self, id: StagedId) {
        self.banners.remove(id);
    }

    /// Stage the image for a new card and preview it
    pub fn select_card_file(&mut self, file: SelectedFile) -> Vec<Command> {
        self.card.stage(file.clone());
        vec![Command::PreviewCard { file }]
    }

    pub fn on_card_preview(&mut self, file: SelectedFile, result: Result<DataUrl>) -> Vec<Command> {
        match result {
            Ok(preview) => {
                if !self.card.set_preview(&file, preview) {
                    log::debug!("Dropping preview for replaced card file {}", file.name());
                }
            }
            Err(e) => log::error!("Failed to preview {}: {}", file.name(), e),
        }
        Vec::new()
    }

    /// Attach a replacement image to an existing row
    pub fn attach_image(&mut self, section_id: i64, file: SelectedFile) {
        log::debug!("Staged {} for section {}", file.name(), section_id);
        self.pending_images.attach(section_id, file);
    }

    // ========== Row editing ==========

    pub fn edit_description(&mut self, section_id: i64, text: String) {
        if let Some(section) = self.section_mut(section_id) {
            section.description = Some(text);
        }
    }

    pub fn edit_route(&mut self, section_id: i64, text: String) {
        if let Some(section) = self.section_mut(section_id) {
            section.route = Some(text);
        }
    }

    fn section_mut(&mut self, section_id: i64) -> Option<&mut HomeSection> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    // ========== Mutator: banners ==========

    /// Submit every staged banner as its own create request.
    ///
    /// The success notice is shown as soon as the requests are issued,
    /// whatever their outcome.
    pub fn submit_banners(&mut self) -> Vec<Command> {
        if self.banners.is_empty() {
            self.prompter.notify(NO_IMAGES_SELECTED);
            return Vec::new();
        }
        if is_blank(&self.banners.title) {
            self.prompter.notify(BANNER_TITLE_REQUIRED);
            return Vec::new();
        }

        let batch = self.next_batch;
        self.next_batch += 1;

        let title = self.banners.title.clone();
        let description = non_blank(&self.banners.description);
        let commands: Vec<Command> = self
            .banners
            .files()
            .iter()
            .map(|staged| Command::CreateBanner {
                batch,
                form: CreateSection {
                    section_type: SectionType::Banner,
                    title: title.clone(),
                    description: description.clone(),
                    image: staged.file.clone(),
                },
            })
            .collect();

        self.batches.insert(
            batch,
            BannerBatch {
                issued: commands.len(),
                ..Default::default()
            },
        );
        log::info!("Submitting {} banners titled '{}'", commands.len(), title);

        self.banners.clear();
        self.prompter.notify(BANNERS_ADDED);
        commands
    }

    /// One banner of a batch finished
    pub fn on_banner_created(&mut self, batch: u64, result: Result<HomeSection>) -> Vec<Command> {
        let succeeded = result.is_ok();
        if let Err(e) = &result {
            log::error!("Failed to create banner: {}", e);
        }

        if let Some(tally) = self.batches.get_mut(&batch) {
            if succeeded {
                tally.succeeded += 1;
            } else {
                tally.failed += 1;
            }
            if tally.is_complete() {
                log::info!(
                    "Banner batch {} finished: {} created, {} failed",
                    batch,
                    tally.succeeded,
                    tally.failed
                );
                self.batches.remove(&batch);
            }
        }

        if succeeded {
            self.load()
        } else {
            Vec::new()
        }
    }

    // ========== Mutator: card ==========

    pub fn submit_card(&mut self) -> Vec<Command> {
        if is_blank(&self.card.title) {
            self.prompter.notify(CARD_TITLE_REQUIRED);
            return Vec::new();
        }
        let Some(image) = self.card.file().cloned() else {
            self.prompter.notify(CARD_IMAGE_REQUIRED);
            return Vec::new();
        };

        vec![Command::CreateCard {
            form: CreateSection {
                section_type: SectionType::Card,
                title: self.card.title.clone(),
                description: non_blank(&self.card.description),
                image,
            },
        }]
    }

    /// Failures here are only logged
    pub fn on_card_created(&mut self, result: Result<HomeSection>) -> Vec<Command> {
        match result {
            Ok(section) => {
                log::info!("Created card {} '{}'", section.id, section.title);
                self.card.clear();
                self.prompter.notify(CARD_ADDED);
                self.load()
            }
            Err(e) => {
                log::error!("Failed to create card: {}", e);
                Vec::new()
            }
        }
    }

    // ========== Mutator: update ==========

    /// Send whichever of description, replacement image and route are set
    pub fn update(&mut self, section_id: i64) -> Vec<Command> {
        let Some(section) = self.sections.iter().find(|s| s.id == section_id) else {
            log::warn!("Update requested for unknown section {}", section_id);
            return Vec::new();
        };

        let form = UpdateSection {
            description: section.description.clone().filter(|d| !d.is_empty()),
            file: self.pending_images.get(section_id).cloned(),
            route: section.route.clone().filter(|r| !r.is_empty()),
        };
        vec![Command::Update { id: section_id, form }]
    }

    pub fn on_updated(&mut self, section_id: i64, result: Result<HomeSection>) -> Vec<Command> {
        match result {
            Ok(_) => {
                self.prompter.alert(UPDATE_SUCCEEDED);
                self.pending_images.clear(section_id);
                self.load()
            }
            Err(e) => {
                log::error!("Failed to update section {}: {}", section_id, e);
                self.prompter.alert(UPDATE_FAILED);
                Vec::new()
            }
        }
    }

    // ========== Mutator: delete ==========

    /// Delete after an explicit yes from the user
    pub fn delete(&mut self, section_id: i64) -> Vec<Command> {
        if !self.prompter.confirm(DELETE_PROMPT) {
            return Vec::new();
        }
        vec![Command::Delete { id: section_id }]
    }

    /// The list is refreshed whether or not the delete went through
    pub fn on_deleted(&mut self, section_id: i64, result: Result<()>) -> Vec<Command> {
        if let Err(e) = result {
            log::error!("Failed to delete section {}: {}", section_id, e);
        }
        self.load()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn non_blank(text: &str) -> Option<String> {
    if is_blank(text) {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;

    const BASE: &str = "http://cdn.example.org";

    #[derive(Default)]
    struct RecordingPrompter {
        notices: RefCell<Vec<Notice>>,
        alerts: RefCell<Vec<String>>,
        questions: Cell<usize>,
        answer: Cell<bool>,
    }

    impl Prompter for RecordingPrompter {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _question: &str) -> bool {
            self.questions.set(self.questions.get() + 1);
            self.answer.get()
        }
    }

    fn admin() -> SectionsAdmin<RecordingPrompter> {
        SectionsAdmin::new(RecordingPrompter::default(), BASE)
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new_unchecked(PathBuf::from(format!("/tmp/{}", name)))
    }

    fn preview() -> DataUrl {
        DataUrl::new("image/png", vec![0u8; 4])
    }

    fn section(id: i64, image: &str) -> HomeSection {
        HomeSection {
            id,
            section_type: SectionType::Banner,
            title: format!("Section {}", id),
            description: None,
            route: None,
            image_url: Some(image.to_string()),
            image_urls: Vec::new(),
        }
    }

    fn backend_error() -> AdminError {
        AdminError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    fn stage_banners(admin: &mut SectionsAdmin<RecordingPrompter>, names: &[&str]) {
        let files: Vec<SelectedFile> = names.iter().map(|n| file(n)).collect();
        let commands = admin.select_banner_files(files);
        for command in commands {
            if let Command::PreviewBanner { generation, file } = command {
                admin.on_banner_preview(generation, file, Ok(preview()));
            }
        }
    }

    fn loaded(admin: &mut SectionsAdmin<RecordingPrompter>, sections: Vec<HomeSection>) {
        admin.on_loaded(Ok(sections));
    }

    #[test]
    fn test_load_resolves_image_urls() {
        let mut admin = admin();
        loaded(
            &mut admin,
            vec![section(1, "/uploads/a.jpg"), section(2, "https://other.org/b.jpg")],
        );

        let urls: Vec<_> = admin
            .sections()
            .iter()
            .map(|s| s.image_url.clone().unwrap())
            .collect();
        assert_eq!(
            urls,
            vec!["http://cdn.example.org/uploads/a.jpg", "https://other.org/b.jpg"]
        );
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut admin = admin();
        loaded(&mut admin, vec![section(1, "/a.jpg")]);

        let commands = admin.on_loaded(Err(AdminError::Transport("offline".to_string())));

        assert!(commands.is_empty());
        assert_eq!(admin.sections().len(), 1);
    }

    #[test]
    fn test_banners_without_files_warns() {
        let mut admin = admin();
        admin.banners.title = "Summer".to_string();

        let commands = admin.submit_banners();

        assert!(commands.is_empty());
        assert_eq!(*admin.prompter().notices.borrow(), vec![NO_IMAGES_SELECTED]);
    }

    #[test]
    fn test_banners_with_blank_title_warns() {
        let mut admin = admin();
        stage_banners(&mut admin, &["a.png"]);
        admin.banners.title = "   \t".to_string();

        let commands = admin.submit_banners();

        assert!(commands.is_empty());
        assert_eq!(*admin.prompter().notices.borrow(), vec![BANNER_TITLE_REQUIRED]);
        // Nothing was cleared
        assert_eq!(admin.banners.files().len(), 1);
    }

    #[test]
    fn test_banners_issue_one_request_per_file() {
        let mut admin = admin();
        stage_banners(&mut admin, &["a.png", "b.png", "c.png"]);
        admin.banners.title = "Summer".to_string();
        admin.banners.description = "Sale".to_string();

        let commands = admin.submit_banners();

        assert_eq!(commands.len(), 3);
        let mut images = Vec::new();
        for command in &commands {
            match command {
                Command::CreateBanner { form, .. } => {
                    assert_eq!(form.section_type, SectionType::Banner);
                    assert_eq!(form.title, "Summer");
                    assert_eq!(form.description.as_deref(), Some("Sale"));
                    images.push(form.image.name().to_string());
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
        images.dedup();
        assert_eq!(images.len(), 3);

        assert!(admin.banners.is_empty());
        assert!(admin.banners.title.is_empty());
        assert!(admin.banners.description.is_empty());
        assert_eq!(*admin.prompter().notices.borrow(), vec![BANNERS_ADDED]);
    }

    #[test]
    fn test_blank_banner_description_is_omitted() {
        let mut admin = admin();
        stage_banners(&mut admin, &["a.png"]);
        admin.banners.title = "Summer".to_string();
        admin.banners.description = "  ".to_string();

        let commands = admin.submit_banners();

        match &commands[0] {
            Command::CreateBanner { form, .. } => assert_eq!(form.description, None),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_each_banner_success_reloads_once() {
        let mut admin = admin();
        stage_banners(&mut admin, &["a.png", "b.png"]);
        admin.banners.title = "Summer".to_string();
        let commands = admin.submit_banners();
        let batch = match &commands[0] {
            Command::CreateBanner { batch, .. } => *batch,
            other => panic!("unexpected command {:?}", other),
        };

        let first = admin.on_banner_created(batch, Ok(section(10, "/a.png")));
        assert_eq!(first, vec![Command::Load]);
        assert_eq!(admin.batch(batch).map(|b| b.succeeded), Some(1));

        let second = admin.on_banner_created(batch, Err(backend_error()));
        assert!(second.is_empty());
        // Batch is complete and forgotten
        assert!(admin.batch(batch).is_none());
    }

    #[test]
    fn test_remove_staged_banner() {
        let mut admin = admin();
        stage_banners(&mut admin, &["a.png", "b.png", "c.png"]);
        let target = admin.banners.files()[1].id;

        admin.remove_banner_file(target);

        let names: Vec<&str> = admin.banners.files().iter().map(|f| f.file.name()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
    }

    #[test]
    fn test_banner_previews_follow_completion_order() {
        let mut admin = admin();
        let commands = admin.select_banner_files(vec![file("a.png"), file("b.png")]);
        let generation = match &commands[0] {
            Command::PreviewBanner { generation, .. } => *generation,
            other => panic!("unexpected command {:?}", other),
        };

        admin.on_banner_preview(generation, file("b.png"), Ok(preview()));
        admin.on_banner_preview(generation, file("a.png"), Ok(preview()));

        let names: Vec<&str> = admin.banners.files().iter().map(|f| f.file.name()).collect();
        assert_eq!(names, vec!["b.png", "a.png"]);
    }

    #[test]
    fn test_failed_preview_is_skipped() {
        let mut admin = admin();
        let commands = admin.select_banner_files(vec![file("a.png")]);
        let generation = match &commands[0] {
            Command::PreviewBanner { generation, .. } => *generation,
            other => panic!("unexpected command {:?}", other),
        };

        admin.on_banner_preview(generation, file("a.png"), Err(AdminError::Io("gone".into())));

        assert!(admin.banners.is_empty());
    }

    #[test]
    fn test_card_requires_title_then_image() {
        let mut admin = admin();
        admin.card.stage(file("card.png"));

        assert!(admin.submit_card().is_empty());

        admin.card.clear();
        admin.card.title = "Join us".to_string();
        assert!(admin.submit_card().is_empty());

        assert_eq!(
            *admin.prompter().notices.borrow(),
            vec![CARD_TITLE_REQUIRED, CARD_IMAGE_REQUIRED]
        );
    }

    #[test]
    fn test_card_submission_and_success() {
        let mut admin = admin();
        admin.card.title = "Join us".to_string();
        let preview_jobs = admin.select_card_file(file("card.png"));
        assert_eq!(preview_jobs, vec![Command::PreviewCard { file: file("card.png") }]);
        admin.on_card_preview(file("card.png"), Ok(preview()));

        let commands = admin.submit_card();
        assert_eq!(
            commands,
            vec![Command::CreateCard {
                form: CreateSection {
                    section_type: SectionType::Card,
                    title: "Join us".to_string(),
                    description: None,
                    image: file("card.png"),
                },
            }]
        );
        // Staged card stays until the backend confirms
        assert!(admin.card.file().is_some());

        let followup = admin.on_card_created(Ok(section(5, "/card.png")));
        assert_eq!(followup, vec![Command::Load]);
        assert!(admin.card.file().is_none());
        assert!(admin.card.preview().is_none());
        assert!(admin.card.title.is_empty());
        assert_eq!(*admin.prompter().notices.borrow(), vec![CARD_ADDED]);
    }

    #[test]
    fn test_card_failure_is_silent() {
        let mut admin = admin();
        admin.card.title = "Join us".to_string();
        admin.select_card_file(file("card.png"));

        let followup = admin.on_card_created(Err(backend_error()));

        assert!(followup.is_empty());
        assert!(admin.prompter().notices.borrow().is_empty());
        assert!(admin.card.file().is_some());
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let mut admin = admin();
        loaded(&mut admin, vec![section(3, "/a.jpg")]);
        admin.edit_description(3, "Fresh copy".to_string());

        let commands = admin.update(3);

        assert_eq!(
            commands,
            vec![Command::Update {
                id: 3,
                form: UpdateSection {
                    description: Some("Fresh copy".to_string()),
                    file: None,
                    route: None,
                },
            }]
        );
    }

    #[test]
    fn test_update_with_nothing_set_is_empty_payload() {
        let mut admin = admin();
        loaded(&mut admin, vec![section(3, "/a.jpg")]);
        admin.edit_route(3, String::new());

        match &admin.update(3)[..] {
            [Command::Update { form, .. }] => assert!(form.is_empty()),
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_update_success_clears_pending_image() {
        let mut admin = admin();
        loaded(&mut admin, vec![section(3, "/a.jpg"), section(4, "/b.jpg")]);
        admin.attach_image(3, file("new.png"));
        admin.attach_image(4, file("other.png"));
        admin.edit_route(3, "/promo".to_string());

        let commands = admin.update(3);
        match &commands[..] {
            [Command::Update { form, .. }] => {
                assert_eq!(form.file, Some(file("new.png")));
                assert_eq!(form.route.as_deref(), Some("/promo"));
            }
            other => panic!("unexpected commands {:?}", other),
        }

        let followup = admin.on_updated(3, Ok(section(3, "/new.png")));

        assert_eq!(followup, vec![Command::Load]);
        assert!(admin.pending_image(3).is_none());
        assert!(admin.pending_image(4).is_some());
        assert_eq!(*admin.prompter().alerts.borrow(), vec![UPDATE_SUCCEEDED]);
    }

    #[test]
    fn test_update_failure_alerts_and_keeps_image() {
        let mut admin = admin();
        loaded(&mut admin, vec![section(3, "/a.jpg")]);
        admin.attach_image(3, file("new.png"));

        let followup = admin.on_updated(3, Err(backend_error()));

        assert!(followup.is_empty());
        assert!(admin.pending_image(3).is_some());
        assert_eq!(*admin.prompter().alerts.borrow(), vec![UPDATE_FAILED]);
    }

    #[test]
    fn test_update_unknown_section() {
        let mut admin = admin();
        assert!(admin.update(99).is_empty());
    }

    #[test]
    fn test_reload_prunes_images_of_removed_sections() {
        let mut admin = admin();
        loaded(&mut admin, vec![section(3, "/a.jpg"), section(4, "/b.jpg")]);
        admin.attach_image(3, file("x.png"));
        admin.attach_image(4, file("y.png"));

        loaded(&mut admin, vec![section(4, "/b.jpg")]);

        assert!(admin.pending_image(3).is_none());
        assert!(admin.pending_image(4).is_some());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut admin = admin();

        assert!(admin.delete(8).is_empty());

        admin.prompter().answer.set(true);
        assert_eq!(admin.delete(8), vec![Command::Delete { id: 8 }]);
        assert_eq!(admin.prompter().questions.get(), 2);
    }

    #[test]
    fn test_delete_reloads_regardless_of_outcome() {
        let mut admin = admin();
        assert_eq!(admin.on_deleted(8, Ok(())), vec![Command::Load]);
        assert_eq!(admin.on_deleted(8, Err(backend_error())), vec![Command::Load]);
    }
}
