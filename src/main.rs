use iced::widget::{button, column, container, text, Column};
use iced::{Alignment, Color, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::time::Duration;

// Declare the application modules
mod color;
mod error;
mod photo;
mod state;

use error::PhotoError;
use photo::PhotoEntry;
use state::data::SavedPhoto;
use state::edit::MonoFilter;
use state::editor::{EditorState, SAVE_MESSAGE_SECS};
use state::library::{self, Library};

/// Main application state
struct MonoEditor {
    /// The save catalog and pictures folder
    library: Library,
    /// The pick / filter / save state machine
    editor: EditorState,
    /// The one built-in filter
    filter: MonoFilter,
    /// Pixel handle for the preview widget, rebuilt when the photo changes
    preview: Option<iced::widget::image::Handle>,
    /// True while a picked file is being read and decoded
    loading: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select Photo" button
    PickPhoto,
    /// Background load finished
    PhotoLoaded(Result<PhotoEntry, PhotoError>),
    /// User clicked the "Apply Mono Filter" button
    ApplyFilter,
    /// User clicked the "Save to Photos" button
    SavePhoto,
    /// Background save finished
    SaveComplete(Result<SavedPhoto, PhotoError>),
    /// The save confirmation timer for this generation fired
    ClearSaveMessage(u64),
}

impl MonoEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Initialize the catalog database
        // If this fails, we panic because the app cannot function without its catalog
        let library = Library::new()
            .expect("Failed to initialize catalog. Check permissions and disk space.");

        let saved = library.saved_count().unwrap_or(0);
        println!("🎞️  Mono Editor initialized, {} photos saved so far", saved);

        (
            MonoEditor {
                library,
                editor: EditorState::new(),
                filter: MonoFilter::default(),
                preview: None,
                loading: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickPhoto => {
                if self.loading {
                    return Task::none();
                }

                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Photo")
                    .add_filter(
                        "Images",
                        &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"],
                    )
                    .pick_file();

                if let Some(path) = file {
                    self.loading = true;
                    return Task::perform(
                        photo::loader::load_photo(path),
                        Message::PhotoLoaded,
                    );
                }

                Task::none()
            }
            Message::PhotoLoaded(result) => {
                self.loading = false;
                if self.editor.photo_loaded(result) {
                    self.refresh_preview();
                }
                Task::none()
            }
            Message::ApplyFilter => {
                if self.editor.apply_filter(&self.filter) {
                    self.refresh_preview();
                }
                Task::none()
            }
            Message::SavePhoto => {
                if let Some(handed_off) = self.editor.begin_save() {
                    let db_path = self.library.path().clone();
                    let photos_dir = self.library.photos_dir().clone();
                    return Task::perform(
                        library::save_to_library(handed_off, db_path, photos_dir),
                        Message::SaveComplete,
                    );
                }
                Task::none()
            }
            Message::SaveComplete(result) => {
                if let Some(generation) = self.editor.save_finished(result) {
                    // One-shot clear for this confirmation; a later save
                    // bumps the generation and this clear is ignored
                    return Task::perform(
                        async move {
                            tokio::time::sleep(Duration::from_secs(SAVE_MESSAGE_SECS))
                                .await;
                            generation
                        },
                        Message::ClearSaveMessage,
                    );
                }
                Task::none()
            }
            Message::ClearSaveMessage(generation) => {
                self.editor.clear_save_message(generation);
                Task::none()
            }
        }
    }

    /// Rebuild the preview pixels after the photo changed
    fn refresh_preview(&mut self) {
        self.preview = self.editor.photo().map(|photo| {
            let (width, height, pixels) = photo.rgba_bytes();
            iced::widget::image::Handle::from_rgba(width, height, pixels)
        });
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let preview: Element<Message> = match &self.preview {
            Some(handle) => iced::widget::image(handle.clone())
                .height(Length::Fixed(300.0))
                .into(),
            None => text(PhotoError::NoPhoto.to_string()).size(16).into(),
        };

        let has_photo = self.editor.photo().is_some();

        let mut content: Column<Message> = column![
            text("Mono Editor").size(48),
            preview,
            button("Select Photo")
                .padding(10)
                .on_press_maybe((!self.loading).then_some(Message::PickPhoto)),
            button("Apply Mono Filter")
                .padding(10)
                .on_press_maybe(has_photo.then_some(Message::ApplyFilter)),
            button("Save to Photos")
                .padding(10)
                .on_press_maybe(
                    (has_photo && !self.editor.is_busy()).then_some(Message::SavePhoto),
                ),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        if self.loading || self.editor.is_busy() {
            content = content.push(text("Working...").size(16));
        }

        if let Some(error) = self.editor.last_error() {
            content = content.push(text(error.to_string()).size(16).style(|_theme| {
                text::Style {
                    color: Some(Color::from_rgb(0.85, 0.3, 0.3)),
                }
            }));
        }

        if let Some(message) = self.editor.save_message() {
            content = content.push(text(message).size(16).style(|_theme| text::Style {
                color: Some(Color::from_rgb(0.3, 0.75, 0.4)),
            }));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Mono Editor",
        MonoEditor::update,
        MonoEditor::view,
    )
    .theme(MonoEditor::theme)
    .centered()
    .run_with(MonoEditor::new)
}
