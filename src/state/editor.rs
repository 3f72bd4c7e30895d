/// Controller state machine for the pick / filter / save workflow
///
/// `EditorState` holds everything the view renders: the current photo,
/// the last error, the transient save confirmation, and the save
/// in-flight flag. All transitions happen on the UI loop; the async
/// load and save tasks report back through messages, so this struct
/// does no IO and every transition is a plain unit test.

use crate::error::PhotoError;
use crate::photo::PhotoEntry;
use crate::state::data::SavedPhoto;
use crate::state::edit::MonoFilter;

/// How long the save confirmation stays on screen
pub const SAVE_MESSAGE_SECS: u64 = 2;

/// The confirmation shown after a successful save
const SAVED_MESSAGE: &str = "Saved to Photos!";

/// View state for the editor
#[derive(Debug, Default)]
pub struct EditorState {
    /// The photo being edited, if one is loaded
    photo: Option<PhotoEntry>,
    /// The last failed operation's error, cleared by the next success
    last_error: Option<PhotoError>,
    /// Transient save confirmation, cleared by a timer
    save_message: Option<String>,
    /// True only while a save is in flight
    is_busy: bool,
    /// Bumped on every save confirmation; a scheduled clear carries the
    /// generation it was scheduled for, so a stale clear is ignored and
    /// a later save supersedes (never stacks) the pending one
    save_generation: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photo(&self) -> Option<&PhotoEntry> {
        self.photo.as_ref()
    }

    pub fn last_error(&self) -> Option<&PhotoError> {
        self.last_error.as_ref()
    }

    pub fn save_message(&self) -> Option<&str> {
        self.save_message.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    /// A picked file finished loading.
    ///
    /// On success the fresh photo replaces the current one and any prior
    /// error is cleared. On failure the error is recorded and the current
    /// photo is left untouched. Returns true when the photo changed.
    pub fn photo_loaded(&mut self, result: Result<PhotoEntry, PhotoError>) -> bool {
        match result {
            Ok(photo) => {
                self.photo = Some(photo);
                self.last_error = None;
                true
            }
            Err(error) => {
                self.last_error = Some(error);
                false
            }
        }
    }

    /// Apply the mono filter to the current photo.
    ///
    /// No-op when no photo is loaded. On success the filtered photo (a
    /// new value with a new id) replaces the current one and any prior
    /// error is cleared; if the transform cannot produce an output the
    /// error is `InvalidFormat` and the photo is kept. Returns true when
    /// the photo changed.
    pub fn apply_filter(&mut self, filter: &MonoFilter) -> bool {
        let Some(photo) = &self.photo else {
            return false;
        };

        match filter.apply(photo.image()) {
            Some(image) => {
                self.photo = Some(PhotoEntry::edited(image, *filter));
                self.last_error = None;
                true
            }
            None => {
                self.last_error = Some(PhotoError::InvalidFormat);
                false
            }
        }
    }

    /// Start a save of the current photo.
    ///
    /// No-op (returns None) when no photo is loaded. Otherwise marks the
    /// save in flight, clears the previous error and confirmation, and
    /// hands back the photo for the save task. The caller must feed the
    /// task's result to [`save_finished`](Self::save_finished).
    pub fn begin_save(&mut self) -> Option<PhotoEntry> {
        let photo = self.photo.clone()?;
        self.is_busy = true;
        self.last_error = None;
        self.save_message = None;
        Some(photo)
    }

    /// The in-flight save completed.
    ///
    /// On success the confirmation message is shown and the new
    /// generation is returned; the caller schedules a one-shot clear for
    /// it. On failure the error is recorded and no clear is scheduled.
    pub fn save_finished(
        &mut self,
        result: Result<SavedPhoto, PhotoError>,
    ) -> Option<u64> {
        self.is_busy = false;
        match result {
            Ok(_) => {
                self.save_generation += 1;
                self.save_message = Some(SAVED_MESSAGE.to_string());
                Some(self.save_generation)
            }
            Err(error) => {
                self.last_error = Some(error);
                None
            }
        }
    }

    /// A scheduled confirmation clear fired.
    ///
    /// Only the clear scheduled for the current generation takes effect;
    /// a clear left over from an earlier save is ignored.
    pub fn clear_save_message(&mut self, generation: u64) {
        if generation == self.save_generation {
            self.save_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn sample_photo() -> PhotoEntry {
        PhotoEntry::new(DynamicImage::new_rgba8(2, 2))
    }

    fn saved_record() -> SavedPhoto {
        SavedPhoto {
            id: 1,
            filename: "mono_test.png".to_string(),
            path: "/tmp/mono_test.png".to_string(),
            saved_at: 0,
        }
    }

    #[test]
    fn test_failed_load_keeps_photo_and_sets_error() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));
        let id = state.photo().unwrap().id();

        let changed = state.photo_loaded(Err(PhotoError::InvalidFormat));

        assert!(!changed);
        assert_eq!(state.last_error(), Some(&PhotoError::InvalidFormat));
        assert_eq!(state.photo().unwrap().id(), id);
    }

    #[test]
    fn test_successful_load_clears_prior_error() {
        let mut state = EditorState::new();
        state.photo_loaded(Err(PhotoError::InvalidFormat));

        let changed = state.photo_loaded(Ok(sample_photo()));

        assert!(changed);
        assert!(state.last_error().is_none());
        assert!(state.photo().is_some());
    }

    #[test]
    fn test_filter_without_photo_is_a_noop() {
        let mut state = EditorState::new();

        let changed = state.apply_filter(&MonoFilter::default());

        assert!(!changed);
        assert!(state.photo().is_none());
        assert!(state.last_error().is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_filter_produces_new_identity_and_clears_error() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));
        let original_id = state.photo().unwrap().id();

        // A failed save leaves an error behind for the filter to clear
        state.begin_save().unwrap();
        state.save_finished(Err(PhotoError::SaveFailed));
        assert!(state.last_error().is_some());

        let changed = state.apply_filter(&MonoFilter::default());

        assert!(changed);
        assert_ne!(state.photo().unwrap().id(), original_id);
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_filter_failure_is_invalid_format_and_keeps_photo() {
        let mut state = EditorState::new();
        // A zero-dimension image is the one input the transform rejects
        state.photo_loaded(Ok(PhotoEntry::new(DynamicImage::new_rgba8(0, 0))));
        let id = state.photo().unwrap().id();

        let changed = state.apply_filter(&MonoFilter::default());

        assert!(!changed);
        assert_eq!(state.last_error(), Some(&PhotoError::InvalidFormat));
        assert_eq!(state.photo().unwrap().id(), id);
    }

    #[test]
    fn test_save_without_photo_is_a_noop() {
        let mut state = EditorState::new();

        assert!(state.begin_save().is_none());
        assert!(!state.is_busy());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_successful_save_sets_message_then_clear_removes_it() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));

        let handed_off = state.begin_save();
        assert!(handed_off.is_some());
        assert!(state.is_busy());
        assert!(state.save_message().is_none());

        let generation = state.save_finished(Ok(saved_record())).unwrap();
        assert!(!state.is_busy());
        assert_eq!(state.save_message(), Some("Saved to Photos!"));

        // The scheduled clear fires after the 2-second window
        state.clear_save_message(generation);
        assert!(state.save_message().is_none());
    }

    #[test]
    fn test_begin_save_clears_previous_error_and_message() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));

        state.begin_save().unwrap();
        state.save_finished(Err(PhotoError::SaveFailed));
        assert!(state.last_error().is_some());

        state.begin_save().unwrap();
        assert!(state.last_error().is_none());
        assert!(state.save_message().is_none());
    }

    #[test]
    fn test_failing_save_sets_error_and_never_a_message() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));

        state.begin_save().unwrap();
        let scheduled = state.save_finished(Err(PhotoError::SaveFailed));

        assert!(scheduled.is_none());
        assert!(!state.is_busy());
        assert_eq!(state.last_error(), Some(&PhotoError::SaveFailed));
        assert!(state.save_message().is_none());
    }

    #[test]
    fn test_second_save_supersedes_pending_clear() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));

        state.begin_save().unwrap();
        let first = state.save_finished(Ok(saved_record())).unwrap();

        // A second save lands before the first clear fires
        state.begin_save().unwrap();
        let second = state.save_finished(Ok(saved_record())).unwrap();
        assert_eq!(state.save_message(), Some("Saved to Photos!"));

        // The stale clear is ignored, the fresh one takes effect
        state.clear_save_message(first);
        assert_eq!(state.save_message(), Some("Saved to Photos!"));
        state.clear_save_message(second);
        assert!(state.save_message().is_none());
    }

    #[test]
    fn test_unknown_collaborator_failure_is_surfaced() {
        let mut state = EditorState::new();
        state.photo_loaded(Ok(sample_photo()));

        state.begin_save().unwrap();
        state.save_finished(Err(PhotoError::Unknown));

        assert_eq!(state.last_error(), Some(&PhotoError::Unknown));
    }
}
