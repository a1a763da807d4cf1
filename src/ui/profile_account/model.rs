use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::render::{render, ScreenView};
use crate::capture::{CaptureError, CaptureOptions, CaptureSource, CapturedImage};
use crate::form::{Field, FormState, ProfileForm, PROFILE_SCHEMA};
use crate::navigation::{Navigator, Route};
use crate::profile::UserProfile;
use crate::store::{ProfileAction, ProfileStore};

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Transient message, `id` distinguishes it from its predecessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Debug)]
pub enum ProfileAccountInput {
    /// Avatar was clicked, show the picker.
    AvatarTapped,
    TakePhoto,
    ChoosePhoto,
    HideModal,
    NameChanged(String),
    SurnameChanged(String),
    Save,
    /// A file was picked in gallery and needs processing.
    Picked(PathBuf),
    Captured(CapturedImage),
    CaptureFailed(CaptureError),
    NoticeExpired(u64),
    /// Screen is shown again, start over from the stored profile.
    Reset,
}

#[derive(Debug)]
pub enum ProfileAccountOutput {
    Navigate(Route),
}

/// Work that has to happen outside of the screen state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Capture(CaptureSource, CaptureOptions),
    Process(PathBuf, CaptureOptions),
    ExpireNotice { id: u64, after: Duration },
    /// Avatar file that is no longer used.
    Discard(PathBuf),
}

/// State of the profile account screen. Store and navigator are
/// provided from outside.
#[derive(Debug)]
pub struct ScreenState<S, N> {
    store: S,
    navigator: N,
    options: CaptureOptions,
    form: FormState,
    modal: ModalVisibility,
    notice: Option<Notice>,
    notices: u64,
}

fn form_for(profile: &UserProfile) -> FormState {
    FormState::new(
        &PROFILE_SCHEMA,
        ProfileForm {
            name: profile.name.clone(),
            surname: profile.surname.clone(),
        },
    )
}

impl<S: ProfileStore, N: Navigator> ScreenState<S, N> {
    pub fn new(store: S, navigator: N, options: CaptureOptions) -> Self {
        let form = form_for(&store.profile());

        ScreenState {
            store,
            navigator,
            options,
            form,
            modal: ModalVisibility::Hidden,
            notice: None,
            notices: 0,
        }
    }

    pub fn render(&self) -> ScreenView {
        render(
            &self.form,
            self.modal,
            &self.store.profile(),
            self.notice.as_ref(),
        )
    }

    pub fn update(&mut self, input: ProfileAccountInput) -> Vec<Effect> {
        match input {
            ProfileAccountInput::AvatarTapped => self.modal = ModalVisibility::Visible,

            ProfileAccountInput::HideModal => self.modal = ModalVisibility::Hidden,

            ProfileAccountInput::TakePhoto => {
                self.modal = ModalVisibility::Hidden;
                return vec![Effect::Capture(CaptureSource::Camera, self.options)];
            }

            ProfileAccountInput::ChoosePhoto => {
                self.modal = ModalVisibility::Hidden;
                return vec![Effect::Capture(CaptureSource::Gallery, self.options)];
            }

            ProfileAccountInput::NameChanged(v) => self.form.set(Field::Name, v),

            ProfileAccountInput::SurnameChanged(v) => self.form.set(Field::Surname, v),

            ProfileAccountInput::Save => self.save(),

            ProfileAccountInput::Picked(path) => return vec![Effect::Process(path, self.options)],

            ProfileAccountInput::Captured(image) => {
                info!("New avatar {:?}", image.path);
                let previous = self.store.profile().image.map(|i| i.path);
                let replaced = previous.filter(|p| *p != image.path);
                self.store.dispatch(ProfileAction::SetImage(image.into()));
                return replaced.map(Effect::Discard).into_iter().collect();
            }

            ProfileAccountInput::CaptureFailed(e) => {
                if e.is_cancellation() {
                    info!("Capture: {}", e);
                } else {
                    warn!("Capture failed: {}", e);
                }
                return self.show_notice(e.user_message());
            }

            ProfileAccountInput::NoticeExpired(id) => {
                if matches!(self.notice, Some(ref n) if n.id == id) {
                    self.notice = None;
                }
            }

            ProfileAccountInput::Reset => {
                self.form = form_for(&self.store.profile());
                self.modal = ModalVisibility::Hidden;
                self.notice = None;
            }
        };

        vec![]
    }

    fn save(&mut self) {
        if !self.form.is_valid() {
            debug!("Not saving invalid profile form: {:?}", self.form.errors());
            return;
        }

        let ProfileForm { name, surname } = self.form.values();
        info!("Saving profile of {}", name);

        self.store.dispatch(ProfileAction::SetInfo { name, surname });
        self.navigator.navigate(Route::Tabs);
    }

    fn show_notice(&mut self, text: String) -> Vec<Effect> {
        self.notices += 1;
        let id = self.notices;
        self.notice = Some(Notice { id, text });

        vec![Effect::ExpireNotice {
            id,
            after: NOTICE_DURATION,
        }]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use mediatype::MediaTypeBuf;

    use super::*;
    use crate::store::Store;

    #[derive(Clone, Default)]
    struct Nav(Rc<RefCell<Vec<Route>>>);

    impl Navigator for Nav {
        fn navigate(&self, route: Route) {
            self.0.borrow_mut().push(route);
        }
    }

    fn screen() -> (ScreenState<Store, Nav>, Store, Nav) {
        let store = Store::default();
        let nav = Nav::default();
        let state = ScreenState::new(store.clone(), nav.clone(), CaptureOptions::default());
        (state, store, nav)
    }

    fn captured() -> CapturedImage {
        CapturedImage {
            path: PathBuf::from("/cache/avatar-1.png"),
            width: 100,
            height: 100,
            mime: "image/png".parse::<MediaTypeBuf>().unwrap(),
        }
    }

    #[test]
    fn empty_form_cannot_be_saved() {
        let (mut s, store, nav) = screen();

        assert!(!s.render().save_enabled);
        assert!(s.update(ProfileAccountInput::Save).is_empty());

        assert_eq!(store.profile(), UserProfile::default());
        assert!(nav.0.borrow().is_empty());
    }

    #[test]
    fn empty_name_is_reported() {
        let (mut s, _, _) = screen();

        s.update(ProfileAccountInput::NameChanged("Ada".to_string()));
        s.update(ProfileAccountInput::NameChanged(String::new()));

        assert!(s.form.errors().name.is_some());
        assert!(!s.form.is_valid());
        assert!(s.render().name.error.is_some());
    }

    #[test]
    fn save_dispatches_and_navigates() {
        let (mut s, store, nav) = screen();

        s.update(ProfileAccountInput::NameChanged("Ada".to_string()));
        s.update(ProfileAccountInput::SurnameChanged(String::new()));
        assert!(s.render().save_enabled);

        s.update(ProfileAccountInput::Save);

        let profile = store.profile();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.surname, "");
        assert_eq!(*nav.0.borrow(), vec![Route::Tabs]);
    }

    #[test]
    fn save_enabled_iff_name_valid() {
        let (mut s, _, _) = screen();

        for (name, surname) in [("", ""), ("Ada", ""), ("", "Lovelace"), ("4", "x"), ("Ada", "L")] {
            s.update(ProfileAccountInput::NameChanged(name.to_string()));
            s.update(ProfileAccountInput::SurnameChanged(surname.to_string()));

            let view = s.render();
            assert_eq!(view.save_enabled, s.form.errors().name.is_none());
            assert_eq!(view.save_enabled, s.form.is_valid());
        }
    }

    #[test]
    fn modal_transitions() {
        let choices = [
            ProfileAccountInput::TakePhoto,
            ProfileAccountInput::ChoosePhoto,
            ProfileAccountInput::HideModal,
        ];

        for choice in choices {
            let (mut s, _, _) = screen();
            assert_eq!(s.modal, ModalVisibility::Hidden);

            s.update(ProfileAccountInput::AvatarTapped);
            assert_eq!(s.modal, ModalVisibility::Visible);
            assert!(s.render().modal.is_some());

            s.update(choice);
            assert_eq!(s.modal, ModalVisibility::Hidden);
            assert!(s.render().modal.is_none());
        }
    }

    #[test]
    fn hiding_modal_does_not_touch_store() {
        let (mut s, store, _) = screen();
        let mut rx = store.subscribe();

        s.update(ProfileAccountInput::AvatarTapped);
        assert!(s.update(ProfileAccountInput::HideModal).is_empty());

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.profile(), UserProfile::default());
    }

    #[test]
    fn photo_choices_request_capture() {
        let (mut s, _, _) = screen();

        s.update(ProfileAccountInput::AvatarTapped);
        assert_eq!(
            s.update(ProfileAccountInput::TakePhoto),
            vec![Effect::Capture(CaptureSource::Camera, CaptureOptions::default())]
        );

        s.update(ProfileAccountInput::AvatarTapped);
        assert_eq!(
            s.update(ProfileAccountInput::ChoosePhoto),
            vec![Effect::Capture(CaptureSource::Gallery, CaptureOptions::default())]
        );

        assert_eq!(
            s.update(ProfileAccountInput::Picked(PathBuf::from("/photo.jpg"))),
            vec![Effect::Process(PathBuf::from("/photo.jpg"), CaptureOptions::default())]
        );
    }

    #[test]
    fn captured_image_becomes_avatar() {
        let (mut s, store, _) = screen();

        s.update(ProfileAccountInput::AvatarTapped);
        s.update(ProfileAccountInput::TakePhoto);
        s.update(ProfileAccountInput::Captured(captured()));

        assert_eq!(store.profile().image, Some(captured().into()));
        assert_eq!(s.render().avatar, Some(captured().path));
    }

    #[test]
    fn typing_keeps_avatar() {
        let (mut s, _, _) = screen();
        s.update(ProfileAccountInput::Captured(captured()));
        let before = s.render();

        s.update(ProfileAccountInput::NameChanged("A".to_string()));
        s.update(ProfileAccountInput::SurnameChanged("L".to_string()));

        assert_eq!(s.render().avatar, before.avatar);
    }

    #[test]
    fn replaced_avatar_is_discarded() {
        let (mut s, _, _) = screen();

        // first avatar replaces nothing
        assert!(s.update(ProfileAccountInput::Captured(captured())).is_empty());

        let newer = CapturedImage {
            path: PathBuf::from("/cache/avatar-2.png"),
            ..captured()
        };
        assert_eq!(
            s.update(ProfileAccountInput::Captured(newer.clone())),
            vec![Effect::Discard(captured().path)]
        );

        // same file again is kept
        assert!(s.update(ProfileAccountInput::Captured(newer)).is_empty());
    }

    #[test]
    fn failed_capture_shows_notice() {
        let (mut s, store, _) = screen();

        let effects = s.update(ProfileAccountInput::CaptureFailed(
            CaptureError::PermissionDenied,
        ));
        let id = s.notice.as_ref().unwrap().id;

        assert_eq!(
            effects,
            vec![Effect::ExpireNotice {
                id,
                after: NOTICE_DURATION
            }]
        );
        assert_eq!(
            s.render().notice.as_deref(),
            Some("Access to the photo was denied")
        );
        assert_eq!(store.profile(), UserProfile::default());

        s.update(ProfileAccountInput::NoticeExpired(id));
        assert!(s.notice.as_ref().is_none());
    }

    #[test]
    fn stale_expiry_keeps_newer_notice() {
        let (mut s, _, _) = screen();

        s.update(ProfileAccountInput::CaptureFailed(CaptureError::Cancelled));
        let first = s.notice.as_ref().unwrap().id;
        s.update(ProfileAccountInput::CaptureFailed(CaptureError::CameraUnavailable));

        s.update(ProfileAccountInput::NoticeExpired(first));
        assert_eq!(
            s.notice.as_ref().map(|n| n.text.as_str()),
            Some("No camera is available")
        );
    }

    #[test]
    fn reset_starts_from_store() {
        let (mut s, _, _) = screen();

        s.update(ProfileAccountInput::NameChanged("Ada".to_string()));
        s.update(ProfileAccountInput::Save);

        s.update(ProfileAccountInput::NameChanged(String::new()));
        s.update(ProfileAccountInput::AvatarTapped);
        s.update(ProfileAccountInput::Reset);

        assert_eq!(s.modal, ModalVisibility::Hidden);
        assert_eq!(s.form.raw().name, "Ada");
        assert!(s.render().save_enabled);
        assert!(s.render().name.error.is_none());
    }

    #[test]
    fn saved_values_are_trimmed() {
        let (mut s, store, _) = screen();

        s.update(ProfileAccountInput::NameChanged(" Ada ".to_string()));
        s.update(ProfileAccountInput::SurnameChanged(" Lovelace ".to_string()));
        s.update(ProfileAccountInput::Save);

        assert_eq!(store.profile().display_name().as_deref(), Some("Ada Lovelace"));
    }
}
