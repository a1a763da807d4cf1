use std::path::PathBuf;

use super::model::{ModalVisibility, Notice, ProfileAccountInput};
use crate::form::{Field, FormState};
use crate::profile::UserProfile;

pub const NAME_PLACEHOLDER: &str = "Enter your name (Required)";
pub const SURNAME_PLACEHOLDER: &str = "Enter your surname (Optional)";

/// Buttons of the avatar picker, in order of appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalChoice {
    TakePhoto,
    ChoosePhoto,
    Hide,
}

impl ModalChoice {
    pub const ALL: [ModalChoice; 3] = [
        ModalChoice::TakePhoto,
        ModalChoice::ChoosePhoto,
        ModalChoice::Hide,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            ModalChoice::TakePhoto => "Make Photo",
            ModalChoice::ChoosePhoto => "Choose photo",
            ModalChoice::Hide => "Hide Modal",
        }
    }

    pub fn input(self) -> ProfileAccountInput {
        match self {
            ModalChoice::TakePhoto => ProfileAccountInput::TakePhoto,
            ModalChoice::ChoosePhoto => ProfileAccountInput::ChoosePhoto,
            ModalChoice::Hide => ProfileAccountInput::HideModal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<String>,
}

/// Everything the screen shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenView {
    /// Avatar file, `None` shows a placeholder.
    pub avatar: Option<PathBuf>,
    pub name: FieldView,
    pub surname: FieldView,
    pub save_enabled: bool,
    /// Choices of the avatar picker while it is shown.
    pub modal: Option<[ModalChoice; 3]>,
    pub notice: Option<String>,
}

fn field(form: &FormState, field: Field, placeholder: &'static str) -> FieldView {
    let values = form.raw();
    FieldView {
        value: values.get(field).to_string(),
        placeholder,
        error: form.visible_error(field).map(str::to_string),
    }
}

pub fn render(
    form: &FormState,
    modal: ModalVisibility,
    profile: &UserProfile,
    notice: Option<&Notice>,
) -> ScreenView {
    ScreenView {
        avatar: profile.image.as_ref().map(|i| i.path.clone()),
        name: field(form, Field::Name, NAME_PLACEHOLDER),
        surname: field(form, Field::Surname, SURNAME_PLACEHOLDER),
        save_enabled: form.is_valid(),
        modal: match modal {
            ModalVisibility::Visible => Some(ModalChoice::ALL),
            ModalVisibility::Hidden => None,
        },
        notice: notice.map(|n| n.text.clone()),
    }
}
