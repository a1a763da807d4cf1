use std::path::PathBuf;

use mediatype::MediaTypeBuf;

/// Avatar image stored on local disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub mime: MediaTypeBuf,
}

/// Profile of the current user, as kept by [`Store`](crate::store::Store).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub surname: String,
    pub image: Option<ImageRef>,
}

impl UserProfile {
    /// Name and surname joined for display, `None` when both are empty.
    pub fn display_name(&self) -> Option<String> {
        let full = format!("{} {}", self.name, self.surname);
        let full = full.trim();

        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}
