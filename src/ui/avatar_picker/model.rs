#[derive(Debug)]
pub struct AvatarPicker {
    pub visible: bool,
}

#[derive(Debug)]
pub enum AvatarPickerInput {
    SetVisible(bool),
}
