use gtk::glib;
use gtk::prelude::*;
use relm4::*;

use super::model::*;
use crate::ui::profile_account::render::ModalChoice;

/// Modal window offering where the new avatar comes from.
#[relm4::component(pub)]
impl SimpleComponent for AvatarPicker {
    type Init = ();
    type Input = AvatarPickerInput;
    type Output = ModalChoice;

    view! {
        gtk::Window {
            set_widget_name: "avatarpicker",
            set_title: Some("Avatar"),
            set_modal: true,
            set_resizable: false,
            #[watch] set_visible: model.visible,

            // Closing the window is the same as hiding it via button.
            connect_close_request[sender] => move |_| {
                sender.output(ModalChoice::Hide).unwrap_or_default();
                glib::Propagation::Stop
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 10,
                add_css_class: "modal",

                gtk::Button::with_label(ModalChoice::TakePhoto.label()) {
                    connect_clicked[sender] => move |_| {
                        sender.output(ModalChoice::TakePhoto).unwrap_or_default()
                    }
                },

                gtk::Button::with_label(ModalChoice::ChoosePhoto.label()) {
                    connect_clicked[sender] => move |_| {
                        sender.output(ModalChoice::ChoosePhoto).unwrap_or_default()
                    }
                },

                gtk::Button::with_label(ModalChoice::Hide.label()) {
                    connect_clicked[sender] => move |_| {
                        sender.output(ModalChoice::Hide).unwrap_or_default()
                    }
                },
            }
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = AvatarPicker { visible: false };
        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>) {
        match message {
            AvatarPickerInput::SetVisible(visible) => self.visible = visible,
        }
    }
}
