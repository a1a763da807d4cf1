use std::path::Path;

use gtk::glib::{self, SignalHandlerId};
use gtk::prelude::*;
use relm4::*;

use super::model::*;
use super::render::*;
use crate::capture::{CaptureError, CaptureSource, CapturedImage};
use crate::navigation::{Navigator, Route};
use crate::session::Session;
use crate::store::Store;
use crate::ui::avatar_picker::model::{AvatarPicker, AvatarPickerInput};

impl Navigator for Sender<ProfileAccountOutput> {
    fn navigate(&self, route: Route) {
        self.emit(ProfileAccountOutput::Navigate(route));
    }
}

pub struct ProfileAccount {
    session: Session,
    state: ScreenState<Store, Sender<ProfileAccountOutput>>,
    view: ScreenView,
    picker: Controller<AvatarPicker>,
    /// Gallery dialog has to live as long as it is shown.
    chooser: Option<gtk::FileChooserNative>,
    handlers: Option<EntryHandlers>,
}

struct EntryHandlers {
    name: SignalHandlerId,
    surname: SignalHandlerId,
}

#[derive(Debug)]
pub enum ProfileAccountCmd {
    Captured(CapturedImage),
    Failed(CaptureError),
    NoticeExpired(u64),
}

#[relm4::component(pub)]
impl Component for ProfileAccount {
    type Init = Session;
    type Input = ProfileAccountInput;
    type Output = ProfileAccountOutput;
    type CommandOutput = ProfileAccountCmd;

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_halign: gtk::Align::Center,
            set_spacing: 12,
            add_css_class: "profile-account",

            gtk::Button {
                add_css_class: "avatar",
                set_halign: gtk::Align::Center,
                set_size_request: (100, 100),
                connect_clicked => ProfileAccountInput::AvatarTapped,

                #[name(avatar)]
                gtk::Image {
                    set_pixel_size: 56,
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 4,
                add_css_class: "form",

                #[name(name)]
                gtk::Entry {
                    set_placeholder_text: Some(model.view.name.placeholder),
                    set_text: &model.view.name.value,
                },

                gtk::Label {
                    set_xalign: 0.0,
                    add_css_class: "error",
                    #[watch] set_visible: model.view.name.error.is_some(),
                    #[watch] set_label: model.view.name.error.as_deref().unwrap_or_default(),
                },

                #[name(surname)]
                gtk::Entry {
                    set_placeholder_text: Some(model.view.surname.placeholder),
                    set_text: &model.view.surname.value,
                },

                gtk::Label {
                    set_xalign: 0.0,
                    add_css_class: "error",
                    #[watch] set_visible: model.view.surname.error.is_some(),
                    #[watch] set_label: model.view.surname.error.as_deref().unwrap_or_default(),
                },
            },

            gtk::Button::with_label("Save") {
                add_css_class: "save",
                add_css_class: "suggested-action",
                #[watch] set_sensitive: model.view.save_enabled,
                connect_clicked => ProfileAccountInput::Save,
            },

            gtk::Revealer {
                #[watch] set_reveal_child: model.view.notice.is_some(),

                gtk::Label {
                    add_css_class: "notice",
                    set_wrap: true,
                    #[watch] set_label: model.view.notice.as_deref().unwrap_or_default(),
                }
            }
        }
    }

    fn init(
        session: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let state = ScreenState::new(
            session.store().clone(),
            sender.output_sender().clone(),
            session.capture_options(),
        );

        let picker = AvatarPicker::builder()
            .launch(())
            .forward(sender.input_sender(), ModalChoice::input);

        let mut model = ProfileAccount {
            session,
            view: state.render(),
            state,
            picker,
            chooser: None,
            handlers: None,
        };

        let widgets = view_output!();

        model.handlers = Some(EntryHandlers {
            name: widgets.name.connect_changed(glib::clone!(@strong sender => move |e| {
                sender.input(ProfileAccountInput::NameChanged(e.text().to_string()))
            })),
            surname: widgets.surname.connect_changed(glib::clone!(@strong sender => move |e| {
                sender.input(ProfileAccountInput::SurnameChanged(e.text().to_string()))
            })),
        });

        show_avatar(&widgets.avatar, model.view.avatar.as_deref());

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        root: &Self::Root,
    ) {
        let reset = matches!(message, ProfileAccountInput::Reset);

        let effects = self.state.update(message);
        let previous = std::mem::replace(&mut self.view, self.state.render());

        if reset {
            self.refill_entries(widgets);
        }

        if previous.avatar != self.view.avatar {
            show_avatar(&widgets.avatar, self.view.avatar.as_deref());
        }

        let modal = self.view.modal.is_some();
        if modal {
            let parent = root.root().and_downcast::<gtk::Window>();
            self.picker.widget().set_transient_for(parent.as_ref());
        }
        self.picker.emit(AvatarPickerInput::SetVisible(modal));

        for effect in effects {
            self.run(effect, &sender, root);
        }

        self.update_view(widgets, sender);
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            ProfileAccountCmd::Captured(image) => sender.input(ProfileAccountInput::Captured(image)),
            ProfileAccountCmd::Failed(e) => sender.input(ProfileAccountInput::CaptureFailed(e)),
            ProfileAccountCmd::NoticeExpired(id) => {
                sender.input(ProfileAccountInput::NoticeExpired(id))
            }
        }
    }
}

impl ProfileAccount {
    /// Performs an effect requested by screen state.
    fn run(&mut self, effect: Effect, sender: &ComponentSender<Self>, root: &gtk::Box) {
        match effect {
            Effect::Capture(CaptureSource::Camera, options) => {
                let images = self.session.images().clone();
                sender.oneshot_command(async move {
                    match images.open_camera(options).await {
                        Ok(image) => ProfileAccountCmd::Captured(image),
                        Err(e) => ProfileAccountCmd::Failed(e),
                    }
                });
            }

            // Options are applied once the picked file is processed.
            Effect::Capture(CaptureSource::Gallery, _) => self.open_gallery(sender, root),

            Effect::Process(path, options) => {
                let images = self.session.images().clone();
                sender.oneshot_command(async move {
                    match images.process(&path, options).await {
                        Ok(image) => ProfileAccountCmd::Captured(image),
                        Err(e) => ProfileAccountCmd::Failed(e),
                    }
                });
            }

            Effect::ExpireNotice { id, after } => sender.oneshot_command(async move {
                tokio::time::sleep(after).await;
                ProfileAccountCmd::NoticeExpired(id)
            }),

            Effect::Discard(path) => {
                let images = self.session.images().clone();
                relm4::spawn(async move { images.discard(&path).await });
            }
        }
    }

    /// Lets user pick an image file. Result arrives as
    /// [`ProfileAccountInput::Picked`] or as a cancellation.
    fn open_gallery(&mut self, sender: &ComponentSender<Self>, root: &gtk::Box) {
        let parent = root.root().and_downcast::<gtk::Window>();
        let chooser = gtk::FileChooserNative::new(
            Some("Choose photo"),
            parent.as_ref(),
            gtk::FileChooserAction::Open,
            Some("Choose"),
            Some("Cancel"),
        );
        chooser.set_modal(true);

        let filter = gtk::FileFilter::new();
        filter.set_name(Some("Images"));
        filter.add_mime_type("image/*");
        chooser.add_filter(&filter);

        chooser.connect_response(glib::clone!(@strong sender => move |dialog, response| {
            let picked = (response == gtk::ResponseType::Accept)
                .then(|| dialog.file().and_then(|f| f.path()))
                .flatten();

            match picked {
                Some(path) => sender.input(ProfileAccountInput::Picked(path)),
                None => sender.input(ProfileAccountInput::CaptureFailed(CaptureError::Cancelled)),
            }
        }));

        chooser.show();
        self.chooser = Some(chooser);
    }

    /// Puts form values back into entries without reporting them as edits.
    fn refill_entries(&self, widgets: &ProfileAccountWidgets) {
        let Some(ref handlers) = self.handlers else {
            return;
        };

        for (entry, handler, value) in [
            (&widgets.name, &handlers.name, &self.view.name.value),
            (&widgets.surname, &handlers.surname, &self.view.surname.value),
        ] {
            entry.block_signal(handler);
            entry.set_text(value);
            entry.unblock_signal(handler);
        }
    }
}

fn show_avatar(image: &gtk::Image, path: Option<&Path>) {
    match path {
        Some(p) => image.set_from_file(Some(p)),
        None => image.set_icon_name(Some("avatar-default-symbolic")),
    }
}
