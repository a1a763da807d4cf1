use gtk::prelude::*;
use relm4::prelude::*;
use relm4::{Sender, ShutdownReceiver};

use crate::navigation::Route;
use crate::profile::UserProfile;
use crate::store::{ProfileStore, Store};

/// Main tab area shown after the profile is saved.
#[derive(Debug)]
pub struct Tabs {
    profile: UserProfile,
}

#[derive(Debug)]
pub enum TabsInput {
    EditProfile,
}

#[derive(Debug)]
pub enum TabsOutput {
    Navigate(Route),
}

impl Tabs {
    fn greeting(&self) -> String {
        match self.profile.display_name() {
            Some(name) => format!("Welcome, {name}!"),
            None => "Welcome!".to_string(),
        }
    }

    /// Forwards every change of the stored profile until shutdown.
    async fn watch_store(out: Sender<UserProfile>, shutdown: ShutdownReceiver, store: Store) {
        shutdown
            .register(async move {
                let mut rx = store.subscribe();
                while rx.changed().await.is_ok() {
                    let profile = rx.borrow_and_update().clone();
                    if out.send(profile).is_err() {
                        break;
                    }
                }
            })
            .drop_on_shutdown()
            .await;
    }
}

#[relm4::component(pub)]
impl Component for Tabs {
    type Init = Store;
    type Input = TabsInput;
    type Output = TabsOutput;
    type CommandOutput = UserProfile;

    view! {
        gtk::Notebook {
            set_vexpand: true,
            add_css_class: "tabs",

            append_page[Some(&gtk::Label::new(Some("Home")))] = &gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_valign: gtk::Align::Center,

                gtk::Label {
                    add_css_class: "greeting",
                    #[watch] set_label: &model.greeting(),
                }
            },

            append_page[Some(&gtk::Label::new(Some("Profile")))] = &gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_valign: gtk::Align::Center,
                set_halign: gtk::Align::Center,
                set_spacing: 8,
                add_css_class: "profilebox",

                gtk::Picture {
                    set_size_request: (100, 100),
                    set_content_fit: gtk::ContentFit::Cover,
                    add_css_class: "avatar",
                    #[watch] set_visible: model.profile.image.is_some(),
                    #[watch] set_filename: model.profile.image.as_ref().map(|i| &i.path),
                },

                gtk::Label {
                    add_css_class: "name",
                    #[watch] set_label: &model.profile.name,
                },

                gtk::Label {
                    add_css_class: "surname",
                    #[watch] set_visible: !model.profile.surname.is_empty(),
                    #[watch] set_label: &model.profile.surname,
                },

                gtk::Button::with_label("Edit profile") {
                    connect_clicked => TabsInput::EditProfile,
                },
            },
        }
    }

    fn init(
        store: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Tabs {
            profile: store.profile(),
        };

        sender.command(move |out, shutdown| Self::watch_store(out, shutdown, store));

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match message {
            TabsInput::EditProfile => sender
                .output(TabsOutput::Navigate(Route::ProfileAccount))
                .unwrap_or_default(),
        }
    }

    fn update_cmd(
        &mut self,
        profile: Self::CommandOutput,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        self.profile = profile;
    }
}
