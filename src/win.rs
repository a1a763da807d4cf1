use gtk::prelude::*;
use relm4::prelude::*;

use crate::navigation::{Navigator, Route};
use crate::session::Session;
use crate::ui::profile_account::component::ProfileAccount;
use crate::ui::profile_account::model::{ProfileAccountInput, ProfileAccountOutput};
use crate::ui::tabs::{Tabs, TabsOutput};

pub struct Win {
    profile_account: Controller<ProfileAccount>,
    tabs: Controller<Tabs>,
}

#[derive(Debug)]
pub enum Msg {
    Navigate(Route),
}

#[relm4::component(pub)]
impl Component for Win {
    type Init = Session;
    type Input = Msg;
    type Output = ();
    type CommandOutput = ();

    view! {
        #[name(window)]
        gtk::ApplicationWindow {
            set_title: Some("Profile"),
            set_default_size: (420, 720),

            #[name(stack)]
            gtk::Stack {
                set_transition_type: gtk::StackTransitionType::SlideLeftRight,
            }
        }
    }

    fn init(
        session: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Win {
            profile_account: ProfileAccount::builder()
                .launch(session.clone())
                .forward(sender.input_sender(), forward_profile_account),
            tabs: Tabs::builder()
                .launch(session.store().clone())
                .forward(sender.input_sender(), forward_tabs),
        };

        let widgets = view_output!();

        widgets.stack.add_named(
            model.profile_account.widget(),
            Some(Route::ProfileAccount.name()),
        );
        widgets
            .stack
            .add_named(model.tabs.widget(), Some(Route::Tabs.name()));
        widgets.stack.navigate(Route::ProfileAccount);

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            Msg::Navigate(route) => {
                // Screen is shown anew, it must not remember previous edits.
                if route == Route::ProfileAccount {
                    self.profile_account.emit(ProfileAccountInput::Reset);
                }
                widgets.stack.navigate(route);
            }
        }
    }
}

/// Translates result of [`profile account`](ProfileAccount) screen to [`Msg`].
fn forward_profile_account(output: ProfileAccountOutput) -> Msg {
    match output {
        ProfileAccountOutput::Navigate(route) => Msg::Navigate(route),
    }
}

fn forward_tabs(output: TabsOutput) -> Msg {
    match output {
        TabsOutput::Navigate(route) => Msg::Navigate(route),
    }
}
