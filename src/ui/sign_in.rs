use adw::prelude::*;
use relm4::prelude::*;

use crate::models::{Destination, Notification, SignInField};
use crate::services::auth::{FormSession, SignInSession};
use crate::ui::form_field::{connect_reveal_toggle, set_password_visible, FormField};

pub struct SignInPage {
    session: SignInSession,
    email: FormField,
    password: FormField,
}

#[derive(Debug)]
pub enum SignInMsg {
    FieldChanged(String, String),
    TogglePasswordVisible,
    Submit,
    GoToSignUp,
    Reset,
}

#[derive(Debug)]
pub enum SignInOutput {
    Navigate(Destination),
    Notify(Notification),
}

#[relm4::component(pub)]
impl Component for SignInPage {
    type Init = ();
    type Input = SignInMsg;
    type Output = SignInOutput;
    type CommandOutput = ();

    view! {
        gtk::ScrolledWindow {
            set_hscrollbar_policy: gtk::PolicyType::Never,
            set_vexpand: true,

            adw::Clamp {
                set_maximum_size: 400,
                set_margin_top: 40,
                set_margin_bottom: 40,
                set_margin_start: 24,
                set_margin_end: 24,

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 20,
                    set_valign: gtk::Align::Center,

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 6,
                        set_halign: gtk::Align::Center,
                        set_margin_bottom: 16,

                        gtk::Image {
                            set_icon_name: Some("emblem-favorite-symbolic"),
                            set_pixel_size: 56,
                            add_css_class: "lifelink-logo",
                        },

                        gtk::Label {
                            set_label: "LifeLink",
                            add_css_class: "title-1",
                        },

                        gtk::Label {
                            set_label: "PAKISTAN",
                            add_css_class: "caption-heading",
                            add_css_class: "accent",
                        },

                        gtk::Label {
                            set_label: "Sign in to save lives",
                            add_css_class: "dim-label",
                        },
                    },

                    #[local_ref]
                    fields -> gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 16,
                    },

                    // no password recovery flow yet
                    gtk::Button {
                        set_label: "Forgot password?",
                        set_halign: gtk::Align::End,
                        add_css_class: "flat",
                        add_css_class: "accent",
                    },

                    gtk::Button {
                        set_label: "Sign In",
                        add_css_class: "suggested-action",
                        add_css_class: "pill",
                        connect_clicked => SignInMsg::Submit,
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 12,

                        gtk::Separator {
                            set_hexpand: true,
                            set_valign: gtk::Align::Center,
                        },

                        gtk::Label {
                            set_label: "or continue with",
                            add_css_class: "caption",
                            add_css_class: "dim-label",
                        },

                        gtk::Separator {
                            set_hexpand: true,
                            set_valign: gtk::Align::Center,
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 12,
                        set_homogeneous: true,

                        gtk::Button {
                            set_label: "Google",
                            add_css_class: "pill",
                        },

                        gtk::Button {
                            set_label: "GitHub",
                            add_css_class: "pill",
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 4,
                        set_halign: gtk::Align::Center,

                        gtk::Label {
                            set_label: "Don't have an account?",
                            add_css_class: "dim-label",
                        },

                        gtk::Button {
                            set_label: "Sign Up",
                            add_css_class: "flat",
                            add_css_class: "accent",
                            connect_clicked => SignInMsg::GoToSignUp,
                        },
                    },
                },
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let email = FormField::email("Email");
        let password = FormField::password("Password", true);

        for (field, form_field) in [(SignInField::Email, &email), (SignInField::Password, &password)] {
            form_field.entry.set_widget_name(field.as_str());
            let sender_field = sender.clone();
            form_field.entry.connect_changed(move |entry| {
                sender_field.input(SignInMsg::FieldChanged(
                    entry.widget_name().to_string(),
                    entry.text().to_string(),
                ));
            });
        }

        let sender_toggle = sender.clone();
        connect_reveal_toggle(&password.entry, move || {
            sender_toggle.input(SignInMsg::TogglePasswordVisible);
        });

        let sender_submit = sender.clone();
        password.entry.connect_activate(move |_| {
            sender_submit.input(SignInMsg::Submit);
        });

        let fields = gtk::Box::new(gtk::Orientation::Vertical, 16);
        fields.append(&email.container);
        fields.append(&password.container);

        let model = Self {
            session: SignInSession::new(),
            email,
            password,
        };

        let widgets = view_output!();
        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            SignInMsg::FieldChanged(name, value) => {
                if let Err(e) = self.session.set_named_field(&name, value) {
                    tracing::warn!(reason = e.code(), "Sign-in field rejected: {}", e);
                    let _ = sender.output(SignInOutput::Notify(e.notification()));
                }
            }
            SignInMsg::TogglePasswordVisible => {
                self.session.toggle_password_visible();
                set_password_visible(&self.password.entry, self.session.password_visible());
            }
            SignInMsg::Submit => match self.session.submit() {
                Ok(outcome) => {
                    let _ = sender.output(SignInOutput::Notify(outcome.notification));
                    let _ = sender.output(SignInOutput::Navigate(outcome.destination));
                }
                Err(e) => {
                    tracing::info!(reason = e.code(), "Sign-in rejected");
                    let _ = sender.output(SignInOutput::Notify(e.notification()));
                }
            },
            SignInMsg::GoToSignUp => {
                let _ = sender.output(SignInOutput::Navigate(Destination::SignUp));
            }
            SignInMsg::Reset => {
                self.email.entry.set_text("");
                self.password.entry.set_text("");
                self.session.reset();
                set_password_visible(&self.password.entry, false);
            }
        }
    }
}
