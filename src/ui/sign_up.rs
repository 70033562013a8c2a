use adw::prelude::*;
use relm4::prelude::*;

use crate::models::{Destination, Notification, SignUpField};
use crate::services::auth::{FormSession, SignUpSession};
use crate::ui::form_field::{connect_reveal_toggle, set_password_visible, FormField};

pub struct SignUpPage {
    session: SignUpSession,
    fields: Vec<(SignUpField, FormField)>,
}

#[derive(Debug)]
pub enum SignUpMsg {
    FieldChanged(String, String),
    TogglePasswordVisible,
    Submit,
    GoToSignIn,
    Reset,
}

#[derive(Debug)]
pub enum SignUpOutput {
    Navigate(Destination),
    Notify(Notification),
}

#[relm4::component(pub)]
impl Component for SignUpPage {
    type Init = ();
    type Input = SignUpMsg;
    type Output = SignUpOutput;
    type CommandOutput = ();

    view! {
        gtk::ScrolledWindow {
            set_hscrollbar_policy: gtk::PolicyType::Never,
            set_vexpand: true,

            adw::Clamp {
                set_maximum_size: 400,
                set_margin_top: 32,
                set_margin_bottom: 32,
                set_margin_start: 24,
                set_margin_end: 24,

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 16,
                    set_valign: gtk::Align::Center,

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 6,
                        set_halign: gtk::Align::Center,
                        set_margin_bottom: 12,

                        gtk::Image {
                            set_icon_name: Some("emblem-favorite-symbolic"),
                            set_pixel_size: 48,
                            add_css_class: "lifelink-logo",
                        },

                        gtk::Label {
                            set_label: "Create Account",
                            add_css_class: "title-2",
                        },

                        gtk::Label {
                            set_label: "Join LifeLink and start saving lives",
                            add_css_class: "dim-label",
                        },
                    },

                    #[local_ref]
                    fields_box -> gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 14,
                    },

                    gtk::Button {
                        set_label: "Create Account",
                        set_margin_top: 8,
                        add_css_class: "suggested-action",
                        add_css_class: "pill",
                        connect_clicked => SignUpMsg::Submit,
                    },

                    gtk::Label {
                        set_label: "By signing up, you agree to our Terms of Service and Privacy Policy",
                        set_wrap: true,
                        set_justify: gtk::Justification::Center,
                        add_css_class: "caption",
                        add_css_class: "dim-label",
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 4,
                        set_halign: gtk::Align::Center,
                        set_margin_top: 8,

                        gtk::Label {
                            set_label: "Already have an account?",
                            add_css_class: "dim-label",
                        },

                        gtk::Button {
                            set_label: "Sign In",
                            add_css_class: "flat",
                            add_css_class: "accent",
                            connect_clicked => SignUpMsg::GoToSignIn,
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
        let fields = vec![
            (
                SignUpField::FullName,
                FormField::new("Full Name *", "Enter your full name", "avatar-default-symbolic"),
            ),
            (SignUpField::Email, FormField::email("Email *")),
            (
                SignUpField::Phone,
                FormField::new("Phone Number", "+92 300 1234567", "call-start-symbolic"),
            ),
            (SignUpField::Password, FormField::password("Password *", true)),
            (
                SignUpField::ConfirmPassword,
                FormField::password("Confirm Password *", false),
            ),
        ];

        let fields_box = gtk::Box::new(gtk::Orientation::Vertical, 14);
        for (field, form_field) in &fields {
            let field = *field;
            form_field.entry.set_widget_name(field.as_str());
            let sender_field = sender.clone();
            form_field.entry.connect_changed(move |entry| {
                sender_field.input(SignUpMsg::FieldChanged(
                    entry.widget_name().to_string(),
                    entry.text().to_string(),
                ));
            });

            match field {
                SignUpField::Phone => form_field.entry.set_input_purpose(gtk::InputPurpose::Phone),
                SignUpField::Password => {
                    let sender_toggle = sender.clone();
                    connect_reveal_toggle(&form_field.entry, move || {
                        sender_toggle.input(SignUpMsg::TogglePasswordVisible);
                    });
                }
                SignUpField::ConfirmPassword => {
                    let sender_submit = sender.clone();
                    form_field.entry.connect_activate(move |_| {
                        sender_submit.input(SignUpMsg::Submit);
                    });
                }
                SignUpField::FullName | SignUpField::Email => {}
            }

            fields_box.append(&form_field.container);
        }

        let model = Self {
            session: SignUpSession::new(),
            fields,
        };

        let widgets = view_output!();
        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            SignUpMsg::FieldChanged(name, value) => {
                if let Err(e) = self.session.set_named_field(&name, value) {
                    tracing::warn!(reason = e.code(), "Sign-up field rejected: {}", e);
                    let _ = sender.output(SignUpOutput::Notify(e.notification()));
                }
            }
            SignUpMsg::TogglePasswordVisible => {
                self.session.toggle_password_visible();
                self.sync_password_visibility();
            }
            SignUpMsg::Submit => match self.session.submit() {
                Ok(outcome) => {
                    let _ = sender.output(SignUpOutput::Notify(outcome.notification));
                    let _ = sender.output(SignUpOutput::Navigate(outcome.destination));
                }
                Err(e) => {
                    tracing::info!(reason = e.code(), "Sign-up rejected");
                    let _ = sender.output(SignUpOutput::Notify(e.notification()));
                }
            },
            SignUpMsg::GoToSignIn => {
                let _ = sender.output(SignUpOutput::Navigate(Destination::SignIn));
            }
            SignUpMsg::Reset => {
                for (_, form_field) in &self.fields {
                    form_field.entry.set_text("");
                }
                self.session.reset();
                self.sync_password_visibility();
            }
        }
    }
}

impl SignUpPage {
    /// Both password entries follow the one toggle.
    fn sync_password_visibility(&self) {
        let visible = self.session.password_visible();
        for (field, form_field) in &self.fields {
            if matches!(field, SignUpField::Password | SignUpField::ConfirmPassword) {
                set_password_visible(&form_field.entry, visible);
            }
        }
    }
}
