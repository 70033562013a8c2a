use gtk::prelude::*;
use relm4::prelude::*;

pub struct InputArea {
    entry: gtk::Entry,
    sending: bool,
    has_text: bool,
}

#[derive(Debug)]
pub enum InputAreaMsg {
    SendClicked,
    SetSending(bool),
    Clear,
    // Internal
    TextChanged(String),
}

#[derive(Debug)]
pub enum InputAreaOutput {
    TextChanged(String),
    Send,
}

#[relm4::component(pub)]
impl Component for InputArea {
    // send_with_enter
    type Init = bool;
    type Input = InputAreaMsg;
    type Output = InputAreaOutput;
    type CommandOutput = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 8,
            set_margin_top: 8,
            set_margin_bottom: 8,
            set_margin_start: 12,
            set_margin_end: 12,
            add_css_class: "input-card",

            #[local_ref]
            entry -> gtk::Entry {
                set_hexpand: true,
                set_placeholder_text: Some("Ask me anything..."),
                #[watch]
                set_sensitive: !model.sending,
            },

            gtk::Button {
                set_icon_name: "mail-send-symbolic",
                set_tooltip_text: Some("Send"),
                add_css_class: "suggested-action",
                add_css_class: "circular",
                #[watch]
                set_sensitive: model.has_text && !model.sending,
                connect_clicked => InputAreaMsg::SendClicked,
            },
        }
    }

    fn init(
        send_with_enter: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let entry = gtk::Entry::new();

        let sender_text = sender.clone();
        entry.connect_changed(move |entry| {
            sender_text.input(InputAreaMsg::TextChanged(entry.text().to_string()));
        });

        if send_with_enter {
            let sender_enter = sender.clone();
            entry.connect_activate(move |_| {
                sender_enter.input(InputAreaMsg::SendClicked);
            });
        }

        let model = Self {
            entry: entry.clone(),
            sending: false,
            has_text: false,
        };

        let widgets = view_output!();
        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            InputAreaMsg::SendClicked => {
                if self.has_text && !self.sending {
                    let _ = sender.output(InputAreaOutput::Send);
                }
            }
            InputAreaMsg::SetSending(sending) => {
                self.sending = sending;
                if !sending {
                    self.entry.grab_focus();
                }
            }
            InputAreaMsg::Clear => {
                self.entry.set_text("");
            }
            InputAreaMsg::TextChanged(text) => {
                self.has_text = !text.trim().is_empty();
                let _ = sender.output(InputAreaOutput::TextChanged(text));
            }
        }
    }
}
