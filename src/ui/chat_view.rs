use gtk::prelude::*;
use relm4::factory::FactoryVecDeque;
use relm4::prelude::*;

use crate::models::Message;
use crate::services::chat::SUGGESTED_QUESTIONS;
use crate::ui::input_area::{InputArea, InputAreaMsg, InputAreaOutput};
use crate::ui::message_widget::MessageWidget;

pub struct ChatView {
    messages: FactoryVecDeque<MessageWidget>,
    input_area: Controller<InputArea>,
    composing: bool,
    show_suggestions: bool,
    scrolled_window: gtk::ScrolledWindow,
}

#[derive(Debug)]
pub enum ChatViewMsg {
    LoadMessages(Vec<Message>),
    AddMessage(Message),
    SetComposing(bool),
    SetSuggestionsVisible(bool),
    ClearInput,
    ScrollToBottom,
    // Internal
    InputChanged(String),
    SendInput,
    SuggestionClicked(String),
}

#[derive(Debug)]
pub enum ChatViewOutput {
    InputChanged(String),
    /// `None` sends the typed input, `Some` a suggested question.
    Send(Option<String>),
}

#[relm4::component(pub)]
impl Component for ChatView {
    // send_with_enter
    type Init = bool;
    type Input = ChatViewMsg;
    type Output = ChatViewOutput;
    type CommandOutput = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_vexpand: true,

            #[local_ref]
            scrolled_window -> gtk::ScrolledWindow {
                set_vexpand: true,
                set_hscrollbar_policy: gtk::PolicyType::Never,

                #[local_ref]
                message_list -> gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 8,
                    set_margin_top: 12,
                    set_margin_bottom: 12,
                    set_margin_start: 16,
                    set_margin_end: 16,
                },
            },

            // Typing indicator
            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_halign: gtk::Align::Start,
                set_margin_start: 20,
                set_margin_bottom: 8,
                set_spacing: 8,
                #[watch]
                set_visible: model.composing,

                gtk::Spinner {
                    #[watch]
                    set_spinning: model.composing,
                },

                gtk::Label {
                    set_label: "Assistant is typing...",
                    add_css_class: "dim-label",
                },
            },

            #[local_ref]
            suggestions_box -> gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 6,
                set_margin_start: 16,
                set_margin_end: 16,
                set_margin_bottom: 8,
                #[watch]
                set_visible: model.show_suggestions,
            },

            gtk::Separator {
                set_orientation: gtk::Orientation::Horizontal,
            },

            model.input_area.widget().clone(),
        }
    }

    fn init(
        send_with_enter: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let messages = FactoryVecDeque::builder()
            .launch(gtk::Box::default())
            .detach();

        let input_area = InputArea::builder()
            .launch(send_with_enter)
            .forward(sender.input_sender(), |output| match output {
                InputAreaOutput::TextChanged(text) => ChatViewMsg::InputChanged(text),
                InputAreaOutput::Send => ChatViewMsg::SendInput,
            });

        let suggestions_box = gtk::Box::new(gtk::Orientation::Vertical, 6);
        let heading = gtk::Label::builder()
            .label("Suggested questions")
            .halign(gtk::Align::Start)
            .build();
        heading.add_css_class("caption-heading");
        heading.add_css_class("dim-label");
        suggestions_box.append(&heading);

        let chips = gtk::FlowBox::builder()
            .selection_mode(gtk::SelectionMode::None)
            .homogeneous(false)
            .max_children_per_line(2)
            .column_spacing(6)
            .row_spacing(6)
            .build();
        for question in SUGGESTED_QUESTIONS {
            let chip = gtk::Button::builder().label(question).build();
            chip.add_css_class("pill");
            chip.add_css_class("suggestion-chip");
            let sender_chip = sender.clone();
            chip.connect_clicked(move |_| {
                sender_chip.input(ChatViewMsg::SuggestionClicked(question.to_string()));
            });
            chips.insert(&chip, -1);
        }
        suggestions_box.append(&chips);

        let scrolled_window = gtk::ScrolledWindow::new();

        let model = Self {
            messages,
            input_area,
            composing: false,
            show_suggestions: true,
            scrolled_window: scrolled_window.clone(),
        };

        let message_list = model.messages.widget();
        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            ChatViewMsg::LoadMessages(messages) => {
                let mut guard = self.messages.guard();
                guard.clear();
                for message in messages {
                    guard.push_back(message);
                }
                drop(guard);
                sender.input(ChatViewMsg::ScrollToBottom);
            }
            ChatViewMsg::AddMessage(message) => {
                self.messages.guard().push_back(message);
                sender.input(ChatViewMsg::ScrollToBottom);
            }
            ChatViewMsg::SetComposing(composing) => {
                self.composing = composing;
                self.input_area.emit(InputAreaMsg::SetSending(composing));
            }
            ChatViewMsg::SetSuggestionsVisible(visible) => {
                self.show_suggestions = visible;
            }
            ChatViewMsg::ClearInput => {
                self.input_area.emit(InputAreaMsg::Clear);
            }
            ChatViewMsg::ScrollToBottom => {
                let adj = self.scrolled_window.vadjustment();
                glib::idle_add_local_once(move || {
                    adj.set_value(adj.upper());
                });
            }
            ChatViewMsg::InputChanged(text) => {
                let _ = sender.output(ChatViewOutput::InputChanged(text));
            }
            ChatViewMsg::SendInput => {
                let _ = sender.output(ChatViewOutput::Send(None));
            }
            ChatViewMsg::SuggestionClicked(question) => {
                if !self.composing {
                    let _ = sender.output(ChatViewOutput::Send(Some(question)));
                }
            }
        }
    }
}
