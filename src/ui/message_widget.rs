use gtk::prelude::*;
use relm4::prelude::*;

use crate::models::Message;

/// One transcript row. Assistant messages sit on the start side with the
/// assistant avatar, user messages on the end side.
pub struct MessageWidget {
    message: Message,
}

#[relm4::factory(pub)]
impl FactoryComponent for MessageWidget {
    type Init = Message;
    type Input = ();
    type Output = ();
    type CommandOutput = ();
    type ParentWidget = gtk::Box;

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 8,
            set_margin_top: 4,
            set_margin_bottom: 4,
            set_halign: if self.message.role.is_user() {
                gtk::Align::End
            } else {
                gtk::Align::Start
            },

            gtk::Image {
                set_icon_name: Some("starred-symbolic"),
                set_valign: gtk::Align::Start,
                set_visible: !self.message.role.is_user(),
                add_css_class: "assistant-avatar",
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 4,
                add_css_class: "card",
                add_css_class: &format!("message-bubble-{}", self.message.role.as_str()),

                gtk::Label {
                    set_label: &self.message.content,
                    set_halign: gtk::Align::Start,
                    set_xalign: 0.0,
                    set_wrap: true,
                    set_wrap_mode: gtk::pango::WrapMode::WordChar,
                    set_max_width_chars: 42,
                    set_selectable: true,
                    set_margin_top: 8,
                    set_margin_start: 12,
                    set_margin_end: 12,
                },

                gtk::Label {
                    set_label: &self
                        .message
                        .created_at
                        .with_timezone(&chrono::Local)
                        .format("%H:%M")
                        .to_string(),
                    set_halign: gtk::Align::End,
                    set_margin_bottom: 6,
                    set_margin_end: 12,
                    add_css_class: "caption",
                    add_css_class: "dim-label",
                    add_css_class: "message-timestamp",
                },
            },

            gtk::Image {
                set_icon_name: Some("avatar-default-symbolic"),
                set_valign: gtk::Align::Start,
                set_visible: self.message.role.is_user(),
                add_css_class: "user-avatar",
            },
        }
    }

    fn init_model(message: Self::Init, _index: &DynamicIndex, _sender: FactorySender<Self>) -> Self {
        Self { message }
    }
}
