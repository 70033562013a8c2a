use gtk::prelude::*;

/// Labelled entry used by the sign-in and sign-up pages.
pub struct FormField {
    pub container: gtk::Box,
    pub entry: gtk::Entry,
}

impl FormField {
    pub fn new(label: &str, placeholder: &str, icon_name: &str) -> Self {
        let container = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(6)
            .build();

        let label = gtk::Label::builder()
            .label(label)
            .halign(gtk::Align::Start)
            .build();
        label.add_css_class("heading");
        container.append(&label);

        let entry = gtk::Entry::builder()
            .placeholder_text(placeholder)
            .primary_icon_name(icon_name)
            .hexpand(true)
            .build();
        container.append(&entry);

        Self { container, entry }
    }

    pub fn email(label: &str) -> Self {
        let field = Self::new(label, "you@example.com", "mail-unread-symbolic");
        field.entry.set_input_purpose(gtk::InputPurpose::Email);
        field
    }

    /// Password entry, masked, with a reveal toggle in the secondary icon
    /// slot when `with_toggle` is set.
    pub fn password(label: &str, with_toggle: bool) -> Self {
        let field = Self::new(label, "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}", "system-lock-screen-symbolic");
        field.entry.set_input_purpose(gtk::InputPurpose::Password);
        field.entry.set_visibility(false);
        if with_toggle {
            field
                .entry
                .set_secondary_icon_tooltip_text(Some("Show password"));
            set_password_visible(&field.entry, false);
        }
        field
    }
}

/// Icon and tooltip for the reveal toggle, describing what a click does.
fn reveal_toggle_state(visible: bool) -> (&'static str, &'static str) {
    if visible {
        ("view-conceal-symbolic", "Hide password")
    } else {
        ("view-reveal-symbolic", "Show password")
    }
}

pub fn set_password_visible(entry: &gtk::Entry, visible: bool) {
    entry.set_visibility(visible);
    // only entries created with a toggle carry a tooltip
    if entry.secondary_icon_tooltip_text().is_some() {
        let (icon_name, tooltip) = reveal_toggle_state(visible);
        entry.set_secondary_icon_name(Some(icon_name));
        entry.set_secondary_icon_tooltip_text(Some(tooltip));
    }
}

/// Wire the secondary icon of `entry` to `on_toggle`.
pub fn connect_reveal_toggle<F>(entry: &gtk::Entry, on_toggle: F)
where
    F: Fn() + 'static,
{
    entry.connect_icon_press(move |_, position| {
        if position == gtk::EntryIconPosition::Secondary {
            on_toggle();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_toggle_follows_visibility() {
        assert_eq!(
            reveal_toggle_state(false),
            ("view-reveal-symbolic", "Show password")
        );
        assert_eq!(
            reveal_toggle_state(true),
            ("view-conceal-symbolic", "Hide password")
        );
    }
}
