use std::sync::Arc;

use adw::prelude::*;
use relm4::prelude::*;

use crate::config;
use crate::models::{Destination, Notification};
use crate::providers::{KeywordProvider, ProviderId, ProviderRouter};
use crate::services::chat::{self, AssistantReply, ChatSession};
use crate::services::settings::{AppSettings, ColorScheme};
use crate::ui::chat_view::{ChatView, ChatViewMsg, ChatViewOutput};
use crate::ui::sign_in::{SignInMsg, SignInOutput, SignInPage};
use crate::ui::sign_up::{SignUpMsg, SignUpOutput, SignUpPage};

pub struct App {
    settings: AppSettings,
    router: Arc<ProviderRouter>,
    chat: ChatSession,
    current: Destination,
    sign_in: Controller<SignInPage>,
    sign_up: Controller<SignUpPage>,
    chat_view: Controller<ChatView>,
    toast_overlay: adw::ToastOverlay,
    content_stack: gtk::Stack,
    window_title: adw::WindowTitle,
    sign_out_button: gtk::Button,
}

#[derive(Debug)]
pub enum AppMsg {
    Navigate(Destination),
    Notify(Notification),
    ChatInputChanged(String),
    SendChatMessage(Option<String>),
}

#[derive(Debug)]
pub enum AppCmd {
    ReplyFinished(Option<AssistantReply>),
}

#[relm4::component(pub, async)]
impl AsyncComponent for App {
    type Init = AppSettings;
    type Input = AppMsg;
    type Output = ();
    type CommandOutput = AppCmd;

    view! {
        adw::ApplicationWindow {
            set_title: Some(config::APP_NAME),
            set_default_width: 440,
            set_default_height: 820,
            set_width_request: 360,
            set_height_request: 560,

            #[local_ref]
            toast_overlay -> adw::ToastOverlay {},
        }
    }

    async fn init(
        settings: Self::Init,
        root: Self::Root,
        sender: AsyncComponentSender<Self>,
    ) -> AsyncComponentParts<Self> {
        apply_color_scheme(settings.color_scheme);

        let sign_in = SignInPage::builder()
            .launch(())
            .forward(sender.input_sender(), |output| match output {
                SignInOutput::Navigate(destination) => AppMsg::Navigate(destination),
                SignInOutput::Notify(notification) => AppMsg::Notify(notification),
            });

        let sign_up = SignUpPage::builder()
            .launch(())
            .forward(sender.input_sender(), |output| match output {
                SignUpOutput::Navigate(destination) => AppMsg::Navigate(destination),
                SignUpOutput::Notify(notification) => AppMsg::Notify(notification),
            });

        let chat_view = ChatView::builder()
            .launch(settings.send_with_enter)
            .forward(sender.input_sender(), |output| match output {
                ChatViewOutput::InputChanged(text) => AppMsg::ChatInputChanged(text),
                ChatViewOutput::Send(text) => AppMsg::SendChatMessage(text),
            });

        let mut router = ProviderRouter::new();
        router.register(Arc::new(KeywordProvider::new()));
        let router = Arc::new(router);

        let chat = ChatSession::new(settings.reply_delay());
        chat_view.emit(ChatViewMsg::LoadMessages(chat.messages().to_vec()));

        let content_stack = gtk::Stack::new();
        content_stack.set_hexpand(true);
        content_stack.set_vexpand(true);
        content_stack.set_transition_type(gtk::StackTransitionType::Crossfade);
        content_stack.add_named(sign_in.widget(), Some(Destination::SignIn.as_str()));
        content_stack.add_named(sign_up.widget(), Some(Destination::SignUp.as_str()));
        content_stack.add_named(chat_view.widget(), Some(Destination::Home.as_str()));

        let window_title = adw::WindowTitle::new(config::APP_NAME, "");

        let sign_out_button = gtk::Button::builder()
            .icon_name("system-log-out-symbolic")
            .tooltip_text("Sign out")
            .build();
        let sender_sign_out = sender.input_sender().clone();
        sign_out_button.connect_clicked(move |_| {
            let _ = sender_sign_out.send(AppMsg::Navigate(Destination::SignIn));
        });

        let header = adw::HeaderBar::new();
        header.set_title_widget(Some(&window_title));
        header.pack_end(&sign_out_button);

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&content_stack));

        let toast_overlay = adw::ToastOverlay::new();
        toast_overlay.set_child(Some(&toolbar));

        let mut model = App {
            settings,
            router,
            chat,
            current: Destination::SignIn,
            sign_in,
            sign_up,
            chat_view,
            toast_overlay: toast_overlay.clone(),
            content_stack,
            window_title,
            sign_out_button,
        };
        model.show_page(Destination::SignIn);

        let widgets = view_output!();
        AsyncComponentParts { model, widgets }
    }

    async fn update(
        &mut self,
        msg: Self::Input,
        sender: AsyncComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match msg {
            AppMsg::Navigate(destination) => {
                self.navigate(destination);
            }
            AppMsg::Notify(notification) => {
                self.show_toast(&notification);
            }
            AppMsg::ChatInputChanged(text) => {
                self.chat.set_input(text);
            }
            AppMsg::SendChatMessage(text) => {
                self.handle_send_message(text, sender);
            }
        }
    }

    async fn update_cmd(
        &mut self,
        msg: Self::CommandOutput,
        _sender: AsyncComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match msg {
            AppCmd::ReplyFinished(Some(reply)) => {
                if let Some(message) = self.chat.receive_assistant_reply(reply) {
                    let message = message.clone();
                    self.chat_view.emit(ChatViewMsg::AddMessage(message));
                    self.chat_view.emit(ChatViewMsg::SetComposing(false));
                }
            }
            AppCmd::ReplyFinished(None) => {
                tracing::debug!("Reply task ended without a reply");
            }
        }
    }
}

impl App {
    fn handle_send_message(&mut self, text: Option<String>, sender: AsyncComponentSender<Self>) {
        let provider = match self.router.get(&ProviderId::Keyword) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::error!("No assistant available: {}", e);
                self.show_toast(&Notification::destructive("Assistant Unavailable", e.to_string()));
                return;
            }
        };

        let Some(ticket) = self.chat.append_user_message(text.as_deref()) else {
            return;
        };

        if let Some(message) = self.chat.messages().last() {
            self.chat_view.emit(ChatViewMsg::AddMessage(message.clone()));
        }
        self.chat_view.emit(ChatViewMsg::ClearInput);
        self.chat_view.emit(ChatViewMsg::SetComposing(true));
        self.chat_view
            .emit(ChatViewMsg::SetSuggestionsVisible(self.chat.show_suggestions()));

        sender.command(move |out, _| {
            Box::pin(async move {
                let reply = chat::run_reply(provider, ticket).await;
                let _ = out.send(AppCmd::ReplyFinished(reply));
            })
        });
    }

    fn navigate(&mut self, destination: Destination) {
        if destination == self.current {
            return;
        }
        tracing::info!(from = self.current.as_str(), to = destination.as_str(), "Navigating");

        // Per-screen state does not survive leaving the screen.
        match self.current {
            Destination::SignIn => self.sign_in.emit(SignInMsg::Reset),
            Destination::SignUp => self.sign_up.emit(SignUpMsg::Reset),
            Destination::Home => self.restart_chat(),
        }

        self.show_page(destination);
    }

    fn restart_chat(&mut self) {
        // Dropping the old session cancels its pending reply.
        self.chat = ChatSession::new(self.settings.reply_delay());
        self.chat_view.emit(ChatViewMsg::ClearInput);
        self.chat_view.emit(ChatViewMsg::SetComposing(false));
        self.chat_view
            .emit(ChatViewMsg::LoadMessages(self.chat.messages().to_vec()));
        self.chat_view
            .emit(ChatViewMsg::SetSuggestionsVisible(self.chat.show_suggestions()));
    }

    fn show_page(&mut self, destination: Destination) {
        self.current = destination;
        self.content_stack
            .set_visible_child_name(destination.as_str());

        let (title, subtitle) = match destination {
            Destination::Home => ("AI Assistant", "Online \u{2014} Ready to help"),
            Destination::SignIn => (config::APP_NAME, "Sign In"),
            Destination::SignUp => (config::APP_NAME, "Create Account"),
        };
        self.window_title.set_title(title);
        self.window_title.set_subtitle(subtitle);
        self.sign_out_button
            .set_visible(destination == Destination::Home);
    }

    fn show_toast(&self, notification: &Notification) {
        let text = format!(
            "<b>{}</b>  {}",
            glib::markup_escape_text(&notification.title),
            glib::markup_escape_text(&notification.description)
        );
        let toast = adw::Toast::new(&text);
        if notification.is_destructive() {
            toast.set_priority(adw::ToastPriority::High);
            toast.set_timeout(5);
        } else {
            toast.set_timeout(3);
        }
        self.toast_overlay.add_toast(toast);
    }
}

pub fn apply_color_scheme(scheme: ColorScheme) {
    let style_manager = adw::StyleManager::default();
    style_manager.set_color_scheme(match scheme {
        ColorScheme::System => adw::ColorScheme::Default,
        ColorScheme::Light => adw::ColorScheme::ForceLight,
        ColorScheme::Dark => adw::ColorScheme::ForceDark,
    });
}
