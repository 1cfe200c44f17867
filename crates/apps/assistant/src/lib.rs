//! AI assistant panel: a chat transcript backed by the host chat-completion service.
//!
//! Replies are produced by [`platform_host::generate_reply`], which retries with backoff and
//! always yields displayable text. A reply that resolves after the panel unmounted is dropped.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use leptos::*;
use phone_app_contract::AppMountContext;
use platform_host::{generate_reply, ChatMessage, ChatRole, RetryPolicy};
use system_ui::prelude::*;

const GREETING: &str = "こんにちは！WebOSのサポートAIです。何でも聞いてください。";

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTurn {
    history: Vec<ChatMessage>,
    prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatTranscript {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            loading: false,
        }
    }
}

impl ChatTranscript {
    fn can_send(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Appends the user's line and returns what to send upstream.
    ///
    /// The history excludes the new line; it is sent separately as the prompt.
    fn begin_turn(&mut self, input: &str) -> Option<PendingTurn> {
        if !self.can_send(input) {
            return None;
        }
        let prompt = input.trim().to_string();
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(prompt.clone()));
        self.loading = true;
        Some(PendingTurn { history, prompt })
    }

    fn finish_turn(&mut self, reply: String) {
        self.messages.push(ChatMessage::assistant(reply));
        self.loading = false;
    }
}

fn bubble_slot(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}

#[component]
/// Assistant panel contents.
pub fn AssistantApp(
    /// Runtime mount context.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services.clone();
    let device = services.device;
    let navigation = services.navigation.clone();
    let host = services.host.clone();
    let transcript = create_rw_signal(ChatTranscript::default());
    let input = create_rw_signal(String::new());
    let scroll_anchor = create_node_ref::<html::Div>();
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let send = Callback::new(move |()| {
        let draft = input.get_untracked();
        let Some(turn) = transcript
            .try_update(|transcript| transcript.begin_turn(&draft))
            .flatten()
        else {
            return;
        };
        input.set(String::new());

        let host = host.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let reply = generate_reply(
                host.chat.as_ref(),
                host.delay.as_ref(),
                &RetryPolicy::default(),
                &turn.history,
                &turn.prompt,
            )
            .await;
            if !alive.get() {
                logging::log!("assistant reply discarded after panel closed");
                return;
            }
            transcript.update(|transcript| transcript.finish_turn(reply));
        });
    });

    create_effect(move |_| {
        transcript.with(|transcript| (transcript.messages.len(), transcript.loading));
        if let Some(anchor) = scroll_anchor.get() {
            anchor.scroll_into_view();
        }
    });

    let avatar_url =
        Signal::derive(move || device.assistant_icon.get().map(|icon| icon.as_str().to_string()));
    let loading = Signal::derive(move || transcript.with(|transcript| transcript.loading));
    let send_disabled =
        Signal::derive(move || !transcript.with(|transcript| input.with(|draft| transcript.can_send(draft))));

    view! {
        <div class="app app-assistant">
            <PanelHeader
                title=context.display_name.clone()
                on_back=Callback::new(move |_| navigation.close())
            >
                <Avatar image_url=avatar_url />
            </PanelHeader>
            <div class="app-assistant-log" role="log" aria-live="polite">
                <For
                    each=move || transcript.with(|transcript| {
                        transcript.messages.iter().cloned().enumerate().collect::<Vec<_>>()
                    })
                    key=|(index, _)| *index
                    children=move |(_, message)| view! {
                        <div class="app-assistant-bubble" data-ui-slot=bubble_slot(message.role)>
                            <p>{message.content}</p>
                        </div>
                    }
                />
                <Show when=move || loading.get()>
                    <div class="app-assistant-bubble" data-ui-slot="typing" aria-label="応答を生成中">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
                <div node_ref=scroll_anchor></div>
            </div>
            <div class="app-assistant-composer">
                <TextField
                    variant=FieldVariant::Pill
                    placeholder="メッセージを入力..."
                    aria_label="メッセージ"
                    value=input
                    on_input=Callback::new(move |value: String| input.set(value))
                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.is_composing() {
                            ev.prevent_default();
                            send.call(());
                        }
                    })
                />
                <IconButton
                    icon=IconName::Send
                    variant=ButtonVariant::Primary
                    aria_label="送信"
                    disabled=send_disabled
                    on_click=Callback::new(move |_| send.call(()))
                />
            </div>
        </div>
    }
}
