//! Floating canned-response chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget owns one `ChatController` in a `StoredValue`. User actions go
//! through the controller; the controller renders through `DomChatSurface`,
//! which writes signals and pokes the message pane and input element.
//! Replies land `REPLY_DELAY_MS` later via a browser timeout; on unmount the
//! pending replies are cancelled so late timers render nothing.

use leptos::html;
use leptos::prelude::*;

use crate::chat::{ChatController, ChatSurface, ChatTurn, PendingReply};
use crate::state::content::SiteContent;
use crate::util::dom;

const GREETING: &str = "Hi! Ask me about my frontend work, projects, skills, or services.";

/// Signal-backed rendering surface for the chat controller.
#[derive(Clone, Copy)]
struct DomChatSurface {
    turns: RwSignal<Vec<ChatTurn>>,
    open: RwSignal<bool>,
    minimized: RwSignal<bool>,
    messages_ref: NodeRef<html::Div>,
    input_ref: NodeRef<html::Input>,
}

impl ChatSurface for DomChatSurface {
    fn show_turn(&self, turn: &ChatTurn) {
        self.turns.update(|t| t.push(turn.clone()));
    }

    fn set_visibility(&self, open: bool, minimized: bool) {
        self.open.set(open);
        self.minimized.set(minimized);
    }

    fn scroll_to_latest(&self) {
        #[cfg(feature = "hydrate")]
        {
            // Wait a frame so freshly pushed turns are in the DOM.
            let messages_ref = self.messages_ref;
            request_animation_frame(move || {
                if let Some(el) = messages_ref.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            });
        }
    }

    fn focus_input(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.input_ref.get_untracked() {
                if let Err(e) = el.focus() {
                    log::debug!("chat input focus failed: {e:?}");
                }
            }
        }
    }

    fn lock_page_scroll(&self, locked: bool) {
        dom::lock_body_scroll(locked);
    }
}

/// Chat launcher button, overlay, and panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let content = expect_context::<SiteContent>();

    let surface = DomChatSurface {
        turns: RwSignal::new(Vec::new()),
        open: RwSignal::new(false),
        minimized: RwSignal::new(false),
        messages_ref: NodeRef::new(),
        input_ref: NodeRef::new(),
    };
    let controller = StoredValue::new(ChatController::new(surface));

    let input = RwSignal::new(String::new());
    let container_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();
    let overlay_ref = NodeRef::<html::Div>::new();

    let schedule = move |reply: Option<PendingReply>| {
        let Some(reply) = reply else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(crate::chat::REPLY_DELAY_MS, move || {
                controller.try_update_value(|c| c.resolve(&reply));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            controller.try_update_value(|c| c.resolve(&reply));
        }
    };

    let send = move || {
        let text = input.get_untracked();
        let reply = controller.try_update_value(|c| c.submit(&text)).flatten();
        if reply.is_some() {
            input.set(String::new());
        }
        schedule(reply);
    };

    let ask = move |question: String| {
        let reply = controller.try_update_value(|c| c.ask(&question)).flatten();
        schedule(reply);
    };

    let toggle = move |_| {
        controller.try_update_value(ChatController::toggle);
    };
    let close = move |_| {
        controller.try_update_value(ChatController::close);
    };
    let minimize = move |_| {
        controller.try_update_value(ChatController::minimize);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let is_open = move || controller.try_with_value(|c| c.session().is_open).unwrap_or(false);

        let _outside_click = window_event_listener(leptos::ev::click, move |ev| {
            if !is_open() {
                return;
            }
            let roots = [
                container_ref.get_untracked().map(web_sys::Element::from),
                toggle_ref.get_untracked().map(web_sys::Element::from),
                overlay_ref.get_untracked().map(web_sys::Element::from),
            ];
            if !dom::event_within(&ev, &roots) {
                controller.try_update_value(ChatController::close);
            }
        });

        let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && is_open() {
                controller.try_update_value(ChatController::close);
            }
        });
    }

    on_cleanup(move || {
        controller.try_update_value(ChatController::cancel_pending);
    });

    let open = surface.open;
    let minimized = surface.minimized;
    let turns = surface.turns;
    let suggestions = content.suggestions;

    view! {
        <button
            class="chatbot-toggle"
            node_ref=toggle_ref
            title="Chat with me"
            class:active=move || open.get()
            on:click=toggle
        >
            <i class="bx bx-message-rounded-dots"></i>
        </button>

        <div class="chatbot-overlay" node_ref=overlay_ref class:active=move || open.get() on:click=close></div>

        <div
            class="chatbot-container"
            node_ref=container_ref
            class:active=move || open.get()
            class:minimized=move || minimized.get()
        >
            <div class="chatbot-header">
                <span class="chatbot-title">"Ask me anything"</span>
                <div class="chatbot-actions">
                    <button class="chatbot-minimize" title="Minimize" on:click=minimize>
                        <i class="bx bx-minus"></i>
                    </button>
                    <button class="chatbot-close" title="Close" on:click=close>
                        <i class="bx bx-x"></i>
                    </button>
                </div>
            </div>

            <div class="chatbot-messages" node_ref=surface.messages_ref>
                <div class="message bot-message">
                    <div class="message-content">{GREETING}</div>
                </div>
                {move || {
                    turns
                        .get()
                        .into_iter()
                        .map(|turn| {
                            let class = format!("message {}-message", turn.sender.as_str());
                            view! {
                                <div class=class>
                                    <div class="message-content">{turn.text}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="chatbot-suggestions">
                {suggestions
                    .into_iter()
                    .map(|s| {
                        let question = s.question.clone();
                        view! {
                            <button class="suggestion" data-question=s.question on:click=move |_| ask(question.clone())>
                                {s.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="chatbot-input-row">
                <input
                    class="chatbot-input"
                    type="text"
                    placeholder="Type your message..."
                    node_ref=surface.input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="chatbot-send" title="Send" on:click=move |_| send()>
                    <i class="bx bx-send"></i>
                </button>
            </div>
        </div>
    }
}
