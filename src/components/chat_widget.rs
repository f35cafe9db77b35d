//! Floating chat widget: trigger button, panel, message list, and input form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders from the controller's session/visibility signals and forwards DOM
//! events back to it. Message bodies are injected with `inner_html` only after
//! passing through `util::format`.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use std::future::Future;

use leptos::prelude::*;

use crate::controller::ChatController;
use crate::net::backend::HttpChatBackend;
use crate::state::session::{ChatMessage, MessageRole};
use crate::state::visibility::PanelEvent;
use crate::util::format::{render_assistant_html, render_user_html};

pub type WidgetController = ChatController<HttpChatBackend>;

/// CSS classes for a message bubble.
pub fn bubble_class(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "chat-message user-message",
        MessageRole::Assistant => "chat-message ai-message",
        MessageRole::Error => "chat-message ai-message error-message",
    }
}

/// Render key for a bubble; stable for the message's lifetime.
pub fn bubble_key(message: &ChatMessage) -> u64 {
    message.id
}

/// Inner HTML for a message bubble body.
pub fn bubble_html(message: &ChatMessage) -> String {
    match message.role {
        MessageRole::User => render_user_html(&message.content),
        MessageRole::Assistant | MessageRole::Error => render_assistant_html(&message.content),
    }
}

/// Whether the quick-question block should be shown.
pub fn suggestions_shown(session_visible: bool, prompt_count: usize) -> bool {
    session_visible && prompt_count > 0
}

/// Run a controller exchange on the browser event loop.
fn run_exchange<F>(exchange: F)
where
    F: Future<Output = bool> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            exchange.await;
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(exchange);
    }
}

/// Floating chat widget bound to a controller.
#[component]
pub fn ChatWidget(controller: WidgetController, title: String, suggested_prompts: Vec<String>) -> impl IntoView {
    let session = controller.session();
    let visibility = controller.visibility();

    let messages = Memo::new(move |_| session.with(|s| s.messages.clone()));
    let composing = Memo::new(move |_| session.with(|s| s.composing));
    let suggestions_visible = Memo::new(move |_| session.with(|s| s.suggestions_visible));
    let input_value = Memo::new(move |_| session.with(|s| s.input.clone()));
    let is_open = Memo::new(move |_| visibility.get().is_open());

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = composing.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        if is_open.get() {
            #[cfg(feature = "csr")]
            {
                if let Some(input_el) = input_ref.get() {
                    if input_el.focus().is_err() {
                        log::debug!("chat input could not take focus");
                    }
                }
            }
        }
    });

    #[cfg(feature = "csr")]
    {
        let ctrl = controller.clone();
        let click = window_event_listener(leptos::ev::click, move |ev| {
            if ctrl.visibility().get_untracked().is_open() && click_is_outside(&ev, panel_ref, trigger_ref) {
                ctrl.handle(PanelEvent::OutsideClick);
            }
        });
        let ctrl = controller.clone();
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ctrl.handle(PanelEvent::EscapePressed);
            }
        });
        on_cleanup(move || {
            click.remove();
            keydown.remove();
        });
    }

    let on_trigger = {
        let ctrl = controller.clone();
        move |_| {
            ctrl.handle(PanelEvent::TriggerClicked);
        }
    };

    let on_close = {
        let ctrl = controller.clone();
        move |_| {
            ctrl.handle(PanelEvent::CloseClicked);
        }
    };

    let input_ctrl = controller.clone();

    let on_submit = {
        let ctrl = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let ctrl = ctrl.clone();
            run_exchange(async move { ctrl.submit_input().await });
        }
    };

    let prompt_count = suggested_prompts.len();
    let suggestion_buttons = suggested_prompts
        .into_iter()
        .map(|prompt| {
            let ctrl = controller.clone();
            let label = prompt.clone();
            view! {
                <button
                    type="button"
                    class="suggested-question-btn"
                    on:click=move |_| {
                        let ctrl = ctrl.clone();
                        let prompt = prompt.clone();
                        run_exchange(async move { ctrl.select_suggested_prompt(&prompt).await });
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let can_send = move || !composing.get() && !input_value.get().trim().is_empty();
    let trigger_tooltip = format!("Ask {title}");
    let trigger_label = title.clone();

    view! {
        <button
            class="dermagenie-widget-button"
            class:widget-active=move || is_open.get()
            title=trigger_tooltip
            node_ref=trigger_ref
            on:click=on_trigger
        >
            <i class="fas fa-magic"></i>
            <span class="widget-label">{trigger_label}</span>
            <span class="widget-pulse"></span>
        </button>

        <div class="dermagenie-widget-container" class:widget-open=move || is_open.get() node_ref=panel_ref>
            <div class="widget-header">
                <div class="widget-header-content">
                    <div class="widget-avatar">
                        <i class="fas fa-magic"></i>
                    </div>
                    <div class="widget-title">
                        <h3>{title}</h3>
                        <p class="widget-status">
                            <span class="status-dot"></span>
                            "Online - Skin Health Assistant"
                        </p>
                    </div>
                </div>
                <button type="button" class="widget-close" on:click=on_close>
                    <i class="fas fa-times"></i>
                </button>
            </div>

            <div class="widget-body">
                <div class="widget-welcome">
                    <h4>"Welcome to DermaGenie AI!"</h4>
                    <p>"I'm your AI-powered skin health assistant. Ask me anything about:"</p>
                    <ul>
                        <li>"Skin conditions and lesions"</li>
                        <li>"Skin cancer prevention"</li>
                        <li>"Skincare recommendations"</li>
                        <li>"Understanding your analysis results"</li>
                        <li>"When to see a dermatologist"</li>
                    </ul>
                </div>

                <div class="suggested-questions" hidden=move || !suggestions_shown(suggestions_visible.get(), prompt_count)>
                    <p class="suggested-title">"Quick Questions:"</p>
                    <div class="suggested-buttons">{suggestion_buttons}</div>
                </div>

                <div class="chat-messages" node_ref=messages_ref>
                    <For each=move || messages.get() key=bubble_key let:message>
                        <MessageBubble message=message/>
                    </For>
                    {move || composing.get().then(|| view! { <TypingIndicator/> })}
                </div>
            </div>

            <div class="widget-footer">
                <form class="widget-input-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Ask about skin health..."
                        autocomplete="off"
                        node_ref=input_ref
                        prop:value=move || input_value.get()
                        on:input=move |ev| input_ctrl.set_input(event_target_value(&ev))
                    />
                    <button type="submit" class="widget-send-btn" disabled=move || !can_send()>
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </form>
                <p class="widget-disclaimer">
                    <i class="fas fa-info-circle"></i>
                    " AI assistant for educational purposes only. Not medical advice."
                </p>
            </div>
        </div>
    }
}

/// One chat bubble.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = bubble_class(message.role);
    let html = bubble_html(&message);
    let time_label = message.time_label;

    if message.role == MessageRole::User {
        view! {
            <div class=class>
                <div class="message-content">
                    <div class="message-text" inner_html=html></div>
                    <div class="message-time">{time_label}</div>
                </div>
                <div class="message-avatar">
                    <i class="fas fa-user"></i>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class=class>
                <div class="message-avatar">
                    <i class="fas fa-magic"></i>
                </div>
                <div class="message-content">
                    <div class="message-text" inner_html=html></div>
                    <div class="message-time">{time_label}</div>
                </div>
            </div>
        }
        .into_any()
    }
}

/// Composing indicator shown while a reply is pending.
#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-message ai-message typing-indicator">
            <div class="message-avatar">
                <i class="fas fa-magic"></i>
            </div>
            <div class="message-content">
                <div class="typing-dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "csr")]
fn click_is_outside(
    ev: &web_sys::MouseEvent,
    panel: NodeRef<leptos::html::Div>,
    trigger: NodeRef<leptos::html::Button>,
) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    let inside_panel = panel.get_untracked().is_some_and(|el| el.contains(Some(&target)));
    let inside_trigger = trigger.get_untracked().is_some_and(|el| el.contains(Some(&target)));
    !inside_panel && !inside_trigger
}
