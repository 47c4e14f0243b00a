//! "New post" button and dialog.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::post_modal::PostModalState;

/// Send the post in the background and fold the outcome into the dialog.
#[cfg(feature = "csr")]
fn spawn_submit(services: &Services, modal: RwSignal<PostModalState>, title: String, content: String) {
    let services = services.clone();
    leptos::task::spawn_local(async move {
        let outcome = crate::pages::home::submit_post(&services, &title, &content).await;
        let action = modal
            .try_update(|m| crate::pages::home::apply_submit_outcome(m, outcome))
            .flatten();
        if let Some(action) = action {
            services.perform(action);
        }
    });
}

/// Native builds only render the dialog; there is no fetch to drive, so the
/// busy flag is released and nothing is sent.
#[cfg(not(feature = "csr"))]
fn spawn_submit(_services: &Services, modal: RwSignal<PostModalState>, _title: String, _content: String) {
    modal.update(PostModalState::settle);
}

/// New-post island: trigger button, backdrop, and the post form.
#[component]
pub fn NewPostModal(services: Services) -> impl IntoView {
    let modal = RwSignal::new(PostModalState::default());

    let close = move || modal.update(PostModalState::close);
    let on_open = move |_| modal.update(PostModalState::open);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = modal.try_update(PostModalState::begin_submit).unwrap_or(false);
        if !started {
            return;
        }
        let (title, content) = modal.with_untracked(|m| (m.title.clone(), m.content.clone()));

        spawn_submit(&services, modal, title, content);
    };

    view! {
        <button id="new-post-btn" class="btn btn--primary" on:click=on_open>
            "New Post"
        </button>
        <div
            id="new-post-modal"
            class=move || if modal.with(|m| m.visible) { "modal" } else { "modal hidden" }
        >
            <div id="new-post-modal-backdrop" class="modal__backdrop" on:click=move |_| close()>
                <div
                    id="new-post-modal-card"
                    class="modal__card"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>"New Post"</h2>
                    <form id="new-post-form" class="modal__form" on:submit=on_submit>
                        <input
                            id="post-title"
                            class="modal__input"
                            type="text"
                            placeholder="Title"
                            prop:value=move || modal.with(|m| m.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                modal.update(|m| m.title = value);
                            }
                        />
                        <textarea
                            id="post-content"
                            class="modal__input modal__input--content"
                            placeholder="Write something..."
                            prop:value=move || modal.with(|m| m.content.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                modal.update(|m| m.content = value);
                            }
                        ></textarea>
                        <p
                            id="post-error"
                            data-error=""
                            class=move || if modal.with(|m| m.error.is_some()) { "modal__error" } else { "modal__error hidden" }
                        >
                            {move || modal.with(|m| m.error.clone()).unwrap_or_default()}
                        </p>
                        <div class="modal__actions">
                            <button id="new-post-modal-cancel" class="btn" type="button" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || modal.with(|m| m.busy)>
                                "Publish"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
