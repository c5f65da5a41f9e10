//! Toast notifications, newest at the bottom. Click to dismiss.

use leptos::*;

use crate::services::{Toast, Toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = Toasts::from_context();
    let queue = toasts.queue();

    view! {
        <div class="toaster">
            <For
                each=move || queue.with(|q| q.toasts().cloned().collect::<Vec<Toast>>())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.notification.severity.css_class()
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <div class="toast-title">{toast.notification.title}</div>
                            <div class="toast-description">{toast.notification.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
