//! Receipt submission form with image attachments.
//!
//! Same fields as the search form, plus a multi-file picker and a
//! thumbnail grid where each image can be removed again.

use chrono::NaiveDate;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::receipt_form::{CardHeader, ReceiptInputs};
use crate::form::{dispatch, SubmissionForm};
use crate::services::{selected_files, BrowserPreviews, ConsoleDiagnostics, Toasts};
use crate::{ACCEPTED_IMAGE_TYPES, MAX_IMAGES};

/// Row of the thumbnail grid: image id, name, preview URL.
type Thumbnail = (u64, String, Option<String>);

#[component]
pub fn ReceiptSubmitForm() -> impl IntoView {
    let toasts = Toasts::from_context();
    // Previews are revoked when the form is dropped with its owner
    let form = create_rw_signal(SubmissionForm::new(BrowserPreviews));

    let receipt_id = Signal::derive(move || form.with(|f| f.receipt_id().to_string()));
    let date = Signal::derive(move || form.with(|f| f.transaction_date()));
    let image_count = move || form.with(|f| f.images().len());
    let has_images = move || image_count() > 0;

    let on_receipt_id = move |value: String| form.update(|f| f.set_receipt_id(value));
    let on_date = move |value: Option<NaiveDate>| form.update(|f| f.set_transaction_date(value));

    let on_files = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let batch = selected_files(&input);
        // Allow picking the same file again after removing it
        input.set_value("");

        log::debug!("📎 {} file(s) selected", batch.len());
        let effects = form.try_update(|f| f.add_images(batch)).unwrap_or_default();
        dispatch(effects, &toasts, &ConsoleDiagnostics);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let effects = form.try_update(|f| f.submit_receipt()).unwrap_or_default();
        dispatch(effects, &toasts, &ConsoleDiagnostics);
    };

    let thumbnails = move || {
        form.with(|f| {
            f.images()
                .iter()
                .map(|image| (image.id, image.name.clone(), image.preview.clone()))
                .collect::<Vec<Thumbnail>>()
        })
    };

    view! {
        <div class="card receipt-card">
            <CardHeader
                icon="🧾"
                title="Submit Receipt"
                description="Enter receipt details and attach photos of your receipt"
            />
            <form class="receipt-form" on:submit=on_submit>
                <ReceiptInputs
                    receipt_id=receipt_id
                    date=date
                    on_receipt_id=on_receipt_id
                    on_date=on_date
                />

                <div class="field">
                    <label for="receiptImages">
                        "Receipt Images "
                        <span class="hint">{move || format!("({}/{})", image_count(), MAX_IMAGES)}</span>
                    </label>
                    <input
                        id="receiptImages"
                        type="file"
                        multiple=true
                        accept=ACCEPTED_IMAGE_TYPES
                        on:change=on_files
                    />
                </div>

                <Show
                    when=has_images
                    fallback=|| view! { }
                >
                    <div class="thumbnails">
                        <For
                            each=thumbnails
                            key=|(id, _, _)| *id
                            children=move |(id, name, preview)| {
                                let alt = name.clone();
                                view! {
                                    <div class="thumbnail">
                                        {match preview {
                                            Some(url) => view! { <img src=url alt=alt/> }.into_view(),
                                            None => view! { <div class="thumbnail-placeholder">"🖼️"</div> }.into_view(),
                                        }}
                                        <span class="thumbnail-name">{name}</span>
                                        <button
                                            type="button"
                                            class="thumbnail-remove"
                                            title="Remove image"
                                            on:click=move |_| form.update(|f| {
                                                f.remove_image_by_id(id);
                                            })
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                <button type="submit" class="submit-button">
                    "📤 Submit Receipt"
                </button>
            </form>
        </div>
    }
}
