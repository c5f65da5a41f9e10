//! Receipt search form.

use chrono::NaiveDate;
use leptos::*;

use crate::form::{dispatch, SearchForm};
use crate::services::{ConsoleDiagnostics, Toasts};
use crate::DatePicker;

#[component]
pub fn ReceiptSearchForm() -> impl IntoView {
    let toasts = Toasts::from_context();
    let form = create_rw_signal(SearchForm::new());

    let receipt_id = Signal::derive(move || form.with(|f| f.receipt_id().to_string()));
    let date = Signal::derive(move || form.with(|f| f.transaction_date()));

    let on_receipt_id = move |value: String| form.update(|f| f.set_receipt_id(value));
    let on_date = move |value: Option<NaiveDate>| form.update(|f| f.set_transaction_date(value));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let effects = form.try_update(|f| f.submit_search()).unwrap_or_default();
        dispatch(effects, &toasts, &ConsoleDiagnostics);
    };

    view! {
        <div class="card receipt-card">
            <CardHeader
                icon="🧾"
                title="Search Receipt"
                description="Enter receipt details to find your transaction"
            />
            <form class="receipt-form" on:submit=on_submit>
                <ReceiptInputs
                    receipt_id=receipt_id
                    date=date
                    on_receipt_id=on_receipt_id
                    on_date=on_date
                />
                <button type="submit" class="submit-button">
                    "🔍 Search Receipt"
                </button>
            </form>
        </div>
    }
}

/// Title block shared by both receipt cards.
#[component]
pub(crate) fn CardHeader(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <div class="card-icon">{icon}</div>
            <h2 class="card-title">{title}</h2>
            <p class="card-description">{description}</p>
        </div>
    }
}

/// Receipt ID and transaction date inputs.
#[component]
pub(crate) fn ReceiptInputs(
    #[prop(into)] receipt_id: Signal<String>,
    #[prop(into)] date: Signal<Option<NaiveDate>>,
    #[prop(into)] on_receipt_id: Callback<String>,
    #[prop(into)] on_date: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for="receiptId">"Receipt ID"</label>
            <input
                id="receiptId"
                type="text"
                placeholder="Enter receipt ID (e.g., RCP-12345)"
                prop:value=receipt_id
                on:input=move |ev| on_receipt_id.call(event_target_value(&ev))
            />
        </div>
        <div class="field">
            <span class="field-label">"Transaction Date"</span>
            <DatePicker selected=date on_select=on_date/>
        </div>
    }
}
