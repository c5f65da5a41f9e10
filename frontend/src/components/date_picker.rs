//! Transaction date picker.
//!
//! A native `<input type="date">` under a label showing the long date.

use chrono::NaiveDate;
use leptos::*;

use crate::form::{format_long_date, parse_date_input, to_input_value};

#[component]
pub fn DatePicker(
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] on_select: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        on_select.call(parse_date_input(&event_target_value(&ev)));
    };

    view! {
        <label class="date-picker">
            <span class=move || if selected.get().is_some() { "date-label" } else { "date-label muted" }>
                "📅 "
                {move || {
                    selected
                        .get()
                        .map(format_long_date)
                        .unwrap_or_else(|| "Select transaction date".to_string())
                }}
            </span>
            <input
                type="date"
                class="date-input"
                prop:value=move || selected.get().map(to_input_value).unwrap_or_default()
                on:change=on_change
            />
        </label>
    }
}
