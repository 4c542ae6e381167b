//! 通用表单字段
//!
//! 字段值直接读写 `FormController`，每次输入只覆盖一个字段。

use crate::AppContext;
use leptos::prelude::*;
use lostfound_client::{FormKind, StateCell};
use tracing::warn;

fn field_id(form: FormKind, name: &str) -> String {
    format!("{form:?}_{name}").to_lowercase()
}

/// 写入一个字段；失败只记录日志
fn edit(ctx: AppContext, form: FormKind, name: &'static str, value: String) {
    if let Err(e) = ctx.state.write(|ctl| ctl.edit(form, name, value)) {
        warn!(error = %e, ?form, "field edit rejected");
    }
}

#[component]
pub fn TextField(
    ctx: AppContext,
    form: FormKind,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    let id = field_id(form, name);
    let value = move || {
        ctx.state
            .with(|ctl| ctl.field(form, name).unwrap_or_default().to_string())
    };

    view! {
        <div class="form-control">
            <label class="label" for=id.clone()>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                required=required
                on:input=move |ev| edit(ctx, form, name, event_target_value(&ev))
                prop:value=value
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn SelectField(
    ctx: AppContext,
    form: FormKind,
    name: &'static str,
    label: &'static str,
    /// `(value, label)`
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let id = field_id(form, name);
    let selected = move |value: &'static str| {
        ctx.state
            .with(|ctl| ctl.field(form, name) == Some(value))
    };

    view! {
        <div class="form-control">
            <label class="label" for=id.clone()>
                <span class="label-text">{label}</span>
            </label>
            <select
                id=id
                required=true
                class="select select-bordered w-full"
                on:change=move |ev| edit(ctx, form, name, event_target_value(&ev))
            >
                {placeholder
                    .map(|text| {
                        view! {
                            <option value="" disabled=true selected=move || selected("")>
                                {text}
                            </option>
                        }
                    })}
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! {
                            <option value=value selected=move || selected(value)>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
