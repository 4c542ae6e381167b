use crate::components::fields::{SelectField, TextField};
use crate::AppContext;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostfound_client::{FormKind, Navigation, View, actions};
use lostfound_shared::{ItemCategory, ReportStatus};

#[component]
pub fn ReportPage(ctx: AppContext) -> impl IntoView {
    // 进行中的提交数，只用于按钮文案
    let (in_flight, set_in_flight) = signal(0u32);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_in_flight.update(|n| *n += 1);

        let api = ctx.api();
        spawn_local(async move {
            actions::submit_report(&api, &ctx.session, &ctx.state).await;
            set_in_flight.try_update(|n| *n = n.saturating_sub(1));
        });
    };

    let categories = ItemCategory::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect::<Vec<_>>();
    let statuses = ReportStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect::<Vec<_>>();

    view! {
        <div class="p-4 md:p-8">
            <div class="card max-w-2xl mx-auto bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <div class="flex items-center justify-between">
                        <h2 class="card-title">{View::Report.title()}</h2>
                        <button
                            type="button"
                            class="btn btn-ghost btn-sm"
                            on:click=move |_| ctx.go(Navigation::BackToDashboard)
                        >
                            "Back to dashboard"
                        </button>
                    </div>

                    <TextField ctx=ctx form=FormKind::Report name="object_name" label="Item name" placeholder="Black umbrella" />
                    <div class="grid grid-cols-2 gap-4">
                        <SelectField
                            ctx=ctx
                            form=FormKind::Report
                            name="category"
                            label="Category"
                            options=categories
                            placeholder="Select a category"
                        />
                        <SelectField ctx=ctx form=FormKind::Report name="status" label="Status" options=statuses />
                    </div>
                    <TextField ctx=ctx form=FormKind::Report name="description" label="Description" />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField ctx=ctx form=FormKind::Report name="date_reported" label="Date" input_type="date" />
                        <TextField
                            ctx=ctx
                            form=FormKind::Report
                            name="last_location"
                            label="Last seen at"
                            placeholder="Library, 2nd floor"
                        />
                    </div>
                    <TextField
                        ctx=ctx
                        form=FormKind::Report
                        name="image_url"
                        label="Image URL (optional)"
                        input_type="url"
                        required=false
                    />

                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary">
                            {move || if in_flight.get() > 0 { "Submitting..." } else { "Submit report" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
