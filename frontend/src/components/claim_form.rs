use crate::components::fields::TextField;
use crate::AppContext;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostfound_client::{FormKind, Navigation, View, actions};

#[component]
pub fn ClaimPage(ctx: AppContext) -> impl IntoView {
    // 进行中的提交数，只用于按钮文案
    let (in_flight, set_in_flight) = signal(0u32);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_in_flight.update(|n| *n += 1);

        let api = ctx.api();
        spawn_local(async move {
            actions::submit_claim(&api, &ctx.session, &ctx.state).await;
            set_in_flight.try_update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <div class="p-4 md:p-8">
            <div class="card max-w-md mx-auto bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <div class="flex items-center justify-between">
                        <h2 class="card-title">{View::Claim.title()}</h2>
                        <button
                            type="button"
                            class="btn btn-ghost btn-sm"
                            on:click=move |_| ctx.go(Navigation::BackToDashboard)
                        >
                            "Back to dashboard"
                        </button>
                    </div>
                    <p class="text-sm text-base-content/70">
                        "Enter the ID of the reported object you want to claim."
                    </p>

                    <TextField ctx=ctx form=FormKind::Claim name="object_id" label="Object ID" input_type="number" />

                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary">
                            {move || if in_flight.get() > 0 { "Submitting..." } else { "Submit claim" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
