use crate::components::fields::TextField;
use crate::AppContext;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostfound_client::{FormKind, Navigation, View, actions};

#[component]
pub fn RegisterPage(ctx: AppContext) -> impl IntoView {
    // 进行中的提交数，只用于按钮文案
    let (in_flight, set_in_flight) = signal(0u32);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_in_flight.update(|n| *n += 1);

        let api = ctx.api();
        spawn_local(async move {
            actions::submit_register(&api, &ctx.state).await;
            set_in_flight.try_update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{View::Register.title()}</h1>
                    <p class="text-base-content/70">"Report and claim items around campus"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <TextField ctx=ctx form=FormKind::Register name="student_number" label="Student number" />
                        <TextField ctx=ctx form=FormKind::Register name="email" label="Email" input_type="email" />
                        <TextField
                            ctx=ctx
                            form=FormKind::Register
                            name="contact_info"
                            label="Contact info"
                            placeholder="Phone number or other contact"
                        />
                        <TextField ctx=ctx form=FormKind::Register name="password" label="Password" input_type="password" />
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">
                                {move || if in_flight.get() > 0 { "Registering..." } else { "Register" }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already registered? "
                            <a class="link link-primary" on:click=move |_| ctx.go(Navigation::ShowLogin)>
                                "Log in"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
