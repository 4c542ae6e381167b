use crate::components::fields::TextField;
use crate::AppContext;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostfound_client::{FormKind, Navigation, actions};

#[component]
pub fn LoginPage(ctx: AppContext) -> impl IntoView {
    // 进行中的提交数，只用于按钮文案
    let (in_flight, set_in_flight) = signal(0u32);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_in_flight.update(|n| *n += 1);

        let api = ctx.api();
        spawn_local(async move {
            actions::submit_login(&api, &ctx.session, &ctx.state).await;
            // 登录成功后页面已卸载，信号可能已释放
            set_in_flight.try_update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Lost & Found"</h1>
                    <p class="text-base-content/70">"Log in with your student number"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <TextField
                            ctx=ctx
                            form=FormKind::Login
                            name="student_number"
                            label="Student number"
                            placeholder="2021-00001"
                        />
                        <TextField
                            ctx=ctx
                            form=FormKind::Login
                            name="password"
                            label="Password"
                            input_type="password"
                        />
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">
                                {move || if in_flight.get() > 0 {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Log in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "No account yet? "
                            <a class="link link-primary" on:click=move |_| ctx.go(Navigation::ShowRegister)>
                                "Register"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
