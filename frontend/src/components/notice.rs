use crate::AppContext;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use lostfound_client::{FormController, StateCell};

const DISMISS_AFTER_MS: u32 = 3_000;

/// 右上角提示，3 秒后自动关闭
///
/// 新提示替换旧提示并重新计时。
#[component]
pub fn NoticeToast(ctx: AppContext) -> impl IntoView {
    let notice = Memo::new(move |_| ctx.state.with(|ctl| ctl.notice().cloned()));
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        // 替换即取消上一个计时器
        let timer = notice.get().map(|_| {
            Timeout::new(DISMISS_AFTER_MS, move || {
                ctx.state.write(FormController::dismiss_notice);
            })
        });
        pending.set_value(timer);
    });

    view! {
        {move || {
            notice
                .get()
                .map(|notice| {
                    let class = if notice.is_failure() {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    };
                    view! {
                        <div class="toast toast-top toast-end z-50">
                            <div role="alert" class=class>
                                <span>{notice.message}</span>
                                <button
                                    class="btn btn-ghost btn-xs"
                                    on:click=move |_| ctx.state.write(FormController::dismiss_notice)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
