use crate::AppContext;
use leptos::prelude::*;
use lostfound_client::Navigation;
use lostfound_shared::date::display_date;

#[component]
pub fn DashboardPage(ctx: AppContext) -> impl IntoView {
    let reports = move || ctx.state.with(|ctl| ctl.reports().to_vec());
    let claims = move || ctx.state.with(|ctl| ctl.claims().to_vec());
    let reports_loading = move || ctx.state.with(|ctl| ctl.reports_loading());
    let claims_loading = move || ctx.state.with(|ctl| ctl.claims_loading());

    // 登录响应中的账户信息优先，否则显示 token 中的用户 ID
    let who = move || {
        let account = ctx.state.with(|ctl| {
            ctl.account()
                .and_then(|a| a.student_number.clone().or_else(|| a.email.clone()))
        });
        let user_id = ctx.session.with(|s| s.user().and_then(|u| u.user_id()));
        match (account, user_id) {
            (Some(name), _) => name,
            (None, Some(id)) => format!("User #{id}"),
            (None, None) => "Signed in".to_string(),
        }
    };
    let expires = move || {
        ctx.session
            .with(|s| s.user().and_then(|u| u.expires_at()).map(|t| t.to_string()))
    };

    view! {
        <div class="p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"Lost & Found"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">{who}</span>
                        {move || expires().map(|at| view! {
                            <span class="text-xs opacity-50 hidden md:inline">"Session expires " {at}</span>
                        })}
                    </div>
                    <div class="flex-none gap-2">
                        <button class="btn btn-primary" on:click=move |_| ctx.go(Navigation::OpenReport)>
                            "Report an item"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| ctx.go(Navigation::OpenClaim)>
                            "Claim an item"
                        </button>
                        <button class="btn btn-outline btn-error" on:click=move |_| ctx.logout()>
                            "Log out"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <h3 class="card-title">"My reports"</h3>
                            <button
                                class="btn btn-ghost btn-sm"
                                on:click=move |_| ctx.refresh()
                            >
                                "Refresh"
                            </button>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Item"</th>
                                        <th class="hidden md:table-cell">"Category"</th>
                                        <th>"Status"</th>
                                        <th class="hidden md:table-cell">"Reported"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || reports_loading() && reports().is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || !reports_loading() && reports().is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "No reports yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=reports
                                        key=|r| r.object_id
                                        children=move |report| {
                                            view! {
                                                <tr>
                                                    <td class="font-mono">{report.object_id}</td>
                                                    <td>
                                                        <div class="font-bold">{report.object_name}</div>
                                                        <div class="text-xs opacity-50">
                                                            {report.last_location.unwrap_or_default()}
                                                        </div>
                                                    </td>
                                                    <td class="hidden md:table-cell">
                                                        {report.category.unwrap_or_default()}
                                                    </td>
                                                    <td>
                                                        <div class="badge badge-accent badge-outline">{report.status}</div>
                                                    </td>
                                                    <td class="hidden md:table-cell">
                                                        {display_date(&report.date_reported)}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"My claims"</h3>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Claim ID"</th>
                                        <th>"Object ID"</th>
                                        <th class="hidden md:table-cell">"Claimed by"</th>
                                        <th class="hidden md:table-cell">"Contact"</th>
                                        <th>"Claimed on"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || claims_loading() && claims().is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || !claims_loading() && claims().is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "No claims yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=claims
                                        key=|c| c.claimant_id
                                        children=move |claim| {
                                            view! {
                                                <tr>
                                                    <td class="font-mono">{claim.claimant_id}</td>
                                                    <td class="font-mono">{claim.object_id}</td>
                                                    <td class="hidden md:table-cell">
                                                        {claim.claimed_by.unwrap_or_default()}
                                                    </td>
                                                    <td class="hidden md:table-cell">
                                                        {claim.contact_info.unwrap_or_default()}
                                                    </td>
                                                    <td>{display_date(&claim.claim_date)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
