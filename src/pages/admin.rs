use leptos::*;
use leptos_router::use_navigate;

use crate::components::admin::{
    admin_user_management::AdminUserManagement, blog_management::BlogManagement,
    product_management::ProductManagement,
};
use crate::context::{use_auth, use_toaster};
use crate::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Products,
    Blog,
    Users,
}

/// Whether the dashboard should send the visitor to the login page.
/// A logout started from the dashboard handles its own redirect.
fn should_bounce(loading: bool, is_admin: bool, logging_out: bool) -> bool {
    !loading && !is_admin && !logging_out
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let (tab, set_tab) = create_signal(Tab::Products);
    let logging_out = store_value(false);

    // bounce non-admins once the stored session has been checked
    {
        let navigate = navigate.clone();
        create_effect(move |_| {
            if !should_bounce(auth.loading.get(), auth.is_admin(), logging_out.get_value()) {
                return;
            }
            toaster.push(
                Toast::error("Authentication required")
                    .with_description("Please login to access the admin dashboard"),
            );
            navigate("/login", Default::default());
        });
    }

    let logout = move |_| {
        // the guard would otherwise react to the cleared user with an auth error
        logging_out.set_value(true);
        auth.logout();
        toaster.push(
            Toast::success("Logged out successfully")
                .with_description("You have been logged out of the admin area"),
        );
        navigate("/", Default::default());
    };

    let tab_class = move |which: Tab| {
        move || if tab.get() == which { "tab active" } else { "tab" }
    };

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <h1>{ "Admin Dashboard" }</h1>
                <span class="admin-email">{ move || auth.user.with(|user| user.as_ref().map(|user| user.email.clone())) }</span>
                <button class="btn-secondary" on:click=logout>{ "Logout" }</button>
            </header>
            <Show
                when=move || auth.is_admin()
                fallback=|| view! { <p class="loading">{ "Checking access..." }</p> }
            >
                <nav class="admin-tabs">
                    <button class=tab_class(Tab::Products) on:click=move |_| set_tab.set(Tab::Products)>{ "Products" }</button>
                    <button class=tab_class(Tab::Blog) on:click=move |_| set_tab.set(Tab::Blog)>{ "Blog" }</button>
                    <button class=tab_class(Tab::Users) on:click=move |_| set_tab.set(Tab::Users)>{ "Admin Users" }</button>
                </nav>
                { move || match tab.get() {
                    Tab::Products => view! { <ProductManagement /> }.into_view(),
                    Tab::Blog => view! { <BlogManagement /> }.into_view(),
                    Tab::Users => view! { <AdminUserManagement /> }.into_view(),
                } }
            </Show>
        </div>
    }
}
