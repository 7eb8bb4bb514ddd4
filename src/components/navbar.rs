use leptos::*;
use leptos_router::use_navigate;

use crate::catalog::static_data;
use crate::context::{use_auth, use_toaster};
use crate::toast::Toast;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = create_signal(false);

    let logout = move |_| {
        auth.logout();
        toaster.push(Toast::success("Logged out successfully"));
        navigate("/", Default::default());
    };

    let display_name = move || {
        auth.user.with(|user| {
            user.as_ref()
                .map(|user| {
                    let name = user.full_name();
                    if name.is_empty() { user.email.clone() } else { name }
                })
                .unwrap_or_default()
        })
    };

    view! {
        <nav class="navbar">
            <a href="/" class="brand">{ "LaKeisha's Cupcakery" }</a>
            <button class="menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                { "Menu" }
            </button>
            <ul class="nav-links" class:open=move || menu_open.get()>
                <li><a href="/">{ "Home" }</a></li>
                { static_data::categories().into_iter().map(|category| {
                    let href = format!("/category/{}", category.slug.clone().unwrap_or_default());
                    view! { <li><a href=href>{ category.name }</a></li> }
                }).collect::<Vec<_>>() }
                <li><a href="/blog">{ "Blog" }</a></li>
                <li><a href="/contact">{ "Contact" }</a></li>
            </ul>
            <div class="nav-auth">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! {
                        <a href="/login" class="btn-secondary">{ "Login" }</a>
                        <a href="/register" class="btn-primary">{ "Sign Up" }</a>
                    }
                >
                    <span class="nav-user">{ display_name }</span>
                    <Show when=move || auth.is_admin()>
                        <a href="/admin" class="btn-secondary">{ "Admin" }</a>
                    </Show>
                    <button class="btn-primary" on:click=logout.clone()>{ "Logout" }</button>
                </Show>
            </div>
        </nav>
    }
}
