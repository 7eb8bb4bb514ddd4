use leptos::*;

use crate::components::blog_section::BlogCard;
use crate::context::{use_catalog, use_toaster};

#[component]
pub fn BlogPage() -> impl IntoView {
    let catalog = use_catalog();
    let toaster = use_toaster();

    let posts = create_local_resource(
        || (),
        move |_| {
            let catalog = catalog.clone();
            async move {
                let loaded = catalog.blog_posts().await;
                if let Some(notice) = loaded.notice {
                    toaster.push(notice);
                }
                loaded.value
            }
        },
    );

    view! {
        <div class="blog-page">
            <header class="page-header">
                <a href="/" class="back-link">{ "Back to home" }</a>
                <h1>{ "Our Sweet Blog" }</h1>
                <p>{ "Baking tips, recipes and stories from our kitchen." }</p>
            </header>
            <Suspense fallback=|| view! { <p class="loading">{ "Loading articles..." }</p> }>
                <div class="blog-grid">
                    { move || posts.get().map(|posts| {
                        posts.into_iter().map(|post| view! { <BlogCard post=post /> }).collect::<Vec<_>>()
                    }) }
                </div>
            </Suspense>
        </div>
    }
}
