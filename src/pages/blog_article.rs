use leptos::*;
use leptos_router::use_params_map;

use crate::context::{use_catalog, use_toaster};
use crate::models::BlogPost;

#[component]
pub fn BlogArticlePage() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();
    let toaster = use_toaster();

    let slug = move || params.with(|params| params.get("slug").cloned().unwrap_or_default());

    let article = create_local_resource(slug, move |slug| {
        let catalog = catalog.clone();
        async move {
            let loaded = catalog.blog_post(&slug).await;
            if let Some(notice) = loaded.notice {
                toaster.push(notice);
            }
            loaded.value
        }
    });

    view! {
        <div class="article-page">
            <a href="/blog" class="back-link">{ "Back to all articles" }</a>
            <Suspense fallback=|| view! { <p class="loading">{ "Loading article..." }</p> }>
                { move || article.get().map(|post| match post {
                    Some(post) => view! { <Article post=post /> }.into_view(),
                    None => view! {
                        <div class="not-found">
                            <h1>{ "Article not found" }</h1>
                            <a href="/blog" class="btn-primary">{ "Browse articles" }</a>
                        </div>
                    }.into_view(),
                }) }
            </Suspense>
        </div>
    }
}

#[component]
fn Article(post: BlogPost) -> impl IntoView {
    let image = post.display_image().map(str::to_string);
    let meta = format!(
        "{} · {} · {} min read",
        post.published_label(),
        post.author_name(),
        post.reading_minutes()
    );
    let alt = post.title.clone();
    let paragraphs = post
        .content
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    view! {
        <article class="article">
            <h1>{ post.title }</h1>
            <p class="article-meta">{ meta }</p>
            { image.map(|src| view! { <img class="article-image" src=src alt=alt /> }) }
            <div class="article-content">
                { paragraphs.into_iter().map(|paragraph| view! { <p>{ paragraph }</p> }).collect::<Vec<_>>() }
            </div>
        </article>
    }
}
