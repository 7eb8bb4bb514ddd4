use leptos::*;

use crate::context::use_catalog;
use crate::models::BlogPost;

const PREVIEW_COUNT: usize = 3;

#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.lookup_key());
    let image = post.display_image().map(str::to_string);
    let date = post.published_label();
    let author = post.author_name();
    let minutes = post.reading_minutes();
    let alt = post.title.clone();

    view! {
        <article class="blog-card">
            { image.map(|src| view! { <img class="blog-image" src=src alt=alt loading="lazy" /> }) }
            <div class="blog-body">
                <p class="blog-meta">{ format!("{} · {} · {} min read", date, author, minutes) }</p>
                <h3>{ post.title }</h3>
                <p>{ post.excerpt }</p>
                <a href=href class="read-more">{ "Read More" }</a>
            </div>
        </article>
    }
}

/// Latest articles on the home page.
#[component]
pub fn BlogSection() -> impl IntoView {
    let catalog = use_catalog();
    let posts = create_local_resource(
        || (),
        move |_| {
            let catalog = catalog.clone();
            async move { catalog.blog_posts().await.value }
        },
    );

    view! {
        <section class="blog-section">
            <h2 class="section-title">{ "From Our Blog" }</h2>
            <Suspense fallback=|| view! { <p class="loading">{ "Loading articles..." }</p> }>
                <div class="blog-grid">
                    { move || posts.get().map(|posts| {
                        posts.into_iter()
                            .take(PREVIEW_COUNT)
                            .map(|post| view! { <BlogCard post=post /> })
                            .collect::<Vec<_>>()
                    }) }
                </div>
            </Suspense>
            <a href="/blog" class="btn-secondary">{ "View All Articles" }</a>
        </section>
    }
}
