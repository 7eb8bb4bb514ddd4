use leptos::*;

use crate::components::product_grid::ProductGrid;
use crate::context::use_catalog;

/// Featured products, falling back to the bundled selection.
#[component]
pub fn ProductShowcase() -> impl IntoView {
    let catalog = use_catalog();
    let featured = create_local_resource(
        || (),
        move |_| {
            let catalog = catalog.clone();
            async move { catalog.featured_products().await.value }
        },
    );

    view! {
        <section class="showcase">
            <h2 class="section-title">{ "Top Trending Treats" }</h2>
            <p class="section-subtitle">
                { "Our most popular handcrafted creations that customers can't get enough of." }
            </p>
            <Suspense fallback=|| view! { <p class="loading">{ "Loading treats..." }</p> }>
                { move || featured.get().map(|products| view! { <ProductGrid products=products /> }) }
            </Suspense>
        </section>
    }
}
