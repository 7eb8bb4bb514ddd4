use leptos::*;
use leptos_router::use_params_map;

use crate::components::{category_header::CategoryHeader, product_grid::ProductGrid};
use crate::context::{use_catalog, use_toaster};

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();
    let toaster = use_toaster();

    let slug = move || params.with(|params| params.get("category_id").cloned().unwrap_or_default());

    let data = create_local_resource(slug, move |slug| {
        let catalog = catalog.clone();
        async move {
            let page = catalog.load_category(&slug).await;
            if let Some(notice) = page.notice.clone() {
                toaster.push(notice);
            }
            page
        }
    });

    view! {
        <div class="category-page">
            <Suspense fallback=|| view! { <p class="loading">{ "Loading category..." }</p> }>
                { move || data.get().map(|page| view! {
                    <CategoryHeader category=page.category />
                    <ProductGrid products=page.products />
                }) }
            </Suspense>
        </div>
    }
}
