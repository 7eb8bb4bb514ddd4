use leptos::*;

use crate::components::product_card::ProductCard;
use crate::models::Product;

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! {
            <p class="empty-state">{ "No products available in this category yet." }</p>
        }
        .into_view();
    }

    view! {
        <div class="product-grid">
            { products.into_iter().map(|product| view! { <ProductCard product=product /> }).collect::<Vec<_>>() }
        </div>
    }
    .into_view()
}
