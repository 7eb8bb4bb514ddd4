use leptos::*;

use crate::models::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image = product.display_image().map(str::to_string);
    let name = product.name.clone();
    let alt = product.name.clone();
    let price = product.price.to_string();

    view! {
        <div class="product-card">
            { image.map(|src| view! { <img class="product-image" src=src alt=alt loading="lazy" /> }) }
            <div class="product-body">
                <h3 class="product-title">{ name }</h3>
                <p class="product-description">{ product.description }</p>
                <span class="product-price">{ price }</span>
            </div>
        </div>
    }
}
