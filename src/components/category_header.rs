use leptos::*;

use crate::models::Category;

/// Banner at the top of a category page.
#[component]
pub fn CategoryHeader(category: Category) -> impl IntoView {
    let gradient = category
        .color
        .clone()
        .unwrap_or_else(|| "from-cupcake-pink to-cupcake-darkPink".to_string());

    view! {
        <header class=format!("category-header bg-gradient-to-r {}", gradient)>
            <a href="/" class="back-link">{ "Back to home" }</a>
            <h1>{ category.name }</h1>
            <p>{ category.description }</p>
        </header>
    }
}
