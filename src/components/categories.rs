use leptos::*;

use crate::catalog::static_data;

#[component]
pub fn Categories() -> impl IntoView {
    view! {
        <section class="categories">
            <h2 class="section-title">{ "Our Sweet Categories" }</h2>
            <div class="category-grid">
                { static_data::categories().into_iter().map(|category| {
                    let href = format!("/category/{}", category.slug.clone().unwrap_or_default());
                    let class = format!(
                        "category-tile bg-gradient-to-br {}",
                        category.color.clone().unwrap_or_default()
                    );
                    view! {
                        <a href=href class=class>
                            <h3>{ category.name }</h3>
                            <p>{ category.description }</p>
                        </a>
                    }
                }).collect::<Vec<_>>() }
            </div>
        </section>
    }
}
