use leptos::*;

use crate::catalog::static_data;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <h3>{ "LaKeisha's Cupcakery" }</h3>
                    <p>{ "Baking happiness one cupcake at a time." }</p>
                </div>
                <div>
                    <h4>{ "Shop" }</h4>
                    <ul>
                        { static_data::categories().into_iter().map(|category| {
                            let href = format!("/category/{}", category.slug.clone().unwrap_or_default());
                            view! { <li><a href=href>{ category.name }</a></li> }
                        }).collect::<Vec<_>>() }
                    </ul>
                </div>
                <div>
                    <h4>{ "Visit" }</h4>
                    <ul>
                        <li><a href="/blog">{ "Blog" }</a></li>
                        <li><a href="/contact">{ "Contact" }</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer-copy">{ format!("© {} LaKeisha's Cupcakery. All rights reserved.", year) }</p>
        </footer>
    }
}
