use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{ "LaKeisha's Cupcakery" }</h1>
                <p class="hero-subtitle">
                    { "Handcrafted cupcakes, cakes and sweet treats baked fresh every morning." }
                </p>
                <div class="hero-actions">
                    <a href="/category/cupcakes" class="btn-primary">{ "Order Now" }</a>
                    <a href="/contact" class="btn-secondary">{ "Custom Orders" }</a>
                </div>
            </div>
        </section>
    }
}
