use leptos::*;

use crate::components::{
    blog_section::BlogSection, categories::Categories, contact_section::ContactSection,
    hero::Hero, product_showcase::ProductShowcase,
};

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <Hero />
        <Categories />
        <ProductShowcase />
        <BlogSection />
        <ContactSection />
    }
}
