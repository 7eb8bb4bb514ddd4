/// Root component for the Cupcakery storefront.
/// Provides the API client, session and toast queue, then routes to the pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::{Api, ApiClient};
use crate::components::{footer::Footer, navbar::Navbar, toaster::ToastViewport};
use crate::context::{provide_api, provide_auth, provide_toaster};
use crate::pages::{
    admin::AdminPage, blog::BlogPage, blog_article::BlogArticlePage, category::CategoryPage,
    contact::ContactPage, index::IndexPage, login::LoginPage, not_found::NotFound,
    register::RegisterPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = Api::new(ApiClient::from_env());
    provide_toaster();
    provide_auth(&api);
    provide_api(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/cupcakery.css" />
        <Title text="LaKeisha's Cupcakery" />
        <Meta name="description" content="Handcrafted cupcakes, cakes and sweet treats" />

        <Router>
            <Navbar />
            <main class="page">
                <Routes>
                    <Route path="/" view=IndexPage />
                    <Route path="/category/:category_id" view=CategoryPage />
                    <Route path="/blog" view=BlogPage />
                    <Route path="/blog/:slug" view=BlogArticlePage />
                    <Route path="/contact" view=ContactPage />
                    <Route path="/login" view=LoginPage />
                    <Route path="/register" view=RegisterPage />
                    <Route path="/admin" view=AdminPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <Footer />
            <ToastViewport />
        </Router>
    }
}
