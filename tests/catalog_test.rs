use cupcakery::api::{Api, Method};
use cupcakery::catalog::{static_data, Catalog, DataSource};
use cupcakery::toast::ToastVariant;

mod mocks;
use mocks::bakery_backend::BakeryBackend;

fn catalog(backend: &std::rc::Rc<BakeryBackend>) -> Catalog {
    Catalog::new(&Api::new(backend.client()))
}

#[tokio::test]
async fn test_unknown_categories_always_render_fallback() {
    let backend = BakeryBackend::new();
    backend.add_category("Pies");
    let catalog = catalog(&backend);

    for slug in ["gluten-free-muffins", "x", "donuts", "a-b-c"] {
        let page = catalog.load_category(slug).await;
        assert!(page.is_fallback_category(), "{slug}");
        assert_eq!(page.source, DataSource::Fallback);
        assert!(page.products.is_empty());
        assert_eq!(page.category.description, format!("Delicious {} cupcakes and treats.", slug));
        let notice = page.notice.expect("fallback carries a notice");
        assert_eq!(notice.title, "Category not found");
        assert_eq!(
            notice.description.as_deref(),
            Some(format!("No category found with name \"{}\". Showing fallback data.", slug).as_str())
        );
    }
}

#[tokio::test]
async fn test_unknown_category_name_is_title_cased() {
    let backend = BakeryBackend::new();
    let page = catalog(&backend).load_category("gluten-free-muffins").await;

    assert_eq!(page.category.id, -1);
    assert_eq!(page.category.name, "Gluten Free Muffins");
}

#[tokio::test]
async fn test_category_lookup_failure_uses_error_notice() {
    let backend = BakeryBackend::new();
    backend.fail(Method::Get, "/products/categories/");

    let page = catalog(&backend).load_category("pies").await;

    assert!(page.is_fallback_category());
    let notice = page.notice.unwrap();
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.variant, ToastVariant::Destructive);
    assert_eq!(
        notice.description.as_deref(),
        Some("Failed to load category data. Using fallback data instead.")
    );
}

#[tokio::test]
async fn test_backend_category_matches_case_insensitively() {
    let backend = BakeryBackend::new();
    let pies = backend.add_category("Pies");
    backend.add_product("Apple Pie", 1800, Some(&pies), false);
    backend.add_product("Pecan Pie", 2000, Some(&pies), false);

    let page = catalog(&backend).load_category("PIES").await;

    assert_eq!(page.source, DataSource::Live);
    assert_eq!(page.category.id, pies.id);
    assert_eq!(page.products.len(), 2);
    assert!(page.notice.is_none());
}

#[tokio::test]
async fn test_static_category_prefers_live_products() {
    let backend = BakeryBackend::new();
    let cupcakes = backend.add_category("Cupcakes");
    backend.add_product("Salted Caramel", 425, Some(&cupcakes), true);

    let page = catalog(&backend).load_category("cupcakes").await;

    assert_eq!(page.source, DataSource::Live);
    assert_eq!(page.category.name, "Cupcakes");
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Salted Caramel");
}

#[tokio::test]
async fn test_static_category_with_no_live_products_is_silent() {
    let backend = BakeryBackend::new();

    let page = catalog(&backend).load_category("cakesicles").await;

    assert_eq!(page.source, DataSource::Fallback);
    assert_eq!(page.products, static_data::category_products("cakesicles"));
    assert!(page.notice.is_none());
}

#[tokio::test]
async fn test_static_category_when_offline() {
    let backend = BakeryBackend::new();
    backend.go_offline();

    let page = catalog(&backend).load_category("sweet-treats").await;

    assert_eq!(page.source, DataSource::Fallback);
    assert_eq!(page.products.len(), 6);
    assert_eq!(page.category.color.as_deref(), Some("from-amber-300 to-amber-700"));
    let notice = page.notice.unwrap();
    assert_eq!(
        notice.description.as_deref(),
        Some("Failed to load products. Using static data instead.")
    );
}

#[tokio::test]
async fn test_featured_products_fall_back_without_notice() {
    let backend = BakeryBackend::new();
    let catalog = catalog(&backend);

    let empty = catalog.featured_products().await;
    assert_eq!(empty.source, DataSource::Fallback);
    assert_eq!(empty.value.len(), 6);

    backend.add_product("Signature Swirl", 549, None, true);
    backend.add_product("Plain Muffin", 200, None, false);
    let live = catalog.featured_products().await;
    assert_eq!(live.source, DataSource::Live);
    assert_eq!(live.value.len(), 1);
    assert!(live.notice.is_none());
}

#[tokio::test]
async fn test_blog_listing_fallbacks() {
    let backend = BakeryBackend::new();
    let catalog = catalog(&backend);

    let empty = catalog.blog_posts().await;
    assert_eq!(empty.source, DataSource::Fallback);
    assert_eq!(empty.value.len(), 6);
    assert!(empty.notice.is_none());

    backend.fail(Method::Get, "/blog/posts/");
    let failed = catalog.blog_posts().await;
    assert_eq!(failed.value.len(), 6);
    assert_eq!(failed.notice.map(|notice| notice.title), Some("Error loading articles".to_string()));
}

#[tokio::test]
async fn test_blog_listing_is_newest_first() {
    let backend = BakeryBackend::new();
    backend.add_post("Spring Menu");
    let catalog = catalog(&backend);

    let loaded = catalog.blog_posts().await;

    assert_eq!(loaded.source, DataSource::Live);
    assert_eq!(loaded.value[0].title, "Spring Menu");
    let request = backend.last_request().unwrap();
    assert!(request.url.contains("ordering=-published_at"));
}

#[tokio::test]
async fn test_blog_article_lookup_order() {
    let backend = BakeryBackend::new();
    let live = backend.add_post("Spring Menu");
    let catalog = catalog(&backend);

    let found = catalog.blog_post("spring-menu").await;
    assert_eq!(found.source, DataSource::Live);
    assert_eq!(found.value.map(|post| post.id), Some(live.id));

    let bundled = catalog.blog_post("vegan-baking-substitutes").await;
    assert_eq!(bundled.source, DataSource::Fallback);
    assert!(bundled.notice.is_none());
    assert_eq!(bundled.value.map(|post| post.author_name()), Some("Sophia Greene".to_string()));

    let missing = catalog.blog_post("does-not-exist").await;
    assert!(missing.value.is_none());
    assert_eq!(missing.notice.map(|notice| notice.title), Some("Article not found".to_string()));
}
