//! Catalog loading with a bundled fallback.
//! Every loader here returns something renderable; API failures become toasts.
pub mod static_data;

use leptos::logging::{error, log, warn};

use crate::api::{Api, BlogApi, ProductsApi};
use crate::models::{BlogPost, Category, Product, ProductQuery};
use crate::toast::Toast;

pub const FEATURED_LIMIT: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// A loaded value, where it came from, and anything the user should be told.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub source: DataSource,
    pub notice: Option<Toast>,
}

impl<T> Loaded<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            source: DataSource::Live,
            notice: None,
        }
    }

    pub fn fallback(value: T, notice: Option<Toast>) -> Self {
        Self {
            value,
            source: DataSource::Fallback,
            notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub category: Category,
    pub products: Vec<Product>,
    pub source: DataSource,
    pub notice: Option<Toast>,
}

impl CategoryView {
    pub fn is_fallback_category(&self) -> bool {
        self.category.id == -1
    }
}

/// "sweet-treats" -> "Sweet Treats"
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder for a category nobody knows about.
pub fn fallback_category(slug: &str) -> Category {
    Category {
        id: -1,
        name: title_case(slug),
        slug: Some(slug.to_string()),
        description: format!("Delicious {} cupcakes and treats.", slug),
        image: None,
        is_active: true,
        color: None,
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    products: ProductsApi,
    blog: BlogApi,
}

impl Catalog {
    pub fn new(api: &Api) -> Self {
        Self {
            products: api.products.clone(),
            blog: api.blog.clone(),
        }
    }

    pub async fn load_category(&self, slug: &str) -> CategoryView {
        if let Some(category) = static_data::category(slug) {
            return self.load_static_category(slug, category).await;
        }

        match self.products.categories().await {
            Ok(categories) => match categories.into_iter().find(|category| category.matches(slug)) {
                Some(category) => {
                    match self
                        .products
                        .list(&ProductQuery::for_category(category.id))
                        .await
                    {
                        Ok(products) => CategoryView {
                            category,
                            products,
                            source: DataSource::Live,
                            notice: None,
                        },
                        Err(err) => {
                            error!("[CATALOG] Error fetching products for {}: {}", slug, err);
                            Self::unknown_category(slug, load_failed_notice())
                        }
                    }
                }
                None => {
                    warn!("[CATALOG] No category named {}", slug);
                    Self::unknown_category(
                        slug,
                        Toast::error("Category not found").with_description(format!(
                            "No category found with name \"{}\". Showing fallback data.",
                            slug
                        )),
                    )
                }
            },
            Err(err) => {
                error!("[CATALOG] Error fetching category data: {}", err);
                Self::unknown_category(slug, load_failed_notice())
            }
        }
    }

    async fn load_static_category(&self, slug: &str, category: Category) -> CategoryView {
        match self.products.list(&ProductQuery::for_category(slug)).await {
            Ok(products) if !products.is_empty() => {
                log!("[CATALOG] {} live products for {}", products.len(), slug);
                CategoryView {
                    category,
                    products,
                    source: DataSource::Live,
                    notice: None,
                }
            }
            Ok(_) => CategoryView {
                category,
                products: static_data::category_products(slug),
                source: DataSource::Fallback,
                notice: None,
            },
            Err(err) => {
                error!("[CATALOG] Error fetching products: {}", err);
                CategoryView {
                    category,
                    products: static_data::category_products(slug),
                    source: DataSource::Fallback,
                    notice: Some(
                        Toast::error("Error")
                            .with_description("Failed to load products. Using static data instead."),
                    ),
                }
            }
        }
    }

    fn unknown_category(slug: &str, notice: Toast) -> CategoryView {
        CategoryView {
            category: fallback_category(slug),
            products: Vec::new(),
            source: DataSource::Fallback,
            notice: Some(notice),
        }
    }

    pub async fn featured_products(&self) -> Loaded<Vec<Product>> {
        match self.products.list(&ProductQuery::featured(FEATURED_LIMIT)).await {
            Ok(products) if !products.is_empty() => Loaded::live(products),
            Ok(_) => Loaded::fallback(static_data::featured_products(), None),
            Err(err) => {
                warn!("[CATALOG] Featured products unavailable: {}", err);
                Loaded::fallback(static_data::featured_products(), None)
            }
        }
    }

    pub async fn blog_posts(&self) -> Loaded<Vec<BlogPost>> {
        match self.blog.list().await {
            Ok(posts) if !posts.is_empty() => Loaded::live(posts),
            Ok(_) => Loaded::fallback(static_data::blog_posts(), None),
            Err(err) => {
                error!("[CATALOG] Error fetching blog articles: {}", err);
                Loaded::fallback(
                    static_data::blog_posts(),
                    Some(
                        Toast::error("Error loading articles")
                            .with_description("Could not load blog articles. Please try again later."),
                    ),
                )
            }
        }
    }

    /// `None` only when neither the API nor the bundled posts know `key`.
    pub async fn blog_post(&self, key: &str) -> Loaded<Option<BlogPost>> {
        match self.blog.get(key).await {
            Ok(post) => return Loaded::live(Some(post)),
            Err(err) => warn!("[CATALOG] Article {} not served by the API: {}", key, err),
        }
        match static_data::blog_post(key) {
            Some(post) => Loaded::fallback(Some(post), None),
            None => Loaded::fallback(
                None,
                Some(
                    Toast::error("Article not found")
                        .with_description("The requested article could not be found."),
                ),
            ),
        }
    }
}

fn load_failed_notice() -> Toast {
    Toast::error("Error").with_description("Failed to load category data. Using fallback data instead.")
}
