//! In-process stand-in for the bakery REST API.
//! Tokens are `access-<email>`; anything else is rejected with 401.
use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use cupcakery::api::{ApiClient, HttpRequest, HttpResponse, Method, RequestBody, Transport};
use cupcakery::config::ApiConfig;
use cupcakery::error::ApiError;
use cupcakery::models::{BlogPost, Category, CategoryRef, Price, Product, User};
use cupcakery::storage::TokenStore;

pub const BASE_URL: &str = "http://bakery.test/api";

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    products: Vec<Product>,
    posts: Vec<BlogPost>,
    next_id: i64,
    failing: Vec<(Method, String)>,
    offline: bool,
}

#[derive(Default)]
pub struct BakeryBackend {
    state: RefCell<State>,
    requests: RefCell<Vec<HttpRequest>>,
}

fn respond(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        body: if body.is_null() { String::new() } else { body.to_string() },
    }
}

fn unauthorized() -> HttpResponse {
    respond(401, json!({ "detail": "Given token not valid for any token type" }))
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

impl BakeryBackend {
    pub fn new() -> Rc<Self> {
        let backend = Self::default();
        backend.state.borrow_mut().next_id = 1;
        Rc::new(backend)
    }

    /// A client over this backend with empty in-memory token storage.
    pub fn client(self: &Rc<Self>) -> ApiClient {
        self.client_with(TokenStore::in_memory())
    }

    pub fn client_with(self: &Rc<Self>, tokens: TokenStore) -> ApiClient {
        let transport: Rc<dyn Transport> = self.clone();
        ApiClient::new(ApiConfig::new(BASE_URL), transport, tokens)
    }

    fn next_id(&self) -> i64 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        id
    }

    pub fn add_user(&self, email: &str, password: &str, superuser: bool) -> User {
        let user = User {
            id: self.next_id(),
            email: email.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_superuser: superuser,
            is_staff: superuser,
            is_vendor: false,
            profile_picture: None,
            date_joined: None,
        };
        self.state.borrow_mut().accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    pub fn add_category(&self, name: &str) -> Category {
        let category = Category {
            id: self.next_id(),
            name: name.to_string(),
            slug: Some(slugify(name)),
            description: format!("All our {}", name.to_lowercase()),
            image: None,
            is_active: true,
            color: None,
        };
        self.state.borrow_mut().categories.push(category.clone());
        category
    }

    pub fn add_product(&self, name: &str, cents: i64, category: Option<&Category>, featured: bool) -> Product {
        let product = Product {
            id: self.next_id(),
            slug: Some(slugify(name)),
            name: name.to_string(),
            description: String::new(),
            price: Price::from_cents(cents),
            image: None,
            image_url: None,
            category: category.map(|category| CategoryRef::Nested(category.clone())),
            is_featured: featured,
            is_available: true,
            created_at: None,
            updated_at: None,
        };
        self.state.borrow_mut().products.push(product.clone());
        product
    }

    pub fn add_post(&self, title: &str) -> BlogPost {
        let post: BlogPost = serde_json::from_value(json!({
            "id": self.next_id(),
            "slug": slugify(title),
            "title": title,
            "content": "Fresh from the oven.",
            "published_at": "2024-03-01T09:00:00Z",
        }))
        .expect("valid post");
        self.state.borrow_mut().posts.push(post.clone());
        post
    }

    /// Makes every `method path` request answer 500.
    pub fn fail(&self, method: Method, path: &str) {
        self.state
            .borrow_mut()
            .failing
            .push((method, path.to_string()));
    }

    pub fn go_offline(&self) {
        self.state.borrow_mut().offline = true;
    }

    pub fn product_count(&self) -> usize {
        self.state.borrow().products.len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    fn caller(&self, request: &HttpRequest) -> Option<User> {
        let token = request.header("Authorization")?.strip_prefix("Bearer ")?;
        let email = token.strip_prefix("access-")?;
        self.state
            .borrow()
            .accounts
            .iter()
            .find(|account| account.user.email == email)
            .map(|account| account.user.clone())
    }

    fn route(&self, request: &HttpRequest) -> HttpResponse {
        let Some(rest) = request.url.strip_prefix(BASE_URL) else {
            return respond(404, json!({ "detail": "Not found." }));
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let query: Vec<(String, String)> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| {
                let value = urlencoding::decode(value).map(|v| v.into_owned()).unwrap_or_default();
                (key.to_string(), value)
            })
            .collect();

        let failing = self
            .state
            .borrow()
            .failing
            .iter()
            .any(|(method, failing_path)| *method == request.method && failing_path == path);
        if failing {
            return respond(500, json!({ "detail": "Internal server error" }));
        }

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match (request.method, segments.as_slice()) {
            (Method::Post, ["auth", "login"]) => self.login(request),
            (Method::Post, ["auth", "register"]) => self.register(request),
            (Method::Get, ["auth", "profile"]) => match self.caller(request) {
                Some(user) => respond(200, json!(user)),
                None => unauthorized(),
            },
            (Method::Patch, ["auth", "profile"]) => match self.caller(request) {
                Some(user) => self.update_profile(user, request),
                None => unauthorized(),
            },
            (Method::Post, ["auth", "change-password"]) => match self.caller(request) {
                Some(user) => self.change_password(user, request),
                None => unauthorized(),
            },
            (Method::Post, ["auth", "token", "refresh"]) => self.refresh(request),
            (Method::Get, ["auth", "users"]) => match self.caller(request) {
                Some(user) if user.is_superuser => {
                    let users: Vec<User> = self
                        .state
                        .borrow()
                        .accounts
                        .iter()
                        .map(|account| account.user.clone())
                        .collect();
                    respond(200, json!(users))
                }
                Some(_) => respond(403, json!({ "detail": "You do not have permission to perform this action." })),
                None => unauthorized(),
            },
            (Method::Delete, ["auth", "users", id]) => {
                if self.caller(request).is_none() {
                    return unauthorized();
                }
                let id: i64 = id.parse().unwrap_or_default();
                self.state
                    .borrow_mut()
                    .accounts
                    .retain(|account| account.user.id != id);
                respond(204, Value::Null)
            }
            (Method::Get, ["products", "categories"]) => {
                respond(200, json!(self.state.borrow().categories))
            }
            (Method::Get, ["products"]) => self.list_products(&query),
            (Method::Post, ["products"]) => match self.caller(request) {
                Some(_) => self.create_product(request),
                None => unauthorized(),
            },
            (Method::Patch, ["products", slug]) => match self.caller(request) {
                Some(_) => self.update_product(slug, request),
                None => unauthorized(),
            },
            (Method::Delete, ["products", slug]) => {
                if self.caller(request).is_none() {
                    return unauthorized();
                }
                self.state
                    .borrow_mut()
                    .products
                    .retain(|product| product.lookup_key() != *slug);
                respond(204, Value::Null)
            }
            (Method::Get, ["blog", "posts"]) => {
                let mut posts = self.state.borrow().posts.clone();
                posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
                respond(200, json!({ "count": posts.len(), "next": null, "previous": null, "results": posts }))
            }
            (Method::Post, ["blog", "posts"]) => match self.caller(request) {
                Some(_) => self.create_post(request),
                None => unauthorized(),
            },
            (Method::Patch, ["blog", "posts", slug]) => match self.caller(request) {
                Some(_) => self.update_post(slug, request),
                None => unauthorized(),
            },
            (Method::Delete, ["blog", "posts", slug]) => {
                if self.caller(request).is_none() {
                    return unauthorized();
                }
                let mut state = self.state.borrow_mut();
                let before = state.posts.len();
                state.posts.retain(|post| !post.is_addressed_by(slug));
                if state.posts.len() == before {
                    return respond(404, json!({ "detail": "Not found." }));
                }
                respond(204, Value::Null)
            }
            (Method::Get, ["blog", "posts", slug]) => {
                let post = self
                    .state
                    .borrow()
                    .posts
                    .iter()
                    .find(|post| post.is_addressed_by(slug))
                    .cloned();
                match post {
                    Some(post) => respond(200, json!(post)),
                    None => respond(404, json!({ "detail": "Not found." })),
                }
            }
            (Method::Post, ["contact"]) => match &request.body {
                RequestBody::Json(body) => {
                    let mut echoed = body.clone();
                    echoed["id"] = json!(self.next_id());
                    respond(201, echoed)
                }
                _ => respond(400, json!({ "detail": "Expected JSON" })),
            },
            _ => respond(404, json!({ "detail": "Not found." })),
        }
    }

    fn update_product(&self, slug: &str, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Multipart(form) = &request.body else {
            return respond(400, json!({ "detail": "Expected multipart form" }));
        };
        let category = form
            .get_text("category_id")
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| {
                self.state
                    .borrow()
                    .categories
                    .iter()
                    .find(|category| category.id == id)
                    .cloned()
            });
        let price = match form.get_text("price").map(|price| price.parse::<Price>()) {
            Some(Ok(price)) => Some(price),
            Some(Err(_)) => return respond(400, json!({ "price": ["A valid number is required."] })),
            None => None,
        };
        let mut state = self.state.borrow_mut();
        let Some(product) = state
            .products
            .iter_mut()
            .find(|product| product.lookup_key() == slug)
        else {
            return respond(404, json!({ "detail": "Not found." }));
        };
        if let Some(name) = form.get_text("name") {
            product.name = name.to_string();
        }
        if let Some(description) = form.get_text("description") {
            product.description = description.to_string();
        }
        if let Some(price) = price {
            product.price = price;
        }
        if let Some(category) = category {
            product.category = Some(CategoryRef::Nested(category));
        }
        if let Some(featured) = form.get_text("is_featured") {
            product.is_featured = featured == "true";
        }
        if let Some(available) = form.get_text("is_available") {
            product.is_available = available == "true";
        }
        respond(200, json!(product))
    }

    fn update_post(&self, slug: &str, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Multipart(form) = &request.body else {
            return respond(400, json!({ "detail": "Expected multipart form" }));
        };
        let mut state = self.state.borrow_mut();
        let Some(post) = state.posts.iter_mut().find(|post| post.is_addressed_by(slug)) else {
            return respond(404, json!({ "detail": "Not found." }));
        };
        if let Some(title) = form.get_text("title") {
            post.title = title.to_string();
        }
        if let Some(excerpt) = form.get_text("excerpt") {
            post.excerpt = excerpt.to_string();
        }
        if let Some(content) = form.get_text("content") {
            post.content = content.to_string();
        }
        respond(200, json!(post))
    }

    fn update_profile(&self, caller: User, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Multipart(form) = &request.body else {
            return respond(400, json!({ "detail": "Expected multipart form" }));
        };
        let mut state = self.state.borrow_mut();
        let Some(account) = state
            .accounts
            .iter_mut()
            .find(|account| account.user.id == caller.id)
        else {
            return unauthorized();
        };
        if let Some(first_name) = form.get_text("first_name") {
            account.user.first_name = first_name.to_string();
        }
        if let Some(last_name) = form.get_text("last_name") {
            account.user.last_name = last_name.to_string();
        }
        respond(200, json!(account.user))
    }

    fn change_password(&self, caller: User, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Json(body) = &request.body else {
            return respond(400, json!({ "detail": "Expected JSON" }));
        };
        let old_password = body["old_password"].as_str().unwrap_or_default();
        let new_password = body["new_password"].as_str().unwrap_or_default();
        let mut state = self.state.borrow_mut();
        let Some(account) = state
            .accounts
            .iter_mut()
            .find(|account| account.user.id == caller.id)
        else {
            return unauthorized();
        };
        if account.password != old_password {
            return respond(400, json!({ "old_password": ["Wrong password."] }));
        }
        account.password = new_password.to_string();
        respond(200, json!({ "detail": "Password updated successfully." }))
    }

    fn refresh(&self, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Json(body) = &request.body else {
            return respond(400, json!({ "detail": "Expected JSON" }));
        };
        let email = body["refresh"]
            .as_str()
            .and_then(|token| token.strip_prefix("refresh-"))
            .unwrap_or_default();
        let known = self
            .state
            .borrow()
            .accounts
            .iter()
            .any(|account| account.user.email == email);
        if !known {
            return respond(401, json!({ "detail": "Token is invalid or expired" }));
        }
        respond(200, json!({ "access": format!("access-{}", email) }))
    }

    fn create_post(&self, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Multipart(form) = &request.body else {
            return respond(400, json!({ "detail": "Expected multipart form" }));
        };
        let title = form.get_text("title").unwrap_or_default();
        if title.is_empty() {
            return respond(400, json!({ "title": ["This field may not be blank."] }));
        }
        let mut post = self.add_post(title);
        post.content = form.get_text("content").unwrap_or_default().to_string();
        if let Some(stored) = self
            .state
            .borrow_mut()
            .posts
            .iter_mut()
            .find(|stored| stored.id == post.id)
        {
            stored.content = post.content.clone();
        }
        respond(201, json!(post))
    }

    fn login(&self, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Json(body) = &request.body else {
            return respond(400, json!({ "detail": "Expected JSON" }));
        };
        let email = body["email"].as_str().unwrap_or_default();
        let password = body["password"].as_str().unwrap_or_default();
        let state = self.state.borrow();
        match state
            .accounts
            .iter()
            .find(|account| account.user.email == email && account.password == password)
        {
            Some(account) => respond(
                200,
                json!({
                    "access": format!("access-{}", email),
                    "refresh": format!("refresh-{}", email),
                    "user": { "id": account.user.id, "email": email },
                }),
            ),
            None => respond(
                401,
                json!({ "detail": "No active account found with the given credentials" }),
            ),
        }
    }

    fn register(&self, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Json(body) = &request.body else {
            return respond(400, json!({ "detail": "Expected JSON" }));
        };
        let email = body["email"].as_str().unwrap_or_default().to_string();
        let password = body["password"].as_str().unwrap_or_default().to_string();
        if body["password2"].as_str() != Some(password.as_str()) {
            return respond(400, json!({ "password": ["Password fields didn't match."] }));
        }
        let taken = self
            .state
            .borrow()
            .accounts
            .iter()
            .any(|account| account.user.email == email);
        if taken {
            return respond(400, json!({ "email": ["user with this email already exists."] }));
        }
        let mut user = self.add_user(&email, &password, false);
        user.first_name = body["first_name"].as_str().unwrap_or_default().to_string();
        user.last_name = body["last_name"].as_str().unwrap_or_default().to_string();
        if let Some(account) = self
            .state
            .borrow_mut()
            .accounts
            .iter_mut()
            .find(|account| account.user.id == user.id)
        {
            account.user = user.clone();
        }
        respond(
            201,
            json!({
                "id": user.id,
                "email": user.email,
                "first_name": user.first_name,
                "last_name": user.last_name,
            }),
        )
    }

    fn list_products(&self, query: &[(String, String)]) -> HttpResponse {
        let param = |name: &str| {
            query
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };
        let state = self.state.borrow();
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|product| match param("category") {
                Some(category) => product.category.as_ref().is_some_and(|reference| {
                    reference.id().to_string() == category
                        || matches!(reference, CategoryRef::Nested(nested) if nested.matches(&category))
                }),
                None => true,
            })
            .filter(|product| param("is_featured").is_none() || product.is_featured)
            .cloned()
            .collect();
        if let Some(limit) = param("limit").and_then(|limit| limit.parse::<usize>().ok()) {
            products.truncate(limit);
        }
        respond(200, json!({ "count": products.len(), "next": null, "previous": null, "results": products }))
    }

    fn create_product(&self, request: &HttpRequest) -> HttpResponse {
        let RequestBody::Multipart(form) = &request.body else {
            return respond(400, json!({ "detail": "Expected multipart form" }));
        };
        let name = form.get_text("name").unwrap_or_default();
        if name.is_empty() {
            return respond(400, json!({ "name": ["This field may not be blank."] }));
        }
        let Some(price) = form.get_text("price").and_then(|price| price.parse::<Price>().ok()) else {
            return respond(400, json!({ "price": ["A valid number is required."] }));
        };
        let category = form
            .get_text("category_id")
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| {
                self.state
                    .borrow()
                    .categories
                    .iter()
                    .find(|category| category.id == id)
                    .cloned()
            });
        let product = self.add_product(
            name,
            price.cents(),
            category.as_ref(),
            form.get_text("is_featured") == Some("true"),
        );
        respond(201, json!(product))
    }
}

#[async_trait(?Send)]
impl Transport for BakeryBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if self.state.borrow().offline {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(self.route(&request))
    }
}
