// src/catalog/static_data.rs
//! Catalog bundled with the app, shown whenever the backend is unreachable or empty.
use chrono::{DateTime, Utc};

use crate::models::{Author, BlogPost, Category, CategoryRef, Price, Product};

struct StaticProduct {
    title: &'static str,
    description: &'static str,
    cents: i64,
    image: &'static str,
}

struct StaticCategory {
    id: i64,
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
    products: &'static [StaticProduct],
}

struct StaticPost {
    id: i64,
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image: &'static str,
    author: &'static str,
    published_at: &'static str,
}

const UNSPLASH: &str = "https://images.unsplash.com/";

static CATEGORIES: &[StaticCategory] = &[
    StaticCategory {
        id: 1,
        slug: "cupcakes",
        title: "Cupcakes",
        description: "Delicious handcrafted cupcakes for every occasion",
        color: "from-cupcake-pink to-cupcake-darkPink",
        products: &[
            StaticProduct {
                title: "Vanilla Delight",
                description: "Classic vanilla cupcake with buttercream frosting and rainbow sprinkles",
                cents: 350,
                image: "photo-1576618148400-f54bed99fcfd",
            },
            StaticProduct {
                title: "Chocolate Dream",
                description: "Rich chocolate cupcake with chocolate ganache and chocolate shavings",
                cents: 375,
                image: "photo-1599785209707-a456fc1337bb",
            },
            StaticProduct {
                title: "Strawberry Bliss",
                description: "Fresh strawberry cupcake with strawberry frosting and white chocolate drizzle",
                cents: 395,
                image: "photo-1563729784474-d77dbb933a9e",
            },
            StaticProduct {
                title: "Red Velvet",
                description: "Classic red velvet cupcake with cream cheese frosting and red velvet crumbs",
                cents: 425,
                image: "photo-1614707267537-b85aaf00c4b7",
            },
            StaticProduct {
                title: "Lemon Burst",
                description: "Tangy lemon cupcake with lemon curd filling and light lemon frosting",
                cents: 385,
                image: "photo-1519869325930-281384150729",
            },
            StaticProduct {
                title: "Birthday Surprise",
                description: "Funfetti cupcake with vanilla frosting and colorful sprinkles",
                cents: 400,
                image: "photo-1486427944299-d1955d23e34d",
            },
        ],
    },
    StaticCategory {
        id: 2,
        slug: "cakes",
        title: "Cakes",
        description: "Beautiful custom cakes for special celebrations",
        color: "from-cupcake-blue to-cupcake-darkBlue",
        products: &[
            StaticProduct {
                title: "Chocolate Ganache Cake",
                description: "Three-layer chocolate cake with rich ganache and fresh berries",
                cents: 4500,
                image: "photo-1578985545062-69928b1d9587",
            },
            StaticProduct {
                title: "Vanilla Bean Celebration",
                description: "Elegant vanilla cake with buttercream frosting and edible flowers",
                cents: 4200,
                image: "photo-1535141192574-5d4897c12636",
            },
            StaticProduct {
                title: "Red Velvet Dream",
                description: "Classic red velvet cake with cream cheese frosting and chocolate drizzle",
                cents: 4800,
                image: "photo-1616541823729-00fe0aaed36c",
            },
            StaticProduct {
                title: "Strawberry Shortcake",
                description: "Light vanilla sponge with fresh strawberries and whipped cream",
                cents: 4000,
                image: "photo-1464349095431-e9a21285b5c3",
            },
            StaticProduct {
                title: "Carrot Cake",
                description: "Moist carrot cake with walnuts and traditional cream cheese frosting",
                cents: 3800,
                image: "photo-1621303837158-877731acafc6",
            },
            StaticProduct {
                title: "Lemon Blueberry",
                description: "Zesty lemon cake with blueberry compote and lemon buttercream",
                cents: 4400,
                image: "photo-1533134242443-d4fd215305ad",
            },
        ],
    },
    StaticCategory {
        id: 3,
        slug: "cakesicles",
        title: "Cakesicles",
        description: "Delicious cake pops on a stick! Perfect for $2.50 each or $2.00 each for orders of 20+",
        color: "from-purple-300 to-purple-700",
        products: &[
            StaticProduct {
                title: "Birthday Cakesicle",
                description: "Vanilla cake with colorful sprinkles and white chocolate coating",
                cents: 250,
                image: "photo-1596223430183-9e318f2d05e3",
            },
            StaticProduct {
                title: "Chocolate Drizzle",
                description: "Chocolate cake with milk chocolate coating and white chocolate drizzle",
                cents: 250,
                image: "photo-1618426703623-c1b335803e07",
            },
            StaticProduct {
                title: "Red Velvet",
                description: "Red velvet cake with white chocolate coating and red velvet crumbs",
                cents: 250,
                image: "photo-1627308595171-d1b5d67129c5",
            },
            StaticProduct {
                title: "Cookies & Cream",
                description: "Oreo cake with white chocolate coating and cookie crumbs",
                cents: 250,
                image: "photo-1629385701021-fcd568a743e8",
            },
            StaticProduct {
                title: "Strawberry Shortcake",
                description: "Strawberry cake with pink chocolate coating and white chocolate drizzle",
                cents: 250,
                image: "photo-1551404973-7cea035e427e",
            },
            StaticProduct {
                title: "Rainbow Sprinkle",
                description: "Vanilla cake with white chocolate coating and rainbow sprinkles",
                cents: 250,
                image: "photo-1583255448430-17c5eda08e5c",
            },
        ],
    },
    StaticCategory {
        id: 4,
        slug: "sweet-treats",
        title: "Sweet Treats",
        description: "An assortment of cookies, brownies, and other sweet delights",
        color: "from-amber-300 to-amber-700",
        products: &[
            StaticProduct {
                title: "Chocolate Chip Cookies",
                description: "Classic chocolate chip cookies with walnuts",
                cents: 225,
                image: "photo-1499636136210-6f4ee915583e",
            },
            StaticProduct {
                title: "Fudge Brownies",
                description: "Rich chocolate brownies with chocolate chips",
                cents: 300,
                image: "photo-1611339555312-e607c8352fd7",
            },
            StaticProduct {
                title: "Macarons",
                description: "Assorted flavors of French macarons",
                cents: 250,
                image: "photo-1569864358642-9d1684040f43",
            },
            StaticProduct {
                title: "Lemon Bars",
                description: "Tangy lemon filling on a buttery shortbread crust",
                cents: 275,
                image: "photo-1528975604071-b4dc52a2d18c",
            },
            StaticProduct {
                title: "Chocolate Truffles",
                description: "Handmade chocolate truffles in assorted flavors",
                cents: 150,
                image: "photo-1548329408-c49d8c0b3e98",
            },
            StaticProduct {
                title: "Cinnamon Rolls",
                description: "Freshly baked cinnamon rolls with cream cheese frosting",
                cents: 375,
                image: "photo-1609150143086-7a777e2be0fc",
            },
        ],
    },
];

// Home page "Top Trending Treats"
static FEATURED: &[StaticProduct] = &[
    StaticProduct {
        title: "Red Velvet Cupcake",
        description: "Rich and velvety with cream cheese frosting",
        cents: 399,
        image: "photo-1587668178277-295251f900ce",
    },
    StaticProduct {
        title: "Chocolate Delight",
        description: "Decadent chocolate cake with chocolate ganache",
        cents: 499,
        image: "photo-1607478900766-efe13248b125",
    },
    StaticProduct {
        title: "Birthday Special",
        description: "Vanilla cake with colorful sprinkles and buttercream",
        cents: 599,
        image: "photo-1599785209707-a456fc1337bb",
    },
    StaticProduct {
        title: "Strawberry Bliss",
        description: "Fresh strawberry cupcake with strawberry frosting",
        cents: 399,
        image: "photo-1603532648955-039310d9ed75",
    },
    StaticProduct {
        title: "Lemon Delight",
        description: "Tangy lemon cake with lemon zest frosting",
        cents: 449,
        image: "photo-1614707267537-b85aaf00c4b7",
    },
    StaticProduct {
        title: "Signature Swirl",
        description: "Our signature cupcake with special frosting",
        cents: 549,
        image: "photo-1464349095431-e9a21285b5c3",
    },
];

static POSTS: &[StaticPost] = &[
    StaticPost {
        id: 1,
        slug: "secret-to-perfect-cupcake-frosting",
        title: "The Secret to Perfect Cupcake Frosting",
        excerpt: "Learn the techniques professional bakers use to create beautiful cupcake frosting every time.",
        content: "Frosting is an art form that takes practice to master. The key to perfect frosting lies in the temperature of your butter and the consistency of your mixture. Start with butter that is at room temperature, but not too soft. Beat it for several minutes until it becomes light and fluffy before adding your powdered sugar gradually. For the creamiest frosting, add a splash of heavy cream and vanilla extract. The final step is to use the right piping tips and techniques to create beautiful decorative patterns.",
        image: "photo-1557925923-cd4648e211a0",
        author: "LaKeisha Johnson",
        published_at: "2023-06-15T00:00:00Z",
    },
    StaticPost {
        id: 2,
        slug: "birthday-cake-ideas-for-kids",
        title: "5 Birthday Cake Ideas for Kids",
        excerpt: "Make your child's birthday special with these creative and fun cake designs they'll love.",
        content: "Planning a birthday party for your child? The cake is often the centerpiece of the celebration. Here are five creative cake ideas that will delight children of all ages: 1) Character cakes shaped like their favorite cartoon character, 2) Rainbow layer cakes with vibrant colors inside and out, 3) Interactive cakes with candy surprises inside, 4) Sports-themed cakes customized to their favorite activity, and 5) Miniature cupcake towers that offer variety and eye-catching presentation. With these ideas, your child's birthday cake will be memorable and perfect for Instagram-worthy photos!",
        image: "photo-1621303837174-89787a7d4729",
        author: "Marcus Wilson",
        published_at: "2023-05-22T00:00:00Z",
    },
    StaticPost {
        id: 3,
        slug: "behind-the-scenes-at-the-bakery",
        title: "Behind the Scenes: A Day at LaKeisha's Bakery",
        excerpt: "Take a peek behind the curtain and see how our delicious treats are made with love.",
        content: "Ever wondered what goes on behind the scenes at a busy bakery? At LaKeisha's Cupcakery, our day starts at 4:30 AM when our bakers arrive to begin the morning's first batch of fresh pastries. The kitchen comes alive with the smell of vanilla, chocolate, and cinnamon as mixers whirl and ovens heat up. Each cupcake is handcrafted with precision and care, from mixing the batter to the final decorative touch. Our team works together like a well-oiled machine, with specialized roles for baking, frosting, decorating, and packaging. By the time our doors open, we've already created hundreds of delicious treats ready for our customers to enjoy.",
        image: "photo-1586985290301-8db40143d525",
        author: "LaKeisha Johnson",
        published_at: "2023-04-10T00:00:00Z",
    },
    StaticPost {
        id: 4,
        slug: "vegan-baking-substitutes",
        title: "Vegan Baking: Substitutes That Actually Work",
        excerpt: "Discover the best plant-based alternatives for eggs, butter, and milk in your baking recipes.",
        content: "Vegan baking doesn't mean you have to sacrifice flavor or texture. With the right substitutes, you can create delicious treats that everyone will enjoy. For eggs, try applesauce, mashed bananas, or commercial egg replacers. Instead of butter, opt for coconut oil, vegan butter alternatives, or even avocado in chocolate desserts. Plant milks like oat, almond, or soy work wonderfully in most recipes, but coconut milk is best for rich, creamy results. The key is understanding the role each ingredient plays in your recipe and finding the appropriate substitute that serves the same purpose.",
        image: "photo-1612198790767-3fb5b455b3e6",
        author: "Sophia Greene",
        published_at: "2023-03-18T00:00:00Z",
    },
    StaticPost {
        id: 5,
        slug: "summer-berry-desserts",
        title: "Seasonal Flavors: Summer Berry Desserts",
        excerpt: "Make the most of fresh summer berries with these delightful dessert recipes.",
        content: "Summer brings an abundance of fresh, juicy berries that are perfect for incorporating into your baking. From strawberry shortcakes to blueberry pies and raspberry tarts, the possibilities are endless. One of our favorite recipes is a mixed berry galette, a rustic free-form tart that's easier than pie but just as delicious. Simply toss your favorite berries with sugar, lemon juice, and cornstarch, then fold them into a simple pastry dough. Bake until golden and serve with a scoop of vanilla ice cream for the perfect summer dessert that lets the natural flavors of seasonal berries shine.",
        image: "photo-1563729784474-d77dbb933a9e",
        author: "James Peterson",
        published_at: "2023-07-05T00:00:00Z",
    },
    StaticPost {
        id: 6,
        slug: "start-a-home-baking-business",
        title: "How to Start a Home Baking Business",
        excerpt: "Tips and advice for turning your passion for baking into a successful small business.",
        content: "Starting a home baking business can be a rewarding way to turn your passion into profit. Begin by researching your local cottage food laws and obtaining any necessary permits or licenses. Develop a business plan that outlines your unique selling proposition, target market, and pricing strategy. Invest in quality equipment and ingredients; while it may cost more upfront, the results will speak for themselves. Build your brand through social media marketing, high-quality photography, and word-of-mouth referrals. Start small with a focused menu of your best items, and expand as you gain experience and regular customers. With dedication and the right approach, your home kitchen can become the foundation of a thriving business.",
        image: "photo-1556910096-5cdae96a4c77",
        author: "Amanda Richards",
        published_at: "2023-02-28T00:00:00Z",
    },
];

fn image_url(photo: &str) -> String {
    format!("{}{}", UNSPLASH, photo)
}

fn to_product(id: i64, category: Option<&Category>, item: &StaticProduct) -> Product {
    let image = image_url(item.image);
    Product {
        id,
        slug: None,
        name: item.title.to_string(),
        description: item.description.to_string(),
        price: Price::from_cents(item.cents),
        image: Some(image.clone()),
        image_url: Some(image),
        category: category.map(|category| CategoryRef::Nested(category.clone())),
        is_featured: category.is_none(),
        is_available: true,
        created_at: None,
        updated_at: None,
    }
}

fn to_category(entry: &StaticCategory) -> Category {
    Category {
        id: entry.id,
        name: entry.title.to_string(),
        slug: Some(entry.slug.to_string()),
        description: entry.description.to_string(),
        image: None,
        is_active: true,
        color: Some(entry.color.to_string()),
    }
}

fn find(slug: &str) -> Option<&'static StaticCategory> {
    CATEGORIES.iter().find(|entry| entry.slug == slug)
}

/// Slugs with bundled data, in menu order.
pub fn category_slugs() -> Vec<&'static str> {
    CATEGORIES.iter().map(|entry| entry.slug).collect()
}

pub fn is_static_category(slug: &str) -> bool {
    find(slug).is_some()
}

pub fn categories() -> Vec<Category> {
    CATEGORIES.iter().map(to_category).collect()
}

pub fn category(slug: &str) -> Option<Category> {
    find(slug).map(to_category)
}

/// Ids are offset per category so fallback lists never collide in keyed views.
pub fn category_products(slug: &str) -> Vec<Product> {
    let Some(entry) = find(slug) else {
        return Vec::new();
    };
    let category = to_category(entry);
    entry
        .products
        .iter()
        .enumerate()
        .map(|(index, item)| to_product(entry.id * 100 + index as i64 + 1, Some(&category), item))
        .collect()
}

pub fn featured_products() -> Vec<Product> {
    FEATURED
        .iter()
        .enumerate()
        .map(|(index, item)| to_product(index as i64 + 1, None, item))
        .collect()
}

pub fn blog_posts() -> Vec<BlogPost> {
    POSTS
        .iter()
        .map(|post| {
            let published_at = DateTime::parse_from_rfc3339(post.published_at)
                .ok()
                .map(|at| at.with_timezone(&Utc));
            BlogPost {
                id: post.id,
                slug: Some(post.slug.to_string()),
                title: post.title.to_string(),
                excerpt: post.excerpt.to_string(),
                content: post.content.to_string(),
                image: None,
                featured_image: None,
                image_url: Some(image_url(post.image)),
                author: Some(Author::Name(post.author.to_string())),
                published_at,
                created_at: published_at,
                updated_at: published_at,
                read_time: None,
                category: None,
            }
        })
        .collect()
}

/// Finds a bundled post by slug or numeric id.
pub fn blog_post(key: &str) -> Option<BlogPost> {
    blog_posts()
        .into_iter()
        .find(|post| post.is_addressed_by(key))
}
