//! View Models
//!
//! Pure mapping from storefront state to what each panel displays.
//! Components in `components/` bind these to markup and callbacks.

use rolling_logger::LogEntry;

use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::controller::{DetailModal, RegionState};
use crate::models::{Category, Product, ProductId, Selection};

pub const ALL_TREES_LABEL: &str = "All Trees";
pub const NO_TREES: &str = "No trees found in this category";
pub const EMPTY_CART: &str = "Your cart is empty";
pub const ADD_TO_CART: &str = "Add to Cart";
pub const ADDED: &str = "✓ Added!";
pub const ELLIPSIS: &str = "...";

/// Display settings taken from the config
#[derive(Debug, Clone, PartialEq)]
pub struct Formatting {
    pub currency_symbol: String,
    pub description_limit: usize,
}

impl Default for Formatting {
    fn default() -> Self {
        Self::from(&StorefrontConfig::default())
    }
}

impl From<&StorefrontConfig> for Formatting {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            description_limit: config.description_limit,
        }
    }
}

impl Formatting {
    pub fn price(&self, amount: u64) -> String {
        format!("{}{}", self.currency_symbol, format_amount(amount))
    }
}

/// `1500` -> `1,500`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cut to `limit` characters and append `...` when longer
pub fn truncate_description(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Recent log records for the debug panel, newest first
pub fn log_lines(entries: &[LogEntry]) -> Vec<String> {
    entries.iter().rev().map(LogEntry::format_line).collect()
}

pub fn add_button_label(just_added: bool) -> &'static str {
    if just_added {
        ADDED
    } else {
        ADD_TO_CART
    }
}

// ========================
// Categories
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryButton {
    pub selection: Selection,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesView {
    Loading,
    Buttons(Vec<CategoryButton>),
    Failed { message: String },
}

/// "All Trees" first, then one button per category
pub fn categories_view(region: &RegionState<Vec<Category>>, selection: Selection) -> CategoriesView {
    match region {
        RegionState::Idle | RegionState::Loading => CategoriesView::Loading,
        RegionState::Error(message) => CategoriesView::Failed { message: message.clone() },
        RegionState::Loaded(categories) => {
            let all = CategoryButton {
                selection: Selection::All,
                label: ALL_TREES_LABEL.to_string(),
                active: selection == Selection::All,
            };
            let buttons = std::iter::once(all)
                .chain(categories.iter().map(|category| CategoryButton {
                    selection: Selection::Category(category.id),
                    label: category.name.clone(),
                    active: selection == Selection::Category(category.id),
                }))
                .collect();
            CategoriesView::Buttons(buttons)
        }
    }
}

// ========================
// Grid
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub image: String,
    /// Truncated description
    pub summary: String,
    pub price: u64,
    pub price_label: String,
}

impl ProductCard {
    pub fn new(product: &Product, fmt: &Formatting) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            summary: truncate_description(&product.description, fmt.description_limit),
            price: product.price,
            price_label: fmt.price(product.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Idle,
    Loading,
    Cards(Vec<ProductCard>),
    Empty { message: &'static str },
    Failed { message: String },
}

pub fn grid_view(region: &RegionState<Vec<Product>>, fmt: &Formatting) -> GridView {
    match region {
        RegionState::Idle => GridView::Idle,
        RegionState::Loading => GridView::Loading,
        RegionState::Error(message) => GridView::Failed { message: message.clone() },
        RegionState::Loaded(products) if products.is_empty() => GridView::Empty { message: NO_TREES },
        RegionState::Loaded(products) => {
            GridView::Cards(products.iter().map(|p| ProductCard::new(p, fmt)).collect())
        }
    }
}

// ========================
// Detail modal
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub benefits: String,
    pub conditions: String,
    pub price: u64,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Hidden,
    Loading,
    Ready(ProductDetail),
    Failed { message: String },
}

pub fn detail_view(modal: &DetailModal, fmt: &Formatting) -> DetailView {
    if !modal.open {
        return DetailView::Hidden;
    }
    match modal.region.state() {
        RegionState::Idle | RegionState::Loading => DetailView::Loading,
        RegionState::Error(message) => DetailView::Failed { message: message.clone() },
        RegionState::Loaded(product) => DetailView::Ready(ProductDetail {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            benefits: product.benefits.clone(),
            conditions: product.conditions.clone(),
            price: product.price,
            price_label: fmt.price(product.price),
        }),
    }
}

// ========================
// Cart panel
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartPanelView {
    pub lines: Vec<CartLineView>,
    pub total_label: String,
    /// Set when there are no lines
    pub empty_message: Option<&'static str>,
}

pub fn cart_panel(cart: &Cart, fmt: &Formatting) -> CartPanelView {
    CartPanelView {
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                id: line.id,
                name: line.name.clone(),
                price_label: fmt.price(line.price),
            })
            .collect(),
        total_label: fmt.price(cart.total()),
        empty_message: cart.is_empty().then_some(EMPTY_CART),
    }
}
