//! Selection Controller
//!
//! Synchronous half of the storefront: region state machines, request
//! tickets, and the cart/notice transitions user actions trigger. The
//! async half (issuing fetches) lives in `context.rs` and feeds results
//! back through the `finish_*` methods.

use reactive_stores::Store;

use crate::cart::{Added, AlreadyPresent, Cart, Removed};
use crate::error::CatalogResult;
use crate::models::{Category, Product, ProductId, Selection};

pub const CATEGORIES_FAILED: &str = "Failed to load categories";
pub const ALL_PRODUCTS_FAILED: &str =
    "Failed to load trees. Please check your internet connection and try again.";
pub const CATEGORY_PRODUCTS_FAILED: &str =
    "Failed to load trees for this category. Please try again.";
pub const DETAIL_FAILED: &str = "Failed to load tree details.";
pub const DONATION_THANKS: &str =
    "Thank you for your donation! Together we can make the Earth greener! 🌱";

/// Lifecycle of one independently loaded view region
#[derive(Debug, Clone, PartialEq)]
pub enum RegionState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// User-facing message
    Error(String),
}

/// Identifies one request issued for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Region state plus the ticket of the only request allowed to settle it
#[derive(Debug, Clone, PartialEq)]
pub struct Region<T> {
    state: RegionState<T>,
    current: u64,
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Self { state: RegionState::Idle, current: 0 }
    }
}

impl<T> Region<T> {
    pub fn state(&self) -> &RegionState<T> {
        &self.state
    }

    /// Enter `Loading`; any earlier ticket goes stale
    pub fn begin(&mut self) -> Ticket {
        self.current += 1;
        self.state = RegionState::Loading;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }

    /// Back to `Idle`, discarding whatever is in flight
    pub fn reset(&mut self) {
        self.current += 1;
        self.state = RegionState::Idle;
    }

    /// Apply a result if `ticket` is still current
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(value) => RegionState::Loaded(value),
            Err(message) => RegionState::Error(message),
        };
        true
    }
}

/// Where an add-to-cart click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOrigin {
    Grid,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Transient message shown over the page
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub serial: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Product whose add buttons currently read "✓ Added!"; each flash has its own timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedFlash {
    pub product_id: ProductId,
    pub serial: u64,
}

/// Detail modal: visibility layered over its own region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailModal {
    pub open: bool,
    pub product_id: Option<ProductId>,
    pub region: Region<Product>,
}

/// Whole storefront state, owned by the reactive store
#[derive(Debug, Clone, Default, Store)]
pub struct Storefront {
    pub categories: Region<Vec<Category>>,
    pub products: Region<Vec<Product>>,
    pub detail: DetailModal,
    pub selection: Selection,
    pub cart: Cart,
    pub notice: Option<Notice>,
    pub added: Vec<AddedFlash>,
    pub serial: u64,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_serial(&mut self) -> u64 {
        self.serial += 1;
        self.serial
    }

    // ========================
    // Categories
    // ========================

    pub fn begin_categories(&mut self) -> Ticket {
        self.categories.begin()
    }

    pub fn finish_categories(&mut self, ticket: Ticket, result: CatalogResult<Vec<Category>>) -> bool {
        settle(&mut self.categories, "categories", ticket, result, CATEGORIES_FAILED)
    }

    // ========================
    // Products
    // ========================

    /// Switch the filter; the grid goes back to `Loading`
    pub fn select(&mut self, selection: Selection) -> Ticket {
        self.selection = selection;
        self.products.begin()
    }

    /// Re-issue the request for the current filter
    pub fn retry_products(&mut self) -> (Selection, Ticket) {
        (self.selection, self.products.begin())
    }

    pub fn finish_products(&mut self, ticket: Ticket, result: CatalogResult<Vec<Product>>) -> bool {
        let failure = match self.selection {
            Selection::All => ALL_PRODUCTS_FAILED,
            Selection::Category(_) => CATEGORY_PRODUCTS_FAILED,
        };
        settle(&mut self.products, "products", ticket, result, failure)
    }

    // ========================
    // Detail modal
    // ========================

    pub fn open_detail(&mut self, id: ProductId) -> Ticket {
        self.detail.open = true;
        self.detail.product_id = Some(id);
        self.detail.region.begin()
    }

    /// Only while the modal is open
    pub fn retry_detail(&mut self) -> Option<(ProductId, Ticket)> {
        if !self.detail.open {
            return None;
        }
        let id = self.detail.product_id?;
        Some((id, self.detail.region.begin()))
    }

    /// Hide the modal; a response still in flight will be discarded
    pub fn close_detail(&mut self) {
        self.detail.open = false;
        self.detail.region.reset();
    }

    pub fn finish_detail(&mut self, ticket: Ticket, result: CatalogResult<Product>) -> bool {
        settle(&mut self.detail.region, "tree details", ticket, result, DETAIL_FAILED)
    }

    // ========================
    // Cart
    // ========================

    /// A duplicate leaves the cart alone and raises a warning notice.
    /// Adding from the modal closes it either way.
    pub fn add_to_cart(
        &mut self,
        id: ProductId,
        name: &str,
        price: u64,
        origin: AddOrigin,
    ) -> Result<Added, AlreadyPresent> {
        let result = self.cart.add(id, name, price);
        match &result {
            Ok(_) => {
                log::debug!("Added {} ({}) to cart", name, id);
                let serial = self.next_serial();
                self.added.retain(|flash| flash.product_id != id);
                self.added.push(AddedFlash { product_id: id, serial });
            }
            Err(duplicate) => {
                log::debug!("Rejected duplicate cart item {}", id);
                self.notify(NoticeKind::Warning, duplicate.to_string());
            }
        }
        if origin == AddOrigin::Detail {
            self.close_detail();
        }
        result
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Removed {
        self.cart.remove(id)
    }

    /// Clears one flash; a no-op once a newer add of the same product replaced it
    pub fn clear_added(&mut self, serial: u64) {
        self.added.retain(|flash| flash.serial != serial);
    }

    pub fn is_added(&self, id: ProductId) -> bool {
        self.added.iter().any(|flash| flash.product_id == id)
    }

    pub fn added_serial(&self, id: ProductId) -> Option<u64> {
        self.added.iter().find(|flash| flash.product_id == id).map(|flash| flash.serial)
    }

    // ========================
    // Notices
    // ========================

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let serial = self.next_serial();
        self.notice = Some(Notice { serial, kind, message: message.into() });
        serial
    }

    /// Dismiss only if the notice shown is still the one with `serial`
    pub fn dismiss_notice(&mut self, serial: u64) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.serial == serial) {
            self.notice = None;
            return true;
        }
        false
    }

    /// Donation form submit: local acknowledgment only
    pub fn acknowledge_donation(&mut self) -> u64 {
        self.notify(NoticeKind::Info, DONATION_THANKS)
    }

    /// Serial of the notice currently shown, if any
    pub fn notice_serial(&self) -> Option<u64> {
        self.notice.as_ref().map(|n| n.serial)
    }
}

fn settle<T>(
    region: &mut Region<T>,
    what: &str,
    ticket: Ticket,
    result: CatalogResult<T>,
    failure: &str,
) -> bool {
    if !region.is_current(ticket) {
        log::debug!("Discarding stale {} response", what);
        return false;
    }
    let result = result.map_err(|e| {
        log::warn!("Error loading {}: {}", what, e);
        failure.to_string()
    });
    region.settle(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::FakeTransport;
    use crate::catalog::{Catalog, Endpoint};
    use crate::error::CatalogError;

    fn product(id: ProductId, name: &str, price: u64) -> Product {
        crate::models::Product::from(crate::models::ProductRecord {
            id,
            name: name.to_string(),
            price: Some(price.into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_region_transitions() {
        let mut region = Region::<u32>::default();
        assert_eq!(region.state(), &RegionState::Idle);

        let ticket = region.begin();
        assert_eq!(region.state(), &RegionState::Loading);
        assert!(region.settle(ticket, Ok(7)));
        assert_eq!(region.state(), &RegionState::Loaded(7));

        let retry = region.begin();
        assert!(region.settle(retry, Err("boom".to_string())));
        assert_eq!(region.state(), &RegionState::Error("boom".to_string()));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut region = Region::<u32>::default();
        let old = region.begin();
        let new = region.begin();
        assert!(!region.settle(old, Ok(1)));
        assert_eq!(region.state(), &RegionState::Loading);
        assert!(region.settle(new, Ok(2)));
        assert!(!region.settle(old, Ok(1)));
        assert_eq!(region.state(), &RegionState::Loaded(2));
    }

    #[test]
    fn test_categories_failure_message() {
        let mut store = Storefront::new();
        let ticket = store.begin_categories();
        store.finish_categories(ticket, Err(CatalogError::Network("offline".to_string())));
        assert_eq!(store.categories.state(), &RegionState::Error(CATEGORIES_FAILED.to_string()));

        // Retry re-enters Loading
        store.begin_categories();
        assert_eq!(store.categories.state(), &RegionState::Loading);
    }

    #[test]
    fn test_slow_response_for_previous_category_is_dropped() {
        let mut store = Storefront::new();
        let for_a = store.select(Selection::Category(1));
        let for_b = store.select(Selection::Category(2));

        assert!(store.finish_products(for_b, Ok(vec![product(20, "Neem", 200)])));
        assert!(!store.finish_products(for_a, Ok(vec![product(10, "Mango", 300)])));

        match store.products.state() {
            RegionState::Loaded(products) => assert_eq!(products[0].name, "Neem"),
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(store.selection, Selection::Category(2));
    }

    #[test]
    fn test_products_failure_message_depends_on_selection() {
        let mut store = Storefront::new();
        let ticket = store.select(Selection::All);
        store.finish_products(ticket, Err(CatalogError::Network("HTTP error! status: 500".to_string())));
        assert_eq!(store.products.state(), &RegionState::Error(ALL_PRODUCTS_FAILED.to_string()));

        let ticket = store.select(Selection::Category(3));
        store.finish_products(ticket, Err(CatalogError::Network("offline".to_string())));
        assert_eq!(
            store.products.state(),
            &RegionState::Error(CATEGORY_PRODUCTS_FAILED.to_string())
        );
    }

    #[test]
    fn test_retry_products_keeps_selection() {
        let mut store = Storefront::new();
        store.select(Selection::Category(5));
        let (selection, ticket) = store.retry_products();
        assert_eq!(selection, Selection::Category(5));
        assert!(store.products.is_current(ticket));
    }

    #[test]
    fn test_selection_leaves_other_regions_alone() {
        let mut store = Storefront::new();
        let ticket = store.begin_categories();
        store.finish_categories(ticket, Ok(vec![Category { id: 1, name: "Fruit".to_string() }]));
        store.cart.add(1, "a", 100).unwrap();

        store.select(Selection::Category(1));
        assert!(matches!(store.categories.state(), RegionState::Loaded(_)));
        assert_eq!(store.cart.len(), 1);
    }

    #[test]
    fn test_closing_modal_discards_late_detail() {
        let mut store = Storefront::new();
        let ticket = store.open_detail(10);
        assert!(store.detail.open);
        assert_eq!(store.detail.region.state(), &RegionState::Loading);

        store.close_detail();
        assert!(!store.finish_detail(ticket, Ok(product(10, "Mango", 300))));
        assert!(!store.detail.open);
        assert_eq!(store.detail.region.state(), &RegionState::Idle);
    }

    #[test]
    fn test_detail_reopen_supersedes_previous() {
        let mut store = Storefront::new();
        let first = store.open_detail(10);
        let second = store.open_detail(11);
        assert!(!store.finish_detail(first, Ok(product(10, "Mango", 300))));
        assert!(store.finish_detail(second, Ok(product(11, "Neem", 200))));
        assert_eq!(store.detail.product_id, Some(11));
    }

    #[test]
    fn test_detail_failure_and_retry() {
        let mut store = Storefront::new();
        let ticket = store.open_detail(10);
        store.finish_detail(ticket, Err(CatalogError::NotFound("no data".to_string())));
        assert_eq!(store.detail.region.state(), &RegionState::Error(DETAIL_FAILED.to_string()));

        let (id, _) = store.retry_detail().unwrap();
        assert_eq!(id, 10);
        assert_eq!(store.detail.region.state(), &RegionState::Loading);

        store.close_detail();
        assert!(store.retry_detail().is_none());
    }

    #[test]
    fn test_add_from_detail_closes_modal() {
        let mut store = Storefront::new();
        store.open_detail(10);
        store.add_to_cart(10, "Mango", 300, AddOrigin::Detail).unwrap();
        assert!(!store.detail.open);
        assert_eq!(store.cart.len(), 1);
    }

    #[test]
    fn test_duplicate_add_raises_notice() {
        let mut store = Storefront::new();
        store.add_to_cart(10, "Mango", 300, AddOrigin::Grid).unwrap();
        assert!(store.is_added(10));
        assert!(store.notice.is_none());

        let err = store.add_to_cart(10, "Mango", 300, AddOrigin::Grid).unwrap_err();
        assert_eq!(err.name, "Mango");
        let notice = store.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, "Mango is already in your cart!");
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart.total(), 300);
    }

    #[test]
    fn test_old_timers_do_not_clear_newer_state() {
        let mut store = Storefront::new();
        let first = store.notify(NoticeKind::Info, "one");
        let second = store.notify(NoticeKind::Info, "two");
        assert!(!store.dismiss_notice(first));
        assert_eq!(store.notice_serial(), Some(second));
        assert!(store.dismiss_notice(second));
        assert!(store.notice.is_none());

        store.add_to_cart(1, "a", 100, AddOrigin::Grid).unwrap();
        let stale = store.added_serial(1).unwrap();
        store.remove_from_cart(1);
        store.add_to_cart(1, "a", 100, AddOrigin::Grid).unwrap();
        store.clear_added(stale);
        assert!(store.is_added(1));
        assert_eq!(store.added.len(), 1);
    }

    #[test]
    fn test_added_flashes_are_per_product() {
        let mut store = Storefront::new();
        store.add_to_cart(1, "a", 100, AddOrigin::Grid).unwrap();
        store.add_to_cart(2, "b", 200, AddOrigin::Grid).unwrap();
        assert!(store.is_added(1));
        assert!(store.is_added(2));

        let first = store.added_serial(1).unwrap();
        store.clear_added(first);
        assert!(!store.is_added(1));
        assert!(store.is_added(2));

        let second = store.added_serial(2).unwrap();
        store.clear_added(second);
        assert!(store.added.is_empty());
    }

    #[test]
    fn test_remove_absent_leaves_cart() {
        let mut store = Storefront::new();
        store.add_to_cart(1, "a", 100, AddOrigin::Grid).unwrap();
        let before = store.cart.clone();
        assert_eq!(store.remove_from_cart(99), Removed::Absent);
        assert_eq!(store.cart, before);
    }

    #[test]
    fn test_donation_acknowledged() {
        let mut store = Storefront::new();
        store.acknowledge_donation();
        let notice = store.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.message, DONATION_THANKS);
    }

    #[tokio::test]
    async fn test_server_error_leaves_cart_untouched() {
        let catalog = Catalog::new(FakeTransport::default().failing(Endpoint::AllProducts, 500));
        let mut store = Storefront::new();
        store.add_to_cart(1, "Neem", 200, AddOrigin::Grid).unwrap();

        let ticket = store.select(Selection::All);
        let result = catalog.fetch_products(Selection::All).await;
        store.finish_products(ticket, result);

        assert_eq!(store.products.state(), &RegionState::Error(ALL_PRODUCTS_FAILED.to_string()));
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart.total(), 200);
    }
}
