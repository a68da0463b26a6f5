//! UI Components
//!
//! Binding layer: each component reads a view model from the store and
//! attaches typed callbacks to the storefront context.

mod add_to_cart_button;
mod cart_panel;
mod category_bar;
mod detail_modal;
mod donation_form;
mod log_panel;
mod notice_toast;
mod product_grid;
mod tree_image;

pub use add_to_cart_button::AddToCartButton;
pub use cart_panel::CartPanel;
pub use category_bar::CategoryBar;
pub use detail_modal::DetailModal;
pub use donation_form::DonationForm;
pub use log_panel::LogPanel;
pub use notice_toast::NoticeToast;
pub use product_grid::ProductGrid;
pub use tree_image::TreeImage;
