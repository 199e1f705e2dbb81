//! UI Components
//!
//! Leptos components for the login and POS screens.

mod cart_panel;
mod checkout_dialog;
mod login_view;
mod product_grid;
mod receipt_dialog;
mod settings_dialog;
mod stock_editor;
mod title_bar;
mod toast;

pub use cart_panel::CartPanel;
pub use checkout_dialog::CheckoutDialog;
pub use login_view::LoginView;
pub use product_grid::ProductGrid;
pub use receipt_dialog::ReceiptDialog;
pub use settings_dialog::SettingsDialog;
pub use stock_editor::StockEditor;
pub use title_bar::TitleBar;
pub use toast::ToastHost;
