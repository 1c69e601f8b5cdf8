//! Records served by the admin API.

mod attribute;
mod category;
mod dashboard;
mod invitation;
mod money;
mod order;
mod product;
mod promo_code;
mod review;
mod user_content;

pub use attribute::Attribute;
pub use category::Category;
pub use dashboard::DashboardSummary;
pub use invitation::InvitationTemplate;
pub use money::format_rupiah;
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{CategoryRef, Product, ProductType, ProductVariant};
pub use promo_code::{DiscountType, PromoCode};
pub use review::Review;
pub use user_content::{ContentKind, ModerationStatus, UserContent};
