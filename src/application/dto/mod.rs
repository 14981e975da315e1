pub mod actions;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod pagination;
pub mod products;

pub use actions::{ActionChangeDto, ActionDetailDto, ActionLogDto};
pub use auth::AdminPrincipal;
pub use cart::{CartValidationDto, ValidatedCartLineDto};
pub use orders::{OrderDashboardDto, OrderDetailDto, OrderDto, OrderItemDto, OrderStatsDto, OrderStatusStatDto};
pub use pagination::{CursorPage, Page};
pub use products::{
    LowStockDto, PriceChangeDto, PriceChangeResultDto, ProductDetailDto, ProductDto,
    ProductImageDto, RestockChangeDto, RestockResultDto,
};
