pub mod breakdown;
pub mod calculator;
pub mod settings;

pub use breakdown::{PriceBreakdown, ProductEconomics};
pub use calculator::{
    calculate_customer_price,
    calculate_instructor_net,
    calculate_platform_margin,
    calculate_library_product_price,
    calculate_publisher_net,
    calculate_product_margin,
    calculate_product_cost,
};
pub use settings::{FeeSchedule, LibraryPricingSettings, PricingConfig};
