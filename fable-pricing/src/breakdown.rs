use serde::{Deserialize, Serialize};

use crate::calculator::{
    calculate_customer_price, calculate_library_product_price, calculate_platform_margin,
    calculate_product_cost, calculate_product_margin,
};
use crate::settings::{LibraryPricingSettings, PricingConfig};

/// Net and customer price side by side, as shown on instructor pricing panels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub net_price: f64,
    pub customer_price: f64,
    pub platform_margin: f64,
}

impl PriceBreakdown {
    /// Breakdown for a coaching session or package
    pub fn for_service(net_price: Option<f64>, config: Option<&PricingConfig>) -> Self {
        Self::from_prices(net_price, calculate_customer_price(net_price, config))
    }

    /// Breakdown for a library product
    pub fn for_library(net_price: Option<f64>, settings: Option<&LibraryPricingSettings>) -> Self {
        Self::from_prices(net_price, calculate_library_product_price(net_price, settings))
    }

    fn from_prices(net_price: Option<f64>, customer_price: f64) -> Self {
        let net_price = net_price.filter(|n| !n.is_nan()).unwrap_or(0.0);
        Self {
            net_price,
            customer_price,
            platform_margin: calculate_platform_margin(customer_price, net_price),
        }
    }
}

/// Margin and cost figures for a library product at a given total price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductEconomics {
    pub total_price: f64,
    pub publisher_net: Option<f64>,
    pub margin: f64,
    pub cost: f64,
}

impl ProductEconomics {
    pub fn new(total_price: f64, publisher_net: Option<f64>) -> Self {
        Self {
            total_price,
            publisher_net,
            margin: calculate_product_margin(total_price, publisher_net),
            cost: calculate_product_cost(total_price),
        }
    }
}
