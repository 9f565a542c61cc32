//! Conversion between what a provider is paid and what a customer is charged.
//!
//! Every function here degrades instead of failing: a missing price, a NaN or a
//! config that has not loaded yet produces `0` or the untouched input, so a live
//! price preview can always render something.

use crate::settings::{FeeSchedule, LibraryPricingSettings, PricingConfig};

/// Share of a product's total kept as margin when no publisher net is known
const LEGACY_PRODUCT_MARGIN_RATE: f64 = 0.20;

/// Share of a product's total treated as cost of goods
const LEGACY_PRODUCT_COST_RATE: f64 = 0.80;

/// Zero, NaN and missing amounts all mean "nothing entered yet".
fn entered_amount(amount: Option<f64>) -> Option<f64> {
    amount.filter(|value| *value != 0.0 && !value.is_nan())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::trace!(value, "non-finite price result, reporting 0");
        0.0
    }
}

fn marked_up_price<C: FeeSchedule>(net_price: Option<f64>, config: Option<&C>) -> f64 {
    let Some(net) = entered_amount(net_price) else {
        return 0.0;
    };

    let Some(config) = config else {
        tracing::trace!(net, "no fee schedule loaded, passing net price through");
        return net;
    };

    finite_or_zero((net * config.company_percentage() + config.fixed_fee()).ceil())
}

fn provider_net<C: FeeSchedule>(price: Option<f64>, config: Option<&C>) -> f64 {
    let Some(price) = entered_amount(price) else {
        return 0.0;
    };

    let Some(config) = config else {
        tracing::trace!(price, "no fee schedule loaded, provider net is 0");
        return 0.0;
    };

    let net = (price - config.fixed_fee()) / config.company_percentage();
    finite_or_zero(net.floor()).max(0.0)
}

/// Price shown to the customer for a session or package paying `net_price` to the instructor.
///
/// Returns `0` for a missing, NaN or zero net price and the net price itself when no
/// config is loaded; otherwise `ceil(net * company_percentage + fixed_fee)`.
pub fn calculate_customer_price(net_price: Option<f64>, config: Option<&PricingConfig>) -> f64 {
    marked_up_price(net_price, config)
}

/// Instructor payout recovered from a customer price.
///
/// Rounds down while [`calculate_customer_price`] rounds up, so a round trip can drift
/// by one unit. Clamped at zero.
pub fn calculate_instructor_net(
    customer_price: Option<f64>,
    config: Option<&PricingConfig>,
) -> f64 {
    provider_net(customer_price, config)
}

/// What the platform keeps out of a sale. Never negative.
pub fn calculate_platform_margin(customer_price: f64, instructor_net: f64) -> f64 {
    (customer_price - instructor_net).max(0.0)
}

/// Library counterpart of [`calculate_customer_price`].
pub fn calculate_library_product_price(
    net_price: Option<f64>,
    settings: Option<&LibraryPricingSettings>,
) -> f64 {
    marked_up_price(net_price, settings)
}

/// Library counterpart of [`calculate_instructor_net`].
pub fn calculate_publisher_net(
    total_price: Option<f64>,
    settings: Option<&LibraryPricingSettings>,
) -> f64 {
    provider_net(total_price, settings)
}

/// Margin on a library product.
///
/// A publisher net of `0` cannot be told apart from one that was never set, and both
/// fall back to a flat 20% of the total.
pub fn calculate_product_margin(total_price: f64, publisher_net: Option<f64>) -> f64 {
    match publisher_net.unwrap_or(0.0) {
        net if net == 0.0 => (total_price * LEGACY_PRODUCT_MARGIN_RATE).floor(),
        net => (total_price - net).max(0.0),
    }
}

/// Cost of a library product, fixed at 80% of its total.
pub fn calculate_product_cost(total_price: f64) -> f64 {
    (total_price * LEGACY_PRODUCT_COST_RATE).ceil()
}
