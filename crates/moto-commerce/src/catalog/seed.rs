//! Built-in product list for the motoparts shop.

use crate::catalog::{Catalog, Category, Product};
use crate::money::Money;

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount)
}

impl Catalog {
    /// The shop's static product list.
    #[rustfmt::skip]
    pub fn motoparts() -> Self {
        Self {
            products: vec![
                Product::new(1, "Titanium Slip-On Exhaust", Category::Exhaust, usd(899.99), "/images/exhaust-titanium.jpg")
                    .with_brand("Akrapovic")
                    .with_original_price(usd(1099.99))
                    .with_rating(4.9)
                    .featured(),
                Product::new(2, "Sintered Brake Pad Set", Category::Brakes, usd(89.99), "/images/brake-pads.jpg")
                    .with_brand("Brembo")
                    .with_rating(4.7)
                    .featured(),
                Product::new(3, "Adjustable Rear Shock", Category::Suspension, usd(1249.0), "/images/rear-shock.jpg")
                    .with_brand("Ohlins")
                    .with_rating(4.8)
                    .featured(),
                Product::new(4, "High-Flow Air Filter", Category::Engine, usd(79.99), "/images/air-filter.jpg")
                    .with_brand("K&N")
                    .with_original_price(usd(94.99))
                    .with_rating(4.5),
                Product::new(5, "Carbon Fiber Front Fender", Category::Bodywork, usd(349.0), "/images/carbon-fender.jpg")
                    .with_brand("Puig")
                    .with_rating(4.2),
                Product::new(6, "Forged Aluminum Wheel Set", Category::Wheels, usd(3299.0), "/images/forged-wheels.jpg")
                    .with_brand("Marchesini")
                    .with_original_price(usd(3799.0))
                    .with_rating(4.9)
                    .featured(),
                Product::new(7, "Full Race Exhaust System", Category::Exhaust, usd(1599.0), "/images/race-exhaust.jpg")
                    .with_brand("Yoshimura")
                    .with_rating(4.6),
                Product::new(8, "Floating Brake Rotor", Category::Brakes, usd(299.99), "/images/brake-rotor.jpg")
                    .with_brand("EBC")
                    .with_original_price(usd(349.99)),
                Product::new(9, "Fork Cartridge Kit", Category::Suspension, usd(899.0), "/images/fork-cartridge.jpg")
                    .with_brand("Ohlins")
                    .with_rating(4.4),
                Product::new(10, "Performance Camshaft", Category::Engine, usd(549.0), "/images/camshaft.jpg")
                    .with_rating(4.1),
                Product::new(11, "Race Fairing Kit", Category::Bodywork, usd(1199.0), "/images/fairing-kit.jpg")
                    .with_original_price(usd(1399.0))
                    .with_rating(4.3),
                Product::new(12, "Supersport Tire Pair", Category::Wheels, usd(389.99), "/images/tires.jpg")
                    .with_brand("Pirelli")
                    .with_rating(4.8),
            ],
        }
    }
}
