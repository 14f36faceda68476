//! Built-in tour listing rendered by the `tours` binary

use super::currency::Currency;
use super::tour::{City, Country, Tours};
use crate::error::TourResult;

/// Title of the built-in listing
pub const SAMPLE_TITLE: &str = "Tour Ticket Prices from Miami";

/// Build the built-in South America listing
///
/// # Errors
///
/// Fails only if one of the embedded prices is not a valid currency amount.
pub fn sample_tours() -> TourResult<Tours> {
    let city = |name: &str, population: u64, cost: i64| -> TourResult<City> {
        Ok(City::new(name, population, Currency::from_whole(cost)?))
    };

    Ok(Tours::new(
        SAMPLE_TITLE,
        vec![
            Country::new(
                "Colombia",
                vec![
                    city("Bogota", 8_778_000, 1_500_000)?,
                    city("Cali", 2_401_000, 2_000_000)?,
                    city("Medellin", 2_464_000, 2_300_000)?,
                    city("Cartagena", 972_000, 1_700_000)?,
                ],
            ),
            Country::new(
                "Brazil",
                vec![
                    city("Rio De Janiero", 13_500_000, 2_100_000)?,
                    city("Sao Paulo", 11_310_000, 2_350_000)?,
                    city("Salvador", 18_234_000, 1_450_000)?,
                ],
            ),
            Country::new(
                "Chile",
                vec![
                    city("Valdivia", 260_000, 1_200_000)?,
                    city("Santiago", 7_040_000, 1_230_000)?,
                ],
            ),
            Country::new(
                "Argentina",
                vec![city("Buenos Aires", 3_010_000, 2_100_000)?],
            ),
        ],
    ))
}
