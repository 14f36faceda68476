//! ASCII table rendering for tour listings
//!
//! Every function writes into a `fmt::Write` sink using fixed column
//! widths. Alignment is expressed per call, so no fill or justification
//! state carries over from one line to the next.

use std::fmt::{self, Write};

use crate::config::settings::{Settings, COLUMN_COUNT};
use crate::error::{TourError, TourResult};
use crate::models::{City, Country, Locale, Tours};

/// Column labels, in column order
pub const HEADERS: [&str; COLUMN_COUNT] = ["Countries", "Cities", "Populations", "Costs"];

/// Widen a base column width by `margin` on both sides
///
/// Returns `None` if the result does not fit in a `usize`.
pub const fn with_margin(value: usize, margin: usize) -> Option<usize> {
    match margin.checked_mul(2) {
        Some(both) => value.checked_add(both),
        None => None,
    }
}

/// Compute rendered column widths from base widths
pub fn column_widths(
    base: [usize; COLUMN_COUNT],
    margin: usize,
) -> TourResult<[usize; COLUMN_COUNT]> {
    let mut widths = [0; COLUMN_COUNT];
    for (width, value) in widths.iter_mut().zip(base) {
        *width = with_margin(value, margin).ok_or_else(|| {
            TourError::Config(format!(
                "Column width {} with margin {} is too large",
                value, margin
            ))
        })?;
    }
    Ok(widths)
}

/// Full width of a table line, borders included
pub fn table_width(widths: &[usize]) -> usize {
    1 + widths.iter().map(|w| w + 1).sum::<usize>()
}

/// Split the free space around `len` characters in a `total` wide field
///
/// The left side gets the floor of half; an odd leftover goes right.
/// Text wider than the field gets no padding at all.
pub fn center_padding(total: usize, len: usize) -> (usize, usize) {
    let free = total.saturating_sub(len);
    let left = free / 2;
    (left, free - left)
}

/// Cut text down to `width` characters, marking the cut with "..."
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else if width <= 3 {
        text.chars().take(width).collect()
    } else {
        let mut cut: String = text.chars().take(width - 3).collect();
        cut.push_str("...");
        cut
    }
}

/// Write the title, centered over `title_width`
pub fn write_title(out: &mut impl Write, title: &str, title_width: usize) -> fmt::Result {
    let (left, _) = center_padding(title_width, title.chars().count());
    writeln!(out, "{:left$}{}", "", title, left = left)
}

/// Write a `+---+---+` border line
pub fn write_horizontal_line(out: &mut impl Write, widths: &[usize]) -> fmt::Result {
    out.write_char('+')?;
    for &width in widths {
        write!(out, "{:-<width$}+", "", width = width)?;
    }
    out.write_char('\n')
}

/// Write the header row with every label centered in its column
pub fn write_headers(out: &mut impl Write, headers: &[&str], widths: &[usize]) -> fmt::Result {
    out.write_char('|')?;
    for (label, &width) in headers.iter().zip(widths) {
        let (left, right) = center_padding(width, label.chars().count());
        write!(
            out,
            "{:left$}{}{:right$}|",
            "",
            label,
            "",
            left = left,
            right = right
        )?;
    }
    out.write_char('\n')
}

/// Write one country's rows followed by a separator unless it is the last
fn write_country(
    out: &mut impl Write,
    country: &Country,
    widths: &[usize; COLUMN_COUNT],
    locale: Locale,
    symbol: &str,
) -> fmt::Result {
    let [country_w, city_w, population_w, cost_w] = *widths;

    if country.is_empty() {
        return writeln!(
            out,
            "|{:<country_w$}|{:city_w$}|{:population_w$}|{:cost_w$}|",
            fit(&country.name, country_w),
            "",
            "",
            "",
        );
    }

    for (i, city) in country.cities.iter().enumerate() {
        // Only the first row names the country
        let label = if i == 0 {
            fit(&country.name, country_w)
        } else {
            String::new()
        };
        write!(out, "|{:<country_w$}", label)?;
        write_city(out, city, widths, locale, symbol)?;
    }

    Ok(())
}

fn write_city(
    out: &mut impl Write,
    city: &City,
    widths: &[usize; COLUMN_COUNT],
    locale: Locale,
    symbol: &str,
) -> fmt::Result {
    let [_, city_w, population_w, cost_w] = *widths;

    writeln!(
        out,
        "|{:<city_w$}|{:>population_w$}|{:<cost_w$}|",
        fit(&city.name, city_w),
        fit(&city.population.to_string(), population_w),
        fit(&city.cost.format(locale, symbol), cost_w),
    )
}

/// Write every country's rows, with a separator rule between countries
pub fn write_body(
    out: &mut impl Write,
    tours: &Tours,
    widths: &[usize; COLUMN_COUNT],
    locale: Locale,
    symbol: &str,
) -> fmt::Result {
    let rule = table_width(widths);
    let last = tours.countries.len().saturating_sub(1);

    for (i, country) in tours.countries.iter().enumerate() {
        write_country(out, country, widths, locale, symbol)?;
        if i != last {
            writeln!(out, "{:-<rule$}", "", rule = rule)?;
        }
    }

    Ok(())
}

/// Renders tour listings with a fixed geometry and number format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRenderer {
    widths: [usize; COLUMN_COUNT],
    title_width: usize,
    locale: Locale,
    symbol: String,
}

impl TableRenderer {
    /// Create a renderer from already-margined column widths
    pub fn new(
        widths: [usize; COLUMN_COUNT],
        title_width: usize,
        locale: Locale,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            widths,
            title_width,
            locale,
            symbol: symbol.into(),
        }
    }

    /// Create a renderer from settings
    ///
    /// # Errors
    ///
    /// Returns [`TourError::Config`] if the settings are out of range.
    pub fn from_settings(settings: &Settings) -> TourResult<Self> {
        settings.validate()?;

        Ok(Self::new(
            column_widths(settings.base_widths, settings.margin)?,
            settings.title_width,
            settings.locale,
            settings.currency_symbol.clone(),
        ))
    }

    /// Rendered column widths
    pub fn widths(&self) -> &[usize; COLUMN_COUNT] {
        &self.widths
    }

    /// Write the whole table into `out`
    pub fn write_to(&self, out: &mut impl Write, tours: &Tours) -> fmt::Result {
        write_title(out, &tours.title, self.title_width)?;
        write_horizontal_line(out, &self.widths)?;
        write_headers(out, &HEADERS, &self.widths)?;
        write_horizontal_line(out, &self.widths)?;
        write_body(out, tours, &self.widths, self.locale, &self.symbol)?;
        write_horizontal_line(out, &self.widths)
    }

    /// Render the whole table into a string
    pub fn render(&self, tours: &Tours) -> TourResult<String> {
        tracing::debug!(
            countries = tours.countries.len(),
            cities = tours.city_count(),
            width = table_width(&self.widths),
            locale = %self.locale,
            "rendering tour table"
        );

        let mut output = String::new();
        self.write_to(&mut output, tours)?;
        Ok(output)
    }
}
