//! Field extraction rules for store detail pages.
//!
//! Each rule is an independent function over the raw page HTML. Rules that
//! need a sub-block (address, trading hours) first capture the block with its
//! markup intact and then run their inner patterns against that block only.
//! [`extract_store`] composes the rules into a [`StoreRecord`].

use std::sync::LazyLock;

use regex::Regex;

use crate::text::clean_nonempty;
use crate::types::{StoreRecord, TradingHourEntry, LOCATION_TYPENAME};

/// Brand label that opens every store heading, e.g. `Target – Bondi Junction`.
pub const STORE_BRAND_LABEL: &str = "Target";

/// Any dash between the brand label and the store name: Unicode dash
/// punctuation, its HTML entities, or the UTF-8 en/em dash mis-decoded as
/// Windows-1252. The mis-decoded form is `â€` followed by U+201C (en) or
/// U+201D (em); a third byte that survived as a real dash is accepted too.
const HEADING_DASH: &str =
    r"(?:\p{Pd}|&[nm]dash;|&#821[12];|&#x201[34];|â€[\x{201C}\x{201D}\x{2013}\x{2014}])";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?s)<h4 class="store-heading"[^>]*>\s*{}\s*{HEADING_DASH}\s*(.*?)</h4>"#,
        regex::escape(STORE_BRAND_LABEL)
    ))
    .expect("valid regex")
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span itemprop="telephone">(.*?)</span>"#).expect("valid regex")
});
static LATITUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-lat="([^"]+)""#).expect("valid regex"));
static LONGITUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-lng="([^"]+)""#).expect("valid regex"));

static ADDRESS_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<address itemprop="address"[^>]*>(.*?)</address>"#).expect("valid regex")
});
static STREET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span itemprop="streetAddress">(.*?)</span>"#).expect("valid regex")
});
static CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span itemprop="addressLocality">(.*?)</span>"#).expect("valid regex")
});
static STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span itemprop="addressRegion">(.*?)</span>"#).expect("valid regex")
});
static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span itemprop="postalCode">(.*?)</span>"#).expect("valid regex")
});

static HOURS_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="store-hours">(.*?)</div>"#).expect("valid regex")
});
static HOURS_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<dt>(.*?)</dt>\s*<dd>(.*?)</dd>").expect("valid regex"));

static LOCATION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)$").expect("valid regex"));

/// Address parts found inside the page's address block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreAddress {
    pub address1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

/// Build a [`StoreRecord`] from a store page.
///
/// Returns `None` when the page has no recognisable store heading; every
/// other field is optional and simply left empty when absent.
#[must_use]
pub fn extract_store(html: &str, url: &str) -> Option<StoreRecord> {
    let Some(public_name) = public_name(html) else {
        tracing::debug!(url, "no store heading found");
        return None;
    };

    let address = store_address(html);

    Some(StoreRecord {
        location_id: location_id(url),
        public_name,
        phone_number: phone_number(html),
        address1: address.address1,
        address2: None,
        address3: None,
        city: address.city,
        state: address.state,
        postcode: address.postcode,
        latitude: latitude(html),
        longitude: longitude(html),
        trading_hours: trading_hours(html),
        typename: LOCATION_TYPENAME.to_string(),
        url: url.to_string(),
    })
}

/// Store name from the `store-heading` element, without the brand label.
#[must_use]
pub fn public_name(html: &str) -> Option<String> {
    capture(&NAME_RE, html).and_then(clean_nonempty)
}

#[must_use]
pub fn phone_number(html: &str) -> Option<String> {
    capture(&PHONE_RE, html).and_then(clean_nonempty)
}

#[must_use]
pub fn latitude(html: &str) -> Option<f64> {
    coordinate(html, &LATITUDE_RE)
}

#[must_use]
pub fn longitude(html: &str) -> Option<f64> {
    coordinate(html, &LONGITUDE_RE)
}

fn coordinate(html: &str, re: &Regex) -> Option<f64> {
    let raw = capture(re, html)?.trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::debug!(value = raw, "ignoring unparseable coordinate");
            None
        }
    }
}

/// Address parts, searched only inside `<address itemprop="address">`.
///
/// Without that block every part is `None`.
#[must_use]
pub fn store_address(html: &str) -> StoreAddress {
    let Some(block) = capture(&ADDRESS_BLOCK_RE, html) else {
        return StoreAddress::default();
    };

    StoreAddress {
        // The street span may hold <br>/<strong>; capture raw, then clean.
        address1: capture(&STREET_RE, block).and_then(clean_nonempty),
        city: capture(&CITY_RE, block).and_then(clean_nonempty),
        state: capture(&STATE_RE, block).and_then(clean_nonempty),
        postcode: capture(&POSTCODE_RE, block).and_then(clean_nonempty),
    }
}

/// One entry per `<dt>`/`<dd>` pair inside the `store-hours` block, in page
/// order. Day text is upper-cased; hours text is only trimmed.
#[must_use]
pub fn trading_hours(html: &str) -> Vec<TradingHourEntry> {
    let Some(block) = capture(&HOURS_BLOCK_RE, html) else {
        return Vec::new();
    };

    HOURS_PAIR_RE
        .captures_iter(block)
        .map(|cap| {
            let day = cap.get(1).map_or("", |m| m.as_str()).trim().to_uppercase();
            let hours = cap.get(2).map_or("", |m| m.as_str()).trim().to_string();
            TradingHourEntry::new(day, hours)
        })
        .collect()
}

/// Trailing digits of the URL path, e.g. `"00042"` for
/// `https://example.com/stores/00042`. Query string and fragment are ignored.
#[must_use]
pub fn location_id(url: &str) -> Option<String> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    capture(&LOCATION_ID_RE, without_query).map(str::to_string)
}

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)?.get(1).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
