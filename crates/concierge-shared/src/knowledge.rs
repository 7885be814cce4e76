//! Static restaurant knowledge base.
//!
//! Every responder reads from a single [`KnowledgeBase`]. The built-in
//! default carries the reference restaurant content. A TOML file with the
//! same shape can replace any part of it at startup. Sections or fields
//! missing from the file keep their built-in values.
//!
//! The knowledge base is validated once after loading and never mutated.

use crate::error::{ConciergeError, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Canonical week order used whenever hours are listed.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Display name for a weekday ("Monday", "Tuesday", ...)
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Identity and contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub booking_url: String,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: "Monika Restaurant".to_string(),
            tagline: "West African Seafood & Charcoal Grill".to_string(),
            address: "14 Deptford Broadway, London SE8 4PA".to_string(),
            phone: "020 8691 0263".to_string(),
            email: "info@monikarestaurant.co.uk".to_string(),
            website: "https://www.monikarestaurant.co.uk".to_string(),
            booking_url: "https://web.dojo.app/create_booking/vendor/4w3KsIvZJOhkRjvfcYFI9-mNbTqGcKHCCwTTtEr_NhM_restaurant".to_string(),
        }
    }
}

/// Opening hours, one entry per day.
///
/// Stored as named fields rather than a map so listing order can never
/// depend on insertion or hash order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            monday: "Closed".to_string(),
            tuesday: "4 PM – 11 PM".to_string(),
            wednesday: "4 PM – 11 PM".to_string(),
            thursday: "4 PM – 11 PM".to_string(),
            friday: "4 PM – 12 AM".to_string(),
            saturday: "12 PM – 12 AM".to_string(),
            sunday: "12 PM – 10 PM".to_string(),
        }
    }
}

impl OpeningHours {
    /// Hours for a single day
    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Monday through Sunday
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> + '_ {
        WEEK.iter().map(move |day| (*day, self.get(*day)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuInfo {
    pub description: String,
    /// Dish names, shown in this order
    pub highlights: Vec<String>,
    pub menu_url: String,
    pub dietary: String,
}

impl Default for MenuInfo {
    fn default() -> Self {
        Self {
            description: "West African Seafood and Charcoal Grill. Bold flavours, vibrant spices, and fresh ingredients.".to_string(),
            highlights: vec![
                "The Iconic Monika Fish — our signature whole grilled fish".to_string(),
                "Spiced Charcoal Prawns".to_string(),
                "Suya (West African spiced grilled meat)".to_string(),
                "Jollof Rice".to_string(),
                "Grilled Lobster".to_string(),
                "Pepper Soup".to_string(),
                "Plantain (fried ripe plantain)".to_string(),
                "Pounded Yam & Egusi Soup".to_string(),
            ],
            menu_url: "images/menu.pdf".to_string(),
            dietary: "We cater to various dietary needs. Please ask your server about gluten-free, vegetarian, or allergen options.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueInfo {
    pub description: String,
    pub capacity: String,
    pub features: Vec<String>,
    pub atmosphere: String,
}

impl Default for VenueInfo {
    fn default() -> Self {
        Self {
            description: "A warm, vibrant space reflecting West African culture — bold patterns, earthy tones, and modern elegance.".to_string(),
            capacity: "We can accommodate private events and celebrations. Contact us for group bookings.".to_string(),
            features: vec![
                "Indoor dining".to_string(),
                "Private event space".to_string(),
                "Bar area".to_string(),
                "Charcoal grill station".to_string(),
            ],
            atmosphere: "Welcoming, fun, and friendly — perfect for unwinding, date nights, and celebrations.".to_string(),
        }
    }
}

/// Parking notes plus the two map-service links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkingInfo {
    pub info: String,
    pub waze: String,
    pub google_maps: String,
}

impl Default for ParkingInfo {
    fn default() -> Self {
        Self {
            info: "Free on-street parking available on Deptford Broadway and surrounding streets after 6:30 PM and on weekends. Pay & display before 6:30 PM.".to_string(),
            waze: "https://waze.com/ul?ll=51.4749535,-0.024757&navigate=yes&zoom=17".to_string(),
            google_maps: "https://www.google.com/maps/dir/?api=1&destination=14+Deptford+Broadway,+London+SE8+4PA".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryInfo {
    pub summary: String,
}

impl Default for StoryInfo {
    fn default() -> Self {
        Self {
            summary: "Monika Restaurant brings the authentic flavours of West Africa to Deptford, London. Our décor reflects West African culture with bold patterns, earthy tones, and modern elegance. We serve charcoal-grilled seafood and traditional dishes in a warm, welcoming atmosphere.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionInfo {
    pub current: String,
}

impl Default for PromotionInfo {
    fn default() -> Self {
        Self {
            current: "Check our Promotion page for the latest offers including exclusive recipes and limited-time deals.".to_string(),
        }
    }
}

/// Site pages linked from responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitePages {
    pub promotions: String,
    pub story: String,
    pub gallery: String,
}

impl Default for SitePages {
    fn default() -> Self {
        Self {
            promotions: "promotion.html".to_string(),
            story: "story.html".to_string(),
            gallery: "gallery.html".to_string(),
        }
    }
}

/// Everything the responders know about the restaurant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub restaurant: RestaurantInfo,
    pub hours: OpeningHours,
    pub menu: MenuInfo,
    pub venue: VenueInfo,
    pub parking: ParkingInfo,
    pub story: StoryInfo,
    pub promotion: PromotionInfo,
    pub pages: SitePages,
}

impl KnowledgeBase {
    /// Built-in reference content
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML knowledge base
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let kb: KnowledgeBase = toml::from_str(contents)?;
        kb.validate()?;
        Ok(kb)
    }

    /// Load and validate a TOML knowledge base from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), name = %kb.restaurant.name, "knowledge base loaded");
        Ok(kb)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the fields responders depend on.
    ///
    /// Links and contact values are interpolated into trusted markup, so
    /// they must not carry quote or angle-bracket characters.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("restaurant.name", &self.restaurant.name)?;
        require_non_empty("restaurant.phone", &self.restaurant.phone)?;
        require_non_empty("restaurant.booking_url", &self.restaurant.booking_url)?;
        require_non_empty("menu.menu_url", &self.menu.menu_url)?;

        for (field, value) in [
            ("restaurant.phone", &self.restaurant.phone),
            ("restaurant.email", &self.restaurant.email),
        ] {
            require_markup_safe(field, value)?;
        }

        for (field, value) in [
            ("restaurant.website", &self.restaurant.website),
            ("restaurant.booking_url", &self.restaurant.booking_url),
            ("menu.menu_url", &self.menu.menu_url),
            ("parking.waze", &self.parking.waze),
            ("parking.google_maps", &self.parking.google_maps),
            ("pages.promotions", &self.pages.promotions),
            ("pages.story", &self.pages.story),
            ("pages.gallery", &self.pages.gallery),
        ] {
            require_link(field, value)?;
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConciergeError::Knowledge(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_markup_safe(field: &str, value: &str) -> Result<()> {
    if value.contains(['"', '<', '>']) {
        return Err(ConciergeError::Knowledge(format!(
            "{} contains a quote or angle bracket",
            field
        )));
    }
    Ok(())
}

/// Absolute http(s) URL or site-relative path
fn require_link(field: &str, value: &str) -> Result<()> {
    require_markup_safe(field, value)?;

    if value.is_empty() || value.starts_with("https://") || value.starts_with("http://") {
        return Ok(());
    }

    // Protocol-relative links point off-site
    if value.starts_with("//") {
        return Err(ConciergeError::Knowledge(format!(
            "{} must not be a protocol-relative URL, got '{}'",
            field, value
        )));
    }

    // A scheme colon can only appear before the first '/', '?' or '#'
    let head_end = value.find(['/', '?', '#']).unwrap_or(value.len());
    if value[..head_end].contains(':') {
        return Err(ConciergeError::Knowledge(format!(
            "{} must be an http(s) URL or a site-relative path, got '{}'",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(KnowledgeBase::builtin().validate().is_ok());
    }

    #[test]
    fn test_hours_iterate_monday_first() {
        let hours = OpeningHours::default();
        let days: Vec<&str> = hours.iter().map(|(d, _)| day_name(d)).collect();
        assert_eq!(
            days,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert_eq!(hours.get(Weekday::Mon), "Closed");
    }

    #[test]
    fn test_require_link() {
        assert!(require_link("x", "https://example.com/a").is_ok());
        assert!(require_link("x", "images/menu.pdf").is_ok());
        assert!(require_link("x", "/story.html").is_ok());
        assert!(require_link("x", "javascript:alert(1)").is_err());
        assert!(require_link("x", "https://example.com/\"onclick").is_err());
        assert!(require_link("x", "//evil.example/x").is_err());
        assert!(require_link("x", "menu.pdf?v=12:00").is_ok());
        assert!(require_link("x", "gallery.html#at:noon").is_ok());
        assert!(require_link("x", "mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_empty_phone_rejected() {
        let mut kb = KnowledgeBase::builtin();
        kb.restaurant.phone = "   ".to_string();
        let err = kb.validate().unwrap_err();
        assert!(err.to_string().contains("restaurant.phone"));
    }
}
