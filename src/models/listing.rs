use serde::{Deserialize, Deserializer, Serialize};

/// A bookable hotel, restaurant or activity as returned by the backend.
///
/// Field names follow the backend's camelCase JSON. Everything the UI treats
/// as optional is an `Option` here; the rest is required and a record that
/// lacks it is rejected when the response is decoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "propertyName")]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
}

/// Some backend records carry a structured address, older ones a plain label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Location {
    Address {
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        country: Option<String>,
    },
    Label(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    #[serde(default)]
    pub url: Option<String>,
}

impl Listing {
    pub fn city(&self) -> Option<&str> {
        match &self.location {
            Some(Location::Address { city, .. }) => city.as_deref(),
            _ => None,
        }
    }

    pub fn country(&self) -> Option<&str> {
        match &self.location {
            Some(Location::Address { country, .. }) => country.as_deref(),
            _ => None,
        }
    }

    /// City if known, otherwise the free-text location label.
    pub fn location_label(&self) -> Option<&str> {
        match &self.location {
            Some(Location::Address { city, .. }) => city.as_deref(),
            Some(Location::Label(label)) => Some(label.as_str()),
            None => None,
        }
    }

    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().and_then(|photo| photo.url.as_deref())
    }

    /// Rating as displayed on cards, e.g. `4.5`.
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|rating| rating.to_string())
    }

    /// Cuisine tag, falling back to the business type.
    pub fn category(&self) -> Option<&str> {
        self.cuisine
            .as_deref()
            .or(self.business_type.as_deref())
    }
}

// Backend ids are strings for most records but plain numbers for some.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "a1",
            "propertyName": "Lake View",
            "location": { "city": "Jinja", "country": "Uganda" },
            "rating": 4.5,
            "photos": [{ "url": "https://img/1.jpg" }, { "url": "https://img/2.jpg" }],
            "cuisine": "Ugandan",
            "businessType": "restaurant"
        }))
        .unwrap();

        assert_eq!(listing.id, "a1");
        assert_eq!(listing.name, "Lake View");
        assert_eq!(listing.city(), Some("Jinja"));
        assert_eq!(listing.country(), Some("Uganda"));
        assert_eq!(listing.primary_photo(), Some("https://img/1.jpg"));
        assert_eq!(listing.rating_label().as_deref(), Some("4.5"));
        assert_eq!(listing.category(), Some("Ugandan"));
    }

    #[test]
    fn test_decode_sparse_record() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 42,
            "propertyName": "City Inn",
            "businessType": "hotel"
        }))
        .unwrap();

        assert_eq!(listing.id, "42");
        assert_eq!(listing.location, None);
        assert_eq!(listing.city(), None);
        assert!(listing.photos.is_empty());
        assert_eq!(listing.rating_label(), None);
        assert_eq!(listing.category(), Some("hotel"));
    }

    #[test]
    fn test_free_text_location() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "x",
            "propertyName": "Gorilla Camp",
            "location": "Bwindi forest"
        }))
        .unwrap();

        assert_eq!(listing.city(), None);
        assert_eq!(listing.country(), None);
        assert_eq!(listing.location_label(), Some("Bwindi forest"));
    }

    #[test]
    fn test_null_photos_fall_back() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "1",
            "propertyName": "Lake View",
            "photos": null,
            "location": null,
            "rating": null
        }))
        .unwrap();
        assert!(listing.photos.is_empty());
        assert_eq!(listing.primary_photo(), None);

        let listing: Listing = serde_json::from_value(json!({
            "id": "2",
            "propertyName": "City Inn",
            "photos": [{ "url": null }, { "url": "https://img/2.jpg" }]
        }))
        .unwrap();
        assert_eq!(listing.primary_photo(), None);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<Listing>(json!({ "id": "x" }));
        assert!(result.is_err());
    }
}
