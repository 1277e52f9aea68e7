//! Postal addresses returned by search and geocoding operations.

use serde::{Deserialize, Deserializer};

/// WGS84 coordinates of an address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl GeoPoint {
    /// Parse the server's `"lon;lat"` encoding.
    ///
    /// Returns `None` for malformed input or out-of-range coordinates.
    ///
    /// # Examples
    /// ```
    /// use client::domain::GeoPoint;
    ///
    /// let point = GeoPoint::parse("2.3522;48.8566").expect("valid point");
    /// assert_eq!(point.latitude, 48.8566);
    /// assert!(GeoPoint::parse("200;10").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (lon, lat) = raw.split_once(';')?;
        let longitude = lon.trim().parse::<f64>().ok()?;
        let latitude = lat.trim().parse::<f64>().ok()?;
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return None;
        }
        Some(Self {
            longitude,
            latitude,
        })
    }

    /// Encode back to the `"lon;lat"` wire form.
    #[must_use]
    pub fn to_wire(&self) -> String {
        format!("{};{}", self.longitude, self.latitude)
    }
}

/// Attribution for an address picture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credit {
    /// Credited name.
    pub name: String,
    /// Link to the credited party.
    #[serde(default)]
    pub url: Option<String>,
}

/// Illustrative picture for a locality.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PictureInfo {
    /// Picture URL.
    pub url: String,
    /// Photographer.
    #[serde(default)]
    pub author: Option<Credit>,
    /// Hosting source.
    #[serde(default)]
    pub source: Option<Credit>,
}

/// An address as projected by the address fragment.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Opaque identifier, absent for geocoder results not stored yet.
    #[serde(default)]
    pub id: Option<String>,
    /// Place name.
    #[serde(default)]
    pub description: Option<String>,
    /// Coordinates.
    #[serde(default, deserialize_with = "deserialize_geom")]
    pub geom: Option<GeoPoint>,
    /// Street and house number.
    #[serde(default)]
    pub street: Option<String>,
    /// City or town.
    #[serde(default)]
    pub locality: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Region or state.
    #[serde(default)]
    pub region: Option<String>,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Geocoder place type (for example `house` or `city`).
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,
    /// Canonical URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Identifier in the geocoder that produced the address.
    #[serde(default)]
    pub origin_id: Option<String>,
    /// IANA timezone name.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Illustration of the place.
    #[serde(default)]
    pub picture_info: Option<PictureInfo>,
}

impl Address {
    /// One-line label: description, then locality and country when present.
    #[must_use]
    pub fn full_label(&self) -> String {
        [
            self.description.as_deref(),
            self.street.as_deref(),
            self.locality.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .fold(Vec::<&str>::new(), |mut parts, part| {
            if !parts.contains(&part) {
                parts.push(part);
            }
            parts
        })
        .join(", ")
    }
}

fn deserialize_geom<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => GeoPoint::parse(value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid geometry '{value}', expected 'lon;lat'"))
        }),
    }
}

#[cfg(test)]
mod tests {
    //! Address decoding and labelling.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::plain("4.85;45.75", Some((4.85, 45.75)))]
    #[case::padded(" -1.5 ; 47.2 ", Some((-1.5, 47.2)))]
    #[case::missing_separator("4.85,45.75", None)]
    #[case::latitude_out_of_range("4.85;95", None)]
    #[case::not_numbers("east;north", None)]
    fn parses_geometry(#[case] raw: &str, #[case] expected: Option<(f64, f64)>) {
        let parsed = GeoPoint::parse(raw).map(|point| (point.longitude, point.latitude));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn decodes_fragment_fields() {
        let address: Address = serde_json::from_value(json!({
            "id": "12",
            "description": "Place Bellecour",
            "geom": "4.832;45.757",
            "locality": "Lyon",
            "postalCode": "69002",
            "country": "France",
            "type": "square",
            "originId": "nominatim:123",
            "pictureInfo": {
                "url": "https://pictures.example/lyon.jpg",
                "author": { "name": "Jane" },
                "source": { "name": "Unsplash", "url": "https://unsplash.com" }
            }
        }))
        .expect("address should decode");

        assert_eq!(address.postal_code.as_deref(), Some("69002"));
        assert_eq!(address.place_type.as_deref(), Some("square"));
        assert_eq!(address.geom.map(|point| point.latitude), Some(45.757));
        assert_eq!(address.full_label(), "Place Bellecour, Lyon, France");
    }

    #[test]
    fn malformed_geometry_fails_closed() {
        let result = serde_json::from_value::<Address>(json!({ "geom": "somewhere" }));
        assert!(result.is_err(), "invalid geometry must not decode");
    }

    #[test]
    fn null_geometry_is_absent() {
        let address: Address =
            serde_json::from_value(json!({ "geom": null })).expect("address should decode");
        assert!(address.geom.is_none());
    }

    #[test]
    fn label_skips_duplicates() {
        let address = Address {
            description: Some("Lyon".to_owned()),
            locality: Some("Lyon".to_owned()),
            country: Some("France".to_owned()),
            ..Address::default()
        };
        assert_eq!(address.full_label(), "Lyon, France");
    }
}
