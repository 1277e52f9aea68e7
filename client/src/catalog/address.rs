//! Address search and reverse geocoding.

use serde::{Deserialize, Serialize};

use crate::domain::Address;

/// Restricts address search to a kind of place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressSearchType {
    /// Cities, regions and other administrative areas.
    Administrative,
}

/// Variables of [`SearchAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAddressVariables {
    /// Free-text address query.
    pub query: String,
    /// Locale for place names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Kind of place to restrict results to.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<AddressSearchType>,
}

/// Data of [`SearchAddress`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAddressData {
    /// Candidate addresses, best match first.
    pub search_address: Vec<Address>,
}

operation! {
    query
    /// Forward geocoding of a free-text query.
    SearchAddress = "SearchAddress" {
        document: concat!(
            "query SearchAddress($query: String!, $locale: String, $type: AddressSearchType) {\n",
            "  searchAddress(query: $query, locale: $locale, type: $type) {\n",
            "    ...AddressFragment\n",
            "  }\n",
            "}\n",
            address_fragment!()
        ),
        variables: SearchAddressVariables,
        data: SearchAddressData,
    }
}

/// Variables of [`ReverseGeocode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeVariables {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Map zoom level; coarser levels yield broader places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    /// Locale for place names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Data of [`ReverseGeocode`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeData {
    /// Addresses at the given point.
    pub reverse_geocode: Vec<Address>,
}

operation! {
    query
    /// Addresses found at a coordinate.
    ReverseGeocode = "ReverseGeocode" {
        document: concat!(
            "query ReverseGeocode(\n",
            "  $latitude: Float!\n",
            "  $longitude: Float!\n",
            "  $zoom: Int\n",
            "  $locale: String\n",
            ") {\n",
            "  reverseGeocode(\n",
            "    latitude: $latitude\n",
            "    longitude: $longitude\n",
            "    zoom: $zoom\n",
            "    locale: $locale\n",
            "  ) {\n",
            "    ...AddressFragment\n",
            "  }\n",
            "}\n",
            address_fragment!()
        ),
        variables: ReverseGeocodeVariables,
        data: ReverseGeocodeData,
    }
}
