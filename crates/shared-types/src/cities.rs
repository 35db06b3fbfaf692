//! Service cities.
//!
//! Matching and verification visibility are scoped by exact city-string
//! equality, so every actor registers against one of these names.

/// Cities currently served by the network.
pub const CITIES: [&str; 15] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
    "Chandigarh",
    "Kochi",
    "Bhopal",
    "Patna",
    "Surat",
];

/// Returns true if `city` is one of the served cities.
pub fn is_served(city: &str) -> bool {
    CITIES.contains(&city)
}
