//! Venues near Gangnam station and their current crowdness

use crate::catalog::hourly::{hourly_curve, HourlyData};
use crate::core::{CrowdnessLevel, GeoPoint, LocationType};
use crate::validation::{ReportError, ReportResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A place users can check and report on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    /// Listed walking distance (m)
    pub distance_m: u32,
    pub crowdness: CrowdnessLevel,
    /// Milliseconds since epoch of the last crowdness change
    pub last_updated_ms: u64,
    pub location: GeoPoint,
    pub location_type: LocationType,
    pub rating: Option<f32>,
    pub price_range: Option<String>,
    pub estimated_wait_min: Option<u32>,
    pub description: Option<String>,
    #[serde(default)]
    pub hourly: Vec<HourlyData>,
}

/// Number of venues at each crowdness level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// In-memory set of venues
#[derive(Debug, Clone, Default)]
pub struct VenueCatalog {
    venues: Vec<Venue>,
}

struct VenueSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    address: &'static str,
    distance_m: u32,
    lat: f64,
    lng: f64,
    location_type: LocationType,
    rating: f32,
    price_range: Option<&'static str>,
    estimated_wait_min: Option<u32>,
    description: Option<&'static str>,
}

const GANGNAM_VENUES: [VenueSeed; 9] = [
    VenueSeed { id: "1", name: "스타벅스 강남역점", category: "카페", address: "서울 강남구 강남대로 지하 396", distance_m: 150, lat: 37.4979, lng: 127.0276, location_type: LocationType::Store, rating: 4.2, price_range: Some("₩₩"), estimated_wait_min: Some(5), description: None },
    VenueSeed { id: "2", name: "맥도날드 강남역점", category: "패스트푸드", address: "서울 강남구 강남대로 390", distance_m: 200, lat: 37.4977, lng: 127.0278, location_type: LocationType::Store, rating: 4.0, price_range: Some("₩"), estimated_wait_min: Some(3), description: None },
    VenueSeed { id: "3", name: "본죽&비빔밥 강남역점", category: "한식", address: "서울 강남구 강남대로 지하 398", distance_m: 120, lat: 37.4982, lng: 127.0274, location_type: LocationType::Store, rating: 4.1, price_range: Some("₩₩"), estimated_wait_min: Some(8), description: None },
    VenueSeed { id: "4", name: "이디야커피 강남역점", category: "카페", address: "서울 강남구 테헤란로 지하 145", distance_m: 180, lat: 37.4975, lng: 127.0280, location_type: LocationType::Store, rating: 3.9, price_range: Some("₩"), estimated_wait_min: Some(2), description: None },
    VenueSeed { id: "5", name: "백종원의 본가", category: "한식", address: "서울 강남구 강남대로 392", distance_m: 250, lat: 37.4984, lng: 127.0272, location_type: LocationType::Store, rating: 4.5, price_range: Some("₩₩₩"), estimated_wait_min: Some(15), description: None },
    VenueSeed { id: "6", name: "투썸플레이스 강남역점", category: "카페", address: "서울 강남구 강남대로 지하 1층", distance_m: 90, lat: 37.4980, lng: 127.0275, location_type: LocationType::Store, rating: 4.3, price_range: Some("₩₩"), estimated_wait_min: Some(7), description: None },
    VenueSeed { id: "7", name: "김밥천국 강남역점", category: "분식", address: "서울 강남구 강남대로 지하 400", distance_m: 300, lat: 37.4976, lng: 127.0282, location_type: LocationType::Store, rating: 3.8, price_range: Some("₩"), estimated_wait_min: Some(5), description: None },
    VenueSeed { id: "8", name: "파리바게뜨 강남역점", category: "베이커리", address: "서울 강남구 테헤란로 지하 147", distance_m: 160, lat: 37.4978, lng: 127.0277, location_type: LocationType::Store, rating: 4.0, price_range: Some("₩"), estimated_wait_min: Some(1), description: None },
    VenueSeed { id: "9", name: "선정릉", category: "공원", address: "서울 강남구 선릉로100길 1", distance_m: 2000, lat: 37.5045, lng: 127.0487, location_type: LocationType::Park, rating: 4.6, price_range: None, estimated_wait_min: None, description: Some("도심 속 조선 왕릉 산책로") },
];

impl VenueCatalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// The Gangnam station venues with random crowdness and hourly curves
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R, now_ms: u64) -> Self {
        let venues = GANGNAM_VENUES
            .iter()
            .map(|seed| Venue {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                category: seed.category.to_string(),
                address: seed.address.to_string(),
                distance_m: seed.distance_m,
                crowdness: random_level(rng),
                last_updated_ms: now_ms,
                location: GeoPoint::new(seed.lat, seed.lng),
                location_type: seed.location_type,
                rating: Some(seed.rating),
                price_range: seed.price_range.map(str::to_string),
                estimated_wait_min: seed.estimated_wait_min,
                description: seed.description.map(str::to_string),
                hourly: hourly_curve(rng),
            })
            .collect();

        Self { venues }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn get(&self, id: &str) -> ReportResult<&Venue> {
        self.venues
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| ReportError::VenueNotFound { venue_id: id.to_string() })
    }

    /// Venues currently at `level`
    pub fn by_level(&self, level: CrowdnessLevel) -> Vec<&Venue> {
        self.venues.iter().filter(|v| v.crowdness == level).collect()
    }

    /// Venues ordered by listed distance, closest first
    pub fn nearest_first(&self) -> Vec<&Venue> {
        let mut sorted: Vec<&Venue> = self.venues.iter().collect();
        sorted.sort_by_key(|v| v.distance_m);
        sorted
    }

    pub fn counts(&self) -> LevelCounts {
        self.venues.iter().fold(LevelCounts::default(), |mut counts, venue| {
            match venue.crowdness {
                CrowdnessLevel::Low => counts.low += 1,
                CrowdnessLevel::Medium => counts.medium += 1,
                CrowdnessLevel::High => counts.high += 1,
            }
            counts
        })
    }

    /// Record a new crowdness level for one venue
    pub fn set_crowdness(&mut self, id: &str, level: CrowdnessLevel, at_ms: u64) -> ReportResult<()> {
        let venue = self
            .venues
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ReportError::VenueNotFound { venue_id: id.to_string() })?;
        venue.crowdness = level;
        venue.last_updated_ms = at_ms;
        Ok(())
    }

    /// Draw a fresh random level for every venue
    pub fn randomize_levels<R: Rng + ?Sized>(&mut self, rng: &mut R, at_ms: u64) {
        for venue in &mut self.venues {
            venue.crowdness = random_level(rng);
            venue.last_updated_ms = at_ms;
        }
    }
}

fn random_level<R: Rng + ?Sized>(rng: &mut R) -> CrowdnessLevel {
    CrowdnessLevel::ALL[rng.gen_range(0..CrowdnessLevel::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(seed: u64) -> VenueCatalog {
        VenueCatalog::seeded(&mut StdRng::seed_from_u64(seed), 1_000)
    }

    #[test]
    fn test_seeded_catalog_contents() {
        let catalog = catalog(1);
        assert_eq!(catalog.len(), 9);
        let starbucks = catalog.get("1").unwrap();
        assert_eq!(starbucks.name, "스타벅스 강남역점");
        assert_eq!(starbucks.location, GeoPoint::new(37.4979, 127.0276));
        assert_eq!(starbucks.hourly.len(), 24);
        assert_eq!(starbucks.last_updated_ms, 1_000);

        let park = catalog.get("9").unwrap();
        assert_eq!(park.location_type, LocationType::Park);
        assert!(park.price_range.is_none());
    }

    #[test]
    fn test_same_seed_same_catalog() {
        assert_eq!(catalog(8).venues(), catalog(8).venues());
    }

    #[test]
    fn test_unknown_venue() {
        let err = catalog(1).get("42").unwrap_err();
        assert_eq!(err, ReportError::VenueNotFound { venue_id: "42".to_string() });
    }

    #[test]
    fn test_counts_add_up() {
        let catalog = catalog(2);
        let counts = catalog.counts();
        assert_eq!(counts.low + counts.medium + counts.high, catalog.len());
        assert_eq!(counts.high, catalog.by_level(CrowdnessLevel::High).len());
    }

    #[test]
    fn test_set_crowdness() {
        let mut catalog = catalog(3);
        catalog.set_crowdness("5", CrowdnessLevel::High, 5_000).unwrap();
        let venue = catalog.get("5").unwrap();
        assert_eq!(venue.crowdness, CrowdnessLevel::High);
        assert_eq!(venue.last_updated_ms, 5_000);

        assert!(catalog.set_crowdness("nope", CrowdnessLevel::Low, 5_000).is_err());
    }

    #[test]
    fn test_nearest_first() {
        let catalog = catalog(4);
        let ordered = catalog.nearest_first();
        assert_eq!(ordered[0].id, "6");
        assert_eq!(ordered.last().map(|v| v.id.as_str()), Some("9"));
        assert!(ordered.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));
    }

    #[test]
    fn test_randomize_touches_every_venue() {
        let mut catalog = catalog(5);
        catalog.randomize_levels(&mut StdRng::seed_from_u64(6), 30_000);
        assert!(catalog.venues().iter().all(|v| v.last_updated_ms == 30_000));
    }
}
