use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::BreweryAggregate;

use crate::views::map::brewery_popup::BreweryPopup;

/// Chicago city center, the fallback position for breweries the API returns
/// without coordinates.
pub const DEFAULT_LAT: f64 = 41.8781;
pub const DEFAULT_LNG: f64 = -87.6298;

/// Resolves a marker position. Unlocated breweries get a small golden-angle
/// offset from the city center so overlapping markers stay distinguishable
/// and stable across renders.
pub fn marker_position(brewery: &BreweryAggregate, index: usize) -> (f64, f64) {
    match (brewery.lat, brewery.lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            let angle = index as f64 * 2.399_963_229_728_653;
            let radius = 0.004 + 0.0015 * (index % 7) as f64;
            (
                DEFAULT_LAT + radius * angle.cos(),
                DEFAULT_LNG + radius * angle.sin(),
            )
        }
    }
}

#[component]
pub fn BreweryMap(#[prop(into)] breweries: Signal<Vec<BreweryAggregate>>) -> impl IntoView {
    view! {
        <div class="map-container">
            <MapContainer
                style="height: 100%; width: 100%; flex: 1"
                center=Position::new(DEFAULT_LAT, DEFAULT_LNG)
                zoom=12.0
                set_view=true
            >
                <TileLayer
                    url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                    attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                />
                {move ||
                    breweries.get().into_iter().enumerate().map(|(index, brewery)| {
                        let (lat, lng) = marker_position(&brewery, index);
                        view! {
                            <Marker position=Position::new(lat, lng) draggable=false>
                                <Popup>
                                    <BreweryPopup brewery=brewery />
                                </Popup>
                            </Marker>
                        }
                    }).collect_view()
                }
            </MapContainer>
            {move || {
                let count = breweries.get().len();
                (count > 0).then(|| view! {
                    <div class="map-info">
                        <p>
                            {format!(
                                "Showing {} {}",
                                count,
                                if count == 1 { "brewery" } else { "breweries" }
                            )}
                        </p>
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brewery(lat: Option<f64>, lng: Option<f64>) -> BreweryAggregate {
        BreweryAggregate {
            name: "Half Acre".to_string(),
            lat,
            lng,
            ..Default::default()
        }
    }

    #[test]
    fn real_coordinates_pass_through() {
        let position = marker_position(&brewery(Some(41.9), Some(-87.7)), 0);
        assert_eq!(position, (41.9, -87.7));
    }

    #[test]
    fn missing_coordinates_fall_back_near_the_city_center() {
        for index in 0..20 {
            let (lat, lng) = marker_position(&brewery(None, None), index);
            assert!((lat - DEFAULT_LAT).abs() < 0.01);
            assert!((lng - DEFAULT_LNG).abs() < 0.01);
        }
    }

    #[test]
    fn fallback_is_deterministic_and_spreads_markers() {
        let a = marker_position(&brewery(None, None), 3);
        let b = marker_position(&brewery(None, None), 3);
        assert_eq!(a, b);
        let c = marker_position(&brewery(None, None), 4);
        assert_ne!(a, c);
    }

    #[test]
    fn half_known_coordinates_use_the_fallback() {
        let (lat, _) = marker_position(&brewery(Some(41.9), None), 0);
        assert!((lat - DEFAULT_LAT).abs() < 0.01);
    }
}
