use yew::prelude::*;

use crate::components::service_page::{Category, Feature, ServiceContent, ServicePage, Stat};
use crate::config;

/// The only service wired to the live parts portal; the other pages fall
/// back to placeholder anchors.
pub const AUTO_PARTS: ServiceContent = ServiceContent {
    title: "Auto Parts",
    subtitle: "Connect with global suppliers and find the perfect parts for any vehicle. \
               From OEM to aftermarket, we bridge the gap.",
    hero_image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=2000",
    description: "Our automotive ecosystem provides comprehensive solutions tailored for \
                  precision, reliability and performance. We unify the fragmented market \
                  into a single, powerful sourcing engine.",
    stats: &[
        Stat { value: 50, suffix: "M+", label: "Parts Available" },
        Stat { value: 500, suffix: "+", label: "Verified Suppliers" },
        Stat { value: 80, suffix: "+", label: "Countries Served" },
        Stat { value: 99, suffix: "%", label: "Uptime Guarantee" },
    ],
    features: &[
        Feature { title: "Global Network", desc: "Access 500+ suppliers instantly", icon: "🌐" },
        Feature { title: "Quality Assured", desc: "ISO-certified with traceability", icon: "🛡️" },
        Feature { title: "Fast Delivery", desc: "Express service in 24–48 hours", icon: "🚚" },
        Feature { title: "Expert Support", desc: "24/7 automotive specialists", icon: "🎧" },
    ],
    categories: &[
        Category {
            name: "Engine Components",
            count: "10,000+",
            image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=800",
        },
        Category {
            name: "Transmission Parts",
            count: "8,500+",
            image: "https://images.unsplash.com/photo-1619642751034-765dfdf7c58e?q=80&w=800",
        },
        Category {
            name: "Brake Systems",
            count: "6,200+",
            image: "https://images.unsplash.com/photo-1507136566006-cfc505b114fc?q=80&w=800",
        },
        Category {
            name: "Electrical Parts",
            count: "12,000+",
            image: "https://images.unsplash.com/photo-1617788138017-80ad40651399?q=80&w=800",
        },
        Category {
            name: "Suspension",
            count: "5,800+",
            image: "https://images.unsplash.com/photo-1552160753-f13a506d35c9?q=80&w=800",
        },
        Category {
            name: "Body Parts",
            count: "15,000+",
            image: "https://images.unsplash.com/photo-1542362567-b07e54358753?q=80&w=800",
        },
    ],
    login_link: Some(config::PORTAL_LOGIN_URL),
    signup_link: Some(config::PORTAL_SIGNUP_URL),
    catalog_link: Some(config::PORTAL_CATALOG_URL),
    card_link: Some(config::PORTAL_CARD_URL),
};

#[function_component(AutoParts)]
pub fn auto_parts() -> Html {
    html! { <ServicePage content={AUTO_PARTS} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_shape_is_complete() {
        assert_eq!(AUTO_PARTS.title, "Auto Parts");
        assert_eq!(AUTO_PARTS.stats.len(), 4);
        assert_eq!(AUTO_PARTS.features.len(), 4);
        assert_eq!(AUTO_PARTS.categories.len(), 6);
    }

    #[test]
    fn portal_links_point_at_the_external_system() {
        assert_eq!(AUTO_PARTS.login_link, Some("https://abcp82044.noda.pro/"));
        assert_eq!(AUTO_PARTS.signup_link, Some("https://abcp82044.noda.pro/reg"));
        assert_eq!(AUTO_PARTS.catalog_link, Some("https://abcp82044.noda.pro/auto2dV2"));
        assert_eq!(AUTO_PARTS.card_link, Some("https://abcp82044.noda.pro/carbase"));
    }
}
