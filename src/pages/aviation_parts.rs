use yew::prelude::*;

use crate::components::service_page::{Category, Feature, ServiceContent, ServicePage, Stat};

pub const AVIATION_PARTS: ServiceContent = ServiceContent {
    title: "Aviation Parts",
    subtitle: "Aerospace-grade component sourcing with complete traceability and \
               FAA/EASA compliance documentation.",
    hero_image: "https://images.unsplash.com/photo-1474302770737-173ee21bab63?q=80&w=2000",
    description: "We deliver critical aerospace solutions where precision is non-negotiable. \
                  Our platform ensures every bolt, sensor, and turbine blade meets the \
                  highest airworthiness standards.",
    stats: &[
        Stat { value: 2, suffix: "M+", label: "Certified Parts" },
        Stat { value: 150, suffix: "+", label: "MRO Partners" },
        Stat { value: 100, suffix: "%", label: "Traceability" },
        Stat { value: 24, suffix: "/7", label: "AOG Support" },
    ],
    features: &[
        Feature { title: "Global MRO Network", desc: "Access certified maintenance hubs", icon: "🌐" },
        Feature { title: "FAA/EASA Compliant", desc: "Full regulatory documentation", icon: "🛡️" },
        Feature { title: "AOG Logistics", desc: "Priority shipping for grounded aircraft", icon: "🚚" },
        Feature { title: "Technical Desk", desc: "Aerospace engineering support", icon: "🎧" },
    ],
    categories: &[
        Category {
            name: "Avionics & Instruments",
            count: "15,000+",
            image: "https://images.unsplash.com/photo-1559067515-bf7d799b6d4d?q=80&w=800",
        },
        Category {
            name: "Landing Gear",
            count: "4,500+",
            image: "https://images.unsplash.com/photo-1524592714635-d77511072bbd?q=80&w=800",
        },
        Category {
            name: "Turbine Components",
            count: "8,200+",
            image: "https://images.unsplash.com/photo-1584844043086-507b09094013?q=80&w=800",
        },
        Category {
            name: "Rotables",
            count: "12,000+",
            image: "https://images.unsplash.com/photo-1620903139850-b64756242c50?q=80&w=800",
        },
        Category {
            name: "Hydraulic Systems",
            count: "3,800+",
            image: "https://images.unsplash.com/photo-1535620650048-31b19910e785?q=80&w=800",
        },
        Category {
            name: "Airframe Structural",
            count: "25,000+",
            image: "https://images.unsplash.com/photo-1505459668311-8dfac7952bf0?q=80&w=800",
        },
    ],
    login_link: None,
    signup_link: None,
    catalog_link: None,
    card_link: None,
};

#[function_component(AviationParts)]
pub fn aviation_parts() -> Html {
    html! { <ServicePage content={AVIATION_PARTS} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_shape_is_complete() {
        assert_eq!(AVIATION_PARTS.title, "Aviation Parts");
        assert_eq!(AVIATION_PARTS.stats.len(), 4);
        assert_eq!(AVIATION_PARTS.features.len(), 4);
        assert_eq!(AVIATION_PARTS.categories.len(), 6);
    }

    #[test]
    fn no_portal_links_are_configured() {
        assert_eq!(AVIATION_PARTS.login_link, None);
        assert_eq!(AVIATION_PARTS.signup_link, None);
        assert_eq!(AVIATION_PARTS.catalog_link, None);
        assert_eq!(AVIATION_PARTS.card_link, None);
    }
}
