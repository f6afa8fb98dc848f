use yew::prelude::*;

use crate::components::service_page::{Category, Feature, ServiceContent, ServicePage, Stat};

pub const HEAVY_MACHINERY: ServiceContent = ServiceContent {
    title: "Heavy Machinery",
    subtitle: "Industrial strength sourcing for construction, mining, and agricultural \
               equipment. Minimize downtime, maximize output.",
    hero_image: "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?q=80&w=2000",
    description: "Keep your operations moving with robust supply chains for heavy equipment. \
                  We specialize in hard-to-find components for legacy and modern industrial \
                  fleets.",
    stats: &[
        Stat { value: 10, suffix: "M+", label: "Industrial Parts" },
        Stat { value: 300, suffix: "+", label: "OEM Manufacturers" },
        Stat { value: 50, suffix: "+", label: "Heavy Sectors" },
        Stat { value: 98, suffix: "%", label: "Fulfillment Rate" },
    ],
    features: &[
        Feature { title: "OEM & Aftermarket", desc: "Flexible sourcing options", icon: "🌐" },
        Feature { title: "Heavy Duty Certified", desc: "Components built for extreme loads", icon: "🛡️" },
        Feature { title: "Site Delivery", desc: "Direct-to-site logistics capability", icon: "🚚" },
        Feature { title: "Fleet Support", desc: "Maintenance planning assistance", icon: "🎧" },
    ],
    categories: &[
        Category {
            name: "Hydraulic Cylinders",
            count: "5,000+",
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=800",
        },
        Category {
            name: "Undercarriage",
            count: "3,500+",
            image: "https://images.unsplash.com/photo-1580901368919-7738ef30fca0?q=80&w=800",
        },
        Category {
            name: "Power Train",
            count: "4,200+",
            image: "https://images.unsplash.com/photo-1533240332313-0db49b459ad6?q=80&w=800",
        },
        Category {
            name: "Ground Engaging",
            count: "7,000+",
            image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?q=80&w=800",
        },
        Category {
            name: "Cooling Systems",
            count: "2,800+",
            image: "https://images.unsplash.com/photo-1574689049597-7e6c033fe545?q=80&w=800",
        },
        Category {
            name: "Filters & Fluids",
            count: "15,000+",
            image: "https://images.unsplash.com/photo-1626729797525-38eb52f52516?q=80&w=800",
        },
    ],
    login_link: None,
    signup_link: None,
    catalog_link: None,
    card_link: None,
};

#[function_component(HeavyMachinery)]
pub fn heavy_machinery() -> Html {
    html! { <ServicePage content={HEAVY_MACHINERY} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_shape_is_complete() {
        assert_eq!(HEAVY_MACHINERY.title, "Heavy Machinery");
        assert_eq!(HEAVY_MACHINERY.stats.len(), 4);
        assert_eq!(HEAVY_MACHINERY.features.len(), 4);
        assert_eq!(HEAVY_MACHINERY.categories.len(), 6);
    }
}
