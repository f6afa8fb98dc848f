use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::cta_button::{CtaButton, CtaTarget};

/// Display-only stat figure shown in the hero overlay.
#[derive(Clone, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub count: &'static str,
    pub image: &'static str,
}

/// Everything a service landing page supplies to the shared template.
///
/// Outbound links are optional; pages without portal access fall back to
/// placeholder anchors.
#[derive(Clone, PartialEq)]
pub struct ServiceContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hero_image: &'static str,
    pub description: &'static str,
    pub stats: &'static [Stat],
    pub features: &'static [Feature],
    pub categories: &'static [Category],
    pub login_link: Option<&'static str>,
    pub signup_link: Option<&'static str>,
    pub catalog_link: Option<&'static str>,
    pub card_link: Option<&'static str>,
}

const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    ("01", "Search Parts", "Global inventory access"),
    ("02", "Compare Options", "Price & lead-time analysis"),
    ("03", "Place Order", "Secure transaction flow"),
    ("04", "Fast Delivery", "Tracked global logistics"),
];

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub content: ServiceContent,
}

fn category_card(category: &Category) -> Html {
    html! {
        <>
            <img src={category.image} alt={category.name} />
            <div class="category-overlay"></div>
            <div class="category-info">
                <h3>{ category.name }</h3>
                <span class="category-count">{ category.count }{ " Parts" }</span>
            </div>
        </>
    }
}

/// Shared layout for the three service landing pages: hero with stats,
/// feature list, category grid and the procurement process banner.
#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let content = &props.content;
    let login = content.login_link.unwrap_or("#");
    let signup = content.signup_link.unwrap_or("#");
    let catalog = content.catalog_link.or(content.login_link).unwrap_or("#");

    html! {
        <div class="service-page">
            <section class="service-hero">
                <div class="service-hero-background">
                    <img src={content.hero_image} alt={content.title} />
                    <div class="service-hero-shade"></div>
                </div>

                <div class="service-hero-content">
                    <h1>{ content.title }</h1>
                    <p class="service-subtitle">{ content.subtitle }</p>

                    <div class="service-hero-actions">
                        <CtaButton
                            target={CtaTarget::External(AttrValue::from(login))}
                            class="cta-primary"
                        >
                            { "Login" }
                        </CtaButton>
                        <CtaButton
                            target={CtaTarget::External(AttrValue::from(signup))}
                            class="cta-outline"
                        >
                            { "Sign Up →" }
                        </CtaButton>
                    </div>

                    <div class="service-stats">
                        {
                            for content.stats.iter().map(|stat| html! {
                                <div class="service-stat" key={stat.label}>
                                    <div class="stat-value">
                                        <AnimatedNumber value={stat.value} suffix={stat.suffix} />
                                    </div>
                                    <div class="stat-label">{ stat.label }</div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="service-offer">
                <div class="offer-grid">
                    <div class="offer-text">
                        <span class="section-eyebrow">{ "Why Choose Us" }</span>
                        <h2>{ "Comprehensive Solutions" }</h2>
                        <p class="offer-description">{ content.description }</p>

                        <div class="feature-cards">
                            {
                                for content.features.iter().map(|feature| html! {
                                    <div class="feature-card" key={feature.title}>
                                        <div class="feature-icon">{ feature.icon }</div>
                                        <div>
                                            <h4>{ feature.title }</h4>
                                            <p>{ feature.desc }</p>
                                        </div>
                                    </div>
                                })
                            }
                        </div>
                    </div>

                    <div class="offer-visual">
                        <img src="/assets/engineering.png" alt="Engineering" />
                        <div class="quality-card">
                            <div class="quality-heading">
                                <span class="quality-check">{ "✓" }</span>
                                <span>{ "Certified Quality" }</span>
                            </div>
                            <p>
                                { "Every part undergoes rigorous multi-point inspection \
                                   protocols before listing." }
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="service-categories">
                <div class="categories-header">
                    <div>
                        <h2>{ "Product Categories" }</h2>
                        <p>{ "Browse our extensive inventory by system." }</p>
                    </div>
                    <CtaButton
                        target={CtaTarget::External(AttrValue::from(catalog))}
                        class="cta-dark"
                    >
                        { "View Full Catalog →" }
                    </CtaButton>
                </div>

                <div class="category-grid">
                    {
                        for content.categories.iter().map(|category| {
                            match content.card_link {
                                Some(link) => html! {
                                    <CtaButton
                                        key={category.name}
                                        target={CtaTarget::External(AttrValue::from(link))}
                                        class="category-card"
                                    >
                                        { category_card(category) }
                                    </CtaButton>
                                },
                                None => html! {
                                    <div class="category-card" key={category.name}>
                                        { category_card(category) }
                                    </div>
                                },
                            }
                        })
                    }
                </div>
            </section>

            <section class="process-banner">
                <h2>{ "Seamless Procurement Process" }</h2>
                <div class="process-grid">
                    {
                        for PROCESS_STEPS.iter().map(|&(step, title, desc)| html! {
                            <div class="process-step" key={step}>
                                <div class="process-number">{ step }</div>
                                <div class="process-rule"></div>
                                <h3>{ title }</h3>
                                <p>{ desc }</p>
                            </div>
                        })
                    }
                </div>
            </section>
        </div>
    }
}
