use gloo_timers::callback::{Interval, Timeout};
use web_sys::SubmitEvent;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::animation::{next_slide, SLIDE_INTERVAL_MS};
use crate::components::cta_button::{CtaButton, CtaTarget};
use crate::config;
use crate::sections::{self, ScrollIntent};
use crate::Route;

const HERO_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=2500&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1474302770737-173ee21bab63?q=80&w=2500&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?q=80&w=2500&auto=format&fit=crop",
];

struct ServiceEntry {
    name: &'static str,
    desc: &'static str,
    image: &'static str,
    route: Route,
}

const HERO_SERVICES: [ServiceEntry; 3] = [
    ServiceEntry {
        name: "Auto Parts",
        desc: "OEM & Aftermarket",
        image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=400",
        route: Route::AutoParts,
    },
    ServiceEntry {
        name: "Aviation Parts",
        desc: "Certified Components",
        image: "https://images.unsplash.com/photo-1474302770737-173ee21bab63?q=80&w=400",
        route: Route::AviationParts,
    },
    ServiceEntry {
        name: "Heavy Machinery",
        desc: "Industrial Equipment",
        image: "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?q=80&w=400",
        route: Route::HeavyMachinery,
    },
];

struct ServiceCard {
    title: &'static str,
    desc: &'static str,
    count: &'static str,
    image: &'static str,
    route: Route,
}

const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Auto Parts",
        desc: "Premium automotive components, OEM & aftermarket.",
        count: "12k+ Parts",
        image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=800",
        route: Route::AutoParts,
    },
    ServiceCard {
        title: "Aviation Parts",
        desc: "Aerospace-grade certified components.",
        count: "8k+ Parts",
        image: "https://images.unsplash.com/photo-1474302770737-173ee21bab63?q=80&w=800",
        route: Route::AviationParts,
    },
    ServiceCard {
        title: "Heavy Parts",
        desc: "Industrial equipment & construction machinery parts.",
        count: "15k+ Parts",
        image: "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?q=80&w=800",
        route: Route::HeavyMachinery,
    },
];

const BANNER_ITEMS: [(&str, &str, &str); 3] = [
    ("🌐", "Global Access", "50+ Countries Served"),
    ("⚡", "Speed", "24-48h Dispatch"),
    ("🛡️", "Trusted", "Certified Suppliers"),
];

const ADVANTAGES: [(&str, &str, &str); 6] = [
    (
        "Global Access",
        "Partsform connects you to verified distributors, dealers, and partners \
         across key global markets — securely and instantly.",
        "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=800",
    ),
    (
        "Real-Time Clarity",
        "Access real-time pricing, lead times, and availability so you can make \
         decisions faster — with full transparency.",
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=800",
    ),
    (
        "Trusted Network",
        "Every transaction is backed by trust, compliance, and accountability. \
         Work only with verified, professional partners.",
        "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=800",
    ),
    (
        "Smart Sourcing",
        "Leverage Partsform's global reach and intelligent system to secure \
         competitive offers — all from one streamlined platform.",
        "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=800",
    ),
    (
        "Seamless Logistics",
        "From inquiry to delivery, we coordinate every stage with precision — \
         ensuring efficiency and reliability across borders.",
        "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?q=80&w=800",
    ),
    (
        "Faster. Smarter. Connected.",
        "Partsform transforms global spare parts trading into a seamless \
         experience — built for professionals who value time and trust.",
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=800",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let slide = use_state(|| 0usize);
    let scroll_intent = use_context::<ScrollIntent>().unwrap();

    // Cross-page section jump requested by the navbar: consume the one-shot
    // message, give the layout a beat to settle, then scroll.
    {
        let scroll_intent = scroll_intent.clone();
        use_effect_once(move || {
            let jump = scroll_intent
                .take()
                .map(|section| Timeout::new(100, move || sections::scroll_into_view(section)));
            move || drop(jump)
        });
    }

    // Hero slideshow. The interval owns the authoritative index and restarts
    // from the first image whenever the page is remounted.
    {
        let slide = slide.clone();
        use_effect_once(move || {
            let mut index = 0usize;
            let interval = Interval::new(SLIDE_INTERVAL_MS, move || {
                index = next_slide(index, HERO_IMAGES.len());
                slide.set(index);
            });
            move || drop(interval)
        });
    }

    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <div class="hero-slides">
                    {
                        for HERO_IMAGES.iter().enumerate().map(|(index, src)| {
                            let class = if index == *slide {
                                "hero-slide visible"
                            } else {
                                "hero-slide"
                            };
                            html! {
                                <img key={index.to_string()} {class} src={*src} alt="Background" />
                            }
                        })
                    }
                </div>
                <div class="hero-shade"></div>

                <div class="hero-content">
                    <div class="hero-copy">
                        <h1>{ "FORMING SUCCESS," }</h1>
                        <h1 class="hero-accent">{ "PART BY PART." }</h1>
                        <p>
                            { "Global trading redefined with clarity, speed & trusted reach \
                               across automotive, aviation and industrial ecosystems." }
                        </p>
                    </div>

                    <div class="hero-services">
                        {
                            for HERO_SERVICES.iter().map(|service| html! {
                                <CtaButton
                                    key={service.name}
                                    target={CtaTarget::Route(service.route.clone())}
                                    class="hero-service-card"
                                >
                                    <img src={service.image} alt={service.name} />
                                    <div class="hero-service-text">
                                        <h3>{ service.name }</h3>
                                        <p>{ service.desc }</p>
                                    </div>
                                    <span class="hero-service-chevron">{ "›" }</span>
                                </CtaButton>
                            })
                        }
                    </div>
                </div>
            </section>

            <div class="precision-banner">
                {
                    for BANNER_ITEMS.iter().map(|&(icon, title, sub)| html! {
                        <div class="banner-item" key={title}>
                            <div class="banner-icon">{ icon }</div>
                            <div>
                                <h3>{ title }</h3>
                                <p>{ sub }</p>
                            </div>
                        </div>
                    })
                }
            </div>

            <section id="about" class="about">
                <div class="about-grid">
                    <div class="about-visual">
                        <img src="/assets/warehouse.png" alt="Warehouse" />
                        <div class="about-stat-card">
                            <span class="about-stat-figure">{ "50M+" }</span>
                            <p>{ "Parts indexed and ready for immediate global dispatch." }</p>
                        </div>
                    </div>

                    <div class="about-copy">
                        <h2>
                            { "Transparent " }
                            <span class="accent">{ "Sourcing Intelligence." }</span>
                        </h2>
                        <p>
                            { "PARTSFORM unifies fragmented automotive, aviation and industrial \
                               parts ecosystems into a transparent trading fabric. Real-time \
                               clarity, trusted data signals and logistics continuity empower \
                               teams to connect, compare and move with confident speed." }
                        </p>
                        <div class="about-features">
                            <div class="about-feature">
                                <div class="about-feature-icon">{ "⬚" }</div>
                                <h4>{ "Smart Sourcing" }</h4>
                                <p>{ "Alternates prediction engine powered by advanced algorithms." }</p>
                            </div>
                            <div class="about-feature">
                                <div class="about-feature-icon">{ "🛡️" }</div>
                                <h4>{ "Compliance" }</h4>
                                <p>{ "Automated ISO/FAA compliance checks on every transaction." }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="services-header">
                    <span class="section-eyebrow">{ "Our Expertise" }</span>
                    <h2>{ "Multi-Sector Catalog" }</h2>
                </div>

                <div class="services-grid">
                    {
                        for SERVICE_CARDS.iter().map(|card| html! {
                            <CtaButton
                                key={card.title}
                                target={CtaTarget::Route(card.route.clone())}
                                class="service-card"
                            >
                                <img src={card.image} alt={card.title} />
                                <div class="service-card-overlay"></div>
                                <div class="service-card-info">
                                    <div class="service-card-head">
                                        <h3>{ card.title }</h3>
                                        <span class="service-card-count">{ card.count }</span>
                                    </div>
                                    <p>{ card.desc }</p>
                                    <span class="service-card-explore">{ "Explore →" }</span>
                                </div>
                            </CtaButton>
                        })
                    }
                </div>
            </section>

            <section id="advantages" class="advantages">
                <h2>{ "Why PARTSFORM" }</h2>
                <div class="advantages-grid">
                    {
                        for ADVANTAGES.iter().map(|&(title, desc, image)| html! {
                            <div class="advantage-card" key={title}>
                                <img src={image} alt={title} />
                                <div class="advantage-overlay"></div>
                                <div class="advantage-info">
                                    <h3>{ title }</h3>
                                    <p>{ desc }</p>
                                </div>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="cta-contact">
                <div class="cta-header">
                    <span class="section-eyebrow">{ "Get Started" }</span>
                    <h2>{ "Ready to Transform" }<br />{ "Your Supply Chain?" }</h2>
                    <p>
                        { "Join the global network of automotive, aviation, and industrial \
                           leaders operating with speed and precision." }
                    </p>
                </div>

                <div id="contact" class="contact-grid">
                    <div class="contact-info">
                        <h3>{ "Contact Information" }</h3>
                        <div class="contact-item">
                            <h4>{ "Global Headquarters" }</h4>
                            <p>{ config::HEADQUARTERS }</p>
                        </div>
                        <div class="contact-item">
                            <h4>{ "Email Enquiries" }</h4>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                { config::CONTACT_EMAIL }
                            </a>
                        </div>
                        <div class="contact-item">
                            <h4>{ "Support Hours" }</h4>
                            <p>{ config::SUPPORT_HOURS }</p>
                        </div>
                    </div>

                    <form class="contact-form" {onsubmit}>
                        <h3>{ "Send us a message" }</h3>
                        <div class="form-row">
                            <label>
                                { "First Name" }
                                <input type="text" placeholder="John" />
                            </label>
                            <label>
                                { "Last Name" }
                                <input type="text" placeholder="Doe" />
                            </label>
                        </div>
                        <label>
                            { "Email Address" }
                            <input type="email" placeholder="john@company.com" />
                        </label>
                        <label>
                            { "Message" }
                            <textarea rows="4" placeholder="How can we help you?"></textarea>
                        </label>
                        <button type="submit" class="cta-dark form-submit">
                            { "Send Message →" }
                        </button>
                    </form>
                </div>
            </section>
        </div>
    }
}
