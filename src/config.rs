//! Hard-coded external destinations. The parts portal is a third-party
//! system; this site only redirects the browser to it.

pub const PORTAL_LOGIN_URL: &str = "https://abcp82044.noda.pro/";
pub const PORTAL_SIGNUP_URL: &str = "https://abcp82044.noda.pro/reg";
pub const PORTAL_CATALOG_URL: &str = "https://abcp82044.noda.pro/auto2dV2";
pub const PORTAL_CARD_URL: &str = "https://abcp82044.noda.pro/carbase";

pub const CONTACT_EMAIL: &str = "info@partsform.com";
pub const HEADQUARTERS: &str =
    "Dubai Silicon Oasis, DDP, Building A2, Dubai, United Arab Emirates";
pub const SUPPORT_HOURS: &str = "Mon - Fri: 09:00 - 18:00 (GST)";
