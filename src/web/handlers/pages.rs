//! Static marketing pages: home, about, services, pricing, legal, landing pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use super::layout::Layout;
use crate::content::about::{TOOLBOX, VALUES, WORKING_STEPS};
use crate::content::home::{
    AUDIENCE_SEGMENTS, AudienceSegment, HERO_POINTS, LAUNCH_PLANS, LOCAL_SUPPORT, LaunchPlan,
    PROCESS, PROOF_HIGHLIGHTS, ProofHighlight, SERVICE_TRACKS, ServiceTrack, Step,
};
use crate::content::landing::{HOA, LandingPage, SMALL_BUSINESS};
use crate::content::legal::{LegalDocument, PRIVACY, TERMS};
use crate::content::pricing::{FAQS, Faq, PLANS, PORTAL_PLAN, Plan, PortalPlan};
use crate::content::services::{
    AUDIENCE_MATRIX, AudienceFit, ENGAGEMENT_HIGHLIGHTS, HOA_CONCIERGE, SERVICE_SECTIONS,
    ServiceSection,
};
use crate::content::site::Hero;
use crate::content::{CASE_STUDIES, CaseStudy, SITE};
use crate::seo::PageMeta;
use crate::seo::schema::{self, Crumb, HOME};
use crate::state::AppState;
use crate::utils::visual::prism_background;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub hero: &'static Hero,
    pub hero_points: &'static [&'static str],
    pub launch_plans: &'static [LaunchPlan],
    pub proof: &'static [ProofHighlight],
    pub segments: &'static [AudienceSegment],
    pub tracks: &'static [ServiceTrack],
    pub testimonials: &'static [CaseStudy],
    pub process: &'static [Step],
    pub local_support: &'static [Step],
    pub background: String,
}

/// Renders the home page with the hero copy of the configured variant.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let meta = PageMeta::new(
        "Premium Web Design That Converts",
        SITE.description,
        "/",
    );

    HomeTemplate {
        layout: Layout::new(meta, &[HOME]),
        hero: SITE.hero_for(state.variant),
        hero_points: HERO_POINTS,
        launch_plans: LAUNCH_PLANS,
        proof: PROOF_HIGHLIGHTS,
        segments: AUDIENCE_SEGMENTS,
        tracks: SERVICE_TRACKS,
        testimonials: CASE_STUDIES,
        process: PROCESS,
        local_support: LOCAL_SUPPORT,
        background: prism_background("home"),
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub values: &'static [Step],
    pub working_steps: &'static [&'static str],
    pub toolbox: &'static [&'static str],
    pub background: String,
}

/// `GET /about`
pub async fn about_handler() -> impl IntoResponse {
    let meta = PageMeta::new(
        "About",
        format!(
            "{} is the designer, developer, and marketer behind {}. One partner from strategy to launch.",
            SITE.owner, SITE.name
        ),
        "/about",
    );

    AboutTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new("About", "/about")]),
        values: VALUES,
        working_steps: WORKING_STEPS,
        toolbox: TOOLBOX,
        background: prism_background("about"),
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub layout: Layout,
    pub sections: &'static [ServiceSection],
    pub highlights: &'static [Step],
    pub matrix: &'static [AudienceFit],
    pub concierge: &'static [&'static str],
    pub background: String,
}

/// `GET /services`
pub async fn services_handler() -> impl IntoResponse {
    let meta = PageMeta::new(
        "Services",
        "Web strategy, design, development, SEO, and automation for small businesses and HOA boards.",
        "/services",
    );

    ServicesTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new("Services", "/services")]),
        sections: SERVICE_SECTIONS,
        highlights: ENGAGEMENT_HIGHLIGHTS,
        matrix: AUDIENCE_MATRIX,
        concierge: HOA_CONCIERGE,
        background: prism_background("services"),
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub layout: Layout,
    pub plans: &'static [Plan],
    pub portal: &'static PortalPlan,
    pub faqs: &'static [Faq],
    pub background: String,
}

/// `GET /pricing`
pub async fn pricing_handler() -> impl IntoResponse {
    let meta = PageMeta::new(
        "Pricing",
        "Transparent build and care pricing for business websites and HOA portals.",
        "/pricing",
    );

    PricingTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new("Pricing", "/pricing")]),
        plans: PLANS,
        portal: &PORTAL_PLAN,
        faqs: FAQS,
        background: prism_background("pricing"),
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "legal.html")]
pub struct LegalTemplate {
    pub layout: Layout,
    pub document: &'static LegalDocument,
}

fn legal_page(document: &'static LegalDocument) -> LegalTemplate {
    let meta = PageMeta::new(document.title, document.description, document.path);

    LegalTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new(document.title, document.path)])
            .without_cta(),
        document,
    }
}

/// `GET /legal/privacy`
pub async fn privacy_handler() -> impl IntoResponse {
    legal_page(&PRIVACY)
}

/// `GET /legal/terms`
pub async fn terms_handler() -> impl IntoResponse {
    legal_page(&TERMS)
}

#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub layout: Layout,
    pub page: &'static LandingPage,
    pub background: String,
}

/// Audience landing page with a `Service` JSON-LD block.
fn landing_page(page: &'static LandingPage) -> LandingTemplate {
    let meta = PageMeta::new(page.title, page.description, page.path);
    let layout = Layout::new(meta, &[HOME, Crumb::new(page.badge, page.path)])
        .with_schema(&schema::service(&page.service));

    LandingTemplate {
        layout,
        page,
        background: prism_background(page.path.trim_start_matches('/')),
    }
}

/// `GET /hoa`
pub async fn hoa_handler() -> impl IntoResponse {
    landing_page(&HOA)
}

/// `GET /small-business`
pub async fn small_business_handler() -> impl IntoResponse {
    landing_page(&SMALL_BUSINESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_carries_service_schema() {
        let page = landing_page(&HOA);
        assert_eq!(page.layout.schemas.len(), 3);
        assert!(page.layout.schemas[2].contains("\"@type\":\"Service\""));
        assert_eq!(page.layout.meta.canonical, "https://multimedium.dev/hoa");
    }

    #[test]
    fn test_legal_pages_have_no_cta() {
        assert!(!legal_page(&PRIVACY).layout.show_cta);
        assert_eq!(legal_page(&TERMS).document.path, "/legal/terms");
    }
}
