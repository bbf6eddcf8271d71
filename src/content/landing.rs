//! Copy for the two audience landing pages (`/hoa`, `/small-business`).

use super::Link;
use super::home::Step;

/// Everything a landing page renders, apart from layout chrome.
#[derive(Debug)]
pub struct LandingPage {
    pub path: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub features_title: &'static str,
    pub features: &'static [Step],
    pub support_title: &'static str,
    pub support_intro: &'static str,
    pub support: &'static [Step],
    pub steps_title: &'static str,
    pub steps: &'static [&'static str],
    pub closing_title: &'static str,
    pub closing_text: &'static str,
    pub closing_cta: Link,
    pub service: ServiceOffer,
}

/// Data for the page's `Service` JSON-LD block.
#[derive(Debug)]
pub struct ServiceOffer {
    pub name: &'static str,
    pub description: &'static str,
    pub service_types: &'static [&'static str],
    pub pricing_anchor: &'static str,
}

pub static HOA: LandingPage = LandingPage {
    path: "/hoa",
    badge: "HOA Websites & Portals",
    title: "HOA Websites & Resident Portals",
    description: "Modern HOA websites with resident portals, document libraries, alerts, and concierge support tailored to boards across the Poconos and beyond.",
    headline: "A resident portal your board never has to babysit",
    intro: "Boards across the Poconos share the same pain: residents can’t find documents, communication is scattered, and volunteers don’t have time to post updates. Multimedium.dev centralizes everything and provides concierge support so bylaws, dues notices, amenities, and emergency alerts stay current.",
    primary_cta: Link { label: "Request a live demo", href: "/contact?type=hoa" },
    secondary_cta: Link { label: "Review HOA pricing", href: "/pricing#hoa" },
    features_title: "Portal features",
    features: &[
        Step {
            title: "Resident accounts",
            description: "Role-based access for boards, committees, and homeowners with audit history on every update.",
        },
        Step {
            title: "Document library",
            description: "Organize minutes, bylaws, forms, and newsletters with search and expiration reminders.",
        },
        Step {
            title: "Announcements & alerts",
            description: "Pin urgent notices, schedule recurring reminders, and trigger SMS/email alerts when needed.",
        },
        Step {
            title: "Events & amenities",
            description: "Manage event RSVPs, amenity reservations, and maintenance schedules from one dashboard.",
        },
    ],
    support_title: "Concierge support",
    support_intro: "HOA volunteers have day jobs. Multimedium.dev acts as your digital secretary—publishing updates, routing maintenance tickets, and keeping information easy to find.",
    support: &[
        Step {
            title: "Content concierge",
            description: "Send PDFs, photos, or quick notes—Haydn posts and formats everything so community updates go live the same day.",
        },
        Step {
            title: "Resident help desk",
            description: "Support inbox with 24-hour response goals and escalation paths for property management.",
        },
        Step {
            title: "Board meeting prep",
            description: "Monthly adoption reports, agenda talking points, and highlight reels ready for trustees or management partners.",
        },
        Step {
            title: "Compliance checks",
            description: "Quarterly review of ADA, privacy, and records policies so the board stays in good standing.",
        },
        Step {
            title: "Adoption insights",
            description: "Monthly board-ready dashboards with recommendations to keep residents logging in.",
        },
    ],
    steps_title: "Onboarding in six steps",
    steps: &[
        "Discovery session with board leadership and property management",
        "Resident survey and content inventory with concierge assistance",
        "Design preview with your association-branded portal walkthrough",
        "Next.js build, resident import, permissions, and automated alerts",
        "Launch communications toolkit, training, and office hours",
        "30-day adoption dashboard review with next-quarter priorities",
    ],
    closing_title: "See the portal in action",
    closing_text: "Request a walkthrough tailored to your current tools, communication pain points, and budget.",
    closing_cta: Link { label: "Schedule a demo", href: "/contact?type=hoa" },
    service: ServiceOffer {
        name: "HOA Website & Resident Portal",
        description: "Resident portals, document libraries, alerts, and concierge support for homeowner associations and community associations.",
        service_types: &["HOA website", "Resident portal", "Community communications"],
        pricing_anchor: "/pricing#hoa",
    },
};

pub static SMALL_BUSINESS: LandingPage = LandingPage {
    path: "/small-business",
    badge: "Small Business Websites",
    title: "Small Business Websites",
    description: "High-converting websites for small businesses that need trusted positioning, lead capture, and ongoing marketing support.",
    headline: "Make your local business look established—and stay booked",
    intro: "Multimedium.dev turns service providers, boutiques, and professional firms into trusted brands with conversion-ready websites, SEO foundations, and automations that save time—the same polish HOA boards rely on for resident portals.",
    primary_cta: Link { label: "Book a strategy call", href: "/contact?type=smb" },
    secondary_cta: Link { label: "See client results", href: "/work#small-business" },
    features_title: "Growth outcomes",
    features: &[
        Step {
            title: "Launch a polished presence fast",
            description: "Brand discovery, messaging, and design sprints produce a site that feels established—even if your team is small. Typical timeline: 4–6 weeks.",
        },
        Step {
            title: "Capture and nurture every lead",
            description: "Strategic CTAs, forms, and automations move inquiries into your CRM or inbox with no manual re-entry.",
        },
        Step {
            title: "See what’s working",
            description: "Analytics dashboards and quarterly reviews show the channels and pages that convert best.",
        },
    ],
    support_title: "Service pillars",
    support_intro: "One partner for positioning, design, build, and the optimization that follows launch.",
    support: &[
        Step {
            title: "Positioning & copy",
            description: "Workshop your value props, offers, and proof so visitors know you’re the safe choice.",
        },
        Step {
            title: "Design & build",
            description: "Responsive Next.js sites with accessible UI patterns, fast load times, and schema markup baked in.",
        },
        Step {
            title: "Optimization",
            description: "Content updates, landing pages, and SEO improvements that keep you ahead locally and in search.",
        },
    ],
    steps_title: "Launch checklist",
    steps: &[
        "Brand discovery workshop + competitor review",
        "Messaging, sitemap, and wireframes signed off",
        "High-fidelity designs and staged preview",
        "Next.js build with analytics + automations",
        "QA, accessibility, and launch playbook",
    ],
    closing_title: "Ready to look established?",
    closing_text: "Share where your business is today and where you want it to be. You’ll get a tailored plan and timeline within one business day.",
    closing_cta: Link { label: "Book a strategy call", href: "/contact?type=smb" },
    service: ServiceOffer {
        name: "Small Business Website Design & Development",
        description: "Conversion-focused website design, development, and marketing support for small businesses across the Poconos and Northeastern Pennsylvania.",
        service_types: &["Web design", "Web development", "Local SEO", "Marketing automation"],
        pricing_anchor: "/pricing#smb",
    },
};
