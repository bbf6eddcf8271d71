//! Copy blocks for the home page.

use super::Link;

#[derive(Debug)]
pub struct ProofHighlight {
    pub value: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug)]
pub struct AudienceSegment {
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Debug)]
pub struct ServiceTrack {
    pub kicker: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
    pub stat: &'static str,
    pub href: &'static str,
}

/// A titled paragraph; used for process steps and support cards.
#[derive(Debug)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// A four-week launch plan shown as a timeline.
#[derive(Debug)]
pub struct LaunchPlan {
    pub kicker: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub weeks: &'static [&'static str],
}

pub static HERO_POINTS: &[&str] = &[
    "Designer, developer, and marketer in one—no agency handoffs or finger-pointing.",
    "Launch in 4-6 weeks with conversion-optimized design, automations, and SEO foundations.",
    "Local-first support with on-site workshops across NEPA & the Poconos when you need them.",
];

pub static LAUNCH_PLANS: &[LaunchPlan] = &[
    LaunchPlan {
        kicker: "Community & HOA option",
        title: "30-day launch for associations & community organizations",
        summary: "If you’re modernizing an HOA, a resident-first portal keeps bylaws, dues, amenities, and emergency updates in one reliable place. Here’s how the first month stays on track.",
        weeks: &[
            "Board kickoff workshop, content audit, and resident feedback review.",
            "Interactive portal prototype with your association’s branding and navigation preview.",
            "Next.js build, resident account import, and automated alerts wiring.",
            "Board walkthrough, resident communications toolkit, and go-live checklist.",
        ],
    },
    LaunchPlan {
        kicker: "Business growth sprint",
        title: "A 4-week website refresh that lifts bookings fast",
        summary: "Service businesses, retailers, and professional firms need leads flowing while the site evolves. This sprint keeps marketing live, tunes messaging, and wires automation so every inquiry lands in the right place.",
        weeks: &[
            "Positioning workshop, analytics baseline, and conversion goal alignment.",
            "Homepage and services redesign with copy and visual hierarchy tuned for trust.",
            "Lead capture upgrades, CRM and automation wiring, plus a targeted landing page launch.",
            "Performance dashboard walkthrough and next-quarter experiment backlog.",
        ],
    },
];

pub static PROOF_HIGHLIGHTS: &[ProofHighlight] = &[
    ProofHighlight {
        value: "32%",
        label: "lift in qualified bookings within 90 days",
        detail: "Average client result after website refresh",
    },
    ProofHighlight {
        value: "4-6 weeks",
        label: "average launch timeline for most projects",
        detail: "Strategy, design, development, QA",
    },
    ProofHighlight {
        value: "95+",
        label: "Lighthouse performance score on every build",
        detail: "Fast, accessible, SEO-ready from day one",
    },
];

pub static AUDIENCE_SEGMENTS: &[AudienceSegment] = &[
    AudienceSegment {
        tag: "Business",
        title: "Small Business Websites",
        description: "Look established, book more projects, and capture leads automatically—without hiring an in-house team.",
        highlights: &[
            "Messaging workshop & brand positioning",
            "SEO-ready architecture from day one",
            "Conversion-focused design & analytics",
        ],
        primary_cta: Link { label: "Explore Business Solutions", href: "/small-business" },
        secondary_cta: Link { label: "See case studies", href: "/work#small-business" },
    },
    AudienceSegment {
        tag: "Organizations",
        title: "HOA Portals & Community Sites",
        description: "Give residents a single, secure home for documents, alerts, and support—even when board volunteers rotate.",
        highlights: &[
            "Resident accounts with approvals",
            "Document concierge service",
            "Emergency + seasonal announcements",
        ],
        primary_cta: Link { label: "See HOA Packages", href: "/hoa" },
        secondary_cta: Link { label: "View HOA features", href: "/pricing#hoa" },
    },
];

pub static SERVICE_TRACKS: &[ServiceTrack] = &[
    ServiceTrack {
        kicker: "Launch & Refresh",
        title: "Websites shaped around conversions",
        summary: "Discovery, messaging, and high-fidelity design rolled straight into a type-safe Next.js build.",
        bullets: &[
            "Competitive + audience research",
            "Component library + CMS setup",
            "Accessibility + performance QA",
        ],
        stat: "Typical timeline: 4–6 weeks",
        href: "/services#capabilities",
    },
    ServiceTrack {
        kicker: "Keep Growing",
        title: "Marketing & SEO continuums",
        summary: "Monthly and quarterly sprints that mix SEO, landing pages, and analytics so you always know what’s working.",
        bullets: &[
            "Keyword research & editorial calendar",
            "Conversion experiments + reporting",
            "Marketing automation tune-ups",
        ],
        stat: "Ideal cadence: monthly or quarterly",
        href: "/services#capabilities",
    },
    ServiceTrack {
        kicker: "Automation & Portals",
        title: "AI chat, resident hubs, and internal tools",
        summary: "Practical automation layered onto your workflows—no gimmicks, just faster responses and happier users.",
        bullets: &[
            "Resident + admin permissions",
            "Chat concierge & FAQ training",
            "Workflow automation + CRM sync",
        ],
        stat: "Best for HOAs + multi-location teams",
        href: "/services#hoa",
    },
];

pub static PROCESS: &[Step] = &[
    Step {
        title: "Discover & Plan",
        description: "Stakeholder interviews, analytics review, and success metrics that guide every design and development decision.",
    },
    Step {
        title: "Design & Preview",
        description: "Interactive prototypes with real copy so your team can react quickly and align before a line of code ships.",
    },
    Step {
        title: "Build, Launch, Grow",
        description: "Production-ready Next.js build, launch checklist, and ongoing care that keeps the experience sharp.",
    },
];

pub static LOCAL_SUPPORT: &[Step] = &[
    Step {
        title: "Regional coverage",
        description: "On-site sessions across the Poconos, Lehigh Valley, Scranton/WB, and Northern NJ.",
    },
    Step {
        title: "Responsive communication",
        description: "Same-day email replies and shared Slack for active clients—no ticket purgatory.",
    },
    Step {
        title: "Trusted partners",
        description: "Collaborations with local creatives, photographers, and drone teams when you need extra firepower.",
    },
];
