//! Services page copy.

use super::Link;
use super::home::Step;

#[derive(Debug)]
pub struct ServiceSection {
    pub title: &'static str,
    pub description: &'static str,
    pub outcome: &'static str,
    pub bullets: &'static [&'static str],
    pub cta: Link,
}

#[derive(Debug)]
pub struct AudienceFit {
    pub audience: &'static str,
    pub priorities: &'static [&'static str],
    pub recommended: &'static [&'static str],
}

pub static SERVICE_SECTIONS: &[ServiceSection] = &[
    ServiceSection {
        title: "Web Strategy & Design",
        description: "Shape a clear story, navigation, and visual language around what makes you the safe choice.",
        outcome: "Clients typically approve the final concept in one round because they saw real copy from day one.",
        bullets: &[
            "Stakeholder + audience interviews",
            "Messaging + conversion plan",
            "Component-based design system",
        ],
        cta: Link { label: "See design approach", href: "/work" },
    },
    ServiceSection {
        title: "Next.js Development",
        description: "Type-safe, maintainable builds with analytics, SEO, and content tooling wired in from the start.",
        outcome: "Lighthouse 90+ and CMS onboarding ready before launch—no scramble after go-live.",
        bullets: &[
            "App Router architecture",
            "Sanity / Contentful / Storyblok setup",
            "Testing + deployment playbooks",
        ],
        cta: Link { label: "Review build checklist", href: "/pricing#plans" },
    },
    ServiceSection {
        title: "Marketing & SEO Sprints",
        description: "Fill the funnel with the right traffic using quarterly and monthly experiments you can measure.",
        outcome: "Typical retainer clients see 20–35% growth in form submissions within the first three months.",
        bullets: &[
            "Keyword + content roadmap",
            "Landing pages + conversion copy",
            "Analytics dashboards + reporting",
        ],
        cta: Link { label: "Explore growth plans", href: "/pricing" },
    },
    ServiceSection {
        title: "Automation & Portals",
        description: "Bring AI and workflow automation into resident support, lead nurture, or internal knowledge bases.",
        outcome: "Boards and teams save 5–10 hours/week by letting bots handle FAQs and routing tasks.",
        bullets: &[
            "AI chat concierge",
            "CRM + ticketing integrations",
            "Governance and guardrail playbooks",
        ],
        cta: Link { label: "Request a demo", href: "/contact?type=hoa" },
    },
];

pub static ENGAGEMENT_HIGHLIGHTS: &[Step] = &[
    Step {
        title: "Strategy, design, build—no handoffs",
        description: "One partner from roadmap to launch, so your board never loses context or waits on another vendor.",
    },
    Step {
        title: "Local commitment",
        description: "On-site workshops across the Poconos, Lehigh Valley, and Northern NJ, plus responsive virtual support.",
    },
    Step {
        title: "Measurable outcomes",
        description: "Dashboards and review sessions that tie traffic and engagement to business or resident goals—and make board updates effortless.",
    },
];

pub static AUDIENCE_MATRIX: &[AudienceFit] = &[
    AudienceFit {
        audience: "Small businesses",
        priorities: &[
            "Conversion-ready website",
            "Local SEO foundation",
            "Marketing automation basics",
        ],
        recommended: &[
            "Web Strategy & Design",
            "Next.js Development",
            "Marketing & SEO Sprints",
        ],
    },
    AudienceFit {
        audience: "HOA & associations",
        priorities: &[
            "Resident portal",
            "Document concierge",
            "Emergency communications",
            "Board-ready reporting",
        ],
        recommended: &[
            "Next.js Development",
            "Automation & Portals",
            "Marketing & SEO Sprints",
        ],
    },
    AudienceFit {
        audience: "Agencies & partner teams",
        priorities: &[
            "Component libraries",
            "Complex integrations",
            "White-label collaboration",
        ],
        recommended: &[
            "Web Strategy & Design",
            "Next.js Development",
            "Automation & Portals",
        ],
    },
];

pub static HOA_CONCIERGE: &[&str] = &[
    "Document posting and version archiving",
    "Resident support inbox with 24h response window",
    "Security updates and uptime monitoring",
    "Quarterly strategy and analytics review",
];
