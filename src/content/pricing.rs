//! Pricing plans and FAQ.

#[derive(Debug)]
pub struct Plan {
    pub name: &'static str,
    pub build: &'static str,
    pub care: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub badge: Option<&'static str>,
    pub highlighted: bool,
}

#[derive(Debug)]
pub struct PortalPlan {
    pub upfront: &'static str,
    pub hybrid: &'static str,
    pub inclusions: &'static [&'static str],
}

#[derive(Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        build: "$500–$1,000",
        care: "$150–$200/mo",
        summary: "Launch fast with a beautiful small site, hosting, updates, and foundational SEO.",
        features: &[
            "Discovery call + content planning",
            "Custom design system with copy support",
            "Uptime monitoring + security patching",
            "Monthly analytics snapshots",
        ],
        badge: None,
        highlighted: false,
    },
    Plan {
        name: "Growth",
        build: "$3,000+",
        care: "$199/mo",
        summary: "A full-featured site with blog, lead funnels, and quarterly optimization.",
        features: &[
            "Component-driven Next.js build",
            "Blog setup + editorial calendar kickoff",
            "CRM + automation integrations",
            "Quarterly strategy + conversion reviews",
        ],
        badge: Some("Most popular"),
        highlighted: true,
    },
    Plan {
        name: "Scale",
        build: "Custom",
        care: "Retainer",
        summary: "Advanced integrations, multi-brand sites, portals, or product-led growth work.",
        features: &[
            "Portals, dashboards, or AI concierge",
            "Accessibility + security reviews",
            "Dedicated sprint cadence + roadmap",
            "Documentation, training, and support",
        ],
        badge: None,
        highlighted: false,
    },
];

pub static PORTAL_PLAN: PortalPlan = PortalPlan {
    upfront: "$6,499 one-time",
    hybrid: "$2,499 upfront + $349/mo (24-month lock)",
    inclusions: &[
        "Member/resident portal with secure logins",
        "Document library + announcements",
        "Concierge content posting (send it, it’s live)",
        "Support inbox with next-business-day response",
        "Quarterly accessibility + SEO checks",
    ],
};

pub static FAQS: &[Faq] = &[
    Faq {
        question: "Can you work with our existing content?",
        answer: "Yes. I’ll audit what you have, identify gaps, and help reshape the copy so it reads like a premium offer—not a list of features.",
    },
    Faq {
        question: "Do you do WordPress or Webflow?",
        answer: "Most builds ship in Next.js, but I’ll recommend the right tool for your team’s editing needs and long-term maintainability.",
    },
    Faq {
        question: "What do you need from us?",
        answer: "One main point of contact, quick feedback on weekly checkpoints, and any brand assets/content you already have.",
    },
    Faq {
        question: "What if we need ongoing help?",
        answer: "Care plans cover maintenance, updates, and iteration—plus optional growth sprints for SEO and conversion work.",
    },
];
