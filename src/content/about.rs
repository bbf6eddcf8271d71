//! About page copy.

use super::home::Step;

pub static VALUES: &[Step] = &[
    Step {
        title: "Design × engineering",
        description: "A cohesive system beats a pretty page. Every build connects narrative, UI, and code so the site stays clean as you grow.",
    },
    Step {
        title: "Performance + accessibility",
        description: "Speed and accessibility aren’t “nice-to-haves.” They’re trust signals—and they keep your site usable for everyone.",
    },
    Step {
        title: "Momentum over perfectionism",
        description: "Ship the right version fast, then iterate what converts. The goal is outcomes, not endless design loops.",
    },
];

pub static WORKING_STEPS: &[&str] = &[
    "Short workshop to lock positioning + page plan",
    "High-fidelity design with real copy (not lorem ipsum)",
    "Component build + CMS / editing workflow",
    "Launch checklist, analytics, and next-step roadmap",
];

pub static TOOLBOX: &[&str] = &[
    "Next.js • TypeScript",
    "Tailwind CSS • Component systems",
    "Framer Motion • Micro-interactions",
    "Sanity • Contentful • MDX",
    "Vercel • Supabase",
    "Resend • Postmark • Twilio",
    "Zapier • Make.com • n8n",
    "GA4 • Search Console • Dashboards",
];
