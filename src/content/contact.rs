//! Contact page copy and the select options of the contact form.

#[derive(Debug)]
pub struct Expectation {
    pub label: &'static str,
    pub value: &'static str,
}

/// One `<option>` of a form select.
#[derive(Debug)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub static EXPECTATIONS: &[Expectation] = &[
    Expectation { label: "Response time", value: "Within 1 business day" },
    Expectation { label: "Typical build window", value: "4–6 weeks" },
    Expectation { label: "Best call hours", value: "Mon–Thu • 9am–5pm ET" },
];

pub static PROJECT_TYPES: &[SelectOption] = &[
    SelectOption { value: "smb-website", label: "SMB Website Build or Redesign" },
    SelectOption { value: "hoa-website", label: "HOA / Community Website" },
    SelectOption { value: "marketing-seo", label: "Marketing & SEO Engagement" },
    SelectOption { value: "ai-integration", label: "AI / Automation Project" },
    SelectOption { value: "other", label: "Other (Tell me more)" },
];

pub static BUDGETS: &[SelectOption] = &[
    SelectOption { value: "subscription", label: "Subscription (under $500 upfront)" },
    SelectOption { value: "500-3k", label: "$500 - $3,000" },
    SelectOption { value: "3k-8k", label: "$3,000 - $8,000" },
    SelectOption { value: "8k-plus", label: "$8,000+" },
];

pub static TIMELINES: &[SelectOption] = &[
    SelectOption { value: "rush", label: "Rush (0-4 weeks)" },
    SelectOption { value: "standard", label: "Standard (1-3 months)" },
    SelectOption { value: "flexible", label: "Flexible / exploring" },
];

/// Maps the `?type=` query shortcut to a project type value.
pub fn preselected_project_type(kind: Option<&str>) -> Option<&'static str> {
    match kind {
        Some("hoa") => Some("hoa-website"),
        Some("smb") => Some("smb-website"),
        _ => None,
    }
}
