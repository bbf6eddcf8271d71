//! Privacy policy and terms of service.

#[derive(Debug)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

#[derive(Debug)]
pub struct LegalDocument {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub updated: &'static str,
    pub intro: &'static str,
    pub sections: &'static [LegalSection],
}

pub static PRIVACY: LegalDocument = LegalDocument {
    path: "/legal/privacy",
    title: "Privacy Policy",
    description: "Privacy policy describing how Multimedium.dev collects and protects information shared by visitors, clients, and residents.",
    updated: "February 23, 2024",
    intro: "Multimedium.dev (“we”, “us”, “our”) respects your privacy. This policy outlines how we collect, use, and protect personal information shared through our website and services.",
    sections: &[
        LegalSection {
            heading: "Information We Collect",
            paragraphs: &[
                "We collect information that you voluntarily provide when:",
                "This may include your name, email address, phone number, organization details, project goals, and any additional context you choose to share. For member portals, user data is handled according to the client’s direction and applicable regulations.",
            ],
            bullets: &[
                "Completing contact forms or booking a consultation",
                "Requesting a portal walkthrough",
                "Subscribing to updates or resources",
                "Engaging Multimedium.dev for client services",
            ],
        },
        LegalSection {
            heading: "How We Use Information",
            paragraphs: &[],
            bullets: &[
                "Respond to inquiries and provide proposals",
                "Deliver contracted services and onboarding",
                "Send updates, resources, or maintenance notices",
                "Improve the performance and security of our platforms",
            ],
        },
        LegalSection {
            heading: "Cookies & Analytics",
            paragraphs: &["We may use privacy-friendly analytics (e.g., Plausible or Vercel Analytics) to understand aggregate traffic patterns. These tools do not collect personally identifiable information."],
            bullets: &[],
        },
        LegalSection {
            heading: "Data Sharing",
            paragraphs: &["We do not sell your information. Data is shared only with trusted partners or processors who assist in delivering our services (hosting providers, email services, payment processors) and only to the extent necessary."],
            bullets: &[],
        },
        LegalSection {
            heading: "Data Retention",
            paragraphs: &["Inquiry records and project documentation are retained for as long as needed to support your organization or comply with legal obligations. You may request deletion by contacting us."],
            bullets: &[],
        },
        LegalSection {
            heading: "Security",
            paragraphs: &["We implement reasonable administrative, technical, and physical safeguards to protect personal information. However, no system is completely secure—please share only necessary data."],
            bullets: &[],
        },
        LegalSection {
            heading: "Your Rights",
            paragraphs: &["Depending on your location, you may have rights to access, correct, or delete your personal information. Contact us to exercise these rights."],
            bullets: &[],
        },
        LegalSection {
            heading: "Contact",
            paragraphs: &["Questions about this policy? Email haydn@multimedium.dev or call 570-994-6186."],
            bullets: &[],
        },
    ],
};

pub static TERMS: LegalDocument = LegalDocument {
    path: "/legal/terms",
    title: "Terms of Service",
    description: "Terms governing use of the Multimedium.dev website and the design, development, and portal services it provides.",
    updated: "February 23, 2024",
    intro: "These terms (“Terms”) govern your use of the Multimedium.dev website and any services provided by Multimedium.dev (“we”, “us”, “our”). By accessing our site or engaging our services, you agree to these Terms.",
    sections: &[
        LegalSection {
            heading: "Use of Website",
            paragraphs: &["You agree not to misuse the website or interfere with its normal operation. Content, copy, and visual assets on the site are owned by Multimedium.dev unless otherwise noted and may not be reproduced without consent."],
            bullets: &[],
        },
        LegalSection {
            heading: "Services & Proposals",
            paragraphs: &["Statements of work, proposals, or quotes provided by Multimedium.dev are valid for 30 days unless otherwise noted. Project timelines are estimates and depend on client responsiveness, approvals, and scope."],
            bullets: &[],
        },
        LegalSection {
            heading: "Client Responsibilities",
            paragraphs: &[],
            bullets: &[
                "Provide timely access to stakeholders, content, and required assets",
                "Review deliverables and provide feedback within agreed timelines",
                "Ensure any supplied content does not infringe on third-party rights",
            ],
        },
        LegalSection {
            heading: "Payment & Billing",
            paragraphs: &["Payment schedules are defined in each proposal or invoice. Late payments may pause project work or incur finance charges as specified in the agreement."],
            bullets: &[],
        },
        LegalSection {
            heading: "Intellectual Property",
            paragraphs: &["Upon full payment, ownership of final project deliverables transfers to the client unless otherwise specified. Multimedium.dev retains the right to showcase work in portfolios and marketing materials."],
            bullets: &[],
        },
        LegalSection {
            heading: "Portal Data",
            paragraphs: &["Portal deployments may collect member or resident information as instructed by the client. Multimedium.dev acts as a processor, and the client retains responsibility for data governance and compliance."],
            bullets: &[],
        },
        LegalSection {
            heading: "Limitation of Liability",
            paragraphs: &["Multimedium.dev is not liable for indirect, incidental, or consequential damages arising from site usage or services, including lost profits or data."],
            bullets: &[],
        },
        LegalSection {
            heading: "Termination",
            paragraphs: &["Either party may terminate an agreement with written notice. Clients are responsible for fees incurred through the termination date. Upon termination, access to managed services or portals may be removed."],
            bullets: &[],
        },
        LegalSection {
            heading: "Updates",
            paragraphs: &["We may update these Terms from time to time. Continued use of the website or services after updates constitutes acceptance of the revised Terms."],
            bullets: &[],
        },
        LegalSection {
            heading: "Contact",
            paragraphs: &["For questions, email haydn@multimedium.dev or call 570-994-6186."],
            bullets: &[],
        },
    ],
};
