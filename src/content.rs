//! Static clinic content shown across the pages

/// Clinic name used in headers and the footer
pub const CLINIC_NAME: &str = "LONDON DENTAL";
pub const CLINIC_TAGLINE: &str = "Centre of Excellence";
pub const CLINIC_PHONE: &str = "020 7123 4567";
pub const CLINIC_ADDRESS: [&str; 2] = ["123 Harley Street", "London, W1G 6AF"];

/// (days, hours)
pub const OPENING_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "08:00 - 19:00"),
    ("Saturday", "09:00 - 16:00"),
    ("Sunday", "Emergency Appointments Only"),
];

pub const TRUST_BADGES: [&str; 4] = [
    "GDC REGULATED",
    "CQC COMPLIANT",
    "NHS PARTNER",
    "BUPA ACCREDITED",
];

/// (title, description)
pub const WHY_CHOOSE_US: [(&str, &str); 4] = [
    (
        "Award-Winning Team",
        "Our dentists are industry leaders in UK dental innovation.",
    ),
    (
        "State-of-the-Art Tech",
        "Digital scanners and 3D imaging for faster, painless results.",
    ),
    (
        "Nervous Patient Care",
        "Dedicated sedation services and a calm, spa-like environment.",
    ),
    (
        "Flexible Financing",
        "0% Interest payment plans available for all private treatments.",
    ),
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub specialties: &'static [&'static str],
}

pub const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Dr. Sarah Mitchell",
        role: "Principal Dentist & Implantologist",
        bio: "With over 15 years of experience, Dr. Mitchell specializes in complex restorative cases and dental implants.",
        specialties: &["Implantology", "Aesthetics"],
    },
    TeamMember {
        name: "Dr. James Chen",
        role: "Cosmetic Dentist",
        bio: "Dr. Chen is an expert in Invisalign and composite bonding, helping patients achieve their dream smiles.",
        specialties: &["Invisalign", "Veneers"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub date: &'static str,
}

impl Review {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.min(5) as usize)
    }
}

pub const REVIEWS: [Review; 2] = [
    Review {
        author: "Mark Thompson",
        rating: 5,
        text: "Best dental experience in London. The team is professional, and the facility is state-of-the-art.",
        date: "2 weeks ago",
    },
    Review {
        author: "Emma Wilson",
        rating: 5,
        text: "Had my Invisalign treatment here. Truly life-changing results and the care was exceptional.",
        date: "1 month ago",
    },
];

/// (treatment, fee from)
pub const PRICE_LIST: [(&str, &str); 6] = [
    ("Initial Consultation & X-Rays", "£85"),
    ("Routine Hygiene Appointment", "£75"),
    ("Invisalign Full (Dual Arch)", "£3,500"),
    ("Single Tooth Implant", "£2,100"),
    ("Composite Bonding (Per Tooth)", "£250"),
    ("Professional Teeth Whitening", "£395"),
];

pub const FINANCE_NOTE: &str = "Spread the cost with 0% interest for up to 12 months.";

// Contact form copy
pub const FORM_INTRO: &str = "Start your journey to a healthier, brighter smile today.";
pub const CONSENT_NOTE: &str = "I agree to the storage and handling of my data in accordance \
                                with the Privacy Policy (GDPR Compliant).";
pub const RESPONSE_TIME_NOTE: &str = "Average response time: 24 Minutes";

/// Brand palette (name, hex)
pub const COLORS: [(&str, &str); 6] = [
    ("primary", "#0F4C75"),
    ("secondary", "#3282B8"),
    ("accent", "#BBE1FA"),
    ("background", "#FFFFFF"),
    ("text", "#1B262C"),
    ("success", "#27AE60"),
];

/// (role, font, sample)
pub const TYPOGRAPHY: [(&str, &str, &str); 2] = [
    ("Headlines", "Montserrat", "Bold & Professional"),
    (
        "Body Copy",
        "Open Sans",
        "Clean, readable, and patient-friendly for long-form content.",
    ),
];

pub const SEO_KEYWORDS: [&str; 6] = [
    "Private Dentist London",
    "Cosmetic Dentistry UK",
    "Dental Implants London",
    "Invisalign UK",
    "Emergency Dentist London",
    "NHS Dentist London",
];

/// (tag, value)
pub const META_TAGS: [(&str, &str); 2] = [
    (
        "Primary H1",
        "Premium Private & NHS Dentist in [Location] | [Clinic Name]",
    ),
    (
        "Meta Description",
        "Transform your smile at [Clinic Name]. Expert cosmetic dentistry, Invisalign, and implants in [Location]. Book your consultation today.",
    ),
];

/// (strategy, note)
pub const CONVERSION_STRATEGY: [(&str, &str); 3] = [
    (
        "Social Proof",
        "Display Google Review count & GDC logos prominently in every footer and above-the-fold.",
    ),
    (
        "Urgency Elements",
        "Real-time availability banners increase booking velocity.",
    ),
    (
        "Accessibility",
        "Click-to-call buttons for mobile users. Clear pricing tables to build instant trust.",
    ),
];

/// Parse a `#RRGGBB` hex colour
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
