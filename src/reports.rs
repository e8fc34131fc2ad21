//! Placeholder report content
//!
//! Fixed text standing in for results a real inference backend would produce.

pub struct HealthReport {
    pub risk_label: &'static str,
    pub summary: &'static str,
    pub recommendations: &'static [&'static str],
    /// (heading, body)
    pub next_steps: &'static [(&'static str, &'static str)],
}

pub static HEALTH_REPORT: HealthReport = HealthReport {
    risk_label: "Moderate Risk",
    summary: "Based on the provided symptoms and medical history, your condition appears to be of \
              moderate concern. We recommend consulting with a healthcare professional for a \
              comprehensive evaluation.",
    recommendations: &[
        "Schedule an appointment with your primary care physician within the next 3-5 days",
        "Monitor your symptoms and keep a daily log",
        "Stay hydrated and get adequate rest",
        "Avoid self-medication without professional guidance",
    ],
    next_steps: &[
        (
            "Immediate Action:",
            "If symptoms worsen or you experience severe pain, difficulty breathing, or other \
             emergency symptoms, seek immediate medical attention.",
        ),
        (
            "Follow-up:",
            "Book an appointment with a healthcare provider to discuss your symptoms and receive \
             personalized medical advice.",
        ),
        (
            "Documentation:",
            "Bring this assessment report to your appointment along with any additional \
             information about symptom progression.",
        ),
    ],
};

pub struct Alternate {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub struct PrescriptionReport {
    /// (label, value)
    pub details: &'static [(&'static str, &'static str)],
    pub dosage: &'static [(&'static str, &'static str)],
    pub warnings: &'static [&'static str],
    pub interactions: &'static [&'static str],
    pub alternates: &'static [Alternate],
}

pub static PRESCRIPTION_REPORT: PrescriptionReport = PrescriptionReport {
    details: &[
        ("Generic Name:", "Amoxicillin"),
        ("Drug Class:", "Penicillin Antibiotic"),
        ("Common Uses:", "Bacterial infections, respiratory tract infections"),
    ],
    dosage: &[
        ("Recommended Dosage:", "500mg three times daily"),
        ("Duration:", "7-10 days (complete the full course)"),
        ("Administration:", "Take with or without food. Drink plenty of water."),
    ],
    warnings: &[
        "Do not use if allergic to penicillin or similar antibiotics",
        "May cause stomach upset; take with food if needed",
        "Complete the full course even if symptoms improve",
        "Avoid alcohol during treatment",
        "May reduce effectiveness of birth control pills",
    ],
    interactions: &["Warfarin", "Methotrexate", "Oral Contraceptives"],
    alternates: &[
        Alternate {
            name: "Azithromycin",
            description: "Macrolide antibiotic, shorter treatment course (3-5 days)",
            tags: &["Fewer doses", "Good alternative"],
        },
        Alternate {
            name: "Cephalexin",
            description: "Cephalosporin antibiotic, similar spectrum of activity",
            tags: &["Similar efficacy"],
        },
    ],
};

impl PrescriptionReport {
    /// Alternates are listed only when the visitor asked for them.
    pub fn alternates_for(&self, include_alternates: bool) -> &'static [Alternate] {
        if include_alternates {
            self.alternates
        } else {
            &[]
        }
    }
}

/// Notes shown in the companion call side panel
pub static COMPANION_NOTES: [&str; 3] = [
    "Your companion is listening. Describe how you are feeling today.",
    "Remember to take your evening medication on time.",
    "Tip: stay hydrated and aim for seven hours of sleep.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternates_only_when_requested() {
        assert!(PRESCRIPTION_REPORT.alternates_for(false).is_empty());
        assert_eq!(PRESCRIPTION_REPORT.alternates_for(true).len(), 2);
    }
}
