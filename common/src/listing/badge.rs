//! Visual treatment of each source type: labels, icon names, color classes
//! and the legend text shown beside the listing.

use crate::model::source::SourceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trustworthiness {
    Highest,
    High,
    Moderate,
    Varies,
}

impl Trustworthiness {
    pub fn label(&self) -> &'static str {
        match self {
            Trustworthiness::Highest => "Highest",
            Trustworthiness::High => "High",
            Trustworthiness::Moderate => "Moderate",
            Trustworthiness::Varies => "Varies",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trustworthiness::Highest => "trust-highest",
            Trustworthiness::High => "trust-high",
            Trustworthiness::Moderate => "trust-moderate",
            Trustworthiness::Varies => "trust-varies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBadge {
    pub source_type: SourceType,
    /// Short label on source cards and in the legend.
    pub label: &'static str,
    /// Longer label inside citation popovers.
    pub citation_label: &'static str,
    /// Material icon name.
    pub icon: &'static str,
    pub css_class: &'static str,
    pub trust: Trustworthiness,
    pub description: &'static str,
    pub examples: &'static str,
}

impl TypeBadge {
    pub fn of(source_type: SourceType) -> Self {
        match source_type {
            SourceType::PeerReviewed => TypeBadge {
                source_type,
                label: "Peer-Reviewed",
                citation_label: "Peer-Reviewed",
                icon: "menu_book",
                css_class: "badge-peer-reviewed",
                trust: Trustworthiness::Highest,
                description: "Academic research published in scientific journals after rigorous peer review by experts in the field.",
                examples: "Scientific studies, research papers, academic publications",
            },
            SourceType::Agency => TypeBadge {
                source_type,
                label: "Agency",
                citation_label: "Agency Report",
                icon: "account_balance",
                css_class: "badge-agency",
                trust: Trustworthiness::High,
                description: "Official reports and data from government agencies with regulatory oversight and technical expertise.",
                examples: "USFWS, SJRWMD, Marine Mammal Commission, EPA",
            },
            SourceType::Legal => TypeBadge {
                source_type,
                label: "Legal",
                citation_label: "Legal Document",
                icon: "gavel",
                css_class: "badge-legal",
                trust: Trustworthiness::High,
                description: "Court documents, legal opinions, and regulatory decisions with evidentiary standards.",
                examples: "Court rulings, legal briefs, regulatory determinations",
            },
            SourceType::Advocacy => TypeBadge {
                source_type,
                label: "Advocacy",
                citation_label: "Advocacy/Policy",
                icon: "description",
                css_class: "badge-advocacy",
                trust: Trustworthiness::Moderate,
                description: "Position papers and analysis from advocacy organizations. May contain valuable research but with stated positions.",
                examples: "Environmental groups, policy organizations, advocacy coalitions",
            },
            SourceType::News => TypeBadge {
                source_type,
                label: "News",
                citation_label: "News",
                icon: "newspaper",
                css_class: "badge-news",
                trust: Trustworthiness::Moderate,
                description: "Journalistic reporting and news coverage. Quality varies by publication standards.",
                examples: "Newspapers, news websites, investigative journalism",
            },
            SourceType::Other => TypeBadge {
                source_type,
                label: "Other",
                citation_label: "Other",
                icon: "description",
                css_class: "badge-other",
                trust: Trustworthiness::Varies,
                description: "Miscellaneous sources that don't fit other categories. Evaluate individually.",
                examples: "Educational materials, historical documents, miscellaneous sources",
            },
        }
    }

    /// Every badge in legend order.
    pub fn legend() -> Vec<TypeBadge> {
        SourceType::ALL.into_iter().map(TypeBadge::of).collect()
    }
}
