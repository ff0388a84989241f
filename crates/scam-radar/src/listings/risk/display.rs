use serde::Serialize;

use super::RiskLevel;

/// Presentation attributes for a risk tier, shared with the web frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskDisplay {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub background_class: &'static str,
    pub text_class: &'static str,
    pub border_class: &'static str,
}

const HIGH: RiskDisplay = RiskDisplay {
    label: "ATTENZIONE TRUFFA",
    icon: "⚠️",
    color: "red",
    background_class: "bg-red-100",
    text_class: "text-red-800",
    border_class: "border-red-300",
};

const MEDIUM: RiskDisplay = RiskDisplay {
    label: "SOSPETTO",
    icon: "⚡",
    color: "yellow",
    background_class: "bg-yellow-100",
    text_class: "text-yellow-800",
    border_class: "border-yellow-300",
};

const LOW: RiskDisplay = RiskDisplay {
    label: "Verificato",
    icon: "✓",
    color: "green",
    background_class: "bg-green-100",
    text_class: "text-green-800",
    border_class: "border-green-300",
};

impl RiskLevel {
    pub const fn display(self) -> &'static RiskDisplay {
        match self {
            RiskLevel::High => &HIGH,
            RiskLevel::Medium => &MEDIUM,
            RiskLevel::Low => &LOW,
        }
    }

    /// Compact badge text, or `None` when the tier is not surfaced.
    pub fn badge(self, score: u8) -> Option<String> {
        if !self.requires_attention() {
            return None;
        }
        let display = self.display();
        Some(format!("{} {} ({score}/100)", display.icon, display.label))
    }
}
