use super::super::domain::AreaKind;
use super::{Question, QuestionKind, Visibility};

const CLOUD_IN_USE: Visibility = Visibility::Selected {
    question: "cloud_usage",
    excluding: "None",
};

pub(super) fn questions() -> Vec<Question> {
    vec![
        Question {
            id: "sector",
            area: AreaKind::Governance,
            label: "Organization sector",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "Financial services",
                "Energy",
                "Transport",
                "Digital infrastructure",
                "Healthcare",
                "Public administration",
                "Manufacturing",
                "Other/Mixed",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "scope",
            area: AreaKind::Governance,
            label: "Regulatory scope (select all that apply)",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "NIS2 Essential Entity",
                "NIS2 Important Entity",
                "DORA Financial Entity",
                "Not directly in scope",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "risk_framework",
            area: AreaKind::Governance,
            label: "ICT risk management framework maturity",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No framework",
                "Ad-hoc processes",
                "Partially documented",
                "Yes, documented and tested",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "board_oversight",
            area: AreaKind::Governance,
            label: "Board-level oversight of ICT/cyber risks",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No oversight",
                "Annual review",
                "Bi-annual reviews",
                "Yes, quarterly reviews",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "cloud_usage",
            area: AreaKind::Governance,
            label: "Cloud services in use (select all that apply)",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "IaaS (AWS, Azure, GCP)",
                "SaaS (M365, Salesforce, etc.)",
                "PaaS",
                "Managed security services",
                "None",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "cloud_governance",
            area: AreaKind::Governance,
            label: "Cloud governance framework",
            kind: QuestionKind::SingleChoice,
            options: vec!["No specific framework", "Informal processes", "Yes, formalized"],
            visibility: CLOUD_IN_USE,
        },
        Question {
            id: "centralized_logging",
            area: AreaKind::TechnicalMeasures,
            label: "Centralized log collection",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No centralization",
                "Partial (some sources)",
                "Yes, SIEM deployed",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "log_retention",
            area: AreaKind::TechnicalMeasures,
            label: "Log retention period",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "<6 months",
                "6-12 months",
                "12-18 months",
                "18-24 months",
                "24+ months",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "log_integrity",
            area: AreaKind::TechnicalMeasures,
            label: "Log integrity verification (hashing, WORM)",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No verification",
                "Manual spot-checks",
                "Yes, automated verification",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "cloud_logs_integrated",
            area: AreaKind::TechnicalMeasures,
            label: "Cloud platform logs integrated into SIEM",
            kind: QuestionKind::SingleChoice,
            options: vec!["No", "Partially", "Yes, all sources"],
            visibility: CLOUD_IN_USE,
        },
        Question {
            id: "realtime_monitoring",
            area: AreaKind::TechnicalMeasures,
            label: "Real-time security monitoring",
            kind: QuestionKind::SingleChoice,
            options: vec!["No active monitoring", "Business hours only", "Yes, 24/7 SOC"],
            visibility: Visibility::Always,
        },
        Question {
            id: "vendor_inventory",
            area: AreaKind::SupplyChain,
            label: "ICT third-party provider inventory",
            kind: QuestionKind::SingleChoice,
            options: vec!["No inventory", "Informal list", "Yes, complete and current"],
            visibility: Visibility::Always,
        },
        Question {
            id: "audit_rights",
            area: AreaKind::SupplyChain,
            label: "Contractual audit and access rights",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "Not in contracts",
                "In some contracts",
                "Yes, in all critical contracts",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "incident_notification_sla",
            area: AreaKind::SupplyChain,
            label: "Vendor incident notification SLA",
            kind: QuestionKind::SingleChoice,
            options: vec!["No SLA", "72+ hours", "24 hours", "12 hours"],
            visibility: Visibility::Always,
        },
        Question {
            id: "cloud_exit_plan",
            area: AreaKind::SupplyChain,
            label: "Cloud exit/portability strategy",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No exit plan",
                "Documented but not tested",
                "Yes, tested annually",
            ],
            visibility: CLOUD_IN_USE,
        },
        Question {
            id: "supply_chain_monitoring",
            area: AreaKind::SupplyChain,
            label: "Continuous third-party risk monitoring",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No monitoring",
                "Annual assessments",
                "Yes, continuous assessment",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "incident_process",
            area: AreaKind::IncidentResponse,
            label: "Incident response process",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "No formal process",
                "Process exists, not tested",
                "Yes, documented and tested",
            ],
            visibility: Visibility::Always,
        },
        Question {
            id: "reporting_24h",
            area: AreaKind::IncidentResponse,
            label: "Capability to report incidents within 24 hours",
            kind: QuestionKind::SingleChoice,
            options: vec!["No", "Uncertain", "Yes, process established"],
            visibility: Visibility::Always,
        },
        Question {
            id: "resilience_testing",
            area: AreaKind::IncidentResponse,
            label: "Resilience testing frequency",
            kind: QuestionKind::SingleChoice,
            options: vec!["Never", "Annually", "Bi-annually", "Quarterly"],
            visibility: Visibility::Always,
        },
        Question {
            id: "rto_rpo_defined",
            area: AreaKind::IncidentResponse,
            label: "RTO/RPO defined for critical systems",
            kind: QuestionKind::SingleChoice,
            options: vec!["No", "For some systems", "Yes, for all critical systems"],
            visibility: Visibility::Always,
        },
        Question {
            id: "cloud_incident_integration",
            area: AreaKind::IncidentResponse,
            label: "Cloud provider incidents integrated into IR process",
            kind: QuestionKind::SingleChoice,
            options: vec!["No", "Yes"],
            visibility: CLOUD_IN_USE,
        },
    ]
}
