use super::super::domain::AreaKind;
use super::{Applicability, AreaRules, Guard, Rule, Tier};

const fn cloud_selected(count: usize) -> Guard {
    Guard::SelectedAtLeast {
        question: "cloud_usage",
        count,
        excluding: "None",
    }
}

pub(super) fn areas() -> Vec<AreaRules> {
    vec![
        AreaRules {
            area: AreaKind::Governance,
            title: "Governance & Scope",
            maximum: 25,
            applicability: Applicability::Always,
            rules: vec![
                Rule::new(
                    "risk_framework",
                    vec![
                        Tier::contains(&["No framework", "Ad-hoc processes"], 8)
                            .finding("No mature ICT risk management framework in place")
                            .gap("NIS2 Art. 21 / DORA Art. 6: ICT risk management framework missing")
                            .recommend("Establish documented ICT risk management framework covering identification, protection, detection, response, recovery"),
                        Tier::contains(&["Partially documented"], 4)
                            .finding("ICT risk framework exists but not fully operationalized")
                            .recommend("Complete ICT risk framework documentation and conduct annual testing/validation"),
                    ],
                ),
                Rule::new(
                    "board_oversight",
                    vec![Tier::except(&["Yes, quarterly reviews"], 4)
                        .finding("Insufficient board-level oversight of ICT and cyber risks")
                        .gap("NIS2 Art. 20 / DORA Art. 5: Management body accountability")
                        .recommend("Establish quarterly board reporting on ICT risks, incidents, and resilience metrics")],
                ),
                Rule::new(
                    "cloud_governance",
                    vec![Tier::except(&["Yes, formalized"], 3)
                        .finding("Significant cloud usage ({selected} service types) without formalized governance")
                        .gap("DORA Art. 28: Cloud service provider governance")
                        .recommend("Implement cloud governance framework: inventory, risk assessment, contractual controls, exit strategies")],
                )
                .guarded(cloud_selected(2)),
            ],
        },
        AreaRules {
            area: AreaKind::TechnicalMeasures,
            title: "Logging & Monitoring",
            maximum: 25,
            applicability: Applicability::Always,
            rules: vec![
                Rule::new(
                    "centralized_logging",
                    vec![Tier::except(&["Yes, SIEM deployed"], 6)
                        .finding("Logs not centralized in SIEM/log management platform")
                        .gap("NIS2 Art. 21: Log collection and monitoring")
                        .recommend("Deploy SIEM solution (Splunk, ELK, Sentinel) for centralized log collection and correlation")],
                ),
                Rule::new(
                    "log_retention",
                    vec![Tier::except(&["18-24 months", "24+ months"], 6)
                        .finding("Log retention ({answer}) below regulatory minimum (18 months)")
                        .gap("NIS2: 18-month minimum retention for audit logs")
                        .recommend("CRITICAL: Extend log retention to minimum 18 months for all security-relevant logs")],
                ),
                Rule::new(
                    "log_integrity",
                    vec![Tier::except(&["Yes, automated verification"], 4)
                        .finding("Log integrity not cryptographically verified")
                        .gap("NIS2/DORA: Log tamper-evidence for audit purposes")
                        .recommend("Implement automated log hashing (SHA-256) with secure hash storage and periodic verification")],
                ),
                Rule::new(
                    "cloud_logs_integrated",
                    vec![Tier::except(&["Yes, all sources"], 3)
                        .finding("Cloud platform logs not fully integrated into central monitoring")
                        .recommend("Integrate all cloud provider logs (AWS CloudTrail, Azure Monitor, GCP Cloud Logging) into SIEM")],
                )
                .guarded(cloud_selected(1)),
                Rule::new(
                    "realtime_monitoring",
                    vec![Tier::except(&["Yes, 24/7 SOC"], 2)
                        .finding("No 24/7 security monitoring capability")
                        .recommend("Establish 24/7 SOC or engage managed detection and response (MDR) provider")],
                ),
            ],
        },
        AreaRules {
            area: AreaKind::SupplyChain,
            title: "ICT Third-Party Risk",
            maximum: 25,
            applicability: Applicability::Always,
            rules: vec![
                Rule::new(
                    "vendor_inventory",
                    vec![Tier::except(&["Yes, complete and current"], 5)
                        .finding("ICT third-party inventory incomplete or outdated")
                        .gap("DORA Art. 28: Register of ICT third-party providers")
                        .recommend("Maintain current register of all ICT third-party providers with criticality classification")],
                ),
                Rule::new(
                    "audit_rights",
                    vec![Tier::except(&["Yes, in all critical contracts"], 5)
                        .finding("Right-to-audit clauses missing in critical vendor contracts")
                        .gap("DORA Art. 30: Contractual audit and access rights")
                        .recommend("Negotiate right-to-audit, security testing rights, and access to SOC 2/ISO certifications in all critical contracts")],
                ),
                Rule::new(
                    "incident_notification_sla",
                    vec![Tier::except(&["24 hours", "12 hours"], 4)
                        .finding("Vendor incident notification SLAs inadequate or undefined")
                        .gap("DORA Art. 19: Incident reporting by ICT providers")
                        .recommend("Require 24-hour notification for security incidents in all critical vendor contracts")],
                ),
                Rule::new(
                    "cloud_exit_plan",
                    vec![Tier::except(&["Yes, tested annually"], 4)
                        .finding("Cloud exit/portability strategies not tested")
                        .gap("DORA Art. 28: Exit strategies for critical cloud providers")
                        .recommend("Develop and test annual cloud exit plans: data portability, alternative CSPs, 90-day transition timeline")],
                )
                .guarded(cloud_selected(1)),
                Rule::new(
                    "supply_chain_monitoring",
                    vec![Tier::except(&["Yes, continuous assessment"], 3)
                        .finding("No continuous monitoring of third-party security posture")
                        .recommend("Deploy third-party risk monitoring platform (BitSight, SecurityScorecard, Prevalent) for continuous assessment")],
                ),
            ],
        },
        AreaRules {
            area: AreaKind::IncidentResponse,
            title: "Incident & Resilience",
            maximum: 25,
            applicability: Applicability::Always,
            rules: vec![
                Rule::new(
                    "incident_process",
                    vec![Tier::except(&["Yes, documented and tested"], 6)
                        .finding("Incident response process not mature")
                        .gap("NIS2 Art. 23: Incident handling and reporting")
                        .recommend("Establish documented incident response plan with quarterly tabletop exercises")],
                ),
                Rule::new(
                    "reporting_24h",
                    vec![Tier::except(&["Yes, process established"], 6)
                        .finding("Cannot meet 24-hour initial incident notification requirement")
                        .gap("NIS2 Art. 23: 24-hour early warning, 72-hour notification deadlines")
                        .recommend("CRITICAL: Establish 24/7 incident detection and 24-hour reporting capability to authorities")],
                ),
                Rule::new(
                    "resilience_testing",
                    vec![Tier::except(&["Quarterly", "Bi-annually"], 4)
                        .finding("Insufficient resilience and recovery testing frequency")
                        .gap("DORA Art. 24: ICT resilience testing")
                        .recommend("Conduct resilience testing at least bi-annually: disaster recovery, incident response, threat-led penetration testing (TLPT)")],
                ),
                Rule::new(
                    "rto_rpo_defined",
                    vec![Tier::except(&["Yes, for all critical systems"], 2)
                        .finding("Recovery time/point objectives not defined for all critical systems")
                        .recommend("Define and document RTO/RPO for all critical ICT systems and applications")],
                ),
                Rule::new(
                    "cloud_incident_integration",
                    vec![Tier::except(&["Yes"], 2)
                        .finding("Cloud provider incidents not integrated into organizational incident response")
                        .recommend("Integrate cloud provider incident notifications into organizational incident management workflow")],
                )
                .guarded(cloud_selected(1)),
            ],
        },
    ]
}
