//! Practical remediation advice for baseline answers that fall short.

pub(super) fn baseline(question: &str, answer: &str) -> Option<&'static str> {
    let advice = match (question, answer) {
        ("risk_framework", "No framework") => {
            "AZIONE IMMEDIATA: Adotta un framework standard come ISO 27001 o NIST Cybersecurity Framework. Inizia con un gap assessment e documenta le procedure ICT esistenti. Timeline: 3-6 mesi."
        }
        ("risk_framework", "Ad-hoc processes") => {
            "Formalizza i processi esistenti in un framework documentato. Implementa ciclo PDCA (Plan-Do-Check-Act) e pianifica test annuali. Timeline: 2-3 mesi."
        }
        ("risk_framework", "Partially documented") => {
            "Completa la documentazione mancante e pianifica test di validazione trimestrale del framework. Timeline: 1 mese."
        }
        ("board_oversight", "No oversight") => {
            "CRITICO: Stabilisci immediatamente reporting mensile al board su rischi ICT. Nomina un responsabile cybersecurity con linea diretta al management. Timeline: immediato."
        }
        ("board_oversight", "Annual review") => {
            "Aumenta la frequenza a revisioni trimestrali. Implementa dashboard rischi ICT per il board con metriche KRI (Key Risk Indicators). Timeline: 1 mese."
        }
        ("board_oversight", "Bi-annual reviews") => {
            "Passa a cadenza trimestrale con metriche standardizzate e trend analysis. Timeline: immediato."
        }
        ("centralized_logging", "No centralization") => {
            "CRITICO: Deploy SIEM (es. Splunk, ELK Stack, Microsoft Sentinel) entro 60 giorni. Inizia con log critici (autenticazione, accessi privilegiati, firewall). Budget: €20-50k/anno."
        }
        ("centralized_logging", "Partial (some sources)") => {
            "Completa integrazione di tutte le sorgenti log. Priorità: server critici, database, cloud services, endpoint. Timeline: 30-45 giorni."
        }
        ("log_retention", "<6 months") => {
            "NON CONFORME: Estendi retention a minimo 18 mesi IMMEDIATAMENTE. Configura storage dedicato per log audit. Costo storage: ~€500-2000/TB/anno."
        }
        ("log_retention", "6-12 months") => {
            "NON CONFORME: Porta retention a 18+ mesi. Implementa tiering storage (hot/warm/cold) per ottimizzare costi. Timeline: 2 settimane."
        }
        ("log_retention", "12-18 months") => {
            "Quasi conforme: Estendi a 24 mesi per best practice e margine sicurezza. Timeline: 1 settimana."
        }
        ("log_integrity", "No verification") => {
            "Implementa hashing crittografico automatico (SHA-256) per tutti i log. Usa WORM storage o blockchain per log critici. Soluzione: syslog-ng, rsyslog con firma digitale. Timeline: 2-3 settimane."
        }
        ("log_integrity", "Manual spot-checks") => {
            "Automatizza verifica integrità con script schedulati. Implementa alerting su anomalie hash. Timeline: 1 settimana."
        }
        ("vendor_inventory", "No inventory") => {
            "URGENTE: Crea registro ICT providers entro 30 giorni. Template: vendor name, servizi, criticità, dati processati, paese hosting. Tool: Excel/SharePoint o GRC platform."
        }
        ("vendor_inventory", "Informal list") => {
            "Formalizza inventario con campi strutturati: SLA, certificazioni (SOC2, ISO27001), audit rights, exit strategy. Review trimestrale. Timeline: 2 settimane."
        }
        ("audit_rights", "Not in contracts") => {
            "CRITICO: Rinegozia contratti critici con clausole audit (on-site + report SOC2). Per nuovi contratti: inserisci clausola standard pre-approvata da legal. Timeline: 3-6 mesi."
        }
        ("audit_rights", "In some contracts") => {
            "Estendi audit rights a TUTTI i vendor critici. Priorità: cloud providers, processori pagamenti, gestori dati sensibili. Timeline: 2-4 mesi."
        }
        ("incident_notification_sla", "No SLA") => {
            "CRITICO: Negozia SLA 24h per incident notification in tutti i contratti. Template clausola: 'Security incidents must be reported within 24 hours of detection'. Timeline: immediate per nuovi, 3-6 mesi per rinegoziazione."
        }
        ("incident_notification_sla", "72+ hours") => {
            "72h è insufficiente per NIS2. Richiedi upgrade a 24h max. Argomenta con requisiti normativi obbligatori. Timeline: 1-3 mesi."
        }
        ("incident_process", "No formal process") => {
            "CRITICO: Sviluppa Incident Response Plan (IRP) completo entro 60 giorni. Include: ruoli, escalation, comunicazione, contenimento, recovery. Conduci tabletop exercise. Template: NIST 800-61."
        }
        ("incident_process", "Process exists, not tested") => {
            "Pianifica tabletop exercise trimestrale. Simula scenari realistici: ransomware, data breach, DDoS. Documenta lesson learned. Timeline: 30 giorni per primo test."
        }
        ("reporting_24h", "No") => {
            "CRITICO NIS2: Stabilisci processo per early warning 24h alle autorità. Designa CSIRT interno, hotline H24, template pre-approvati. Contatta CSIRT nazionale. Timeline: immediato."
        }
        ("reporting_24h", "Uncertain") => {
            "Testa il processo con simulazione. Verifica: chi notifica, a chi, con quale template, entro quale tempistica. Documenta procedura. Timeline: 2 settimane."
        }
        ("resilience_testing", "Never") => {
            "CRITICO: Pianifica test resilienza entro 90 giorni. Inizia con disaster recovery test (backup restore). Poi penetration test. Budget: €10-30k per test completo."
        }
        ("resilience_testing", "Annually") => {
            "Aumenta frequenza a bi-annuale per DORA compliance. Alterna DR test e threat-led penetration testing (TLPT). Timeline: pianifica ora."
        }
        ("cloud_governance", "No specific framework") => {
            "URGENTE: Implementa cloud governance framework. Include: inventory servizi, risk assessment per CSP, contratti DORA-compliant, exit strategy. Timeline: 2-3 mesi."
        }
        ("cloud_governance", "Informal processes") => {
            "Formalizza con policy documentate: approvazione servizi cloud, security baseline, data residency, backup strategy. Timeline: 1 mese."
        }
        _ => return None,
    };
    Some(advice)
}
