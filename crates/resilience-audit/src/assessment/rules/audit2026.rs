use super::super::domain::AreaKind;
use super::{Applicability, AreaRules, Rule, Tier};

/// Variant of the 2026 audit table.
///
/// `Base` publishes 118 points. `Graduated` publishes 130 and adds
/// intermediate tiers for answers the base table lets through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Base,
    Graduated,
}

impl Edition {
    const fn maximum(self, area: AreaKind) -> i32 {
        match (self, area) {
            (Self::Base, AreaKind::Governance) => 25,
            (Self::Base, AreaKind::RiskManagement) => 15,
            (Self::Base, AreaKind::SupplyChain) => 20,
            (Self::Base, AreaKind::IncidentResponse) => 18,
            (Self::Base, AreaKind::TechnicalMeasures) => 25,
            (Self::Base, AreaKind::AiEthics) => 15,
            (Self::Graduated, AreaKind::Governance) => 29,
            (Self::Graduated, AreaKind::RiskManagement) => 19,
            (Self::Graduated, AreaKind::SupplyChain) => 22,
            (Self::Graduated, AreaKind::IncidentResponse) => 18,
            (Self::Graduated, AreaKind::TechnicalMeasures) => 27,
            (Self::Graduated, AreaKind::AiEthics) => 15,
        }
    }

    const fn graduated(self) -> bool {
        matches!(self, Self::Graduated)
    }

    /// Base points unless graduated.
    const fn points(self, base: i32, graduated: i32) -> i32 {
        if self.graduated() {
            graduated
        } else {
            base
        }
    }
}

fn area(edition: Edition, area: AreaKind, title: &'static str, rules: Vec<Rule>) -> AreaRules {
    AreaRules {
        area,
        title,
        maximum: edition.maximum(area),
        applicability: Applicability::Always,
        rules,
    }
}

fn graded(edition: Edition, mut tiers: Vec<Tier>, extra: Vec<Tier>) -> Vec<Tier> {
    if edition.graduated() {
        tiers.extend(extra);
    }
    tiers
}

pub(super) fn areas(edition: Edition) -> Vec<AreaRules> {
    vec![
        governance(edition),
        risk_management(edition),
        supply_chain(edition),
        incident_response(edition),
        technical_measures(edition),
        ai_ethics(edition),
    ]
}

fn governance(edition: Edition) -> AreaRules {
    let mut rules = Vec::new();
    if edition.graduated() {
        rules.push(Rule::new(
            "sector",
            vec![Tier::contains(&["Altro/Non elencato"], 2)
                .gap("NIS2 Annex I/II / DORA Art. 2: Settore non classificato - applicabilità normativa da verificare")
                .recommend("Verificare con il legale se l'organizzazione rientra tra le entità essenziali/importanti NIS2 o finanziarie DORA")],
        ));
    }

    rules.extend([
        Rule::new(
            "board_approval",
            vec![
                Tier::contains(&["Nessuna approvazione"], 5)
                    .finding("CdA non ha approvato formalmente il piano di conformità 2026")
                    .gap("NIS2 Art. 20 / DORA Art. 5: Accountability del management body richiesta")
                    .recommend("CRITICO: Ottenere approvazione formale del CdA per il piano di conformità con delibera documentata"),
                Tier::contains(&["Parziale", "datato"], 3)
                    .recommend("Aggiornare piano di conformità e ottenere nuova approvazione CdA"),
            ],
        ),
        Rule::new(
            "executive_training",
            vec![
                Tier::contains(&["Nessuna formazione"], 4)
                    .finding("Vertici aziendali non hanno ricevuto formazione su cybersecurity e IA")
                    .gap("NIS2 Art. 20.2(a): Formazione del management body obbligatoria")
                    .recommend("Organizzare formazione certificata per il CdA su cyber risks e regolamentazione IA"),
                Tier::contains(&["Informale"], 2)
                    .recommend("Formalizzare la formazione dei vertici con attestati e test di verifica"),
            ],
        ),
        Rule::new(
            "model_231_updated",
            graded(
                edition,
                vec![Tier::contains(&["non presente", "mai aggiornato"], 4)
                    .finding("Modello Organizzativo 231 non aggiornato per reati informatici e AI Act")
                    .gap("D.Lgs. 231/2001: Modello deve includere nuovi reati cyber e violazioni AI Act")
                    .recommend("Aggiornare Modello 231 includendo protocolli per prevenzione reati informatici e violazioni AI")],
                vec![Tier::contains(&["Parziale"], 2)
                    .recommend("Estendere il Modello 231 alle violazioni AI Act con protocolli operativi dedicati")],
            ),
        ),
        Rule::new(
            "roles_assigned",
            vec![
                Tier::contains(&["Nessuna nomina"], 5)
                    .finding("CISO, DPO e Responsabile IA non formalmente nominati")
                    .gap("NIS2/DORA/GDPR/AI Act: Ruoli chiave devono essere formalmente designati")
                    .recommend("CRITICO: Nominare formalmente CISO, DPO e Responsabile sorveglianza IA con lettera di incarico"),
                Tier::contains(&["Parziale", "Solo DPO"], 3)
                    .recommend("Completare le nomine mancanti (CISO, Responsabile IA) con reporting line al CdA"),
            ],
        ),
        Rule::new(
            "scope",
            vec![Tier::unanswered(2)
                .gap("Ambito normativo non identificato - verificare applicabilità NIS2/DORA/AI Act")],
        ),
        Rule::new(
            "iso_27001_compliance",
            vec![
                Tier::contains(&["Nessun SGSI"], 3)
                    .finding("Manca Sistema di Gestione Sicurezza Informazioni (SGSI) secondo ISO 27001")
                    .gap("ISO 27001: Standard mondiale per SGSI - fondamentale per audit strutturato")
                    .recommend("CRITICO: Implementare SGSI conforme ISO 27001:2022 come base per conformità NIS2/DORA"),
                Tier::contains(&["In preparazione", "informale"], 2)
                    .recommend("Completare implementazione SGSI e considerare certificazione ISO 27001 per maggiore credibilità"),
                Tier::contains(&["non certificato"], 1)
                    .recommend("Considerare certificazione ISO 27001 da ente accreditato per validazione esterna"),
            ],
        ),
        Rule::new(
            "nist_csf_adoption",
            vec![
                Tier::contains(&["non mappate"], 2)
                    .finding("Funzioni NIST CSF 2.0 non mappate - manca framework operativo")
                    .gap("NIST CSF: Best practice per mappare Govern/Identify/Protect/Detect/Respond/Recover")
                    .recommend("Mappare controlli esistenti alle 6 funzioni NIST CSF 2.0 per gap analysis strutturata"),
                Tier::contains(&["Conoscenza", "Parziale"], 1)
                    .recommend("Completare mapping NIST CSF e integrare con metriche KPI per misurare maturità"),
            ],
        ),
    ]);

    area(
        edition,
        AreaKind::Governance,
        "Governance e Responsabilità Legale",
        rules,
    )
}

fn risk_management(edition: Edition) -> AreaRules {
    let rules = vec![
        Rule::new(
            "unified_asset_inventory",
            vec![
                Tier::contains(&["Nessun inventario"], 4)
                    .finding("Assenza inventario unificato asset ICT, dati personali e sistemi IA")
                    .gap("DORA Art. 8 / NIS2 Art. 21 / GDPR Art. 30: Registro asset obbligatorio")
                    .recommend("CRITICO: Creare inventario unificato che integra asset IT, registro GDPR e sistemi IA"),
                Tier::contains(&["Parziale"], 2)
                    .recommend("Completare inventario includendo mappatura dati personali e sistemi IA"),
            ],
        ),
        Rule::new(
            "ai_classification",
            vec![
                Tier::contains(&["presenti ma non classificati"], 3)
                    .finding("Sistemi IA in uso non classificati per livello di rischio")
                    .gap("AI Act Art. 6: Classificazione sistemi IA per livello rischio obbligatoria")
                    .recommend("Eseguire classificazione formale sistemi IA secondo AI Act (Minimo/Limitato/Alto/Inaccettabile)"),
                Tier::contains(&["Parziale"], 1)
                    .recommend("Formalizzare classificazione IA e condurre valutazione conformità per sistemi Alto Rischio"),
            ],
        ),
        Rule::new(
            "dpia_conducted",
            graded(
                edition,
                vec![
                    Tier::contains(&["Mai eseguita"], 4)
                        .finding("DPIA (Data Protection Impact Assessment) mai eseguita")
                        .gap("GDPR Art. 35: DPIA obbligatoria per trattamenti ad alto rischio")
                        .recommend("Eseguire DPIA per tutti i trattamenti ad alto rischio e sistemi IA che trattano dati personali"),
                    Tier::contains(&["datata"], 2)
                        .recommend("Aggiornare le DPIA esistenti (raccomandato ogni 2-3 anni o al cambio sostanziale)"),
                ],
                vec![Tier::contains(&["alcuni trattamenti"], 1)
                    .recommend("Estendere la DPIA a tutti i trattamenti ad alto rischio, inclusi i sistemi IA")],
            ),
        ),
        Rule::new(
            "sbom_available",
            vec![
                Tier::contains(&["Nessun SBOM"], 2)
                    .finding("Software Bill of Materials (SBOM) non disponibile")
                    .gap("Cyber Resilience Act: SBOM richiesto per monitoraggio vulnerabilità")
                    .recommend("Richiedere SBOM a tutti fornitori software e creare SBOM per sviluppi interni"),
                Tier::contains(&["Parziale"], 1)
                    .recommend("Estendere SBOM a tutti i componenti software e attivare monitoraggio CVE automatico"),
            ],
        ),
        Rule::new(
            "risk_assessment_frequency",
            graded(
                edition,
                vec![Tier::contains(&["Mai"], 2)
                    .finding("Valutazione rischi ICT mai eseguita")
                    .gap("DORA Art. 6 / NIS2 Art. 21: Valutazione rischi ICT periodica obbligatoria")
                    .recommend("Implementare processo di risk assessment ICT con frequenza almeno annuale")],
                vec![Tier::contains(&["Ad-hoc"], 1)
                    .recommend("Pianificare la valutazione rischi ICT con cadenza almeno annuale invece che su richiesta")],
            ),
        ),
    ];

    area(
        edition,
        AreaKind::RiskManagement,
        "Gestione del Rischio e degli Asset",
        rules,
    )
}

fn supply_chain(edition: Edition) -> AreaRules {
    let rules = vec![
        Rule::new(
            "ict_supplier_register",
            vec![
                Tier::contains(&["Nessun registro"], 4)
                    .finding("Registro fornitori ICT assente")
                    .gap("DORA Art. 28.1: Registro fornitori ICT terzi obbligatorio")
                    .recommend("CRITICO: Creare registro fornitori ICT con classificazione criticità secondo DORA"),
                Tier::contains(&["Lista Excel"], 2)
                    .recommend("Formalizzare registro fornitori con tutti i campi DORA (contratti, SLA, criticality, dependencies)"),
            ],
        ),
        Rule::new(
            "contract_clauses_2026",
            vec![
                Tier::contains(&["standard senza clausole"], 4)
                    .finding("Contratti fornitori ICT privi clausole DORA/NIS2 2026")
                    .gap("DORA Art. 30: Clausole contrattuali specifiche obbligatorie")
                    .recommend("CRITICO: Aggiornare contratti con clausole audit, incident notification, exit strategy, patch SLA"),
                Tier::contains(&["Parziale"], 2)
                    .recommend("Completare rinegoziazione contratti esistenti per includere tutte le clausole DORA/NIS2"),
            ],
        ),
        Rule::new(
            "supplier_certifications",
            vec![
                Tier::contains(&["Nessuna richiesta"], 3)
                    .finding("Certificazioni di sicurezza fornitori non richieste")
                    .gap("DORA Art. 30.2(f): Evidenza conformità fornitori richiesta")
                    .recommend("Richiedere certificazioni ISO 27001, SOC 2 Type II o attestazioni conformità NIS2 a fornitori critici"),
                Tier::contains(&["non verificate"], 1)
                    .recommend("Implementare processo verifica annuale certificazioni fornitori"),
            ],
        ),
        Rule::new(
            "concentration_risk",
            graded(
                edition,
                vec![Tier::contains(&["Nessuna analisi"], 2)
                    .finding("Rischio concentrazione fornitori non analizzato")
                    .gap("DORA Art. 28.9: Gestione rischio concentrazione ICT obbligatoria")
                    .recommend("Condurre analisi concentrazione fornitori e definire strategie mitigazione")],
                vec![Tier::contains(&["Consapevole"], 1)
                    .recommend("Documentare l'analisi di concentrazione e definire azioni di mitigazione per i fornitori principali")],
            ),
        ),
        Rule::new(
            "subcontractor_oversight",
            graded(
                edition,
                vec![Tier::contains(&["Nessuna visibilità"], 2)
                    .finding("Nessuna visibilità su subcontrattori fornitori ICT")
                    .gap("DORA Art. 30.3: Oversight su subcontrattori richiesto")
                    .recommend("Inserire clausola obbligo notifica e approvazione subcontrattori critici")],
                vec![Tier::contains(&["Parziale"], 1)
                    .recommend("Rendere contrattuale l'obbligo di notifica di tutti i subcontrattori")],
            ),
        ),
        Rule::new(
            "shadow_it_control",
            vec![
                Tier::contains(&["Nessun controllo"], 3)
                    .finding("Shadow IT non controllato - dipendenti usano app/cloud non autorizzati")
                    .gap("NIS2/DORA/GDPR: Cloud non censito = rischio data breach e violazione contratti")
                    .recommend("CRITICO: Implementare CASB (Cloud Access Security Broker) per discovery e controllo Shadow IT"),
                Tier::contains(&["Consapevolezza", "Discovery"], 2)
                    .recommend("Implementare policy uso cloud + DLP (Data Loss Prevention) + formazione utenti su rischi Shadow IT"),
                Tier::contains(&["Policy"], 1)
                    .recommend("Aggiungere enforcement automatico con blocco app non autorizzate via CASB/proxy"),
            ],
        ),
        Rule::new(
            "byod_policy",
            vec![
                Tier::contains(&["Nessuna policy"], 2)
                    .finding("Dispositivi personali (BYOD) e IoT aziendali non gestiti")
                    .gap("NIS2/CRA: Stampanti, telecamere, termostati smart = attack vector comune")
                    .recommend("Implementare MDM (Mobile Device Management) per BYOD + inventario IoT + network segmentation"),
                Tier::contains(&["Policy base", "MDM parziale"], 1)
                    .recommend("Estendere MDM a tutti dispositivi + containerization dati aziendali + policy wipe remoto"),
            ],
        ),
    ];

    area(edition, AreaKind::SupplyChain, "Supply Chain", rules)
}

fn incident_response(edition: Edition) -> AreaRules {
    let rules = vec![
        Rule::new(
            "notification_procedure",
            vec![
                Tier::contains(&["Nessun piano"], 5)
                    .finding("Piano notifica incidenti multicanale (NIS2/DORA/GDPR) assente")
                    .gap("NIS2 Art. 23 / DORA Art. 19 / GDPR Art. 33: Procedure notifica specifiche obbligatorie")
                    .recommend("CRITICO: Creare piano incident response con tempistiche notifica: 24h CSIRT, 2-4h ESA, 72h Garante"),
                Tier::contains(&["generico"], 3)
                    .recommend("Dettagliare piano notifica con tempistiche specifiche per ogni autorità e testarlo"),
                Tier::contains(&["non testato"], 1)
                    .recommend("Testare piano notifica con simulazione completa almeno annualmente"),
            ],
        ),
        Rule::new(
            "severity_classification",
            vec![
                Tier::contains(&["Nessun criterio"], 3)
                    .finding("Criteri classificazione gravità incidenti non definiti")
                    .gap("NIS2 Art. 23.3: Criteri identificazione incidenti significativi richiesti")
                    .recommend("Definire criteri oggettivi classificazione incidenti allineati a soglie NIS2/DORA/GDPR"),
                Tier::contains(&["soggettiva"], 2)
                    .recommend("Formalizzare criteri classificazione con decision tree e soglie quantitative"),
            ],
        ),
        Rule::new(
            "emergency_channels",
            vec![
                Tier::contains(&["Solo email"], 3)
                    .finding("Canali comunicazione emergenza inadeguati (solo email aziendale)")
                    .gap("Best practice NIS2: Canali out-of-band per crisis management")
                    .recommend("Implementare sistema comunicazione crisi out-of-band (es. Signal, telefoni dedicati)"),
                Tier::contains(&["no processo"], 1)
                    .recommend("Formalizzare processo utilizzo canali emergenza e testare trimestralmente"),
            ],
        ),
        Rule::new(
            "incident_reporting_log",
            graded(
                edition,
                vec![Tier::contains(&["Nessun registro"], 2)
                    .finding("Registro incidenti di sicurezza non mantenuto")
                    .gap("NIS2 Art. 23: Documentazione incidenti obbligatoria")
                    .recommend("Creare registro incidenti con root cause analysis e lessons learned")],
                vec![Tier::contains(&["Informale"], 1)
                    .recommend("Sostituire il tracciamento in ticket generici con un registro incidenti dedicato")],
            ),
        ),
        Rule::new(
            "simulation_exercises",
            graded(
                edition,
                vec![Tier::contains(&["Mai"], 2)
                    .finding("Nessuna esercitazione cyber crisis mai condotta")
                    .gap("NIS2 Art. 21.2(h): Testing resilienza ICT obbligatorio")
                    .recommend("Pianificare esercitazioni tabletop almeno annuali per test piano incident response")],
                vec![Tier::contains(&["Ad-hoc"], 1)
                    .recommend("Calendarizzare esercitazioni tabletop almeno annuali invece che su richiesta")],
            ),
        ),
        Rule::new(
            "digital_forensics_capability",
            vec![
                Tier::contains(&["Nessuna capacità"], 3)
                    .finding("Nessuna capacità di digital forensics per preservare prove")
                    .gap("NIS2/DORA: Se hackerati, autorità chiederanno le prove - necessaria chain of custody")
                    .recommend("CRITICO: Formare team su digital forensics + acquisire write-blockers + definire chain of custody"),
                Tier::contains(&["Base", "Procedure"], 2)
                    .recommend("Certificare team (GCFA, EnCE) e stabilire partnership con forensi esterni per casi complessi"),
                Tier::contains(&["Team dedicato"], 1)
                    .recommend("Aggiungere tool avanzati (Encase, FTK, X-Ways) e procedure automated evidence collection"),
            ],
        ),
    ];

    area(
        edition,
        AreaKind::IncidentResponse,
        "Incident Response",
        rules,
    )
}

fn technical_measures(edition: Edition) -> AreaRules {
    let rules = vec![
        Rule::new(
            "mfa_zerotrust",
            vec![
                Tier::contains(&["Nessuna MFA"], 5)
                    .finding("Multi-Factor Authentication (MFA) non implementata")
                    .gap("NIS2 Art. 21.2(b): MFA obbligatoria per accessi ICT")
                    .recommend("CRITICO: Implementare MFA per tutti gli utenti, priorità account privilegiati e accessi remoti"),
                Tier::contains(&["solo per VPN"], 3)
                    .recommend("Estendere MFA a tutti i servizi e iniziare implementazione Zero Trust architecture"),
                Tier::contains(&["no Zero Trust"], 1)
                    .recommend("Completare implementazione Zero Trust con microsegmentazione e least privilege"),
            ],
        ),
        Rule::new(
            "encryption",
            vec![
                Tier::contains(&["Nessuna crittografia"], 4)
                    .finding("Crittografia dati sensibili non implementata")
                    .gap("GDPR Art. 32 / NIS2 Art. 21.2(c): Cifratura dati obbligatoria")
                    .recommend("CRITICO: Implementare cifratura at-rest per database e at-transit per tutte comunicazioni"),
                Tier::contains(&["Parziale"], 2)
                    .recommend("Estendere crittografia a tutti i dati sensibili con key management centralizzato"),
                Tier::contains(&["Buono"], 1)
                    .recommend("Implementare key management con HSM e rotazione automatica chiavi"),
            ],
        ),
        Rule::new(
            "vulnerability_management",
            vec![
                Tier::contains(&["Nessun processo"], 5)
                    .finding("Vulnerability e patch management non implementato")
                    .gap("NIS2 Art. 21.2(a) / CRA: Gestione vulnerabilità sistematica obbligatoria")
                    .recommend("CRITICO: Implementare vulnerability scanning continuo e patch management con SLA <30 giorni per critical"),
                Tier::contains(&["Manuale"], 3)
                    .recommend("Automatizzare vulnerability scanning e patch deployment"),
                Tier::contains(&["Base"], 1)
                    .recommend("Ridurre SLA patching critico a <7 giorni e implementare metriche compliance"),
            ],
        ),
        Rule::new(
            "immutable_backups",
            vec![
                Tier::contains(&["Nessun backup", "non protetti"], 4)
                    .finding("Backup immutabili anti-ransomware non implementati")
                    .gap("NIS2 Art. 21.3 / DORA Art. 12: Backup sicuri e testati obbligatori")
                    .recommend("CRITICO: Implementare backup immutabili (WORM) con test restore mensili"),
                Tier::contains(&["non testati"], 2)
                    .recommend("Testare restore backup almeno trimestralmente e documentare RTO/RPO"),
                Tier::contains(&["Ottimo"], 1)
                    .recommend("Considerare implementazione air-gapped backup per massima protezione ransomware"),
            ],
        ),
        Rule::new(
            "network_segmentation",
            graded(
                edition,
                vec![Tier::contains(&["piatta senza"], edition.points(1, 2))
                    .finding("Rete non segmentata - rischio lateral movement")
                    .recommend("Implementare segmentazione rete almeno a livello VLAN per zone funzionali")],
                vec![Tier::contains(&["Base"], 1)
                    .recommend("Evolvere dalle VLAN di base a una segmentazione per zone (DMZ, produzione, uffici)")],
            ),
        ),
        Rule::new(
            "logging_monitoring",
            graded(
                edition,
                vec![Tier::contains(&["non centralizzati"], edition.points(1, 2))
                    .finding("Logging non centralizzato - difficoltà incident detection")
                    .gap("NIS2 Art. 21 / DORA Art. 17: SIEM e log retention 18+ mesi richiesti")
                    .recommend("Implementare SIEM enterprise con retention minimo 18 mesi")],
                vec![Tier::contains(&["Parziale"], 1)
                    .recommend("Introdurre un SIEM per correlare i log aggregati dei sistemi critici")],
            ),
        ),
        Rule::new(
            "physical_security",
            vec![
                Tier::contains(&["Nessun controllo"], 3)
                    .finding("Sicurezza fisica data center inadeguata - manca controllo accessi fisici")
                    .gap("ISO 27001 A.11 / Best Practice: Physical security spesso dimenticata ma critica")
                    .recommend("CRITICO: Implementare badge elettronici + log accessi + videosorveglianza per server room"),
                Tier::contains(&["Base", "Buono"], 2)
                    .recommend("Aggiungere biometria per aree critiche + correlazione log fisici con log digitali"),
                Tier::contains(&["Ottimo"], 1)
                    .recommend("Implementare mantrap (doppia porta) e procedure visitatori con escort obbligatorio"),
            ],
        ),
        Rule::new(
            "environmental_controls",
            vec![
                Tier::contains(&["Nessuna protezione"], 3)
                    .finding("Nessuna protezione da disastri naturali - server vulnerabili")
                    .gap("ISO 27001 A.11.1.4 / NIS2: Protezione da eventi fisici richiesta")
                    .recommend("CRITICO: Installare UPS + rilevazione incendi + sistema soppressione + generatore backup"),
                Tier::contains(&["Minima", "Buona"], 2)
                    .recommend("Aggiungere generatore + monitoraggio temperatura/umidità H24 con alerting"),
                Tier::contains(&["Ottima"], 1)
                    .recommend("Considerare ridondanza geografica (sito DR) per massima resilienza"),
            ],
        ),
        Rule::new(
            "business_continuity_rto",
            vec![
                Tier::contains(&["Immediatamente"], 4)
                    .finding("DOMANDA KILLER: Business si ferma immediatamente senza Internet - RTO inadeguato")
                    .gap("NIS2/DORA: Business Continuity = Resilienza Operativa Digitale - CRITICO per NIS2/DORA")
                    .recommend("CRITICO MASSIMO: Implementare DR site + procedure manuali + comunicazione offline - RTO target <4h"),
                Tier::contains(&["Poche ore", "1 giorno"], 3)
                    .finding("RTO business troppo lungo - vulnerabilità operativa")
                    .recommend("Implementare warm standby con RTO <8h + documentare procedure failover"),
                Tier::contains(&["2-3 giorni"], 2)
                    .recommend("Ridurre RTO con hot standby o active-active per servizi critici"),
            ],
        ),
    ];

    area(
        edition,
        AreaKind::TechnicalMeasures,
        "Misure Tecniche e Fisiche",
        rules,
    )
}

fn ai_ethics(edition: Edition) -> AreaRules {
    let rules = vec![
        Rule::new(
            "ai_transparency",
            vec![
                Tier::contains(&["Nessuna disclosure"], 4)
                    .finding("Utenti non informati quando interagiscono con sistemi IA")
                    .gap("AI Act Art. 52: Obbligo trasparenza per sistemi IA che interagiscono con persone")
                    .recommend("Implementare notifica chiara agli utenti quando interagiscono con sistemi IA"),
                Tier::contains(&["Parziale"], 2)
                    .recommend("Rendere disclosure IA più evidente e accessibile all'utente"),
            ],
        ),
        Rule::new(
            "training_data_quality",
            vec![
                Tier::contains(&["Nessuna analisi"], 4)
                    .finding("Qualità e bias dei dati di addestramento IA non verificati")
                    .gap("AI Act Art. 10: Governance qualità dati per sistemi IA obbligatoria")
                    .recommend("Implementare data quality assessment e bias testing per tutti sistemi IA sviluppati internamente"),
                Tier::contains(&["no verifica bias"], 2)
                    .recommend("Integrare analisi bias nei dati di addestramento con metodologie standardizzate"),
            ],
        ),
        Rule::new(
            "human_oversight",
            vec![
                Tier::contains(&["completamente automatizzati"], 4)
                    .finding("Sistemi IA ad alto rischio senza sorveglianza umana")
                    .gap("AI Act Art. 14: Human oversight obbligatorio per sistemi IA ad alto rischio")
                    .recommend("CRITICO: Implementare human-in-the-loop per tutte decisioni significative prese da sistemi IA"),
                Tier::contains(&["solo su richiesta"], 2)
                    .recommend("Rendere human oversight obbligatorio e automatico, non opzionale"),
            ],
        ),
        Rule::new(
            "ai_risk_assessment",
            graded(
                edition,
                vec![Tier::contains(&["non valutati"], 2)
                    .finding("Sistemi IA ad alto rischio non sottoposti a valutazione conformità")
                    .gap("AI Act Art. 9: Valutazione conformità obbligatoria per IA alto rischio")
                    .recommend("Eseguire valutazione conformità completa per tutti sistemi IA classificati ad alto rischio")],
                vec![Tier::contains(&["In corso"], 1)
                    .recommend("Completare la valutazione di conformità in corso prima della messa in esercizio")],
            ),
        ),
        Rule::new(
            "ai_documentation",
            graded(
                edition,
                vec![Tier::contains(&["Nessuna documentazione"], edition.points(1, 2))
                    .finding("Documentazione tecnica sistemi IA inadeguata")
                    .gap("AI Act Art. 11: Documentazione tecnica dettagliata richiesta")
                    .recommend("Creare documentazione tecnica completa per tutti sistemi IA secondo template AI Act")],
                vec![Tier::contains(&["Minima"], 1)
                    .recommend("Integrare la documentazione dei fornitori con schede tecniche interne per ogni sistema IA")],
            ),
        ),
    ];

    AreaRules {
        applicability: Applicability::RequiresSelection {
            question: "ai_systems_in_use",
            sentinel: "Nessun sistema IA in uso",
            note: "Nessun sistema IA attualmente in uso - monitorare futuri utilizzi per conformità AI Act",
        },
        ..area(edition, AreaKind::AiEthics, "IA ed Etica", rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worst_case(areas: &[AreaRules], kind: AreaKind) -> i32 {
        areas
            .iter()
            .find(|area| area.area == kind)
            .map(|area| area.rules.iter().map(Rule::worst_case_points).sum())
            .unwrap_or_default()
    }

    #[test]
    fn graduated_edition_only_adds_tiers() {
        let base = areas(Edition::Base);
        let graduated = areas(Edition::Graduated);

        for kind in AreaKind::ordered() {
            assert!(worst_case(&graduated, kind) >= worst_case(&base, kind), "{kind:?}");
        }
        assert_eq!(worst_case(&base, AreaKind::Governance), 25);
        assert_eq!(worst_case(&graduated, AreaKind::Governance), 27);
        assert_eq!(worst_case(&base, AreaKind::TechnicalMeasures), 30);
        assert_eq!(worst_case(&graduated, AreaKind::TechnicalMeasures), 32);
    }

    #[test]
    fn base_edition_has_no_sector_rule() {
        let base = areas(Edition::Base);
        assert!(base[0].rule_for("sector").is_none());
        assert!(areas(Edition::Graduated)[0].rule_for("sector").is_some());
    }
}
