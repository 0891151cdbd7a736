use super::super::domain::AreaKind;
use super::{Question, QuestionKind, Visibility};

fn single(
    id: &'static str,
    area: AreaKind,
    label: &'static str,
    options: Vec<&'static str>,
) -> Question {
    Question {
        id,
        area,
        label,
        kind: QuestionKind::SingleChoice,
        options,
        visibility: Visibility::Always,
    }
}

fn multiple(
    id: &'static str,
    area: AreaKind,
    label: &'static str,
    options: Vec<&'static str>,
) -> Question {
    Question {
        kind: QuestionKind::MultipleChoice,
        ..single(id, area, label, options)
    }
}

pub(super) fn questions() -> Vec<Question> {
    let mut questions = governance();
    questions.extend(risk_management());
    questions.extend(supply_chain());
    questions.extend(incident_response());
    questions.extend(technical_measures());
    questions.extend(ai_ethics());
    questions
}

fn governance() -> Vec<Question> {
    use AreaKind::Governance as Area;

    vec![
        single(
            "sector",
            Area,
            "Settore organizzazione (NIS2 Annex I & II / DORA Art. 2)",
            vec![
                "Servizi finanziari (Banche, Assicurazioni, Investimenti)",
                "Energia (Elettricità, Gas, Idrogeno)",
                "Trasporti (Aereo, Ferroviario, Marittimo)",
                "Sanità (Ospedali, Dispositivi medici, Farmaceutico)",
                "Infrastrutture digitali (DNS, Cloud, Data center)",
                "Pubblica amministrazione (Governo centrale/regionale)",
                "Acqua e acque reflue",
                "Provider digitali (Marketplace, Motori ricerca, Social network)",
                "Spazio",
                "Manifatturiero (Prodotti critici)",
                "Servizi postali e corrieri",
                "Gestione rifiuti",
                "Produzione chimica",
                "Produzione e distribuzione alimentare",
                "Ricerca",
                "Altro/Non elencato",
            ],
        ),
        single(
            "organization_size",
            Area,
            "Dimensione organizzazione",
            vec![
                "Microimpresa (<10 dipendenti, <€2M fatturato)",
                "Piccola impresa (10-49 dipendenti, €2-10M fatturato)",
                "Media impresa (50-249 dipendenti, €10-50M fatturato)",
                "Grande impresa (≥250 dipendenti O ≥€50M fatturato)",
                "Ente pubblico/PA",
            ],
        ),
        multiple(
            "scope",
            Area,
            "Ambito normativo applicabile (seleziona tutti applicabili)",
            vec![
                "NIS2 Entità Essenziale (>250 dip. O >€50M in settore critico)",
                "NIS2 Entità Importante (>50 dip. O >€10M in settore importante)",
                "DORA Entità Finanziaria (Banca, Assicurazione, Pagamenti)",
                "DORA Fornitore ICT Terzo per entità finanziarie",
                "GDPR - Trattamento dati personali",
                "AI Act - Utilizzo sistemi IA",
                "Cyber Resilience Act - Prodotti digitali con componenti digitali",
                "Non direttamente in scope (conformità volontaria)",
            ],
        ),
        single(
            "board_approval",
            Area,
            "Il CdA ha approvato formalmente il piano di conformità 2026? (NIS2/DORA/AI Act)",
            vec![
                "No - Nessuna approvazione formale del CdA",
                "Parziale - Discusso ma non approvato formalmente",
                "Sì - Piano approvato ma datato (>12 mesi)",
                "Sì - Piano approvato nel 2025/2026 con delibera formale",
                "Sì - Piano approvato con revisioni trimestrali documentate",
            ],
        ),
        single(
            "executive_training",
            Area,
            "Formazione obbligatoria - Esistono prove (attestati) che i vertici abbiano ricevuto formazione?",
            vec![
                "No - Nessuna formazione ai vertici",
                "Informale - Briefing senza attestazione",
                "Base - Formazione generica annuale con attestati",
                "Avanzata - Formazione specialistica cybersecurity + IA con attestati",
                "Eccellente - Formazione trimestrale certificata con test di verifica",
            ],
        ),
        single(
            "model_231_updated",
            Area,
            "Modello Organizzativo 231 - È stato aggiornato per i nuovi reati informatici e AI Act?",
            vec![
                "No - Modello 231 non presente",
                "No - Modello 231 presente ma mai aggiornato per cyber/IA",
                "Parziale - Aggiornato solo per reati informatici",
                "Sì - Aggiornato nel 2025/2026 includendo cyber e IA",
                "Sì - Aggiornato con analisi rischi specifica e protocolli operativi",
            ],
        ),
        single(
            "roles_assigned",
            Area,
            "Nomine formali - CISO, DPO, Responsabile sorveglianza IA nominati con atto formale?",
            vec![
                "No - Nessuna nomina formale",
                "Parziale - Solo DPO nominato (obbligo GDPR)",
                "Buono - CISO e DPO nominati formalmente",
                "Ottimo - CISO, DPO e Resp. IA nominati con lettera di incarico",
                "Eccellente - Tutti nominati con reporting line al CdA e budget dedicato",
            ],
        ),
        single(
            "iso_27001_compliance",
            Area,
            "ISO/IEC 27001:2022 - L'azienda ha un SGSI (Sistema Gestione Sicurezza Informazioni)?",
            vec![
                "No - Nessun SGSI implementato",
                "In preparazione - SGSI in fase di progettazione",
                "Parziale - SGSI informale senza certificazione",
                "Sì - SGSI documentato conforme ISO 27001 (non certificato)",
                "Sì - ISO 27001:2022 certificata con audit annuali",
            ],
        ),
        single(
            "nist_csf_adoption",
            Area,
            "NIST CSF 2.0 - Mappate le 6 funzioni (Govern/Identify/Protect/Detect/Respond/Recover)?",
            vec![
                "No - Funzioni NIST non mappate",
                "Conoscenza base - Team conosce NIST ma non applicato",
                "Parziale - Alcune funzioni mappate informalmente",
                "Buono - Tutte le 6 funzioni mappate e documentate",
                "Eccellente - NIST CSF 2.0 completamente integrato con metriche KPI",
            ],
        ),
    ]
}

fn risk_management() -> Vec<Question> {
    use AreaKind::RiskManagement as Area;

    vec![
        single(
            "unified_asset_inventory",
            Area,
            "Inventario unificato - Include hardware, software, dati personali (GDPR) e sistemi IA?",
            vec![
                "No - Nessun inventario asset",
                "Parziale - Solo inventario IT hardware",
                "Buono - Inventario IT + software ma non dati personali/IA",
                "Ottimo - Inventario completo IT + registro GDPR separato",
                "Eccellente - Inventario unificato integrato (IT + dati + IA) con classificazione",
            ],
        ),
        single(
            "ai_classification",
            Area,
            "I sistemi IA sono classificati per livello rischio? (AI Act Art. 6)",
            vec![
                "Non applicabile - Nessun sistema IA in uso",
                "No - Sistemi IA presenti ma non classificati",
                "Parziale - Classificazione informale",
                "Sì - Classificazione formale (Rischio minimo/Limitato/Alto/Inaccettabile)",
                "Sì - Classificazione + valutazione conformità per sistemi Alto Rischio",
            ],
        ),
        single(
            "dpia_conducted",
            Area,
            "DPIA (Valutazione Impatto Privacy) - Eseguita per trattamenti rischiosi? (GDPR Art. 35)",
            vec![
                "No - Mai eseguita DPIA",
                "Parziale - DPIA eseguita ma datata (>3 anni)",
                "Sì - DPIA eseguita per alcuni trattamenti ad alto rischio",
                "Sì - DPIA per tutti i trattamenti ad alto rischio (ultimi 24 mesi)",
                "Sì - DPIA aggiornate con revisione annuale e documentate",
            ],
        ),
        single(
            "sbom_available",
            Area,
            "Software Bill of Materials (SBOM) - Disponibile per monitorare vulnerabilità? (CRA)",
            vec![
                "No - Nessun SBOM disponibile",
                "Parziale - SBOM solo per software critico",
                "Sì - SBOM per software sviluppato internamente",
                "Sì - SBOM richiesto ai fornitori per software acquistato",
                "Sì - SBOM completo con monitoraggio automatico vulnerabilità (CVE)",
            ],
        ),
        single(
            "risk_assessment_frequency",
            Area,
            "Frequenza valutazione rischi ICT (DORA Art. 6 / NIS2 Art. 21)",
            vec![
                "Mai - Nessuna valutazione rischi ICT",
                "Ad-hoc - Solo quando richiesto",
                "Annuale - Valutazione annuale documentata",
                "Semestrale - Valutazione ogni 6 mesi",
                "Continua - Monitoraggio continuo con reporting trimestrale al CdA",
            ],
        ),
    ]
}

fn supply_chain() -> Vec<Question> {
    use AreaKind::SupplyChain as Area;

    vec![
        single(
            "ict_supplier_register",
            Area,
            "Registro fornitori ICT - Distingue tra fornitori generici e critici? (DORA/NIS2)",
            vec![
                "No - Nessun registro fornitori ICT",
                "Base - Lista Excel generica",
                "Buono - Registro con classificazione criticità",
                "Ottimo - Registro DORA-compliant con tutti i dettagli richiesti",
                "Eccellente - Registro integrato con risk scoring e monitoring continuo",
            ],
        ),
        single(
            "contract_clauses_2026",
            Area,
            "Clausole contrattuali 2026 - Diritto audit, patch management, exit strategy?",
            vec![
                "No - Contratti standard senza clausole specifiche",
                "Parziale - Solo alcune clausole in alcuni contratti",
                "Buono - Clausole presenti nei nuovi contratti (post 2025)",
                "Ottimo - Clausole in tutti contratti critici + rinegoziazione vecchi contratti",
                "Eccellente - Clausole complete + SLA misurabili + penali definite",
            ],
        ),
        single(
            "supplier_certifications",
            Area,
            "Certificazioni fornitori - Richieste evidenze ISO 27001, SOC 2, attestazioni NIS2?",
            vec![
                "No - Nessuna richiesta di certificazioni",
                "Informale - Richieste ma non verificate",
                "Buono - Certificazioni richieste e archiviate per fornitori critici",
                "Ottimo - Certificazioni verificate annualmente",
                "Eccellente - Verifiche on-site + audit di terza parte + continuous monitoring",
            ],
        ),
        single(
            "concentration_risk",
            Area,
            "Gestione rischio concentrazione fornitori (DORA Art. 28.9)",
            vec![
                "No - Nessuna analisi concentrazione",
                "Consapevole - Identificati fornitori principali ma no azioni",
                "Documentato - Analisi concentrazione eseguita",
                "Attivo - Strategie di mitigazione implementate",
                "Avanzato - Limiti definiti, diversificazione, fornitori alternativi testati",
            ],
        ),
        single(
            "subcontractor_oversight",
            Area,
            "Visibilità su subcontrattori di quarto livello (DORA Art. 30.3)",
            vec![
                "No - Nessuna visibilità su subcontrattori",
                "Parziale - Conoscenza di alcuni subcontrattori principali",
                "Buono - Obbligo contrattuale di notifica subcontrattori",
                "Ottimo - Diritto di approvazione per subcontrattori critici",
                "Eccellente - Oversight completo con audit diretti su subcontrattori",
            ],
        ),
        single(
            "shadow_it_control",
            Area,
            "Shadow IT - Controllo app/cloud non autorizzati usati dai dipendenti?",
            vec![
                "No - Nessun controllo su Shadow IT",
                "Consapevolezza - Sappiamo che esiste ma non monitoriamo",
                "Discovery - Tool CASB/monitoring per identificare app non autorizzate",
                "Policy - Shadow IT identificato + policy uso + formazione",
                "Controllo totale - CASB + DLP + blocco automatico app non autorizzate",
            ],
        ),
        single(
            "byod_policy",
            Area,
            "Policy BYOD (Bring Your Own Device) + IoT aziendali (stampanti, telecamere, termostati smart)?",
            vec![
                "No - Nessuna policy BYOD, dispositivi personali non gestiti",
                "Policy base - Regole scritte ma non enforced tecnicamente",
                "MDM parziale - Mobile Device Management solo per alcuni dispositivi",
                "MDM completo - Tutti i dispositivi BYOD gestiti + containerization",
                "Zero Trust IoT - MDM + network segmentation + inventario IoT completo",
            ],
        ),
    ]
}

fn incident_response() -> Vec<Question> {
    use AreaKind::IncidentResponse as Area;

    vec![
        single(
            "notification_procedure",
            Area,
            "Piano incident response con notifica 24h CSIRT (NIS2), poche ore ESA (DORA), 72h Garante (GDPR)?",
            vec![
                "No - Nessun piano di notifica multicanale",
                "Parziale - Piano generico senza tempistiche specifiche",
                "Buono - Piano documenta i diversi obblighi ma non testato",
                "Ottimo - Piano documentato e testato annualmente",
                "Eccellente - Piano testato con simulazioni, procedure automatizzate, template pre-approvati",
            ],
        ),
        single(
            "severity_classification",
            Area,
            "Criteri classificazione gravità - Quando un incidente è \"significativo\" vs \"grave\" vs \"violazione dati\"?",
            vec![
                "No - Nessun criterio di classificazione",
                "Generico - Classificazione soggettiva caso per caso",
                "Definito - Criteri scritti ma non allineati a NIS2/DORA/GDPR",
                "Allineato - Criteri conformi alle soglie normative",
                "Avanzato - Criteri dettagliati + decision tree + classificazione automatica via SIEM",
            ],
        ),
        single(
            "emergency_channels",
            Area,
            "Canali comunicazione emergenza - Sistemi protetti fuori rete aziendale per gestire crisi?",
            vec![
                "No - Solo email aziendale",
                "Parziale - Telefoni cellulari ma no processo formale",
                "Buono - Canali alternativi identificati (es. Signal, telefono dedicato)",
                "Ottimo - Sistema di crisis communication out-of-band testato",
                "Eccellente - Sistema ridondante + crittografato + testato trimestralmente",
            ],
        ),
        single(
            "incident_reporting_log",
            Area,
            "Registro incidenti di sicurezza - Mantiene storico con analisi root cause? (NIS2 Art. 23)",
            vec![
                "No - Nessun registro incidenti",
                "Informale - Incidenti tracciati in ticket generici",
                "Base - Registro incidenti dedicato",
                "Buono - Registro con root cause analysis per incidenti significativi",
                "Eccellente - Registro completo + lessons learned + KPI trending + reporting al CdA",
            ],
        ),
        single(
            "simulation_exercises",
            Area,
            "Esercitazioni e simulazioni cyber crisis (NIS2 Art. 21.2(h))",
            vec![
                "Mai - Nessuna esercitazione",
                "Ad-hoc - Solo quando richiesto",
                "Annuale - Tabletop exercise annuale",
                "Semestrale - Esercitazioni ogni 6 mesi con report",
                "Trimestrale - Simulazioni avanzate (Red Team) + reporting al CdA",
            ],
        ),
        single(
            "digital_forensics_capability",
            Area,
            "Digital forensics - Potete preservare prove digitali senza inquinare i log?",
            vec![
                "No - Nessuna capacità forense",
                "Base - Team IT sa fare backup ma senza chain of custody",
                "Procedure - Procedure forensi documentate + tool base",
                "Team dedicato - Team interno con certificazioni (GCFA, EnCE)",
                "Eccellenza forense - Team + write-blockers + chain of custody + partnership con forenser esterni",
            ],
        ),
    ]
}

fn technical_measures() -> Vec<Question> {
    use AreaKind::TechnicalMeasures as Area;

    vec![
        single(
            "mfa_zerotrust",
            Area,
            "MFA (Autenticazione a due fattori) + Zero Trust - Attivi su tutti gli accessi?",
            vec![
                "No - Nessuna MFA implementata",
                "Parziale - MFA solo per VPN o admin",
                "Buono - MFA per tutti gli utenti, ma no Zero Trust",
                "Ottimo - MFA universale + principi Zero Trust in implementazione",
                "Eccellente - MFA phishing-resistant (FIDO2) + Zero Trust completo",
            ],
        ),
        single(
            "encryption",
            Area,
            "Crittografia - Dati sensibili cifrati \"at rest\" e \"in transit\"? (GDPR/NIS2)",
            vec![
                "No - Nessuna crittografia sistematica",
                "Parziale - Solo dati in transito (HTTPS)",
                "Buono - Crittografia at rest per database critici",
                "Ottimo - Crittografia at rest e in transit per tutti dati sensibili",
                "Eccellente - Crittografia end-to-end + key management HSM + rotazione chiavi",
            ],
        ),
        single(
            "vulnerability_management",
            Area,
            "Vulnerability Management - Processo automatizzato per scan e patch entro tempi certi? (CRA/NIS2)",
            vec![
                "No - Nessun processo vulnerability management",
                "Manuale - Scan manuali sporadici",
                "Base - Scan mensili con patching best-effort",
                "Buono - Scan settimanali + patching critico <30 giorni",
                "Eccellente - Scan continui + patching critico <7 giorni + metriche SLA",
            ],
        ),
        single(
            "immutable_backups",
            Area,
            "Business Continuity - Backup immutabili (anti-ransomware) e testati?",
            vec![
                "No - Nessun backup o backup non protetti",
                "Base - Backup regolari ma non immutabili",
                "Buono - Backup immutabili (WORM) ma non testati",
                "Ottimo - Backup immutabili testati semestralmente",
                "Eccellente - Backup immutabili + air-gapped + test mensili + RTO documentati",
            ],
        ),
        single(
            "network_segmentation",
            Area,
            "Segmentazione rete e microsegmentation (NIS2 Art. 21.2)",
            vec![
                "No - Rete piatta senza segmentazione",
                "Base - VLAN di base per separare reti",
                "Buono - Segmentazione per zone (DMZ, produzione, uffici)",
                "Ottimo - Microsegmentazione con firewall interni",
                "Eccellente - Microsegmentazione software-defined + Zero Trust network",
            ],
        ),
        single(
            "logging_monitoring",
            Area,
            "Logging centralizzato e SIEM (NIS2 Art. 21 / DORA Art. 17)",
            vec![
                "No - Log locali non centralizzati",
                "Parziale - Log aggregati ma no SIEM",
                "Buono - SIEM implementato per sistemi critici",
                "Ottimo - SIEM enterprise con retention 18+ mesi",
                "Eccellente - SIEM + SOAR + threat intelligence + 24/7 SOC",
            ],
        ),
        single(
            "physical_security",
            Area,
            "Accesso data center/server room - Log accessi fisici? Badge? Telecamere?",
            vec![
                "No - Nessun controllo accessi fisici",
                "Base - Stanze chiuse a chiave ma senza log",
                "Buono - Badge elettronici con log accessi",
                "Ottimo - Badge + videosorveglianza + log correlati",
                "Eccellente - Biometria + mantrap + monitoraggio H24 + procedure visitatori",
            ],
        ),
        single(
            "environmental_controls",
            Area,
            "Protezione disastri naturali - Antincendio, anti-allagamento, UPS, generatori?",
            vec![
                "No - Nessuna protezione ambientale",
                "Minima - Solo UPS base",
                "Buona - UPS + rilevazione incendi + estintori",
                "Ottima - UPS + generatori + soppressione incendi + clima controllato",
                "Eccellente - Ridondanza geografica + dual power feed + monitoraggio ambientale H24",
            ],
        ),
        single(
            "business_continuity_rto",
            Area,
            "Se stacchiamo Internet OGGI, tra quanto tempo l'azienda smette di fatturare? (RTO reale)",
            vec![
                "Immediatamente - Business si ferma subito",
                "Poche ore - Possiamo lavorare 2-4 ore poi stop",
                "1 giorno - Abbiamo procedure manuali per 24h",
                "2-3 giorni - DR site attivabile in 48-72h",
                "Mai - Hot standby/active-active, failover automatico <1h",
            ],
        ),
    ]
}

fn ai_ethics() -> Vec<Question> {
    use AreaKind::AiEthics as Area;

    vec![
        multiple(
            "ai_systems_in_use",
            Area,
            "Sistemi IA attualmente in uso nell'organizzazione",
            vec![
                "Nessun sistema IA in uso",
                "Chatbot e assistenti virtuali",
                "Sistemi di riconoscimento biometrico (volto, voce, impronte)",
                "Sistemi di recruiting o valutazione HR",
                "Sistemi di credit scoring o valutazione rischio finanziario",
                "Sistemi di analisi predittiva per decisioni automatizzate",
                "Sistemi di sorveglianza o sicurezza",
                "IA per diagnostica medica o healthcare",
                "IA generativa (GPT, LLM, generazione immagini)",
                "Sistemi di automazione processi (RPA con ML)",
            ],
        ),
        single(
            "ai_transparency",
            Area,
            "Trasparenza IA - Gli utenti sanno quando interagiscono con IA? (AI Act Art. 52)",
            vec![
                "Non applicabile - Nessun sistema IA rivolto a utenti",
                "No - Nessuna disclosure agli utenti",
                "Parziale - Disclosure in privacy policy ma non evidente",
                "Sì - Notifica chiara all'avvio interazione (es. \"Chatbot IA\")",
                "Sì - Disclosure + spiegazione capacità e limitazioni + opt-out disponibile",
            ],
        ),
        single(
            "training_data_quality",
            Area,
            "Qualità dati addestramento - Dati privi di bias e conformi GDPR? (AI Act Art. 10)",
            vec![
                "Non applicabile - Solo IA di terze parti pre-addestrate",
                "No - Nessuna analisi qualità/bias dati",
                "Parziale - Analisi qualità dati ma no verifica bias",
                "Buono - Data quality check + analisi bias documentata",
                "Eccellente - Data governance completa + bias testing + audit trail + conformità GDPR",
            ],
        ),
        single(
            "human_oversight",
            Area,
            "Sorveglianza umana - Garantito intervento umano per decisioni IA ad alto rischio? (AI Act Art. 14)",
            vec![
                "Non applicabile - Nessun sistema IA ad alto rischio",
                "No - Sistemi completamente automatizzati",
                "Parziale - Revisione umana solo su richiesta",
                "Sì - Human-in-the-loop per tutte decisioni significative",
                "Sì - Human oversight + diritto contestazione + log decisioni + audit trail",
            ],
        ),
        single(
            "ai_risk_assessment",
            Area,
            "Valutazione rischi sistemi IA ad alto rischio (AI Act Art. 9)",
            vec![
                "Non applicabile - Nessun sistema alto rischio",
                "No - Sistemi alto rischio non valutati",
                "In corso - Valutazione in preparazione",
                "Sì - Valutazione conformità eseguita e documentata",
                "Sì - Valutazione + test + documentazione tecnica + dichiarazione conformità UE",
            ],
        ),
        single(
            "ai_documentation",
            Area,
            "Documentazione tecnica sistemi IA (AI Act Art. 11)",
            vec![
                "No - Nessuna documentazione tecnica IA",
                "Minima - Documentazione di base dai fornitori",
                "Parziale - Documentazione per alcuni sistemi critici",
                "Buona - Documentazione dettagliata per tutti sistemi IA",
                "Completa - Doc tecnica + log decisioni + accuratezza + bias testing + update procedure",
            ],
        ),
    ]
}
