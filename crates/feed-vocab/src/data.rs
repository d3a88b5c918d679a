//! Static vocabulary data.
//!
//! These tables are the fixed translation layer between raw source values and
//! the canonical export vocabulary. They are data, not logic: `Vocabulary`
//! builds its immutable lookup structures from them at construction time.

/// Raw lifecycle status codes and their canonical export statuses. Closed
/// domain: a raw status outside this table fails validation for the whole
/// table that carried it.
pub(crate) const STATUS: &[(&str, &str)] = &[
    ("Stored", "In Inventory"),
    ("Shipped", "In Transit"),
    ("Disposed", "Exhausted"),
    ("Released", "In Inventory"),
    ("Sentout", "In Transit"),
    ("Failed", "In Inventory"),
    ("Distribution", "In Inventory"),
    ("Discarded", "Exhausted"),
    ("Quarantine", "In Inventory"),
    ("ToBeShipped", "In Inventory"),
    ("InProcess", "In Inventory"),
];

/// Raw facility names classified into organizational buckets. Open domain by
/// nature (new partner facilities appear over time): unmapped names become
/// null instead of failing the batch.
pub(crate) const FACILITY: &[(&str, &str)] = &[
    ("MSD-ATC Pharma", "Site"),
    ("LabCorp Drug Development-Europe", "Lab Corp"),
    ("LabCorp Drug Development-USA", "Lab Corp"),
    ("MSD- SGS Belgium", "site"),
    ("LabCorp Drug Development - Asia", "Lab Corp"),
    ("MSD - UZ Leuven - Campus Gasthuisberg", "Site"),
    ("MSD-UZGent-Drug Research Unit Ghent", "Site"),
    ("MSD-CCP Leuven", "Site"),
    ("MSD - Belgium", "site"),
    ("MSD-Collaborative NeuroScience Network", "Site"),
    ("MSD-Clinical Pharmacology of Miami", "Site"),
    ("MSD- UZ Gent-Drug", "Site"),
    ("MSD-MD Clinical", "Site"),
    ("MSD-Clinical Research Hospital Tokyo", "Site"),
    ("MSD-Medical Corp Heishinkai OPHAC Hos", "Site"),
    ("MSD-Yale University", "Site"),
    ("MSD-Thomas Jefferson University", "Site"),
    ("MSD - Profil Institute for Clinical Research", "Site"),
    ("MSD-SGS Clinical Pharmacology Unit", "Site"),
    ("MSD-Research Centers of America LLC", "Site"),
    ("Celerion-Nebraska", "Celerion"),
    ("UZ Leuven - Campus Gasthuisber", "Site"),
    ("MSD - Japan", "MSD - Japan"),
    ("MSD-Collaborative Neuroscience Research LLC", "Site"),
    ("MSD-P-One Clinic", "Site"),
    ("MSD- UZ Ghent", "Site"),
    ("MSD-UZ GENT", "Site"),
    ("MSD-SGS Belgium", "Site"),
    ("MSD-Hassman Research Institute Marlton Site", "Site"),
    ("MSD-Hassman Research Insitute", "Site"),
    ("MSD-Genesis Clinical Research", "Site"),
    ("MSD-Jasz Nagykun Szolnok Megyei Hetenyi", "Site"),
    ("MSD-BioKinetic Clinical Applications", "Site"),
    ("Coriell Institute Med Research", "Site"),
    ("MSD-QPS Miami Reaearch Associates", "QPS"),
    ("MSD-AMR-NOCCR", "Site"),
    ("Celerion-Arizona", "Celerion"),
    ("MSD-PRA Health Sciences Research Martini", "ICON"),
    ("MSD-Advanced Pharma CR, LLC", "Site"),
    ("Drug Research Unit Gent", "Site"),
    ("SGS Life Science Services", "Site"),
    ("Worldwide Clinical Trials", "Site"),
    ("MSD - Hospital Brotonneau", "Site"),
    ("Hiroshima Allergy & Respiratory Clinic", "Site"),
    ("Takahashi Clinic", "Site"),
    ("MSD-hVIVO Queen Mary Centre", "hVIVO Services Limited"),
    ("MSD-Republican Clinical Hospital of Moldova", "Site"),
    ("MSD-Chaim Sheba Medical Center", "Site"),
    ("MSD-Hospital Universitario Central de Asturias", "Site"),
    ("MSD- Hospital Universitario de Asturias", "Site"),
    ("MSD-H.U Vall de Hebron", "Site"),
    ("MSD", "site"),
    ("MSD - Spain", "MSD - Spain"),
    ("MSD-Hospital Puerta de Hierro", "Site"),
    ("MSD-Hospital Universitario Insular DE G", "Site"),
    ("Koukokukai Ebisu Medical Clinic", "Site"),
    ("Q2 Solutions-Clinica De Neumologia", "Q2"),
    ("Alergologiczno-Internis \"All-Med\"", "Site"),
    ("MSD-New Orleans Center for Clinical Research", "Site"),
    ("MSD-Vince and Associates Clin Research Associates", "Site"),
    ("MSD-Liege- A.T.C. S.a.", "Site"),
    ("Brooks Life Sciences", "Azenta"),
    ("Koizumi Pulmonology & Internal Medicine Clinic", "Site"),
    ("MSD-Houston,TX", "site"),
    ("Keikokai Medical", "Site"),
    ("MSD Pulmonary Associates", "Site"),
    ("Uni. Szpital Kliniczny NR 1", "Site"),
    ("Nzoz Centrum Badan Klinicznych", "Site"),
    ("Sekino Hospital", "Site"),
    ("Q2 Solutions, Karl Bremer Hospital", "Q2"),
    ("Centrum Medycyny Oddechowej", "Site"),
    ("Q2 Solutions, Synexus Helderberg Clinical Trials", "Q2"),
    ("Kanazawa Municipal Hospital", "Site"),
    ("Shibasaki Internal Medicine and Pediatrics Clinic", "Site"),
    ("Q2 Solutions, Engelbrecht Research", "Q2"),
    ("Medical Corporation Ocrom Clinic", "Site"),
    ("Lung Clinical Research Unit", "Site"),
    ("Kawarada Clinic", "Site"),
    ("Doujin Memorial Medical Foundation", "Site"),
    ("Tosei General Hospital", "Site"),
    ("Idaimae Minamiyojo Int Clinic", "Site"),
    ("Profil Institute for Clinical Research, Inc.", "Site"),
    ("MSD - London", "site"),
    ("Karl Bremer Hospital - Tiervlei Trial Centre", "Site"),
    ("University Teknologi Mara", "Site"),
    ("Hiramatsu Internal & Respiratory Medicine", "Site"),
    ("Q2 Solutions - SHOP 6, Freeway Plaza", "Q2"),
    ("Nakatani Hospital", "Site"),
    ("Kikuchi Clinic", "Site"),
    ("Yamazaki Internal Medicine Clinic", "Site"),
    ("Q2 Solutions - Dr. Servet Menendez", "Q2"),
    ("Hospital Taiping", "Site"),
    ("Osaki Internal and Respiratory Clinic", "Site"),
    ("Q2 Solutions - Dr. Gerardo Martinez", "Q2"),
    ("Tokyo Center Clinic", "Site"),
    ("Medical Corp Tohda Clinic", "Site"),
    ("Yokohama City Minato Red Cross Hospital", "Site"),
    ("Funaijibiinkoka Clinic", "Site"),
    ("Worldwide Clinical Trials Early Phase Ser LLC", "Site"),
    ("MSD - OLV Aalst", "Site"),
    ("MSD-Prism  Research", "Site"),
    ("MSD - Boston", "MRL - Boston"),
    ("Otogenetics", "Site"),
    ("Northside Hospital", "Site"),
    ("BGI CHOP", "BGI"),
    ("Showa University Hospital", "Site"),
    ("Pharmaron CPC", "Site"),
    ("IPS", "Flagship Biosciences"),
    ("MSD - Berlin", "Site"),
    ("MSD-Gent", "Site"),
    ("Universitair Ziekenhuis Gent", "Site"),
    ("Novum Pharma Research", "Site"),
    ("MSD- Centre Hospitalier Universitaire de Liege", "site"),
    ("MERCK-Maccabi Healthcare Services", "Site"),
    ("Kouwakai Kouwa Medical Clinic", "Site"),
    ("Kono Medical Clinic", "Site"),
    ("Kaiseikai Kita Shin Yokohama Internal Medicine Clinic", "Site"),
    ("Kinki University Hospital", "Site"),
    ("National Mie Hospital", "Site"),
    ("Q2 Solutions - Dr. Guerra Mejia", "Q2"),
    ("Jalan Taming Sari", "Site"),
    ("Inobefunai Clinic", "Site"),
    ("MSD - Orlando Clinic Research Center", "Site"),
    ("Altasciences", "Site"),
    ("Merck Sharp & Dohme, Corp. Oita University Hospital", "Site"),
    ("MSD-Oita", "Site"),
    ("MSD-QPS", "QPS"),
    ("MSD-Clinilabs, INC.", "Site"),
    ("MSD - Department of Medica - Calvary Mater Newcastle", "Site"),
    ("MSD - Clinilabs Inc.", "Site"),
    ("MSD-Charite Research(GmbH)", "Site"),
    ("MSD-Hospital General Universitario 12 de Octubre", "Site"),
    ("MSD - Altasciences Kansas City", "Site"),
    ("MSD - Singapore", "site"),
    ("MSD-Univeritair Ziekenhuis Gent", "Site"),
    ("MSD-Charite Research Organisation GmbH", "Site"),
    ("Q2 Solutions - Inglewood", "Q2"),
    ("MSD-Charity-Universitaetsmedizin", "Site"),
    ("MSD-ProSciento Inc.", "Site"),
    ("MSD-AMR-Lexington", "Site"),
    ("MSD-Medstar Good Samaritan Hospital", "Site"),
    ("MSD-Massachusetts General Hospital", "Site"),
    ("MSD - ProSciento Inc.", "Site"),
    ("MSD-PRA Health Sciences", "ICON"),
    ("MSD-Beth Israel Deaconess Medical Center", "Site"),
    ("MSD - Karolinska University Hospital", "Site"),
    ("MSD - Israel", "Site"),
    ("MSD- Orszagos Koranyi TBC es Pulmonologiai Intezet", "Site"),
    ("MSD- University of Colorado", "Site"),
    ("Monogram Biosciences", "Monogram"),
    ("MSD-Oncology Institute", "Site"),
    ("MSD-Tibor Csoszi", "Site"),
    ("MSD-Hospital General Universitario", "Site"),
    ("MSD-Petz Aladar Megyei Oktato Korhaz", "Site"),
    ("MSD-Weinberg Cancer Institute", "Site"),
    ("MSD-CISSSMC-Hospital Charles-LeMoyne", "Site"),
    ("MSD-Cancer Centre of Ontario", "Site"),
    ("MSD-Global Central Labs", "Site"),
    ("MSD-San Antonio", "Site"),
    ("Covance CRU", "Lab Corp"),
    ("MSD-Woodland Research Northwest LLC", "Site"),
    ("MSD-Centre for the Evaluation of Vaccination", "Site"),
    ("Quest Clinical Research", "Q2"),
    ("MSD-CHRU Lille", "Site"),
    ("Celerion-Nebraska 2", "Celerion"),
    ("MSD - Beth Israel Deaconess Medical Center", "Site"),
    ("MSD-California Clinical Trails Medical Group", "Site"),
    ("MSD-Velocity Clinical Research", "Site"),
    ("MSD-Arensia Exploratory Medicine-Clinical Nephro", "Site"),
    ("MSD-Texas Liver Institute", "Site"),
    ("MSD-MD Clinical Miami", "Site"),
    ("Merck Sharp & Dohme, CORP.", "Merck"),
    ("Shinjo Naika Clinic", "Site"),
    ("MSD-Dana Farber Cancer Institute", "Site"),
    ("Merck Sharp & Dohme- Hungary", "?"),
    ("MSD-AOUS, Immunoterapia Oncologia", "Site"),
    ("MSD-Kingston General Hospital", "Site"),
    ("MSD-Celerion", "Celerion"),
    ("Interpace Pharma Solutions", "Flagship Biosciences?"),
    ("Research Centurion", "Site"),
    ("MSD-QPS-MRA, LLC-Early Phase", "QPS"),
    ("MSD-Maccabi", "Site"),
    ("MSD-SCRI", "Site"),
];

/// Spelling and casing corrections for analysis-type labels. Values outside
/// the table pass through unchanged.
pub(crate) const ANALYSIS: &[(&str, &str)] = &[
    ("RNA analysis", "RNA Analysis"),
    ("Genetic Anaylsis", "Genetic Analysis"),
    ("Correlative", "Correlative"),
    ("Targeted Genotyping", "Targeted Genotyping"),
    ("Genetic analysis (Buccal Swab)", "Genetic Analysis (Buccal Swab)"),
    ("ctDNA", "ctDNA"),
    ("T-cell repertoire (TCR)", "T-cell Repertoire (TCR)"),
    ("T-cell Repertoire (TCR)", "T-cell Repertoire (TCR)"),
    ("T-cell Rpertoire (TCR)", "T-cell Repertoire (TCR)"),
    ("Legacy", "Legacy"),
    ("Genetic analysis", "Genetic Analysis"),
    ("Genetic Analysis (Buccal Swab)", "Genetic Analysis (Buccal Swab)"),
    ("RNA Analysis", "RNA Analysis"),
    ("Blood For RNA Analysis", "RNA Analysis"),
    ("Targeted genotyping", "Targeted Genotyping"),
    ("T-Cell Repertoire (TCR)", "T-cell Repertoire (TCR)"),
    ("CYP2C9 Genotyping", "CYP2C9 Genotyping"),
    ("Future Biomedical Research", "Future Biomedical Research"),
    ("Genetic Analysis", "Genetic Analysis"),
    ("Correlative ", "Correlative"),
    ("Generic Analysis", "Genetic Analysis"),
    ("Genetic Analysis ", "Genetic Analysis"),
    ("Genetoc Analysis", "Genetic Analysis"),
    ("RNA Analysis ", "RNA Analysis"),
];

/// Source codes mapped to specimen types. Used for every row whose source is
/// not the whole-blood sentinel.
pub(crate) const SOURCE: &[(&str, &str)] = &[
    ("10 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("10 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("10.0 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("10.0 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("10.0mL Paxgene DNA", "Whole Blood EDTA - DNA"),
    ("2mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("BC", "Buffy Coat"),
    ("BUC", "Buccal Swab"),
    ("d", "Whole Blood PAXgene - DNA"),
    ("DNA-BUC", "DNA (Buccal Swab)"),
    ("DNA-EP", "DNA"),
    ("DNA-Saliva", "DNA (Saliva)"),
    ("DNA-WB", "DNA"),
    ("EP-DNA\t", "DNA"),
    ("PL", "Plasma"),
    ("RNA-EP", "RNA"),
    ("RNA-WB", "RNA"),
    ("S", "Saliva"),
    ("Whole Blood", "Whole Blood EDTA - DNA"),
    ("Whole Blood PAXgene - DNA", "Whole Blood PAXgene - DNA"),
    ("TISDGHRT", "Tissue"),
    ("EPPL", "Plasma"),
    ("DNA-EPCACL", "DNA"),
    ("DNA-EPCP", "DNA"),
    ("DNA-EPMCACL", "DNA"),
    ("DNA-EPPL", "DNA"),
    ("DNA-LCL", "DNA"),
    ("EPCACL", "DNA"),
    ("EPCL", "DNA"),
    ("EPMCACL", "DNA"),
    ("LCL", "DNA"),
    ("TISBST", "Tissue"),
    ("TISHMTH", "Tissue"),
    ("TISLUNG", "Tissue"),
    ("TISOVY", "Tissue"),
    ("TISSTM", "Tissue"),
];

/// Container-type labels mapped to specimen types, consulted (case
/// insensitively) only when the source code is the whole-blood sentinel.
/// Overlaps with `SOURCE` but is not identical; ambiguous container labels
/// carry explicit manual-review values instead of failing.
pub(crate) const CONTAINER: &[(&str, &str)] = &[
    ("10 mL EDTA", "Whole Blood EDTA - DNA"),
    ("10 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("10 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("10 mL PAXgne RNA", "Whole Blood PAXgene - RNA"),
    ("10 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("10.0 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("10.0 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("10.0 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("10.0 mL Streck Tan BCT", "Whole Blood - Streck Plasma"),
    ("10.0 Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("10.0 Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("10.0mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("10.0mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("10.0mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("10mL PAXgene DNA tube", "Whole Blood PAXgene - DNA"),
    ("10mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("11 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("11 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("11 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("12 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("12 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("12 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("13 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("13 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("13 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("14 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("14 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("14 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("15 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("15 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("15 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("16 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("16 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("16 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("17 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("17 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("17 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("18 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("18 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("18 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("19 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("19 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("19 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("2.0 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("2.0 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("2.0mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("2.5 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("20 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("20 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("20 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("21 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("21 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("21 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("22 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("22 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("22 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("23 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("23 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("23 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("24 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("24 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("24 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("25 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("25 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("25 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("26 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("26 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("26 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("27 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("27 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("27 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("28 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("28 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("28 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("29 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("29 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("29 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("2mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("3.0 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("30 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("30 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("30 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("31 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("31 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("32 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("32 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("33 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("33 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("34 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("34 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("35 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("35 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("36 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("36 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("37 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("37 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("38 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("38 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("39 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("39 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("4.0 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("4.0 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("4.0 mL Purple Top Tubes", "Whole Blood EDTA - DNA"),
    ("4.0 mL Purple TopTube", "Whole Blood EDTA - DNA"),
    ("40 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("40 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("41 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("41 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("42 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("42 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("43 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("43 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("44 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("44 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("45 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("45 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("46 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("46 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("47 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("47 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("48 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("48 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("49 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("49 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("50 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("50 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("51 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("51 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("52 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("52 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("53 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("53 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("54 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("54 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("55 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("55 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("56 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("56 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("57 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("57 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("58 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("59 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("6.0 mL EDTA DNA", "Whole Blood EDTA - DNA"),
    ("6.0 mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("6.0mL Purple Top Tube", "Whole Blood EDTA - DNA"),
    ("60 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("61 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("62 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("63 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("64 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("65 mL Paxgene RNA", "Whole Blood PAXgene - RNA"),
    ("10 mL PAXgene DNA", "Whole Blood PAXgene - DNA"),
    ("10 mL PAXgene RNA", "Whole Blood PAXgene - RNA"),
    ("10 mL Purple Top Tube DNA", "Whole Blood EDTA - DNA"),
    ("3.0 mL Purple Top Tube DNA", "Whole Blood EDTA - DNA"),
    ("4 mL Paxgene DNA", "Whole Blood PAXgene - DNA"),
    ("4.0 mL Purple Top Tube DNA", "Whole Blood EDTA - DNA"),
    ("6.0 mL Purple Top Tube DNA", "Whole Blood EDTA - DNA"),
    ("BloodSpotCard", "Blood Spot Card"),
    ("Micronic 1.4", "use Source Matcode mapping"),
    ("Sarstedt 2.0", "request Specimen Type from Merck"),
    ("Sarstedt 5.0", "request Specimen Type from Merck"),
    ("EPPL", "Plasma"),
    ("DNA-EPCACL", "DNA"),
    ("DNA-EPCP", "DNA"),
    ("DNA-EPMCACL", "DNA"),
    ("DNA-EPPL", "DNA"),
    ("DNA-LCL", "DNA"),
    ("EPCACL", "DNA"),
    ("EPCL", "DNA"),
    ("EPMCACL", "DNA"),
    ("LCL", "DNA"),
    ("TISBST", "Tissue"),
    ("TISHMTH", "Tissue"),
    ("TISLUNG", "Tissue"),
    ("TISOVY", "Tissue"),
    ("TISSTM", "Tissue"),
];

/// The enumerated analysis-type domain. Enforced only when the corresponding
/// validation pass is toggled on.
pub(crate) const ANALYSIS_TYPES: &[&str] = &[
    "Virology",
    "Viremia",
    "Viral Shedding",
    "Viral Resistance",
    "UGT2B17 Genotyping",
    "TOR-BMx",
    "T-cell Repertoire (TCR)",
    "T-cell Evaluation",
    "Targeted Genotyping",
    "TARC",
    "sILT3",
    "RT-PCR (Zika)",
    "RT-PCR (Chikungunya)",
    "RT-PCR",
    "RSV A and B Ab Titers",
    "RSV (SNAb)",
    "RNA Analysis",
    "Receptor Occupancy",
    "Pneumococcal Serotype Eval",
    "Pneumococcal Poly Shed Assess",
    "Pneumococcal Immunogenicity Assay",
    "Pneumococcal Colonization Assess",
    "PK-REL IMI",
    "PK-REL",
    "PK-MK8591",
    "PK-MK8558",
    "PK-MK3402",
    "PK-M9",
    "PK-LNG",
    "PK-Fluoride",
    "PK-FEP",
    "PK-EE",
    "PK - ISL",
    "PK - IRL",
    "PK - DOR",
    "PK",
    "PD-L1",
    "PBMC",
    "MSI",
    "mRNA Profiling",
    "miRNA",
    "Metagenomics",
    "Metabolomics",
    "Metabolome",
    "MDSC Assay",
    "Leukapheresis",
    "Legacy",
    "Influenza Immunogenicity Assay",
    "Immunophenotyping",
    "Immunogenicity Assay (MOPA)",
    "Immunogenicity Assay (MOPA 2)",
    "Immunogenicity Assay (MOPA 1)",
    "Immunogenicity Assay (Hep B)",
    "Immunogenicity Assay (ECL)",
    "Immunogenicity Assay",
    "Immunogenicity (Spike IgG)",
    "Immunogenicity (Residual)",
    "Immunogenicity (Nab)",
    "Immune Profiling (Heparin)",
    "Immune Profiling",
    "IL-10",
    "HPV Type",
    "HLA",
    "HIV-1 RNA",
    "HIV-1 Drug Resistance",
    "HCV RNA",
    "HCV Genotyping",
    "Genetic Analysis (Buccal Swab)",
    "Genetic Analysis",
    "Future Biomedical Research (Saliva)",
    "Future Biomedical Research (Buccal Swab)",
    "Future Biomedical Research",
    "Fresh Tumor Tissue Collection",
    "EBV DNA",
    "DNA Seq",
    "Cytokines",
    "CYP2C9 Genotyping",
    "ctDNA EGFR/ALK",
    "ctDNA (specific)",
    "ctDNA",
    "CTC - Exploratory",
    "CTC",
    "Correlative",
    "CMV - DNA",
    "Citrate Coagulation",
    "C. Difficile",
    "Bone Marrow (RNA)",
    "Bone Marrow (DNA)",
    "Bone Marrow",
    "Biomarkers",
    "B-cell Immortalization",
    "B Cell Isolation",
    "Avidity",
    "AT Test",
    "AR-V7",
    "Archival or Newly Obtained Collection",
    "APOE",
    "Anti-RSV (IgA)",
    "Anti-HPV Antibody Testing",
    "Antibodies",
    "Alzheimer’s Disease Diagnosis",
    "ADA",
    "2C19 Genotyping",
    "TBD",
    "NULL",
];

/// The enumerated specimen-type domain. Enforced only when the corresponding
/// validation pass is toggled on.
pub(crate) const SPECIMEN_TYPES: &[&str] = &[
    "Whole Blood PAXgene - RNA",
    "Whole Blood PAXgene - DNA",
    "Whole Blood EDTA - DNA",
    "Whole Blood EDTA - Cell Pellet",
    "Whole Blood (EDTA)",
    "Urine",
    "Tissue",
    "Stool",
    "Sputum",
    "Solution",
    "Slide Scroll",
    "Slide Holder",
    "Slide",
    "Serum",
    "Saliva",
    "RNA",
    "Plasma Peptide",
    "Plasma",
    "PBMC",
    "Oral Swab",
    "Nasal Wash",
    "Nasal Swab",
    "Middle Ear Fluid",
    "DNA (Urine)",
    "DNA (Saliva)",
    "DNA (EDTA)",
    "DNA (Buccal Swab)",
    "DNA",
    "Cerebrospinal Fluid",
    "cDNA",
    "Buffy Coat",
    "Buccal Swab",
    "Bone Marrow Biopsy",
    "Bone Marrow Aspiration (Heparin)",
    "Bone Marrow Aspiration (EDTA)",
    "Bone Marrow Aspiration",
    "Blood",
    "Block",
    "Biopsy",
    "TBD",
    "NULL",
];

/// Study identifiers belonging to the P3 cohort, which routes to its own
/// pair of export partitions.
pub(crate) const P3_STUDIES: &[&str] = &[
    "MK0000386",
    "MK0000387",
    "MK0431838",
    "MK0431845",
    "MK0431848",
    "MK0822018",
    "MK1029001",
    "MK1029003",
    "MK1029004",
    "MK1029005",
    "MK1029006",
    "MK1029008",
    "MK1029011",
    "MK1029012",
    "MK1029015",
    "MK1029017",
    "MK1075001",
    "MK1092001",
    "MK1439007",
    "MK1439018",
    "MK1439042",
    "MK1439044",
    "MK1439045",
    "MK1439046",
    "MK1439048",
    "MK1439049",
    "MK1439050",
    "MK1439051",
    "MK1439052",
    "MK1439053",
    "MK1439A054",
    "MK1942001",
    "MK1942003",
    "MK1986004",
    "MK2075001",
    "MK2640001",
    "MK2888001",
    "MK3682014",
    "MK3682023",
    "MK3682026",
    "MK3682029",
    "MK3682035",
    "MK3682A018",
    "MK3682A019",
    "MK3682B025",
    "MK3682B030",
    "MK3682B031",
    "MK3682B032",
    "MK3682C028",
    "MK3682C039",
    "MK3682C044",
    "MK3682C045",
    "MK3866001",
    "MK3866002",
    "MK3866005",
    "MK3866006",
    "MK3866008",
    "MK4250001",
    "MK4250005",
    "MK4334001",
    "MK4710001",
    "MK4710002",
    "MK4710003",
    "MK5160001",
    "MK5172052",
    "MK5172058",
    "MK5172062",
    "MK5172068",
    "MK5172074",
    "MK5172078",
    "MK5172080",
    "MK5172081",
    "MK5172082",
    "MK5348015",
    "MK5348046",
    "MK5475001",
    "MK5592097",
    "MK6158001",
    "MK6240001",
    "MK6884001",
    "MK6884002",
    "MK7264024",
    "MK7264025",
    "MK7264026",
    "MK7264028",
    "MK7264032",
    "MK7625A013",
    "MK7655A019",
    "MK7680001",
    "MK7680003",
    "MK8056001",
    "MK8189003",
    "MK8189006",
    "MK8228005",
    "MK8228023",
    "MK8228025",
    "MK8228029",
    "MK8228031",
    "MK8228032",
    "MK8228033",
    "MK8228034",
    "MK8228035",
    "MK8228036",
    "MK8228037",
    "MK8237001",
    "MK8246075",
    "MK8342B069",
    "MK8408004",
    "MK8408010",
    "MK8504001",
    "MK8504002",
    "MK8504003",
    "MK8507001",
    "MK8507002",
    "MK8507005",
    "MK8521004",
    "MK8583001",
    "MK8591002",
    "MK8591003",
    "MK8591005",
    "MK8591006",
    "MK8591007",
    "MK8591009",
    "MK8591010",
    "MK8591011",
    "MK8616038",
    "MK8616101",
    "MK8666001",
    "MK8666002",
    "MK8666003",
    "MK8666004",
    "MK8666005",
    "MK8666006",
    "MK8666008",
    "MK8719001",
    "MK8719002",
    "MK8719003",
    "MK8723001",
    "MK8768001",
    "MK8931016",
    "MK8931030",
    "MK8931032",
    "P04103",
    "V501200",
];

