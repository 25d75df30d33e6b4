//! Static dummy catalog and paper generators, served whenever the
//! question backend cannot be reached so the app keeps working offline.

use chrono::Utc;
use rand::Rng;

use crate::models::{
    ChapterInfo, GenerateQuestionsRequest, GeneratedTest, NeetPaper, NeetSection, Question,
    SubjectInfo, TopicInfo,
};

const NEET_SUBJECTS: [&str; 3] = ["chemistry", "physics", "biology"];
const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

struct QuestionTemplate {
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

pub fn subjects() -> Vec<SubjectInfo> {
    vec![
        subject_info(
            "physics",
            "Physics",
            "Study of matter, energy, and their interactions",
            "#3B82F6",
            "⚛️",
            8,
            45,
        ),
        subject_info(
            "chemistry",
            "Chemistry",
            "Study of substances, their properties, and reactions",
            "#10B981",
            "🧪",
            6,
            38,
        ),
        subject_info(
            "biology",
            "Biology",
            "Study of living organisms and life processes",
            "#8B5CF6",
            "🧬",
            7,
            52,
        ),
        subject_info(
            "mathematics",
            "Mathematics",
            "Study of numbers, quantities, shapes, and patterns",
            "#F59E0B",
            "📐",
            5,
            32,
        ),
    ]
}

pub fn chapters(subject: &str) -> Vec<ChapterInfo> {
    match subject {
        "physics" => vec![
            chapter(
                "mechanics",
                "Mechanics",
                "Study of motion and forces",
                &["Kinematics", "Newton's Laws", "Work and Energy", "Momentum", "Circular Motion"],
                150,
                "medium",
            ),
            chapter(
                "waves",
                "Waves and Oscillations",
                "Study of wave phenomena and simple harmonic motion",
                &["Simple Harmonic Motion", "Wave Properties", "Sound Waves", "Light Waves", "Interference"],
                120,
                "medium",
            ),
            chapter(
                "electricity",
                "Electricity and Magnetism",
                "Study of electric and magnetic fields",
                &["Electric Field", "Electric Potential", "Current Electricity", "Magnetic Field", "Electromagnetic Induction"],
                180,
                "hard",
            ),
            chapter(
                "optics",
                "Optics",
                "Study of light and its properties",
                &["Reflection", "Refraction", "Lenses", "Optical Instruments", "Wave Optics"],
                100,
                "medium",
            ),
            chapter(
                "thermodynamics",
                "Thermodynamics",
                "Study of heat and energy transfer",
                &["Laws of Thermodynamics", "Heat Transfer", "Kinetic Theory", "Entropy", "Thermal Properties"],
                90,
                "hard",
            ),
            chapter(
                "modern-physics",
                "Modern Physics",
                "Study of quantum mechanics and relativity",
                &["Photoelectric Effect", "Atomic Structure", "Nuclear Physics", "Relativity", "Quantum Mechanics"],
                110,
                "hard",
            ),
            chapter(
                "fluid-mechanics",
                "Fluid Mechanics",
                "Study of fluids and their behavior",
                &["Fluid Properties", "Bernoulli's Principle", "Viscosity", "Surface Tension", "Fluid Dynamics"],
                80,
                "medium",
            ),
            chapter(
                "electronics",
                "Electronics",
                "Study of electronic devices and circuits",
                &["Semiconductors", "Diodes", "Transistors", "Logic Gates", "Digital Electronics"],
                95,
                "hard",
            ),
        ],
        "chemistry" => vec![
            chapter(
                "physical",
                "Physical Chemistry",
                "Study of physical principles underlying chemical phenomena",
                &["Atomic Structure", "Chemical Bonding", "Chemical Kinetics", "Thermodynamics", "Electrochemistry"],
                160,
                "hard",
            ),
            chapter(
                "organic",
                "Organic Chemistry",
                "Study of carbon compounds and their reactions",
                &["Hydrocarbons", "Alcohols and Ethers", "Aldehydes and Ketones", "Carboxylic Acids", "Amines"],
                200,
                "medium",
            ),
            chapter(
                "inorganic",
                "Inorganic Chemistry",
                "Study of non-carbon compounds and elements",
                &["Periodic Table", "Chemical Bonding", "Coordination Compounds", "Metallurgy", "Environmental Chemistry"],
                140,
                "medium",
            ),
            chapter(
                "analytical",
                "Analytical Chemistry",
                "Study of methods for determining chemical composition",
                &["Qualitative Analysis", "Quantitative Analysis", "Instrumental Methods", "Titrations", "Spectroscopy"],
                90,
                "medium",
            ),
            chapter(
                "biochemistry",
                "Biochemistry",
                "Study of chemical processes in living organisms",
                &["Biomolecules", "Enzymes", "Metabolism", "Nucleic Acids", "Proteins"],
                110,
                "hard",
            ),
            chapter(
                "polymer",
                "Polymer Chemistry",
                "Study of large molecules and their properties",
                &["Polymerization", "Polymer Properties", "Synthetic Polymers", "Natural Polymers", "Polymer Applications"],
                75,
                "medium",
            ),
        ],
        "biology" => vec![
            chapter(
                "cell",
                "Cell Biology",
                "Study of cells and their functions",
                &["Cell Theory", "Cell Organelles", "Cell Division", "Cell Transport", "Cell Communication"],
                130,
                "medium",
            ),
            chapter(
                "genetics",
                "Genetics",
                "Study of heredity and variation",
                &["Heredity", "Mendel's Laws", "Chromosomes", "DNA and RNA", "Genetic Disorders"],
                160,
                "medium",
            ),
            chapter(
                "physiology",
                "Human Physiology",
                "Study of human body functions",
                &["Digestive System", "Respiratory System", "Circulatory System", "Nervous System", "Endocrine System"],
                180,
                "medium",
            ),
            chapter(
                "ecology",
                "Ecology",
                "Study of organisms and their environment",
                &["Ecosystems", "Population Ecology", "Community Ecology", "Biodiversity", "Environmental Issues"],
                120,
                "easy",
            ),
            chapter(
                "evolution",
                "Evolution",
                "Study of biological evolution and adaptation",
                &["Natural Selection", "Speciation", "Evidence of Evolution", "Human Evolution", "Adaptation"],
                100,
                "medium",
            ),
            chapter(
                "microbiology",
                "Microbiology",
                "Study of microorganisms",
                &["Bacteria", "Viruses", "Fungi", "Protozoa", "Microbial Diseases"],
                110,
                "medium",
            ),
            chapter(
                "biotechnology",
                "Biotechnology",
                "Study of biological applications in technology",
                &["Genetic Engineering", "Recombinant DNA", "Biotechnology Applications", "Bioinformatics", "Ethical Issues"],
                85,
                "hard",
            ),
        ],
        "mathematics" => vec![
            chapter(
                "algebra",
                "Algebra",
                "Study of mathematical symbols and rules",
                &["Linear Equations", "Quadratic Equations", "Matrices", "Determinants", "Complex Numbers"],
                140,
                "medium",
            ),
            chapter(
                "calculus",
                "Calculus",
                "Study of continuous change",
                &["Limits", "Differentiation", "Integration", "Applications", "Series"],
                160,
                "hard",
            ),
            chapter(
                "geometry",
                "Geometry",
                "Study of shapes and spatial relationships",
                &["Coordinate Geometry", "Trigonometry", "3D Geometry", "Vectors", "Conic Sections"],
                120,
                "medium",
            ),
            chapter(
                "statistics",
                "Statistics",
                "Study of data collection and analysis",
                &["Descriptive Statistics", "Probability", "Random Variables", "Hypothesis Testing", "Regression"],
                100,
                "medium",
            ),
            chapter(
                "number-theory",
                "Number Theory",
                "Study of properties of numbers",
                &["Divisibility", "Prime Numbers", "Congruences", "Diophantine Equations", "Cryptography"],
                80,
                "hard",
            ),
        ],
        _ => Vec::new(),
    }
}

pub fn topics(subject: &str, chapter: &str) -> Vec<TopicInfo> {
    match (subject, chapter) {
        ("physics", "mechanics") => vec![
            topic(
                "kinematics",
                "Kinematics",
                "Study of motion without considering forces",
                &["Motion in a straight line", "Motion in a plane", "Projectile motion", "Circular motion"],
                40,
                "medium",
            ),
            topic(
                "newtons-laws",
                "Newton's Laws",
                "Fundamental laws governing motion",
                &["First law", "Second law", "Third law", "Applications"],
                35,
                "medium",
            ),
            topic(
                "work-energy",
                "Work and Energy",
                "Study of work, energy, and power",
                &["Work done by force", "Kinetic energy", "Potential energy", "Conservation of energy"],
                30,
                "medium",
            ),
            topic(
                "momentum",
                "Momentum",
                "Study of linear and angular momentum",
                &["Linear momentum", "Conservation of momentum", "Collisions", "Angular momentum"],
                25,
                "hard",
            ),
            topic(
                "circular-motion",
                "Circular Motion",
                "Study of motion in circular paths",
                &["Uniform circular motion", "Centripetal force", "Banking of roads", "Satellite motion"],
                20,
                "hard",
            ),
        ],
        ("physics", "waves") => vec![
            topic(
                "shm",
                "Simple Harmonic Motion",
                "Study of oscillatory motion",
                &["Time period and frequency", "Energy in SHM", "Damped oscillations", "Forced oscillations"],
                25,
                "medium",
            ),
            topic(
                "wave-properties",
                "Wave Properties",
                "Fundamental properties of waves",
                &["Wave characteristics", "Wave equation", "Wave speed", "Wave energy"],
                20,
                "medium",
            ),
            topic(
                "sound-waves",
                "Sound Waves",
                "Study of sound and its properties",
                &["Sound characteristics", "Doppler effect", "Resonance", "Musical instruments"],
                30,
                "medium",
            ),
            topic(
                "light-waves",
                "Light Waves",
                "Study of light as a wave",
                &["Wave nature of light", "Polarization", "Diffraction", "Interference"],
                25,
                "hard",
            ),
            topic(
                "interference",
                "Interference",
                "Study of wave interference patterns",
                &["Constructive interference", "Destructive interference", "Young's experiment", "Thin films"],
                20,
                "hard",
            ),
        ],
        ("chemistry", "physical") => vec![
            topic(
                "atomic-structure",
                "Atomic Structure",
                "Study of atom structure and properties",
                &["Electronic configuration", "Quantum numbers", "Atomic orbitals", "Periodic trends"],
                35,
                "hard",
            ),
            topic(
                "chemical-bonding",
                "Chemical Bonding",
                "Study of how atoms combine",
                &["Ionic bonding", "Covalent bonding", "Metallic bonding", "Hybridization"],
                40,
                "hard",
            ),
            topic(
                "chemical-kinetics",
                "Chemical Kinetics",
                "Study of reaction rates",
                &["Rate of reaction", "Factors affecting rate", "Rate laws", "Activation energy"],
                30,
                "hard",
            ),
            topic(
                "thermodynamics",
                "Thermodynamics",
                "Study of energy changes in reactions",
                &["First law", "Second law", "Entropy", "Free energy"],
                35,
                "hard",
            ),
            topic(
                "electrochemistry",
                "Electrochemistry",
                "Study of electrical aspects of reactions",
                &["Electrochemical cells", "Electrolysis", "Conductivity", "Corrosion"],
                20,
                "hard",
            ),
        ],
        ("chemistry", "organic") => vec![
            topic(
                "hydrocarbons",
                "Hydrocarbons",
                "Study of compounds containing only carbon and hydrogen",
                &["Alkanes", "Alkenes", "Alkynes", "Aromatic hydrocarbons"],
                45,
                "medium",
            ),
            topic(
                "alcohols-ethers",
                "Alcohols and Ethers",
                "Study of oxygen-containing organic compounds",
                &["Alcohols", "Ethers", "Preparation", "Reactions"],
                35,
                "medium",
            ),
            topic(
                "aldehydes-ketones",
                "Aldehydes and Ketones",
                "Study of carbonyl compounds",
                &["Preparation", "Reactions", "Nucleophilic addition", "Oxidation-reduction"],
                40,
                "medium",
            ),
            topic(
                "carboxylic-acids",
                "Carboxylic Acids",
                "Study of organic acids",
                &["Preparation", "Reactions", "Derivatives", "Acidity"],
                35,
                "medium",
            ),
            topic(
                "amines",
                "Amines",
                "Study of nitrogen-containing organic compounds",
                &["Classification", "Preparation", "Reactions", "Basicity"],
                30,
                "medium",
            ),
        ],
        ("biology", "cell") => vec![
            topic(
                "cell-theory",
                "Cell Theory",
                "Fundamental principles of cell biology",
                &["Cell organelles", "Cell membrane", "Cell division", "Cell communication"],
                35,
                "medium",
            ),
            topic(
                "cell-organelles",
                "Cell Organelles",
                "Study of cell structures and functions",
                &["Nucleus", "Mitochondria", "Endoplasmic reticulum", "Golgi apparatus"],
                30,
                "medium",
            ),
            topic(
                "cell-division",
                "Cell Division",
                "Study of how cells reproduce",
                &["Mitosis", "Meiosis", "Cell cycle", "Regulation"],
                35,
                "medium",
            ),
            topic(
                "cell-transport",
                "Cell Transport",
                "Study of movement across cell membranes",
                &["Diffusion", "Osmosis", "Active transport", "Endocytosis"],
                25,
                "medium",
            ),
            topic(
                "cell-communication",
                "Cell Communication",
                "Study of cell signaling",
                &["Signal transduction", "Receptors", "Hormones", "Neurotransmitters"],
                20,
                "hard",
            ),
        ],
        ("biology", "genetics") => vec![
            topic(
                "heredity",
                "Heredity",
                "Study of inheritance patterns",
                &["Mendel's laws", "Inheritance patterns", "Pedigree analysis", "Genetic disorders"],
                40,
                "medium",
            ),
            topic(
                "mendels-laws",
                "Mendel's Laws",
                "Fundamental laws of inheritance",
                &["Law of segregation", "Law of independent assortment", "Monohybrid cross", "Dihybrid cross"],
                35,
                "medium",
            ),
            topic(
                "chromosomes",
                "Chromosomes",
                "Study of chromosome structure and function",
                &["Chromosome structure", "Sex chromosomes", "Chromosomal disorders", "Linkage"],
                30,
                "medium",
            ),
            topic(
                "dna-rna",
                "DNA and RNA",
                "Study of genetic material",
                &["DNA structure", "DNA replication", "Transcription", "Translation"],
                35,
                "hard",
            ),
            topic(
                "genetic-disorders",
                "Genetic Disorders",
                "Study of inherited diseases",
                &["Single gene disorders", "Chromosomal disorders", "Multifactorial disorders", "Genetic counseling"],
                20,
                "medium",
            ),
        ],
        _ => Vec::new(),
    }
}

/// Builds a paper from canned templates, cycling them until the
/// requested count is reached. The canonical answer is the full text of
/// the correct option so the grader works on generated papers too.
pub fn generate_questions(request: &GenerateQuestionsRequest) -> GeneratedTest {
    let templates = question_templates(&request.subject);
    let mut rng = rand::rng();

    let mut questions = Vec::with_capacity(request.num_questions as usize);
    for i in 0..request.num_questions as usize {
        let template = &templates[i % templates.len()];
        questions.push(Question {
            id: format!("{}_q_{}", request.subject, i + 1),
            subject: Some(request.subject.clone()),
            chapter: pick(&mut rng, &request.chapters),
            topic: pick(&mut rng, &request.topics),
            difficulty: Some(DIFFICULTIES[rng.random_range(0..DIFFICULTIES.len())].to_string()),
            question: template.question.to_string(),
            options: template.options.iter().map(|s| s.to_string()).collect(),
            answer: template.options[template.correct].to_string(),
            marks: request.marks_per_question,
            explanation: Some(template.explanation.to_string()),
            image_markdown: None,
            table_html: None,
            question_type: None,
            time_to_solve: Some(rng.random_range(60..180)),
        });
    }

    GeneratedTest {
        subject: request.subject.clone(),
        total_questions: request.num_questions,
        total_marks: request.num_questions * request.marks_per_question,
        questions,
        generated_at: Utc::now(),
    }
}

/// Builds the mock NEET paper: 60 questions of 4 marks per subject,
/// 200 minutes total.
pub fn generate_neet_paper(requested_subjects: Option<&[String]>) -> NeetPaper {
    let subjects: Vec<String> = match requested_subjects {
        Some(list) if !list.is_empty() => list.to_vec(),
        _ => NEET_SUBJECTS.iter().map(|s| s.to_string()).collect(),
    };

    let sections = subjects
        .iter()
        .map(|subject| NeetSection {
            subject: subject.clone(),
            questions: 60,
            marks: 240,
            time_limit: 67,
        })
        .collect();

    let mut questions = Vec::new();
    for subject in &subjects {
        let chapter_ids: Vec<String> = chapters(subject).into_iter().map(|c| c.id).collect();
        let section = generate_questions(&GenerateQuestionsRequest {
            subject: subject.clone(),
            chapters: chapter_ids,
            topics: Vec::new(),
            num_questions: 60,
            marks_per_question: 4,
            chapter_weights: Vec::new(),
            exclude_questions: Vec::new(),
        });
        questions.extend(section.questions);
    }

    NeetPaper {
        exam_name: "NEET Mock Test".to_string(),
        subjects,
        total_questions: 180,
        total_marks: 720,
        duration: 200,
        sections,
        questions,
        generated_at: Utc::now(),
        instructions: vec![
            "This is a mock NEET examination".to_string(),
            "Total time: 3 hours 20 minutes".to_string(),
            "Each question carries 4 marks".to_string(),
            "Negative marking: -1 for wrong answer".to_string(),
            "No negative marking for unattempted questions".to_string(),
        ],
    }
}

fn subject_info(
    id: &str,
    name: &str,
    description: &str,
    color: &str,
    icon: &str,
    total_chapters: u32,
    total_topics: u32,
) -> SubjectInfo {
    SubjectInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        total_chapters,
        total_topics,
    }
}

fn chapter(
    id: &str,
    name: &str,
    description: &str,
    topics: &[&str],
    total_questions: u32,
    difficulty: &str,
) -> ChapterInfo {
    ChapterInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        total_questions,
        difficulty: difficulty.to_string(),
    }
}

fn topic(
    id: &str,
    name: &str,
    description: &str,
    subtopics: &[&str],
    total_questions: u32,
    difficulty: &str,
) -> TopicInfo {
    TopicInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        subtopics: subtopics.iter().map(|t| t.to_string()).collect(),
        total_questions,
        difficulty: difficulty.to_string(),
    }
}

fn pick(rng: &mut impl Rng, values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values[rng.random_range(0..values.len())].clone())
    }
}

fn question_templates(subject: &str) -> &'static [QuestionTemplate] {
    match subject {
        "chemistry" => &CHEMISTRY_TEMPLATES,
        "biology" => &BIOLOGY_TEMPLATES,
        // Mathematics has no canned templates yet; physics doubles as
        // the catch-all, as the original dataset did.
        _ => &PHYSICS_TEMPLATES,
    }
}

static PHYSICS_TEMPLATES: [QuestionTemplate; 3] = [
    QuestionTemplate {
        question: "A particle moves with velocity v = 2t + 3 m/s. What is the displacement after 5 seconds?",
        options: ["25 m", "30 m", "35 m", "40 m"],
        correct: 2,
        explanation: "Displacement = ∫v dt = ∫(2t + 3) dt = t² + 3t. At t = 5s, displacement = 25 + 15 = 40 m",
    },
    QuestionTemplate {
        question: "What is the SI unit of electric field?",
        options: ["N/C", "V/m", "J/C", "A/m"],
        correct: 0,
        explanation: "Electric field is force per unit charge, so its SI unit is N/C (Newton per Coulomb)",
    },
    QuestionTemplate {
        question: "The time period of a simple pendulum depends on:",
        options: ["Mass of bob", "Length of string", "Amplitude of oscillation", "Material of bob"],
        correct: 1,
        explanation: "Time period T = 2π√(l/g), so it depends only on length and acceleration due to gravity",
    },
];

static CHEMISTRY_TEMPLATES: [QuestionTemplate; 3] = [
    QuestionTemplate {
        question: "What is the oxidation state of Cr in K₂Cr₂O₇?",
        options: ["+3", "+6", "+4", "+5"],
        correct: 1,
        explanation: "In K₂Cr₂O₇, K has +1, O has -2. Let Cr be x. Then 2(+1) + 2x + 7(-2) = 0. Solving, x = +6",
    },
    QuestionTemplate {
        question: "Which of the following is a strong acid?",
        options: ["CH₃COOH", "HCl", "H₂CO₃", "HCN"],
        correct: 1,
        explanation: "HCl is a strong acid that completely dissociates in water",
    },
    QuestionTemplate {
        question: "What is the hybridization of carbon in CH₄?",
        options: ["sp", "sp²", "sp³", "sp³d"],
        correct: 2,
        explanation: "Carbon in CH₄ has 4 bonding pairs, so it uses sp³ hybridization",
    },
];

static BIOLOGY_TEMPLATES: [QuestionTemplate; 3] = [
    QuestionTemplate {
        question: "Which organelle is responsible for protein synthesis?",
        options: ["Mitochondria", "Ribosomes", "Golgi apparatus", "Endoplasmic reticulum"],
        correct: 1,
        explanation: "Ribosomes are the sites of protein synthesis in cells",
    },
    QuestionTemplate {
        question: "What is the function of red blood cells?",
        options: ["Fight infection", "Transport oxygen", "Produce antibodies", "Clot blood"],
        correct: 1,
        explanation: "Red blood cells contain hemoglobin which transports oxygen from lungs to tissues",
    },
    QuestionTemplate {
        question: "Which of the following is a sex-linked trait?",
        options: ["Blood type", "Eye color", "Color blindness", "Height"],
        correct: 2,
        explanation: "Color blindness is a sex-linked trait carried on the X chromosome",
    },
];
